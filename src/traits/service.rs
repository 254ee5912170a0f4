//! Subtype constraint between an implementation and its interface.

use std::sync::Arc;

/// Marks `Self` as an implementation of the service interface `I`.
///
/// This is the compile-time constraint behind every registration: a binding
/// of `I` to `Impl` only type-checks when `Impl: Implements<I>`. Every type
/// implements itself; trait-object interfaces get their impls from
/// [`implements!`](crate::implements).
///
/// # Examples
///
/// ```rust
/// use ioc_registry::{implements, Implements};
/// use std::sync::Arc;
///
/// trait Logger: Send + Sync {
///     fn log(&self, message: &str) -> String;
/// }
///
/// #[derive(Default)]
/// struct FileLogger;
///
/// impl Logger for FileLogger {
///     fn log(&self, message: &str) -> String {
///         format!("file: {}", message)
///     }
/// }
///
/// implements!(FileLogger => dyn Logger);
///
/// let logger = <FileLogger as Implements<dyn Logger>>::into_service(Arc::new(FileLogger));
/// assert_eq!(logger.log("hi"), "file: hi");
/// ```
pub trait Implements<I: ?Sized + 'static>: Send + Sync + 'static {
    /// Converts a shared implementation into a shared handle of the interface.
    fn into_service(self: Arc<Self>) -> Arc<I>;
}

impl<T: Send + Sync + 'static> Implements<T> for T {
    #[inline]
    fn into_service(self: Arc<Self>) -> Arc<T> {
        self
    }
}

/// Declares that a concrete type implements one or more trait-object interfaces.
///
/// `implements!(HardwareDecoder => dyn Decoder)` expands to an
/// [`Implements<dyn Decoder>`](crate::Implements) impl whose conversion is the
/// ordinary unsizing coercion, so it only compiles when the type really
/// implements the trait.
#[macro_export]
macro_rules! implements {
    ($concrete:ty => $($interface:ty),+ $(,)?) => {
        $(
            impl $crate::Implements<$interface> for $concrete {
                #[inline]
                fn into_service(self: ::std::sync::Arc<Self>) -> ::std::sync::Arc<$interface> {
                    self
                }
            }
        )+
    };
}
