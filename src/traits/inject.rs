//! Single-dependency constructor injection.

use std::sync::Arc;

/// Constructor taking exactly one resolved dependency.
///
/// Registering `Impl` with dependency `D` requires `Impl: Inject<D>`; the
/// registry resolves `D` first and hands the shared instance to [`inject`].
///
/// [`inject`]: Inject::inject
///
/// # Examples
///
/// ```rust
/// use ioc_registry::Inject;
/// use std::sync::Arc;
///
/// trait Logger: Send + Sync {}
///
/// struct HardwareDecoder {
///     logger: Arc<dyn Logger>,
/// }
///
/// impl Inject<dyn Logger> for HardwareDecoder {
///     fn inject(logger: Arc<dyn Logger>) -> Self {
///         HardwareDecoder { logger }
///     }
/// }
/// ```
pub trait Inject<D: ?Sized + 'static>: Sized {
    /// Builds the implementation around its already-constructed dependency.
    fn inject(dependency: Arc<D>) -> Self;
}
