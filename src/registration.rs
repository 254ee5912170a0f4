//! Factory entries and type-erased constructors.

use std::any::Any;
use std::sync::Arc;

use crate::error::{IocError, IocResult};
use crate::key::{key_of, Key};
use crate::traits::{Implements, Inject};

// Type-erased instance: always a `Box<Arc<I>>` for the key it was built under
pub(crate) type AnyService = Box<dyn Any + Send + Sync>;

pub(crate) type Ctor = Box<dyn Fn(Option<AnyService>) -> IocResult<AnyService> + Send + Sync>;

#[cfg(feature = "ahash")]
pub(crate) type EntryMap = std::collections::HashMap<Key, FactoryEntry, ahash::RandomState>;
#[cfg(not(feature = "ahash"))]
pub(crate) type EntryMap = std::collections::HashMap<Key, FactoryEntry>;

/// Constructor plus dependency identity for one registered service
pub(crate) struct FactoryEntry {
    pub(crate) ctor: Ctor,
    /// `None` is the no-dependency sentinel
    pub(crate) dependency: Option<Key>,
    /// Implementation type name for diagnostics
    pub(crate) impl_name: &'static str,
}

impl FactoryEntry {
    /// Entry that default-constructs `Impl` and ignores any dependency argument.
    pub(crate) fn without_dependency<I, Impl>() -> Self
    where
        I: ?Sized + Send + Sync + 'static,
        Impl: Implements<I> + Default,
    {
        Self {
            ctor: Box::new(|_: Option<AnyService>| -> IocResult<AnyService> {
                let service = <Impl as Implements<I>>::into_service(Arc::new(Impl::default()));
                Ok(Box::new(service) as AnyService)
            }),
            dependency: None,
            impl_name: std::any::type_name::<Impl>(),
        }
    }

    /// Entry that builds `Impl` from an already-resolved `D`.
    pub(crate) fn with_dependency<I, Impl, D>() -> Self
    where
        I: ?Sized + Send + Sync + 'static,
        Impl: Implements<I> + Inject<D>,
        D: ?Sized + Send + Sync + 'static,
    {
        Self {
            ctor: Box::new(|dependency: Option<AnyService>| -> IocResult<AnyService> {
                let dependency = dependency
                    .ok_or(IocError::ServiceNotAvailable(std::any::type_name::<D>()))
                    .and_then(downcast::<D>)?;
                let service = <Impl as Implements<I>>::into_service(Arc::new(Impl::inject(dependency)));
                Ok(Box::new(service) as AnyService)
            }),
            dependency: Some(key_of::<D>()),
            impl_name: std::any::type_name::<Impl>(),
        }
    }

    #[inline]
    pub(crate) fn construct(&self, dependency: Option<AnyService>) -> IocResult<AnyService> {
        (self.ctor)(dependency)
    }
}

/// Recovers the shared handle stored by a constructor registered under `T`.
pub(crate) fn downcast<T: ?Sized + Send + Sync + 'static>(any: AnyService) -> IocResult<Arc<T>> {
    any.downcast::<Arc<T>>()
        .map(|boxed| *boxed)
        .map_err(|_| IocError::TypeMismatch(std::any::type_name::<T>()))
}
