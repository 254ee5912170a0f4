//! Observation hooks for registry events.
//!
//! Observers are called synchronously from registration, removal and
//! resolution. Keep implementations lightweight.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, trace, warn};

use crate::error::IocError;
use crate::key::Key;

/// Observer trait for registry events.
///
/// Only the resolution hooks are required; registration hooks default to
/// no-ops.
///
/// # Examples
///
/// ```
/// use ioc_registry::{IocError, Key, RegistryObserver, ServiceRegistry};
/// use std::sync::{Arc, Mutex};
/// use std::time::Duration;
///
/// #[derive(Default)]
/// struct Recorder(Mutex<Vec<String>>);
///
/// impl RegistryObserver for Recorder {
///     fn resolving(&self, key: &Key, depth: usize) {
///         self.0.lock().unwrap().push(format!("{}>{}", depth, key.display_name()));
///     }
///
///     fn resolved(&self, key: &Key, _elapsed: Duration) {
///         self.0.lock().unwrap().push(format!("<{}", key.display_name()));
///     }
///
///     fn failed(&self, key: &Key, error: &IocError) {
///         self.0.lock().unwrap().push(format!("!{} {}", key.display_name(), error));
///     }
/// }
///
/// let recorder = Arc::new(Recorder::default());
/// let mut registry = ServiceRegistry::new();
/// registry.add_observer(recorder.clone());
///
/// let _ = registry.get_service::<u8>();
/// assert_eq!(*recorder.0.lock().unwrap(), vec!["!u8 ServiceNotAvailable".to_string()]);
/// ```
pub trait RegistryObserver: Send + Sync {
    /// Called after a factory has been stored.
    fn registered(&self, key: &Key, dependency: Option<&Key>) {
        let _ = (key, dependency);
    }

    /// Called after a factory has been removed.
    fn removed(&self, key: &Key) {
        let _ = key;
    }

    /// Called before the service (and its dependency) is constructed.
    ///
    /// `depth` is 1 for the requested service and grows along the dependency
    /// chain.
    fn resolving(&self, key: &Key, depth: usize);

    /// Called after the service's constructor returned.
    fn resolved(&self, key: &Key, elapsed: Duration);

    /// Called once when a top-level resolution fails.
    fn failed(&self, key: &Key, error: &IocError);
}

#[derive(Default, Clone)]
pub(crate) struct Observers {
    observers: Vec<Arc<dyn RegistryObserver>>,
}

impl Observers {
    pub(crate) fn add(&mut self, observer: Arc<dyn RegistryObserver>) {
        self.observers.push(observer);
    }

    #[inline]
    pub(crate) fn has_observers(&self) -> bool {
        !self.observers.is_empty()
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.observers.len()
    }

    pub(crate) fn registered(&self, key: &Key, dependency: Option<&Key>) {
        for observer in &self.observers {
            observer.registered(key, dependency);
        }
    }

    pub(crate) fn removed(&self, key: &Key) {
        for observer in &self.observers {
            observer.removed(key);
        }
    }

    #[inline]
    pub(crate) fn resolving(&self, key: &Key, depth: usize) {
        for observer in &self.observers {
            observer.resolving(key, depth);
        }
    }

    #[inline]
    pub(crate) fn resolved(&self, key: &Key, elapsed: Duration) {
        for observer in &self.observers {
            observer.resolved(key, elapsed);
        }
    }

    pub(crate) fn failed(&self, key: &Key, error: &IocError) {
        for observer in &self.observers {
            observer.failed(key, error);
        }
    }
}

/// Observer that forwards registry events to `tracing`.
///
/// Resolution steps are emitted at `DEBUG`/`TRACE`, failures at `WARN`, all
/// under the `ioc_registry` target with a `service` field.
///
/// ```
/// use ioc_registry::{ServiceRegistry, TracingObserver};
/// use std::sync::Arc;
///
/// let mut registry = ServiceRegistry::new();
/// registry.add_observer(Arc::new(TracingObserver::new()));
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl TracingObserver {
    pub fn new() -> Self {
        Self
    }
}

impl RegistryObserver for TracingObserver {
    fn registered(&self, key: &Key, dependency: Option<&Key>) {
        trace!(
            target: "ioc_registry",
            service = key.display_name(),
            dependency = dependency.map(Key::display_name).unwrap_or("-"),
            "service registered"
        );
    }

    fn removed(&self, key: &Key) {
        trace!(target: "ioc_registry", service = key.display_name(), "service removed");
    }

    fn resolving(&self, key: &Key, depth: usize) {
        debug!(target: "ioc_registry", service = key.display_name(), depth, "resolving service");
    }

    fn resolved(&self, key: &Key, elapsed: Duration) {
        debug!(
            target: "ioc_registry",
            service = key.display_name(),
            elapsed_us = elapsed.as_micros() as u64,
            "service constructed"
        );
    }

    fn failed(&self, key: &Key, error: &IocError) {
        warn!(
            target: "ioc_registry",
            service = key.display_name(),
            error = error.identifier(),
            details = ?error,
            "service resolution failed"
        );
    }
}
