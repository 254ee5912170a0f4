//! The service registry and its resolution algorithm.

use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, warn};

use crate::config::{DuplicatePolicy, RegistryConfig};
use crate::error::{IocError, IocResult};
use crate::internal::ResolutionChain;
use crate::key::{key_of, Key};
use crate::observer::{Observers, RegistryObserver, TracingObserver};
use crate::registration::{downcast, AnyService, EntryMap, FactoryEntry};
use crate::traits::{Implements, Inject};

/// Registry mapping service interfaces to implementation factories.
///
/// Every resolution builds a fresh instance (transient lifetime); the
/// registry keeps factories only, never instances. A service depends on at
/// most one other registered service, which is always constructed first.
///
/// # Examples
///
/// ```rust
/// use ioc_registry::{implements, Inject, IocError, ServiceRegistry};
/// use std::sync::Arc;
///
/// trait Logger: Send + Sync {
///     fn name(&self) -> &'static str;
/// }
///
/// trait Decoder: Send + Sync {
///     fn decode(&self) -> String;
/// }
///
/// #[derive(Default)]
/// struct FileLogger;
/// impl Logger for FileLogger {
///     fn name(&self) -> &'static str { "file" }
/// }
/// implements!(FileLogger => dyn Logger);
///
/// struct HardwareDecoder { logger: Arc<dyn Logger> }
/// impl Decoder for HardwareDecoder {
///     fn decode(&self) -> String { format!("decoded via {}", self.logger.name()) }
/// }
/// impl Inject<dyn Logger> for HardwareDecoder {
///     fn inject(logger: Arc<dyn Logger>) -> Self { HardwareDecoder { logger } }
/// }
/// implements!(HardwareDecoder => dyn Decoder);
///
/// let mut registry = ServiceRegistry::new();
/// registry.register_service::<dyn Logger, FileLogger>();
/// registry.register_service_with::<dyn Decoder, HardwareDecoder, dyn Logger>();
///
/// let decoder = registry.get_service::<dyn Decoder>().unwrap();
/// assert_eq!(decoder.decode(), "decoded via file");
///
/// registry.remove_service::<dyn Logger>();
/// assert!(matches!(
///     registry.get_service::<dyn Decoder>(),
///     Err(IocError::ServiceNotAvailable(_))
/// ));
/// ```
pub struct ServiceRegistry {
    entries: EntryMap,
    config: RegistryConfig,
    observers: Observers,
}

impl ServiceRegistry {
    /// Creates an empty registry with the default configuration.
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    /// Creates an empty registry with the given configuration.
    pub fn with_config(config: RegistryConfig) -> Self {
        let mut observers = Observers::default();
        if config.trace_resolution {
            observers.add(Arc::new(TracingObserver::new()));
        }

        Self {
            entries: EntryMap::default(),
            config,
            observers,
        }
    }

    /// The configuration this registry was created with.
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Adds an observer notified of registration and resolution events.
    pub fn add_observer(&mut self, observer: Arc<dyn RegistryObserver>) {
        self.observers.add(observer);
    }

    // ----- Registration -----

    /// Registers `Impl` as the implementation of `I`, with no dependency.
    ///
    /// `Impl` is default-constructed on every resolution.
    pub fn register_service<I, Impl>(&mut self)
    where
        I: ?Sized + Send + Sync + 'static,
        Impl: Implements<I> + Default,
    {
        self.insert(key_of::<I>(), FactoryEntry::without_dependency::<I, Impl>());
    }

    /// Registers `Impl` as the implementation of `I`, built from a resolved `D`.
    ///
    /// `D` is looked up when `I` is resolved, not now; it may be registered
    /// later.
    pub fn register_service_with<I, Impl, D>(&mut self)
    where
        I: ?Sized + Send + Sync + 'static,
        Impl: Implements<I> + Inject<D>,
        D: ?Sized + Send + Sync + 'static,
    {
        self.insert(key_of::<I>(), FactoryEntry::with_dependency::<I, Impl, D>());
    }

    fn insert(&mut self, key: Key, entry: FactoryEntry) {
        if let Some(existing) = self.entries.get(&key) {
            match self.config.duplicate_policy {
                DuplicatePolicy::KeepFirst => {
                    warn!(
                        service = key.display_name(),
                        kept = existing.impl_name,
                        ignored = entry.impl_name,
                        "service already registered, keeping existing factory"
                    );
                    return;
                }
                DuplicatePolicy::Replace => {
                    warn!(
                        service = key.display_name(),
                        replaced = existing.impl_name,
                        implementation = entry.impl_name,
                        "service already registered, replacing factory"
                    );
                }
            }
        }

        debug!(
            service = key.display_name(),
            implementation = entry.impl_name,
            dependency = entry.dependency.as_ref().map(Key::display_name).unwrap_or("-"),
            "registering service"
        );
        let dependency = entry.dependency;
        self.entries.insert(key, entry);
        self.observers.registered(&key, dependency.as_ref());
    }

    /// Removes the factory for `I`, if any.
    ///
    /// Removing an unregistered service is a no-op.
    pub fn remove_service<I>(&mut self)
    where
        I: ?Sized + 'static,
    {
        let key = key_of::<I>();
        if self.entries.remove(&key).is_some() {
            debug!(service = key.display_name(), "removed service");
            self.observers.removed(&key);
        }
    }

    /// Removes every factory. Configuration and observers are kept.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    // ----- Resolution -----

    /// Builds a new instance of `I`, constructing its dependency chain first.
    ///
    /// # Errors
    ///
    /// - [`IocError::ServiceNotAvailable`] if `I`, or any service reached
    ///   through a dependency, has no factory.
    /// - [`IocError::CircularDependency`] if the dependency chain revisits a
    ///   service; the error carries the path.
    pub fn get_service<I>(&self) -> IocResult<Arc<I>>
    where
        I: ?Sized + Send + Sync + 'static,
    {
        let key = key_of::<I>();
        self.resolve(key, ResolutionChain::new())
            .and_then(downcast::<I>)
            .map_err(|error| {
                self.observers.failed(&key, &error);
                error
            })
    }

    fn resolve(&self, key: Key, chain: ResolutionChain) -> IocResult<AnyService> {
        let entry = self
            .entries
            .get(&key)
            .ok_or(IocError::ServiceNotAvailable(key.display_name()))?;
        let chain = chain.descend(key)?;

        let started = if self.observers.has_observers() {
            self.observers.resolving(&key, chain.depth());
            Some(Instant::now())
        } else {
            None
        };

        let dependency = match entry.dependency {
            None => None,
            Some(dependency) => Some(self.resolve(dependency, chain)?),
        };
        let service = entry.construct(dependency)?;

        if let Some(started) = started {
            self.observers.resolved(&key, started.elapsed());
        }
        Ok(service)
    }

    // ----- Introspection -----

    /// Returns true if `I` has a registered factory.
    pub fn contains_service<I>(&self) -> bool
    where
        I: ?Sized + 'static,
    {
        self.entries.contains_key(&key_of::<I>())
    }

    /// Dependency declared by `I`'s registration.
    ///
    /// `None` if `I` is not registered, `Some(None)` if it has no dependency.
    pub fn dependency_of<I>(&self) -> Option<Option<Key>>
    where
        I: ?Sized + 'static,
    {
        self.entries.get(&key_of::<I>()).map(|entry| entry.dependency)
    }

    /// Type names of all registered services, sorted.
    pub fn registered_services(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.entries.keys().map(Key::display_name).collect();
        names.sort_unstable();
        names
    }

    /// Number of registered services.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn entries(&self) -> impl Iterator<Item = (Key, Option<Key>)> + '_ {
        self.entries.iter().map(|(key, entry)| (*key, entry.dependency))
    }

    pub(crate) fn dependency_by_key(&self, key: &Key) -> Option<Option<Key>> {
        self.entries.get(key).map(|entry| entry.dependency)
    }
}

impl Default for ServiceRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ServiceRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceRegistry")
            .field("services", &self.registered_services())
            .field("config", &self.config)
            .field("observers", &self.observers.len())
            .finish()
    }
}
