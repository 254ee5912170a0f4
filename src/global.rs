//! Process-wide registry.
//!
//! The global registry is created on first access from
//! [`RegistryConfig::from_env`] and lives until the process exits. Access is
//! serialized through a mutex guard; drop the guard before calling
//! [`ServiceRegistry::global`] again on the same thread.

use once_cell::sync::Lazy;
use parking_lot::{Mutex, MutexGuard};
use tracing::debug;

use crate::config::RegistryConfig;
use crate::registry::ServiceRegistry;

static GLOBAL: Lazy<Mutex<ServiceRegistry>> = Lazy::new(|| {
    let config = RegistryConfig::from_env();
    debug!(?config, "initializing global service registry");
    Mutex::new(ServiceRegistry::with_config(config))
});

/// Exclusive handle to the process-wide registry.
pub type GlobalRegistry = MutexGuard<'static, ServiceRegistry>;

impl ServiceRegistry {
    /// Locks and returns the process-wide registry, creating it on first use.
    ///
    /// Constructors run while the guard is held, so a constructor must not
    /// call `global()` itself.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ioc_registry::ServiceRegistry;
    ///
    /// #[derive(Default)]
    /// struct Clock;
    ///
    /// ServiceRegistry::global().register_service::<Clock, Clock>();
    /// assert!(ServiceRegistry::global().get_service::<Clock>().is_ok());
    /// ServiceRegistry::global().remove_service::<Clock>();
    /// ```
    pub fn global() -> GlobalRegistry {
        GLOBAL.lock()
    }
}
