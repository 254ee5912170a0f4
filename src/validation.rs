//! Static validation of registered dependency chains.
//!
//! Validation follows each registration's dependency links exactly like
//! resolution does, but without invoking any constructor, so it can run at
//! startup before anything is built.

use std::fmt;

use crate::error::{IocError, IocResult};
use crate::internal::ResolutionChain;
use crate::key::Key;
use crate::registry::ServiceRegistry;

/// Outcome of [`ServiceRegistry::validate`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// Number of registrations checked
    pub checked: usize,
    /// Failing services with the error their resolution would return, sorted by name
    pub errors: Vec<(&'static str, IocError)>,
}

impl ValidationReport {
    /// True if every registered service would resolve.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Error recorded for the named service, if any.
    pub fn error_for(&self, service: &str) -> Option<&IocError> {
        self.errors
            .iter()
            .find(|(name, _)| *name == service)
            .map(|(_, error)| error)
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            return write!(f, "{} services valid", self.checked);
        }
        writeln!(f, "{} of {} services invalid:", self.errors.len(), self.checked)?;
        for (service, error) in &self.errors {
            writeln!(f, "  {}: {:#}", service, error)?;
        }
        Ok(())
    }
}

impl ServiceRegistry {
    /// Checks every registration for missing dependencies and cycles.
    ///
    /// For each registered service the report holds the same error
    /// [`get_service`](ServiceRegistry::get_service) would return, without
    /// constructing anything.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ioc_registry::{Inject, IocError, ServiceRegistry};
    /// use std::sync::Arc;
    ///
    /// struct Config;
    /// struct Server;
    /// impl Inject<Config> for Server {
    ///     fn inject(_: Arc<Config>) -> Self { Server }
    /// }
    ///
    /// let mut registry = ServiceRegistry::new();
    /// registry.register_service_with::<Server, Server, Config>();
    ///
    /// let report = registry.validate();
    /// assert!(!report.is_valid());
    /// assert!(matches!(
    ///     report.errors[0].1,
    ///     IocError::ServiceNotAvailable(_)
    /// ));
    /// ```
    pub fn validate(&self) -> ValidationReport {
        let mut errors: Vec<(&'static str, IocError)> = self
            .entries()
            .filter_map(|(key, _)| {
                self.walk(key)
                    .err()
                    .map(|error| (key.display_name(), error))
            })
            .collect();
        errors.sort_by(|a, b| a.0.cmp(b.0));

        ValidationReport {
            checked: self.len(),
            errors,
        }
    }

    fn walk(&self, start: Key) -> IocResult<()> {
        let mut chain = ResolutionChain::new();
        let mut current = Some(start);

        while let Some(key) = current {
            let dependency = self
                .dependency_by_key(&key)
                .ok_or(IocError::ServiceNotAvailable(key.display_name()))?;
            chain = chain.descend(key)?;
            current = dependency;
        }
        Ok(())
    }
}
