//! Error types for the service registry.

use std::fmt;

/// Service registry errors
///
/// Both resolution failures are terminal for the `get_service` call that hit
/// them. `Display` writes only the stable identifier (`"ServiceNotAvailable"`,
/// `"CircularDependency"`); the alternate form (`{:#}`) appends the offending
/// service name or cycle path.
///
/// # Examples
///
/// ```rust
/// use ioc_registry::{IocError, ServiceRegistry};
///
/// let registry = ServiceRegistry::new();
/// match registry.get_service::<String>() {
///     Err(IocError::ServiceNotAvailable(name)) => {
///         assert_eq!(name, "alloc::string::String");
///     }
///     _ => unreachable!(),
/// }
/// ```
///
/// ```rust
/// use ioc_registry::IocError;
///
/// let circular = IocError::CircularDependency(vec!["Player", "Decoder", "Player"]);
/// assert_eq!(circular.to_string(), "CircularDependency");
/// assert_eq!(format!("{:#}", circular), "CircularDependency: Player -> Decoder -> Player");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IocError {
    /// No factory registered for the service (requested or reached through a dependency)
    ServiceNotAvailable(&'static str),
    /// Resolution revisited a service already being constructed (includes path)
    CircularDependency(Vec<&'static str>),
    /// Erased instance did not downcast to the registered type
    TypeMismatch(&'static str),
}

impl IocError {
    /// Stable textual identifier of the error kind.
    pub fn identifier(&self) -> &'static str {
        match self {
            IocError::ServiceNotAvailable(_) => "ServiceNotAvailable",
            IocError::CircularDependency(_) => "CircularDependency",
            IocError::TypeMismatch(_) => "TypeMismatch",
        }
    }

    /// Type name of the service the error is about.
    ///
    /// For a cycle this is the revisited service, i.e. the last path element.
    pub fn service(&self) -> Option<&'static str> {
        match self {
            IocError::ServiceNotAvailable(name) | IocError::TypeMismatch(name) => Some(name),
            IocError::CircularDependency(path) => path.last().copied(),
        }
    }
}

impl fmt::Display for IocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())?;
        if !f.alternate() {
            return Ok(());
        }
        match self {
            IocError::ServiceNotAvailable(name) | IocError::TypeMismatch(name) => {
                write!(f, ": {}", name)
            }
            IocError::CircularDependency(path) => write!(f, ": {}", path.join(" -> ")),
        }
    }
}

impl std::error::Error for IocError {}

/// Result type for registry operations
pub type IocResult<T> = Result<T, IocError>;
