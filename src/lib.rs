//! # ioc-registry
//!
//! A minimal inversion-of-control registry: map a service interface to an
//! implementation factory, then ask for fully constructed instances.
//!
//! ## Features
//!
//! - **Transient services**: every resolution builds a new instance; the
//!   registry never holds instances
//! - **Single-dependency injection**: a service may depend on one other
//!   registered service, constructed first
//! - **Compile-time binding checks**: `Impl` must implement the interface
//!   ([`Implements`]) and know how to be built ([`Default`] or [`Inject`])
//! - **Circular dependency detection**: cycles fail with the full path
//! - **Process-wide registry**: [`ServiceRegistry::global`], created lazily
//!
//! ## Quick Start
//!
//! ```rust
//! use ioc_registry::{implements, Inject, ServiceRegistry};
//! use std::sync::Arc;
//!
//! trait Logger: Send + Sync {
//!     fn log(&self, message: &str) -> String;
//! }
//!
//! trait VideoPlayer: Send + Sync {
//!     fn play(&self) -> String;
//! }
//!
//! #[derive(Default)]
//! struct ConsoleLogger;
//!
//! impl Logger for ConsoleLogger {
//!     fn log(&self, message: &str) -> String {
//!         format!("[console] {}", message)
//!     }
//! }
//!
//! struct Player {
//!     logger: Arc<dyn Logger>,
//! }
//!
//! impl VideoPlayer for Player {
//!     fn play(&self) -> String {
//!         self.logger.log("playing")
//!     }
//! }
//!
//! impl Inject<dyn Logger> for Player {
//!     fn inject(logger: Arc<dyn Logger>) -> Self {
//!         Player { logger }
//!     }
//! }
//!
//! implements!(ConsoleLogger => dyn Logger);
//! implements!(Player => dyn VideoPlayer);
//!
//! let mut registry = ServiceRegistry::new();
//! registry.register_service::<dyn Logger, ConsoleLogger>();
//! registry.register_service_with::<dyn VideoPlayer, Player, dyn Logger>();
//!
//! let player = registry.get_service::<dyn VideoPlayer>().unwrap();
//! assert_eq!(player.play(), "[console] playing");
//! ```
//!
//! ## Cycles
//!
//! ```rust
//! use ioc_registry::{Inject, IocError, ServiceRegistry};
//! use std::sync::Arc;
//!
//! struct A;
//! struct B;
//! impl Inject<B> for A { fn inject(_: Arc<B>) -> Self { A } }
//! impl Inject<A> for B { fn inject(_: Arc<A>) -> Self { B } }
//!
//! let mut registry = ServiceRegistry::new();
//! registry.register_service_with::<A, A, B>();
//! registry.register_service_with::<B, B, A>();
//!
//! let error = registry.get_service::<A>().err().unwrap();
//! assert_eq!(error.to_string(), "CircularDependency");
//! assert!(matches!(error, IocError::CircularDependency(ref path) if path.len() == 3));
//! ```

// Module declarations
pub mod config;
pub mod error;
pub mod key;
pub mod observer;
pub mod traits;
pub mod validation;

// Internal modules
mod global;
mod internal;
mod registration;
mod registry;

// Re-export core types
pub use config::{DuplicatePolicy, RegistryConfig};
pub use error::{IocError, IocResult};
pub use global::GlobalRegistry;
pub use key::{key_of, Key};
pub use observer::{RegistryObserver, TracingObserver};
pub use registry::ServiceRegistry;
pub use traits::{Implements, Inject};
pub use validation::ValidationReport;
