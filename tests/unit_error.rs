/// Unit tests for IocError and IocResult

use ioc_registry::{IocError, IocResult};
use std::error::Error;

#[test]
fn test_error_display_service_not_available() {
    let error = IocError::ServiceNotAvailable("app::Logger");
    assert_eq!(format!("{}", error), "ServiceNotAvailable");
    assert_eq!(format!("{:#}", error), "ServiceNotAvailable: app::Logger");
}

#[test]
fn test_error_display_circular() {
    let error = IocError::CircularDependency(vec!["Player", "Decoder", "Logger", "Player"]);
    assert_eq!(format!("{}", error), "CircularDependency");
    assert_eq!(
        format!("{:#}", error),
        "CircularDependency: Player -> Decoder -> Logger -> Player"
    );
}

#[test]
fn test_error_display_type_mismatch() {
    let error = IocError::TypeMismatch("dyn app::Decoder");
    assert_eq!(error.to_string(), "TypeMismatch");
    assert_eq!(format!("{:#}", error), "TypeMismatch: dyn app::Decoder");
}

#[test]
fn test_identifier_matches_display() {
    let errors = [
        IocError::ServiceNotAvailable("A"),
        IocError::CircularDependency(vec!["A", "A"]),
        IocError::TypeMismatch("A"),
    ];
    for error in &errors {
        assert_eq!(error.identifier(), error.to_string());
    }
}

#[test]
fn test_service_accessor() {
    assert_eq!(IocError::ServiceNotAvailable("A").service(), Some("A"));
    assert_eq!(IocError::TypeMismatch("B").service(), Some("B"));
    assert_eq!(IocError::CircularDependency(vec!["A", "B", "A"]).service(), Some("A"));
    assert_eq!(IocError::CircularDependency(vec![]).service(), None);
}

#[test]
fn test_error_trait_and_clone() {
    let error = IocError::CircularDependency(vec!["A", "B", "A"]);
    let cloned = error.clone();
    assert_eq!(error, cloned);

    let boxed: Box<dyn Error> = Box::new(cloned);
    assert!(boxed.source().is_none());
    assert_eq!(boxed.to_string(), "CircularDependency");
}

#[test]
fn test_result_alias() {
    fn lookup(found: bool) -> IocResult<u32> {
        if found {
            Ok(7)
        } else {
            Err(IocError::ServiceNotAvailable("u32"))
        }
    }

    assert_eq!(lookup(true).unwrap(), 7);
    assert!(matches!(lookup(false), Err(IocError::ServiceNotAvailable("u32"))));
}
