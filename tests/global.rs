mod common;

use common::*;
use ioc_registry::{IocError, ServiceRegistry};
use serial_test::serial;

fn reset_global() {
    let mut registry = ServiceRegistry::global();
    registry.remove_service::<dyn Logger>();
    registry.remove_service::<dyn Decoder>();
    registry.remove_service::<dyn VideoPlayer>();
}

#[test]
#[serial]
fn test_global_video_player_scenario() {
    reset_global();
    {
        let mut registry = ServiceRegistry::global();
        registry.register_service::<dyn Logger, FileLogger>();
        registry.register_service_with::<dyn Decoder, HardwareDecoder, dyn Logger>();
        registry.register_service_with::<dyn VideoPlayer, Player, dyn Decoder>();
    }

    let player = ServiceRegistry::global().get_service::<dyn VideoPlayer>().unwrap();
    player.present_frame(&[0x10, 0x11, 0x12, 0x13]);

    assert_eq!(
        take_events(),
        vec![
            "logger created",
            "decoder created",
            "player created",
            "file: hardware decoding, frame[0] = 16",
        ]
    );
    reset_global();
}

#[test]
#[serial]
fn test_global_circular_scenario() {
    reset_global();
    {
        let mut registry = ServiceRegistry::global();
        registry.register_service_with::<dyn Logger, BadLogger, dyn VideoPlayer>();
        registry.register_service_with::<dyn Decoder, HardwareDecoder, dyn Logger>();
        registry.register_service_with::<dyn VideoPlayer, Player, dyn Decoder>();
    }

    let error = ServiceRegistry::global()
        .get_service::<dyn VideoPlayer>()
        .err()
        .unwrap();
    assert!(matches!(error, IocError::CircularDependency(_)));
    assert_eq!(error.to_string(), "CircularDependency");
    reset_global();
}

#[test]
#[serial]
fn test_global_is_shared_across_threads() {
    reset_global();
    ServiceRegistry::global().register_service::<dyn Logger, FileLogger>();

    let handle = std::thread::spawn(|| {
        ServiceRegistry::global()
            .get_service::<dyn Logger>()
            .map(|logger| logger.kind())
    });
    assert_eq!(handle.join().unwrap(), Ok("file"));

    reset_global();
    assert!(!ServiceRegistry::global().contains_service::<dyn Logger>());
}
