//! Video player wiring through the process-wide registry.
//!
//! Run with `RUST_LOG=ioc_registry=debug cargo run --example video_player`
//! to see registration events, or set `IOC_REGISTRY_TRACE=1` for resolution
//! events too.

use ioc_registry::{implements, Inject, IocError, ServiceRegistry};
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

trait Logger: Send + Sync {
    fn log(&self, message: &str);
}

trait Decoder: Send + Sync {
    fn decode_data(&self, data: &[u16]);
}

trait VideoPlayer: Send + Sync {
    fn present_frame(&self, frame: &[u16]);
}

struct FileLogger;

impl Default for FileLogger {
    fn default() -> Self {
        info!("logger created");
        FileLogger
    }
}

impl Drop for FileLogger {
    fn drop(&mut self) {
        info!("logger destroyed");
    }
}

impl Logger for FileLogger {
    fn log(&self, message: &str) {
        info!(target: "logger", "{}", message);
    }
}

/// Logger that wants the video player, closing a dependency loop.
struct LoopingLogger {
    _player: Arc<dyn VideoPlayer>,
}

impl Inject<dyn VideoPlayer> for LoopingLogger {
    fn inject(player: Arc<dyn VideoPlayer>) -> Self {
        LoopingLogger { _player: player }
    }
}

impl Logger for LoopingLogger {
    fn log(&self, message: &str) {
        info!(target: "looping_logger", "{}", message);
    }
}

struct HardwareDecoder {
    logger: Arc<dyn Logger>,
}

impl Inject<dyn Logger> for HardwareDecoder {
    fn inject(logger: Arc<dyn Logger>) -> Self {
        info!("decoder created");
        HardwareDecoder { logger }
    }
}

impl Drop for HardwareDecoder {
    fn drop(&mut self) {
        info!("decoder destroyed");
    }
}

impl Decoder for HardwareDecoder {
    fn decode_data(&self, data: &[u16]) {
        let first = data.first().copied().unwrap_or_default();
        self.logger.log(&format!("hardware decoding... frame data[0] = {}", first));
    }
}

struct Player {
    decoder: Arc<dyn Decoder>,
}

impl Inject<dyn Decoder> for Player {
    fn inject(decoder: Arc<dyn Decoder>) -> Self {
        info!("video player created");
        Player { decoder }
    }
}

impl Drop for Player {
    fn drop(&mut self) {
        info!("video player destroyed");
    }
}

impl VideoPlayer for Player {
    fn present_frame(&self, frame: &[u16]) {
        self.decoder.decode_data(frame);
    }
}

implements!(FileLogger => dyn Logger);
implements!(LoopingLogger => dyn Logger);
implements!(HardwareDecoder => dyn Decoder);
implements!(Player => dyn VideoPlayer);

fn reset() {
    let mut registry = ServiceRegistry::global();
    registry.remove_service::<dyn Logger>();
    registry.remove_service::<dyn Decoder>();
    registry.remove_service::<dyn VideoPlayer>();
}

fn play() -> Result<(), IocError> {
    {
        let mut registry = ServiceRegistry::global();
        registry.register_service::<dyn Logger, FileLogger>();
        registry.register_service_with::<dyn Decoder, HardwareDecoder, dyn Logger>();
        registry.register_service_with::<dyn VideoPlayer, Player, dyn Decoder>();
    }

    let video_player = ServiceRegistry::global().get_service::<dyn VideoPlayer>()?;
    video_player.present_frame(&[0x10, 0x11, 0x12, 0x13]);
    Ok(())
}

fn play_with_loop() -> Result<(), IocError> {
    {
        let mut registry = ServiceRegistry::global();
        registry.register_service_with::<dyn Logger, LoopingLogger, dyn VideoPlayer>();
        registry.register_service_with::<dyn Decoder, HardwareDecoder, dyn Logger>();
        registry.register_service_with::<dyn VideoPlayer, Player, dyn Decoder>();

        let report = registry.validate();
        if !report.is_valid() {
            warn!("validation found problems:\n{}", report);
        }
    }

    let video_player = ServiceRegistry::global().get_service::<dyn VideoPlayer>()?;
    video_player.present_frame(&[0x10]);
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(e) = play() {
        error!("{:#}", e);
    }
    reset();

    // Prints the bare identifier, "CircularDependency".
    if let Err(e) = play_with_loop() {
        error!("{}", e);
    }
    reset();
}
