//! Logger / decoder / video player test doubles that record their lifecycle.
#![allow(dead_code)]

use ioc_registry::{implements, Inject};
use std::cell::RefCell;
use std::sync::Arc;

thread_local! {
    static EVENTS: RefCell<Vec<String>> = RefCell::new(Vec::new());
}

/// Appends an event to this thread's log.
pub fn record(event: impl Into<String>) {
    EVENTS.with(|events| events.borrow_mut().push(event.into()));
}

/// Drains this thread's log.
pub fn take_events() -> Vec<String> {
    EVENTS.with(|events| events.borrow_mut().drain(..).collect())
}

pub trait Logger: Send + Sync {
    fn log(&self, message: &str);
    fn kind(&self) -> &'static str;
}

pub trait Decoder: Send + Sync {
    fn decode(&self, frame: &[u16]);
}

pub trait VideoPlayer: Send + Sync {
    fn present_frame(&self, frame: &[u16]);
}

pub struct FileLogger;

impl Default for FileLogger {
    fn default() -> Self {
        record("logger created");
        FileLogger
    }
}

impl Logger for FileLogger {
    fn log(&self, message: &str) {
        record(format!("file: {}", message));
    }

    fn kind(&self) -> &'static str {
        "file"
    }
}

pub struct ConsoleLogger;

impl Default for ConsoleLogger {
    fn default() -> Self {
        record("console logger created");
        ConsoleLogger
    }
}

impl Logger for ConsoleLogger {
    fn log(&self, message: &str) {
        record(format!("console: {}", message));
    }

    fn kind(&self) -> &'static str {
        "console"
    }
}

/// Logger that needs a video player, closing a player -> decoder -> logger loop.
pub struct BadLogger {
    _player: Arc<dyn VideoPlayer>,
}

impl Inject<dyn VideoPlayer> for BadLogger {
    fn inject(player: Arc<dyn VideoPlayer>) -> Self {
        record("bad logger created");
        BadLogger { _player: player }
    }
}

impl Logger for BadLogger {
    fn log(&self, message: &str) {
        record(format!("bad: {}", message));
    }

    fn kind(&self) -> &'static str {
        "bad"
    }
}

pub struct HardwareDecoder {
    pub logger: Arc<dyn Logger>,
}

impl Inject<dyn Logger> for HardwareDecoder {
    fn inject(logger: Arc<dyn Logger>) -> Self {
        record("decoder created");
        HardwareDecoder { logger }
    }
}

impl Decoder for HardwareDecoder {
    fn decode(&self, frame: &[u16]) {
        let first = frame.first().copied().unwrap_or_default();
        self.logger.log(&format!("hardware decoding, frame[0] = {}", first));
    }
}

pub struct Player {
    pub decoder: Arc<dyn Decoder>,
}

impl Inject<dyn Decoder> for Player {
    fn inject(decoder: Arc<dyn Decoder>) -> Self {
        record("player created");
        Player { decoder }
    }
}

impl VideoPlayer for Player {
    fn present_frame(&self, frame: &[u16]) {
        self.decoder.decode(frame);
    }
}

implements!(FileLogger => dyn Logger);
implements!(ConsoleLogger => dyn Logger);
implements!(BadLogger => dyn Logger);
implements!(HardwareDecoder => dyn Decoder);
implements!(Player => dyn VideoPlayer);
