//! Injected logging capability for the relay components

use log::Level;

pub const LOG_TARGET: &str = "edenrelay";

/// Sink for the diagnostics the front door and provider client emit.
///
/// Components hold an `Arc<dyn Diagnostics>` instead of logging through
/// the global logger directly, so a caller can capture what was reported.
pub trait Diagnostics: Send + Sync
{   fn record(&self, level: Level, message: String);

    fn debug(&self, message: String)
    {   self.record(Level::Debug, message);
    }

    fn error(&self, message: String)
    {   self.record(Level::Error, message);
    }
}

/// Forwards everything to the `log` facade
#[derive(Debug, Clone, Copy, Default)]
pub struct LogDiagnostics;

impl Diagnostics for LogDiagnostics
{   fn record(&self, level: Level, message: String)
    {   log::log!(target: LOG_TARGET, level, "{}", message);
    }
}
