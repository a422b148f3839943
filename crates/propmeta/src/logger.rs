use log::LevelFilter;
use tracing::Level;

#[derive(Clone, Debug)]
#[non_exhaustive]
/// Logging configuration for metadata construction.
pub struct LogSettings {
    /// Log level for the event emitted once the property list is introspected.
    pub introspection_level: LevelFilter,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            introspection_level: LevelFilter::Debug,
        }
    }
}

impl LogSettings {
    /// Configure the introspection logging level.
    pub fn log_introspection(&mut self, level: LevelFilter) {
        self.introspection_level = level;
    }

    /// Returns `true` if any logging level is enabled.
    pub fn is_enabled(&self) -> bool {
        self.introspection_level != LevelFilter::Off
    }
}

fn level_filter_to_level(filter: LevelFilter) -> Option<Level> {
    match filter {
        LevelFilter::Error => Some(Level::ERROR),
        LevelFilter::Warn => Some(Level::WARN),
        LevelFilter::Info => Some(Level::INFO),
        LevelFilter::Debug => Some(Level::DEBUG),
        LevelFilter::Trace => Some(Level::TRACE),
        LevelFilter::Off => None,
    }
}

/// Emit the introspection event at the configured level.
pub(crate) fn log_introspection(settings: &LogSettings, source_type: &str, properties: usize) {
    let Some(level) = level_filter_to_level(settings.introspection_level) else {
        return;
    };

    // `tracing::event!` needs a constant level
    match level {
        Level::ERROR => {
            tracing::event!(target: "propmeta", Level::ERROR, source_type, properties, "introspected properties")
        }
        Level::WARN => {
            tracing::event!(target: "propmeta", Level::WARN, source_type, properties, "introspected properties")
        }
        Level::INFO => {
            tracing::event!(target: "propmeta", Level::INFO, source_type, properties, "introspected properties")
        }
        Level::DEBUG => {
            tracing::event!(target: "propmeta", Level::DEBUG, source_type, properties, "introspected properties")
        }
        Level::TRACE => {
            tracing::event!(target: "propmeta", Level::TRACE, source_type, properties, "introspected properties")
        }
    }
}
