//! Configuration hot-reload
//!
//! Watches the savers configuration file and sends reload events through a
//! channel for the host application to handle. Reloaded configs come back
//! already sanitized, so hand-edited out-of-range values arrive coerced.

use notify::{
    Config as NotifyConfig, Event, RecommendedWatcher, RecursiveMode, Watcher,
    event::ModifyKind,
};
use std::sync::mpsc::{self, Receiver};
use std::time::{Duration, Instant};

use crate::{ConfigError, SaversConfig};

/// Events emitted by the configuration watcher
#[derive(Debug, Clone)]
pub enum ConfigEvent {
    /// Configuration file changed, contains the sanitized new config
    Reloaded(Box<SaversConfig>),
    /// Error occurred during reload
    ReloadError(String),
}

/// Watches the savers configuration file for changes
pub struct ConfigWatcher {
    _watcher: RecommendedWatcher,
    receiver: Receiver<ConfigEvent>,
}

impl ConfigWatcher {
    /// Create a watcher over the default configuration location.
    pub fn new() -> Result<Self, ConfigError> {
        let config_dir = SaversConfig::config_dir()?;
        let config_file = SaversConfig::config_file_path()?;
        Self::with_paths(config_dir, config_file)
    }

    /// Create a watcher over an explicit config directory and file.
    pub fn with_paths(
        config_dir: std::path::PathBuf,
        config_file: std::path::PathBuf,
    ) -> Result<Self, ConfigError> {
        let (tx, rx) = mpsc::channel();

        // Track last event time for debouncing editor write bursts.
        let debounce_duration = Duration::from_millis(100);
        let mut last_event: Option<Instant> = None;

        let watched_file = config_file;

        let mut watcher = RecommendedWatcher::new(
            move |result: Result<Event, notify::Error>| {
                match result {
                    Ok(event) => {
                        // Only handle modify events (writes)
                        if !matches!(event.kind, notify::EventKind::Modify(ModifyKind::Data(_))) {
                            return;
                        }

                        for path in &event.paths {
                            if path != &watched_file {
                                continue;
                            }

                            let now = Instant::now();
                            if let Some(last) = last_event {
                                if now.duration_since(last) < debounce_duration {
                                    continue;
                                }
                            }
                            last_event = Some(now);

                            log::info!("Savers config changed, reloading...");
                            match SaversConfig::load_from(&watched_file) {
                                Ok(new_config) => {
                                    let _ = tx.send(ConfigEvent::Reloaded(Box::new(new_config)));
                                }
                                Err(e) => {
                                    log::error!("Failed to reload savers config: {}", e);
                                    let _ = tx.send(ConfigEvent::ReloadError(e.to_string()));
                                }
                            }
                        }
                    }
                    Err(e) => {
                        log::error!("Watch error: {:?}", e);
                    }
                }
            },
            NotifyConfig::default().with_poll_interval(Duration::from_secs(1)),
        )
        .map_err(|e| ConfigError::Watch(e.to_string()))?;

        // Watch the directory rather than the file so editors that replace
        // the file on save keep being observed.
        if config_dir.exists() {
            watcher
                .watch(&config_dir, RecursiveMode::NonRecursive)
                .map_err(|e| ConfigError::Watch(e.to_string()))?;
            log::info!("Watching config directory: {:?}", config_dir);
        }

        Ok(Self {
            _watcher: watcher,
            receiver: rx,
        })
    }

    /// Try to receive a config event without blocking
    pub fn try_recv(&self) -> Option<ConfigEvent> {
        self.receiver.try_recv().ok()
    }

    /// Get all pending events
    pub fn drain_events(&self) -> Vec<ConfigEvent> {
        let mut events = Vec::new();
        while let Ok(event) = self.receiver.try_recv() {
            events.push(event);
        }
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reloaded_event_debug() {
        let event = ConfigEvent::Reloaded(Box::default());
        assert!(format!("{:?}", event).contains("Reloaded"));
    }

    #[test]
    fn test_reload_error_event() {
        let event = ConfigEvent::ReloadError("test error".to_string());
        match event {
            ConfigEvent::ReloadError(msg) => assert_eq!(msg, "test error"),
            _ => panic!("Expected ReloadError"),
        }
    }
}
