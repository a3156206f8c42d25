// Infrastructure layer modules
pub mod event_recorder;
pub mod greeting_config;
pub mod logging;

// Re-exports
pub use event_recorder::{
    EventRecorder, TracingEventRecorder, EVENT_RECEIVED_LABEL, PROCESSING_INPUT_LABEL,
};
pub use greeting_config::{GreetingConfig, GreetingConfigError};
#[cfg(test)]
pub use logging::init_test_logging;
pub use logging::{init_logging, json_layer};
