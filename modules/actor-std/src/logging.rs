//! Bridge from the runtime event stream into `tracing`.

mod tracing_logger_subscriber;

pub use tracing_logger_subscriber::TracingLoggerSubscriber;
