pub mod logger;
pub mod text;

pub use logger::{init_logger, LogContext, TimedOperation};
