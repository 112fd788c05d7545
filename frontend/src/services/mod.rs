pub mod logging;

pub use logging::{ConsoleLogger, Logger};
