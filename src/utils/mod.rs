pub mod logging;

pub use logging::{init, log_startup, truncate_text};
