pub mod clock;
pub mod config;
pub mod error;
pub mod types;

pub use clock::{Clock, SteppedClock, SystemClock};
pub use config::AgentConfig;
pub use types::{distance, Point, Timestamp};
