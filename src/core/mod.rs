pub mod config;
pub mod error;
pub mod types;

pub use config::SimulationConfig;
pub use error::{Result, TroupeError};
pub use types::{ActorId, Rect, Tick, Vec2};
