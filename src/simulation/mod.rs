pub mod perception;
pub mod plans;
pub mod scene;
pub mod tick;

pub use perception::observe;
pub use plans::{execute, Goal, Plan};
pub use scene::{Commands, Scene};
pub use tick::{run_tick, update_actor, TickReport};
