//! Troupe - spatially situated BDI agents
//!
//! Actors move through a bounded 2D world indexed by a quadtree that is
//! rebuilt every tick. Agents perceive nearby actors, remember what they saw,
//! and pursue their strongest desire through a small plan library.

pub mod core;
pub mod entity;
pub mod simulation;
pub mod spatial;
pub mod world;

#[cfg(test)]
pub(crate) mod test_support;

pub use crate::core::{ActorId, Rect, Result, SimulationConfig, Tick, TroupeError, Vec2};
pub use entity::{Actor, ActorKind, ActorState, Inventory, Snapshot, Troupe};
pub use simulation::{Commands, Goal, Plan, Scene, TickReport};
pub use world::{Environment, RenderView};
