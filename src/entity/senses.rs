//! Agent senses - ranges and the per-tick observation set

use crate::core::types::{ActorId, Vec2};
use crate::entity::actor::{ActorKind, ActorState, Snapshot};
use crate::entity::troupe::Troupe;

/// What an agent can see and reach
///
/// Observations are snapshots of live actors taken during this tick's
/// perception pass; they are replaced wholesale every tick.
#[derive(Debug, Clone)]
pub struct Senses<S: ActorState> {
    pub observable_distance: f32,
    pub interactable_distance: f32,
    pub observations: Troupe<Snapshot<S>>,
}

impl<S: ActorState> Senses<S> {
    pub fn new(observable_distance: f32, interactable_distance: f32) -> Self {
        Self {
            observable_distance,
            interactable_distance,
            observations: Troupe::new(),
        }
    }

    pub fn look(&self, kind: ActorKind) -> Vec<&Snapshot<S>> {
        self.observations.find(kind)
    }

    pub fn look_where(
        &self,
        kind: ActorKind,
        condition: impl Fn(&Snapshot<S>) -> bool,
    ) -> Vec<&Snapshot<S>> {
        self.observations.find_where(kind, condition)
    }

    pub fn look_id(&self, kind: ActorKind, id: ActorId) -> Option<&Snapshot<S>> {
        self.observations.find_id(kind, id)
    }

    pub fn look_min<K: Ord>(
        &self,
        kind: ActorKind,
        key: impl Fn(&Snapshot<S>) -> K,
    ) -> Option<&Snapshot<S>> {
        self.observations.find_min(kind, key)
    }

    pub fn look_max<K: Ord>(
        &self,
        kind: ActorKind,
        key: impl Fn(&Snapshot<S>) -> K,
    ) -> Option<&Snapshot<S>> {
        self.observations.find_max(kind, key)
    }

    pub fn look_closest(&self, origin: Vec2, kind: ActorKind) -> Option<&Snapshot<S>> {
        self.observations.find_closest(&origin, kind)
    }
}
