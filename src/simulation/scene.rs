//! Scene - what one actor can reach while it is being updated
//!
//! The environment splits its actor list around the actor being updated, so
//! the actor itself is borrowed mutably alongside every other live actor.
//! Spawns and despawns are queued in [`Commands`] and applied when the tick
//! ends.

use std::cmp::Ordering;

use ahash::{AHashMap, AHashSet};
use rand_chacha::ChaCha8Rng;

use crate::core::config::SimulationConfig;
use crate::core::types::{ActorId, Rect, Tick, Vec2};
use crate::entity::actor::{Actor, ActorState};
use crate::spatial::{Quadtree, SpatialEntry};

/// Structural changes requested during a tick
#[derive(Debug)]
pub struct Commands<S: ActorState> {
    spawned: Vec<Actor<S>>,
    despawned: AHashSet<ActorId>,
}

impl<S: ActorState> Default for Commands<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: ActorState> Commands<S> {
    pub fn new() -> Self {
        Self {
            spawned: Vec::new(),
            despawned: AHashSet::new(),
        }
    }

    /// Queue an actor to join the environment at the end of the tick
    pub fn spawn(&mut self, actor: Actor<S>) {
        self.spawned.push(actor);
    }

    /// Remove an actor; it stops being visible to the rest of this tick
    pub fn despawn(&mut self, id: ActorId) {
        self.despawned.insert(id);
    }

    pub fn is_despawned(&self, id: ActorId) -> bool {
        self.despawned.contains(&id)
    }

    pub fn is_empty(&self) -> bool {
        self.spawned.is_empty() && self.despawned.is_empty()
    }

    pub(crate) fn take(&mut self) -> (Vec<Actor<S>>, AHashSet<ActorId>) {
        (std::mem::take(&mut self.spawned), std::mem::take(&mut self.despawned))
    }
}

pub struct Scene<'a, S: ActorState> {
    pub bounds: Rect,
    pub delta: f32,
    pub tick: Tick,
    pub config: &'a SimulationConfig,
    pub rng: &'a mut ChaCha8Rng,
    pub commands: &'a mut Commands<S>,
    quadtree: &'a Quadtree<SpatialEntry>,
    slots: &'a AHashMap<ActorId, usize>,
    before: &'a mut [Actor<S>],
    after: &'a mut [Actor<S>],
    current: usize,
}

impl<'a, S: ActorState> Scene<'a, S> {
    /// `before` and `after` are the actors on either side of slot `current`
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        bounds: Rect,
        delta: f32,
        tick: Tick,
        config: &'a SimulationConfig,
        rng: &'a mut ChaCha8Rng,
        commands: &'a mut Commands<S>,
        quadtree: &'a Quadtree<SpatialEntry>,
        slots: &'a AHashMap<ActorId, usize>,
        before: &'a mut [Actor<S>],
        after: &'a mut [Actor<S>],
    ) -> Self {
        let current = before.len();
        Self {
            bounds,
            delta,
            tick,
            config,
            rng,
            commands,
            quadtree,
            slots,
            before,
            after,
            current,
        }
    }

    fn locate(&self, id: ActorId) -> Option<(Ordering, usize)> {
        if self.commands.is_despawned(id) {
            return None;
        }
        let slot = *self.slots.get(&id)?;
        match slot.cmp(&self.current) {
            Ordering::Less => Some((Ordering::Less, slot)),
            Ordering::Greater => Some((Ordering::Greater, slot - self.current - 1)),
            Ordering::Equal => None,
        }
    }

    /// Another live actor, unless it was despawned earlier this tick
    ///
    /// The actor being updated is not reachable through its own scene.
    pub fn get(&self, id: ActorId) -> Option<&Actor<S>> {
        match self.locate(id)? {
            (Ordering::Less, index) => self.before.get(index),
            (_, index) => self.after.get(index),
        }
    }

    pub fn get_mut(&mut self, id: ActorId) -> Option<&mut Actor<S>> {
        match self.locate(id)? {
            (Ordering::Less, index) => self.before.get_mut(index),
            (_, index) => self.after.get_mut(index),
        }
    }

    /// Mutable access to a target together with the command queue
    pub fn target_mut(&mut self, id: ActorId) -> Option<(&mut Actor<S>, &mut Commands<S>)> {
        let target = match self.locate(id)? {
            (Ordering::Less, index) => self.before.get_mut(index)?,
            (_, index) => self.after.get_mut(index)?,
        };
        Some((target, &mut *self.commands))
    }

    /// Index entries within `radius` of `center`, as of the start of the tick
    pub fn query_radius(&self, center: Vec2, radius: f32) -> Vec<SpatialEntry> {
        let mut found = self.quadtree.query_radius(center, radius);
        found.retain(|entry| !self.commands.is_despawned(entry.id));
        found
    }

    pub fn query(&self, area: &Rect) -> Vec<SpatialEntry> {
        let mut found = self.quadtree.query(area);
        found.retain(|entry| !self.commands.is_despawned(entry.id));
        found
    }

    /// Other live actors in update order
    pub fn others(&self) -> impl Iterator<Item = &Actor<S>> {
        self.before
            .iter()
            .chain(self.after.iter())
            .filter(|actor| !self.commands.is_despawned(actor.id()))
    }

    pub fn spawn(&mut self, actor: Actor<S>) {
        self.commands.spawn(actor);
    }

    pub fn despawn(&mut self, id: ActorId) {
        self.commands.despawn(id);
    }
}
