//! Belief memory - remembered snapshots of actors, possibly stale
//!
//! Beliefs are refreshed from observations every tick. A belief about
//! something inside observable range that was not seen again this tick is
//! assumed false and evicted; beliefs about things out of range persist until
//! the agent comes back.

use ahash::AHashSet;

use crate::core::types::{ActorId, Vec2};
use crate::entity::actor::{Actor, ActorKind, ActorState, Snapshot};
use crate::entity::troupe::Troupe;

#[derive(Debug, Clone)]
pub struct BeliefStore<S: ActorState> {
    beliefs: Troupe<Snapshot<S>>,
}

impl<S: ActorState> Default for BeliefStore<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: ActorState> BeliefStore<S> {
    pub fn new() -> Self {
        Self { beliefs: Troupe::new() }
    }

    /// Record a belief, replacing whatever was remembered about the same actor
    pub fn remember(&mut self, snapshot: Snapshot<S>) {
        self.beliefs.add(snapshot.as_belief());
    }

    pub fn forget(&mut self, kind: ActorKind, id: ActorId) -> Option<Snapshot<S>> {
        self.beliefs.discard(kind, id)
    }

    /// Replace the belief about every observed actor with a fresh copy
    pub fn refresh(&mut self, observations: &Troupe<Snapshot<S>>) {
        for observed in observations.iter() {
            self.remember(observed.clone());
        }
    }

    /// Evict beliefs that should have been confirmed by `observations`
    ///
    /// Returns the number of evicted beliefs.
    pub fn invalidate(
        &mut self,
        origin: Vec2,
        observable_distance: f32,
        observations: &Troupe<Snapshot<S>>,
    ) -> usize {
        let observed: AHashSet<ActorId> = observations.iter().map(|o| o.id).collect();

        let stale: Vec<(ActorKind, ActorId)> = self
            .beliefs
            .iter()
            .filter(|belief| origin.distance(&belief.position) <= observable_distance)
            .filter(|belief| !observed.contains(&belief.id))
            .map(|belief| (belief.kind, belief.id))
            .collect();

        for &(kind, id) in &stale {
            tracing::trace!(belief = %id, kind = %kind, "evicting stale belief");
            self.beliefs.remove(kind, id);
        }
        stale.len()
    }

    pub fn recollect(&self, kind: ActorKind) -> Vec<&Snapshot<S>> {
        self.beliefs.find(kind)
    }

    pub fn recollect_where(
        &self,
        kind: ActorKind,
        condition: impl Fn(&Snapshot<S>) -> bool,
    ) -> Vec<&Snapshot<S>> {
        self.beliefs.find_where(kind, condition)
    }

    pub fn recollect_id(&self, kind: ActorKind, id: ActorId) -> Option<&Snapshot<S>> {
        self.beliefs.find_id(kind, id)
    }

    pub fn recollect_min<K: Ord>(
        &self,
        kind: ActorKind,
        key: impl Fn(&Snapshot<S>) -> K,
    ) -> Option<&Snapshot<S>> {
        self.beliefs.find_min(kind, key)
    }

    pub fn recollect_max<K: Ord>(
        &self,
        kind: ActorKind,
        key: impl Fn(&Snapshot<S>) -> K,
    ) -> Option<&Snapshot<S>> {
        self.beliefs.find_max(kind, key)
    }

    pub fn recollect_closest(&self, origin: Vec2, kind: ActorKind) -> Option<&Snapshot<S>> {
        self.beliefs.find_closest(&origin, kind)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Snapshot<S>> {
        self.beliefs.iter()
    }

    pub fn len(&self) -> usize {
        self.beliefs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.beliefs.is_empty()
    }
}

/// Fold this tick's observations into the agent's beliefs, then evict stale ones
///
/// Does nothing for actors without both senses and a mind.
pub fn update_beliefs<S: ActorState>(actor: &mut Actor<S>) -> usize {
    let origin = actor.position;
    let (Some(senses), Some(mind)) = (actor.senses.as_ref(), actor.mind.as_mut()) else {
        return 0;
    };
    mind.beliefs.refresh(&senses.observations);
    mind.beliefs.invalidate(origin, senses.observable_distance, &senses.observations)
}
