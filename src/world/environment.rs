//! Environment - the bounded world every actor lives in

use ahash::AHashMap;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

use crate::core::config::SimulationConfig;
use crate::core::error::{Result, TroupeError};
use crate::core::types::{ActorId, Rect, Tick, Vec2};
use crate::entity::actor::{Actor, ActorState};
use crate::simulation::tick::{run_tick, TickReport};
use crate::spatial::{Quadtree, SpatialEntry};

/// What a renderer needs to draw one actor
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RenderView {
    pub id: ActorId,
    pub position: Vec2,
    /// Heading in degrees
    pub rotation: f32,
    pub layer: i32,
}

pub struct Environment<S: ActorState> {
    pub bounds: Rect,
    pub current_tick: Tick,
    pub config: SimulationConfig,
    pub(crate) actors: Vec<Actor<S>>,
    /// Actor id -> index into `actors`, rebuilt whenever `actors` is reordered
    pub(crate) slots: AHashMap<ActorId, usize>,
    pub(crate) quadtree: Quadtree<SpatialEntry>,
    pub(crate) rng: ChaCha8Rng,
}

impl<S: ActorState> Environment<S> {
    pub fn new(bounds: Rect, config: SimulationConfig) -> Result<Self> {
        config.validate()?;
        if bounds.w <= 0.0 || bounds.h <= 0.0 {
            return Err(TroupeError::InvalidConfig(format!(
                "environment bounds must have positive size, got {}x{}",
                bounds.w, bounds.h
            )));
        }

        let quadtree =
            Quadtree::new(bounds, &[], config.quadtree_capacity, config.quadtree_max_depth);
        let rng = ChaCha8Rng::seed_from_u64(config.seed);
        tracing::info!(
            width = bounds.w,
            height = bounds.h,
            seed = config.seed,
            "Initialized environment"
        );

        Ok(Self {
            bounds,
            current_tick: 0,
            config,
            actors: Vec::new(),
            slots: AHashMap::new(),
            quadtree,
            rng,
        })
    }

    /// Add an actor; it takes part from the next tick on
    pub fn add(&mut self, actor: Actor<S>) -> ActorId {
        let id = actor.id();
        self.slots.insert(id, self.actors.len());
        self.actors.push(actor);
        id
    }

    pub fn remove(&mut self, id: ActorId) -> Result<Actor<S>> {
        let index = *self.slots.get(&id).ok_or(TroupeError::ActorNotFound(id))?;
        let removed = self.actors.remove(index);
        self.reindex();
        Ok(removed)
    }

    pub fn actor(&self, id: ActorId) -> Option<&Actor<S>> {
        self.actors.get(*self.slots.get(&id)?)
    }

    pub fn actor_mut(&mut self, id: ActorId) -> Option<&mut Actor<S>> {
        self.actors.get_mut(*self.slots.get(&id)?)
    }

    pub(crate) fn reindex(&mut self) {
        self.slots.clear();
        for (slot, actor) in self.actors.iter().enumerate() {
            self.slots.insert(actor.id(), slot);
        }
    }

    /// Live actors, in update order as of the last tick
    pub fn actors(&self) -> &[Actor<S>] {
        &self.actors
    }

    pub fn len(&self) -> usize {
        self.actors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actors.is_empty()
    }

    /// Spatial index as built at the start of the last tick
    pub fn quadtree(&self) -> &Quadtree<SpatialEntry> {
        &self.quadtree
    }

    /// Allocate an actor id from the seeded generator
    pub fn next_id(&mut self) -> ActorId {
        ActorId::from_rng(&mut self.rng)
    }

    pub fn rng(&mut self) -> &mut ChaCha8Rng {
        &mut self.rng
    }

    /// Centre of a free spot of `size` that overlaps no actor's bounds
    ///
    /// Tries `spawn_attempts` random placements inside the bounds before
    /// giving up.
    pub fn available_spot(&mut self, size: Vec2) -> Result<Vec2> {
        let attempts = self.config.spawn_attempts;
        if size.x > self.bounds.w || size.y > self.bounds.h {
            return Err(TroupeError::NoAvailableSpot { attempts: 0 });
        }

        for _ in 0..attempts {
            let x = self.rng.gen_range(self.bounds.x..=self.bounds.right() - size.x);
            let y = self.rng.gen_range(self.bounds.y..=self.bounds.bottom() - size.y);
            let candidate = Rect::new(x, y, size.x, size.y);

            if self.actors.iter().all(|actor| !candidate.intersects(&actor.bounds())) {
                return Ok(candidate.center());
            }
        }

        tracing::warn!(attempts, width = size.x, height = size.y, "no available spot");
        Err(TroupeError::NoAvailableSpot { attempts })
    }

    /// Position, heading and layer of every actor, sorted by layer
    pub fn render_views(&self) -> Vec<RenderView> {
        let mut views: Vec<RenderView> = self
            .actors
            .iter()
            .map(|actor| RenderView {
                id: actor.id(),
                position: actor.position,
                rotation: actor.rotation(),
                layer: actor.layer,
            })
            .collect();
        views.sort_by_key(|view| view.layer);
        views
    }

    /// Advance the simulation by `delta` seconds
    pub fn update(&mut self, delta: f32) -> TickReport {
        run_tick(self, delta)
    }
}
