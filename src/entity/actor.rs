//! Actors, their type tags, and the snapshots agents keep of them

use rand::Rng;
use serde::Serialize;
use std::fmt;

use crate::core::types::{ActorId, Rect, Vec2};
use crate::entity::mind::Mind;
use crate::entity::senses::Senses;
use crate::entity::troupe::Member;
use crate::simulation::scene::{Commands, Scene};
use crate::spatial::Positioned;

/// Stable type tag used as an exact key in registries
///
/// Kinds do not form a hierarchy: looking up one kind never yields actors
/// of another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct ActorKind(&'static str);

impl ActorKind {
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub fn name(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for ActorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Domain data carried by every actor, plus the hooks the engine calls
///
/// Plans, filters and interactions are plain data owned by the domain; the
/// engine stores them inside desires and hands them back here to evaluate.
pub trait ActorState: Clone + fmt::Debug + Sized {
    /// Something an agent does to a target once it is within reach
    type Interaction: Clone + fmt::Debug;
    /// Domain plan, run while its desire is the intention or when a reflex fires
    type Routine: Clone + fmt::Debug;
    /// Predicate over a candidate actor
    type Filter: Clone + fmt::Debug;
    /// Predicate over the agent itself
    type Trigger: Clone + fmt::Debug;

    fn accepts(filter: &Self::Filter, candidate: &Snapshot<Self>) -> bool;

    fn triggered(trigger: &Self::Trigger, agent: &Actor<Self>) -> bool;

    fn interact(
        interaction: &Self::Interaction,
        agent: &mut Actor<Self>,
        target: &mut Actor<Self>,
        commands: &mut Commands<Self>,
    );

    fn perform(routine: &Self::Routine, agent: &mut Actor<Self>, scene: &mut Scene<'_, Self>);

    /// Per-tick domain update, run after movement and cognition
    fn update(_actor: &mut Actor<Self>, _scene: &mut Scene<'_, Self>) {}
}

/// A live entity in the environment
#[derive(Debug, Clone)]
pub struct Actor<S: ActorState> {
    id: ActorId,
    kind: ActorKind,
    /// Draw layer, also the update order within a tick
    pub layer: i32,
    pub position: Vec2,
    /// Unit heading, or zero when standing still
    pub direction: Vec2,
    pub speed: f32,
    /// Width and height of the actor's bounds, centred on its position
    pub footprint: Vec2,
    pub senses: Option<Senses<S>>,
    pub mind: Option<Mind<S>>,
    pub state: S,
    steer_timer: f32,
}

impl<S: ActorState> Actor<S> {
    pub fn new(kind: ActorKind, position: Vec2, state: S) -> Self {
        Self::with_id(ActorId::new(), kind, position, state)
    }

    pub fn with_id(id: ActorId, kind: ActorKind, position: Vec2, state: S) -> Self {
        Self {
            id,
            kind,
            layer: 0,
            position,
            direction: Vec2::new(0.0, -1.0),
            speed: 0.0,
            footprint: Vec2::ZERO,
            senses: None,
            mind: None,
            state,
            steer_timer: 0.0,
        }
    }

    pub fn with_layer(mut self, layer: i32) -> Self {
        self.layer = layer;
        self
    }

    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    pub fn with_direction(mut self, direction: Vec2) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_footprint(mut self, footprint: Vec2) -> Self {
        self.footprint = footprint;
        self
    }

    /// Make the actor an agent that perceives its surroundings
    pub fn with_senses(mut self, observable_distance: f32, interactable_distance: f32) -> Self {
        self.senses = Some(Senses::new(observable_distance, interactable_distance));
        self
    }

    /// Give the actor desires and beliefs
    ///
    /// An actor without senses gets blind ones (zero ranges).
    pub fn with_mind(mut self) -> Self {
        if self.senses.is_none() {
            self.senses = Some(Senses::new(0.0, 0.0));
        }
        self.mind = Some(Mind::new());
        self
    }

    pub fn id(&self) -> ActorId {
        self.id
    }

    pub fn kind(&self) -> ActorKind {
        self.kind
    }

    /// Live actors are never beliefs
    pub fn is_belief(&self) -> bool {
        false
    }

    pub fn is_agent(&self) -> bool {
        self.senses.is_some()
    }

    /// Heading in degrees: (1,0) = 0, (0,1) = 90, (-1,0) = 180, (0,-1) = -90
    pub fn rotation(&self) -> f32 {
        self.direction.angle_degrees()
    }

    pub fn bounds(&self) -> Rect {
        Rect::centered(self.position, self.footprint)
    }

    /// Copy of the actor's observable state, detached from the live actor
    pub fn snapshot(&self) -> Snapshot<S> {
        Snapshot {
            id: self.id,
            kind: self.kind,
            layer: self.layer,
            position: self.position,
            direction: self.direction,
            speed: self.speed,
            footprint: self.footprint,
            is_belief: false,
            state: self.state.clone(),
        }
    }

    pub fn within_distance(&self, location: Vec2, distance: f32) -> bool {
        self.position.distance(&location) <= distance
    }

    pub fn observable_distance(&self) -> f32 {
        self.senses.as_ref().map_or(0.0, |s| s.observable_distance)
    }

    pub fn interactable_distance(&self) -> f32 {
        self.senses.as_ref().map_or(0.0, |s| s.interactable_distance)
    }

    pub fn can_observe(&self, location: Vec2) -> bool {
        self.senses.is_some() && self.within_distance(location, self.observable_distance())
    }

    /// Beliefs can never be interacted with, only live observations
    pub fn can_interact(&self, target: &Snapshot<S>) -> bool {
        if target.is_belief || self.senses.is_none() {
            return false;
        }
        self.within_distance(target.position, self.interactable_distance())
    }

    pub fn steer_towards(&mut self, destination: Vec2) {
        self.direction = (destination - self.position).normalize();
    }

    /// Nudge the heading toward a random vector, at most once per `interval`
    pub fn steer_random<R: Rng + ?Sized>(&mut self, rng: &mut R, interval: f32, blend: f32) {
        if self.steer_timer <= interval {
            return;
        }
        self.steer_timer = 0.0;
        let target = Vec2::new(rng.gen_range(-1.0..=1.0), rng.gen_range(-1.0..=1.0));
        self.direction = self.direction.lerp(target, blend).normalize();
    }

    /// Advance the steer timer and integrate position
    pub fn advance(&mut self, delta: f32) {
        self.steer_timer += delta;
        if self.direction.is_zero() {
            return;
        }
        self.direction = self.direction.normalize();
        self.position += self.direction * self.speed * delta;
    }

    /// Leaving one side of `bounds` re-enters from the opposite side
    pub fn wraparound(&mut self, bounds: &Rect) {
        if self.position.x < bounds.x {
            self.position.x += bounds.w;
        } else if self.position.x > bounds.right() {
            self.position.x -= bounds.w;
        }

        if self.position.y < bounds.y {
            self.position.y += bounds.h;
        } else if self.position.y > bounds.bottom() {
            self.position.y -= bounds.h;
        }
    }
}

impl<S: ActorState> fmt::Display for Actor<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.kind, self.id)
    }
}

impl<S: ActorState> PartialEq for Actor<S> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<S: ActorState> Eq for Actor<S> {}

impl<S: ActorState> Positioned for Actor<S> {
    fn position(&self) -> Vec2 {
        self.position
    }
}

impl<S: ActorState> Member for Actor<S> {
    fn id(&self) -> ActorId {
        self.id
    }

    fn kind(&self) -> ActorKind {
        self.kind
    }
}

/// Detached copy of an actor, as observed this tick or remembered
#[derive(Debug, Clone)]
pub struct Snapshot<S: ActorState> {
    pub id: ActorId,
    pub kind: ActorKind,
    pub layer: i32,
    pub position: Vec2,
    pub direction: Vec2,
    pub speed: f32,
    pub footprint: Vec2,
    /// True when held in belief memory rather than seen this tick
    pub is_belief: bool,
    pub state: S,
}

impl<S: ActorState> Snapshot<S> {
    pub fn as_belief(mut self) -> Self {
        self.is_belief = true;
        self
    }
}

impl<S: ActorState> fmt::Display for Snapshot<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.kind, self.id)
    }
}

impl<S: ActorState> PartialEq for Snapshot<S> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<S: ActorState> Eq for Snapshot<S> {}

impl<S: ActorState> Positioned for Snapshot<S> {
    fn position(&self) -> Vec2 {
        self.position
    }
}

impl<S: ActorState> Member for Snapshot<S> {
    fn id(&self) -> ActorId {
        self.id
    }

    fn kind(&self) -> ActorKind {
        self.kind
    }
}
