//! Desires and reflexes
//!
//! The intention is never stored: it is always the strongest desire in the
//! set, with ties going to the desire inserted first.

use std::fmt;

use crate::entity::actor::ActorState;
use crate::simulation::plans::Plan;

/// Name of the fallback desire every agent holds
pub const IDLE: &str = "Idle";

/// A named, weighted goal with the plan that pursues it
#[derive(Debug, Clone)]
pub struct Desire<S: ActorState> {
    pub name: String,
    pub strength: i64,
    pub plan: Plan<S>,
}

impl<S: ActorState> Desire<S> {
    pub fn new(name: impl Into<String>, strength: i64, plan: Plan<S>) -> Self {
        Self { name: name.into(), strength, plan }
    }

    pub fn idle() -> Self {
        Self::new(IDLE, 0, Plan::Idle)
    }
}

/// Desires are identified by name alone
impl<S: ActorState> PartialEq for Desire<S> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl<S: ActorState> Eq for Desire<S> {}

impl<S: ActorState> fmt::Display for Desire<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.strength)
    }
}

/// The working goal set of an agent; never empty
#[derive(Debug, Clone)]
pub struct DesireSet<S: ActorState> {
    idle: Desire<S>,
    others: Vec<Desire<S>>,
}

impl<S: ActorState> Default for DesireSet<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: ActorState> DesireSet<S> {
    pub fn new() -> Self {
        Self { idle: Desire::idle(), others: Vec::new() }
    }

    /// The strongest desire; the earliest inserted wins a tie
    pub fn intention(&self) -> &Desire<S> {
        self.others
            .iter()
            .fold(&self.idle, |best, desire| {
                if desire.strength > best.strength {
                    desire
                } else {
                    best
                }
            })
    }

    /// Insert a desire, replacing one with the same name in place
    pub fn insert(&mut self, desire: Desire<S>) {
        if desire.name == IDLE {
            self.idle = desire;
            return;
        }
        match self.others.iter_mut().find(|d| d.name == desire.name) {
            Some(existing) => *existing = desire,
            None => self.others.push(desire),
        }
    }

    /// Insert `desire` so that it is at least tied for strongest
    ///
    /// A strength that already beats the current intention is kept; otherwise
    /// it becomes the intention's strength plus one.
    pub fn intend(&mut self, mut desire: Desire<S>) {
        let top = self.intention().strength;
        if desire.strength <= top {
            desire.strength = top.saturating_add(1).max(0);
        }
        self.insert(desire);
    }

    /// Make a fresh desire called `name` the intention
    pub fn set_intention(&mut self, name: impl Into<String>, plan: Plan<S>) {
        self.intend(Desire::new(name, 0, plan));
    }

    /// Drop the named desire
    ///
    /// Retiring the idle desire restores the fallback instead, so the set can
    /// never become empty. Returns false if no such desire existed.
    pub fn retire(&mut self, name: &str) -> bool {
        if name == IDLE {
            self.idle = Desire::idle();
            return true;
        }
        let before = self.others.len();
        self.others.retain(|d| d.name != name);
        self.others.len() != before
    }

    pub fn get(&self, name: &str) -> Option<&Desire<S>> {
        self.iter().find(|d| d.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Desires in insertion order, idle first
    pub fn iter(&self) -> impl Iterator<Item = &Desire<S>> {
        std::iter::once(&self.idle).chain(self.others.iter())
    }

    pub fn len(&self) -> usize {
        self.others.len() + 1
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

/// A reaction checked every tick, independent of the intention
#[derive(Debug, Clone)]
pub struct Reflex<S: ActorState> {
    pub name: String,
    pub condition: S::Trigger,
    pub routine: S::Routine,
}

impl<S: ActorState> Reflex<S> {
    pub fn new(name: impl Into<String>, condition: S::Trigger, routine: S::Routine) -> Self {
        Self { name: name.into(), condition, routine }
    }
}
