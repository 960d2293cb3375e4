//! BDI mind - desires, reflexes and belief memory of one agent

use crate::entity::actor::ActorState;
use crate::entity::beliefs::BeliefStore;
use crate::entity::desires::{Desire, DesireSet, Reflex};
use crate::simulation::plans::Plan;

#[derive(Debug, Clone)]
pub struct Mind<S: ActorState> {
    pub desires: DesireSet<S>,
    pub reflexes: Vec<Reflex<S>>,
    pub beliefs: BeliefStore<S>,
}

impl<S: ActorState> Default for Mind<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: ActorState> Mind<S> {
    pub fn new() -> Self {
        Self {
            desires: DesireSet::new(),
            reflexes: Vec::new(),
            beliefs: BeliefStore::new(),
        }
    }

    pub fn intention(&self) -> &Desire<S> {
        self.desires.intention()
    }

    pub fn set_intention(&mut self, name: impl Into<String>, plan: Plan<S>) {
        self.desires.set_intention(name, plan);
    }

    pub fn retire(&mut self, name: &str) -> bool {
        self.desires.retire(name)
    }

    /// Add a reflex, replacing one with the same name
    pub fn add_reflex(&mut self, reflex: Reflex<S>) {
        match self.reflexes.iter_mut().find(|r| r.name == reflex.name) {
            Some(existing) => *existing = reflex,
            None => self.reflexes.push(reflex),
        }
    }

    pub fn remove_reflex(&mut self, name: &str) -> bool {
        let before = self.reflexes.len();
        self.reflexes.retain(|r| r.name != name);
        self.reflexes.len() != before
    }
}
