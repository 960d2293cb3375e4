//! Plan library - travel, explore and interact
//!
//! Plans are data. An action builder picks a target, wraps what it needs in a
//! [`Plan`] and makes it the agent's intention; [`execute`] runs one step of
//! the intention every tick. Every plan retires its own desire when it is
//! done, by name, so a plan that installs a sub-goal never retires the
//! sub-goal by accident.
//!
//! Interaction is the only multi-step plan. Its resolution order is fixed:
//! forgotten target, travel until observable, travel until reachable,
//! interact.

use ordered_float::OrderedFloat;

use crate::core::types::{ActorId, Vec2};
use crate::entity::actor::{Actor, ActorKind, ActorState, Snapshot};
use crate::entity::beliefs::BeliefStore;
use crate::simulation::scene::Scene;

/// Condition that ends an exploration
#[derive(Debug, Clone)]
pub enum Goal<S: ActorState> {
    /// Any actor of the kind is in view
    Observe(ActorKind),
    /// An actor of the kind accepted by the filter is in view
    ObserveWhere(ActorKind, S::Filter),
    /// The actor is remembered
    Recollect(ActorKind, ActorId),
    /// A domain condition on the agent holds
    Trigger(S::Trigger),
}

impl<S: ActorState> Goal<S> {
    pub fn reached(&self, agent: &Actor<S>) -> bool {
        match self {
            Goal::Observe(kind) => agent.senses.as_ref().is_some_and(|s| !s.look(*kind).is_empty()),
            Goal::ObserveWhere(kind, filter) => agent.senses.as_ref().is_some_and(|s| {
                !s.look_where(*kind, |candidate| S::accepts(filter, candidate)).is_empty()
            }),
            Goal::Recollect(kind, id) => agent
                .mind
                .as_ref()
                .is_some_and(|m| m.beliefs.recollect_id(*kind, *id).is_some()),
            Goal::Trigger(trigger) => S::triggered(trigger, agent),
        }
    }

    fn kind(&self) -> Option<ActorKind> {
        match self {
            Goal::Observe(kind) | Goal::ObserveWhere(kind, _) | Goal::Recollect(kind, _) => {
                Some(*kind)
            }
            Goal::Trigger(_) => None,
        }
    }
}

/// What a desire does while it is the intention
#[derive(Debug, Clone)]
pub enum Plan<S: ActorState> {
    Idle,
    /// Head for `destination` until within `tolerance` of it
    Travel { destination: Vec2, tolerance: f32 },
    /// Wander randomly until the goal is reached
    Explore { goal: Goal<S> },
    /// Resolve the target and interact with it once in reach
    Interact { target: Snapshot<S>, interaction: S::Interaction },
    /// Domain-defined behaviour
    Routine(S::Routine),
}

fn labelled(prefix: &str, kind: ActorKind) -> String {
    format!("{} ({})", prefix, kind)
}

impl<S: ActorState> Actor<S> {
    /// Make `plan` the intention under `name`
    ///
    /// The new desire outranks every existing one. Actors without a mind
    /// cannot hold intentions; the request is dropped with a warning.
    pub fn set_intention(&mut self, name: impl Into<String>, plan: Plan<S>) {
        let name = name.into();
        let Some(mind) = self.mind.as_mut() else {
            tracing::warn!(actor = %self, desire = %name, "intention ignored, actor has no mind");
            return;
        };
        mind.set_intention(name, plan);
    }

    /// Retire a desire by name; returns false if the agent never held it
    pub fn retire(&mut self, name: &str) -> bool {
        self.mind.as_mut().is_some_and(|mind| mind.retire(name))
    }

    pub fn intention_name(&self) -> Option<&str> {
        self.mind.as_ref().map(|mind| mind.intention().name.as_str())
    }

    pub fn action_travel(&mut self, destination: Vec2, tolerance: f32, name: Option<&str>) {
        self.set_intention(name.unwrap_or("Travel"), Plan::Travel { destination, tolerance });
    }

    pub fn action_explore(&mut self, goal: Goal<S>, name: Option<&str>) {
        let name = match (name, goal.kind()) {
            (Some(name), _) => name.to_string(),
            (None, Some(kind)) => labelled("Explore", kind),
            (None, None) => "Explore".to_string(),
        };
        self.set_intention(name, Plan::Explore { goal });
    }

    /// Interact with a specific, previously seen actor
    pub fn action_interact_with(
        &mut self,
        target: Snapshot<S>,
        interaction: S::Interaction,
        name: Option<&str>,
    ) {
        self.set_intention(name.unwrap_or("Interact With"), Plan::Interact { target, interaction });
    }

    fn interact_or_explore(
        &mut self,
        kind: ActorKind,
        candidate: Option<Snapshot<S>>,
        prefix: &str,
        interaction: S::Interaction,
        goal: Goal<S>,
    ) {
        match candidate {
            Some(target) => {
                self.action_interact_with(target, interaction, Some(&labelled(prefix, kind)))
            }
            None => self.action_explore(goal, None),
        }
    }

    fn remembered(
        &self,
        select: impl FnOnce(&BeliefStore<S>) -> Option<&Snapshot<S>>,
    ) -> Option<Snapshot<S>> {
        self.mind.as_ref().and_then(|mind| select(&mind.beliefs)).cloned()
    }

    /// Interact with any remembered actor of `kind`, exploring if there is none
    ///
    /// Picks the first belief in id order.
    pub fn action_interact_any(
        &mut self,
        kind: ActorKind,
        interaction: S::Interaction,
        name: Option<&str>,
    ) {
        let candidate = self.remembered(|beliefs| beliefs.recollect(kind).into_iter().next());
        let name = name.unwrap_or("Interact Any");
        self.interact_or_explore(kind, candidate, name, interaction, Goal::Observe(kind));
    }

    /// Interact with a remembered actor the filter accepts, exploring until one is seen
    pub fn action_interact_where(
        &mut self,
        kind: ActorKind,
        filter: S::Filter,
        interaction: S::Interaction,
        name: Option<&str>,
    ) {
        let candidate = self.remembered(|beliefs| {
            beliefs
                .recollect_where(kind, |belief| S::accepts(&filter, belief))
                .into_iter()
                .next()
        });
        self.interact_or_explore(
            kind,
            candidate,
            name.unwrap_or("Interact Where"),
            interaction,
            Goal::ObserveWhere(kind, filter),
        );
    }

    pub fn action_interact_min<K: Ord>(
        &mut self,
        kind: ActorKind,
        interaction: S::Interaction,
        key: impl Fn(&Snapshot<S>) -> K,
        name: Option<&str>,
    ) {
        match self.remembered(|beliefs| beliefs.recollect_min(kind, key)) {
            Some(target) => {
                let name = labelled(name.unwrap_or("Interact Min"), kind);
                self.action_interact_with(target, interaction, Some(&name))
            }
            None => self.action_interact_any(kind, interaction, None),
        }
    }

    pub fn action_interact_max<K: Ord>(
        &mut self,
        kind: ActorKind,
        interaction: S::Interaction,
        key: impl Fn(&Snapshot<S>) -> K,
        name: Option<&str>,
    ) {
        match self.remembered(|beliefs| beliefs.recollect_max(kind, key)) {
            Some(target) => {
                let name = labelled(name.unwrap_or("Interact Max"), kind);
                self.action_interact_with(target, interaction, Some(&name))
            }
            None => self.action_interact_any(kind, interaction, None),
        }
    }

    /// Interact with the nearest remembered actor of `kind`
    pub fn action_interact_closest(&mut self, kind: ActorKind, interaction: S::Interaction) {
        let origin = self.position;
        self.action_interact_min(
            kind,
            interaction,
            |belief| OrderedFloat(origin.distance(&belief.position)),
            Some("Interact Closest"),
        );
    }
}

/// Run one step of the plan attached to the desire called `name`
pub fn execute<S: ActorState>(
    name: &str,
    plan: &Plan<S>,
    agent: &mut Actor<S>,
    scene: &mut Scene<'_, S>,
) {
    match plan {
        Plan::Idle => {}
        Plan::Travel { destination, tolerance } => {
            plan_travel(name, *destination, *tolerance, agent)
        }
        Plan::Explore { goal } => plan_explore(name, goal, agent, scene),
        Plan::Interact { target, interaction } => {
            plan_interact(name, target, interaction, agent, scene)
        }
        Plan::Routine(routine) => S::perform(routine, agent, scene),
    }
}

fn plan_travel<S: ActorState>(name: &str, destination: Vec2, tolerance: f32, agent: &mut Actor<S>) {
    if agent.within_distance(destination, tolerance) {
        agent.retire(name);
        return;
    }
    agent.steer_towards(destination);
}

fn plan_explore<S: ActorState>(
    name: &str,
    goal: &Goal<S>,
    agent: &mut Actor<S>,
    scene: &mut Scene<'_, S>,
) {
    if goal.reached(agent) {
        agent.retire(name);
        return;
    }
    let (interval, blend) = (scene.config.random_steer_interval, scene.config.random_steer_blend);
    agent.steer_random(&mut *scene.rng, interval, blend);
}

fn plan_interact<S: ActorState>(
    name: &str,
    target: &Snapshot<S>,
    interaction: &S::Interaction,
    agent: &mut Actor<S>,
    scene: &mut Scene<'_, S>,
) {
    let (kind, id) = (target.kind, target.id);

    let known = agent
        .mind
        .as_ref()
        .is_some_and(|mind| mind.beliefs.recollect_id(kind, id).is_some());
    if !known {
        tracing::warn!(
            agent = %agent,
            target = %target,
            "Impossible to interact with {} (no knowledge)",
            target
        );
        agent.retire(name);
        return;
    }

    let observed = agent.senses.as_ref().and_then(|senses| senses.look_id(kind, id)).cloned();
    let resolved = match observed {
        Some(live) => live,
        None if target.is_belief => {
            let tolerance = agent.observable_distance();
            agent.action_travel(target.position, tolerance, Some(&labelled("Travel-O", kind)));
            return;
        }
        // Not in sight, but a live handle: reach is judged where it is now
        None => match scene.get(id) {
            Some(live) => live.snapshot(),
            None => {
                tracing::warn!(agent = %agent, target = %target, "interaction target vanished");
                agent.retire(name);
                return;
            }
        },
    };

    if !agent.can_interact(&resolved) {
        let tolerance = agent.interactable_distance();
        agent.action_travel(resolved.position, tolerance, Some(&labelled("Travel-I", kind)));
        return;
    }

    match scene.target_mut(id) {
        Some((live, commands)) => S::interact(interaction, agent, live, commands),
        None => tracing::warn!(agent = %agent, target = %resolved, "interaction target vanished"),
    }
    agent.retire(name);
}
