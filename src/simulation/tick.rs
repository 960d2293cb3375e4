//! Tick system - advances the environment one step
//!
//! Each tick: sort actors by layer, rebuild the spatial index, then update
//! every actor in order. An actor update is
//! movement -> perception -> belief update -> reflexes -> intention -> domain hook.
//!
//! Structural changes requested by actors land at the end of the tick, so the
//! next rebuild sees them.

use serde::Serialize;

use crate::entity::actor::{Actor, ActorState};
use crate::entity::beliefs::update_beliefs;
use crate::simulation::perception::observe;
use crate::simulation::plans;
use crate::simulation::scene::{Commands, Scene};
use crate::spatial::{Quadtree, SpatialEntry};
use crate::world::environment::Environment;

/// Summary of one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TickReport {
    pub tick: u64,
    /// Actors updated this tick
    pub updated: usize,
    pub observations: usize,
    /// Beliefs evicted as stale
    pub evicted: usize,
    pub spawned: usize,
    pub despawned: usize,
}

pub fn run_tick<S: ActorState>(env: &mut Environment<S>, delta: f32) -> TickReport {
    env.current_tick += 1;
    let mut report = TickReport { tick: env.current_tick, ..TickReport::default() };

    rebuild_index(env);

    let mut commands = Commands::new();
    for index in 0..env.actors.len() {
        if commands.is_despawned(env.actors[index].id()) {
            continue;
        }

        let (before, rest) = env.actors.split_at_mut(index);
        let Some((actor, after)) = rest.split_first_mut() else {
            break;
        };
        let mut scene = Scene::new(
            env.bounds,
            delta,
            env.current_tick,
            &env.config,
            &mut env.rng,
            &mut commands,
            &env.quadtree,
            &env.slots,
            before,
            after,
        );

        let (observed, evicted) = update_actor(actor, &mut scene);
        report.updated += 1;
        report.observations += observed;
        report.evicted += evicted;
    }

    let (spawned, despawned) = commands.take();
    report.spawned = spawned.len();
    report.despawned = despawned.len();
    env.actors.retain(|actor| !despawned.contains(&actor.id()));
    env.actors.extend(spawned);
    env.reindex();

    tracing::debug!(
        tick = report.tick,
        actors = env.actors.len(),
        observations = report.observations,
        evicted = report.evicted,
        spawned = report.spawned,
        despawned = report.despawned,
        "tick complete"
    );
    report
}

/// Stable-sort by layer, then rebuild the id index and the quadtree
pub(crate) fn rebuild_index<S: ActorState>(env: &mut Environment<S>) {
    env.actors.sort_by_key(|actor| actor.layer);
    env.reindex();

    let entries: Vec<SpatialEntry> = env
        .actors
        .iter()
        .map(|actor| SpatialEntry { id: actor.id(), kind: actor.kind(), position: actor.position })
        .collect();
    let (capacity, max_depth) = (env.config.quadtree_capacity, env.config.quadtree_max_depth);
    env.quadtree = Quadtree::new(env.bounds, &entries, capacity, max_depth);
}

/// Update one actor; returns (observations, evicted beliefs)
pub fn update_actor<S: ActorState>(
    actor: &mut Actor<S>,
    scene: &mut Scene<'_, S>,
) -> (usize, usize) {
    actor.advance(scene.delta);

    let mut observed = 0;
    let mut evicted = 0;
    if actor.is_agent() {
        observed = observe(actor, scene);
    }

    if let Some(mind) = actor.mind.as_ref() {
        let reflexes = mind.reflexes.len();
        evicted = update_beliefs(actor);

        for index in 0..reflexes {
            let routine = match actor.mind.as_ref().and_then(|mind| mind.reflexes.get(index)) {
                Some(reflex) if S::triggered(&reflex.condition, actor) => reflex.routine.clone(),
                _ => continue,
            };
            S::perform(&routine, actor, scene);
        }

        // The intention may change while its plan runs
        let intention = actor.mind.as_ref().map(|mind| {
            let intention = mind.intention();
            (intention.name.clone(), intention.plan.clone())
        });
        if let Some((name, plan)) = intention {
            plans::execute(&name, &plan, actor, scene);
        }
    }

    S::update(actor, scene);
    (observed, evicted)
}
