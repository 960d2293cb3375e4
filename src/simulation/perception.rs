//! Perception - what an agent sees this tick

use crate::entity::actor::{Actor, ActorState};
use crate::simulation::scene::Scene;

/// Replace the agent's observations with snapshots of everything in range
///
/// Excludes the agent itself and anything despawned earlier in the tick.
/// Returns the number of observed actors; non-agents observe nothing.
pub fn observe<S: ActorState>(agent: &mut Actor<S>, scene: &Scene<'_, S>) -> usize {
    let (origin, id) = (agent.position, agent.id());
    let Some(senses) = agent.senses.as_mut() else {
        return 0;
    };
    senses.observations.clear();

    for entry in scene.query_radius(origin, senses.observable_distance) {
        if entry.id == id {
            continue;
        }
        if let Some(live) = scene.get(entry.id) {
            senses.observations.add(live.snapshot());
        }
    }
    senses.observations.len()
}
