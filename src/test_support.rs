//! Small foraging domain shared by the unit tests

use crate::core::types::Vec2;
use crate::entity::actor::{Actor, ActorKind, ActorState, Snapshot};
use crate::simulation::scene::{Commands, Scene};

pub const FOOD: ActorKind = ActorKind::new("Food");
pub const FORAGER: ActorKind = ActorKind::new("Forager");

#[derive(Debug, Clone, PartialEq)]
pub enum Critter {
    Food { nutrition: u32, eaten: bool },
    Forager { fed: u32 },
}

#[derive(Debug, Clone)]
pub enum Interaction {
    Eat,
}

#[derive(Debug, Clone)]
pub enum Filter {
    MinNutrition(u32),
}

#[derive(Debug, Clone)]
pub enum Trigger {
    Hungry,
    FedAtLeast(u32),
    Exploring,
}

#[derive(Debug, Clone)]
pub enum Routine {
    Forage,
    /// Give up the current intention
    Rest,
}

impl ActorState for Critter {
    type Interaction = Interaction;
    type Routine = Routine;
    type Filter = Filter;
    type Trigger = Trigger;

    fn accepts(filter: &Filter, candidate: &Snapshot<Self>) -> bool {
        match (filter, &candidate.state) {
            (Filter::MinNutrition(min), Critter::Food { nutrition, .. }) => nutrition >= min,
            _ => false,
        }
    }

    fn triggered(trigger: &Trigger, agent: &Actor<Self>) -> bool {
        match (trigger, &agent.state) {
            (Trigger::Hungry, Critter::Forager { fed }) => *fed == 0,
            (Trigger::FedAtLeast(n), Critter::Forager { fed }) => fed >= n,
            (Trigger::Exploring, _) => {
                agent.intention_name().is_some_and(|name| name.starts_with("Explore"))
            }
            _ => false,
        }
    }

    fn interact(
        interaction: &Interaction,
        agent: &mut Actor<Self>,
        target: &mut Actor<Self>,
        commands: &mut Commands<Self>,
    ) {
        match interaction {
            Interaction::Eat => {
                let id = target.id();
                let Critter::Food { nutrition, eaten } = &mut target.state else {
                    return;
                };
                if *eaten {
                    return;
                }
                *eaten = true;
                commands.despawn(id);
                if let Critter::Forager { fed } = &mut agent.state {
                    *fed += *nutrition;
                }
            }
        }
    }

    fn perform(routine: &Routine, agent: &mut Actor<Self>, _scene: &mut Scene<'_, Self>) {
        match routine {
            Routine::Forage => agent.action_interact_closest(FOOD, Interaction::Eat),
            Routine::Rest => {
                if let Some(name) = agent.intention_name().map(str::to_string) {
                    agent.retire(&name);
                }
            }
        }
    }
}

pub fn food(position: Vec2, nutrition: u32) -> Actor<Critter> {
    Actor::new(FOOD, position, Critter::Food { nutrition, eaten: false })
}

pub fn forager(position: Vec2) -> Actor<Critter> {
    Actor::new(FORAGER, position, Critter::Forager { fed: 0 })
        .with_senses(50.0, 2.0)
        .with_mind()
        .with_speed(10.0)
}

pub fn fed(actor: &Actor<Critter>) -> u32 {
    match actor.state {
        Critter::Forager { fed } => fed,
        _ => 0,
    }
}
