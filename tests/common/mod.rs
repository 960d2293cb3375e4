//! Grazing and workshop domain used by the integration tests
#![allow(dead_code)]

use troupe::entity::{Desire, Inventory, IDLE};
use troupe::simulation::{Commands, Plan, Scene};
use troupe::{
    Actor, ActorId, ActorKind, ActorState, Environment, Rect, SimulationConfig, Snapshot, Vec2,
};

pub const GRASS: ActorKind = ActorKind::new("Grass");
pub const PREY: ActorKind = ActorKind::new("Prey");
pub const STORAGE: ActorKind = ActorKind::new("Storage");
pub const WORKER: ActorKind = ActorKind::new("Worker");

/// Hunger at or below which prey look for a mate instead of food
pub const SATED: f32 = 30.0;
/// Hunger above which prey starve
pub const STARVED: f32 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Part {
    Engine,
    Wheel,
    Seat,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Life {
    Grass { nutrition: f32, consumed: bool },
    Prey { hunger: f32, offspring: bool },
    Storage { stock: Inventory<Part> },
    Worker { parts: Inventory<Part> },
}

#[derive(Debug, Clone)]
pub enum Interaction {
    Eat,
    Mate,
    Withdraw(Part),
}

#[derive(Debug, Clone)]
pub enum Routine {
    Reproduce,
    Assemble,
}

#[derive(Debug, Clone)]
pub enum Filter {
    Stocks(Part),
}

#[derive(Debug, Clone)]
pub enum Trigger {
    Starving,
}

impl ActorState for Life {
    type Interaction = Interaction;
    type Routine = Routine;
    type Filter = Filter;
    type Trigger = Trigger;

    fn accepts(filter: &Filter, candidate: &Snapshot<Self>) -> bool {
        match (filter, &candidate.state) {
            (Filter::Stocks(part), Life::Storage { stock }) => stock.count(*part) > 0,
            _ => false,
        }
    }

    fn triggered(trigger: &Trigger, agent: &Actor<Self>) -> bool {
        match (trigger, &agent.state) {
            // Only while idle, so the reflex does not keep replacing its own sub-goals
            (Trigger::Starving, Life::Prey { hunger, .. }) => {
                *hunger > 80.0 && agent.intention_name() == Some(IDLE)
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
        let target_id = target.id();
        match (interaction, &mut agent.state, &mut target.state) {
            (Interaction::Eat, Life::Prey { hunger, .. }, Life::Grass { nutrition, consumed }) => {
                if *consumed {
                    return;
                }
                *consumed = true;
                *hunger = (*hunger - *nutrition).max(0.0);
                commands.despawn(target_id);
            }
            (
                Interaction::Mate,
                Life::Prey { hunger, offspring },
                Life::Prey { hunger: partner, .. },
            ) => {
                *hunger += 20.0;
                *partner += 20.0;
                *offspring = true;
            }
            (Interaction::Withdraw(part), Life::Worker { parts }, Life::Storage { stock }) => {
                if stock.withdraw(*part, 1) {
                    parts.deposit(*part, 1);
                }
            }
            _ => {}
        }
    }

    fn perform(routine: &Routine, agent: &mut Actor<Self>, _scene: &mut Scene<'_, Self>) {
        match (routine, &agent.state) {
            (Routine::Reproduce, Life::Prey { hunger, .. }) => {
                if *hunger > SATED {
                    agent.action_interact_closest(GRASS, Interaction::Eat);
                } else {
                    agent.action_interact_closest(PREY, Interaction::Mate);
                }
            }
            (Routine::Assemble, Life::Worker { parts }) => {
                if let Some(part) = parts.least_stocked() {
                    let withdraw = Interaction::Withdraw(part);
                    agent.action_interact_where(STORAGE, Filter::Stocks(part), withdraw, None);
                }
            }
            _ => {}
        }
    }

    fn update(actor: &mut Actor<Self>, scene: &mut Scene<'_, Self>) {
        let Life::Prey { hunger, offspring } = &mut actor.state else {
            return;
        };
        *hunger += scene.delta;
        let starved = *hunger > STARVED;
        let breed = std::mem::take(offspring);

        actor.wraparound(&scene.bounds);
        if starved {
            scene.despawn(actor.id());
        }
        if breed {
            let child = prey_with_id(ActorId::from_rng(&mut *scene.rng), actor.position, 50.0);
            scene.spawn(child);
        }
    }
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn environment(seed: u64) -> Environment<Life> {
    init_tracing();
    Environment::new(Rect::new(0.0, 0.0, 400.0, 400.0), SimulationConfig::default().with_seed(seed))
        .expect("default config is valid")
}

pub fn grass(position: Vec2) -> Actor<Life> {
    grass_with_id(ActorId::new(), position)
}

pub fn grass_with_id(id: ActorId, position: Vec2) -> Actor<Life> {
    Actor::with_id(id, GRASS, position, Life::Grass { nutrition: 30.0, consumed: false })
        .with_footprint(Vec2::new(8.0, 8.0))
}

/// Prey that can see 20 and reach 2, standing still
pub fn prey(position: Vec2, hunger: f32) -> Actor<Life> {
    prey_with_id(ActorId::new(), position, hunger)
}

pub fn prey_with_id(id: ActorId, position: Vec2, hunger: f32) -> Actor<Life> {
    Actor::with_id(id, PREY, position, Life::Prey { hunger, offspring: false })
        .with_layer(3)
        .with_direction(Vec2::ZERO)
        .with_footprint(Vec2::new(16.0, 16.0))
        .with_senses(20.0, 2.0)
        .with_mind()
        .with_speed(10.0)
}

/// Prey whose standing desire is to reproduce
pub fn breeding_prey(id: ActorId, position: Vec2, hunger: f32) -> Actor<Life> {
    let mut prey = prey_with_id(id, position, hunger);
    desire(&mut prey, "Reproduce", Routine::Reproduce);
    prey
}

pub fn storage(position: Vec2, stock: &[(Part, u32)]) -> Actor<Life> {
    let mut inventory = Inventory::with_kinds([Part::Engine, Part::Wheel, Part::Seat]);
    for &(part, count) in stock {
        inventory.deposit(part, count);
    }
    Actor::new(STORAGE, position, Life::Storage { stock: inventory })
}

pub fn worker(position: Vec2, parts: Inventory<Part>) -> Actor<Life> {
    let mut worker = Actor::new(WORKER, position, Life::Worker { parts })
        .with_direction(Vec2::ZERO)
        .with_senses(64.0, 16.0)
        .with_mind()
        .with_speed(10.0);
    desire(&mut worker, "Assemble", Routine::Assemble);
    worker
}

/// Give an agent a standing desire that outranks idling
pub fn desire(agent: &mut Actor<Life>, name: &str, routine: Routine) {
    if let Some(mind) = agent.mind.as_mut() {
        mind.desires.insert(Desire::new(name, 1, Plan::Routine(routine)));
    }
}

pub fn hunger(actor: &Actor<Life>) -> f32 {
    match actor.state {
        Life::Prey { hunger, .. } => hunger,
        _ => f32::NAN,
    }
}

pub fn stock(actor: &Actor<Life>) -> Option<&Inventory<Part>> {
    match &actor.state {
        Life::Storage { stock } => Some(stock),
        Life::Worker { parts } => Some(parts),
        _ => None,
    }
}
