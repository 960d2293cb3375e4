//! End-to-end plan scenarios: travel, stale beliefs, reflexes

mod common;

use common::*;
use troupe::entity::IDLE;
use troupe::Vec2;

#[test]
fn test_travel_converges_and_retires() {
    let mut env = environment(1);
    let agent = env.add(prey(Vec2::ZERO, 0.0));
    env.actor_mut(agent).unwrap().action_travel(Vec2::new(100.0, 0.0), 5.0, None);

    let mut retired_at = None;
    for tick in 0..50 {
        env.update(1.0);
        if env.actor(agent).unwrap().intention_name() == Some(IDLE) {
            retired_at = Some(tick);
            break;
        }
    }

    assert!(retired_at.is_some(), "travel desire was never retired");
    let traveller = env.actor(agent).unwrap();
    assert!(traveller.position.distance(&Vec2::new(100.0, 0.0)) <= 5.0);
    assert!(!traveller.mind.as_ref().unwrap().desires.contains("Travel"));
}

#[test]
fn test_stale_belief_of_vanished_target_is_abandoned() {
    let mut env = environment(2);
    let ghost = grass(Vec2::new(50.0, 50.0));

    let mut hungry = prey(Vec2::ZERO, 60.0);
    hungry.mind.as_mut().unwrap().beliefs.remember(ghost.snapshot());
    hungry.action_interact_with(ghost.snapshot().as_belief(), Interaction::Eat, None);
    let agent = env.add(hungry);

    env.update(0.1);
    assert_eq!(env.actor(agent).unwrap().intention_name(), Some("Travel-O (Grass)"));

    for _ in 0..200 {
        env.update(0.1);
        if env.actor(agent).unwrap().intention_name() == Some(IDLE) {
            break;
        }
    }

    let agent = env.actor(agent).unwrap();
    assert_eq!(agent.intention_name(), Some(IDLE));
    let mind = agent.mind.as_ref().unwrap();
    assert!(mind.beliefs.recollect_id(GRASS, ghost.id()).is_none());
    assert!(!mind.desires.contains("Interact With"));
    // Made it within sight of where the grass was believed to be
    assert!(agent.position.distance(&Vec2::new(50.0, 50.0)) <= agent.observable_distance() + 1.0);
    assert!(hunger(agent) > 60.0);
}

#[test]
fn test_stale_belief_re_resolves_to_live_target() {
    let mut env = environment(3);
    let live = grass(Vec2::new(45.0, 45.0));
    let mut stale = live.snapshot();
    stale.position = Vec2::new(50.0, 50.0);
    let food = env.add(live);

    let mut hungry = prey(Vec2::ZERO, 60.0);
    hungry.mind.as_mut().unwrap().beliefs.remember(stale.clone());
    hungry.action_interact_with(stale.as_belief(), Interaction::Eat, None);
    let agent = env.add(hungry);

    let mut seen = Vec::new();
    for _ in 0..300 {
        env.update(0.1);
        if let Some(name) = env.actor(agent).unwrap().intention_name() {
            if seen.last().map(String::as_str) != Some(name) {
                seen.push(name.to_string());
            }
        }
        if env.actor(food).is_none() {
            break;
        }
    }

    assert!(env.actor(food).is_none(), "grass was never eaten: {:?}", seen);
    assert!(seen.iter().any(|name| name == "Travel-O (Grass)"));
    assert!(seen.iter().any(|name| name == "Travel-I (Grass)"));
    let position = |name: &str| seen.iter().position(|n| n == name);
    assert!(position("Travel-O (Grass)") < position("Travel-I (Grass)"));
    assert!(hunger(env.actor(agent).unwrap()) < 60.0);
}

#[test]
fn test_starving_reflex_sends_prey_to_food() {
    let mut env = environment(4);
    let food = env.add(grass(Vec2::new(105.0, 100.0)));
    let mut starving = prey(Vec2::new(100.0, 100.0), 85.0);
    starving
        .mind
        .as_mut()
        .unwrap()
        .add_reflex(troupe::entity::Reflex::new("Feed", Trigger::Starving, Routine::Reproduce));
    let agent = env.add(starving);

    env.update(0.1);
    assert_eq!(env.actor(agent).unwrap().intention_name(), Some("Travel-I (Grass)"));

    for _ in 0..20 {
        env.update(0.1);
    }
    assert!(env.actor(food).is_none());
    assert!(hunger(env.actor(agent).unwrap()) < 80.0);
}
