//! Property tests for intention arbitration

mod common;

use common::Life;
use proptest::prelude::*;
use troupe::entity::{Desire, DesireSet, IDLE};
use troupe::Plan;

const NAMES: [&str; 4] = [IDLE, "Eat", "Travel", "Explore"];

#[derive(Debug, Clone)]
enum Op {
    Intend(usize),
    Insert(usize, i64),
    Retire(usize),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..NAMES.len()).prop_map(Op::Intend),
        (0..NAMES.len(), -5i64..20).prop_map(|(n, s)| Op::Insert(n, s)),
        (0..NAMES.len()).prop_map(Op::Retire),
    ]
}

proptest! {
    #[test]
    fn prop_desire_set_is_never_empty(ops in prop::collection::vec(op(), 0..60)) {
        let mut desires: DesireSet<Life> = DesireSet::new();
        for op in ops {
            match op {
                Op::Intend(n) => desires.set_intention(NAMES[n], Plan::Idle),
                Op::Insert(n, strength) => {
                    desires.insert(Desire::new(NAMES[n], strength, Plan::Idle))
                }
                Op::Retire(n) => {
                    desires.retire(NAMES[n]);
                }
            }
            prop_assert!(desires.len() >= 1);
            prop_assert!(desires.contains(IDLE));
        }
    }

    #[test]
    fn prop_new_intention_outranks_existing_desires(
        setup in prop::collection::vec((0..NAMES.len(), -5i64..20), 0..10),
        chosen in 0..NAMES.len(),
    ) {
        let mut desires: DesireSet<Life> = DesireSet::new();
        for (n, strength) in setup {
            desires.insert(Desire::new(NAMES[n], strength, Plan::Idle));
        }

        desires.set_intention(NAMES[chosen], Plan::Idle);

        let strength = desires.get(NAMES[chosen]).map(|d| d.strength).unwrap();
        prop_assert!(desires.iter().all(|d| strength >= d.strength));
        prop_assert_eq!(desires.intention().name.as_str(), NAMES[chosen]);
        prop_assert_eq!(desires.iter().filter(|d| d.name == NAMES[chosen]).count(), 1);
    }
}
