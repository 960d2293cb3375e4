pub mod actor;
pub mod beliefs;
pub mod desires;
pub mod inventory;
pub mod mind;
pub mod senses;
pub mod troupe;

pub use actor::{Actor, ActorKind, ActorState, Snapshot};
pub use beliefs::{update_beliefs, BeliefStore};
pub use desires::{Desire, DesireSet, Reflex, IDLE};
pub use inventory::Inventory;
pub use mind::Mind;
pub use senses::Senses;
pub use troupe::{Member, Troupe};
