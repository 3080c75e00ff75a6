pub mod call;
pub mod customer;
pub mod dialogue;
pub mod intent;
pub mod order;
pub mod product;

pub use call::{CallDirection, CallRecord};
pub use customer::Customer;
pub use dialogue::{TurnInput, TurnOutcome, TurnState};
pub use intent::Intent;
pub use order::{find_order, OrderRow};
pub use product::{Catalog, Product};
