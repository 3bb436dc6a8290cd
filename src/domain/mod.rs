//! Domain types and models

mod order;
mod pickup;

pub use order::{ContactAddress, LineItem, ProductLine};
pub use pickup::PickupAddress;
