//! Customer cart lifecycle handlers.

mod create_empty_cart;
mod deactivate_cart;

pub use create_empty_cart::{CreateEmptyCartCommand, CreateEmptyCartHandler};
pub use deactivate_cart::{DeactivateCartCommand, DeactivateCartHandler};
