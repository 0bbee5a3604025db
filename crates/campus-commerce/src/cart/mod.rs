//! Shopping cart module.
//!
//! [`Cart`] is the pure in-memory cart; [`CartEngine`] wraps it with
//! write-through persistence to a blob store.

mod cart;
mod engine;
mod summary;

pub use cart::{Cart, CartLine};
pub use engine::CartEngine;
pub use summary::{CartSummary, LineSummary};
