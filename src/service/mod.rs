//! Request validation ahead of the store.

mod validation;
pub use validation::{RequestValidator, MAX_PRICE, MAX_TEXT_LEN};
