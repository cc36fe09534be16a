//! Data loading and validation for card and map content.

mod builtin;
pub mod load;
pub mod schema;

pub use builtin::*;
pub use load::*;
pub use schema::*;
