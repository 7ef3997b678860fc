//! Query library: literal statements, values always bound as parameters.

mod builder;
pub mod queries;
pub use builder::*;
