//! SeaORM entity definitions.

pub mod comment;
pub mod post;
pub mod reaction;
pub mod user;
