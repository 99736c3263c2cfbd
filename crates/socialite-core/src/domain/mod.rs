//! Domain entities - the core business objects.

mod comment;
mod post;
mod reaction;
mod user;

pub use comment::Comment;
pub use post::Post;
pub use reaction::{Reaction, ReactionType, UnknownReactionType};
pub use user::User;
