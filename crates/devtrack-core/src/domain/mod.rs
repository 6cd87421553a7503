//! Domain entities - the core business objects.

mod credential;
mod filter;
mod post;

pub use credential::{Credential, GUEST_TOKEN};
pub use filter::PostFilter;
pub use post::{NewPost, Post, PostDraft};
