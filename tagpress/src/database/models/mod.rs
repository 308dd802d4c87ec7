pub mod post;
pub mod post_tag;
pub mod tag;
pub mod tag_ref;

pub use post::{Id as PostId, NewPost, Post, PostWithTags};
pub use post_tag::PostTag;
pub use tag::{Id as TagId, Tag};
pub use tag_ref::TagRef;

type Id = i32;
