//! Domain entities - the core business objects.

mod image;
mod post;

pub use image::ImageUpload;
pub use post::{NewPost, Post, PostChanges, next_post_id};
