//! Content module - CMS models, wire decoding and display views

mod markdown;
mod post;
pub mod strapi;
mod view;

pub use markdown::MarkdownRenderer;
pub use post::{Author, Category, Media, Post};
pub use view::{PostView, ViewBuilder};
