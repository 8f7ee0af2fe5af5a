//! Content module - loads and validates the blog post collection

mod error;
pub mod frontmatter;
pub mod loader;
mod post;
pub mod schema;

pub use error::ContentError;
pub use loader::ContentLoader;
pub use post::Post;
pub use schema::{PostData, SchemaError};
