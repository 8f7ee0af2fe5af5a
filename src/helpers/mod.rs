//! Helper functions shared by the content pipeline and the feed

mod date;
mod reading_time;
mod url;

pub use date::*;
pub use reading_time::*;
pub use url::*;
