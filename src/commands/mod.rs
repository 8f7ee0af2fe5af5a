//! CLI commands

pub mod check;
pub mod clean;
pub mod feed;
pub mod list;
pub mod new;
