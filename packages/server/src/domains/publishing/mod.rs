//! WordPress publishing, search and fetch on behalf of the caller.

pub mod actions;
pub mod models;

pub use models::{FetchRequest, PublishRequest, SearchRequest, SiteConnection};
