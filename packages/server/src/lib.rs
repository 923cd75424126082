// WordPress content studio - API core
//
// Generates blog content through an AI collaborator and publishes it to
// WordPress sites over the REST API. Site credentials arrive per request;
// nothing is persisted.

pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
