//! Kernel module - server infrastructure and dependencies.

pub mod deps;
pub mod openai;
pub mod schema;
pub mod test_dependencies;
pub mod traits;

pub use deps::ServerDeps;
pub use openai::OpenAIContentGenerator;
pub use schema::StructuredOutput;
pub use test_dependencies::{GeneratorCall, MockContentGenerator, TestDependencies};
pub use traits::*;
