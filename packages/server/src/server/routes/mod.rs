// HTTP routes
pub mod generate;
pub mod health;
pub mod wordpress;

pub use generate::*;
pub use health::*;
pub use wordpress::*;
