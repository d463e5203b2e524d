//! CLI command implementations.

pub mod conventions;
pub mod load;

pub use conventions::ConventionsArgs;
pub use load::LoadArgs;
