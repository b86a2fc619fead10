//! Subcommand arguments and handlers.

pub mod generate;
pub mod inspect;
pub mod render;

pub use generate::GenerateArgs;
pub use inspect::InspectArgs;
pub use render::RenderArgs;
