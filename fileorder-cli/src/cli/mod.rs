pub mod args;
pub mod types;

pub use args::{Cli, Commands, ConventionArgs, GroupArgs, MoveArg};
pub use types::{OutputFormat, PreviewArg};
