pub mod args;
pub mod helpers;

pub use args::{Cli, Commands, SimulateArgs};
pub use helpers::{print_config, run_simulation};
