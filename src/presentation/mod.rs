pub mod cli;
pub mod config;

pub use cli::{Cli, Command, ExtractArgs, run};
pub use config::{Environment, Settings};
