mod cli;
pub mod demos;
mod error;
pub mod parse;

pub use cli::Cli;
pub use error::Error;
