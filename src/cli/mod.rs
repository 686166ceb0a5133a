mod gallery;
mod output;
mod query;
mod root;

pub use root::Cli;
