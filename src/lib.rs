pub mod boundary;
pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod resolver;
pub mod ui;

pub use error::{ResolveError, Result};
pub use resolver::{resolve, Resolution, ResolveOptions, Resolver};
