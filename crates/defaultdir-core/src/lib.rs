//! Resolve a default application directory.
//!
//! See [`DirResolver`] for the chain rules.
#![deny(unused_crate_dependencies)]

pub mod resolver;

pub use resolver::{
    DirResolver, DirSource, ProcessEnv, Resolution, ResolveError, SourceError, SystemEnv,
};
