//! Host-facing surface
//!
//! Everything the surrounding build system provides to, or receives from,
//! a comparison:
//!
//! - `artifact_path`: validated relative artifact paths
//! - `job`: the `JobHost` capability trait
//! - `run`: opaque run handles

pub mod artifact_path;
pub mod job;
pub mod run;

#[cfg(test)]
pub(crate) mod fake;
