//! Unified diffs between build artifacts of a CI job
//!
//! A host embeds this crate on a run's page to compare that run's
//! archived artifacts against any other run of the same job:
//!
//! - `compare`: request parsing, run selection, and response assembly
//! - `diff`: Myers' diff, unified hunks, and line classification
//! - `error`: the rejection taxonomy mapped to http status codes
//! - `host`: the traits and ids a hosting system implements

pub mod compare;
pub mod diff;
pub mod error;
pub mod host;
