//! Line diffing
//!
//! Everything between raw artifact bytes and rendered unified-diff lines:
//!
//! - `classify`: line roles for presentation
//! - `hunk`: changed-region extraction and hunk grouping
//! - `myers`: shortest edit script computation
//! - `source`: lazy artifact content with absence handling
//! - `unified`: unified-diff rendering

pub mod classify;
pub mod hunk;
pub mod myers;
pub mod source;
pub mod unified;
