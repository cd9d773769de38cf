//! Metro route planner CLI library.
//!
//! This crate provides the output formatting used by the `metroroute`
//! binary so it can be exercised from tests without spawning a process.

pub mod output;
