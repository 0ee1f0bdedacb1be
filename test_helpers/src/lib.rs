//! Test helpers shared across the stubsmith workspace.
//!
//! - [`fixtures`] holds sample descriptors and a model schema snapshot.
//! - [`rbi`] pulls individual blocks and method names out of rendered text.
//! - [`units`] provides scripted generator units that declare, fail or panic
//!   on demand.

pub mod fixtures;
pub mod rbi;
pub mod units;
