//! Ports connecting the gateway to external collaborators.

pub mod outbound;

pub use outbound::{ResearchSource, ScoringBridge, SystemTimeSource, TimeSource};
