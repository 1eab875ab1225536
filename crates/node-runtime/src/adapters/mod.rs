//! Port implementations connecting the node to its external collaborators.

pub mod bridge;
pub mod collaborators;
pub mod research;

pub use bridge::ProcessScoringBridge;
pub use collaborators::{StaticBeaconPort, StaticChainView, StaticWalletView};
pub use research::ProcessResearchSource;
