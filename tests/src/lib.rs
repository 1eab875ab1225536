//! # ResearchChain Test Suite
//!
//! Unified test crate for flows that span rc-neural and rc-rpc:
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── consensus_flows.rs   # Gateway reads, quorum sync, cache semantics
//!     ├── dispatch_flows.rs    # Lookup, gating, type checks, error shapes
//!     └── help_surface.rs      # Catalog and help output
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p rc-tests
//! cargo test -p rc-tests integration::
//! ```

#![allow(dead_code)]
