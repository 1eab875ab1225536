//! Command handlers, grouped by category.
//!
//! Every handler is a plain function returning a boxed future so it can be
//! stored in the registry. Handlers validate their own parameters (the type
//! check is per-handler, not universal) and return only [`RpcError`] on
//! failure.
//!
//! [`RpcError`]: crate::domain::error::RpcError

pub mod deprecated;
pub mod developer;
pub mod neural;
pub mod network;
pub mod wallet;
