//! User directory for issue assignment.
//!
//! Users are owned elsewhere; this module only exposes the lookup contract
//! the issue service needs to resolve an assignee reference, plus an
//! in-memory directory used by tests and local wiring.
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;
