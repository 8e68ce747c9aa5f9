//! Issue tracking.
//!
//! Manages the lifecycle of an issue through creation, assignment, status
//! changes, and field updates. A completed or cancelled issue is locked,
//! and an issue that is in progress or completed always has an assignee.
//! The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
