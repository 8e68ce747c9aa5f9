//! Tracker: issue-tracking domain core.
//!
//! This crate manages the lifecycle of issues (creation, assignment, status
//! changes, and field updates) and enforces the rules that govern them,
//! independent of storage and transport.
//!
//! # Architecture
//!
//! Tracker follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports
//!
//! # Modules
//!
//! - [`issue`]: Issue entity, update commands, and the issue service
//! - [`user`]: User directory used to resolve assignees

pub mod issue;
pub mod user;
