//! Adapter implementations for issue persistence.

pub mod memory;
