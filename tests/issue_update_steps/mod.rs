//! Step definitions for issue update behaviour tests.

pub mod then;
