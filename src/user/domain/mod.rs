//! Domain model for users referenced by issues.

mod ids;
mod user;

pub use ids::UserId;
pub use user::User;
