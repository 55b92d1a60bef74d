//! Domain types

mod ids;
mod user;

pub use ids::new_user_id;
pub use user::{CreateUser, UpdateUser, User};
