pub mod cache;
pub mod normalize;
pub mod user;

pub use cache::UserCache;
pub use normalize::normalize_users;
pub use user::{User, UserUpdate};
