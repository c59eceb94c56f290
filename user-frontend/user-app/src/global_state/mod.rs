pub mod alert;
pub mod users;
