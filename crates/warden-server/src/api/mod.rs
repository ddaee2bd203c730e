pub mod health;
pub mod rights;
pub mod sessions;
pub mod users;
