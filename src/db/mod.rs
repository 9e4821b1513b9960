pub mod connection;
pub mod submissions;
pub mod users;
pub mod verifications;

pub use connection::{init_db, Database};
