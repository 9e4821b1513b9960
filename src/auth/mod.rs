pub mod sessions;
pub mod token;
pub mod verifier;

pub use sessions::Session;
pub use verifier::{AuthVerifier, RemoteVerifier};
