//! Authentication: credential storage, bcrypt verification, and
//! htpasswd file handling.

pub mod htpasswd;
pub mod store;

pub use store::CredentialStore;
