//! Embed claim sets, redaction wrappers, and the credential issuer.

pub mod claims;
pub mod issuer;
pub mod secret;

pub use claims::*;
pub use issuer::*;
pub use secret::*;
