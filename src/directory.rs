//! Directory domain types: validated identifiers, principals, and tenants.

pub mod id;
pub mod principal;
pub mod tenant;

pub use id::*;
pub use principal::*;
pub use tenant::*;
