//! NGO directory subsystem.
//!
//! A typed, read-only store of NGO records loaded from a JSON dataset file,
//! with a built-in fallback dataset. Records without coordinates stay
//! listable but never enter proximity ranking.

pub mod builtin;
pub mod store;
pub mod types;

pub use store::NgoDirectory;
pub use types::{DirectoryError, Ngo, SitedNgo};
