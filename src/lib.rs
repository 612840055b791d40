//! ONG Radar — an NGO directory with great-circle proximity search.
//!
//! The core is a pure ranking transform ([`rank`]) over the haversine
//! distance ([`geo`]); around it sit a typed JSON-backed directory store
//! ([`directory`]), a small file-based user registry ([`users`]), and a
//! JSON HTTP API ([`server`]).

pub mod directory;
pub mod geo;
pub mod rank;
pub mod server;
pub mod users;
