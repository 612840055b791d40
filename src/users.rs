//! File-based user registry at ~/.ongradar/users.json.
//!
//! Keys are lowercased emails. Persistence is best-effort: a failed write
//! leaves the in-memory state authoritative for the process lifetime.
//! Passwords are stored and compared as provided.

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// A registered user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    pub name: String,
    pub email: String,
    pub password: String,
    /// Registration instant, milliseconds since the Unix epoch.
    pub registered_at: i64,
}

/// User registry errors.
#[derive(Debug, PartialEq, Eq)]
pub enum UserError {
    Invalid(String),
    Duplicate(String),
    UnknownUser(String),
    WrongPassword,
}

impl fmt::Display for UserError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invalid(msg) => write!(f, "Invalid registration: {}", msg),
            Self::Duplicate(email) => write!(f, "Already registered: '{}'", email),
            Self::UnknownUser(email) => write!(f, "No such user: '{}'", email),
            Self::WrongPassword => write!(f, "Wrong password"),
        }
    }
}

impl std::error::Error for UserError {}

/// The user store.
pub struct UserStore {
    path: PathBuf,
    users: HashMap<String, UserRecord>,
}

impl UserStore {
    /// Load the store from the default location (~/.ongradar/users.json).
    pub fn load() -> Self {
        Self::load_from(Self::default_path())
    }

    /// Load the store from a specific path (for testing and --users).
    pub fn load_from(path: PathBuf) -> Self {
        let users = Self::read_file(&path).unwrap_or_default();
        Self { path, users }
    }

    fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".ongradar")
            .join("users.json")
    }

    fn read_file(path: &PathBuf) -> Option<HashMap<String, UserRecord>> {
        let data = fs::read_to_string(path).ok()?;
        serde_json::from_str(&data).ok()
    }

    /// Register a new user and persist to disk.
    pub fn register(&mut self, name: &str, email: &str, password: &str) -> Result<UserRecord, UserError> {
        let name = name.trim();
        let email = email.trim();

        if name.is_empty() {
            return Err(UserError::Invalid("name must not be empty".into()));
        }
        if !email.contains('@') {
            return Err(UserError::Invalid(format!("'{}' is not an email address", email)));
        }
        if password.is_empty() {
            return Err(UserError::Invalid("password must not be empty".into()));
        }

        let key = email.to_lowercase();
        if self.users.contains_key(&key) {
            return Err(UserError::Duplicate(email.to_string()));
        }

        let record = UserRecord {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            registered_at: chrono::Utc::now().timestamp_millis(),
        };
        self.users.insert(key, record.clone());
        self.persist();
        Ok(record)
    }

    /// Check credentials, returning the matching record.
    pub fn verify(&self, email: &str, password: &str) -> Result<&UserRecord, UserError> {
        let key = email.trim().to_lowercase();
        let record = self
            .users
            .get(&key)
            .ok_or_else(|| UserError::UnknownUser(email.trim().to_string()))?;
        if record.password != password {
            return Err(UserError::WrongPassword);
        }
        Ok(record)
    }

    fn persist(&self) {
        if let Some(parent) = self.path.parent() {
            let _ = fs::create_dir_all(parent);
        }
        if let Ok(json) = serde_json::to_string_pretty(&self.users) {
            let _ = fs::write(&self.path, json);
        }
    }

    /// Number of registered users.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
