//! Core types for the directory subsystem.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::geo::GeoPoint;
use crate::rank::Located;

/// One NGO record as stored in the dataset.
///
/// Contact fields are optional — the upstream data is uneven. Coordinates
/// are optional too; a record missing either one is still a valid directory
/// entry, it just cannot be ranked by proximity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ngo {
    pub id: u32,
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lon: Option<f64>,
}

impl Ngo {
    /// The record's position, when both coordinates are present.
    pub fn position(&self) -> Option<GeoPoint> {
        match (self.lat, self.lon) {
            (Some(lat), Some(lon)) => Some(GeoPoint::new(lat, lon)),
            _ => None,
        }
    }
}

/// An NGO together with its verified coordinates.
///
/// Only the directory's filtering step produces these, so a `SitedNgo` in a
/// candidate set is a guarantee that both coordinates were present.
#[derive(Debug, Clone)]
pub struct SitedNgo {
    pub ngo: Ngo,
    pub at: GeoPoint,
}

impl Located for SitedNgo {
    fn position(&self) -> GeoPoint {
        self.at
    }
}

/// Directory loading errors.
#[derive(Debug)]
pub enum DirectoryError {
    Io(PathBuf, std::io::Error),
    Parse(PathBuf, serde_json::Error),
}

impl fmt::Display for DirectoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(path, e) => write!(f, "Cannot read dataset '{}': {}", path.display(), e),
            Self::Parse(path, e) => write!(f, "Invalid dataset '{}': {}", path.display(), e),
        }
    }
}

impl std::error::Error for DirectoryError {}
