//! Dataset loading and proximity queries.

use std::fs;
use std::path::{Path, PathBuf};

use super::builtin::builtin_ngos;
use super::types::{DirectoryError, Ngo, SitedNgo};
use crate::geo::GeoPoint;
use crate::rank::{rank, RankedResult, RankError};

/// The NGO directory: an immutable, in-memory record set.
pub struct NgoDirectory {
    ngos: Vec<Ngo>,
}

impl NgoDirectory {
    /// Load a JSON dataset (an array of records) from `path`.
    pub fn load_from(path: &Path) -> Result<Self, DirectoryError> {
        let data = fs::read_to_string(path)
            .map_err(|e| DirectoryError::Io(PathBuf::from(path), e))?;
        let ngos: Vec<Ngo> = serde_json::from_str(&data)
            .map_err(|e| DirectoryError::Parse(PathBuf::from(path), e))?;
        Ok(Self { ngos })
    }

    /// The built-in fallback dataset.
    pub fn builtin() -> Self {
        Self { ngos: builtin_ngos() }
    }

    /// Explicit dataset path wins; otherwise the built-in records.
    pub fn load_or_builtin(path: Option<&Path>) -> Result<Self, DirectoryError> {
        match path {
            Some(p) => Self::load_from(p),
            None => Ok(Self::builtin()),
        }
    }

    pub fn all(&self) -> &[Ngo] {
        &self.ngos
    }

    pub fn get(&self, id: u32) -> Option<&Ngo> {
        self.ngos.iter().find(|n| n.id == id)
    }

    pub fn len(&self) -> usize {
        self.ngos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ngos.is_empty()
    }

    /// Records with coordinates, in dataset order. Records missing either
    /// coordinate never enter a candidate set.
    pub fn sited(&self) -> Vec<SitedNgo> {
        self.ngos
            .iter()
            .filter_map(|ngo| {
                ngo.position().map(|at| SitedNgo { ngo: ngo.clone(), at })
            })
            .collect()
    }

    /// Rank the sited records by distance from `query`.
    pub fn nearest(
        &self,
        query: GeoPoint,
        limit: Option<i64>,
    ) -> Result<Vec<RankedResult<SitedNgo>>, RankError> {
        rank(query, self.sited(), limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const CDMX: GeoPoint = GeoPoint { lat: 19.4326, lon: -99.1332 };

    #[test]
    fn test_builtin_roundtrip_through_json() {
        // The builtin records serialize to the same dataset format files use.
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ongs.json");
        let json = serde_json::to_string_pretty(NgoDirectory::builtin().all()).unwrap();
        fs::write(&path, json).unwrap();

        let loaded = NgoDirectory::load_from(&path).unwrap();
        assert_eq!(loaded.len(), NgoDirectory::builtin().len());
        assert_eq!(loaded.get(1).unwrap().name, "Fundación Luz y Vida");
    }

    #[test]
    fn test_load_missing_file() {
        let err = NgoDirectory::load_from(Path::new("/nonexistent/ongs.json")).unwrap_err();
        assert!(matches!(err, DirectoryError::Io(..)));
    }

    #[test]
    fn test_load_malformed_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ongs.json");
        fs::write(&path, "{\"not\": \"an array\"}").unwrap();

        let err = NgoDirectory::load_from(&path).unwrap_err();
        assert!(matches!(err, DirectoryError::Parse(..)));
    }

    #[test]
    fn test_optional_fields_default() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ongs.json");
        fs::write(
            &path,
            r#"[{"id": 7, "name": "Mínima A.C.", "category": "otros"}]"#,
        )
        .unwrap();

        let loaded = NgoDirectory::load_from(&path).unwrap();
        let ngo = loaded.get(7).unwrap();
        assert!(ngo.email.is_none());
        assert!(ngo.position().is_none());
    }

    #[test]
    fn test_sited_excludes_unlocated() {
        let directory = NgoDirectory::builtin();
        let sited = directory.sited();
        assert!(sited.len() < directory.len());
        assert!(sited.iter().all(|s| s.ngo.position().is_some()));

        // The unlocated records exist in the listing but not in candidates.
        let unlocated: Vec<_> = directory
            .all()
            .iter()
            .filter(|n| n.position().is_none())
            .map(|n| n.id)
            .collect();
        assert!(!unlocated.is_empty());
        for id in unlocated {
            assert!(!sited.iter().any(|s| s.ngo.id == id));
        }
    }

    #[test]
    fn test_nearest_from_cdmx() {
        let directory = NgoDirectory::builtin();
        let ranked = directory.nearest(CDMX, Some(3)).unwrap();
        assert_eq!(ranked.len(), 3);
        // Fundación Luz y Vida sits exactly on the query point.
        assert_eq!(ranked[0].entity.ngo.id, 1);
        assert_eq!(ranked[0].distance_km, 0.0);
        assert!(ranked[1].distance_km <= ranked[2].distance_km);
    }

    #[test]
    fn test_nearest_never_returns_unlocated() {
        let directory = NgoDirectory::builtin();
        let ranked = directory.nearest(CDMX, None).unwrap();
        assert_eq!(ranked.len(), directory.sited().len());
        assert!(ranked.iter().all(|r| r.entity.ngo.position().is_some()));
    }

    #[test]
    fn test_nearest_negative_limit() {
        let directory = NgoDirectory::builtin();
        assert!(directory.nearest(CDMX, Some(-5)).is_err());
    }
}
