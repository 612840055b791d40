//! Proximity ranking: order located entities by distance from a query point.
//!
//! `rank` is a pure transform — no I/O, no shared state, same inputs give
//! the same ordering. Ties keep input order (stable sort).

use std::fmt;

use crate::geo::{haversine_km, GeoPoint};

/// Anything with a position on the sphere can be ranked.
pub trait Located {
    fn position(&self) -> GeoPoint;
}

/// An entity paired with its computed distance and 1-based order position.
#[derive(Debug, Clone)]
pub struct RankedResult<T> {
    pub entity: T,
    pub distance_km: f64,
    pub rank: usize,
}

/// Ranking errors.
#[derive(Debug, PartialEq, Eq)]
pub enum RankError {
    /// `limit` was negative. Zero is fine (empty result); negative is a
    /// caller bug and is reported, not clamped.
    InvalidLimit(i64),
}

impl fmt::Display for RankError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLimit(n) => write!(f, "Invalid limit {}: must be non-negative", n),
        }
    }
}

impl std::error::Error for RankError {}

/// Order `candidates` by ascending great-circle distance from `query`,
/// keeping at most `limit` results.
///
/// The limit truncates the sorted sequence; it never pre-filters, so the
/// kept entries are always the globally nearest ones. Out-of-range query
/// coordinates are the caller's problem — the formula still produces a
/// defined (if meaningless) number.
pub fn rank<T: Located>(
    query: GeoPoint,
    candidates: Vec<T>,
    limit: Option<i64>,
) -> Result<Vec<RankedResult<T>>, RankError> {
    let keep = match limit {
        Some(n) if n < 0 => return Err(RankError::InvalidLimit(n)),
        Some(n) => n as usize,
        None => candidates.len(),
    };

    let mut results: Vec<RankedResult<T>> = candidates
        .into_iter()
        .map(|entity| {
            let distance_km = haversine_km(query, entity.position());
            RankedResult { entity, distance_km, rank: 0 }
        })
        .collect();

    // Vec::sort_by is stable: equal distances keep input order.
    results.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
    results.truncate(keep);

    for (i, r) in results.iter_mut().enumerate() {
        r.rank = i + 1;
    }

    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Spot {
        name: &'static str,
        at: GeoPoint,
    }

    impl Located for Spot {
        fn position(&self) -> GeoPoint {
            self.at
        }
    }

    fn spot(name: &'static str, lat: f64, lon: f64) -> Spot {
        Spot { name, at: GeoPoint::new(lat, lon) }
    }

    const QUERY: GeoPoint = GeoPoint { lat: 19.4326, lon: -99.1332 };

    fn mexico_candidates() -> Vec<Spot> {
        vec![
            spot("monterrey", 25.6866, -100.3161),
            spot("cdmx", 19.4326, -99.1332),
            spot("guadalajara", 20.6668, -103.3918),
        ]
    }

    #[test]
    fn test_orders_by_distance() {
        let ranked = rank(QUERY, mexico_candidates(), None).unwrap();
        let names: Vec<_> = ranked.iter().map(|r| r.entity.name).collect();
        assert_eq!(names, vec!["cdmx", "guadalajara", "monterrey"]);

        assert_eq!(ranked[0].distance_km, 0.0);
        assert!((ranked[1].distance_km - 465.0).abs() < 5.0);
        assert!((ranked[2].distance_km - 706.0).abs() < 5.0);
    }

    #[test]
    fn test_output_is_sorted_and_numbered() {
        let ranked = rank(QUERY, mexico_candidates(), None).unwrap();
        for pair in ranked.windows(2) {
            assert!(pair[0].distance_km <= pair[1].distance_km);
        }
        let ranks: Vec<_> = ranked.iter().map(|r| r.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3]);
    }

    #[test]
    fn test_limit_truncates_after_sorting() {
        let ranked = rank(QUERY, mexico_candidates(), Some(1)).unwrap();
        assert_eq!(ranked.len(), 1);
        // Nearest overall, not first-in-input (input starts with Monterrey).
        assert_eq!(ranked[0].entity.name, "cdmx");
    }

    #[test]
    fn test_limit_larger_than_input() {
        let ranked = rank(QUERY, mexico_candidates(), Some(50)).unwrap();
        assert_eq!(ranked.len(), 3);
    }

    #[test]
    fn test_limit_zero() {
        let ranked = rank(QUERY, mexico_candidates(), Some(0)).unwrap();
        assert!(ranked.is_empty());
    }

    #[test]
    fn test_empty_candidates() {
        let ranked = rank(QUERY, Vec::<Spot>::new(), None).unwrap();
        assert!(ranked.is_empty());
        let ranked = rank(QUERY, Vec::<Spot>::new(), Some(10)).unwrap();
        assert!(ranked.is_empty());
    }

    #[test]
    fn test_negative_limit_rejected() {
        let err = rank(QUERY, mexico_candidates(), Some(-1)).unwrap_err();
        assert_eq!(err, RankError::InvalidLimit(-1));
    }

    #[test]
    fn test_ties_keep_input_order() {
        // Two candidates at the same spot: stable sort preserves input order.
        let candidates = vec![
            spot("far", 25.0, -100.0),
            spot("first", 20.0, -99.0),
            spot("second", 20.0, -99.0),
        ];
        let ranked = rank(QUERY, candidates, None).unwrap();
        let names: Vec<_> = ranked.iter().map(|r| r.entity.name).collect();
        assert_eq!(names, vec!["first", "second", "far"]);
        assert_eq!(ranked[0].distance_km, ranked[1].distance_km);
    }

    #[test]
    fn test_same_inputs_same_ordering() {
        let a = rank(QUERY, mexico_candidates(), None).unwrap();
        let b = rank(QUERY, mexico_candidates(), None).unwrap();
        let pairs_a: Vec<_> = a.iter().map(|r| (r.entity.name, r.distance_km)).collect();
        let pairs_b: Vec<_> = b.iter().map(|r| (r.entity.name, r.distance_km)).collect();
        assert_eq!(pairs_a, pairs_b);
    }
}
