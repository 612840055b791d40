use std::sync::Arc;
use std::time::Instant;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::directory::Ngo;
use crate::geo::GeoPoint;
use crate::users::UserError;

use super::state::AppState;

// ─── Error response ──────────────────────────────────────────────

#[derive(Serialize)]
struct ApiErrorBody {
    error: String,
    code: u16,
}

pub(super) struct ApiError(StatusCode, String);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ApiErrorBody {
            error: self.1,
            code: self.0.as_u16(),
        };
        (self.0, Json(body)).into_response()
    }
}

fn api_error(status: StatusCode, msg: impl Into<String>) -> ApiError {
    ApiError(status, msg.into())
}

// ─── GET / ───────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct ServiceInfo {
    service: &'static str,
    version: &'static str,
    status: &'static str,
    total_ongs: usize,
}

pub async fn index(State(state): State<Arc<AppState>>) -> Json<ServiceInfo> {
    Json(ServiceInfo {
        service: "ong-radar",
        version: env!("CARGO_PKG_VERSION"),
        status: "ok",
        total_ongs: state.directory.len(),
    })
}

// ─── GET /ongs ───────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct ListQuery {
    pub limit: Option<i64>,
}

pub async fn list_ongs(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListQuery>,
) -> Result<Json<Vec<Ngo>>, ApiError> {
    let start = Instant::now();

    let keep = match params.limit {
        Some(n) if n < 0 => {
            return Err(api_error(
                StatusCode::BAD_REQUEST,
                format!("Invalid limit {}: must be non-negative", n),
            ));
        }
        Some(n) => n as usize,
        None => state.directory.len(),
    };

    let mut ongs = state.directory.all().to_vec();
    ongs.truncate(keep);

    let elapsed = start.elapsed();
    eprintln!(
        "[{}] GET /ongs limit={:?} -> {} records ({:.1}ms)",
        Utc::now().format("%H:%M:%S"),
        params.limit,
        ongs.len(),
        elapsed.as_secs_f64() * 1000.0,
    );

    Ok(Json(ongs))
}

// ─── GET /ongs/{id} ──────────────────────────────────────────────

pub async fn ong_by_id(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u32>,
) -> Result<Json<Ngo>, ApiError> {
    state
        .directory
        .get(id)
        .cloned()
        .map(Json)
        .ok_or_else(|| api_error(StatusCode::NOT_FOUND, format!("No NGO with id {}", id)))
}

// ─── GET /ongs/nearest ───────────────────────────────────────────

#[derive(Deserialize)]
pub struct NearestQuery {
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub limit: Option<i64>,
}

#[derive(Serialize)]
pub struct NearestEntry {
    pub id: u32,
    pub name: String,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    pub lat: f64,
    pub lon: f64,
    pub distance_km: f64,
    pub rank: usize,
}

pub async fn nearest_ongs(
    State(state): State<Arc<AppState>>,
    Query(params): Query<NearestQuery>,
) -> Result<Json<Vec<NearestEntry>>, ApiError> {
    let start = Instant::now();

    let (lat, lon) = match (params.lat, params.lon) {
        (Some(lat), Some(lon)) => (lat, lon),
        _ => {
            return Err(api_error(
                StatusCode::BAD_REQUEST,
                "Provide 'lat' and 'lon' parameters",
            ));
        }
    };

    let query = GeoPoint::new(lat, lon);
    if !query.in_range() {
        return Err(api_error(
            StatusCode::BAD_REQUEST,
            "Invalid coordinates. Lat: -90..90, Lon: -180..180",
        ));
    }

    let ranked = state
        .directory
        .nearest(query, params.limit)
        .map_err(|e| api_error(StatusCode::BAD_REQUEST, format!("{}", e)))?;

    let entries: Vec<NearestEntry> = ranked
        .into_iter()
        .map(|r| NearestEntry {
            id: r.entity.ngo.id,
            name: r.entity.ngo.name,
            category: r.entity.ngo.category,
            email: r.entity.ngo.email,
            phone: r.entity.ngo.phone,
            address: r.entity.ngo.address,
            city: r.entity.ngo.city,
            lat: r.entity.at.lat,
            lon: r.entity.at.lon,
            distance_km: r.distance_km,
            rank: r.rank,
        })
        .collect();

    let elapsed = start.elapsed();
    eprintln!(
        "[{}] GET /ongs/nearest lat={} lon={} limit={:?} -> {} results ({:.1}ms)",
        Utc::now().format("%H:%M:%S"),
        lat,
        lon,
        params.limit,
        entries.len(),
        elapsed.as_secs_f64() * 1000.0,
    );

    Ok(Json(entries))
}

// ─── POST /register ──────────────────────────────────────────────

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct UserBody {
    pub name: String,
    pub email: String,
    pub registered_at: i64,
}

pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<UserBody>), ApiError> {
    let record = {
        let mut users = state.users.lock().unwrap();
        users.register(&req.name, &req.email, &req.password)
    };

    let record = record.map_err(|e| {
        let status = match e {
            UserError::Duplicate(_) => StatusCode::CONFLICT,
            _ => StatusCode::BAD_REQUEST,
        };
        api_error(status, format!("{}", e))
    })?;

    eprintln!(
        "[{}] POST /register {} -> created",
        Utc::now().format("%H:%M:%S"),
        record.email,
    );

    Ok((
        StatusCode::CREATED,
        Json(UserBody {
            name: record.name,
            email: record.email,
            registered_at: record.registered_at,
        }),
    ))
}

// ─── POST /login ─────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<UserBody>, ApiError> {
    let users = state.users.lock().unwrap();
    let record = users
        .verify(&req.email, &req.password)
        .map_err(|e| api_error(StatusCode::UNAUTHORIZED, format!("{}", e)))?;

    eprintln!(
        "[{}] POST /login {} -> ok",
        Utc::now().format("%H:%M:%S"),
        record.email,
    );

    Ok(Json(UserBody {
        name: record.name.clone(),
        email: record.email.clone(),
        registered_at: record.registered_at,
    }))
}
