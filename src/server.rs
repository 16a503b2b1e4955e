//! Static preview host for the built site.

use crate::telemetry::{LogLevel, Logger, DEFAULT_LOG_LEVEL};
use axum::{
    extract::{Request, State},
    http::{HeaderMap, HeaderValue},
    middleware::{self, Next},
    response::Response,
    Router,
};
use std::{
    path::PathBuf,
    sync::atomic::{AtomicU64, Ordering as AtomicOrdering},
    time::{Instant, SystemTime, UNIX_EPOCH},
};
use tower_http::services::{ServeDir, ServeFile};

const DEFAULT_PORT: u64 = 8080;
const DEFAULT_DIST_DIR: &str = "dist";
const PORT_BOUNDS: (u64, u64) = (1, 65_535);
const REQUEST_ID_HEADER: &str = "x-request-id";

static REQUEST_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

#[derive(Clone, Debug, PartialEq)]
struct HostConfig {
    port: u16,
    dist_dir: PathBuf,
    log_level: LogLevel,
}

impl HostConfig {
    fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = parse_u64_with_bounds(lookup("PORT").as_deref(), DEFAULT_PORT, PORT_BOUNDS);
        let dist_dir = non_empty(lookup("SITE_DIST_DIR").as_deref())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DIST_DIR));
        let log_level = non_empty(lookup("LOG_LEVEL").as_deref())
            .and_then(|value| LogLevel::parse(&value))
            .unwrap_or(DEFAULT_LOG_LEVEL);

        Self {
            port: u16::try_from(port).unwrap_or(8080),
            dist_dir,
            log_level,
        }
    }
}

#[derive(Clone)]
struct HostState {
    logger: Logger,
}

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = HostConfig::from_env();
    let logger = Logger::new(config.log_level);
    let index_file = config.dist_dir.join("index.html");

    let static_service =
        ServeDir::new(&config.dist_dir).not_found_service(ServeFile::new(index_file));

    let app = Router::new()
        .fallback_service(static_service)
        .layer(middleware::from_fn_with_state(
            HostState { logger },
            log_request,
        ));

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    logger.info(
        "host_listening",
        serde_json::json!({
            "url": format!("http://127.0.0.1:{}", config.port),
            "dist_dir": config.dist_dir.display().to_string(),
        }),
    );
    axum::serve(listener, app).await?;
    Ok(())
}

async fn log_request(State(state): State<HostState>, request: Request, next: Next) -> Response {
    let started_at = Instant::now();
    let request_id = resolve_request_id(request.headers());
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let mut response = next.run(request).await;

    if let Ok(header) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, header);
    }

    state.logger.debug(
        "host_request",
        serde_json::json!({
            "request_id": request_id,
            "method": method.as_str(),
            "path": path,
            "status": response.status().as_u16(),
            "duration_ms": started_at.elapsed().as_millis() as u64,
        }),
    );

    response
}

fn parse_u64_with_bounds(raw: Option<&str>, default: u64, bounds: (u64, u64)) -> u64 {
    raw.and_then(|value| value.trim().parse::<u64>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn non_empty(raw: Option<&str>) -> Option<String> {
    raw.map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn now_unix_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_millis())
        .unwrap_or(0)
}

fn generate_request_id() -> String {
    let counter = REQUEST_ID_COUNTER.fetch_add(1, AtomicOrdering::Relaxed);
    format!("req-{}-{counter}", now_unix_millis())
}

fn resolve_request_id(headers: &HeaderMap) -> String {
    let value = headers
        .get(REQUEST_ID_HEADER)
        .and_then(|raw| raw.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(ToString::to_string);

    value.unwrap_or_else(generate_request_id)
}
