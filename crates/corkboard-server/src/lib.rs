//! Corkboard HTTP server: configuration loading and application assembly.
//!
//! The binary in `main.rs` is a thin shell around [`ServerConfig::load`] and
//! [`app`].

use std::{
  path::{Path, PathBuf},
  sync::Arc,
};

use axum::Router;
use corkboard_core::store::Store;
use serde::Deserialize;
use tower_http::trace::TraceLayer;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration.
///
/// Built-in defaults are overridden by the TOML file, which is overridden by
/// `CORKBOARD_*` environment variables.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
  pub host:       String,
  pub port:       u16,
  pub store_path: PathBuf,
}

impl ServerConfig {
  pub fn load(path: &Path) -> Result<Self, config::ConfigError> {
    config::Config::builder()
      .set_default("host", "127.0.0.1")?
      .set_default("port", 8080)?
      .set_default("store_path", "corkboard.db")?
      .add_source(config::File::from(path).required(false))
      .add_source(config::Environment::with_prefix("CORKBOARD"))
      .build()?
      .try_deserialize()
  }

  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }
}

/// Expand a leading `~` to the user's home directory.
pub fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// The full application: the API router with per-request tracing.
pub fn app<S>(store: Arc<S>) -> Router
where
  S: Store + 'static,
{
  Router::new()
    .merge(corkboard_api::api_router(store))
    .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
  use axum::{
    body::{Body, to_bytes},
    http::{Request, StatusCode},
  };
  use corkboard_store_sqlite::SqliteStore;
  use tower::ServiceExt as _;

  use super::*;

  #[test]
  fn missing_file_falls_back_to_defaults() {
    let cfg = ServerConfig::load(Path::new("/nonexistent/corkboard.toml")).unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.store_path, PathBuf::from("corkboard.db"));
  }

  #[test]
  fn file_overrides_defaults() {
    let path = std::env::temp_dir()
      .join(format!("corkboard-config-{}.toml", std::process::id()));
    std::fs::write(&path, "port = 9123\nstore_path = \"/tmp/cb.db\"\n").unwrap();

    let cfg = ServerConfig::load(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(cfg.port, 9123);
    assert_eq!(cfg.store_path, PathBuf::from("/tmp/cb.db"));
    assert_eq!(cfg.host, "127.0.0.1");
    assert_eq!(cfg.address(), "127.0.0.1:9123");
  }

  #[test]
  fn plain_paths_are_left_alone() {
    let p = Path::new("/var/lib/corkboard.db");
    assert_eq!(expand_tilde(p), p.to_path_buf());
  }

  #[tokio::test]
  async fn app_serves_the_api() {
    let store = SqliteStore::open_in_memory().await.unwrap();
    let app = app(Arc::new(store));

    let req = Request::builder()
      .method("POST")
      .uri("/boards")
      .header("content-type", "application/json")
      .body(Body::from(r#"{"name":"Inbox"}"#))
      .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let req = Request::builder().uri("/?type=json").body(Body::empty()).unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let snapshot: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(snapshot["boards"][0]["name"], "Inbox");
  }
}
