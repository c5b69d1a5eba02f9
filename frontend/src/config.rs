use crate::{error::AppError, sessions::Session};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    /// Client id handed to the identity provider's sign-in button.
    #[serde(default, alias = "GOOGLE_CLIENT_ID")]
    pub google_client_id: Option<String>,
    /// Sessions the directory starts with.
    #[serde(default, alias = "SESSIONS")]
    pub sessions: Vec<Session>,
}

impl RuntimeConfig {
    /// Fills whatever `self` leaves unset from `fallback`.
    pub fn or(self, fallback: RuntimeConfig) -> RuntimeConfig {
        RuntimeConfig {
            google_client_id: self
                .google_client_id
                .filter(|id| !id.trim().is_empty())
                .or(fallback.google_client_id),
            sessions: if self.sessions.is_empty() {
                fallback.sessions
            } else {
                self.sessions
            },
        }
    }
}

static RUNTIME_CONFIG: OnceLock<RuntimeConfig> = OnceLock::new();

pub fn parse_runtime_config(raw: &str) -> Result<RuntimeConfig, AppError> {
    serde_json::from_str(raw).map_err(|err| AppError::Config(err.to_string()))
}

#[cfg(target_arch = "wasm32")]
fn read_global(name: &str) -> Option<RuntimeConfig> {
    // Expect optional global object, e.g. window.__BADMINTONBOOK_ENV = { GOOGLE_CLIENT_ID: "..." }
    let window = web_sys::window()?;
    let value = js_sys::Reflect::get(&window, &name.into()).ok()?;
    if value.is_undefined() || value.is_null() {
        return None;
    }
    let raw = match value.as_string() {
        Some(text) => text,
        None => js_sys::JSON::stringify(&value).ok()?.as_string()?,
    };
    match parse_runtime_config(&raw) {
        Ok(cfg) => Some(cfg),
        Err(err) => {
            log::warn!("ignoring window.{name}: {err}");
            None
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn snapshot_from_globals() -> RuntimeConfig {
    let env = read_global("__BADMINTONBOOK_ENV").unwrap_or_default();
    let config = read_global("__BADMINTONBOOK_CONFIG").unwrap_or_default();
    env.or(config)
}

#[cfg(not(target_arch = "wasm32"))]
fn snapshot_from_globals() -> RuntimeConfig {
    RuntimeConfig::default()
}

pub fn runtime_config() -> &'static RuntimeConfig {
    RUNTIME_CONFIG.get_or_init(snapshot_from_globals)
}

pub fn google_client_id() -> Option<String> {
    runtime_config().google_client_id.clone()
}

pub fn init() {
    let cfg = runtime_config();
    if cfg.google_client_id.is_none() {
        log::warn!("no identity provider client id configured; third-party login is disabled");
    }
    log::info!("runtime config loaded with {} seeded sessions", cfg.sessions.len());
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn reads_env_object_from_window() {
        let window = web_sys::window().unwrap();
        let env = js_sys::Object::new();
        js_sys::Reflect::set(&env, &"GOOGLE_CLIENT_ID".into(), &"from-env".into()).unwrap();
        js_sys::Reflect::set(&window, &"__BADMINTONBOOK_ENV".into(), &env).unwrap();
        let cfg = snapshot_from_globals();
        assert_eq!(cfg.google_client_id.as_deref(), Some("from-env"));
    }
}
