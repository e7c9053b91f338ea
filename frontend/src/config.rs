use crate::error::UiError;
use serde::{Deserialize, Serialize};

pub const CONFIG_GLOBAL: &str = "__DASHBOARD_CONFIG";

/// Durations (milliseconds) for the transient visual effects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectTimings {
    pub progress_initial_delay_ms: u32,
    pub progress_fill_delay_ms: u32,
    pub ripple_ms: u32,
    pub badge_pulse_ms: u32,
    pub row_tint_ms: u32,
    pub card_press_ms: u32,
}

impl Default for EffectTimings {
    fn default() -> Self {
        Self {
            progress_initial_delay_ms: 300,
            progress_fill_delay_ms: 100,
            ripple_ms: 600,
            badge_pulse_ms: 300,
            row_tint_ms: 200,
            card_press_ms: 150,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub brand_name: String,
    pub active_user: String,
    pub log_level: String,
    /// Render the bundled shell before wiring. Disable when the host page
    /// already carries the dashboard markup.
    pub mount_shell: bool,
    pub timings: EffectTimings,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            brand_name: "Fortumars AI Technologies".into(),
            active_user: "Aditya Kumar".into(),
            log_level: "info".into(),
            mount_shell: true,
            timings: EffectTimings::default(),
        }
    }
}

impl DashboardConfig {
    pub fn from_json(raw: &str) -> Result<Self, UiError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}

fn read_global_json() -> Option<String> {
    // Expect optional global object: window.__DASHBOARD_CONFIG = { active_user: "..." }
    let w = web_sys::window()?;
    let any = js_sys::Reflect::get(&w, &CONFIG_GLOBAL.into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    js_sys::JSON::stringify(&any).ok().map(String::from)
}

/// Reads the runtime config from `window.__DASHBOARD_CONFIG`. An absent
/// global yields the defaults; a malformed one is an error.
pub fn load() -> Result<DashboardConfig, UiError> {
    match read_global_json() {
        Some(raw) => DashboardConfig::from_json(&raw),
        None => Ok(DashboardConfig::default()),
    }
}
