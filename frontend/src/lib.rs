use anyhow::Context;
use leptos::*;
use std::rc::Rc;

pub mod config;
pub mod controller;
pub mod dialogs;
pub mod dom;
pub mod error;
mod pages;
pub mod scheduler;
mod test_support;

use config::DashboardConfig;
use controller::{animations::EFFECT_STYLESHEET, DashboardController, InstallReport, UiContext};
use dialogs::BrowserDialogs;
use dom::{web, UiRegistry};
use pages::DashboardPage;
use scheduler::TimeoutScheduler;

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let loaded = config::load();
    let config = loaded.as_ref().cloned().unwrap_or_default();
    if console_log::init_with_level(config.level()).is_err() {
        web_sys::console::log_1(&"Logger already initialized".into());
    }
    if let Err(err) = &loaded {
        log::warn!("Ignoring {}: {}", config::CONFIG_GLOBAL, err);
    }

    match boot(config) {
        Ok(report) => log::debug!("Dashboard ready: {:?}", report),
        Err(err) => log::error!("Dashboard failed to start: {:#}", err),
    }
}

fn boot(config: DashboardConfig) -> anyhow::Result<InstallReport> {
    if config.mount_shell {
        let brand = config.brand_name.clone();
        let user = config.active_user.clone();
        mount_to_body(move || view! { <DashboardPage brand=brand user=user/> });
    }
    web::install_stylesheet(EFFECT_STYLESHEET).context("failed to install effect styles")?;

    let root = web::document_root().context("dashboard needs a document")?;
    let ctx = UiContext::new(
        UiRegistry::scan(root),
        Rc::new(TimeoutScheduler),
        Rc::new(BrowserDialogs),
        config,
    );
    let (controller, report) =
        DashboardController::install(ctx).context("failed to wire dashboard")?;
    // The controller owns the pending timers; it lives as long as the page.
    std::mem::forget(controller);
    Ok(report)
}
