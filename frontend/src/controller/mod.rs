//! Wires dashboard behaviour onto an already-rendered document.
//!
//! Each pass receives the element registry explicitly and touches only its own
//! elements; absent elements disable the matching feature without error.

pub mod actions;
pub mod animations;
pub mod dropdown;
pub mod modals;
pub mod navigation;
pub mod progress;

use crate::config::DashboardConfig;
use crate::dialogs::Dialogs;
use crate::dom::{Group, UiElement, UiRegistry, Wiring};
use crate::error::UiError;
use crate::scheduler::Scheduler;
use log::{debug, info};
use progress::ProgressAnimator;
use std::rc::Rc;

/// Class marking the selected tab and its panel.
pub const ACTIVE: &str = "active";
/// Class marking an open dropdown or modal.
pub const SHOW: &str = "show";

/// Everything a setup pass needs, passed explicitly.
pub struct UiContext<E> {
    pub registry: Rc<UiRegistry<E>>,
    pub scheduler: Rc<dyn Scheduler>,
    pub dialogs: Rc<dyn Dialogs>,
    pub config: Rc<DashboardConfig>,
}

impl<E> Clone for UiContext<E> {
    fn clone(&self) -> Self {
        Self {
            registry: self.registry.clone(),
            scheduler: self.scheduler.clone(),
            dialogs: self.dialogs.clone(),
            config: self.config.clone(),
        }
    }
}

impl<E: UiElement> UiContext<E> {
    pub fn new(
        registry: UiRegistry<E>,
        scheduler: Rc<dyn Scheduler>,
        dialogs: Rc<dyn Dialogs>,
        config: DashboardConfig,
    ) -> Self {
        Self {
            registry: Rc::new(registry),
            scheduler,
            dialogs,
            config: Rc::new(config),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InstallReport {
    pub tabs: usize,
    pub dropdown: Wiring,
    pub progress_bars: usize,
    pub effects: usize,
    pub modal_controls: usize,
    pub actions: usize,
}

pub struct DashboardController<E> {
    ctx: UiContext<E>,
    progress: ProgressAnimator<E>,
}

impl<E: UiElement> DashboardController<E> {
    /// Runs every setup pass in page order and schedules the first
    /// progress-bar fill.
    pub fn install(ctx: UiContext<E>) -> Result<(Self, InstallReport), UiError> {
        let progress = ProgressAnimator::new(&ctx);

        let tabs = navigation::install(&ctx, &progress)?;
        let dropdown = dropdown::install(&ctx)?;
        progress.schedule_initial();
        let effects = animations::install(&ctx)?;
        let modal_controls = modals::install(&ctx)?;
        let actions = actions::install(&ctx)?;

        let report = InstallReport {
            tabs,
            dropdown,
            progress_bars: progress.animated_count(),
            effects,
            modal_controls,
            actions,
        };
        debug!("Dashboard controller installed: {:?}", report);

        let controller = Self { ctx, progress };
        controller.log_startup_summary();
        Ok((controller, report))
    }

    pub fn progress(&self) -> &ProgressAnimator<E> {
        &self.progress
    }

    pub fn active_tab_label(&self) -> Option<String> {
        self.ctx
            .registry
            .group(Group::NavTabs)
            .iter()
            .find(|tab| tab.has_class(ACTIVE))
            .map(|tab| tab.text().trim().to_string())
    }

    /// Lines logged once wiring finishes.
    pub fn startup_summary(&self) -> Vec<String> {
        let mut lines = vec![
            format!("{} Dashboard initialized", self.ctx.config.brand_name),
            "Dashboard loaded successfully".to_string(),
            format!("Active user: {}", self.ctx.config.active_user),
        ];
        if let Some(label) = self.active_tab_label() {
            lines.push(format!("Current tab: {label}"));
        }
        lines
    }

    fn log_startup_summary(&self) {
        for line in self.startup_summary() {
            info!("{}", line);
        }
    }
}
