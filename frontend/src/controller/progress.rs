use super::UiContext;
use crate::dom::{Group, UiElement};
use crate::scheduler::{Scheduler, TaskSlot};
use std::rc::Rc;

pub const TARGET_ATTR: &str = "data-progress";

/// Parses a `data-progress` value into a percentage in `0..=100`.
/// Non-numeric values count as "no target".
pub fn parse_target(raw: Option<&str>) -> Option<f64> {
    let value: f64 = raw?.trim().parse().ok()?;
    value.is_finite().then(|| value.clamp(0.0, 100.0))
}

pub fn width_for(percent: f64) -> String {
    format!("{percent}%")
}

struct Bar<E> {
    element: E,
    target: f64,
    pending_fill: TaskSlot,
}

/// Resets every targeted bar to `0%` and, after a short delay, widens it to
/// its target so the CSS transition replays.
pub struct ProgressAnimator<E> {
    bars: Rc<Vec<Bar<E>>>,
    initial: TaskSlot,
    scheduler: Rc<dyn Scheduler>,
    initial_delay_ms: u32,
    fill_delay_ms: u32,
}

impl<E> Clone for ProgressAnimator<E> {
    fn clone(&self) -> Self {
        Self {
            bars: self.bars.clone(),
            initial: self.initial.clone(),
            scheduler: self.scheduler.clone(),
            initial_delay_ms: self.initial_delay_ms,
            fill_delay_ms: self.fill_delay_ms,
        }
    }
}

impl<E: UiElement> ProgressAnimator<E> {
    pub fn new(ctx: &UiContext<E>) -> Self {
        let bars = ctx
            .registry
            .group(Group::ProgressBars)
            .iter()
            .filter_map(|element| {
                parse_target(element.attribute(TARGET_ATTR).as_deref()).map(|target| Bar {
                    element: element.clone(),
                    target,
                    pending_fill: TaskSlot::new(),
                })
            })
            .collect();
        Self {
            bars: Rc::new(bars),
            initial: TaskSlot::new(),
            scheduler: ctx.scheduler.clone(),
            initial_delay_ms: ctx.config.timings.progress_initial_delay_ms,
            fill_delay_ms: ctx.config.timings.progress_fill_delay_ms,
        }
    }

    pub fn animated_count(&self) -> usize {
        self.bars.len()
    }

    /// First animation after page load, delayed so layout can settle.
    pub fn schedule_initial(&self) {
        if self.bars.is_empty() {
            return;
        }
        let animator = self.clone();
        self.initial
            .schedule(self.scheduler.as_ref(), self.initial_delay_ms, move || {
                animator.animate()
            });
    }

    pub fn animate(&self) {
        for bar in self.bars.iter() {
            bar.pending_fill.cancel();
            bar.element.set_style("width", "0%");
            let element = bar.element.clone();
            let width = width_for(bar.target);
            bar.pending_fill
                .schedule(self.scheduler.as_ref(), self.fill_delay_ms, move || {
                    element.set_style("width", &width)
                });
        }
    }
}
