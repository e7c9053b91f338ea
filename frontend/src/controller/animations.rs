use super::UiContext;
use crate::dom::{heading_text, Anchor, EventKind, Group, Rect, Selector, UiElement, UiEvent};
use crate::error::UiError;
use crate::scheduler::TaskSlot;
use log::info;
use std::cell::RefCell;
use std::rc::Rc;

pub const CARD_LIFT: &str = "translateY(-4px)";
pub const CARD_REST: &str = "translateY(0)";
pub const CARD_PRESS: &str = "scale(0.98)";
pub const ROW_TINT: &str = "rgba(37, 99, 235, 0.05)";
pub const BADGE_PULSE: &str = "pulse 0.3s ease";
pub const RIPPLE_CLASS: &str = "ripple";

/// Keyframes backing the ripple and badge pulse, installed once per page.
pub const EFFECT_STYLESHEET: &str = r#"
    .ripple {
        position: absolute;
        border-radius: 50%;
        background: rgba(37, 99, 235, 0.3);
        transform: scale(0);
        animation: ripple-animation 0.6s ease-out;
        pointer-events: none;
    }

    @keyframes ripple-animation {
        to {
            transform: scale(4);
            opacity: 0;
        }
    }

    @keyframes pulse {
        0%, 100% {
            transform: scale(1);
        }
        50% {
            transform: scale(1.1);
        }
    }
"#;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RippleGeometry {
    pub size: f64,
    pub left: f64,
    pub top: f64,
}

/// A circle covering the larger side of `rect`, centred on the click point.
pub fn ripple_geometry(rect: Rect, client_x: f64, client_y: f64) -> RippleGeometry {
    let size = rect.width.max(rect.height);
    RippleGeometry {
        size,
        left: client_x - rect.left - size / 2.0,
        top: client_y - rect.top - size / 2.0,
    }
}

fn px(value: f64) -> String {
    format!("{value}px")
}

/// Purely visual feedback. Every timed effect owns a [`TaskSlot`] on the
/// element it touches, so a repeat interaction restarts it instead of racing
/// the previous timer. Returns the number of elements wired.
pub fn install<E: UiElement>(ctx: &UiContext<E>) -> Result<usize, UiError> {
    ctx.registry.root().set_style("scroll-behavior", "smooth");

    let mut wired = 0;
    wired += hover_lift(ctx)?;
    wired += ripples(ctx)?;
    wired += badge_pulse(ctx)?;
    wired += row_tint(ctx)?;
    wired += card_press(ctx)?;
    Ok(wired)
}

fn hover_lift<E: UiElement>(ctx: &UiContext<E>) -> Result<usize, UiError> {
    let cards = ctx.registry.group(Group::MetricCards);
    for card in cards {
        let lifted = card.clone();
        card.listen(
            EventKind::MouseEnter,
            Box::new(move |_: &E::Event| lifted.set_style("transform", CARD_LIFT)),
        )?;
        let rested = card.clone();
        card.listen(
            EventKind::MouseLeave,
            Box::new(move |_: &E::Event| rested.set_style("transform", CARD_REST)),
        )?;
    }
    Ok(cards.len())
}

fn ripples<E: UiElement>(ctx: &UiContext<E>) -> Result<usize, UiError> {
    let tabs = ctx.registry.group(Group::NavTabs);
    for tab in tabs {
        let host = tab.clone();
        let scheduler = ctx.scheduler.clone();
        let duration = ctx.config.timings.ripple_ms;
        let live: Rc<RefCell<Option<E>>> = Rc::new(RefCell::new(None));
        let removal = TaskSlot::new();
        tab.listen(
            EventKind::Click,
            Box::new(move |ev: &E::Event| {
                if let Some(previous) = live.borrow_mut().take() {
                    previous.remove();
                }
                let (x, y) = ev.client_position();
                let geometry = ripple_geometry(host.bounding_rect(), x, y);
                let Some(ripple) = host.append_new("span") else {
                    return;
                };
                ripple.set_style("width", &px(geometry.size));
                ripple.set_style("height", &px(geometry.size));
                ripple.set_style("left", &px(geometry.left));
                ripple.set_style("top", &px(geometry.top));
                ripple.add_class(RIPPLE_CLASS);
                *live.borrow_mut() = Some(ripple);

                let live = live.clone();
                removal.schedule(scheduler.as_ref(), duration, move || {
                    if let Some(done) = live.borrow_mut().take() {
                        done.remove();
                    }
                });
            }),
        )?;
    }
    Ok(tabs.len())
}

fn badge_pulse<E: UiElement>(ctx: &UiContext<E>) -> Result<usize, UiError> {
    let scheduler = ctx.scheduler.clone();
    let duration = ctx.config.timings.badge_pulse_ms;
    let wiring = ctx.registry.get(Anchor::NotificationIcon).attach(|icon| {
        let scope = icon.clone();
        let reset = TaskSlot::new();
        icon.listen(
            EventKind::Click,
            Box::new(move |_: &E::Event| {
                let Some(badge) = scope.query(&Selector::parse(".notification-badge")) else {
                    return;
                };
                badge.set_style("animation", BADGE_PULSE);
                reset.schedule(scheduler.as_ref(), duration, move || {
                    badge.clear_style("animation")
                });
            }),
        )
    })?;
    Ok(usize::from(wiring.is_attached()))
}

fn row_tint<E: UiElement>(ctx: &UiContext<E>) -> Result<usize, UiError> {
    let rows = ctx.registry.group(Group::TableRows);
    for row in rows {
        let tinted = row.clone();
        let scheduler = ctx.scheduler.clone();
        let duration = ctx.config.timings.row_tint_ms;
        let clear = TaskSlot::new();
        row.listen(
            EventKind::Click,
            Box::new(move |_: &E::Event| {
                tinted.set_style("background-color", ROW_TINT);
                let tinted = tinted.clone();
                clear.schedule(scheduler.as_ref(), duration, move || {
                    tinted.clear_style("background-color")
                });
            }),
        )?;
    }
    Ok(rows.len())
}

fn card_press<E: UiElement>(ctx: &UiContext<E>) -> Result<usize, UiError> {
    let cards = ctx.registry.group(Group::CourseCards);
    for card in cards {
        let pressed = card.clone();
        let scheduler = ctx.scheduler.clone();
        let duration = ctx.config.timings.card_press_ms;
        let restore = TaskSlot::new();
        card.listen(
            EventKind::Click,
            Box::new(move |_: &E::Event| {
                if let Some(title) = heading_text(&pressed) {
                    info!("Course clicked: {}", title);
                }
                pressed.set_style("transform", CARD_PRESS);
                let pressed = pressed.clone();
                restore.schedule(scheduler.as_ref(), duration, move || {
                    pressed.clear_style("transform")
                });
            }),
        )?;
    }
    Ok(cards.len())
}
