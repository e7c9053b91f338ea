use super::{UiContext, SHOW};
use crate::dom::{Anchor, EventKind, Lookup, UiElement, UiEvent, Wiring};
use crate::error::UiError;
use log::info;

pub const LEAVE_SUBMITTED: &str = "Leave request submitted successfully!";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalState {
    Hidden,
    Shown,
}

impl ModalState {
    pub fn of<E: UiElement>(modal: &E) -> Self {
        if modal.has_class(SHOW) {
            ModalState::Shown
        } else {
            ModalState::Hidden
        }
    }
}

pub fn open<E: UiElement>(modal: &E) {
    modal.add_class(SHOW);
}

pub fn close<E: UiElement>(modal: &E) {
    modal.remove_class(SHOW);
}

fn close_on_click<E: UiElement>(control: Lookup<E>, modal: Lookup<E>) -> Result<Wiring, UiError> {
    control.zip(modal).attach(|(control, modal)| {
        control.listen(EventKind::Click, Box::new(move |_: &E::Event| close(&modal)))
    })
}

/// Leave-request modal. Returns how many of its five controls were wired:
/// open trigger, close button, cancel button, backdrop and form.
pub fn install<E: UiElement>(ctx: &UiContext<E>) -> Result<usize, UiError> {
    let registry = &ctx.registry;
    let modal = || registry.get(Anchor::LeaveModal);

    let opener = registry
        .get(Anchor::BtnLeaveRequest)
        .zip(modal())
        .attach(|(button, modal)| {
            button.listen(EventKind::Click, Box::new(move |_: &E::Event| open(&modal)))
        })?;

    let close_button = close_on_click(registry.get(Anchor::CloseLeaveModal), modal())?;
    let cancel_button = close_on_click(registry.get(Anchor::CancelLeave), modal())?;

    let backdrop = modal().attach(|modal| {
        let backdrop = modal.clone();
        modal.listen(
            EventKind::Click,
            Box::new(move |ev: &E::Event| {
                if ev.target().as_ref() == Some(&backdrop) {
                    close(&backdrop);
                }
            }),
        )
    })?;

    let dialogs = ctx.dialogs.clone();
    let current_modal = modal().into_option();
    let form = registry.get(Anchor::LeaveForm).attach(|form| {
        let submitted = form.clone();
        form.listen(
            EventKind::Submit,
            Box::new(move |ev: &E::Event| {
                ev.prevent_default();
                info!("Leave request submitted");
                dialogs.alert(LEAVE_SUBMITTED);
                if let Some(modal) = &current_modal {
                    close(modal);
                }
                submitted.reset_form();
            }),
        )
    })?;

    Ok([opener, close_button, cancel_button, backdrop, form]
        .iter()
        .filter(|w| w.is_attached())
        .count())
}
