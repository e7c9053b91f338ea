use super::UiContext;
use crate::dom::{heading_text, Anchor, EventKind, Group, Selector, UiElement, UiEvent};
use crate::error::UiError;
use log::{debug, info};

/// A quick-action button that confirms with a fixed message.
#[derive(Clone, Copy, Debug)]
pub struct QuickAction {
    pub anchor: Anchor,
    pub log: &'static str,
    pub alert: &'static str,
}

pub const QUICK_ACTIONS: [QuickAction; 7] = [
    QuickAction {
        anchor: Anchor::BtnAttendance,
        log: "Mark Attendance clicked",
        alert: "Attendance marked for today!",
    },
    QuickAction {
        anchor: Anchor::BtnPayslip,
        log: "View Payslip clicked",
        alert: "Opening latest payslip...",
    },
    QuickAction {
        anchor: Anchor::BtnReimbursement,
        log: "Request Reimbursement clicked",
        alert: "Reimbursement request form opened",
    },
    QuickAction {
        anchor: Anchor::BtnEnrollCourse,
        log: "Enroll in Course clicked",
        alert: "Browse available courses...",
    },
    QuickAction {
        anchor: Anchor::BtnMyCourses,
        log: "My Learning Path clicked",
        alert: "Viewing your learning path...",
    },
    QuickAction {
        anchor: Anchor::BtnCertificates,
        log: "My Certificates clicked",
        alert: "Viewing your certificates...",
    },
    QuickAction {
        anchor: Anchor::BtnScheduleTraining,
        log: "Schedule Training clicked",
        alert: "Opening training scheduler...",
    },
];

/// Where a row-level button finds the name it reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NameSource {
    /// First `h4` inside the button's parent.
    ParentHeading,
    /// First `h4` inside the nearest enclosing `.course-card`.
    CourseCard,
}

impl NameSource {
    pub fn resolve<E: UiElement>(&self, button: &E) -> Option<String> {
        let scope = match self {
            NameSource::ParentHeading => button.parent(),
            NameSource::CourseCard => button.closest(&Selector::parse(".course-card")),
        }?;
        heading_text(&scope)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Confirmation {
    Fixed(&'static str),
    Named {
        source: NameSource,
        prefix: &'static str,
    },
}

/// A set of identical buttons repeated across rows or cards.
#[derive(Clone, Copy, Debug)]
pub struct GroupAction {
    pub group: Group,
    pub log: &'static str,
    pub confirmation: Confirmation,
    /// Keeps the click from reaching an enclosing clickable row.
    pub isolate: bool,
}

pub const GROUP_ACTIONS: [GroupAction; 5] = [
    GroupAction {
        group: Group::ApproveButtons,
        log: "Leave approved",
        confirmation: Confirmation::Fixed("Leave request approved!"),
        isolate: true,
    },
    GroupAction {
        group: Group::RejectButtons,
        log: "Leave rejected",
        confirmation: Confirmation::Fixed("Leave request rejected!"),
        isolate: true,
    },
    GroupAction {
        group: Group::ContinueButtons,
        log: "Continue course:",
        confirmation: Confirmation::Named {
            source: NameSource::ParentHeading,
            prefix: "Resuming course: ",
        },
        isolate: false,
    },
    GroupAction {
        group: Group::EnrollButtons,
        log: "Enroll in:",
        confirmation: Confirmation::Named {
            source: NameSource::CourseCard,
            prefix: "Enrolling in: ",
        },
        isolate: false,
    },
    GroupAction {
        group: Group::JoinButtons,
        log: "Join session:",
        confirmation: Confirmation::Named {
            source: NameSource::ParentHeading,
            prefix: "Joining session: ",
        },
        isolate: false,
    },
];

/// Placeholder handlers: each logs and confirms, nothing else changes.
/// Returns the number of buttons wired.
pub fn install<E: UiElement>(ctx: &UiContext<E>) -> Result<usize, UiError> {
    let mut wired = 0;

    for action in QUICK_ACTIONS {
        let dialogs = ctx.dialogs.clone();
        let attached = ctx.registry.get(action.anchor).attach(|button| {
            button.listen(
                EventKind::Click,
                Box::new(move |_: &E::Event| {
                    info!("{}", action.log);
                    dialogs.alert(action.alert);
                }),
            )
        })?;
        if attached.is_attached() {
            wired += 1;
        }
    }

    for action in GROUP_ACTIONS {
        let buttons = ctx.registry.group(action.group);
        for button in buttons {
            let dialogs = ctx.dialogs.clone();
            let clicked = button.clone();
            button.listen(
                EventKind::Click,
                Box::new(move |ev: &E::Event| {
                    if action.isolate {
                        ev.stop_propagation();
                    }
                    match action.confirmation {
                        Confirmation::Fixed(message) => {
                            info!("{}", action.log);
                            dialogs.alert(message);
                        }
                        Confirmation::Named { source, prefix } => match source.resolve(&clicked) {
                            Some(name) => {
                                info!("{} {}", action.log, name);
                                dialogs.alert(&format!("{prefix}{name}"));
                            }
                            None => debug!("{} skipped: no heading near button", action.log),
                        },
                    }
                }),
            )?;
        }
        wired += buttons.len();
    }

    Ok(wired)
}
