use super::{Selector, UiElement};
use crate::error::UiError;
use std::collections::HashMap;

/// Single elements the controller wires by name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Anchor {
    UserProfile,
    ProfileDropdown,
    NotificationIcon,
    LeaveModal,
    CloseLeaveModal,
    CancelLeave,
    LeaveForm,
    BtnLeaveRequest,
    BtnAttendance,
    BtnPayslip,
    BtnReimbursement,
    BtnEnrollCourse,
    BtnMyCourses,
    BtnCertificates,
    BtnScheduleTraining,
}

impl Anchor {
    pub const ALL: [Anchor; 15] = [
        Anchor::UserProfile,
        Anchor::ProfileDropdown,
        Anchor::NotificationIcon,
        Anchor::LeaveModal,
        Anchor::CloseLeaveModal,
        Anchor::CancelLeave,
        Anchor::LeaveForm,
        Anchor::BtnLeaveRequest,
        Anchor::BtnAttendance,
        Anchor::BtnPayslip,
        Anchor::BtnReimbursement,
        Anchor::BtnEnrollCourse,
        Anchor::BtnMyCourses,
        Anchor::BtnCertificates,
        Anchor::BtnScheduleTraining,
    ];

    pub fn css(&self) -> &'static str {
        match self {
            Anchor::UserProfile => "#userProfile",
            Anchor::ProfileDropdown => "#profileDropdown",
            Anchor::NotificationIcon => ".notification-icon",
            Anchor::LeaveModal => "#leaveModal",
            Anchor::CloseLeaveModal => "#closeLeaveModal",
            Anchor::CancelLeave => "#cancelLeave",
            Anchor::LeaveForm => ".leave-form",
            Anchor::BtnLeaveRequest => "#btnLeaveRequest",
            Anchor::BtnAttendance => "#btnAttendance",
            Anchor::BtnPayslip => "#btnPayslip",
            Anchor::BtnReimbursement => "#btnReimbursement",
            Anchor::BtnEnrollCourse => "#btnEnrollCourse",
            Anchor::BtnMyCourses => "#btnMyCourses",
            Anchor::BtnCertificates => "#btnCertificates",
            Anchor::BtnScheduleTraining => "#btnScheduleTraining",
        }
    }
}

/// Element sets the controller wires uniformly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Group {
    NavTabs,
    TabContents,
    ProgressBars,
    MetricCards,
    TableRows,
    CourseCards,
    DropdownItems,
    ApproveButtons,
    RejectButtons,
    ContinueButtons,
    EnrollButtons,
    JoinButtons,
}

impl Group {
    pub const ALL: [Group; 12] = [
        Group::NavTabs,
        Group::TabContents,
        Group::ProgressBars,
        Group::MetricCards,
        Group::TableRows,
        Group::CourseCards,
        Group::DropdownItems,
        Group::ApproveButtons,
        Group::RejectButtons,
        Group::ContinueButtons,
        Group::EnrollButtons,
        Group::JoinButtons,
    ];

    pub fn css(&self) -> &'static str {
        match self {
            Group::NavTabs => ".nav-tab",
            Group::TabContents => ".tab-content",
            Group::ProgressBars => ".progress-bar",
            Group::MetricCards => ".metric-card",
            Group::TableRows => ".data-table tbody tr",
            Group::CourseCards => ".course-card",
            Group::DropdownItems => "#profileDropdown .dropdown-item",
            Group::ApproveButtons => ".btn-approve",
            Group::RejectButtons => ".btn-reject",
            Group::ContinueButtons => ".btn-continue",
            Group::EnrollButtons => ".btn-enroll",
            Group::JoinButtons => ".btn-join",
        }
    }
}

/// Outcome of wiring one optional feature.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Wiring {
    Attached,
    Skipped,
}

impl Wiring {
    pub fn is_attached(&self) -> bool {
        matches!(self, Wiring::Attached)
    }
}

/// Present/absent result of a registry lookup.
#[derive(Clone, Debug, PartialEq)]
#[must_use]
pub struct Lookup<E>(Option<E>);

impl<E> Lookup<E> {
    pub fn new(element: Option<E>) -> Self {
        Self(element)
    }

    pub fn is_present(&self) -> bool {
        self.0.is_some()
    }

    pub fn into_option(self) -> Option<E> {
        self.0
    }

    pub fn zip<O>(self, other: Lookup<O>) -> Lookup<(E, O)> {
        Lookup(self.0.zip(other.0))
    }

    /// Runs `wire` when the element is present; an absent element is a no-op.
    pub fn attach<F>(self, wire: F) -> Result<Wiring, UiError>
    where
        F: FnOnce(E) -> Result<(), UiError>,
    {
        match self.0 {
            Some(element) => wire(element).map(|_| Wiring::Attached),
            None => Ok(Wiring::Skipped),
        }
    }
}

/// Handles for every element the controller touches, resolved once from the
/// document root.
pub struct UiRegistry<E> {
    root: E,
    anchors: HashMap<Anchor, E>,
    groups: HashMap<Group, Vec<E>>,
}

impl<E: UiElement> UiRegistry<E> {
    pub fn scan(root: E) -> Self {
        let anchors = Anchor::ALL
            .iter()
            .filter_map(|anchor| {
                root.query(&Selector::parse(anchor.css()))
                    .map(|element| (*anchor, element))
            })
            .collect();
        let groups = Group::ALL
            .iter()
            .map(|group| (*group, root.query_all(&Selector::parse(group.css()))))
            .collect();
        Self {
            root,
            anchors,
            groups,
        }
    }

    pub fn root(&self) -> &E {
        &self.root
    }

    pub fn get(&self, anchor: Anchor) -> Lookup<E> {
        Lookup::new(self.anchors.get(&anchor).cloned())
    }

    pub fn group(&self, group: Group) -> &[E] {
        self.groups.get(&group).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn by_id(&self, id: &str) -> Lookup<E> {
        Lookup::new(self.root.find_by_id(id))
    }

    pub fn anchor_count(&self) -> usize {
        self.anchors.len()
    }
}
