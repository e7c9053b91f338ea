//! Static content rendered by the shell until a backend feeds the page.

#[derive(Clone, Debug, PartialEq)]
pub struct Metric {
    pub label: &'static str,
    pub value: &'static str,
    pub hint: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Goal {
    pub title: &'static str,
    pub progress: u8,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PendingLeave {
    pub employee: &'static str,
    pub kind: &'static str,
    pub period: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Course {
    pub title: &'static str,
    pub provider: &'static str,
    pub progress: Option<u8>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub title: &'static str,
    pub starts_at: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TabSpec {
    pub id: &'static str,
    pub label: &'static str,
}

pub const TABS: [TabSpec; 3] = [
    TabSpec {
        id: "overview",
        label: "Overview",
    },
    TabSpec {
        id: "hr",
        label: "HR & Leave",
    },
    TabSpec {
        id: "learning",
        label: "Learning",
    },
];

pub fn metrics() -> Vec<Metric> {
    vec![
        Metric {
            label: "Attendance",
            value: "96%",
            hint: "This month",
        },
        Metric {
            label: "Leave Balance",
            value: "12 days",
            hint: "Annual leave",
        },
        Metric {
            label: "Courses Completed",
            value: "8",
            hint: "This year",
        },
        Metric {
            label: "Pending Approvals",
            value: "3",
            hint: "Awaiting action",
        },
    ]
}

pub fn goals() -> Vec<Goal> {
    vec![
        Goal {
            title: "Quarterly OKR completion",
            progress: 75,
        },
        Goal {
            title: "Training hours",
            progress: 60,
        },
        Goal {
            title: "Project milestones",
            progress: 90,
        },
    ]
}

pub fn pending_leaves() -> Vec<PendingLeave> {
    vec![
        PendingLeave {
            employee: "Ravi Shah",
            kind: "Annual",
            period: "Nov 4 - Nov 6",
        },
        PendingLeave {
            employee: "Meera Iyer",
            kind: "Sick",
            period: "Nov 1",
        },
    ]
}

pub fn courses() -> Vec<Course> {
    vec![
        Course {
            title: "Rust Fundamentals",
            provider: "Internal Academy",
            progress: Some(45),
        },
        Course {
            title: "Intro to Python",
            provider: "Internal Academy",
            progress: None,
        },
        Course {
            title: "Leadership Essentials",
            provider: "People Team",
            progress: None,
        },
    ]
}

pub fn sessions() -> Vec<Session> {
    vec![
        Session {
            title: "Secure Coding Workshop",
            starts_at: "Today, 4:00 PM",
        },
        Session {
            title: "Quarterly Town Hall",
            starts_at: "Fri, 11:00 AM",
        },
    ]
}
