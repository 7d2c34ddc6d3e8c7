//! Seed data for the job request sheet: rows, column headers and header groups.

use std::ops::Range;

use crate::state::CellPosition;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    InProcess,
    NeedToStart,
    Complete,
    Blocked,
}

impl Status {
    pub fn label(&self) -> &'static str {
        match self {
            Status::InProcess => "In-process",
            Status::NeedToStart => "Need to start",
            Status::Complete => "Complete",
            Status::Blocked => "Blocked",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        [
            Status::InProcess,
            Status::NeedToStart,
            Status::Complete,
            Status::Blocked,
        ]
        .into_iter()
        .find(|status| status.label().eq_ignore_ascii_case(label.trim()))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        [Priority::High, Priority::Medium, Priority::Low]
            .into_iter()
            .find(|priority| priority.label().eq_ignore_ascii_case(label.trim()))
    }
}

#[derive(Clone, Debug)]
pub struct JobRequest {
    pub title: &'static str,
    pub submitted: &'static str,
    pub status: Status,
    pub submitter: &'static str,
    pub url: &'static str,
    pub assigned: &'static str,
    pub priority: Priority,
    pub due_date: &'static str,
    pub est_value: &'static str,
}

impl JobRequest {
    /// Field shown in 1-based data column `col`.
    pub fn field(&self, col: usize) -> Option<&'static str> {
        match col {
            1 => Some(self.title),
            2 => Some(self.submitted),
            3 => Some(self.status.label()),
            4 => Some(self.submitter),
            5 => Some(self.url),
            6 => Some(self.assigned),
            7 => Some(self.priority.label()),
            8 => Some(self.due_date),
            9 => Some(self.est_value),
            _ => None,
        }
    }
}

/// How a column's values are drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColumnKind {
    Text,
    Status,
    Url,
    Priority,
    Currency,
}

/// Header colour family.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeaderTint {
    Neutral,
    Green,
    Purple,
    Orange,
}

#[derive(Clone, Debug)]
pub struct ColumnHeader {
    pub title: &'static str,
    pub icon: Option<&'static str>,
    pub tint: HeaderTint,
    pub has_menu: bool,
    pub kind: ColumnKind,
}

#[derive(Clone, Debug)]
pub struct ColumnGroup {
    pub label: &'static str,
    /// 0-based column indices covered by the group.
    pub columns: Range<usize>,
    pub tint: HeaderTint,
    /// Rendered as a linked document chip rather than a plain label.
    pub is_document: bool,
}

pub struct Dataset {
    pub rows: Vec<JobRequest>,
    pub headers: Vec<ColumnHeader>,
    pub groups: Vec<ColumnGroup>,
}

impl Dataset {
    pub fn job_requests() -> Self {
        Self {
            rows: seed_rows(),
            headers: seed_headers(),
            groups: seed_groups(),
        }
    }

    pub fn seed_value(&self, pos: CellPosition) -> Option<&'static str> {
        if pos.row == 0 {
            return None;
        }
        self.rows.get(pos.row - 1).and_then(|row| row.field(pos.col))
    }

    /// Header for 0-based column `index`, if the column has one.
    pub fn header(&self, index: usize) -> Option<&ColumnHeader> {
        self.headers.get(index)
    }

    pub fn column_kind(&self, index: usize) -> ColumnKind {
        self.header(index)
            .map(|header| header.kind)
            .unwrap_or(ColumnKind::Text)
    }

    /// The group that starts at `index`, if any.
    pub fn group_starting_at(&self, index: usize) -> Option<&ColumnGroup> {
        self.groups.iter().find(|group| group.columns.start == index)
    }

    pub fn group_containing(&self, index: usize) -> Option<&ColumnGroup> {
        self.groups.iter().find(|group| group.columns.contains(&index))
    }
}

fn seed_rows() -> Vec<JobRequest> {
    vec![
        JobRequest {
            title: "Launch social media campaign for product XYZ",
            submitted: "15-11-2024",
            status: Status::InProcess,
            submitter: "Aisha Patel",
            url: "www.aishapatel.com",
            assigned: "Sophie Choudhury",
            priority: Priority::Medium,
            due_date: "20-11-2024",
            est_value: "6,200,000",
        },
        JobRequest {
            title: "Update press kit for company redesign",
            submitted: "28-10-2024",
            status: Status::NeedToStart,
            submitter: "Irfan Khan",
            url: "www.irfankhanportfolio.com",
            assigned: "Tejas Pandey",
            priority: Priority::High,
            due_date: "30-10-2024",
            est_value: "3,500,000",
        },
        JobRequest {
            title: "Finalize user testing feedback for app update",
            submitted: "05-12-2024",
            status: Status::InProcess,
            submitter: "Mark Johnson",
            url: "www.markjohnsondesigns.com",
            assigned: "Rachel Lee",
            priority: Priority::Medium,
            due_date: "10-12-2024",
            est_value: "4,750,000",
        },
        JobRequest {
            title: "Design new features for the website",
            submitted: "10-01-2025",
            status: Status::Complete,
            submitter: "Emily Green",
            url: "www.emilygreenart.com",
            assigned: "Tom Wright",
            priority: Priority::Low,
            due_date: "15-01-2025",
            est_value: "5,900,000",
        },
        JobRequest {
            title: "Prepare financial report for Q4",
            submitted: "25-01-2025",
            status: Status::Blocked,
            submitter: "Jessica Brown",
            url: "www.jessicabrowncreative.com",
            assigned: "Kevin Smith",
            priority: Priority::Low,
            due_date: "30-01-2025",
            est_value: "2,800,000",
        },
    ]
}

fn seed_headers() -> Vec<ColumnHeader> {
    let header = |title, icon, tint, has_menu, kind| ColumnHeader {
        title,
        icon,
        tint,
        has_menu,
        kind,
    };
    vec![
        header("Job Request", Some("icons/briefcase.svg"), HeaderTint::Neutral, true, ColumnKind::Text),
        header("Submitted", Some("icons/calendar.svg"), HeaderTint::Neutral, true, ColumnKind::Text),
        header("Status", Some("icons/chevron-circle.svg"), HeaderTint::Neutral, true, ColumnKind::Status),
        header("Submitter", Some("icons/person.svg"), HeaderTint::Neutral, true, ColumnKind::Text),
        header("URL", Some("icons/globe.svg"), HeaderTint::Neutral, true, ColumnKind::Url),
        header("Assigned", Some("icons/emoji.svg"), HeaderTint::Green, true, ColumnKind::Text),
        header("Priority", None, HeaderTint::Purple, true, ColumnKind::Priority),
        header("Due Date", None, HeaderTint::Purple, false, ColumnKind::Text),
        header("Est. Value", None, HeaderTint::Orange, false, ColumnKind::Currency),
    ]
}

fn seed_groups() -> Vec<ColumnGroup> {
    vec![
        ColumnGroup {
            label: "Q3 Financial Overview",
            columns: 0..5,
            tint: HeaderTint::Neutral,
            is_document: true,
        },
        ColumnGroup {
            label: "ABC",
            columns: 5..6,
            tint: HeaderTint::Green,
            is_document: false,
        },
        ColumnGroup {
            label: "Answer a question",
            columns: 6..8,
            tint: HeaderTint::Purple,
            is_document: false,
        },
        ColumnGroup {
            label: "Extract",
            columns: 8..9,
            tint: HeaderTint::Orange,
            is_document: false,
        },
    ]
}
