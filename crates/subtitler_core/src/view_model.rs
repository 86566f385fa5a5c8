use crate::validate::StrengthReport;
use crate::{AlertId, AlertKind, JobId, JobStatus};

/// Everything the renderer needs to draw the page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub active_tab: Option<String>,
    pub panels: Vec<TabPanelView>,
    pub upload: UploadView,
    pub url_form: UrlFormView,
    pub jobs: Vec<JobCardView>,
    pub alerts: Vec<AlertView>,
    pub password_strength: Option<StrengthView>,
    pub form_validation: Option<FormValidationView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabPanelView {
    pub id: String,
    pub visible: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UploadView {
    /// `"name (size)"` line for the file-info box, absent when no selection.
    pub file_info: Option<String>,
    pub drop_zone_visible: bool,
    pub submit_enabled: bool,
    pub submitting: bool,
    /// Simulated percent while submitting.
    pub progress_percent: Option<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UrlFormView {
    pub input: String,
    pub submit_enabled: bool,
    pub submit_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobCardView {
    pub job_id: JobId,
    pub status: JobStatus,
    pub status_label: String,
    pub status_class: String,
    pub progress: String,
    pub title: String,
    pub action: JobAction,
}

/// What the card's actions area shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobAction {
    None,
    Download { href: String },
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertView {
    pub id: AlertId,
    pub kind: AlertKind,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrengthView {
    /// Tier label, possibly suffixed with the missing-criteria list.
    pub text: String,
    pub color: &'static str,
}

impl StrengthView {
    pub(crate) fn from_report(report: &StrengthReport) -> Self {
        let mut text = report.label.to_string();
        if !report.missing.is_empty() {
            text.push_str(&format!(" (Missing: {})", report.missing.join(", ")));
        }
        Self {
            text,
            color: report.color,
        }
    }
}

/// Result of the last required-field validation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormValidationView {
    pub form_id: String,
    pub invalid_fields: Vec<String>,
    pub passed: bool,
}
