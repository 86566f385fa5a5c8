use std::collections::BTreeMap;

use crate::validate::StrengthReport;
use crate::view_model::{
    AlertView, AppViewModel, FormValidationView, JobAction, JobCardView, StrengthView,
    TabPanelView, UploadView, UrlFormView,
};
use crate::format_file_size;

pub type JobId = String;
pub type AlertId = u32;

/// Default label of the two submit buttons.
pub const SUBMIT_LABEL: &str = "Generate Subtitles";
/// Placeholder title shown while the server has not named the video yet.
pub const TITLE_PLACEHOLDER: &str = "Processing...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobStatus {
    Pending,
    Processing,
    Completed,
    Failed,
}

impl JobStatus {
    /// Lowercase wire/CSS form (`status-pending` etc).
    pub fn as_str(self) -> &'static str {
        match self {
            JobStatus::Pending => "pending",
            JobStatus::Processing => "processing",
            JobStatus::Completed => "completed",
            JobStatus::Failed => "failed",
        }
    }

    /// Uppercase badge label shown on the card.
    pub fn label(self) -> &'static str {
        match self {
            JobStatus::Pending => "PENDING",
            JobStatus::Processing => "PROCESSING",
            JobStatus::Completed => "COMPLETED",
            JobStatus::Failed => "FAILED",
        }
    }

    /// Whether the job still warrants polling.
    pub fn is_active(self) -> bool {
        matches!(self, JobStatus::Pending | JobStatus::Processing)
    }
}

/// Whisper model sizes offered by both submit forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModelSize {
    Tiny,
    #[default]
    Base,
    Small,
    Medium,
    Large,
}

impl ModelSize {
    pub fn as_str(self) -> &'static str {
        match self {
            ModelSize::Tiny => "tiny",
            ModelSize::Base => "base",
            ModelSize::Small => "small",
            ModelSize::Medium => "medium",
            ModelSize::Large => "large",
        }
    }
}

/// Which server-rendered page hosts the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    Dashboard,
}

/// A file the user picked or dropped, with the metadata the browser reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadSelection {
    pub file_name: String,
    pub declared_type: String,
    pub size_bytes: u64,
    pub payload: Vec<u8>,
}

/// Upload form state machine.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum UploadPhase {
    #[default]
    Empty,
    Selected {
        selection: UploadSelection,
    },
    Submitting {
        selection: UploadSelection,
        /// Simulated percent, stepped by the progress ticker and capped at 90
        /// until the server responds.
        percent: u8,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub id: AlertId,
    pub kind: AlertKind,
    pub message: String,
}

/// One job card as the dashboard template rendered it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobCardSeed {
    pub job_id: JobId,
    pub status: JobStatus,
    pub progress: String,
    pub video_title: Option<String>,
}

/// Live view-model state of one job card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobCard {
    pub status: JobStatus,
    pub progress: String,
    pub video_title: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    page: Page,
    panels: Vec<String>,
    active_tab: Option<String>,
    upload: UploadPhase,
    upload_model: ModelSize,
    url_input: String,
    url_model: ModelSize,
    url_in_flight: bool,
    cards: BTreeMap<JobId, JobCard>,
    alerts: Vec<Alert>,
    next_alert_id: AlertId,
    password_strength: Option<StrengthReport>,
    form_validation: Option<FormValidationView>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn upload(&self) -> &UploadPhase {
        &self.upload
    }

    pub fn upload_model(&self) -> ModelSize {
        self.upload_model
    }

    pub fn url_model(&self) -> ModelSize {
        self.url_model
    }

    pub fn url_input(&self) -> &str {
        &self.url_input
    }

    pub fn url_in_flight(&self) -> bool {
        self.url_in_flight
    }

    pub fn card(&self, job_id: &str) -> Option<&JobCard> {
        self.cards.get(job_id)
    }

    pub fn has_active_cards(&self) -> bool {
        self.cards.values().any(|card| card.status.is_active())
    }

    /// Returns whether anything visible changed since the last call, and
    /// clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn load_page(&mut self, page: Page, panels: Vec<String>, seeds: Vec<JobCardSeed>) {
        self.page = page;
        self.active_tab = panels.first().cloned();
        self.panels = panels;
        self.cards = seeds
            .into_iter()
            .map(|seed| {
                (
                    seed.job_id,
                    JobCard {
                        status: seed.status,
                        progress: seed.progress,
                        video_title: seed.video_title,
                    },
                )
            })
            .collect();
        self.mark_dirty();
    }

    /// Active-button marker always follows the click. An unknown tab id
    /// leaves every panel hidden, matching the page's behavior.
    pub(crate) fn select_tab(&mut self, tab: String) {
        self.active_tab = Some(tab);
        self.mark_dirty();
    }

    pub(crate) fn set_upload(&mut self, phase: UploadPhase) {
        self.upload = phase;
        self.mark_dirty();
    }

    pub(crate) fn set_upload_model(&mut self, model: ModelSize) {
        self.upload_model = model;
    }

    pub(crate) fn set_url_model(&mut self, model: ModelSize) {
        self.url_model = model;
    }

    pub(crate) fn set_url_input(&mut self, input: String) {
        self.url_input = input;
        self.mark_dirty();
    }

    pub(crate) fn set_url_in_flight(&mut self, in_flight: bool) {
        self.url_in_flight = in_flight;
        self.mark_dirty();
    }

    pub(crate) fn push_alert(&mut self, kind: AlertKind, message: impl Into<String>) -> AlertId {
        self.next_alert_id += 1;
        let id = self.next_alert_id;
        self.alerts.push(Alert {
            id,
            kind,
            message: message.into(),
        });
        self.mark_dirty();
        id
    }

    pub(crate) fn dismiss_alert(&mut self, alert_id: AlertId) {
        let before = self.alerts.len();
        self.alerts.retain(|alert| alert.id != alert_id);
        if self.alerts.len() != before {
            self.mark_dirty();
        }
    }

    /// Patches one card from a poll reply. The title is only filled in while
    /// the placeholder is still showing.
    pub(crate) fn patch_card(
        &mut self,
        job_id: &str,
        status: JobStatus,
        progress: Option<String>,
        video_title: Option<String>,
    ) {
        let Some(card) = self.cards.get_mut(job_id) else {
            return;
        };
        card.status = status;
        card.progress = progress.unwrap_or_default();
        if card.video_title.is_none() {
            card.video_title = video_title;
        }
        self.mark_dirty();
    }

    pub(crate) fn set_password_strength(&mut self, report: Option<StrengthReport>) {
        self.password_strength = report;
        self.mark_dirty();
    }

    pub(crate) fn set_form_validation(&mut self, view: FormValidationView) {
        self.form_validation = Some(view);
        self.mark_dirty();
    }

    pub fn view(&self) -> AppViewModel {
        let panels = self
            .panels
            .iter()
            .map(|id| TabPanelView {
                id: id.clone(),
                visible: Some(id) == self.active_tab.as_ref(),
            })
            .collect();

        let upload = match &self.upload {
            UploadPhase::Empty => UploadView {
                file_info: None,
                drop_zone_visible: true,
                submit_enabled: false,
                submitting: false,
                progress_percent: None,
            },
            UploadPhase::Selected { selection } => UploadView {
                file_info: Some(format!(
                    "{} ({})",
                    selection.file_name,
                    format_file_size(selection.size_bytes)
                )),
                drop_zone_visible: false,
                submit_enabled: true,
                submitting: false,
                progress_percent: None,
            },
            UploadPhase::Submitting { selection, percent } => UploadView {
                file_info: Some(format!(
                    "{} ({})",
                    selection.file_name,
                    format_file_size(selection.size_bytes)
                )),
                drop_zone_visible: false,
                submit_enabled: false,
                submitting: true,
                progress_percent: Some(*percent),
            },
        };

        let url_form = UrlFormView {
            input: self.url_input.clone(),
            submit_enabled: !self.url_in_flight,
            submit_label: if self.url_in_flight {
                "Submitting...".to_string()
            } else {
                SUBMIT_LABEL.to_string()
            },
        };

        let jobs = self
            .cards
            .iter()
            .map(|(job_id, card)| JobCardView {
                job_id: job_id.clone(),
                status: card.status,
                status_label: card.status.label().to_string(),
                status_class: format!("status-{}", card.status.as_str()),
                progress: card.progress.clone(),
                title: card
                    .video_title
                    .clone()
                    .unwrap_or_else(|| TITLE_PLACEHOLDER.to_string()),
                action: match card.status {
                    JobStatus::Completed => JobAction::Download {
                        href: format!("/download/{job_id}"),
                    },
                    JobStatus::Failed => JobAction::Failed,
                    JobStatus::Pending | JobStatus::Processing => JobAction::None,
                },
            })
            .collect();

        let alerts = self
            .alerts
            .iter()
            .map(|alert| AlertView {
                id: alert.id,
                kind: alert.kind,
                message: alert.message.clone(),
            })
            .collect();

        AppViewModel {
            active_tab: self.active_tab.clone(),
            panels,
            upload,
            url_form,
            jobs,
            alerts,
            password_strength: self.password_strength.as_ref().map(StrengthView::from_report),
            form_validation: self.form_validation.clone(),
        }
    }
}
