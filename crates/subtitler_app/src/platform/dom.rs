use subtitler_core::{AlertView, JobId};

use ui_logging::{ui_debug, ui_info};

/// One mutation of the page, keyed by the element ids and classes the
/// server-rendered templates use. The renderer emits a full set per frame;
/// every patch is idempotent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomPatch {
    /// Move the `.tab-btn` active marker; `None` clears it.
    SetActiveTabButton { tab: Option<String> },
    /// Show or hide one `.tab-content` panel by id.
    SetPanelVisible { id: String, visible: bool },
    SetVisible { id: &'static str, visible: bool },
    SetText { id: &'static str, text: String },
    SetInputValue { id: &'static str, value: String },
    SetEnabled { id: &'static str, enabled: bool },
    SetButtonLabel {
        id: &'static str,
        label: String,
        spinner: bool,
    },
    /// `progress-fill` width and `progress-text` content together.
    SetUploadProgress { percent: u8 },
    /// Replace the alert stack at the top of the container.
    SetAlerts(Vec<AlertView>),
    /// `.job-status` class and label on one card.
    SetJobStatus {
        job_id: JobId,
        class: String,
        label: String,
    },
    /// `.job-progress` text on one card.
    SetJobProgress { job_id: JobId, text: String },
    /// `.job-title` text on one card.
    SetJobTitle { job_id: JobId, text: String },
    /// Replace `.job-actions` with a download link.
    SetJobActionDownload { job_id: JobId, href: String },
    /// Replace `.job-actions` with the terminal failure marker.
    SetJobActionFailed { job_id: JobId },
    /// Error styling for a form's required inputs; fields not listed are
    /// reset to the normal style.
    SetFormValidity {
        form_id: String,
        invalid_fields: Vec<String>,
    },
    /// `passwordStrength` text and color.
    SetPasswordStrength { text: String, color: String },
}

/// The seam a browser bridge implements. The shell only describes mutations;
/// whatever owns the real page carries them out.
pub trait DomSurface {
    fn apply(&mut self, patch: DomPatch);
    fn reload(&mut self);
    fn copy_to_clipboard(&mut self, text: &str);
}

/// Surface for headless runs: every mutation goes to the log.
#[derive(Debug, Default)]
pub struct LoggingDomSurface;

impl DomSurface for LoggingDomSurface {
    fn apply(&mut self, patch: DomPatch) {
        ui_debug!("dom: {:?}", patch);
    }

    fn reload(&mut self) {
        ui_info!("dom: page reload requested");
    }

    fn copy_to_clipboard(&mut self, text: &str) {
        ui_info!("dom: copied {} chars to clipboard", text.len());
    }
}

/// Surface that records patches for assertions in tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingDomSurface {
    pub patches: Vec<DomPatch>,
    pub reloads: usize,
    pub clipboard: Vec<String>,
}

#[cfg(test)]
impl DomSurface for RecordingDomSurface {
    fn apply(&mut self, patch: DomPatch) {
        self.patches.push(patch);
    }

    fn reload(&mut self) {
        self.reloads += 1;
    }

    fn copy_to_clipboard(&mut self, text: &str) {
        self.clipboard.push(text.to_string());
    }
}
