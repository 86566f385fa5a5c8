use crate::{JobCardSeed, JobId, JobStatus, ModelSize, Page, Timer, UploadSelection};

/// Server reply to `/submit-upload`, as the shell decoded it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadReply {
    pub accepted: bool,
    pub filename: Option<String>,
    pub error: Option<String>,
}

/// Server reply to `/submit-job`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitReply {
    pub accepted: bool,
    pub error: Option<String>,
}

/// Successful server reply to `/job-status/{id}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusReply {
    pub status: JobStatus,
    pub progress: Option<String>,
    pub video_title: Option<String>,
}

/// One named value from a form's required inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldValue {
    pub name: String,
    pub value: String,
}

/// Every event the shell can feed into [`crate::update`].
///
/// Network outcomes arrive as `Result`s whose `Err` carries a transport-level
/// message; server-reported failures travel inside the `Ok` replies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Initial DOM snapshot: which page we are on, which tab panels exist,
    /// and the job cards the server rendered.
    PageLoaded {
        page: Page,
        panels: Vec<String>,
        cards: Vec<JobCardSeed>,
    },
    /// User activated a tab. Carries the tab identifier explicitly; there is
    /// no ambient "current event" to consult.
    TabSelected { tab: String },
    /// User picked or dropped a file.
    FileChosen(UploadSelection),
    /// User removed the current selection.
    FileRemoved,
    /// User changed the model-size select on the upload form.
    UploadModelChanged(ModelSize),
    /// User clicked the upload submit button.
    UploadSubmitted,
    /// `/submit-upload` resolved.
    UploadFinished(Result<UploadReply, String>),
    /// User edited the URL input.
    UrlInputChanged(String),
    /// User changed the model-size select on the URL form.
    UrlModelChanged(ModelSize),
    /// User submitted the URL form (button or Enter key).
    UrlSubmitted,
    /// `/submit-job` resolved.
    JobSubmitFinished(Result<SubmitReply, String>),
    /// One status poll resolved. `Err` covers transport failures and
    /// `success:false` bodies alike; both halt the card's loop silently.
    PollFinished {
        job_id: JobId,
        result: Result<StatusReply, String>,
    },
    /// A scheduled timer fired.
    TimerFired(Timer),
    /// User submitted a form with `required` inputs.
    FormSubmitted {
        form_id: String,
        required: Vec<FieldValue>,
    },
    /// Password input changed; recompute the strength meter.
    PasswordChanged(String),
    /// User asked to copy `text` to the clipboard.
    CopyRequested { text: String },
    /// The shell finished a clipboard copy.
    CopyCompleted,
}
