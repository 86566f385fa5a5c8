//! Subtitler core: pure UI state machine and view-model helpers.
mod effect;
mod format;
mod msg;
mod state;
mod update;
mod validate;
mod view_model;

pub use effect::{
    Effect, Timer, ALERT_TTL, AUTO_REFRESH_DELAY, POLL_INTERVAL, PROGRESS_TICK_INTERVAL,
    RELOAD_GRACE,
};
pub use format::{format_date, format_duration, format_file_size};
pub use msg::{FieldValue, Msg, StatusReply, SubmitReply, UploadReply};
pub use state::{
    Alert, AlertId, AlertKind, AppState, JobCard, JobCardSeed, JobId, JobStatus, ModelSize, Page,
    UploadPhase, UploadSelection, SUBMIT_LABEL, TITLE_PLACEHOLDER,
};
pub use update::update;
pub use validate::{
    is_probable_youtube_url, missing_required_fields, password_strength, validate_upload,
    FileRejection, StrengthReport, ALLOWED_VIDEO_TYPES, MAX_UPLOAD_BYTES,
};
pub use view_model::{
    AlertView, AppViewModel, FormValidationView, JobAction, JobCardView, StrengthView,
    TabPanelView, UploadView, UrlFormView,
};
