use std::time::Duration;

use crate::{JobId, ModelSize, UploadSelection};

/// Interval between simulated upload-progress steps.
pub const PROGRESS_TICK_INTERVAL: Duration = Duration::from_millis(200);
/// Delay between consecutive status polls for one job card.
pub const POLL_INTERVAL: Duration = Duration::from_secs(3);
/// How long an alert stays visible before auto-dismissal.
pub const ALERT_TTL: Duration = Duration::from_secs(5);
/// Grace period between a successful submit and the page reload.
pub const RELOAD_GRACE: Duration = Duration::from_secs(2);
/// Dashboard auto-refresh delay while active jobs exist.
pub const AUTO_REFRESH_DELAY: Duration = Duration::from_secs(30);

/// Side effects requested by [`crate::update`]. The shell executes them;
/// the core never performs IO itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// POST the selected file to `/submit-upload` as multipart form data.
    SubmitUpload {
        selection: UploadSelection,
        model_size: ModelSize,
    },
    /// POST `{url, model_size}` to `/submit-job`.
    SubmitJobUrl { url: String, model_size: ModelSize },
    /// GET `/job-status/{job_id}` once, reporting back as `Msg::PollFinished`.
    PollStatus { job_id: JobId },
    /// Arm a cancellable timer; the shell delivers `Msg::TimerFired(timer)`
    /// after `delay` unless the subscription is stopped first.
    Schedule { timer: Timer, delay: Duration },
    /// Full page reload.
    ReloadPage,
    /// Copy `text` to the system clipboard, reporting back as
    /// `Msg::CopyCompleted`.
    CopyToClipboard { text: String },
}

/// Identity of a scheduled timer. Re-scheduling the same timer replaces the
/// outstanding subscription.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Timer {
    /// Simulated upload-progress step.
    ProgressTick,
    /// Delay before the next status poll of one card.
    PollDelay { job_id: JobId },
    /// Auto-dismissal of one alert.
    AlertDismiss { alert_id: crate::AlertId },
    /// Grace period before the post-submit reload.
    ReloadGrace,
    /// Dashboard auto-refresh.
    AutoRefresh,
}
