//! Element ids from the server-rendered templates.

pub const FILE_UPLOAD_AREA: &str = "file-upload-area";
pub const VIDEO_FILE_INPUT: &str = "video-file";
pub const FILE_INFO: &str = "file-info";
pub const FILE_NAME: &str = "file-name";
pub const UPLOAD_BTN: &str = "upload-btn";
pub const UPLOAD_PROGRESS: &str = "upload-progress";
pub const VIDEO_URL_INPUT: &str = "videoUrl";
pub const SUBMIT_BTN: &str = "submitBtn";

// Input-only elements: the event bridge reads them, the renderer never
// patches them.
#[allow(dead_code)]
pub const REMOVE_FILE: &str = "remove-file";
#[allow(dead_code)]
pub const UPLOAD_MODEL_SELECT: &str = "upload-model_size";
#[allow(dead_code)]
pub const MODEL_SELECT: &str = "modelSize";
#[allow(dead_code)]
pub const JOB_STATUS_PANEL: &str = "jobStatus";
#[allow(dead_code)]
pub const PASSWORD_INPUT: &str = "password";
