//! Subtitler client: typed HTTP access to the subtitling server.
mod api;
mod handle;
mod types;

pub use api::{Api, ClientSettings, ReqwestApi};
pub use handle::{ClientCommands, ClientHandle};
pub use types::{
    ClientError, ClientEvent, JobStatus, StatusResponse, SubmitRequest, SubmitResponse,
    UploadRequest, UploadResponse,
};
