use std::time::Duration;

use reqwest::multipart;

use crate::types::map_reqwest_error;
use crate::{ClientError, StatusResponse, SubmitRequest, SubmitResponse, UploadRequest, UploadResponse};

#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    /// Uploads get a longer ceiling than the JSON endpoints.
    pub upload_timeout: Duration,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            upload_timeout: Duration::from_secs(600),
        }
    }
}

/// Typed access to the subtitling server's endpoints.
///
/// The page's script decodes every JSON body without looking at the HTTP
/// status first (the server puts its error report in the body even on 4xx),
/// so these methods do the same: only transport, timeout, and decode
/// failures surface as `Err`.
#[async_trait::async_trait]
pub trait Api: Send + Sync {
    async fn submit_upload(&self, request: UploadRequest) -> Result<UploadResponse, ClientError>;
    async fn submit_job(&self, request: SubmitRequest) -> Result<SubmitResponse, ClientError>;
    async fn job_status(&self, job_id: &str) -> Result<StatusResponse, ClientError>;
    /// Href for the subtitle download link; navigation, not an API call.
    fn download_url(&self, job_id: &str) -> String;
}

#[derive(Debug, Clone)]
pub struct ReqwestApi {
    client: reqwest::Client,
    upload_client: reqwest::Client,
    base: reqwest::Url,
}

impl ReqwestApi {
    pub fn new(settings: ClientSettings) -> Result<Self, ClientError> {
        let base = reqwest::Url::parse(&settings.base_url)
            .map_err(|err| ClientError::InvalidUrl(err.to_string()))?;
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| ClientError::Network(err.to_string()))?;
        let upload_client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.upload_timeout)
            .build()
            .map_err(|err| ClientError::Network(err.to_string()))?;
        Ok(Self {
            client,
            upload_client,
            base,
        })
    }

    fn endpoint(&self, path: &str) -> Result<reqwest::Url, ClientError> {
        self.base
            .join(path)
            .map_err(|err| ClientError::InvalidUrl(err.to_string()))
    }
}

#[async_trait::async_trait]
impl Api for ReqwestApi {
    async fn submit_upload(&self, request: UploadRequest) -> Result<UploadResponse, ClientError> {
        let part = multipart::Part::stream(reqwest::Body::from(request.bytes.clone()))
            .file_name(request.file_name.clone())
            .mime_str(&request.content_type)
            .map_err(|err| ClientError::Payload(err.to_string()))?;
        let form = multipart::Form::new()
            .part("video_file", part)
            .text("model_size", request.model_size.clone());

        let response = self
            .upload_client
            .post(self.endpoint("/submit-upload")?)
            .multipart(form)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        decode_json(response).await
    }

    async fn submit_job(&self, request: SubmitRequest) -> Result<SubmitResponse, ClientError> {
        let response = self
            .client
            .post(self.endpoint("/submit-job")?)
            .json(&request)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        decode_json(response).await
    }

    async fn job_status(&self, job_id: &str) -> Result<StatusResponse, ClientError> {
        let response = self
            .client
            .get(self.endpoint(&format!("/job-status/{job_id}"))?)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        decode_json(response).await
    }

    fn download_url(&self, job_id: &str) -> String {
        self.base
            .join(&format!("/download/{job_id}"))
            .map(|url| url.to_string())
            .unwrap_or_else(|_| format!("/download/{job_id}"))
    }
}

async fn decode_json<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    let status = response.status();
    let body = response.bytes().await.map_err(map_reqwest_error)?;
    serde_json::from_slice(&body)
        .map_err(|err| ClientError::Decode(format!("{err} (http status {status})")))
}
