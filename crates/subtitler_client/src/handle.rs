use std::sync::{mpsc, Arc};
use std::thread;

use ui_logging::ui_warn;

use crate::api::{Api, ClientSettings, ReqwestApi};
use crate::{ClientError, ClientEvent, SubmitRequest, UploadRequest};

enum ClientCommand {
    SubmitUpload(UploadRequest),
    SubmitJob(SubmitRequest),
    FetchStatus { job_id: String },
}

/// Sending half of the background client; cheap to clone.
#[derive(Clone)]
pub struct ClientCommands {
    cmd_tx: mpsc::Sender<ClientCommand>,
}

impl ClientCommands {
    pub fn submit_upload(&self, request: UploadRequest) {
        let _ = self.cmd_tx.send(ClientCommand::SubmitUpload(request));
    }

    pub fn submit_job(&self, request: SubmitRequest) {
        let _ = self.cmd_tx.send(ClientCommand::SubmitJob(request));
    }

    pub fn fetch_status(&self, job_id: impl Into<String>) {
        let _ = self.cmd_tx.send(ClientCommand::FetchStatus {
            job_id: job_id.into(),
        });
    }
}

/// Handle to the background HTTP client. Commands are executed on a tokio
/// runtime owned by a dedicated thread; results come back as [`ClientEvent`]s
/// polled with [`ClientHandle::try_recv`] or drained through
/// [`ClientHandle::into_event_receiver`].
pub struct ClientHandle {
    commands: ClientCommands,
    event_rx: mpsc::Receiver<ClientEvent>,
}

impl ClientHandle {
    pub fn new(settings: ClientSettings) -> Result<Self, ClientError> {
        let api = Arc::new(ReqwestApi::new(settings)?);
        Ok(Self::with_api(api))
    }

    pub fn with_api(api: Arc<dyn Api>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel::<ClientCommand>();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = match tokio::runtime::Runtime::new() {
                Ok(runtime) => runtime,
                Err(err) => {
                    ui_warn!("Failed to start client runtime: {}", err);
                    return;
                }
            };
            while let Ok(command) = cmd_rx.recv() {
                let api = api.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    let event = handle_command(api.as_ref(), command).await;
                    let _ = event_tx.send(event);
                });
            }
        });

        Self {
            commands: ClientCommands { cmd_tx },
            event_rx,
        }
    }

    pub fn commands(&self) -> ClientCommands {
        self.commands.clone()
    }

    pub fn try_recv(&self) -> Option<ClientEvent> {
        self.event_rx.try_recv().ok()
    }

    /// Gives up the handle, keeping only the event stream. Pair with a
    /// previously cloned [`ClientCommands`].
    pub fn into_event_receiver(self) -> mpsc::Receiver<ClientEvent> {
        self.event_rx
    }
}

async fn handle_command(api: &dyn Api, command: ClientCommand) -> ClientEvent {
    match command {
        ClientCommand::SubmitUpload(request) => {
            ClientEvent::UploadFinished(api.submit_upload(request).await)
        }
        ClientCommand::SubmitJob(request) => {
            ClientEvent::SubmitFinished(api.submit_job(request).await)
        }
        ClientCommand::FetchStatus { job_id } => {
            let result = api.job_status(&job_id).await;
            ClientEvent::StatusFetched { job_id, result }
        }
    }
}
