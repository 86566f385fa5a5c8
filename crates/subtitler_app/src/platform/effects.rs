use std::sync::mpsc;
use std::thread;

use bytes::Bytes;
use subtitler_client::{
    ClientCommands, ClientEvent, ClientHandle, ClientSettings, SubmitRequest, UploadRequest,
};
use subtitler_core::{Effect, Msg, StatusReply, SubmitReply, UploadReply};
use ui_logging::{ui_info, ui_warn};

use super::dom::DomSurface;
use super::timers::TimerBank;

/// Executes core effects: network commands go to the background client,
/// timers to the [`TimerBank`], page-level actions to the [`DomSurface`].
pub struct EffectRunner {
    client: ClientCommands,
    timers: TimerBank,
    msg_tx: mpsc::Sender<Msg>,
}

impl EffectRunner {
    pub fn new(settings: ClientSettings, msg_tx: mpsc::Sender<Msg>) -> anyhow::Result<Self> {
        let handle = ClientHandle::new(settings)?;
        let client = handle.commands();
        let timers = TimerBank::new(msg_tx.clone());
        spawn_event_pump(handle, msg_tx.clone());
        Ok(Self {
            client,
            timers,
            msg_tx,
        })
    }

    pub fn run(&mut self, effects: Vec<Effect>, surface: &mut dyn DomSurface) {
        for effect in effects {
            match effect {
                Effect::SubmitUpload {
                    selection,
                    model_size,
                } => {
                    ui_info!(
                        "SubmitUpload file={} bytes={}",
                        selection.file_name,
                        selection.size_bytes
                    );
                    self.client.submit_upload(UploadRequest {
                        file_name: selection.file_name,
                        content_type: selection.declared_type,
                        bytes: Bytes::from(selection.payload),
                        model_size: model_size.as_str().to_string(),
                    });
                }
                Effect::SubmitJobUrl { url, model_size } => {
                    ui_info!("SubmitJobUrl url={}", url);
                    self.client.submit_job(SubmitRequest {
                        url,
                        model_size: model_size.as_str().to_string(),
                    });
                }
                Effect::PollStatus { job_id } => {
                    self.client.fetch_status(job_id);
                }
                Effect::Schedule { timer, delay } => {
                    self.timers.schedule(timer, delay);
                }
                Effect::ReloadPage => {
                    surface.reload();
                }
                Effect::CopyToClipboard { text } => {
                    surface.copy_to_clipboard(&text);
                    let _ = self.msg_tx.send(Msg::CopyCompleted);
                }
            }
        }
    }

    /// Stops every outstanding timer. Call on teardown.
    pub fn shutdown(&mut self) {
        self.timers.stop_all();
    }
}

fn spawn_event_pump(handle: ClientHandle, msg_tx: mpsc::Sender<Msg>) {
    let event_rx = handle.into_event_receiver();
    thread::spawn(move || {
        while let Ok(event) = event_rx.recv() {
            if msg_tx.send(map_event(event)).is_err() {
                return;
            }
        }
    });
}

fn map_event(event: ClientEvent) -> Msg {
    match event {
        ClientEvent::UploadFinished(result) => Msg::UploadFinished(match result {
            Ok(response) => Ok(UploadReply {
                accepted: response.success,
                filename: response.filename,
                error: response.error,
            }),
            Err(err) => {
                ui_warn!("Upload request failed: {}", err);
                Err(err.to_string())
            }
        }),
        ClientEvent::SubmitFinished(result) => Msg::JobSubmitFinished(match result {
            Ok(response) => Ok(SubmitReply {
                accepted: response.success,
                error: response.error,
            }),
            Err(err) => {
                ui_warn!("Job submit request failed: {}", err);
                Err(err.to_string())
            }
        }),
        ClientEvent::StatusFetched { job_id, result } => {
            let result = match result {
                Ok(response) => match (response.success, response.status) {
                    (true, Some(status)) => Ok(StatusReply {
                        status: map_status(status),
                        progress: response.progress,
                        video_title: response.video_title,
                    }),
                    _ => {
                        let error = response
                            .error
                            .unwrap_or_else(|| "job not found".to_string());
                        ui_warn!("Status poll for {} refused: {}", job_id, error);
                        Err(error)
                    }
                },
                Err(err) => {
                    ui_warn!("Error polling job status for {}: {}", job_id, err);
                    Err(err.to_string())
                }
            };
            Msg::PollFinished { job_id, result }
        }
    }
}

fn map_status(status: subtitler_client::JobStatus) -> subtitler_core::JobStatus {
    match status {
        subtitler_client::JobStatus::Pending => subtitler_core::JobStatus::Pending,
        subtitler_client::JobStatus::Processing => subtitler_core::JobStatus::Processing,
        subtitler_client::JobStatus::Completed => subtitler_core::JobStatus::Completed,
        subtitler_client::JobStatus::Failed => subtitler_core::JobStatus::Failed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::dom::RecordingDomSurface;
    use std::time::Duration;
    use subtitler_core::Timer;

    fn runner() -> (EffectRunner, mpsc::Receiver<Msg>) {
        let (msg_tx, msg_rx) = mpsc::channel();
        let runner = EffectRunner::new(ClientSettings::default(), msg_tx).expect("runner");
        (runner, msg_rx)
    }

    #[test]
    fn page_level_effects_go_to_the_surface() {
        let (mut runner, msg_rx) = runner();
        let mut surface = RecordingDomSurface::default();

        runner.run(
            vec![
                Effect::ReloadPage,
                Effect::CopyToClipboard {
                    text: "abc".to_string(),
                },
            ],
            &mut surface,
        );

        assert_eq!(surface.reloads, 1);
        assert_eq!(surface.clipboard, vec!["abc".to_string()]);
        // Clipboard completion is reported back as a message.
        let msg = msg_rx.recv_timeout(Duration::from_secs(1)).expect("msg");
        assert_eq!(msg, Msg::CopyCompleted);
    }

    #[test]
    fn scheduled_timers_come_back_as_timer_fired() {
        let (mut runner, msg_rx) = runner();
        let mut surface = RecordingDomSurface::default();

        runner.run(
            vec![Effect::Schedule {
                timer: Timer::ReloadGrace,
                delay: Duration::from_millis(10),
            }],
            &mut surface,
        );

        let msg = msg_rx.recv_timeout(Duration::from_secs(1)).expect("msg");
        assert_eq!(msg, Msg::TimerFired(Timer::ReloadGrace));
        runner.shutdown();
    }
}
