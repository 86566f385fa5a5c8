use crate::validate::{
    is_probable_youtube_url, missing_required_fields, password_strength, validate_upload,
};
use crate::view_model::FormValidationView;
use crate::{
    AlertKind, AppState, Effect, Msg, Page, Timer, UploadPhase, ALERT_TTL, AUTO_REFRESH_DELAY,
    POLL_INTERVAL, PROGRESS_TICK_INTERVAL, RELOAD_GRACE,
};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let mut effects = Vec::new();

    match msg {
        Msg::PageLoaded {
            page,
            panels,
            cards,
        } => {
            let active_ids: Vec<_> = cards
                .iter()
                .filter(|seed| seed.status.is_active())
                .map(|seed| seed.job_id.clone())
                .collect();
            state.load_page(page, panels, cards);
            for job_id in active_ids {
                effects.push(Effect::PollStatus { job_id });
            }
            if state.page() == Page::Dashboard && state.has_active_cards() {
                effects.push(Effect::Schedule {
                    timer: Timer::AutoRefresh,
                    delay: AUTO_REFRESH_DELAY,
                });
            }
        }
        Msg::TabSelected { tab } => {
            state.select_tab(tab);
        }
        Msg::FileChosen(selection) => {
            if matches!(state.upload(), UploadPhase::Submitting { .. }) {
                return (state, effects);
            }
            match validate_upload(&selection) {
                Ok(()) => state.set_upload(UploadPhase::Selected { selection }),
                Err(rejection) => {
                    push_alert(&mut state, &mut effects, AlertKind::Error, rejection.message());
                }
            }
        }
        Msg::FileRemoved => {
            if matches!(state.upload(), UploadPhase::Selected { .. }) {
                state.set_upload(UploadPhase::Empty);
            }
        }
        Msg::UploadModelChanged(model) => state.set_upload_model(model),
        Msg::UrlModelChanged(model) => state.set_url_model(model),
        Msg::UploadSubmitted => match state.upload().clone() {
            UploadPhase::Empty => {
                push_alert(
                    &mut state,
                    &mut effects,
                    AlertKind::Error,
                    "Please select a video file",
                );
            }
            UploadPhase::Selected { selection } => {
                effects.push(Effect::SubmitUpload {
                    selection: selection.clone(),
                    model_size: state.upload_model(),
                });
                effects.push(Effect::Schedule {
                    timer: Timer::ProgressTick,
                    delay: PROGRESS_TICK_INTERVAL,
                });
                state.set_upload(UploadPhase::Submitting {
                    selection,
                    percent: 0,
                });
            }
            UploadPhase::Submitting { .. } => {}
        },
        Msg::UploadFinished(result) => {
            let UploadPhase::Submitting { selection, .. } = state.upload().clone() else {
                return (state, effects);
            };
            match result {
                Ok(reply) if reply.accepted => {
                    let filename = reply.filename.unwrap_or_else(|| selection.file_name.clone());
                    push_alert(
                        &mut state,
                        &mut effects,
                        AlertKind::Success,
                        format!(
                            "File uploaded successfully! Processing \"{filename}\" will begin shortly."
                        ),
                    );
                    state.set_upload(UploadPhase::Empty);
                    effects.push(Effect::Schedule {
                        timer: Timer::ReloadGrace,
                        delay: RELOAD_GRACE,
                    });
                }
                Ok(reply) => {
                    let error = reply.error.unwrap_or_else(|| "unknown error".to_string());
                    push_alert(
                        &mut state,
                        &mut effects,
                        AlertKind::Error,
                        format!("Upload failed: {error}"),
                    );
                    state.set_upload(UploadPhase::Selected { selection });
                }
                Err(message) => {
                    push_alert(
                        &mut state,
                        &mut effects,
                        AlertKind::Error,
                        format!("Network error: {message}"),
                    );
                    state.set_upload(UploadPhase::Selected { selection });
                }
            }
        }
        Msg::UrlInputChanged(input) => state.set_url_input(input),
        Msg::UrlSubmitted => {
            if state.url_in_flight() {
                return (state, effects);
            }
            let url = state.url_input().trim().to_string();
            if url.is_empty() {
                push_alert(
                    &mut state,
                    &mut effects,
                    AlertKind::Error,
                    "Please enter a YouTube URL",
                );
            } else if !is_probable_youtube_url(&url) {
                push_alert(
                    &mut state,
                    &mut effects,
                    AlertKind::Error,
                    "Please enter a valid YouTube URL",
                );
            } else {
                state.set_url_in_flight(true);
                effects.push(Effect::SubmitJobUrl {
                    url,
                    model_size: state.url_model(),
                });
            }
        }
        Msg::JobSubmitFinished(result) => {
            state.set_url_in_flight(false);
            match result {
                Ok(reply) if reply.accepted => {
                    push_alert(
                        &mut state,
                        &mut effects,
                        AlertKind::Success,
                        "Job submitted successfully! Processing will begin shortly.",
                    );
                    state.set_url_input(String::new());
                    effects.push(Effect::Schedule {
                        timer: Timer::ReloadGrace,
                        delay: RELOAD_GRACE,
                    });
                }
                Ok(reply) => {
                    let error = reply.error.unwrap_or_else(|| "unknown error".to_string());
                    push_alert(
                        &mut state,
                        &mut effects,
                        AlertKind::Error,
                        format!("Error: {error}"),
                    );
                }
                Err(message) => {
                    push_alert(
                        &mut state,
                        &mut effects,
                        AlertKind::Error,
                        format!("Network error: {message}"),
                    );
                }
            }
        }
        Msg::PollFinished { job_id, result } => {
            // Errors (transport or `success:false`) halt the loop silently;
            // the shell already logged them.
            if let Ok(reply) = result {
                let still_active = reply.status.is_active();
                state.patch_card(&job_id, reply.status, reply.progress, reply.video_title);
                if still_active {
                    effects.push(Effect::Schedule {
                        timer: Timer::PollDelay { job_id },
                        delay: POLL_INTERVAL,
                    });
                }
            }
        }
        Msg::TimerFired(timer) => match timer {
            Timer::ProgressTick => {
                if let UploadPhase::Submitting { selection, percent } = state.upload().clone() {
                    state.set_upload(UploadPhase::Submitting {
                        selection,
                        percent: (percent + 10).min(90),
                    });
                    effects.push(Effect::Schedule {
                        timer: Timer::ProgressTick,
                        delay: PROGRESS_TICK_INTERVAL,
                    });
                }
            }
            Timer::PollDelay { job_id } => {
                let active = state
                    .card(&job_id)
                    .map(|card| card.status.is_active())
                    .unwrap_or(false);
                if active {
                    effects.push(Effect::PollStatus { job_id });
                }
            }
            Timer::AlertDismiss { alert_id } => state.dismiss_alert(alert_id),
            Timer::ReloadGrace | Timer::AutoRefresh => effects.push(Effect::ReloadPage),
        },
        Msg::FormSubmitted { form_id, required } => {
            let invalid_fields = missing_required_fields(&required);
            let passed = invalid_fields.is_empty();
            state.set_form_validation(FormValidationView {
                form_id,
                invalid_fields,
                passed,
            });
            if !passed {
                push_alert(
                    &mut state,
                    &mut effects,
                    AlertKind::Error,
                    "Please fill in all required fields",
                );
            }
        }
        Msg::PasswordChanged(password) => {
            let report = if password.is_empty() {
                None
            } else {
                Some(password_strength(&password))
            };
            state.set_password_strength(report);
        }
        Msg::CopyRequested { text } => {
            effects.push(Effect::CopyToClipboard { text });
        }
        Msg::CopyCompleted => {
            push_alert(
                &mut state,
                &mut effects,
                AlertKind::Success,
                "Copied to clipboard!",
            );
        }
    }

    (state, effects)
}

fn push_alert(
    state: &mut AppState,
    effects: &mut Vec<Effect>,
    kind: AlertKind,
    message: impl Into<String>,
) {
    let alert_id = state.push_alert(kind, message);
    effects.push(Effect::Schedule {
        timer: Timer::AlertDismiss { alert_id },
        delay: ALERT_TTL,
    });
}
