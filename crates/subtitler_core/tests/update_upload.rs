use std::sync::Once;

use subtitler_core::{
    update, AlertKind, AppState, Effect, ModelSize, Msg, Timer, UploadPhase, UploadReply,
    UploadSelection, ALERT_TTL, PROGRESS_TICK_INTERVAL, RELOAD_GRACE,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(ui_logging::initialize_for_tests);
}

fn mp4(name: &str, size_bytes: u64) -> UploadSelection {
    UploadSelection {
        file_name: name.to_string(),
        declared_type: "video/mp4".to_string(),
        size_bytes,
        payload: vec![0u8; 16],
    }
}

fn selected(name: &str) -> AppState {
    let (state, effects) = update(AppState::new(), Msg::FileChosen(mp4(name, 1024)));
    assert!(effects.is_empty());
    state
}

#[test]
fn valid_selection_shows_file_info() {
    init_logging();
    let mut state = selected("clip.mp4");
    let view = state.view();

    assert_eq!(view.upload.file_info.as_deref(), Some("clip.mp4 (1 KB)"));
    assert!(!view.upload.drop_zone_visible);
    assert!(view.upload.submit_enabled);
    assert!(view.alerts.is_empty());
    assert!(state.consume_dirty());
}

#[test]
fn unsupported_type_is_rejected_with_an_alert() {
    init_logging();
    let selection = UploadSelection {
        declared_type: "application/pdf".to_string(),
        ..mp4("paper.pdf", 1024)
    };
    let (state, effects) = update(AppState::new(), Msg::FileChosen(selection));
    let view = state.view();

    // No file-info view, still Empty.
    assert_eq!(view.upload.file_info, None);
    assert!(view.upload.drop_zone_visible);
    assert_eq!(view.alerts.len(), 1);
    assert_eq!(view.alerts[0].kind, AlertKind::Error);
    assert_eq!(
        view.alerts[0].message,
        "Invalid file type. Please upload a video file (MP4, AVI, MOV, MKV)"
    );
    assert_eq!(
        effects,
        vec![Effect::Schedule {
            timer: Timer::AlertDismiss {
                alert_id: view.alerts[0].id
            },
            delay: ALERT_TTL,
        }]
    );
}

#[test]
fn oversize_file_is_rejected_regardless_of_type() {
    init_logging();
    let selection = mp4("huge.mp4", 500 * 1024 * 1024 + 1);
    let (state, _effects) = update(AppState::new(), Msg::FileChosen(selection));
    let view = state.view();

    assert_eq!(view.upload.file_info, None);
    assert_eq!(view.alerts.len(), 1);
    assert_eq!(view.alerts[0].message, "File too large. Maximum size is 500MB.");
}

#[test]
fn file_at_the_size_cap_is_accepted() {
    init_logging();
    let selection = mp4("exact.mp4", 500 * 1024 * 1024);
    let (state, _effects) = update(AppState::new(), Msg::FileChosen(selection));
    assert!(state.view().upload.file_info.is_some());
}

#[test]
fn removing_the_file_returns_to_empty() {
    init_logging();
    let state = selected("clip.mp4");
    let (state, effects) = update(state, Msg::FileRemoved);

    assert!(effects.is_empty());
    let view = state.view();
    assert_eq!(view.upload.file_info, None);
    assert!(view.upload.drop_zone_visible);
    assert!(!view.upload.submit_enabled);
}

#[test]
fn submit_without_a_file_raises_an_alert() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::UploadSubmitted);
    let view = state.view();

    assert_eq!(view.alerts.len(), 1);
    assert_eq!(view.alerts[0].message, "Please select a video file");
    assert!(!effects
        .iter()
        .any(|effect| matches!(effect, Effect::SubmitUpload { .. })));
}

#[test]
fn submit_starts_the_upload_and_the_progress_ticker() {
    init_logging();
    let state = selected("clip.mp4");
    let (state, effects) = update(state, Msg::UploadSubmitted);

    assert_eq!(
        effects,
        vec![
            Effect::SubmitUpload {
                selection: mp4("clip.mp4", 1024),
                model_size: ModelSize::Base,
            },
            Effect::Schedule {
                timer: Timer::ProgressTick,
                delay: PROGRESS_TICK_INTERVAL,
            },
        ]
    );
    let view = state.view();
    assert!(view.upload.submitting);
    assert!(!view.upload.submit_enabled);
    assert_eq!(view.upload.progress_percent, Some(0));
}

#[test]
fn submit_uses_the_selected_model_size() {
    init_logging();
    let state = selected("clip.mp4");
    let (state, _) = update(state, Msg::UploadModelChanged(ModelSize::Medium));
    let (_state, effects) = update(state, Msg::UploadSubmitted);

    assert!(matches!(
        &effects[0],
        Effect::SubmitUpload {
            model_size: ModelSize::Medium,
            ..
        }
    ));
}

#[test]
fn progress_ticks_step_by_ten_and_cap_at_ninety() {
    init_logging();
    let state = selected("clip.mp4");
    let (mut state, _) = update(state, Msg::UploadSubmitted);

    for _ in 0..12 {
        let (next, effects) = update(state, Msg::TimerFired(Timer::ProgressTick));
        state = next;
        // Each tick re-arms itself while the upload is in flight.
        assert_eq!(
            effects,
            vec![Effect::Schedule {
                timer: Timer::ProgressTick,
                delay: PROGRESS_TICK_INTERVAL,
            }]
        );
    }

    assert_eq!(state.view().upload.progress_percent, Some(90));
}

#[test]
fn progress_tick_after_completion_is_ignored() {
    init_logging();
    let state = selected("clip.mp4");
    let (state, _) = update(state, Msg::UploadSubmitted);
    let (state, _) = update(
        state,
        Msg::UploadFinished(Ok(UploadReply {
            accepted: true,
            filename: Some("clip.mp4".to_string()),
            error: None,
        })),
    );

    let (state, effects) = update(state, Msg::TimerFired(Timer::ProgressTick));
    assert!(effects.is_empty());
    assert_eq!(state.view().upload.progress_percent, None);
}

#[test]
fn successful_upload_resets_the_form_and_schedules_a_reload() {
    init_logging();
    let state = selected("clip.mp4");
    let (state, _) = update(state, Msg::UploadSubmitted);
    let (state, effects) = update(
        state,
        Msg::UploadFinished(Ok(UploadReply {
            accepted: true,
            filename: Some("clip.mp4".to_string()),
            error: None,
        })),
    );

    let view = state.view();
    assert_eq!(view.upload.file_info, None);
    assert!(view.upload.drop_zone_visible);
    assert_eq!(view.alerts.len(), 1);
    assert_eq!(view.alerts[0].kind, AlertKind::Success);
    assert!(view.alerts[0].message.contains("\"clip.mp4\""));
    assert!(effects.contains(&Effect::Schedule {
        timer: Timer::ReloadGrace,
        delay: RELOAD_GRACE,
    }));

    let (_state, effects) = update(state, Msg::TimerFired(Timer::ReloadGrace));
    assert_eq!(effects, vec![Effect::ReloadPage]);
}

#[test]
fn server_rejection_restores_the_selection() {
    init_logging();
    let state = selected("clip.mp4");
    let (state, _) = update(state, Msg::UploadSubmitted);
    let (state, _effects) = update(
        state,
        Msg::UploadFinished(Ok(UploadReply {
            accepted: false,
            filename: None,
            error: Some("Invalid file type".to_string()),
        })),
    );

    let view = state.view();
    assert_eq!(view.alerts.len(), 1);
    assert_eq!(view.alerts[0].message, "Upload failed: Invalid file type");
    // Back to Selected: progress hidden, submit re-enabled.
    assert_eq!(view.upload.progress_percent, None);
    assert!(view.upload.submit_enabled);
    assert_eq!(view.upload.file_info.as_deref(), Some("clip.mp4 (1 KB)"));
    assert_eq!(
        state.upload(),
        &UploadPhase::Selected {
            selection: mp4("clip.mp4", 1024)
        }
    );
}

#[test]
fn transport_failure_restores_the_selection() {
    init_logging();
    let state = selected("clip.mp4");
    let (state, _) = update(state, Msg::UploadSubmitted);
    let (state, _effects) = update(
        state,
        Msg::UploadFinished(Err("connection refused".to_string())),
    );

    let view = state.view();
    assert_eq!(view.alerts[0].message, "Network error: connection refused");
    assert!(view.upload.submit_enabled);
    assert_eq!(view.upload.progress_percent, None);
}

#[test]
fn stale_upload_reply_is_ignored_outside_submitting() {
    init_logging();
    let state = AppState::new();
    let (mut state, effects) = update(
        state,
        Msg::UploadFinished(Ok(UploadReply {
            accepted: true,
            filename: None,
            error: None,
        })),
    );

    assert!(effects.is_empty());
    assert!(!state.consume_dirty());
}

#[test]
fn selection_while_submitting_is_ignored() {
    init_logging();
    let state = selected("clip.mp4");
    let (state, _) = update(state, Msg::UploadSubmitted);
    let (state, effects) = update(state, Msg::FileChosen(mp4("other.mp4", 2048)));

    assert!(effects.is_empty());
    assert_eq!(state.view().upload.file_info.as_deref(), Some("clip.mp4 (1 KB)"));
}
