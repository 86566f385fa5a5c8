use subtitler_core::{AppViewModel, JobAction, SUBMIT_LABEL};

use super::super::dom::DomPatch;
use super::constants::*;

/// Full re-render: turns the view model into an idempotent patch set. The
/// bridge applies them in order; patches for absent elements are no-ops.
pub fn render(view: &AppViewModel) -> Vec<DomPatch> {
    let mut patches = Vec::new();

    patches.push(DomPatch::SetActiveTabButton {
        tab: view.active_tab.clone(),
    });
    for panel in &view.panels {
        patches.push(DomPatch::SetPanelVisible {
            id: panel.id.clone(),
            visible: panel.visible,
        });
    }

    render_upload(view, &mut patches);

    patches.push(DomPatch::SetInputValue {
        id: VIDEO_URL_INPUT,
        value: view.url_form.input.clone(),
    });
    patches.push(DomPatch::SetEnabled {
        id: SUBMIT_BTN,
        enabled: view.url_form.submit_enabled,
    });
    patches.push(DomPatch::SetButtonLabel {
        id: SUBMIT_BTN,
        label: view.url_form.submit_label.clone(),
        spinner: !view.url_form.submit_enabled,
    });

    patches.push(DomPatch::SetAlerts(view.alerts.clone()));

    for job in &view.jobs {
        patches.push(DomPatch::SetJobStatus {
            job_id: job.job_id.clone(),
            class: job.status_class.clone(),
            label: job.status_label.clone(),
        });
        patches.push(DomPatch::SetJobProgress {
            job_id: job.job_id.clone(),
            text: job.progress.clone(),
        });
        patches.push(DomPatch::SetJobTitle {
            job_id: job.job_id.clone(),
            text: job.title.clone(),
        });
        match &job.action {
            JobAction::Download { href } => patches.push(DomPatch::SetJobActionDownload {
                job_id: job.job_id.clone(),
                href: href.clone(),
            }),
            JobAction::Failed => patches.push(DomPatch::SetJobActionFailed {
                job_id: job.job_id.clone(),
            }),
            JobAction::None => {}
        }
    }

    match &view.password_strength {
        Some(strength) => patches.push(DomPatch::SetPasswordStrength {
            text: strength.text.clone(),
            color: strength.color.to_string(),
        }),
        None => patches.push(DomPatch::SetPasswordStrength {
            text: String::new(),
            color: String::new(),
        }),
    }

    if let Some(validation) = &view.form_validation {
        patches.push(DomPatch::SetFormValidity {
            form_id: validation.form_id.clone(),
            invalid_fields: validation.invalid_fields.clone(),
        });
    }

    patches
}

fn render_upload(view: &AppViewModel, patches: &mut Vec<DomPatch>) {
    match &view.upload.file_info {
        Some(info) => {
            patches.push(DomPatch::SetText {
                id: FILE_NAME,
                text: info.clone(),
            });
            patches.push(DomPatch::SetVisible {
                id: FILE_INFO,
                visible: true,
            });
            patches.push(DomPatch::SetVisible {
                id: FILE_UPLOAD_AREA,
                visible: false,
            });
        }
        None => {
            patches.push(DomPatch::SetVisible {
                id: FILE_INFO,
                visible: false,
            });
            patches.push(DomPatch::SetVisible {
                id: FILE_UPLOAD_AREA,
                visible: true,
            });
            patches.push(DomPatch::SetInputValue {
                id: VIDEO_FILE_INPUT,
                value: String::new(),
            });
        }
    }

    patches.push(DomPatch::SetEnabled {
        id: UPLOAD_BTN,
        enabled: view.upload.submit_enabled,
    });
    patches.push(DomPatch::SetButtonLabel {
        id: UPLOAD_BTN,
        label: if view.upload.submitting {
            "Uploading...".to_string()
        } else {
            SUBMIT_LABEL.to_string()
        },
        spinner: view.upload.submitting,
    });

    match view.upload.progress_percent {
        Some(percent) => {
            patches.push(DomPatch::SetVisible {
                id: UPLOAD_PROGRESS,
                visible: true,
            });
            patches.push(DomPatch::SetUploadProgress { percent });
        }
        None => patches.push(DomPatch::SetVisible {
            id: UPLOAD_PROGRESS,
            visible: false,
        }),
    }
}
