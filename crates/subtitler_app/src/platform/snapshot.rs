use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::Deserialize;
use subtitler_core::{JobCardSeed, JobStatus, Msg, Page};
use ui_logging::ui_warn;

/// The server-rendered page state a browser bridge would read straight from
/// the DOM: which page we are on, the tab panel ids, and the job cards with
/// their `data-job-id`/`data-status` attributes.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct PageSnapshot {
    #[serde(default)]
    pub page: String,
    #[serde(default)]
    pub panels: Vec<String>,
    #[serde(default)]
    pub jobs: Vec<SnapshotCard>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SnapshotCard {
    pub job_id: String,
    pub status: String,
    #[serde(default)]
    pub progress: String,
    #[serde(default)]
    pub video_title: Option<String>,
}

impl PageSnapshot {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading snapshot {}", path.display()))?;
        let snapshot = serde_json::from_str(&text)
            .with_context(|| format!("parsing snapshot {}", path.display()))?;
        Ok(snapshot)
    }

    /// Converts the snapshot into the initial message for the core. Cards
    /// with an unknown status string are dropped with a warning.
    pub fn into_page_loaded(self) -> Msg {
        let page = if self.page.eq_ignore_ascii_case("dashboard") {
            Page::Dashboard
        } else {
            Page::Home
        };
        let cards = self
            .jobs
            .into_iter()
            .filter_map(|card| match parse_status(&card.status) {
                Some(status) => Some(JobCardSeed {
                    job_id: card.job_id,
                    status,
                    progress: card.progress,
                    video_title: card.video_title,
                }),
                None => {
                    ui_warn!(
                        "Dropping card {} with unknown status {:?}",
                        card.job_id,
                        card.status
                    );
                    None
                }
            })
            .collect();
        Msg::PageLoaded {
            page,
            panels: self.panels,
            cards,
        }
    }
}

fn parse_status(raw: &str) -> Option<JobStatus> {
    match raw {
        "pending" => Some(JobStatus::Pending),
        "processing" => Some(JobStatus::Processing),
        "completed" => Some(JobStatus::Completed),
        "failed" => Some(JobStatus::Failed),
        _ => None,
    }
}
