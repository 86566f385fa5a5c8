mod platform;

use std::path::PathBuf;

use clap::Parser;

/// Headless shell for the subtitler page controller. Seeds the job cards a
/// server-rendered page would contain, polls them to completion, and logs
/// the DOM patches a browser bridge would apply.
#[derive(Parser, Debug)]
#[command(author, version)]
struct Args {
    /// Base URL of the subtitling server.
    #[arg(long, default_value = "http://127.0.0.1:5000")]
    base_url: String,

    /// JSON page snapshot with the initial job cards and panels.
    #[arg(long)]
    snapshot: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    ui_logging::initialize_terminal();
    let args = Args::parse();
    platform::app::run_app(args.base_url, args.snapshot)
}
