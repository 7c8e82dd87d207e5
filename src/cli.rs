use std::path::PathBuf;

use clap::Parser;

/// Eros long-distance dashboard generator.
#[derive(Parser)]
#[command(
    name = "eros",
    version,
    about = "Generate a long-distance relationship dashboard page"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Output HTML path. Overwritten unconditionally if it exists.
    #[arg(short, long, default_value = "distance_doesnt_matter.html")]
    pub output: PathBuf,
}
