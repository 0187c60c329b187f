use std::path::PathBuf;

use clap::Parser;

/// Academic-year calendar renderer.
#[derive(Parser)]
#[command(
    name = "termcal",
    version,
    about = "Render the academic-year calendar to PNG and PDF"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Directory for the PNG and PDF outputs.
    #[arg(short, long, default_value = ".")]
    pub out_dir: PathBuf,
}
