//! A tool to extract the audio track of a video file.
//!
//! See [`vidaudio`] documentation for more information.
//!
//! [`vidaudio`]: https://docs.rs/vidaudio

use anyhow::Result;
use clap::Parser;

/// A tool to extract the audio track of a video file.
#[derive(Parser)]
#[command(author, version, about, max_term_width = 80)]
pub struct Opts {
    #[command(flatten)]
    inner: vidaudio::cli::Vidaudio,
}

fn main() -> Result<()> {
    let opts = Opts::parse();
    vidaudio::cli::entry(&opts.inner)
}
