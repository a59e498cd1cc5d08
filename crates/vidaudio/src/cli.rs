use core::cell::Cell;

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use termcolor::{ColorChoice, StandardStream};

use crate::config::{Config, Validation};
use crate::ext::Ext;
use crate::out::{Colors, Out};

/// Extract the audio track of a video file using ffmpeg.
#[derive(Parser)]
pub struct Vidaudio {
    /// Path to the input video file. Defaults to the first video file found
    /// in the video directory.
    #[arg(short = 'i', long)]
    input: Option<PathBuf>,
    /// Audio extension to use, with or without a leading dot.
    #[arg(short = 'e', long, default_value_t)]
    ext: Ext,
    /// Directory to scan for a video file when `--input` is not specified.
    #[arg(long, default_value = "video")]
    video_dir: PathBuf,
    /// Directory to write the audio file to. Created if missing.
    #[arg(long, default_value = "audio")]
    audio_dir: PathBuf,
    /// If set, any regular file is accepted as input without probing it for a
    /// video stream. This also means ffprobe is not required.
    #[arg(long)]
    simple: bool,
    /// Path to ffmpeg binary to use when performing conversions.
    #[arg(long, default_value = "ffmpeg")]
    ffmpeg_bin: PathBuf,
    /// Path to ffprobe binary to use when probing for video streams.
    #[arg(long, default_value = "ffprobe")]
    ffprobe_bin: PathBuf,
    /// If set, shows what would be done without creating directories or
    /// running ffmpeg.
    #[arg(short = 'D', long)]
    dry_run: bool,
    /// If set, enables verbose output.
    #[arg(short = 'v', long)]
    verbose: bool,
}

/// Entry for `vidaudio`.
///
/// See [`crate`] documentation.
pub fn entry(opts: &Vidaudio) -> Result<()> {
    let config = Config {
        input: opts.input.clone(),
        ext: opts.ext.clone(),
        video_dir: opts.video_dir.clone(),
        audio_dir: opts.audio_dir.clone(),
        validation: if opts.simple {
            Validation::Simple
        } else {
            Validation::Strict
        },
        ffmpeg: opts.ffmpeg_bin.clone(),
        ffprobe: opts.ffprobe_bin.clone(),
        dry_run: opts.dry_run,
    };

    let indent = Cell::new(0);
    let cols = Colors::new();

    let choice = if io::stdout().is_terminal() {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };

    let o = StandardStream::stdout(choice);
    let mut o = o.lock();
    let mut o = Out::new(opts.verbose, &indent, &cols, &mut o);
    config.run(&mut o)?;
    Ok(())
}
