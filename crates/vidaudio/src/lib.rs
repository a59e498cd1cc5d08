//! A tool to extract the audio track of a video file.
//!
//! The heavy lifting is done by `ffmpeg`, which needs to be installed along
//! with `ffprobe`.
//!
//! If `--input` is not specified, the `video` directory is scanned for the
//! first file, ordered by name, which `ffprobe` reports as having a video
//! stream. Hidden files and directories are skipped.
//!
//! The audio is written to the `audio` directory, named after the input with
//! the extension given by `--ext` (default `mp3`). Existing files are
//! overwritten.
//!
//! <br>
//!
//! ## Usage
//!
//! To see what would be done without running ffmpeg, use `--dry-run` or `-D`:
//!
//! ```sh
//! vidaudio --dry-run
//! ```
//!
//! Extract audio from a specific file as wav:
//!
//! ```sh
//! vidaudio --input lecture.mkv --ext wav
//! ```

mod config;
mod convert;
mod error;
mod ext;
mod out;
mod resolve;
mod shell;
mod tools;

pub mod cli;
