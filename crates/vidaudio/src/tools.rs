use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use anyhow::{Context, Result};

use crate::error::Error;

/// Something which can tell whether a file carries a video stream.
pub(crate) trait Probe {
    fn has_video_stream(&self, path: &Path) -> Result<bool>;
}

/// Something which can run a conversion given its argument list.
pub(crate) trait Converter {
    /// The program name, used when rendering the command.
    fn program(&self) -> &OsStr;

    fn convert(&self, args: &[OsString]) -> Result<()>;
}

/// Probes files using `ffprobe`.
pub(crate) struct Ffprobe {
    bin: PathBuf,
}

impl Ffprobe {
    #[inline]
    pub(crate) fn new(bin: impl Into<PathBuf>) -> Self {
        Self { bin: bin.into() }
    }
}

impl Probe for Ffprobe {
    fn has_video_stream(&self, path: &Path) -> Result<bool> {
        let mut cmd = Command::new(&self.bin);
        cmd.args(["-v", "error"]);
        cmd.args(["-select_streams", "v:0"]);
        cmd.args(["-show_entries", "stream=codec_type"]);
        cmd.args(["-of", "csv=p=0"]);
        cmd.arg("-i").arg(path);
        cmd.stdin(Stdio::null());

        let output = cmd
            .output()
            .with_context(|| format!("Running {}", self.bin.display()))?;

        Ok(output.status.success() && String::from_utf8_lossy(&output.stdout).trim() == "video")
    }
}

/// Converts files using `ffmpeg`.
pub(crate) struct Ffmpeg {
    bin: PathBuf,
}

impl Ffmpeg {
    #[inline]
    pub(crate) fn new(bin: impl Into<PathBuf>) -> Self {
        Self { bin: bin.into() }
    }
}

impl Converter for Ffmpeg {
    #[inline]
    fn program(&self) -> &OsStr {
        self.bin.as_os_str()
    }

    fn convert(&self, args: &[OsString]) -> Result<()> {
        let mut cmd = Command::new(&self.bin);
        cmd.args(args);
        cmd.stdin(Stdio::null());
        cmd.stdout(Stdio::null());
        cmd.stderr(Stdio::piped());

        let output = cmd
            .output()
            .with_context(|| format!("Running {}", self.bin.display()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stderr = stderr.trim();

            return Err(Error::Conversion {
                status: output.status,
                stderr: (!stderr.is_empty()).then(|| stderr.to_owned()),
            }
            .into());
        }

        Ok(())
    }
}

/// Make sure all the given tools can be found, reporting every missing one.
pub(crate) fn ensure<'a>(tools: impl IntoIterator<Item = &'a Path>) -> Result<(), Error> {
    let mut missing = Vec::new();

    for tool in tools {
        if which::which(tool).is_err() {
            missing.push(tool.display().to_string());
        }
    }

    if !missing.is_empty() {
        return Err(Error::MissingTool { tools: missing });
    }

    Ok(())
}
