use core::fmt;

use std::path::PathBuf;
use std::process::ExitStatus;

use crate::shell;

/// Reasons a run can fail.
#[derive(Debug)]
pub(crate) enum Error {
    /// Required executables are not on the search path.
    MissingTool { tools: Vec<String> },
    /// The input file or the scan directory does not exist.
    NotFound { what: &'static str, path: PathBuf },
    /// The input exists but is not a usable video file.
    InvalidInput { path: PathBuf },
    /// The scan directory has no qualifying file.
    NoVideoFound { dir: PathBuf },
    /// The converter exited unsuccessfully.
    Conversion {
        status: ExitStatus,
        stderr: Option<String>,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MissingTool { tools } => {
                write!(
                    f,
                    "Missing tools: {}. Install ffmpeg and try again.",
                    tools.join(", ")
                )
            }
            Error::NotFound { what, path } => {
                write!(f, "{what} not found: {}", shell::escape(path.as_os_str()))
            }
            Error::InvalidInput { path } => {
                write!(
                    f,
                    "Input is not a video file: {}",
                    shell::escape(path.as_os_str())
                )
            }
            Error::NoVideoFound { dir } => {
                write!(
                    f,
                    "No video files found in: {}",
                    shell::escape(dir.as_os_str())
                )
            }
            Error::Conversion { status, stderr } => {
                write!(f, "ffmpeg failed ({status})")?;

                if let Some(stderr) = stderr {
                    write!(f, ": {stderr}")?;
                }

                Ok(())
            }
        }
    }
}

impl core::error::Error for Error {}
