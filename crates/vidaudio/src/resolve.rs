use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use ignore::WalkBuilder;

use crate::config::Validation;
use crate::error::Error;
use crate::out::{Out, blank, info};
use crate::shell;
use crate::tools::Probe;

/// Picks the video file to extract audio from.
pub(crate) struct Resolver<'a> {
    /// Directory to scan when no input is given.
    pub(crate) dir: &'a Path,
    pub(crate) validation: Validation,
    pub(crate) probe: &'a dyn Probe,
}

impl Resolver<'_> {
    /// Resolve either the explicitly given input, or the first qualifying
    /// file in the scan directory.
    pub(crate) fn resolve(&self, o: &mut Out<'_>, input: Option<&Path>) -> Result<PathBuf> {
        if let Some(input) = input {
            return self.explicit(o, input);
        }

        if !self.dir.exists() {
            return Err(Error::NotFound {
                what: "Scan directory",
                path: self.dir.to_owned(),
            }
            .into());
        }

        info!(
            o,
            "Scanning for video files in: {}",
            shell::escape(self.dir.as_os_str())
        );

        let walk = WalkBuilder::new(self.dir)
            .standard_filters(false)
            .max_depth(Some(1))
            .sort_by_file_name(|a: &OsStr, b: &OsStr| a.cmp(b))
            .build();

        for entry in walk {
            let entry = entry.with_context(|| format!("Scanning {}", self.dir.display()))?;

            if entry.depth() == 0 {
                continue;
            }

            let path = entry.path();

            if !self.is_candidate(path)? {
                blank!(o => v, "skipping: {}", shell::escape(path.as_os_str()));
                continue;
            }

            info!(
                o,
                "Selected input file: {}",
                shell::escape(path.as_os_str())
            );
            return Ok(path.to_owned());
        }

        Err(Error::NoVideoFound {
            dir: self.dir.to_owned(),
        }
        .into())
    }

    fn explicit(&self, o: &mut Out<'_>, input: &Path) -> Result<PathBuf> {
        if !input.exists() {
            return Err(Error::NotFound {
                what: "Input file",
                path: input.to_owned(),
            }
            .into());
        }

        if self.validation == Validation::Strict && !self.is_candidate(input)? {
            return Err(Error::InvalidInput {
                path: input.to_owned(),
            }
            .into());
        }

        info!(o, "Using input file: {}", shell::escape(input.as_os_str()));
        Ok(input.to_owned())
    }

    /// Test if the path is a regular, non-hidden file which passes the probe
    /// in strict mode.
    fn is_candidate(&self, path: &Path) -> Result<bool> {
        if !path.is_file() || is_hidden(path) {
            return Ok(false);
        }

        match self.validation {
            Validation::Strict => self.probe.has_video_stream(path),
            Validation::Simple => Ok(true),
        }
    }
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .is_some_and(|name| name.as_encoded_bytes().starts_with(b"."))
}
