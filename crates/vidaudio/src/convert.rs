use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::error::Error;
use crate::ext::Ext;
use crate::out::{Out, blank, info, warn};
use crate::shell::{self, FormatCommand};
use crate::tools::Converter;

/// A single prepared conversion from a video to an audio file.
pub(crate) struct Conversion {
    pub(crate) from_path: PathBuf,
    pub(crate) to_path: PathBuf,
    pub(crate) ext: Ext,
}

impl Conversion {
    /// Prepare a conversion, placing the output as `<to_dir>/<stem>.<ext>`.
    pub(crate) fn new(from_path: &Path, to_dir: &Path, ext: &Ext) -> Result<Self> {
        let Some(stem) = from_path.file_stem() else {
            return Err(Error::InvalidInput {
                path: from_path.to_owned(),
            }
            .into());
        };

        let mut name = stem.to_owned();
        name.push(ext.with_dot());

        Ok(Self {
            from_path: from_path.to_owned(),
            to_path: to_dir.join(name),
            ext: ext.clone(),
        })
    }

    /// Arguments to pass to the converter.
    pub(crate) fn args(&self) -> Vec<OsString> {
        let mut args = Vec::new();
        args.push(OsString::from("-y"));
        args.push(OsString::from("-i"));
        args.push(self.from_path.clone().into_os_string());
        args.push(OsString::from("-vn"));
        args.extend(self.ext.codec_args().iter().map(OsString::from));
        args.push(self.to_path.clone().into_os_string());
        args
    }

    /// Run the conversion, creating the output directory if needed.
    ///
    /// A failed conversion leaves whatever the converter wrote in place.
    pub(crate) fn run(
        &self,
        o: &mut Out<'_>,
        converter: &dyn Converter,
        dry_run: bool,
    ) -> Result<()> {
        info!(
            o,
            "Saving audio to: {}",
            shell::escape(self.to_path.as_os_str())
        );

        {
            let mut o = o.indent(1);

            let args = self.args();
            let mut f = FormatCommand::new(converter.program(), &args);

            if !o.is_verbose() {
                f.replace(converter.program(), "<ffmpeg>");
                f.replace(self.from_path.as_os_str(), "<from>");
                f.replace(self.to_path.as_os_str(), "<to>");
            }

            if let Some(dir) = self.to_path.parent()
                && !dir.as_os_str().is_empty()
                && !dir.is_dir()
            {
                blank!(o, "mkdir -p {}", shell::escape(dir.as_os_str()));

                if !dry_run {
                    fs::create_dir_all(dir)
                        .with_context(|| format!("Creating directory {}", dir.display()))?;
                }
            }

            blank!(o, "{f}");

            if dry_run {
                warn!(o, "Dry run, not running ffmpeg");
                return Ok(());
            }

            converter.convert(&args)?;
        }

        info!(
            o,
            "Saved audio to: {}",
            shell::escape(self.to_path.as_os_str())
        );
        Ok(())
    }
}
