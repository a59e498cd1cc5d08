use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::convert::Conversion;
use crate::ext::Ext;
use crate::out::Out;
use crate::resolve::Resolver;
use crate::tools::{self, Converter, Ffmpeg, Ffprobe, Probe};

/// How thoroughly input files are validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Validation {
    /// Inputs must be probed to contain a video stream.
    Strict,
    /// Any regular, non-hidden file is accepted.
    Simple,
}

/// Configuration for a single extraction.
pub(crate) struct Config {
    pub(crate) input: Option<PathBuf>,
    pub(crate) ext: Ext,
    pub(crate) video_dir: PathBuf,
    pub(crate) audio_dir: PathBuf,
    pub(crate) validation: Validation,
    pub(crate) ffmpeg: PathBuf,
    pub(crate) ffprobe: PathBuf,
    pub(crate) dry_run: bool,
}

impl Config {
    /// Tools which must be present for this configuration.
    pub(crate) fn required_tools(&self) -> Vec<&Path> {
        let mut tools = vec![self.ffmpeg.as_path()];

        if self.validation == Validation::Strict {
            tools.push(self.ffprobe.as_path());
        }

        tools
    }

    /// Check for tools, then resolve the input and convert it.
    pub(crate) fn run(&self, o: &mut Out<'_>) -> Result<PathBuf> {
        tools::ensure(self.required_tools())?;

        let probe = Ffprobe::new(&self.ffprobe);
        let converter = Ffmpeg::new(&self.ffmpeg);
        self.run_with(o, &probe, &converter)
    }

    pub(crate) fn run_with(
        &self,
        o: &mut Out<'_>,
        probe: &dyn Probe,
        converter: &dyn Converter,
    ) -> Result<PathBuf> {
        let resolver = Resolver {
            dir: &self.video_dir,
            validation: self.validation,
            probe,
        };

        let input = resolver.resolve(o, self.input.as_deref())?;
        let conversion = Conversion::new(&input, &self.audio_dir, &self.ext)?;
        conversion.run(o, converter, self.dry_run)?;
        Ok(conversion.to_path)
    }
}

#[cfg(test)]
mod tests {
    use core::cell::Cell;

    use std::ffi::{OsStr, OsString};
    use std::fs;
    use std::path::{Path, PathBuf};

    use anyhow::Result;
    use termcolor::NoColor;

    use crate::ext::Ext;
    use crate::out::{Colors, Out};
    use crate::tools::{Converter, Probe};

    use super::{Config, Validation};

    struct EveryFileIsVideo;

    impl Probe for EveryFileIsVideo {
        fn has_video_stream(&self, _: &Path) -> Result<bool> {
            Ok(true)
        }
    }

    struct WriteOutput;

    impl Converter for WriteOutput {
        fn program(&self) -> &OsStr {
            OsStr::new("ffmpeg")
        }

        fn convert(&self, args: &[OsString]) -> Result<()> {
            if let Some(to) = args.last() {
                fs::write(to, b"audio")?;
            }

            Ok(())
        }
    }

    fn config(root: &Path, ext: &str) -> Result<Config> {
        Ok(Config {
            input: None,
            ext: Ext::new(ext)?,
            video_dir: root.join("video"),
            audio_dir: root.join("audio"),
            validation: Validation::Strict,
            ffmpeg: PathBuf::from("ffmpeg"),
            ffprobe: PathBuf::from("ffprobe"),
            dry_run: false,
        })
    }

    fn run(config: &Config) -> Result<PathBuf> {
        let indent = Cell::new(0);
        let cols = Colors::new();
        let mut buf = NoColor::new(Vec::new());
        let mut o = Out::new(false, &indent, &cols, &mut buf);
        config.run_with(&mut o, &EveryFileIsVideo, &WriteOutput)
    }

    #[test]
    fn required_tools_depend_on_validation() -> Result<()> {
        let d = tempfile::tempdir()?;
        let mut c = config(d.path(), "mp3")?;

        assert_eq!(
            c.required_tools(),
            [Path::new("ffmpeg"), Path::new("ffprobe")]
        );

        c.validation = Validation::Simple;
        assert_eq!(c.required_tools(), [Path::new("ffmpeg")]);
        Ok(())
    }

    #[test]
    fn extracts_first_video() -> Result<()> {
        let d = tempfile::tempdir()?;
        fs::create_dir(d.path().join("video"))?;
        fs::write(d.path().join("video").join("clip.mov"), b"")?;

        let out = run(&config(d.path(), "mp3")?)?;
        assert_eq!(out, d.path().join("audio").join("clip.mp3"));
        assert!(out.is_file());

        let out = run(&config(d.path(), ".wav")?)?;
        assert_eq!(out, d.path().join("audio").join("clip.wav"));
        assert!(out.is_file());

        // Running again overwrites.
        run(&config(d.path(), "wav")?)?;
        assert_eq!(fs::read(&out)?, b"audio");
        Ok(())
    }

    #[test]
    fn explicit_input_outside_video_dir() -> Result<()> {
        let d = tempfile::tempdir()?;
        let input = d.path().join("talk.mp4");
        fs::write(&input, b"")?;

        let mut c = config(d.path(), "ogg")?;
        c.input = Some(input);

        let out = run(&c)?;
        assert_eq!(out, d.path().join("audio").join("talk.ogg"));
        Ok(())
    }
}
