use core::error::Error;
use core::fmt;
use core::str::FromStr;

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum ExtErr {
    Empty,
    Separator,
}

impl fmt::Display for ExtErr {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtErr::Empty => write!(f, "extension must not be empty"),
            ExtErr::Separator => write!(f, "extension must not contain path separators"),
        }
    }
}

impl Error for ExtErr {}

/// An output extension, stored without any leading dots.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Ext {
    ext: String,
}

impl Ext {
    pub(crate) fn new(s: &str) -> Result<Self, ExtErr> {
        let ext = s.trim_start_matches('.');

        if ext.is_empty() {
            return Err(ExtErr::Empty);
        }

        if ext.contains(['/', '\\']) {
            return Err(ExtErr::Separator);
        }

        Ok(Self {
            ext: ext.to_owned(),
        })
    }

    #[inline]
    pub(crate) fn as_str(&self) -> &str {
        &self.ext
    }

    /// The extension with exactly one leading dot.
    #[inline]
    pub(crate) fn with_dot(&self) -> String {
        format!(".{}", self.ext)
    }

    #[inline]
    pub(crate) fn is_mp3(&self) -> bool {
        self.ext.eq_ignore_ascii_case("mp3")
    }

    /// Codec arguments to pass to ffmpeg for this extension.
    ///
    /// Only mp3 gets an explicit encoder and quality, everything else is left
    /// to ffmpeg's default codec selection for the container.
    pub(crate) fn codec_args(&self) -> &'static [&'static str] {
        if self.is_mp3() {
            &["-acodec", "libmp3lame", "-q:a", "2"]
        } else {
            &[]
        }
    }
}

impl Default for Ext {
    #[inline]
    fn default() -> Self {
        Self {
            ext: String::from("mp3"),
        }
    }
}

impl fmt::Display for Ext {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_str().fmt(f)
    }
}

impl FromStr for Ext {
    type Err = ExtErr;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
