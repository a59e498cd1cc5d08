use core::fmt;

use std::borrow::Cow;
use std::ffi::{OsStr, OsString};

/// Escape a path or argument so that it can be pasted into a shell.
pub(crate) fn escape(s: &OsStr) -> Cow<'_, str> {
    let Some(s) = s.to_str() else {
        return Cow::Borrowed("<non-utf8>");
    };

    let Some(n) = s.find(|c: char| escape_char(c).is_some()) else {
        return Cow::Borrowed(s);
    };

    let mut o = String::with_capacity(s.len() + 8);
    o.push_str(&s[..n]);

    for c in s[n..].chars() {
        match escape_char(c) {
            Some(e) => o.push_str(e),
            None => o.push(c),
        }
    }

    Cow::Owned(o)
}

fn escape_char(c: char) -> Option<&'static str> {
    match c {
        ' ' => Some("\\ "),
        '"' => Some("\\\""),
        '\'' => Some("\\'"),
        '\\' => Some("\\\\"),
        '$' => Some("\\$"),
        '`' => Some("\\`"),
        '&' => Some("\\&"),
        '|' => Some("\\|"),
        ';' => Some("\\;"),
        '<' => Some("\\<"),
        '>' => Some("\\>"),
        '!' => Some("\\!"),
        '(' => Some("\\("),
        ')' => Some("\\)"),
        '[' => Some("\\["),
        ']' => Some("\\]"),
        _ => None,
    }
}

/// Formats a program invocation, optionally replacing some arguments with
/// placeholders.
pub(crate) struct FormatCommand<'a> {
    program: &'a OsStr,
    args: &'a [OsString],
    replacements: Vec<(&'a OsStr, &'static str)>,
}

impl<'a> FormatCommand<'a> {
    pub(crate) fn new(program: &'a OsStr, args: &'a [OsString]) -> Self {
        Self {
            program,
            args,
            replacements: Vec::new(),
        }
    }

    /// Replace every occurrence of `key` with `value`.
    pub(crate) fn replace(&mut self, key: &'a OsStr, value: &'static str) {
        self.replacements.push((key, value));
    }

    fn write_one(&self, f: &mut fmt::Formatter<'_>, arg: &OsStr) -> fmt::Result {
        match self.replacements.iter().find(|(k, _)| *k == arg) {
            Some((_, value)) => write!(f, "{value}"),
            None => write!(f, "{}", escape(arg)),
        }
    }
}

impl fmt::Display for FormatCommand<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_one(f, self.program)?;

        for arg in self.args {
            write!(f, " ")?;
            self.write_one(f, arg)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::ffi::{OsStr, OsString};

    use super::{FormatCommand, escape};

    #[test]
    fn escapes_shell_characters() {
        assert_eq!(escape(OsStr::new("clip.mov")), "clip.mov");
        assert_eq!(escape(OsStr::new("my clip.mov")), "my\\ clip.mov");
        assert_eq!(escape(OsStr::new("a'b$(c)")), "a\\'b\\$\\(c\\)");
    }

    #[test]
    fn replaces_placeholders() {
        let args = [
            OsString::from("-y"),
            OsString::from("-i"),
            OsString::from("video/my clip.mov"),
            OsString::from("audio/my clip.mp3"),
        ];

        let mut f = FormatCommand::new(OsStr::new("ffmpeg"), &args);
        assert_eq!(
            f.to_string(),
            "ffmpeg -y -i video/my\\ clip.mov audio/my\\ clip.mp3"
        );

        f.replace(OsStr::new("ffmpeg"), "<ffmpeg>");
        f.replace(&args[2], "<from>");
        f.replace(&args[3], "<to>");
        assert_eq!(f.to_string(), "<ffmpeg> -y -i <from> <to>");
    }
}
