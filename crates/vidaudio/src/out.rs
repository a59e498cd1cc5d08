use core::cell::Cell;
use core::fmt;

use std::io;

use termcolor::{Color, ColorSpec, WriteColor};

macro_rules! __log {
    ($log:ident, $o:ident => v, $($tt:tt)*) => {
        if $o.is_verbose() {
            $o.$log(format_args!($($tt)*))?;
        }
    };

    ($log:ident, $o:ident, $($tt:tt)*) => {
        $o.$log(format_args!($($tt)*))?;
    };
}

pub(crate) use __log;

macro_rules! __blank { ($($tt:tt)*) => { $crate::out::__log!(blank, $($tt)*) }; }
macro_rules! __info { ($($tt:tt)*) => { $crate::out::__log!(info, $($tt)*) }; }
macro_rules! __warn { ($($tt:tt)*) => { $crate::out::__log!(warn, $($tt)*) }; }

pub(crate) use __blank as blank;
pub(crate) use __info as info;
pub(crate) use __warn as warn;

pub(crate) struct Colors {
    info: ColorSpec,
    warn: ColorSpec,
}

impl Colors {
    pub(crate) fn new() -> Self {
        let mut info = ColorSpec::new();
        info.set_fg(Some(Color::Green)).set_bold(true);

        let mut warn = ColorSpec::new();
        warn.set_fg(Some(Color::Yellow)).set_bold(true);

        Colors { info, warn }
    }
}

/// Indented, colored operator output.
pub(crate) struct Out<'a> {
    verbose: bool,
    change: isize,
    indent: &'a Cell<usize>,
    c: &'a Colors,
    o: &'a mut dyn WriteColor,
}

impl Out<'_> {
    pub(crate) fn new<'a>(
        verbose: bool,
        indent: &'a Cell<usize>,
        c: &'a Colors,
        o: &'a mut dyn WriteColor,
    ) -> Out<'a> {
        Out {
            verbose,
            change: 0,
            indent,
            c,
            o,
        }
    }
}

impl<'a> Out<'a> {
    #[inline]
    pub(crate) fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Indent output until the returned value is dropped.
    pub(crate) fn indent(&mut self, change: isize) -> Out<'_> {
        let indent = self.indent.get().saturating_add_signed(change);
        self.indent.set(indent);

        Out {
            verbose: self.verbose,
            change,
            indent: self.indent,
            c: self.c,
            o: self.o,
        }
    }

    pub(crate) fn blank(&mut self, m: impl fmt::Display) -> io::Result<()> {
        self.prefix()?;
        writeln!(self.o, "{m}")?;
        self.o.flush()?;
        Ok(())
    }

    pub(crate) fn info(&mut self, m: impl fmt::Display) -> io::Result<()> {
        let c = self.c;
        self.colorize(&c.info, m)
    }

    pub(crate) fn warn(&mut self, m: impl fmt::Display) -> io::Result<()> {
        let c = self.c;
        self.colorize(&c.warn, m)
    }

    fn prefix(&mut self) -> io::Result<()> {
        for _ in 0..self.indent.get() {
            self.o.write_all(b"  ")?;
        }

        Ok(())
    }

    fn colorize(&mut self, c: &ColorSpec, m: impl fmt::Display) -> io::Result<()> {
        self.prefix()?;
        self.o.set_color(c)?;
        write!(self.o, "{m}")?;
        self.o.reset()?;
        writeln!(self.o)?;
        self.o.flush()?;
        Ok(())
    }
}

impl Drop for Out<'_> {
    #[inline]
    fn drop(&mut self) {
        let indent = self.indent.get().saturating_sub_signed(self.change);
        self.indent.set(indent);
    }
}

#[cfg(test)]
mod tests {
    use core::cell::Cell;

    use anyhow::Result;
    use termcolor::NoColor;

    use super::{Colors, Out, blank, info};

    fn emit(o: &mut Out<'_>) -> Result<()> {
        info!(o, "Saving audio to: {}", "audio/clip.mp3");

        {
            let mut o = o.indent(1);
            blank!(o, "ffmpeg");
            blank!(o => v, "verbose only");
        }

        blank!(o, "done");
        Ok(())
    }

    #[test]
    fn indents_and_resets() -> Result<()> {
        let indent = Cell::new(0);
        let cols = Colors::new();
        let mut buf = NoColor::new(Vec::new());

        {
            let mut o = Out::new(false, &indent, &cols, &mut buf);
            emit(&mut o)?;
        }

        assert_eq!(indent.get(), 0);

        let text = String::from_utf8(buf.into_inner())?;
        assert_eq!(text, "Saving audio to: audio/clip.mp3\n  ffmpeg\ndone\n");
        Ok(())
    }

    #[test]
    fn verbose_lines() -> Result<()> {
        let indent = Cell::new(0);
        let cols = Colors::new();
        let mut buf = NoColor::new(Vec::new());

        {
            let mut o = Out::new(true, &indent, &cols, &mut buf);
            emit(&mut o)?;
        }

        let text = String::from_utf8(buf.into_inner())?;
        assert!(text.contains("  verbose only\n"));
        Ok(())
    }
}
