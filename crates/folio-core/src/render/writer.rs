//! Minimal streaming HTML writer with escaping.

use std::io::{self, Write};

/// Writes HTML tags and escaped text straight to the underlying sink.
/// Nothing is buffered beyond what `W` itself buffers.
pub struct HtmlWriter<W: Write> {
    out: W,
}

impl<W: Write> HtmlWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn doctype(&mut self) -> io::Result<()> {
        self.out.write_all(b"<!doctype html>\n")
    }

    /// `<tag a="v" ...>`. Attribute values are escaped; names are trusted.
    pub fn open(&mut self, tag: &str, attrs: &[(&str, &str)]) -> io::Result<()> {
        write!(self.out, "<{tag}")?;
        for (name, value) in attrs {
            write!(self.out, " {name}=\"")?;
            write_escaped(&mut self.out, value)?;
            self.out.write_all(b"\"")?;
        }
        self.out.write_all(b">")
    }

    /// Element without a closing tag (`meta`, `link`, `img`).
    pub fn void(&mut self, tag: &str, attrs: &[(&str, &str)]) -> io::Result<()> {
        self.open(tag, attrs)?;
        self.newline()
    }

    pub fn close(&mut self, tag: &str) -> io::Result<()> {
        write!(self.out, "</{tag}>")?;
        self.newline()
    }

    pub fn text(&mut self, s: &str) -> io::Result<()> {
        write_escaped(&mut self.out, s)
    }

    /// `<tag attrs>text</tag>` on one line.
    pub fn element(&mut self, tag: &str, attrs: &[(&str, &str)], text: &str) -> io::Result<()> {
        self.open(tag, attrs)?;
        self.text(text)?;
        self.close(tag)
    }

    pub fn newline(&mut self) -> io::Result<()> {
        self.out.write_all(b"\n")
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

fn write_escaped<W: Write>(out: &mut W, s: &str) -> io::Result<()> {
    let mut last = 0;
    for (i, c) in s.char_indices() {
        let entity = match c {
            '&' => "&amp;",
            '<' => "&lt;",
            '>' => "&gt;",
            '"' => "&quot;",
            '\'' => "&#39;",
            _ => continue,
        };
        out.write_all(s[last..i].as_bytes())?;
        out.write_all(entity.as_bytes())?;
        last = i + c.len_utf8();
    }
    out.write_all(s[last..].as_bytes())
}
