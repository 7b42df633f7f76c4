//! CGI response header block.

use std::io::{self, Write};

pub const CONTENT_TYPE: &str = "text/html; charset=utf-8";

/// Writes the CGI status and header lines followed by the blank separator line.
/// `max_age_secs == 0` leaves out `Cache-Control`.
pub fn write_headers<W: Write>(out: &mut W, max_age_secs: u64) -> io::Result<()> {
    write!(out, "Status: 200 OK\r\n")?;
    if max_age_secs > 0 {
        write!(out, "Cache-Control: max-age={max_age_secs}\r\n")?;
    }
    write!(out, "Content-Type: {CONTENT_TYPE}\r\n")?;
    write!(out, "\r\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headers_with_max_age() {
        let mut buf = Vec::new();
        write_headers(&mut buf, 3600).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "Status: 200 OK\r\nCache-Control: max-age=3600\r\nContent-Type: text/html; charset=utf-8\r\n\r\n"
        );
    }

    #[test]
    fn headers_without_cache_control() {
        let mut buf = Vec::new();
        write_headers(&mut buf, 0).unwrap();
        let s = String::from_utf8(buf).unwrap();
        assert!(!s.contains("Cache-Control"));
        assert!(s.starts_with("Status: 200 OK\r\n"));
        assert!(s.ends_with("\r\n\r\n"));
    }
}
