// Pi-hole: A black hole for Internet advertisements
// (c) 2019 Pi-hole, LLC (https://pi-hole.net)
// Network-wide ad blocking via your own hardware.
//
// Ingest
// Input Line Source
//
// This file is copyright under the latest version of the EUPL.
// Please see LICENSE file for your rights under this license.

use crate::util::{Error, ErrorKind};
use failure::Fail;
use std::io::BufRead;

/// Reads lines from an input file. Invalid UTF-8 is replaced instead of being
/// an error, so binary junk in a log can not stop a run. Trailing whitespace
/// (including `\r\n` line endings) is removed from each line.
pub struct LineSource<B> {
    reader: B,
    name: String,
    buffer: Vec<u8>
}

impl<B: BufRead> LineSource<B> {
    /// Wrap `reader`. `name` is used in read errors, usually the file path.
    pub fn new(reader: B, name: &str) -> LineSource<B> {
        LineSource {
            reader,
            name: name.to_owned(),
            buffer: Vec::new()
        }
    }
}

impl<B: BufRead> Iterator for LineSource<B> {
    type Item = Result<String, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buffer.clear();

        match self.reader.read_until(b'\n', &mut self.buffer) {
            Ok(0) => None,
            Ok(_) => Some(Ok(String::from_utf8_lossy(&self.buffer)
                .trim_end()
                .to_owned())),
            Err(e) => Some(Err(Error::from(
                e.context(ErrorKind::FileRead(self.name.clone()))
            )))
        }
    }
}

#[cfg(test)]
mod test {
    use super::LineSource;
    use std::io::Cursor;

    #[test]
    fn splits_lines() {
        let input = Cursor::new("first line\r\nsecond line  \n\nlast line without newline");
        let lines: Vec<String> = LineSource::new(input, "test")
            .collect::<Result<_, _>>()
            .unwrap();

        assert_eq!(
            lines,
            vec![
                "first line".to_owned(),
                "second line".to_owned(),
                String::new(),
                "last line without newline".to_owned()
            ]
        );
    }

    /// Invalid UTF-8 is replaced, not an error
    #[test]
    fn lossy_decoding() {
        let input = Cursor::new(vec![b'o', b'k', 0xff, b'\n', b'n', b'e', b'x', b't']);
        let lines: Vec<String> = LineSource::new(input, "test")
            .collect::<Result<_, _>>()
            .unwrap();

        assert_eq!(lines, vec!["ok\u{fffd}".to_owned(), "next".to_owned()]);
    }

    #[test]
    fn empty_input() {
        assert_eq!(LineSource::new(Cursor::new(""), "test").count(), 0);
    }
}
