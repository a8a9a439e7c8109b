//! Stream driver: feeds input through the transducer and the line wrapper

use crate::config::Config;
use crate::corrections::CorrectionTable;
use crate::error::Result;
use crate::transducer::Transducer;
use crate::wrap::LineWrapper;
use std::io::{BufRead, Write};

/// Statistics for one processed stream
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ProcessingStats {
    /// Input bytes consumed
    pub bytes_read: usize,
    /// Words rewritten and emitted
    pub words: usize,
    /// Words replaced through the correction table
    pub corrections: usize,
    /// Sentence terminators emitted
    pub sentences: usize,
    /// Line breaks inserted by the wrapper
    pub line_breaks: usize,
}

/// One stream-processing session.
///
/// Owns the transducer state, the word buffer and the column counter for a
/// single run.
#[derive(Debug)]
pub struct Session<'t> {
    transducer: Transducer<'t>,
    wrapper: LineWrapper,
    bytes_read: usize,
    line_breaks: usize,
}

/// What one character released
struct Released {
    text: Option<String>,
    line_break: bool,
}

impl<'t> Session<'t> {
    /// Start a session
    pub fn new(config: &Config, table: &'t CorrectionTable) -> Self {
        let transducer = if config.corrections {
            Transducer::with_padding(table, config.sentence_padding)
        } else {
            Transducer::without_corrections(config.sentence_padding)
        };
        let width = if config.wrap {
            config.wrap_width
        } else {
            usize::MAX
        };

        Self {
            transducer,
            wrapper: LineWrapper::new(width),
            bytes_read: 0,
            line_breaks: 0,
        }
    }

    fn advance(&mut self, ch: char) -> Released {
        self.bytes_read += 1;

        let text = self.transducer.step(ch);
        if let Some(text) = &text {
            self.wrapper.record(text);
        }

        let line_break = self.wrapper.should_break(self.transducer.is_mid_word());
        if line_break {
            self.wrapper.break_line();
            self.line_breaks += 1;
        }

        Released { text, line_break }
    }

    fn release_trailing(&mut self) -> Option<String> {
        let word = self.transducer.flush()?;
        self.wrapper.record(&word);
        Some(word)
    }

    /// Feed one character, writing whatever it releases
    pub fn feed<W: Write>(&mut self, ch: char, writer: &mut W) -> Result<()> {
        let released = self.advance(ch);
        if let Some(text) = released.text {
            writer.write_all(text.as_bytes())?;
        }
        if released.line_break {
            writer.write_all(b"\n")?;
        }
        Ok(())
    }

    /// End the stream: release any trailing word and flush the writer
    pub fn finish<W: Write>(&mut self, writer: &mut W) -> Result<ProcessingStats> {
        if let Some(word) = self.release_trailing() {
            writer.write_all(word.as_bytes())?;
        }
        writer.flush()?;
        Ok(self.stats())
    }

    /// Statistics so far
    pub fn stats(&self) -> ProcessingStats {
        let counts = self.transducer.stats();
        ProcessingStats {
            bytes_read: self.bytes_read,
            words: counts.words,
            corrections: counts.corrections,
            sentences: counts.sentences,
            line_breaks: self.line_breaks,
        }
    }
}

/// Normalize everything `reader` yields into `writer`.
///
/// Input is consumed byte by byte; each byte is one character of the
/// 0-255 alphabet, so multibyte UTF-8 sequences fall outside the printable
/// ranges and are dropped.
pub fn process<R, W>(
    mut reader: R,
    mut writer: W,
    config: &Config,
    table: &CorrectionTable,
) -> Result<ProcessingStats>
where
    R: BufRead,
    W: Write,
{
    let mut session = Session::new(config, table);

    loop {
        let chunk = reader.fill_buf()?;
        if chunk.is_empty() {
            break;
        }
        for &byte in chunk {
            session.feed(char::from(byte), &mut writer)?;
        }
        let consumed = chunk.len();
        reader.consume(consumed);
    }

    session.finish(&mut writer)
}

/// Normalize an in-memory string
pub fn normalize(text: &str, config: &Config, table: &CorrectionTable) -> String {
    let mut out = String::with_capacity(text.len());
    let mut session = Session::new(config, table);
    for ch in text.chars() {
        let released = session.advance(ch);
        if let Some(text) = released.text {
            out.push_str(&text);
        }
        if released.line_break {
            out.push('\n');
        }
    }
    out.extend(session.release_trailing());
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Cursor};

    fn run(input: &str) -> String {
        normalize(input, &Config::default(), &CorrectionTable::default())
    }

    #[test]
    fn test_end_of_stream_flush() {
        assert_eq!(run("hello"), "Hello");
    }

    #[test]
    fn test_end_of_stream_flush_is_rewritten() {
        assert_eq!(run("so recieve"), "So receive");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(run(""), "");
    }

    #[test]
    fn test_only_whitespace_and_terminators() {
        assert_eq!(run("   \n\n  "), "");
        assert_eq!(run("  . ! "), "");
    }

    #[test]
    fn test_terminator_from_deadspace_after_word() {
        assert_eq!(run("yes . no"), "Yes .  No");
    }

    #[test]
    fn test_wraps_at_word_boundary() {
        let config = Config::builder().wrap_width(10).build().unwrap();
        let table = CorrectionTable::default();
        let out = normalize("aaaa bbbb cccc dddd eeee", &config, &table);

        assert_eq!(out, "Aaaa bbbb cccc \ndddd eeee");
    }

    #[test]
    fn test_process_reader_writer() {
        let input = Cursor::new("the goverment said it's fine.\n");
        let mut output = Vec::new();

        let stats = process(
            input,
            &mut output,
            &Config::default(),
            &CorrectionTable::default(),
        )
        .unwrap();

        assert_eq!(
            String::from_utf8(output).unwrap(),
            "The government said it is fine.  "
        );
        assert_eq!(stats.bytes_read, 30);
        assert_eq!(stats.words, 5);
        assert_eq!(stats.corrections, 2);
        assert_eq!(stats.sentences, 1);
        assert_eq!(stats.line_breaks, 0);
    }

    #[test]
    fn test_process_drops_multibyte_sequences() {
        let input = Cursor::new("caf\u{e9} ok".as_bytes().to_vec());
        let mut output = Vec::new();
        process(
            input,
            &mut output,
            &Config::default(),
            &CorrectionTable::default(),
        )
        .unwrap();

        assert_eq!(String::from_utf8(output).unwrap(), "Caf ok");
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "disk full"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_failure_surfaces() {
        let result = process(
            Cursor::new("a b"),
            FailingWriter,
            &Config::default(),
            &CorrectionTable::default(),
        );
        assert!(matches!(result, Err(crate::Error::Io(_))));
    }

    #[test]
    fn test_oversized_padding_never_reaches_transducer() {
        let config = Config::builder().sentence_padding(usize::MAX).build();
        assert!(matches!(config, Err(crate::Error::Configuration(_))));
    }

    #[test]
    fn test_large_padding_normalizes() {
        let config = Config::builder()
            .sentence_padding(crate::config::defaults::MAX_SENTENCE_PADDING)
            .build()
            .unwrap();
        let out = normalize("a . b", &config, &CorrectionTable::default());
        assert_eq!(out, format!("A .{}B", " ".repeat(32)));
    }

    #[test]
    fn test_plain_config_skips_corrections_and_wrapping() {
        let config = Config::builder().wrap_width(10).build().unwrap().plain();
        let out = normalize(
            "i cant beleive the goverment.  im happy and so are you",
            &config,
            &CorrectionTable::default(),
        );

        assert_eq!(out, "I cant beleive the goverment.  Im happy and so are you");
    }

    #[test]
    fn test_normalize_matches_process() {
        let text = "the goverment said it's fine. wait... really?  ok";
        let config = Config::builder().wrap_width(12).build().unwrap();
        let table = CorrectionTable::default();

        let mut written = Vec::new();
        process(Cursor::new(text), &mut written, &config, &table).unwrap();

        assert_eq!(normalize(text, &config, &table), String::from_utf8(written).unwrap());
    }
}
