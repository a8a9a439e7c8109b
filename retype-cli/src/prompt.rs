//! Interactive yes/no and free-text prompts

use std::io::{self, BufRead, Write};

/// Question asked once the main pass is done
pub const TRANSLATE_QUESTION: &str =
    "Do you want to translate the text into another language? ([Y]/n) : ";

/// Question asking for the target language
pub const LANGUAGE_QUESTION: &str = "(!) Enter the language in its 2-letter form: \
ex. french -> fr, spanish -> es.\n\
See https://cloud.google.com/translate/docs/languages for more information.\n\
What language do you want to translate the text into? : ";

/// Line-oriented prompter over any reader/writer pair
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl Prompter<io::StdinLock<'static>, io::Stdout> {
    /// Prompter on the process's stdin/stdout
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Create a prompter
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Ask `question` and read one line. `None` means end of input.
    pub fn ask(&mut self, question: &str) -> io::Result<Option<String>> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Yes/no question; a blank answer means yes, end of input means no
    pub fn confirm(&mut self, question: &str) -> io::Result<bool> {
        let answer = match self.ask(question)? {
            Some(answer) => answer,
            None => return Ok(false),
        };

        Ok(answer
            .chars()
            .next()
            .map_or(true, |first| first.eq_ignore_ascii_case(&'y')))
    }
}
