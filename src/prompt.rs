use std::io::{self, BufRead, StdinLock, Stdout, Write};

use colored::Colorize;

use crate::validate::is_yes_no;

/// Line-oriented terminal: prompts are written to `output`, answers read
/// from `input`. Generic so the interactive flows can be driven from memory.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Console::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn say(&mut self, message: impl std::fmt::Display) -> io::Result<()> {
        writeln!(self.output, "{message}")
    }

    pub fn error(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "{}", message.red().bold())
    }

    pub fn success(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "{}", message.green().bold())
    }

    /// Reads one trimmed line. Empty input returns `default` when there is one.
    pub fn prompt(&mut self, text: &str, default: Option<&str>) -> io::Result<String> {
        self.ask(text, default, None)
    }

    /// Like [`Console::prompt`], but re-prompts until `validator` accepts the answer.
    pub fn prompt_valid(
        &mut self,
        text: &str,
        default: Option<&str>,
        validator: impl Fn(&str) -> bool,
    ) -> io::Result<String> {
        self.ask(text, default, Some(&validator))
    }

    /// Prompt the user for a y/n answer, falling back to `default` on empty input
    pub fn confirm(&mut self, text: &str, default: bool) -> io::Result<bool> {
        let default = if default { "y" } else { "n" };
        let answer = self.prompt_valid(&format!("{text} (y/n): "), Some(default), is_yes_no)?;
        Ok(answer == "y")
    }

    fn ask(
        &mut self,
        text: &str,
        default: Option<&str>,
        validator: Option<&dyn Fn(&str) -> bool>,
    ) -> io::Result<String> {
        loop {
            let answer = self.read_line(text)?;
            if answer.is_empty() {
                if let Some(default) = default {
                    return Ok(default.to_string());
                }
            }
            match validator {
                Some(valid) if !valid(&answer) => self.error("Invalid input! Try again.")?,
                _ => return Ok(answer),
            }
        }
    }

    fn read_line(&mut self, text: &str) -> io::Result<String> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }
        Ok(line.trim().to_string())
    }
}
