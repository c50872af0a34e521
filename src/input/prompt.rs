//! Interactive prompting
//!
//! [`Prompter`] owns the input and output streams of a session. Its `ask_*`
//! methods block until the user enters something the matching validator
//! accepts; there is no retry limit. The only way out of a retry loop without
//! a value is end of input, reported as `PlannerError::InputClosed`.

use std::io::{BufRead, Write};

use crate::error::{PlannerError, PlannerResult};
use crate::models::{ExpenseInput, Money};

use super::validate::{parse_cost, parse_index, parse_quantity, validate_category};

/// Line-oriented prompt over any reader and writer
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Write text as-is
    pub fn say(&mut self, text: &str) -> PlannerResult<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()?;
        Ok(())
    }

    /// Write a line
    pub fn line(&mut self, text: &str) -> PlannerResult<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Print a prompt and read one line without its line ending
    pub fn read_line(&mut self, prompt: &str) -> PlannerResult<String> {
        self.say(prompt)?;

        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Err(PlannerError::InputClosed);
        }

        let trimmed_len = buf.trim_end_matches(['\n', '\r']).len();
        buf.truncate(trimmed_len);
        Ok(buf)
    }

    /// Prompt until `parse` accepts the line
    ///
    /// Validation failures are shown and the prompt repeats. Any other error
    /// is returned to the caller.
    pub fn ask_until<T, F>(&mut self, prompt: &str, mut parse: F) -> PlannerResult<T>
    where
        F: FnMut(&str) -> PlannerResult<T>,
    {
        loop {
            let line = self.read_line(prompt)?;
            match parse(&line) {
                Ok(value) => return Ok(value),
                Err(err) if err.is_validation() => {
                    self.line("")?;
                    self.line(&err.user_message())?;
                }
                Err(err) => return Err(err),
            }
        }
    }

    pub fn ask_quantity(&mut self, prompt: &str) -> PlannerResult<u32> {
        self.ask_until(prompt, parse_quantity)
    }

    pub fn ask_cost(&mut self, prompt: &str) -> PlannerResult<Money> {
        self.ask_until(prompt, parse_cost)
    }

    pub fn ask_category(&mut self, prompt: &str) -> PlannerResult<String> {
        self.ask_until(prompt, validate_category)
    }

    /// Ask for a position in a listing of `len` entries
    pub fn ask_index(&mut self, prompt: &str, len: usize) -> PlannerResult<usize> {
        self.ask_until(prompt, |line| parse_index(line, len))
    }

    /// Collect all four expense fields
    ///
    /// `label` is inserted into each prompt, e.g. "new " when editing. The
    /// item name is kept exactly as typed.
    pub fn ask_expense(&mut self, label: &str) -> PlannerResult<ExpenseInput> {
        let category = self.ask_category(&format!("Enter {}category: ", label))?;
        let item_name = self.read_line(&format!("Enter {}item name: ", label))?;
        let quantity = self.ask_quantity(&format!("Enter {}quantity: ", label))?;
        let cost_per_item = self.ask_cost(&format!("Enter {}cost per item: ", label))?;

        Ok(ExpenseInput {
            category,
            item_name,
            quantity,
            cost_per_item,
        })
    }

    /// Give back the output stream
    pub fn into_output(self) -> W {
        self.output
    }
}
