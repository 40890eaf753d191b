use std::io::{BufRead, Write};

use super::{ConfigDialog, DialogForm, DialogOutcome, Result};
use crate::types::Role;

/// Prompts for the role assignment on a line-oriented terminal
pub struct TerminalDialog<R, W> {
    input: R,
    output: W,
}

/// What the operator typed at a role prompt
enum Answer {
    Keep,
    Device(String),
    Cancel,
}

impl<R: BufRead, W: Write> TerminalDialog<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Gives back the underlying reader and writer
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    fn print_devices(&mut self, form: &DialogForm) -> Result {
        writeln!(self.output, "== {} ==", super::DIALOG_TITLE)?;
        for (i, device) in form.devices().iter().enumerate() {
            writeln!(self.output, "  [{}] {}", i + 1, device)?;
        }
        Ok(())
    }

    fn ask(&mut self, form: &DialogForm, role: Role) -> Result<Answer> {
        let marker = if form.is_valid(role) { "" } else { " (!)" };
        write!(
            self.output,
            "{}{} [{}]: ",
            role.title(),
            marker,
            form.selection(role)
        )?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(Answer::Cancel);
        }

        let answer = line.trim();
        if answer.is_empty() {
            return Ok(Answer::Keep);
        }
        if answer.eq_ignore_ascii_case("q") || answer.eq_ignore_ascii_case("cancel") {
            return Ok(Answer::Cancel);
        }

        // list numbers are 1-based, anything else is taken as an identifier
        let device = match answer.parse::<usize>() {
            Ok(n) if (1..=form.devices().len()).contains(&n) => form.devices()[n - 1].clone(),
            _ => answer.to_string(),
        };
        Ok(Answer::Device(device))
    }
}

impl<R: BufRead, W: Write> ConfigDialog for TerminalDialog<R, W> {
    fn show(&mut self, mut form: DialogForm) -> Result<DialogOutcome> {
        self.print_devices(&form)?;

        loop {
            for role in Role::ASSIGNABLE {
                match self.ask(&form, role)? {
                    Answer::Keep => {}
                    Answer::Device(device) => form.select(role, device),
                    Answer::Cancel => {
                        log::info!("Screen assignment cancelled");
                        return Ok(DialogOutcome::Cancelled);
                    }
                }
            }

            match form.commit() {
                Ok(mapping) => {
                    log::info!("Screen assignment accepted: {}", mapping);
                    return Ok(DialogOutcome::Accepted(mapping));
                }
                Err(err) => writeln!(self.output, "Error: {err}")?,
            }
        }
    }
}
