//! Line-based terminal view.

use std::io::{BufRead, Write};

use anyhow::Result;
use noughts::{Board, EMPTY_GLYPH, Player};
use tracing::{debug, instrument};

use crate::view::GameView;

/// Reads answers line by line and writes plain text.
///
/// Generic over its streams so tests can drive it with in-memory buffers.
pub struct ConsoleView<I, O> {
    input: I,
    output: O,
}

impl<I: BufRead, O: Write> ConsoleView<I, O> {
    /// Creates a view over the given streams.
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }

    /// Consumes the view, returning the output stream.
    pub fn into_output(self) -> O {
        self.output
    }

    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            debug!("Input closed");
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

/// Parses `row col`, separated by whitespace or a comma.
pub fn parse_coordinate(text: &str) -> Option<(usize, usize)> {
    let mut parts = text
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty());
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    parts.next().is_none().then_some((row, col))
}

impl<I: BufRead, O: Write> GameView for ConsoleView<I, O> {
    fn ask_name(&mut self, label: &str, default: &str) -> Result<String> {
        let answer = self.prompt(&format!("Enter {label} name [{default}]: "))?;
        Ok(answer
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| default.to_string()))
    }

    fn render(&mut self, board: &Board) -> Result<()> {
        let header: String = (0..board.size()).map(|col| format!(" {col}")).collect();
        writeln!(self.output, "\n {header}")?;
        for (i, row) in board.rows().iter().enumerate() {
            let cells: String = row
                .iter()
                .map(|cell| format!(" {}", cell.symbol().unwrap_or(EMPTY_GLYPH)))
                .collect();
            writeln!(self.output, "{i}{cells}")?;
        }
        Ok(())
    }

    #[instrument(skip_all, fields(player = %player.name()))]
    fn read_move(&mut self, player: &Player) -> Result<Option<(usize, usize)>> {
        loop {
            let Some(answer) = self.prompt(&format!(
                "{} ({}), your move [row col, q to quit]: ",
                player.name(),
                player.symbol()
            ))?
            else {
                return Ok(None);
            };
            if answer.eq_ignore_ascii_case("q") {
                return Ok(None);
            }
            match parse_coordinate(&answer) {
                Some(coordinate) => return Ok(Some(coordinate)),
                None => writeln!(self.output, "Enter two numbers, e.g. `1 2`.")?,
            }
        }
    }

    fn notice(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "! {message}")?;
        Ok(())
    }

    fn announce(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "\n{text}")?;
        Ok(())
    }

    fn play_again(&mut self) -> Result<bool> {
        let answer = self.prompt("Play again? [y/N]: ")?;
        Ok(matches!(answer.as_deref(), Some("y" | "Y" | "yes")))
    }
}
