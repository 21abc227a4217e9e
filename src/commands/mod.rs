//! CLI commands

pub mod browse;
pub mod list;
pub mod show;
pub mod tags;

use crossterm::cursor::MoveTo;
use crossterm::terminal::{Clear, ClearType};
use std::io::Write;

/// Clear the terminal and move the cursor home
fn clear_screen(out: &mut impl Write, color: bool) -> std::io::Result<()> {
    if color {
        crossterm::execute!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    }
    Ok(())
}

fn print_lines(out: &mut impl Write, lines: &[String]) -> std::io::Result<()> {
    for line in lines {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}
