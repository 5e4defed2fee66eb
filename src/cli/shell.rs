//! Interactive menu loop: check-in, organize a brain dump, or exit.

use anyhow::Result;
use std::io::{BufRead, Write};

use super::render::render_outcome;
use crate::companion::CompanionAgent;
use crate::journal::EntryStore;
use crate::llm::ChatModel;

const MENU: &str = "\nWhat would you like to do today?\n  [1] Emotional Check-In\n  \
                    [2] Organize My Brain Dump\n  [3] Exit\n> ";

/// A parsed menu selection. Anything unrecognised exits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    CheckIn,
    BrainDump,
    Exit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Self {
        match input.trim() {
            "1" => Self::CheckIn,
            "2" => Self::BrainDump,
            _ => Self::Exit,
        }
    }
}

/// Run the menu until the user exits or input ends.
///
/// Flow errors (model or store failures) end the loop and are returned.
pub async fn run_shell<M, S, R, W>(
    agent: &CompanionAgent<M, S>,
    input: &mut R,
    out: &mut W,
) -> Result<()>
where
    M: ChatModel,
    S: EntryStore,
    R: BufRead,
    W: Write,
{
    writeln!(out, "\nWelcome to LumaLite, your supportive AI companion.")?;

    loop {
        write!(out, "{MENU}")?;
        out.flush()?;

        let Some(selection) = read_line(input)? else {
            break;
        };

        match MenuChoice::parse(&selection) {
            MenuChoice::CheckIn => {
                write!(out, "\nHow are you feeling right now?\n> ")?;
                out.flush()?;
                let Some(text) = read_line(input)? else {
                    break;
                };

                let reply = agent.handle_check_in(&text).await?;
                writeln!(out, "\nLumaLite says:")?;
                writeln!(out, "{reply}")?;
            }
            MenuChoice::BrainDump => {
                write!(out, "\nWhat's on your mind? Just let it all out:\n> ")?;
                out.flush()?;
                let Some(text) = read_line(input)? else {
                    break;
                };

                let outcome = agent.sort_brain_dump(&text).await?;
                writeln!(out, "\nOrganized Thoughts:")?;
                write!(out, "{}", render_outcome(&outcome))?;
            }
            MenuChoice::Exit => break,
        }
    }

    writeln!(out, "\nTake care. Come back when you're ready.")?;
    out.flush()?;
    tracing::debug!("shell exited");
    Ok(())
}

/// One line without its terminator, or `None` at end of input.
///
/// Bytes that are not valid UTF-8 are replaced rather than rejected.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut buf = Vec::new();
    if input.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }
    let line = String::from_utf8_lossy(&buf);
    Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
}
