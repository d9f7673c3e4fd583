//! Presentation of a game snapshot

use std::io::{self, Write};

use game_2048::{GameState, WIN_TILE};

/// Receives the result text once a game ends
pub trait Share {
    fn share(&mut self, text: &str) -> io::Result<()>;
}

/// Prints the shareable result to the terminal
pub struct TerminalShare<W: Write> {
    out: W,
}

impl<W: Write> TerminalShare<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> Share for TerminalShare<W> {
    fn share(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "Share: {}", text)
    }
}

/// Text offered to the share collaborator at game over.
pub fn share_text(score: u64, url: &str) -> String {
    format!("I scored {} in {}! {}", score, WIN_TILE, url)
}

/// Renders snapshots and hands the final result to a `Share`
pub struct Renderer<S: Share> {
    share: S,
    share_url: String,
}

impl<S: Share> Renderer<S> {
    pub fn new(share: S, share_url: impl Into<String>) -> Self {
        Self {
            share,
            share_url: share_url.into(),
        }
    }

    /// Draw the grid, the score and whichever banner applies.
    pub fn render<W: Write>(&mut self, state: &GameState, out: &mut W) -> io::Result<()> {
        write!(out, "{}", state.grid())?;
        writeln!(out, "Score: {}", state.score())?;

        if state.is_over() {
            writeln!(out, "Game Over")?;
            out.flush()?;
            self.share.share(&share_text(state.score(), &self.share_url))?;
        } else if state.has_won() {
            writeln!(out, "You reached {}!", WIN_TILE)?;
        }
        out.flush()
    }

    #[cfg(test)]
    pub fn share(&self) -> &S {
        &self.share
    }
}
