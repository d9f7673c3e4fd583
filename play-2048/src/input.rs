//! Translates raw terminal input into player commands

use game_2048::Direction;

const ESC: char = '\u{1b}';

/// Something the player asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    Quit,
}

/// Map one token to a command. Unrecognised input yields `None` and is
/// meant to be ignored.
pub fn parse_token(token: &str) -> Option<Command> {
    // Arrow keys arrive as ESC [ A..D when the terminal is in line mode
    let token = token.trim();
    if let Some(code) = token.strip_prefix("\u{1b}[").or_else(|| token.strip_prefix("\u{1b}O")) {
        return match code {
            "A" => Some(Command::Move(Direction::Up)),
            "B" => Some(Command::Move(Direction::Down)),
            "C" => Some(Command::Move(Direction::Right)),
            "D" => Some(Command::Move(Direction::Left)),
            _ => None,
        };
    }

    let lowered = token.to_ascii_lowercase();
    match lowered.as_str() {
        "w" | "k" | "arrowup" => Some(Command::Move(Direction::Up)),
        "s" | "j" | "arrowdown" => Some(Command::Move(Direction::Down)),
        "a" | "h" | "arrowleft" => Some(Command::Move(Direction::Left)),
        "d" | "l" | "arrowright" => Some(Command::Move(Direction::Right)),
        "q" | "quit" | "exit" => Some(Command::Quit),
        other => other.parse::<Direction>().ok().map(Command::Move),
    }
}

/// Split a line of input into commands, dropping anything unrecognised.
///
/// Each escape sequence is cut out as its own token, so arrow presses
/// typed back to back or directly before a letter key all count.
pub fn parse_line(line: &str) -> Vec<Command> {
    tokens(line).into_iter().filter_map(parse_token).collect()
}

fn tokens(line: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut start = None;
    let mut chars = line.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if c == ESC || c.is_whitespace() {
            if let Some(s) = start.take() {
                tokens.push(&line[s..i]);
            }
        }
        if c == ESC {
            // ESC, the `[` or `O` introducer, then the final key byte
            let mut end = i + c.len_utf8();
            for _ in 0..2 {
                match chars.next_if(|&(_, n)| n != ESC && !n.is_whitespace()) {
                    Some((j, n)) => end = j + n.len_utf8(),
                    None => break,
                }
            }
            tokens.push(&line[i..end]);
        } else if !c.is_whitespace() && start.is_none() {
            start = Some(i);
        }
    }
    if let Some(s) = start {
        tokens.push(&line[s..]);
    }
    tokens
}
