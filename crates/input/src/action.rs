use cubeview_common::Move;
use std::str::FromStr;

/// A high-level action a session can request.
///
/// The controller consumes actions, never raw input lines.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Turn one face.
    Rotate(Move),
    /// Scramble, optionally overriding the configured move count.
    Scramble(Option<u32>),
    /// Back to the solved cube (local only).
    Reset,
    /// Ask the service for a suggested move.
    Predict,
    /// Ask for a suggested move and apply it.
    Solve,
    /// Redraw the current state.
    Show,
    Help,
    Quit,
    /// Blank input.
    Noop,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseActionError {
    #[error("unknown command: {0:?} (try \"help\")")]
    Unknown(String),
    #[error("invalid scramble length: {0:?}")]
    BadCount(String),
    #[error("{0} takes no arguments")]
    UnexpectedArgs(&'static str),
}

impl Action {
    /// One-line usage summary for interactive sessions.
    pub const HELP: &'static str = "moves: U U' D D' L L' R R' F F' B B' | scramble [n] | reset | predict | solve | show | help | quit";

    pub fn parse(line: &str) -> Result<Self, ParseActionError> {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Ok(Action::Noop);
        };
        let rest: Vec<&str> = words.collect();

        if let Ok(mv) = head.parse::<Move>() {
            return no_args(&rest, "a move", Action::Rotate(mv));
        }

        match head.to_ascii_lowercase().as_str() {
            "scramble" => match rest.as_slice() {
                [] => Ok(Action::Scramble(None)),
                [n] => n
                    .parse()
                    .map(|n| Action::Scramble(Some(n)))
                    .map_err(|_| ParseActionError::BadCount(n.to_string())),
                _ => Err(ParseActionError::BadCount(rest.join(" "))),
            },
            "reset" => no_args(&rest, "reset", Action::Reset),
            "predict" => no_args(&rest, "predict", Action::Predict),
            "solve" => no_args(&rest, "solve", Action::Solve),
            "show" => no_args(&rest, "show", Action::Show),
            "help" | "?" => Ok(Action::Help),
            "quit" | "exit" => Ok(Action::Quit),
            _ => Err(ParseActionError::Unknown(head.to_string())),
        }
    }
}

fn no_args(rest: &[&str], name: &'static str, action: Action) -> Result<Action, ParseActionError> {
    if rest.is_empty() {
        Ok(action)
    } else {
        Err(ParseActionError::UnexpectedArgs(name))
    }
}

impl FromStr for Action {
    type Err = ParseActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
