//! Tokenizing raw message text into a command.

/// No command fits in fewer characters than this, prefix included.
pub const MIN_COMMAND_LEN: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Message too short ({len} chars). No command is shorter than {} chars", MIN_COMMAND_LEN)]
    TooShort { len: usize },
}

/// Whitespace-split tokens of a message. `tokens[0]` is the command word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    tokens: Vec<String>,
}

impl ParsedCommand {
    /// The command word exactly as typed, prefix included.
    pub fn command(&self) -> &str {
        &self.tokens[0]
    }

    /// Positional arguments after the command word.
    pub fn args(&self) -> &[String] {
        &self.tokens[1..]
    }

    pub fn arg(&self, index: usize) -> Option<&str> {
        self.args().get(index).map(String::as_str)
    }
}

/// Splits `raw` on every single space.
///
/// Runs of spaces are not collapsed: `"!vote  3"` yields an empty token
/// between `"!vote"` and `"3"`.
pub fn parse(raw: &str) -> Result<ParsedCommand, ParseError> {
    let len = raw.chars().count();
    if len < MIN_COMMAND_LEN {
        return Err(ParseError::TooShort { len });
    }

    Ok(ParsedCommand {
        tokens: raw.split(' ').map(str::to_string).collect(),
    })
}
