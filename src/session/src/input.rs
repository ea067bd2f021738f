use {
    derive_more::{Display, From},
    std::io::Read,
};

#[derive(Debug, Display, From)]
pub enum InvalidInputError {
    #[display("no number was entered")]
    Empty,
    #[display("{token:?} is not a whole number")]
    NotANumber { token: String },
    #[display("{token:?} does not fit in a 32-bit signed integer")]
    OutOfRange { token: String },
    #[display("failed to read input")]
    #[from]
    Io(std::io::Error),
}

impl std::error::Error for InvalidInputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InvalidInputError::Io(e) => Some(e),
            _ => None,
        }
    }
}

/// Reads one whitespace-delimited token and parses it as a position.
///
/// Leading whitespace is skipped and nothing past the token is consumed
/// beyond the single delimiter that ends it. The whole token must be a signed
/// decimal integer: `12abc` or `1.5` are rejected rather than read as a
/// numeric prefix.
pub fn read_position(stdin: &mut impl Read) -> Result<i32, InvalidInputError> {
    let mut token = Vec::new();
    for byte in stdin.bytes() {
        let byte = byte?;
        if byte.is_ascii_whitespace() {
            if token.is_empty() {
                continue;
            }
            break;
        }
        token.push(byte);
    }
    if token.is_empty() {
        return Err(InvalidInputError::Empty);
    }
    parse_position(&String::from_utf8_lossy(&token))
}

fn parse_position(token: &str) -> Result<i32, InvalidInputError> {
    let digits = token.strip_prefix(['+', '-']).unwrap_or(token);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InvalidInputError::NotANumber {
            token: token.to_owned(),
        });
    }
    token.parse().map_err(|_| InvalidInputError::OutOfRange {
        token: token.to_owned(),
    })
}
