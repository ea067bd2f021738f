mod input;

pub use input::{read_position, InvalidInputError};

use {
    derive_more::{Display, From},
    std::io::{Read, Write},
};

pub const PROMPT: &str = "Enter a number: ";

#[derive(Debug, Display, From)]
pub enum SessionError {
    #[display("invalid input")]
    Input(InvalidInputError),
    #[display("failed to write output")]
    Output(std::io::Error),
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::Input(e) => Some(e),
            SessionError::Output(e) => Some(e),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub position: i32,
    pub value: i32,
    /// Only set by [`run_counted`].
    pub calls: Option<u64>,
}

/// Prompts for a position, reads it and writes the Fibonacci number there.
///
/// Neither the prompt nor the result line ends with a newline.
pub fn run(stdin: &mut impl Read, stdout: &mut impl Write) -> Result<Outcome, SessionError> {
    session(stdin, stdout, |position| (compute::fibonacci(position), None))
}

/// Like [`run`], but also reports how many recursive calls the computation took.
pub fn run_counted(
    stdin: &mut impl Read,
    stdout: &mut impl Write,
) -> Result<Outcome, SessionError> {
    session(stdin, stdout, |position| {
        let evaluation = compute::fibonacci_counted(position);
        (evaluation.value, Some(evaluation.calls))
    })
}

fn session(
    stdin: &mut impl Read,
    stdout: &mut impl Write,
    evaluate: impl FnOnce(i32) -> (i32, Option<u64>),
) -> Result<Outcome, SessionError> {
    stdout.write_all(PROMPT.as_bytes())?;
    stdout.flush()?;
    let position = read_position(stdin)?;
    let (value, calls) = evaluate(position);
    write!(stdout, "Fibonacci number at position {position}: {value}")?;
    stdout.flush()?;
    Ok(Outcome {
        position,
        value,
        calls,
    })
}
