//! Reading the target number from the console.

use crate::error::InputError;
use std::collections::VecDeque;
use std::io::{BufRead, Write};
use tracing::debug;

/// Splits console input into whitespace-separated tokens, one line at a time.
///
/// Tokens left over on a line are handed out by later calls before any new
/// line is read.
pub struct TokenReader<R> {
    input: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(input: R) -> Self {
        Self {
            input,
            pending: VecDeque::new(),
        }
    }

    /// Next token, or `None` once the input is exhausted.
    pub fn next_token(&mut self) -> std::io::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }
}

/// Parse a token as a target in `[0, max]`.
///
/// Anything other than an optional sign followed by decimal digits is
/// malformed. Well-formed values that are negative, above `max`, or too
/// large for 64 bits are out of range.
pub fn parse_target(token: &str, max: u64) -> Result<u64, InputError> {
    let (negative, digits) = match token.as_bytes().first() {
        Some(b'-') => (true, &token[1..]),
        Some(b'+') => (false, &token[1..]),
        _ => (false, token),
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InputError::Malformed(token.to_string()));
    }

    let out_of_range = || InputError::OutOfRange {
        value: token.to_string(),
        max,
    };

    // "-0" is still zero
    if negative && digits.bytes().any(|b| b != b'0') {
        return Err(out_of_range());
    }

    match digits.parse::<u64>() {
        Ok(value) if value <= max => Ok(value),
        _ => Err(out_of_range()),
    }
}

/// Prompt on `out` until a number in `[0, max]` is read.
///
/// Out-of-range values are answered with a reminder and the prompt repeats.
/// A malformed token or the end of input ends the prompt with an error.
pub fn prompt_for_target<R: BufRead, W: Write>(
    reader: &mut TokenReader<R>,
    out: &mut W,
    max: u64,
) -> Result<u64, InputError> {
    loop {
        write!(out, "Please input a number between 0 and {} :  ", max)?;
        out.flush()?;

        let token = reader.next_token()?.ok_or(InputError::Eof)?;
        match parse_target(&token, max) {
            Ok(target) => return Ok(target),
            Err(InputError::OutOfRange { value, .. }) => {
                debug!(%value, max, "input out of range, prompting again");
                write!(out, "Please input a number between 0 and {}! ", max)?;
            }
            Err(e) => return Err(e),
        }
    }
}
