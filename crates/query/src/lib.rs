//! Interactive prompts. Every function prints its prompt to stderr, reads one line from stdin and
//! asks again until the line validates. End of input is reported as an
//! [`io::ErrorKind::UnexpectedEof`] error instead of looping forever.

use std::fmt::Display;
use std::io::{self, stderr, stdin, BufRead, Write};
use std::str::FromStr;

pub fn with_default<S, T: FromStr, F>(prompt: &str, default: &str, validator: F) -> io::Result<S>
where
    F: Fn(T) -> Result<S, String>,
    <T as FromStr>::Err: Display,
{
    let prompt = format!("{prompt} (default: {default})");
    inner(&prompt, |x| {
        let x = if x.is_empty() { default } else { x };
        x.parse::<T>()
            .map_err(|err| err.to_string())
            .and_then(&validator)
    })
}

pub fn raw<S, T: FromStr, F>(prompt: &str, validator: F) -> io::Result<S>
where
    F: Fn(T) -> Result<S, String>,
    <T as FromStr>::Err: Display,
{
    inner(prompt, |x| {
        x.parse::<T>()
            .map_err(|err| err.to_string())
            .and_then(&validator)
    })
}

/// Reads exactly `len` whitespace separated values.
pub fn vector<T: FromStr>(prompt: &str, len: usize) -> io::Result<Vec<T>>
where
    <T as FromStr>::Err: Display,
{
    inner(prompt, |x| parse_vector(x, len))
}

/// Parses a whitespace separated list of exactly `len` values. This is the validator behind
/// [`vector`], exposed so that non-interactive input can be checked the same way.
pub fn parse_vector<T: FromStr>(line: &str, len: usize) -> Result<Vec<T>, String>
where
    <T as FromStr>::Err: Display,
{
    let entries = line
        .split_whitespace()
        .enumerate()
        .map(|(i, word)| {
            word.parse::<T>()
                .map_err(|err| format!("entry {} ('{}'): {}", i + 1, word, err))
        })
        .collect::<Result<Vec<T>, String>>()?;
    if entries.len() != len {
        return Err(format!("expected {} entries, got {}", len, entries.len()));
    }
    Ok(entries)
}

pub fn inner<S, F>(prompt: &str, validator: F) -> io::Result<S>
where
    F: for<'a> Fn(&'a str) -> Result<S, String>,
{
    let stdin = stdin();
    let mut lock = stdin.lock();
    loop {
        eprint!("{prompt}: ");
        stderr().flush()?;
        let mut input = String::new();
        if lock.read_line(&mut input)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("no input for prompt '{prompt}'"),
            ));
        }
        match validator(input.trim()) {
            Ok(res) => return Ok(res),
            Err(e) => eprintln!("Invalid input: {e}. Try again"),
        }
    }
}
