//! Shell-style word splitting and quoting.
//!
//! Command lines are split the way a POSIX shell splits words: runs of
//! unquoted whitespace separate words, and single or double quotes group
//! characters (including whitespace) into one word. Quotes are removed
//! from the result.
//!
//! The quoting side is the inverse: [`quote`] only adds quotes when the
//! word would otherwise not split back into itself.

use std::borrow::Cow;

use crate::{Error, Result};

/// Split `input` into words.
///
/// An empty or whitespace-only input yields no words. Unterminated
/// quotes and a trailing unescaped backslash are parse errors. A `#`
/// is an ordinary character, also at the start of a word.
pub fn split(input: &str) -> Result<Vec<String>> {
    let words = shlex::split(&escape_word_leading_hash(input))
        .ok_or_else(|| Error::parse(input, "unterminated quote or trailing backslash"))?;
    tracing::trace!("split {input:?} into {} words", words.len());
    Ok(words)
}

/// Backslash-escape every unquoted `#` which starts a word, since
/// `shlex` would otherwise drop it and the rest of the line as a comment.
fn escape_word_leading_hash(input: &str) -> Cow<'_, str> {
    if !input.contains('#') {
        return Cow::Borrowed(input);
    }
    let mut out = String::with_capacity(input.len() + 4);
    let mut quote: Option<char> = None;
    let mut escaped = false;
    let mut word_start = true;
    for c in input.chars() {
        let literal = std::mem::take(&mut escaped);
        if !literal {
            match quote {
                // No escapes within single quotes
                Some('\'') => {
                    if c == '\'' {
                        quote = None;
                    }
                }
                Some(_) => match c {
                    '\\' => escaped = true,
                    '"' => quote = None,
                    _ => {}
                },
                None => match c {
                    '\\' => escaped = true,
                    '"' | '\'' => quote = Some(c),
                    '#' if word_start => out.push('\\'),
                    _ => {}
                },
            }
        }
        // The separators shlex splits on
        word_start = !literal && quote.is_none() && matches!(c, ' ' | '\t' | '\n');
        out.push(c);
    }
    Cow::Owned(out)
}

/// Quote a standalone word so that [`split`] returns it unchanged.
pub fn quote(word: &str) -> Cow<'_, str> {
    if word.is_empty() {
        return Cow::Owned(double_quote(word));
    }
    quote_continuation(word)
}

/// Quote text which continues a word, such as the value after `key=`.
pub(crate) fn quote_continuation(text: &str) -> Cow<'_, str> {
    if text.chars().any(needs_quoting) {
        Cow::Owned(double_quote(text))
    } else {
        Cow::Borrowed(text)
    }
}

fn needs_quoting(c: char) -> bool {
    c.is_whitespace() || matches!(c, '"' | '\'' | '\\')
}

fn double_quote(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for c in text.chars() {
        // The tokenizer gives '$' and '`' no meaning, so only these
        if matches!(c, '"' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('"');
    out
}
