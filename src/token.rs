// SPDX-License-Identifier: AGPL-3.0-only

//! The lexical layer: turning master file text into tokens.
//!
//! The [`Tokenizer`] is a finite state machine fed one character at a time. It knows nothing about
//! records or control entries; its only job is deciding where tokens begin and end, and which line
//! breaks end a record.

use std::char::REPLACEMENT_CHARACTER;
use std::fmt;
use std::io::{self, BufReader, Read};
use std::str;

use error::ScanError;

/// A lexical token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A run of characters not containing whitespace or any of `(`, `"` and `;`, nor `)` inside a
    /// group.
    Word(String),
    /// A quoted string, including the surrounding quotes. Backslash escapes are kept verbatim.
    Quoted(String),
    /// `(`
    OpenParen,
    /// `)`
    CloseParen,
    /// A comment, including the leading `;` but not the line break that ends it.
    Comment(String),
    /// A line break outside of a parenthesized group, ending the current entry.
    LineBreak,
}

impl Token {
    /// The token's text as it appeared in the input.
    pub fn as_str(&self) -> &str {
        match *self {
            Token::Word(ref s) | Token::Quoted(ref s) | Token::Comment(ref s) => s.as_str(),
            Token::OpenParen => "(",
            Token::CloseParen => ")",
            Token::LineBreak => "\n",
        }
    }

    /// Consumes the token, returning its text as it appeared in the input.
    pub fn into_text(self) -> String {
        match self {
            Token::Word(s) | Token::Quoted(s) | Token::Comment(s) => s,
            token => token.as_str().to_owned(),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tokenizer states.
///
/// Every state outside a parenthesized group has a counterpart inside one; the group variants
/// differ only in where they return to and in treating line breaks as whitespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Default,
    Quoted,
    QuotedEscape,
    Group,
    Comment,
    GroupComment,
    GroupQuoted,
    GroupQuotedEscape,
    /// Discarding whitespace after a line break has been emitted.
    BlankLines,
}

impl State {
    fn in_group(self) -> bool {
        match self {
            State::Group | State::GroupComment | State::GroupQuoted | State::GroupQuotedEscape => {
                true
            }
            _ => false,
        }
    }

    /// The state that a quoted string, escape or comment falls back to once finished.
    fn outer(self) -> State {
        if self.in_group() {
            State::Group
        } else {
            State::Default
        }
    }

    /// Which unfinished construct hitting end of input in this state would leave behind, if any.
    fn unterminated(self) -> Option<&'static str> {
        match self {
            State::Default | State::BlankLines | State::Comment => None,
            State::Quoted | State::QuotedEscape | State::GroupQuoted | State::GroupQuotedEscape => {
                Some("quoted string")
            }
            State::Group | State::GroupComment => Some("parenthesized group"),
        }
    }
}

fn utf8_width(b: u8) -> usize {
    match b {
        0x00..=0x7f => 1,
        0xc2..=0xdf => 2,
        0xe0..=0xef => 3,
        0xf0..=0xf4 => 4,
        _ => 0,
    }
}

/// Splits a character stream into [`Token`]s.
///
/// The tokenizer holds at most one character of look-ahead, which is pushed back whenever a
/// delimiter ends the token being built and has to be acted on by the next call. A byte that
/// cuts a UTF-8 sequence short is held back the same way, so it still starts the next character.
pub struct Tokenizer<R> {
    src: io::Bytes<BufReader<R>>,
    state: State,
    pending: Option<char>,
    pending_byte: Option<u8>,
    line: usize,
}

impl<R: Read> Tokenizer<R> {
    pub fn new(src: R) -> Tokenizer<R> {
        Tokenizer {
            src: BufReader::new(src).bytes(),
            state: State::Default,
            pending: None,
            pending_byte: None,
            line: 1,
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// The 1-based line number of the last character read.
    pub fn line(&self) -> usize {
        self.line
    }

    fn read_byte(&mut self) -> Result<Option<u8>, ScanError> {
        match self.pending_byte.take() {
            Some(b) => Ok(Some(b)),
            None => match self.src.next() {
                Some(b) => Ok(Some(b?)),
                None => Ok(None),
            },
        }
    }

    /// Decodes the next character from the source. Malformed UTF-8 decodes to U+FFFD, one per
    /// invalid sequence; the byte that ended it is read again as the start of the next character.
    fn read_char(&mut self) -> Result<Option<char>, ScanError> {
        let first = match self.read_byte()? {
            Some(b) => b,
            None => return Ok(None),
        };
        let width = utf8_width(first);
        let c = match width {
            0 => REPLACEMENT_CHARACTER,
            1 => first as char,
            _ => {
                let mut buf = [first, 0, 0, 0];
                for slot in buf.iter_mut().take(width).skip(1) {
                    match self.read_byte()? {
                        Some(b) if b & 0xc0 == 0x80 => *slot = b,
                        Some(b) => {
                            self.pending_byte = Some(b);
                            return Ok(Some(REPLACEMENT_CHARACTER));
                        }
                        None => return Ok(Some(REPLACEMENT_CHARACTER)),
                    }
                }
                str::from_utf8(&buf[..width])
                    .ok()
                    .and_then(|s| s.chars().next())
                    .unwrap_or(REPLACEMENT_CHARACTER)
            }
        };
        if c == '\n' {
            self.line += 1;
        }
        Ok(Some(c))
    }

    /// Handles end of input. A pending token is returned first; the next call then sees end of input
    /// again with nothing pending and returns `None`.
    fn finish(&mut self, mut token: String) -> Result<Option<Token>, ScanError> {
        if let Some(construct) = self.state.unterminated() {
            return Err(ScanError::UnterminatedConstruct(construct));
        }
        if token.is_empty() {
            return Ok(None);
        }
        Ok(Some(if self.state == State::Comment {
            self.state = State::Default;
            if token.ends_with('\r') {
                token.pop();
            }
            Token::Comment(token)
        } else {
            Token::Word(token)
        }))
    }

    /// Returns the next token, or `None` once the input is exhausted.
    pub fn next_token(&mut self) -> Result<Option<Token>, ScanError> {
        let token = self.scan()?;
        if let Some(ref token) = token {
            trace!("line {}: token {:?}", self.line, token);
        }
        Ok(token)
    }

    fn scan(&mut self) -> Result<Option<Token>, ScanError> {
        let mut token = String::new();
        loop {
            let c = match self.pending.take() {
                Some(c) => c,
                None => match self.read_char()? {
                    Some(c) => c,
                    None => return self.finish(token),
                },
            };

            match self.state {
                State::Default | State::Group => {
                    // Outside a group `)` is an ordinary character.
                    let delimiter = c.is_whitespace()
                        || c == '('
                        || (c == ')' && self.state == State::Group)
                        || c == '"'
                        || c == ';';
                    if delimiter && !token.is_empty() {
                        self.pending = Some(c);
                        return Ok(Some(Token::Word(token)));
                    }

                    if c.is_whitespace() {
                        if c == '\n' && self.state == State::Default {
                            self.state = State::BlankLines;
                            return Ok(Some(Token::LineBreak));
                        }
                        continue;
                    }

                    match c {
                        '(' if self.state == State::Default => {
                            self.state = State::Group;
                            return Ok(Some(Token::OpenParen));
                        }
                        '(' => return Err(ScanError::NestedGroup),
                        ')' if self.state == State::Group => {
                            self.state = State::Default;
                            return Ok(Some(Token::CloseParen));
                        }
                        '"' => {
                            self.state = if self.state == State::Default {
                                State::Quoted
                            } else {
                                State::GroupQuoted
                            };
                            token.push(c);
                        }
                        ';' => {
                            self.state = if self.state == State::Default {
                                State::Comment
                            } else {
                                State::GroupComment
                            };
                            token.push(c);
                        }
                        _ => token.push(c),
                    }
                }

                State::Quoted | State::GroupQuoted => {
                    token.push(c);
                    if c == '"' {
                        self.state = self.state.outer();
                        return Ok(Some(Token::Quoted(token)));
                    } else if c == '\\' {
                        self.state = if self.state == State::Quoted {
                            State::QuotedEscape
                        } else {
                            State::GroupQuotedEscape
                        };
                    }
                }

                State::QuotedEscape | State::GroupQuotedEscape => {
                    token.push(c);
                    self.state = if self.state == State::QuotedEscape {
                        State::Quoted
                    } else {
                        State::GroupQuoted
                    };
                }

                State::Comment | State::GroupComment => {
                    if c == '\n' {
                        // The line break belongs to the surrounding state: it ends the entry in
                        // Default and is plain whitespace in Group.
                        self.state = self.state.outer();
                        self.pending = Some(c);
                        if token.ends_with('\r') {
                            token.pop();
                        }
                        return Ok(Some(Token::Comment(token)));
                    }
                    token.push(c);
                }

                State::BlankLines => {
                    if !c.is_whitespace() {
                        self.state = State::Default;
                        self.pending = Some(c);
                    }
                }
            }
        }
    }
}
