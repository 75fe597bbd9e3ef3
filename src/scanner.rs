// SPDX-License-Identifier: AGPL-3.0-only

//! Assembling records from tokens.
//!
//! ```text
//! <domain-name> [<TTL>] [<class>] <type> <RDATA> [<comment>]
//! <domain-name> [<class>] [<TTL>] <type> <RDATA> [<comment>]
//! $ORIGIN <domain-name> [<comment>]
//! $TTL <TTL> [<comment>]
//! ```
//!
//! The TTL and class are both optional and may come in either order, so each positional token is
//! tried as a TTL, then as a class, then as a type, skipping any field already seen.

use cast;
use std::io::Read;

use error::ScanError;
use record::Record;
use rr::{RecordClass, RecordType};
use token::{Token, Tokenizer};

/// Which positional fields may still appear before the record type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Fields {
    AwaitingTtlClassOrType,
    AwaitingClassOrType,
    AwaitingTtlOrType,
    AwaitingType,
}

impl Fields {
    fn accepts_ttl(self) -> bool {
        self == Fields::AwaitingTtlClassOrType || self == Fields::AwaitingTtlOrType
    }

    fn accepts_class(self) -> bool {
        self == Fields::AwaitingTtlClassOrType || self == Fields::AwaitingClassOrType
    }

    fn after_ttl(self) -> Fields {
        match self {
            Fields::AwaitingTtlClassOrType => Fields::AwaitingClassOrType,
            _ => Fields::AwaitingType,
        }
    }

    fn after_class(self) -> Fields {
        match self {
            Fields::AwaitingTtlClassOrType => Fields::AwaitingTtlOrType,
            _ => Fields::AwaitingType,
        }
    }
}

/// Parses a TTL: a plain decimal number within the 32-bit unsigned range.
fn parse_ttl(s: &str) -> Option<u32> {
    if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) {
        s.parse().ok()
    } else {
        None
    }
}

/// Reads records from a master file.
///
/// A scanner starts out with no origin and no default TTL. Both can be set up front with
/// [`set_origin`](#method.set_origin) and [`set_default_ttl`](#method.set_default_ttl), and
/// `$ORIGIN` / `$TTL` entries in the file replace them for every record that follows.
pub struct Scanner<R> {
    tokens: Tokenizer<R>,
    origin: Option<String>,
    default_ttl: Option<u32>,
    failed: bool,
}

impl<R: Read> Scanner<R> {
    pub fn new(src: R) -> Scanner<R> {
        Scanner {
            tokens: Tokenizer::new(src),
            origin: None,
            default_ttl: None,
            failed: false,
        }
    }

    pub fn origin(&self) -> Option<&str> {
        self.origin.as_ref().map(|s| s.as_str())
    }

    pub fn default_ttl(&self) -> Option<u32> {
        self.default_ttl
    }

    /// The 1-based line the scanner has read up to.
    pub fn line(&self) -> usize {
        self.tokens.line()
    }

    /// Sets the origin that `@` and relative names resolve against. The origin must be fully
    /// qualified.
    pub fn set_origin(&mut self, domain: &str) -> Result<(), ScanError> {
        if !domain.ends_with('.') {
            return Err(ScanError::RelativeOrigin(domain.to_owned()));
        }
        debug!("origin set to {}", domain);
        self.origin = Some(domain.to_owned());
        Ok(())
    }

    /// Sets the TTL used for records that do not give one. Negative values unset it.
    pub fn set_default_ttl(&mut self, ttl: i64) -> Result<(), ScanError> {
        self.default_ttl = if ttl < 0 {
            None
        } else {
            Some(cast::u32(ttl).map_err(|_| ScanError::TimeToLiveOutOfRange(ttl))?)
        };
        debug!("default TTL set to {:?}", self.default_ttl);
        Ok(())
    }

    /// Returns the next record, or `None` once the input is cleanly exhausted.
    pub fn next_record(&mut self) -> Result<Option<Record>, ScanError> {
        let owner = loop {
            match self.tokens.next_token()? {
                None => return Ok(None),
                Some(Token::LineBreak) | Some(Token::Comment(_)) => continue,
                Some(Token::Word(ref word)) if word.starts_with('$') => {
                    self.scan_control_entry(word)?
                }
                Some(token) => break token.into_text(),
            }
        };
        let name = self.resolve(owner)?;

        let mut ttl = None;
        let mut class = None;
        let mut fields = Fields::AwaitingTtlClassOrType;
        let record_type = loop {
            let token = match self.tokens.next_token()? {
                Some(token) => token,
                None if fields == Fields::AwaitingTtlClassOrType => {
                    warn!("discarding owner name {} at end of input", name);
                    return Ok(None);
                }
                None => return Err(ScanError::IncompleteRecord(name)),
            };
            let text = token.as_str();

            if fields.accepts_ttl() {
                if let Some(value) = parse_ttl(text) {
                    ttl = Some(value);
                    fields = fields.after_ttl();
                    continue;
                }
            }
            if fields.accepts_class() {
                if let Some(value) = RecordClass::from_mnemonic(text) {
                    class = Some(value);
                    fields = fields.after_class();
                    continue;
                }
            }
            match RecordType::from_mnemonic(text) {
                Some(value) => break value,
                None => return Err(ScanError::UnknownType(text.to_owned())),
            }
        };

        let mut data = Vec::new();
        let mut comment = String::new();
        loop {
            match self.tokens.next_token()? {
                None | Some(Token::LineBreak) if !data.is_empty() => break,
                None => return Err(ScanError::IncompleteRecord(name)),
                Some(Token::LineBreak) | Some(Token::Comment(_)) if data.is_empty() => {
                    return Err(ScanError::MissingData { name, record_type })
                }
                Some(Token::Comment(text)) => comment = text,
                Some(token) => {
                    // Comments between data tokens are dropped.
                    comment.clear();
                    data.push(token.into_text());
                }
            }
        }

        let record = Record::new(
            name,
            ttl.or(self.default_ttl),
            class,
            record_type,
            data,
        ).with_comment(comment);
        trace!("line {}: record {}", self.line(), record);
        Ok(Some(record))
    }

    fn resolve(&self, name: String) -> Result<String, ScanError> {
        if name.ends_with('.') {
            return Ok(name);
        }
        match self.origin {
            Some(ref origin) if name == "@" => Ok(origin.clone()),
            Some(ref origin) if origin == "." => Ok(format!("{}.", name)),
            Some(ref origin) => Ok(format!("{}.{}", name, origin)),
            None => Err(ScanError::UnresolvedName(name)),
        }
    }

    fn scan_control_entry(&mut self, keyword: &str) -> Result<(), ScanError> {
        match keyword {
            "$ORIGIN" => {
                let value = self.scan_control_value("$ORIGIN")?;
                self.set_origin(&value)
            }
            "$TTL" => {
                let value = self.scan_control_value("$TTL")?;
                let ttl = parse_ttl(&value).ok_or(ScanError::InvalidTimeToLive(value))?;
                self.set_default_ttl(ttl.into())
            }
            _ => Err(ScanError::UnknownControlEntry(keyword.to_owned())),
        }
    }

    /// Reads the single value of a control entry, up to the end of its line. A comment after the
    /// value is allowed; the line break that follows it is left for the caller to skip.
    fn scan_control_value(&mut self, entry: &'static str) -> Result<String, ScanError> {
        let mut value = None;
        loop {
            match self.tokens.next_token()? {
                None | Some(Token::LineBreak) => break,
                Some(Token::Comment(_)) if value.is_some() => break,
                Some(Token::Comment(_)) => return Err(ScanError::IncompleteControlEntry(entry)),
                Some(_) if value.is_some() => return Err(ScanError::MultipleControlValues(entry)),
                Some(token) => value = Some(token.into_text()),
            }
        }
        value.ok_or(ScanError::IncompleteControlEntry(entry))
    }
}

impl<R: Read> Iterator for Scanner<R> {
    type Item = Result<Record, ScanError>;

    /// Yields records until the input ends or the first error, which is yielded once.
    fn next(&mut self) -> Option<Result<Record, ScanError>> {
        if self.failed {
            return None;
        }
        match self.next_record() {
            Ok(record) => record.map(Ok),
            Err(err) => {
                self.failed = true;
                Some(Err(err))
            }
        }
    }
}
