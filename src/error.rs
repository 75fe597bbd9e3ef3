// SPDX-License-Identifier: AGPL-3.0-only

use std::io;

use rr::RecordType;

/// Errors that can occur while scanning a zone file.
///
/// Every error ends the current `Scanner::next_record` call.
/// The scanner does not resynchronize afterwards, so hosts should stop reading once one is
/// returned. Running out of input cleanly is not an error; it is reported as `Ok(None)`.
#[derive(Debug, Fail)]
pub enum ScanError {
    /// An [`io::Error`] occurred while reading the source.
    #[fail(display = "IO error: {}", _0)]
    Io(io::Error),
    /// The input ended inside a quoted string or a parenthesized group.
    #[fail(display = "unexpected end of input inside {}", _0)]
    UnterminatedConstruct(&'static str),
    /// `(` was found inside a parenthesized group. Groups do not nest.
    #[fail(display = "nested parenthesized group")]
    NestedGroup,
    /// A `$`-prefixed control entry other than `$ORIGIN` or `$TTL`.
    #[fail(display = "unknown control entry '{}'", _0)]
    UnknownControlEntry(String),
    /// The control entry ended before its value.
    #[fail(display = "missing value in {} control entry", _0)]
    IncompleteControlEntry(&'static str),
    /// The control entry has more than one value.
    #[fail(display = "multiple values in {} control entry", _0)]
    MultipleControlValues(&'static str),
    /// The `$TTL` value is not a decimal number in the 32-bit unsigned range.
    #[fail(display = "invalid time-to-live '{}'", _0)]
    InvalidTimeToLive(String),
    /// A default time-to-live above the 32-bit unsigned range.
    #[fail(display = "time-to-live {} exceeds maximum of 4294967295", _0)]
    TimeToLiveOutOfRange(i64),
    /// The origin must be fully qualified.
    #[fail(display = "origin '{}' is not fully qualified", _0)]
    RelativeOrigin(String),
    /// `@` or a relative owner name was used before any origin was set.
    #[fail(display = "cannot resolve '{}' without an origin", _0)]
    UnresolvedName(String),
    /// The token where the record type belongs is not a TTL, a known class, or a known type.
    #[fail(display = "unknown record type {:?}", _0)]
    UnknownType(String),
    /// The record's line ended before any data.
    #[fail(display = "missing data for {} {}", name, record_type)]
    MissingData {
        name: String,
        record_type: RecordType,
    },
    /// The input ended after some of the record's fields but before any data.
    #[fail(display = "incomplete record for {} at end of input", _0)]
    IncompleteRecord(String),
}

impl From<io::Error> for ScanError {
    fn from(err: io::Error) -> ScanError {
        ScanError::Io(err)
    }
}
