// SPDX-License-Identifier: AGPL-3.0-only

//! Records as read from a master file.

use std::fmt;

use rr::{RecordClass, RecordType};

/// A resource record entry from a master file.
///
/// The owner name is always fully qualified. Record data is kept as the raw token texts in the
/// order they appeared, parentheses and quotes included, for the caller to interpret by type.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(Serialize))]
pub struct Record {
    name: String,
    ttl: Option<u32>,
    class: Option<RecordClass>,
    record_type: RecordType,
    data: Vec<String>,
    comment: String,
}

impl Record {
    pub fn new(
        name: String,
        ttl: Option<u32>,
        class: Option<RecordClass>,
        record_type: RecordType,
        data: Vec<String>,
    ) -> Record {
        Record {
            name,
            ttl,
            class,
            record_type,
            data,
            comment: String::new(),
        }
    }

    /// Attaches a trailing comment, which should include its leading `;`.
    pub fn with_comment(mut self, comment: String) -> Record {
        self.comment = comment;
        self
    }

    /// The fully-qualified owner name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The time-to-live, either given on the entry or taken from `$TTL`. `None` if neither was
    /// present.
    pub fn ttl(&self) -> Option<u32> {
        self.ttl
    }

    /// The class, if the entry named one.
    pub fn class(&self) -> Option<RecordClass> {
        self.class
    }

    pub fn record_type(&self) -> RecordType {
        self.record_type
    }

    pub fn data(&self) -> &[String] {
        &self.data
    }

    /// The comment following the last data token, or an empty string.
    pub fn comment(&self) -> &str {
        &self.comment
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if let Some(ttl) = self.ttl {
            write!(f, " {}", ttl)?;
        }
        if let Some(class) = self.class {
            write!(f, " {}", class)?;
        }
        write!(f, " {}", self.record_type)?;
        for token in &self.data {
            write!(f, " {}", token)?;
        }
        if !self.comment.is_empty() {
            write!(f, " {}", self.comment)?;
        }
        Ok(())
    }
}
