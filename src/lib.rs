// SPDX-License-Identifier: AGPL-3.0-only

//! zonescan reads [RFC 1035 §5][rfc1035] master zone files one resource record at a time.
//!
//! The scanner is pull-based: a host (a zone loader, a validator, a transfer tool) calls
//! [`Scanner::next_record`] until it returns `Ok(None)`. Owner names come back fully qualified
//! and `$ORIGIN` / `$TTL` control entries are applied along the way, but record data is left as
//! the raw tokens found in the file. Interpreting them by type is up to the caller.
//!
//! ```
//! use zonescan::rr::RecordType;
//! use zonescan::Scanner;
//!
//! let mut scanner = Scanner::new("$ORIGIN example.invalid.\nwww 300 IN A 192.0.2.1\n".as_bytes());
//! let record = scanner.next_record().unwrap().unwrap();
//! assert_eq!(record.name(), "www.example.invalid.");
//! assert_eq!(record.ttl(), Some(300));
//! assert_eq!(record.record_type(), RecordType::A);
//! assert_eq!(record.data(), &["192.0.2.1".to_owned()][..]);
//! assert!(scanner.next_record().unwrap().is_none());
//! ```
//!
//! [rfc1035]: https://tools.ietf.org/html/rfc1035#section-5

#![cfg_attr(feature = "cargo-clippy", warn(clippy_pedantic))]
#![cfg_attr(feature = "cargo-clippy", allow(use_self, stutter))]

extern crate cast;
#[macro_use]
extern crate failure;
#[macro_use]
extern crate log;
#[cfg(test)]
#[macro_use]
extern crate maplit;
#[cfg(feature = "json")]
extern crate serde;
#[cfg(feature = "json")]
#[macro_use]
extern crate serde_derive;

/// Declares a fieldless enum backed by a static table of numeric codes and mnemonics, along with
/// lookups in both directions.
macro_rules! mnemonic_table {
    (
        $(#[$meta:meta])*
        pub enum $name:ident ($kind:expr) {
            $($(#[$vmeta:meta])* $variant:ident = $code:tt, $mnemonic:tt;)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[allow(non_camel_case_types)]
        pub enum $name {
            $($(#[$vmeta])* $variant,)+
        }

        impl $name {
            /// Every entry of the table, in code order.
            pub const ALL: &'static [$name] = &[$($name::$variant,)+];

            /// The numeric code assigned by IANA.
            pub fn code(self) -> u16 {
                match self {
                    $($name::$variant => $code,)+
                }
            }

            /// The mnemonic used in master files.
            pub fn mnemonic(self) -> &'static str {
                match self {
                    $($name::$variant => $mnemonic,)+
                }
            }

            /// Looks up a value by its numeric code.
            pub fn from_code(code: u16) -> Option<$name> {
                match code {
                    $($code => Some($name::$variant),)+
                    _ => None,
                }
            }

            /// Looks up a mnemonic, ignoring ASCII case.
            pub fn from_mnemonic(s: &str) -> Option<$name> {
                match s.to_ascii_uppercase().as_str() {
                    $($mnemonic => Some($name::$variant),)+
                    _ => None,
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter) -> ::std::fmt::Result {
                f.write_str(self.mnemonic())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = ::rr::UnknownMnemonic;

            fn from_str(s: &str) -> Result<$name, ::rr::UnknownMnemonic> {
                $name::from_mnemonic(s).ok_or_else(|| ::rr::UnknownMnemonic {
                    kind: $kind,
                    mnemonic: s.to_owned(),
                })
            }
        }

        #[cfg(feature = "json")]
        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.mnemonic())
            }
        }
    };
}

pub mod error;
pub mod record;
pub mod rr;
pub mod scanner;
pub mod token;

pub use error::ScanError;
pub use record::Record;
pub use scanner::Scanner;
