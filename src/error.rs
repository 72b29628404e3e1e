//! # Error Types
//!
//! This module defines the error type returned by every stage of sentence
//! decoding. All variants are recoverable: the caller skips the line and
//! continues with the next one.

use thiserror::Error;

use crate::SentenceType;

/// Represents all possible reasons a line produced no record.
///
/// Errors borrow from the line that was parsed, so they can carry the
/// offending text without allocating.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error<'a> {
    /// The line does not split into a prefix, a body and a checksum on the
    /// `$` and `*` delimiters.
    ///
    /// This is expected for partial lines, e.g. the first line captured after
    /// connecting to a receiver that is already streaming.
    #[error("malformed sentence {0:?}")]
    MalformedSentence(&'a str),

    /// The checksum of the sentence was corrupt or incorrect.
    #[error("checksum mismatch: computed {computed:02X}, expected {expected:?}")]
    ChecksumMismatch {
        /// The checksum calculated from the sentence body
        computed: u8,
        /// The checksum field as transmitted
        expected: &'a str,
    },

    /// No decoder is registered for the command token.
    ///
    /// Receivers regularly emit sentence types a deployment does not handle,
    /// so this is reported rather than treated as corruption.
    #[error("no decoder registered for command {0:?}")]
    UnknownCommand(&'a str),

    /// A field failed its numeric, enumeration or calendar parse.
    #[error("{sentence} field {index} has invalid value {value:?}")]
    FieldFormat {
        sentence: SentenceType,
        index: usize,
        value: &'a str,
    },

    /// A field required by the sentence is beyond the end of the field list.
    #[error("{sentence} field {index} is missing")]
    MissingField { sentence: SentenceType, index: usize },
}

impl Error<'_> {
    /// Returns `true` if the line was rejected before its fields were looked at.
    ///
    /// ```rust
    /// use nmea0183_fix::Error;
    ///
    /// assert!(Error::MalformedSentence("GPRMC").is_framing());
    /// assert!(!Error::UnknownCommand("GPXXX").is_framing());
    /// ```
    pub fn is_framing(&self) -> bool {
        matches!(
            self,
            Error::MalformedSentence(_) | Error::ChecksumMismatch { .. }
        )
    }
}
