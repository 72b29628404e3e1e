//! # NMEA 0183 Sentence Framing
//!
//! This module provides the framing and checksum verification for NMEA 0183
//! sentences of the form `$CMD,D1,D2,...,Dn*CC`, and the [`Nmea0183`] facade
//! that chains verification with command dispatch.

use log::{debug, trace};
use nom::{
    Parser,
    bytes::complete::take_till,
    character::complete::char,
    combinator::eof,
};

use crate::{DecodedRecord, Error, Registry, nmea_content::CenturyRule};

/// Defines how the transmitted checksum field is compared with the computed one.
///
/// The computed checksum is always rendered as two uppercase hexadecimal digits.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ChecksumCase {
    #[default]
    /// The transmitted field must match exactly.
    ///
    /// Lowercase hex digits (`*6a`) are rejected with a checksum mismatch.
    Strict,

    /// The transmitted field is compared ignoring ASCII case.
    ///
    /// Use this mode for equipment that emits lowercase checksums.
    Lenient,
}

/// Decoding options shared by the verifier and the sentence decoders.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// How the transmitted checksum is compared
    pub checksum_case: ChecksumCase,
    /// How two-digit years in `DDMMYY` dates are expanded
    pub century: CenturyRule,
}

/// A sentence body whose checksum has been verified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerifiedBody<'a> {
    body: &'a str,
    checksum: &'a str,
}

impl<'a> VerifiedBody<'a> {
    /// The text between `$` and `*`.
    pub fn body(&self) -> &'a str {
        self.body
    }

    /// The checksum field as transmitted.
    pub fn checksum(&self) -> &'a str {
        self.checksum
    }
}

/// Calculates the NMEA 0183 checksum for the given sentence body.
///
/// The checksum is the XOR of every byte between the `$` prefix and the `*`
/// delimiter, excluding both delimiters, seeded at 0.
///
/// # Examples
///
/// ```rust
/// use nmea0183_fix::checksum;
///
/// assert_eq!(checksum("GPGGA,123456,data"), 0x41);
/// assert_eq!(checksum(""), 0);
/// ```
pub fn checksum(body: &str) -> u8 {
    body.as_bytes()
        .iter()
        .fold(0u8, |accumulated_xor, &byte| accumulated_xor ^ byte)
}

/// Formats a checksum value as a two-digit uppercase hexadecimal string.
///
/// # Examples
///
/// ```rust
/// use nmea0183_fix::format_checksum;
///
/// assert_eq!(format_checksum(0x41), "41");
/// assert_eq!(format_checksum(0x0A), "0A");
/// ```
pub fn format_checksum(checksum: u8) -> String {
    format!("{checksum:02X}")
}

/// Splits a trimmed line into `(body, checksum)`.
///
/// Anything before `$` is ignored. Neither the body nor the checksum may
/// contain a delimiter.
fn frame(i: &str) -> nom::IResult<&str, (&str, &str)> {
    let is_delimiter = |c: char| c == '$' || c == '*';

    let (i, _prefix) = take_till(is_delimiter).parse(i)?;
    let (i, _) = char('$').parse(i)?;
    let (i, body) = take_till(is_delimiter).parse(i)?;
    let (i, _) = char('*').parse(i)?;
    let (i, checksum) = take_till(is_delimiter).parse(i)?;
    let (i, _) = eof.parse(i)?;

    Ok((i, (body, checksum)))
}

/// Verifies the framing and checksum of a single line.
///
/// Leading and trailing whitespace, including the `\r\n` terminator, is
/// removed first.
///
/// # Errors
///
/// - [`Error::MalformedSentence`] if the line has no `$ ... *` framing
/// - [`Error::ChecksumMismatch`] if the transmitted checksum is not the
///   computed one
///
/// # Examples
///
/// ```rust
/// use nmea0183_fix::{ChecksumCase, Error, verify};
///
/// let verified = verify("$GPGGA,123456,data*41\r\n", ChecksumCase::Strict).unwrap();
/// assert_eq!(verified.body(), "GPGGA,123456,data");
///
/// assert_eq!(
///     verify("$GPGGA,123456,data*00", ChecksumCase::Strict),
///     Err(Error::ChecksumMismatch { computed: 0x41, expected: "00" })
/// );
/// assert_eq!(
///     verify("GPGGA,123456,data", ChecksumCase::Strict),
///     Err(Error::MalformedSentence("GPGGA,123456,data"))
/// );
/// ```
pub fn verify(line: &str, case: ChecksumCase) -> Result<VerifiedBody<'_>, Error<'_>> {
    let line = line.trim();

    let Ok((_, (body, transmitted))) = frame(line) else {
        debug!("malformed sentence {line:?}");
        return Err(Error::MalformedSentence(line));
    };

    let computed = checksum(body);
    let rendered = format_checksum(computed);

    let matches = match case {
        ChecksumCase::Strict => rendered == transmitted,
        ChecksumCase::Lenient => rendered.eq_ignore_ascii_case(transmitted),
    };

    if !matches {
        debug!("checksum mismatch: computed {rendered}, expected {transmitted:?}");
        return Err(Error::ChecksumMismatch {
            computed,
            expected: transmitted,
        });
    }

    Ok(VerifiedBody {
        body,
        checksum: transmitted,
    })
}

/// A complete NMEA 0183 line decoder.
///
/// Holds the decoding [`Config`] and the [`Registry`] of sentence decoders.
/// Both are fixed at construction, so a single instance can be shared by
/// reference between threads.
///
/// # Examples
///
/// ```rust
/// use nmea0183_fix::{Config, DecodedRecord, Nmea0183, nmea_content::CenturyRule};
///
/// let parser = Nmea0183::new(Config {
///     century: CenturyRule::Pivot(80),
///     ..Config::default()
/// });
///
/// let record = parser
///     .parse("$GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W*6A")
///     .unwrap();
/// assert!(matches!(record, DecodedRecord::Rmc(_)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Nmea0183 {
    config: Config,
    registry: Registry,
}

impl Nmea0183 {
    /// Creates a decoder for `GPRMC`, `GPGGA` and `GPGSA` with the given configuration.
    pub fn new(config: Config) -> Self {
        Self::with_registry(config, Registry::default())
    }

    /// Creates a decoder that dispatches through a caller-built registry.
    pub fn with_registry(config: Config, registry: Registry) -> Self {
        Self { config, registry }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Verifies and decodes a single line.
    ///
    /// # Errors
    ///
    /// Any [`Error`] variant; the line produced no record.
    pub fn parse<'a>(&self, line: &'a str) -> Result<DecodedRecord<'a>, Error<'a>> {
        let verified = verify(line, self.config.checksum_case)?;
        let record = self.registry.dispatch(verified.body(), &self.config)?;

        trace!("decoded {}", record.sentence_type());
        Ok(record)
    }
}
