//! # Field Lists
//!
//! This module splits a verified sentence body into its command token and
//! positional fields, and provides typed access to individual fields.

use nom::{Parser, combinator::all_consuming, error::Error as NomError};

use crate::{Error, SentenceType};

/// Maximum number of fields after the command token.
pub const MAX_FIELDS: usize = 32;

/// The command token and the comma-separated fields of a sentence body.
///
/// Empty fields are kept as empty strings; their position is what gives them
/// meaning. Fields borrow from the body, nothing is allocated.
#[derive(Debug, Clone, PartialEq)]
pub struct Fields<'a> {
    command: &'a str,
    values: heapless::Vec<&'a str, MAX_FIELDS>,
}

impl<'a> Fields<'a> {
    /// Splits `body` on `,` and removes the leading command token.
    ///
    /// # Errors
    ///
    /// [`Error::MalformedSentence`] if the body has more than [`MAX_FIELDS`]
    /// fields after the command.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nmea0183_fix::parsing::Fields;
    ///
    /// let fields = Fields::split("GPGGA,123519,,N").unwrap();
    /// assert_eq!(fields.command(), "GPGGA");
    /// assert_eq!(fields.as_slice(), &["123519", "", "N"]);
    /// ```
    pub fn split(body: &'a str) -> Result<Self, Error<'a>> {
        let mut tokens = body.split(',');
        let command = tokens.next().unwrap_or_default();

        let mut values = heapless::Vec::new();
        for token in tokens {
            values
                .push(token)
                .map_err(|_| Error::MalformedSentence(body))?;
        }

        Ok(Self { command, values })
    }

    pub fn command(&self) -> &'a str {
        self.command
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&'a str> {
        self.values.get(index).copied()
    }

    pub fn as_slice(&self) -> &[&'a str] {
        &self.values
    }

    /// Returns a reader that attributes field errors to `sentence`.
    pub fn reader(&self, sentence: SentenceType) -> FieldReader<'_, 'a> {
        FieldReader {
            sentence,
            values: &self.values,
        }
    }
}

/// Typed, positional access to the fields of one sentence.
///
/// Every accessor reports failures as [`Error::FieldFormat`] or
/// [`Error::MissingField`] tagged with the sentence type and field index.
#[derive(Debug, Clone, Copy)]
pub struct FieldReader<'f, 'a> {
    sentence: SentenceType,
    values: &'f [&'a str],
}

impl<'a> FieldReader<'_, 'a> {
    pub fn sentence(&self) -> SentenceType {
        self.sentence
    }

    /// Returns the raw text of a required field.
    pub fn raw(&self, index: usize) -> Result<&'a str, Error<'a>> {
        self.values
            .get(index)
            .copied()
            .ok_or(Error::MissingField {
                sentence: self.sentence,
                index,
            })
    }

    /// Runs `parser` over a required field, which must be consumed entirely.
    ///
    /// An empty field is a format error, not a default value.
    pub fn parse<O, P>(&self, index: usize, parser: P) -> Result<O, Error<'a>>
    where
        P: Parser<&'a str, Output = O, Error = NomError<&'a str>>,
    {
        let value = self.raw(index)?;

        all_consuming(parser)
            .parse(value)
            .map(|(_, output)| output)
            .map_err(|_| Error::FieldFormat {
                sentence: self.sentence,
                index,
                value,
            })
    }

    /// Like [`FieldReader::parse`], but an empty or missing field yields `None`.
    pub fn parse_opt<O, P>(&self, index: usize, parser: P) -> Result<Option<O>, Error<'a>>
    where
        P: Parser<&'a str, Output = O, Error = NomError<&'a str>>,
    {
        match self.values.get(index) {
            None | Some(&"") => Ok(None),
            Some(_) => self.parse(index, parser).map(Some),
        }
    }
}
