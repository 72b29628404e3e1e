mod gga;
mod gsa;
mod rmc;

pub use gga::{GGA, GgaData, GgaFix};
pub use gsa::GSA;
pub use rmc::{RMC, RmcData, RmcFix};

use crate::{
    Config, DecodedRecord, Error, SentenceType,
    parsing::{FieldReader, Fields},
};

/// A trait for records that can be decoded from the fields of one sentence.
///
/// Implemented by the strongly-typed sentence structs. Decoding is a pure
/// function of the fields and the configuration; no state is kept between
/// calls.
pub trait Decodable<'a>: Sized {
    /// The sentence type reported in field errors.
    const SENTENCE: SentenceType;

    /// Decodes the fields that follow the command token.
    ///
    /// # Example
    ///
    /// ```rust
    /// use nmea0183_fix::{
    ///     Config, SentenceType,
    ///     nmea_content::{GSA, sentences::Decodable},
    ///     parsing::Fields,
    /// };
    ///
    /// let fields = Fields::split("GPGSA,A,3,04,,,,,,,,,,17,,2.5,1.3,2.1").unwrap();
    /// let gsa = GSA::decode(&fields.reader(SentenceType::Gsa), &Config::default()).unwrap();
    /// assert_eq!(gsa.satellites().collect::<Vec<_>>(), [4, 17]);
    /// ```
    fn decode(fields: &FieldReader<'_, 'a>, config: &Config) -> Result<Self, Error<'a>>;
}

/// Decoder for `GPRMC`, suitable for [`Registry::register`](crate::Registry::register).
pub fn decode_rmc<'a>(fields: &Fields<'a>, config: &Config) -> Result<DecodedRecord<'a>, Error<'a>> {
    RMC::decode(&fields.reader(<RMC as Decodable<'a>>::SENTENCE), config).map(DecodedRecord::Rmc)
}

/// Decoder for `GPGGA`, suitable for [`Registry::register`](crate::Registry::register).
pub fn decode_gga<'a>(fields: &Fields<'a>, config: &Config) -> Result<DecodedRecord<'a>, Error<'a>> {
    GGA::decode(&fields.reader(<GGA<'a> as Decodable<'a>>::SENTENCE), config).map(DecodedRecord::Gga)
}

/// Decoder for `GPGSA`, suitable for [`Registry::register`](crate::Registry::register).
pub fn decode_gsa<'a>(fields: &Fields<'a>, config: &Config) -> Result<DecodedRecord<'a>, Error<'a>> {
    GSA::decode(&fields.reader(<GSA as Decodable<'a>>::SENTENCE), config).map(DecodedRecord::Gsa)
}
