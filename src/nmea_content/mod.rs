//! # NMEA Sentence Content
//!
//! Typed records for the supported sentences and the enumerations their
//! fields decode into.

use std::fmt;

use nom::{IResult, Parser};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub mod parse;
pub mod sentences;

pub use sentences::{GGA, GSA, GgaData, GgaFix, RMC, RmcData, RmcFix};

/// The sentence types this crate can decode.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SentenceType {
    /// Recommended Minimum Navigation Information
    Rmc,
    /// Global Positioning System Fix Data
    Gga,
    /// GPS DOP and active satellites
    Gsa,
}

impl fmt::Display for SentenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Rmc => "RMC",
            Self::Gga => "GGA",
            Self::Gsa => "GSA",
        };
        f.write_str(name)
    }
}

/// A decoded sentence.
///
/// | Variant        | Sentence | Description                               |
/// |----------------|----------|-------------------------------------------|
/// | Rmc([`RMC`])   | `GPRMC`  | Position, motion and date, gated by status |
/// | Gga([`GGA`])   | `GPGGA`  | Position and fix quality, gated by quality |
/// | Gsa([`GSA`])   | `GPGSA`  | Active satellites and dilution of precision |
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum DecodedRecord<'a> {
    Rmc(RMC),
    Gga(#[cfg_attr(feature = "serde", serde(borrow))] GGA<'a>),
    Gsa(GSA),
}

impl DecodedRecord<'_> {
    pub fn sentence_type(&self) -> SentenceType {
        match self {
            Self::Rmc(_) => SentenceType::Rmc,
            Self::Gga(_) => SentenceType::Gga,
            Self::Gsa(_) => SentenceType::Gsa,
        }
    }
}

/// A position in signed decimal degrees.
///
/// Latitude is negative south of the equator, longitude is negative west of
/// the prime meridian.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

/// How the two-digit year of a `DDMMYY` date is expanded.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum CenturyRule {
    #[default]
    /// Always `2000 + yy`.
    Fixed2000,
    /// `1900 + yy` when `yy` is at least the pivot, `2000 + yy` otherwise.
    Pivot(u8),
}

impl CenturyRule {
    /// Expands a two-digit year.
    ///
    /// ```rust
    /// use nmea0183_fix::nmea_content::CenturyRule;
    ///
    /// assert_eq!(CenturyRule::Fixed2000.full_year(94), 2094);
    /// assert_eq!(CenturyRule::Pivot(80).full_year(94), 1994);
    /// assert_eq!(CenturyRule::Pivot(80).full_year(24), 2024);
    /// ```
    pub fn full_year(&self, yy: u8) -> i32 {
        match *self {
            Self::Pivot(pivot) if yy >= pivot => 1900 + yy as i32,
            _ => 2000 + yy as i32,
        }
    }
}

macro_rules! field_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $char:literal => $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )*
        }

        impl $name {
            /// Parses the single-character wire code.
            pub fn parser(i: &str) -> IResult<&str, Self> {
                nom::branch::alt(($(
                    nom::character::complete::char($char).map(|_| Self::$variant),
                )*)).parse(i)
            }

            /// The single-character wire code.
            pub fn code(&self) -> char {
                match self {
                    $(Self::$variant => $char,)*
                }
            }
        }
    };
}

field_enum! {
    /// RMC status
    pub enum Status {
        /// A - Active, the fix is valid
        'A' => Active,
        /// V - Void, navigation receiver warning
        'V' => Void,
    }
}

field_enum! {
    /// Quality of a valid GGA fix
    ///
    /// Code 0 (fix not available) is represented by [`GgaFix::Invalid`].
    pub enum Quality {
        /// 1 - GPS fix
        '1' => Gps,
        /// 2 - Differential GPS fix
        '2' => Dgps,
        /// 3 - PPS fix
        '3' => Pps,
        /// 4 - Real Time Kinematic
        '4' => Rtk,
        /// 5 - Float RTK
        '5' => FloatRtk,
        /// 6 - Estimated (dead reckoning)
        '6' => Estimated,
        /// 7 - Manual input mode
        '7' => Manual,
        /// 8 - Simulation mode
        '8' => Simulation,
    }
}

field_enum! {
    /// Selection Mode
    pub enum SelectionMode {
        /// A - Automatic, 2D/3D
        'A' => Automatic,
        /// M - Manual, forced to operate in 2D or 3D
        'M' => Manual,
    }
}

field_enum! {
    /// Fix Mode
    pub enum FixMode {
        /// 1 - No fix
        '1' => NoFix,
        /// 2 - 2D Fix
        '2' => Fix2D,
        /// 3 - 3D Fix
        '3' => Fix3D,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_status() {
        assert_eq!(Status::parser("A").unwrap(), ("", Status::Active));
        assert_eq!(Status::parser("V").unwrap(), ("", Status::Void));
        assert!(Status::parser("K").is_err());
    }

    #[test]
    fn test_quality() {
        let codes = ['1', '2', '3', '4', '5', '6', '7', '8'];
        for code in codes {
            let input = code.to_string();
            let (_, quality) = Quality::parser(&input).unwrap();
            assert_eq!(quality.code(), code);
        }
        assert_eq!(Quality::parser("4").unwrap(), ("", Quality::Rtk));
        assert!(Quality::parser("0").is_err());
        assert!(Quality::parser("9").is_err());
    }

    #[test]
    fn test_selection_mode() {
        assert_eq!(
            SelectionMode::parser("A").unwrap(),
            ("", SelectionMode::Automatic)
        );
        assert_eq!(
            SelectionMode::parser("M").unwrap(),
            ("", SelectionMode::Manual)
        );
        assert!(SelectionMode::parser("X").is_err());
    }

    #[test]
    fn test_fix_mode() {
        assert_eq!(FixMode::parser("1").unwrap(), ("", FixMode::NoFix));
        assert_eq!(FixMode::parser("2").unwrap(), ("", FixMode::Fix2D));
        assert_eq!(FixMode::parser("3").unwrap(), ("", FixMode::Fix3D));
        assert!(FixMode::parser("4").is_err());
    }

    #[test]
    fn test_sentence_type_display() {
        assert_eq!(SentenceType::Rmc.to_string(), "RMC");
        assert_eq!(SentenceType::Gga.to_string(), "GGA");
        assert_eq!(SentenceType::Gsa.to_string(), "GSA");
    }
}
