use nom::character::complete::u8;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    Config, Error, SentenceType,
    nmea_content::{FixMode, SelectionMode, parse::decimal, sentences::Decodable},
    parsing::FieldReader,
};

/// Number of PRN slots in a GSA sentence.
pub const PRN_SLOTS: usize = 12;

/// GSA - GPS DOP and active satellites
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gsa_gps_dop_and_active_satellites>
///
/// ```text
///         1 2 3                         14 15  16  17
///         | | |                          | |   |   |
///  $--GSA,a,a,x,x,x,x,x,x,x,x,x,x,x,x,x,x.x,x.x,x.x*hh<CR><LF>
/// ```
///
/// Unlike RMC and GGA nothing gates this sentence: the dilution of precision
/// is reported whatever the fix mode.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct GSA {
    /// Selection mode
    pub selection_mode: SelectionMode,
    /// Fix mode
    pub fix_mode: FixMode,
    /// PRN numbers of the satellites used in the fix, one per slot, `None` for unused slots
    pub fix_sats_prn: [Option<u8>; PRN_SLOTS],
    /// Position Dilution of Precision
    pub pdop: f32,
    /// Horizontal Dilution of Precision
    pub hdop: f32,
    /// Vertical Dilution of Precision
    pub vdop: f32,
}

impl GSA {
    /// PRN numbers of the populated slots, in slot order.
    pub fn satellites(&self) -> impl Iterator<Item = u8> + '_ {
        self.fix_sats_prn.iter().flatten().copied()
    }
}

impl<'a> Decodable<'a> for GSA {
    const SENTENCE: SentenceType = SentenceType::Gsa;

    fn decode(fields: &FieldReader<'_, 'a>, _config: &Config) -> Result<Self, Error<'a>> {
        let selection_mode = fields.parse(0, SelectionMode::parser)?;
        let fix_mode = fields.parse(1, FixMode::parser)?;

        let mut fix_sats_prn = [None; PRN_SLOTS];
        for (slot, prn) in fix_sats_prn.iter_mut().enumerate() {
            let index = 2 + slot;
            *prn = match fields.raw(index)? {
                "" => None,
                _ => Some(fields.parse(index, u8)?),
            };
        }

        let pdop = fields.parse(14, decimal)?;
        let hdop = fields.parse(15, decimal)?;
        let vdop = fields.parse(16, decimal)?;

        Ok(Self {
            selection_mode,
            fix_mode,
            fix_sats_prn,
            pdop,
            hdop,
            vdop,
        })
    }
}
