use nom::{
    Parser,
    branch::alt,
    character::complete::{char, u8},
};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    Config, Error, SentenceType,
    nmea_content::{
        Location, Quality,
        parse::{decimal, location, utc_time},
        sentences::Decodable,
    },
    parsing::FieldReader,
};

/// GGA - Global Positioning System Fix Data
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gga_global_positioning_system_fix_data>
///
/// ```text
///                                                      11
///         1         2       3 4        5 6 7  8   9  10 |  12 13  14
///         |         |       | |        | | |  |   |   | |   | |   |
///  $--GGA,hhmmss.ss,ddmm.mm,a,dddmm.mm,a,x,xx,x.x,x.x,M,x.x,M,x.x,xxxx*hh<CR><LF>
/// ```
///
/// Every field other than the time is only decoded when the quality
/// (field 6) is not `0`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct GGA<'a> {
    /// Fix time in UTC
    pub fix_time: time::Time,
    /// Quality indicator and, when valid, the fix data
    #[cfg_attr(feature = "serde", serde(borrow))]
    pub fix: GgaFix<'a>,
}

/// The quality-gated part of a [`GGA`] sentence.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum GgaFix<'a> {
    /// 0 - fix not available
    Invalid,
    /// 1 to 8 - see [`Quality`]
    Valid(#[cfg_attr(feature = "serde", serde(borrow))] GgaData<'a>),
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct GgaData<'a> {
    /// GPS Quality Indicator
    pub quality: Quality,
    /// Latitude and longitude in signed decimal degrees
    pub location: Location,
    /// Number of satellites in use
    pub satellite_count: u8,
    /// Horizontal Dilution of Precision
    pub hdop: f32,
    /// Antenna altitude above/below mean sea level (geoid)
    pub altitude: f32,
    /// Unit of [`GgaData::altitude`], conventionally `M`
    pub altitude_unit: &'a str,
    /// Geoidal separation, the difference between the WGS-84 earth ellipsoid
    /// and mean sea level (geoid); negative when the geoid is below the ellipsoid
    pub geoidal_separation: f32,
    /// Unit of [`GgaData::geoidal_separation`], conventionally `M`
    pub geoidal_separation_unit: &'a str,
    /// Age of differential GPS data in seconds, as transmitted; empty when DGPS is not used
    pub age_of_dgps: &'a str,
    /// Differential reference station ID, as transmitted
    pub ref_station_id: &'a str,
}

impl<'a> GGA<'a> {
    /// The quality indicator, `None` for an invalid fix.
    pub fn quality(&self) -> Option<Quality> {
        self.data().map(|data| data.quality)
    }

    pub fn data(&self) -> Option<&GgaData<'a>> {
        match &self.fix {
            GgaFix::Invalid => None,
            GgaFix::Valid(data) => Some(data),
        }
    }
}

impl<'a> Decodable<'a> for GGA<'a> {
    const SENTENCE: SentenceType = SentenceType::Gga;

    fn decode(fields: &FieldReader<'_, 'a>, _config: &Config) -> Result<Self, Error<'a>> {
        let fix_time = fields.parse(0, utc_time)?;
        let quality = fields.parse(
            5,
            alt((char('0').map(|_| None), Quality::parser.map(Some))),
        )?;

        let Some(quality) = quality else {
            return Ok(Self {
                fix_time,
                fix: GgaFix::Invalid,
            });
        };

        let data = GgaData {
            quality,
            location: location(fields, 1)?,
            satellite_count: fields.parse(6, u8)?,
            hdop: fields.parse(7, decimal)?,
            altitude: fields.parse(8, decimal)?,
            altitude_unit: fields.raw(9)?,
            geoidal_separation: fields.parse(10, decimal)?,
            geoidal_separation_unit: fields.raw(11)?,
            age_of_dgps: fields.raw(12)?,
            ref_station_id: fields.raw(13)?,
        };

        Ok(Self {
            fix_time,
            fix: GgaFix::Valid(data),
        })
    }
}
