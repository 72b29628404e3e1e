#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    Config, Error, SentenceType,
    nmea_content::{
        Location, Status,
        parse::{date, decimal, hemisphere, location, utc_time},
        sentences::Decodable,
    },
    parsing::FieldReader,
};

/// RMC - Recommended Minimum Navigation Information
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_rmc_recommended_minimum_navigation_information>
///
/// ```text
///         1         2 3       4 5        6  7   8   9    10 11
///         |         | |       | |        |  |   |   |    |  |
///  $--RMC,hhmmss.ss,A,ddmm.mm,a,dddmm.mm,a,x.x,x.x,xxxx,x.x,a*hh<CR><LF>
/// ```
///
/// Fields 3 to 9 are only decoded when the status (field 2) is `A`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct RMC {
    /// Fix time in UTC
    pub fix_time: time::Time,
    /// Status and, when active, the navigation data
    pub fix: RmcFix,
}

/// The status-gated part of an [`RMC`] sentence.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum RmcFix {
    /// V - navigation receiver warning, no position reported
    Void,
    /// A - valid fix
    Active(RmcData),
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct RmcData {
    /// Latitude and longitude in signed decimal degrees
    pub location: Location,
    /// Speed over ground in knots
    pub speed_over_ground: f32,
    /// Track made good in degrees true
    pub track_angle: f32,
    /// Fix date in UTC
    pub fix_date: time::Date,
    /// Magnetic variation in degrees, negative west.
    /// `None` when the receiver leaves it empty or reports it malformed.
    pub magnetic_variation: Option<f32>,
}

impl RMC {
    pub fn status(&self) -> Status {
        match self.fix {
            RmcFix::Void => Status::Void,
            RmcFix::Active(_) => Status::Active,
        }
    }

    pub fn data(&self) -> Option<&RmcData> {
        match &self.fix {
            RmcFix::Void => None,
            RmcFix::Active(data) => Some(data),
        }
    }
}

impl<'a> Decodable<'a> for RMC {
    const SENTENCE: SentenceType = SentenceType::Rmc;

    fn decode(fields: &FieldReader<'_, 'a>, config: &Config) -> Result<Self, Error<'a>> {
        let fix_time = fields.parse(0, utc_time)?;
        let status = fields.parse(1, Status::parser)?;

        let fix = match status {
            Status::Void => RmcFix::Void,
            Status::Active => RmcFix::Active(RmcData {
                location: location(fields, 2)?,
                speed_over_ground: fields.parse(6, decimal)?,
                track_angle: fields.parse(7, decimal)?,
                fix_date: fields.parse(8, date(config.century))?,
                magnetic_variation: magnetic_variation(fields, 9),
            }),
        };

        Ok(Self { fix_time, fix })
    }
}

fn magnetic_variation(fields: &FieldReader<'_, '_>, index: usize) -> Option<f32> {
    let variation = fields.parse_opt(index, decimal).ok()??;
    let sign = fields.parse(index + 1, hemisphere("EW")).ok()?;

    Some(variation * sign as f32)
}
