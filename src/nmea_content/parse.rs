//! Field grammars shared by the sentence decoders.
//!
//! Each parser handles the text of a single field; [`FieldReader`] makes sure
//! the whole field is consumed.

use nom::{
    IResult, Parser,
    bytes::complete::take,
    character::complete::{one_of, u8, u16},
    combinator::{all_consuming, verify},
    error::{Error as NomError, ErrorKind, make_error},
    number::complete::{double, float},
};

use crate::{
    Error,
    nmea_content::{CenturyRule, Location},
    parsing::FieldReader,
};

fn verify_error(i: &str) -> nom::Err<NomError<&str>> {
    nom::Err::Error(make_error(i, ErrorKind::Verify))
}

/// Takes exactly `count` characters and runs `f` over all of them.
pub fn with_take<'a, O, F>(
    count: usize,
    f: F,
) -> impl Parser<&'a str, Output = O, Error = NomError<&'a str>>
where
    F: Parser<&'a str, Output = O, Error = NomError<&'a str>>,
{
    take(count).and_then(all_consuming(f))
}

/// Parses a finite decimal field such as a speed or a dilution of precision.
///
/// `nan` and `inf` are rejected.
pub fn decimal(i: &str) -> IResult<&str, f32> {
    verify(float, |v: &f32| v.is_finite()).parse(i)
}

/// Parses a UTC time of day, `hhmmss` with optional fractional seconds.
///
/// A leap second (`ss` of `60`) is clamped to the last nanosecond of the
/// preceding second, since [`time::Time`] has no 61st second.
///
/// ```rust
/// use nmea0183_fix::nmea_content::parse::utc_time;
///
/// let (_, time) = utc_time("123519.25").unwrap();
/// assert_eq!((time.hour(), time.minute(), time.second()), (12, 35, 19));
/// assert_eq!(time.millisecond(), 250);
///
/// let (_, time) = utc_time("235960").unwrap();
/// assert_eq!((time.second(), time.nanosecond()), (59, 999_999_999));
///
/// assert!(utc_time("2460").is_err());
/// assert!(utc_time("246000").is_err());
/// assert!(utc_time("235961").is_err());
/// ```
pub fn utc_time(i: &str) -> IResult<&str, time::Time> {
    let (i, (hour, minute, second)) = (with_take(2, u8), with_take(2, u8), double).parse(i)?;

    if !second.is_finite() || second.is_sign_negative() || second >= 61.0 {
        return Err(verify_error(i));
    }

    let (whole, nanos) = if second >= 60.0 {
        (59, 999_999_999)
    } else {
        let whole = second.trunc();
        let nanos = ((second - whole) * 1e9).round().min(999_999_999.0) as u32;
        (whole as u8, nanos)
    };

    let time =
        time::Time::from_hms_nano(hour, minute, whole, nanos).map_err(|_| verify_error(i))?;

    Ok((i, time))
}

/// Returns a parser for a `ddmmyy` date, expanding the year with `century`.
///
/// ```rust
/// use nmea0183_fix::nmea_content::{CenturyRule, parse::date};
///
/// let (_, d) = date(CenturyRule::Fixed2000)("230394").unwrap();
/// assert_eq!(d.to_string(), "2094-03-23");
///
/// assert!(date(CenturyRule::Fixed2000)("320194").is_err());
/// ```
pub fn date<'a>(
    century: CenturyRule,
) -> impl Fn(&'a str) -> IResult<&'a str, time::Date> {
    move |i: &'a str| {
        let (i, (day, month, year)) =
            (with_take(2, u8), with_take(2, u8), with_take(2, u8)).parse(i)?;

        let month: time::Month = month.try_into().map_err(|_| verify_error(i))?;
        let date = time::Date::from_calendar_date(century.full_year(year), month, day)
            .map_err(|_| verify_error(i))?;

        Ok((i, date))
    }
}

/// Returns a parser for an unsigned coordinate with `degree_digits` of whole
/// degrees followed by decimal minutes, e.g. `4807.038` or `01131.000`.
///
/// ```rust
/// use nmea0183_fix::nmea_content::parse::coordinate;
///
/// let (_, lat) = coordinate(2)("4807.038").unwrap();
/// assert!((lat - 48.1173).abs() < 1e-4);
/// ```
pub fn coordinate<'a>(degree_digits: usize) -> impl Fn(&'a str) -> IResult<&'a str, f64> {
    move |i: &'a str| {
        let (i, (degrees, minutes)) = (with_take(degree_digits, u16), double).parse(i)?;

        if !minutes.is_finite() || minutes.is_sign_negative() {
            return Err(verify_error(i));
        }

        Ok((i, degrees as f64 + minutes / 60.0))
    }
}

/// Parses a hemisphere letter out of `hemispheres` into the sign it applies:
/// `N`/`E` give `1.0`, `S`/`W` give `-1.0`.
pub fn hemisphere<'a>(hemispheres: &'static str) -> impl Fn(&'a str) -> IResult<&'a str, f64> {
    move |i: &'a str| {
        one_of(hemispheres)
            .map(|c| if c == 'S' || c == 'W' { -1.0 } else { 1.0 })
            .parse(i)
    }
}

/// Decodes the four fields of a position starting at `first`:
/// latitude, `N`/`S`, longitude, `E`/`W`.
///
/// Latitude has two digits of whole degrees, longitude three.
pub fn location<'a>(fields: &FieldReader<'_, 'a>, first: usize) -> Result<Location, Error<'a>> {
    let latitude = fields.parse(first, coordinate(2))?;
    let north_south = fields.parse(first + 1, hemisphere("NS"))?;
    let longitude = fields.parse(first + 2, coordinate(3))?;
    let east_west = fields.parse(first + 3, hemisphere("EW"))?;

    Ok(Location {
        latitude: latitude * north_south,
        longitude: longitude * east_west,
    })
}
