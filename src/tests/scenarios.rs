use crate::{
    ChecksumCase, Config, DecodedRecord, Error, Nmea0183, SentenceType, checksum, format_checksum,
    nmea_content::{CenturyRule, GgaFix, Quality, RmcFix, Status},
};

const RMC_ACTIVE: &str =
    "$GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W*6A\n";
const RMC_VOID: &str = "$GPRMC,123519,V,,,,,,,230394,,*33";
const GGA_VALID: &str = "$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47";
const GGA_INVALID: &str = "$GPGGA,123519,,,,,0,00,,,M,,M,,*6B";
const GSA_TWO_SATS: &str = "$GPGSA,A,3,04,,,,,,,,,,17,,2.5,1.3,2.1*36";
const GSA_NO_FIX: &str = "$GPGSA,A,1,,,,,,,,,,,,,99.9,99.9,99.9*09";

fn pivot_80() -> Nmea0183 {
    Nmea0183::new(Config {
        century: CenturyRule::Pivot(80),
        ..Config::default()
    })
}

#[test]
fn test_rmc_active_fix() {
    let Ok(DecodedRecord::Rmc(rmc)) = pivot_80().parse(RMC_ACTIVE) else {
        panic!("Expected an RMC record");
    };

    assert_eq!(rmc.fix_time, time::Time::from_hms(12, 35, 19).unwrap());

    let RmcFix::Active(data) = rmc.fix else {
        panic!("Expected an active fix");
    };
    assert!((data.location.latitude - 48.1173).abs() < 1e-4);
    assert!((data.location.longitude - 11.5167).abs() < 1e-4);
    assert_eq!(data.speed_over_ground, 22.4);
    assert_eq!(
        data.fix_date,
        time::Date::from_calendar_date(1994, time::Month::March, 23).unwrap()
    );
}

#[test]
fn test_rmc_default_century() {
    let Ok(DecodedRecord::Rmc(rmc)) = Nmea0183::default().parse(RMC_ACTIVE) else {
        panic!("Expected an RMC record");
    };

    let data = rmc.data().unwrap();
    assert_eq!(data.fix_date.year(), 2094);
    assert_eq!(data.fix_date.month(), time::Month::March);
    assert_eq!(data.fix_date.day(), 23);
}

#[test]
fn test_rmc_void() {
    let record = Nmea0183::default().parse(RMC_VOID).unwrap();

    match record {
        DecodedRecord::Rmc(rmc) => {
            assert_eq!(rmc.status(), Status::Void);
            assert_eq!(rmc.fix, RmcFix::Void);
            assert!(rmc.data().is_none());
        }
        other => panic!("Unexpected record {other:?}"),
    }
}

#[test]
fn test_checksum_mismatch_yields_no_record() {
    let line = "$GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W*00";

    let err = Nmea0183::default().parse(line).unwrap_err();
    assert_eq!(
        err,
        Error::ChecksumMismatch {
            computed: 0x6A,
            expected: "00",
        }
    );
    assert!(err.is_framing());
}

#[test]
fn test_unknown_command() {
    let err = Nmea0183::default().parse("$GPXXX,1,2,3*53").unwrap_err();

    assert_eq!(err, Error::UnknownCommand("GPXXX"));
    assert!(!err.is_framing());
}

#[test]
fn test_long_unknown_command() {
    let body = format!("PUBX,03{}", ",".repeat(40));
    let line = format!("${body}*{}", format_checksum(checksum(&body)));

    assert_eq!(
        Nmea0183::default().parse(&line),
        Err(Error::UnknownCommand("PUBX"))
    );
}

#[test]
fn test_leap_second_is_decoded() {
    let body = "GPGGA,235960,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,";
    let line = format!("${body}*{}", format_checksum(checksum(body)));

    let Ok(DecodedRecord::Gga(gga)) = Nmea0183::default().parse(&line) else {
        panic!("Expected a GGA record");
    };
    assert_eq!((gga.fix_time.hour(), gga.fix_time.minute()), (23, 59));
    assert_eq!(gga.quality(), Some(Quality::Gps));
}

#[test]
fn test_non_finite_decimal_is_rejected() {
    let body = "GPRMC,123519,A,4807.038,N,01131.000,E,nan,084.4,230394,,";
    let line = format!("${body}*{}", format_checksum(checksum(body)));

    let parser = Nmea0183::default();
    assert_eq!(
        parser.parse(&line),
        Err(Error::FieldFormat {
            sentence: SentenceType::Rmc,
            index: 6,
            value: "nan",
        })
    );
    assert_eq!(parser.parse(&line), parser.parse(&line));
}

#[test]
fn test_missing_delimiter() {
    let line = "$GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W";

    let err = Nmea0183::default().parse(line).unwrap_err();
    assert_eq!(err, Error::MalformedSentence(line));
    assert!(err.is_framing());
}

#[test]
fn test_gsa_two_populated_slots() {
    let Ok(DecodedRecord::Gsa(gsa)) = Nmea0183::default().parse(GSA_TWO_SATS) else {
        panic!("Expected a GSA record");
    };

    assert_eq!(gsa.fix_sats_prn.iter().filter(|prn| prn.is_none()).count(), 10);
    assert_eq!(gsa.fix_sats_prn[0], Some(4));
    assert_eq!(gsa.fix_sats_prn[10], Some(17));
    assert_eq!(gsa.satellites().collect::<Vec<_>>(), [4, 17]);
    assert_eq!((gsa.pdop, gsa.hdop, gsa.vdop), (2.5, 1.3, 2.1));
}

#[test]
fn test_gsa_without_fix_reports_dop() {
    let Ok(DecodedRecord::Gsa(gsa)) = Nmea0183::default().parse(GSA_NO_FIX) else {
        panic!("Expected a GSA record");
    };

    assert_eq!(gsa.satellites().count(), 0);
    assert_eq!((gsa.pdop, gsa.hdop, gsa.vdop), (99.9, 99.9, 99.9));
}

#[test]
fn test_gga_quality_gating() {
    let parser = Nmea0183::default();

    let Ok(DecodedRecord::Gga(valid)) = parser.parse(GGA_VALID) else {
        panic!("Expected a GGA record");
    };
    assert_eq!(valid.quality(), Some(Quality::Gps));
    assert_eq!(valid.data().unwrap().satellite_count, 8);

    let Ok(DecodedRecord::Gga(invalid)) = parser.parse(GGA_INVALID) else {
        panic!("Expected a GGA record");
    };
    assert_eq!(invalid.fix, GgaFix::Invalid);
    assert_eq!(invalid.fix_time, time::Time::from_hms(12, 35, 19).unwrap());
}

#[test]
fn test_hemisphere_signs() {
    let cases = [
        ("$GPGGA,092750.000,5321.6802,N,00630.3372,W,1,8,1.03,61.7,M,55.2,M,,*76", 1.0, -1.0),
        ("$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47", 1.0, 1.0),
    ];

    for (line, lat_sign, lon_sign) in cases {
        let Ok(DecodedRecord::Gga(gga)) = Nmea0183::default().parse(line) else {
            panic!("Failed: {line:?}");
        };

        let location = gga.data().unwrap().location;
        assert_eq!(location.latitude.signum(), lat_sign, "Failed: {line:?}");
        assert_eq!(location.longitude.signum(), lon_sign, "Failed: {line:?}");
    }
}

#[test]
fn test_parse_is_idempotent() {
    let parser = pivot_80();
    let lines = [RMC_ACTIVE, RMC_VOID, GGA_VALID, GGA_INVALID, GSA_TWO_SATS, "$GPXXX,1,2,3*53"];

    for line in lines {
        assert_eq!(parser.parse(line), parser.parse(line), "Failed: {line:?}");
    }
}

#[test]
fn test_stream_continues_after_errors() {
    let stream = [
        "GPRMC,123519,A,48", // partial first line
        RMC_VOID,
        "$GPXXX,1,2,3*53",
        GGA_VALID,
        "$GPGSA,A,3,04,,,,,,,,,,17,,2.5,1.3,2.1*00",
        GSA_TWO_SATS,
    ];

    let parser = Nmea0183::default();
    let decoded: Vec<_> = stream
        .iter()
        .filter_map(|line| parser.parse(line).ok())
        .map(|record| record.sentence_type())
        .collect();

    assert_eq!(
        decoded,
        [SentenceType::Rmc, SentenceType::Gga, SentenceType::Gsa]
    );
}

#[test]
fn test_lenient_checksum_case() {
    let line = "$GPGSA,A,1,,,,,,,,,,,,,99.9,99.9,99.9*09";
    let lower = "$GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W*6a";

    let lenient = Nmea0183::new(Config {
        checksum_case: ChecksumCase::Lenient,
        ..Config::default()
    });

    assert!(lenient.parse(line).is_ok());
    assert!(lenient.parse(lower).is_ok());
    assert!(matches!(
        Nmea0183::default().parse(lower),
        Err(Error::ChecksumMismatch { .. })
    ));
}

#[test]
fn test_shared_between_threads() {
    let parser = &pivot_80();
    let lines = [RMC_ACTIVE, GGA_VALID, GSA_TWO_SATS];

    std::thread::scope(|scope| {
        let handles: Vec<_> = lines
            .iter()
            .map(|line| scope.spawn(move || parser.parse(line).map(|record| record.sentence_type())))
            .collect();

        let decoded: Vec<_> = handles
            .into_iter()
            .map(|handle| handle.join().unwrap().unwrap())
            .collect();

        assert_eq!(
            decoded,
            [SentenceType::Rmc, SentenceType::Gga, SentenceType::Gsa]
        );
    });
}
