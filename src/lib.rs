//! # NMEA 0183 Fix Decoder
//!
//! This library decodes NMEA 0183 sentences with the format
//! `$CMD,D1,D2,...,Dn*CC` into typed fix records.
//!
//! Decoding happens in three steps:
//! - Framing and checksum verification of the raw line ([`verify`])
//! - Dispatch of the command token to a registered decoder ([`Registry`])
//! - Field decoding for `GPRMC`, `GPGGA` and `GPGSA` ([`nmea_content`])
//!
//! Every failure is reported as an [`Error`] value; a rejected line never
//! aborts the caller.
//!
//! ## Usage
//!
//! ```rust
//! use nmea0183_fix::{DecodedRecord, Nmea0183, nmea_content::RmcFix};
//!
//! let parser = Nmea0183::default();
//! let line = "$GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W*6A\r\n";
//!
//! match parser.parse(line) {
//!     Ok(DecodedRecord::Rmc(rmc)) => match rmc.fix {
//!         RmcFix::Active(data) => println!("{:?}", data.location),
//!         RmcFix::Void => println!("no fix"),
//!     },
//!     Ok(other) => println!("{other:?}"),
//!     Err(e) => println!("skipped: {e}"),
//! }
//! ```

pub mod error;
mod nmea0183;
pub mod nmea_content;
pub mod parsing;
mod registry;

pub use error::Error;
pub use nmea_content::{DecodedRecord, SentenceType};
pub use nmea0183::*;
pub use registry::{DecodeFn, Registry};

#[cfg(doctest)]
#[doc = include_str!("../README.md")]
struct README;
