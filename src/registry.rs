//! # Command Dispatch
//!
//! Maps command tokens (`GPRMC`, `GPGGA`, ...) to sentence decoders.

use std::collections::HashMap;

use log::debug;

use crate::{
    Config, DecodedRecord, Error,
    nmea_content::sentences::{decode_gga, decode_gsa, decode_rmc},
    parsing::Fields,
};

/// Signature of a sentence decoder.
///
/// A decoder receives the fields that follow the command token and the active
/// [`Config`], and either builds a record or reports why it could not.
pub type DecodeFn = for<'a> fn(&Fields<'a>, &Config) -> Result<DecodedRecord<'a>, Error<'a>>;

/// An explicit table of command token to decoder.
///
/// [`Registry::default`] knows the three built-in sentences. Further tokens can
/// be routed to the same decoders, e.g. a receiver that reports `GNRMC`:
///
/// ```rust
/// use nmea0183_fix::{Config, Nmea0183, Registry, nmea_content::sentences::decode_rmc};
///
/// let mut registry = Registry::default();
/// registry.register("GNRMC", decode_rmc);
///
/// let parser = Nmea0183::with_registry(Config::default(), registry);
/// assert!(parser.parse("$GNRMC,123519,V,,,,,,,230394,,*2D").is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct Registry {
    decoders: HashMap<String, DecodeFn>,
}

impl Default for Registry {
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register("GPRMC", decode_rmc);
        registry.register("GPGGA", decode_gga);
        registry.register("GPGSA", decode_gsa);
        registry
    }
}

impl Registry {
    /// Creates a registry without any decoder.
    pub fn empty() -> Self {
        Self {
            decoders: HashMap::new(),
        }
    }

    /// Registers `decoder` for `command`, returning the decoder it replaces.
    pub fn register(&mut self, command: impl Into<String>, decoder: DecodeFn) -> Option<DecodeFn> {
        self.decoders.insert(command.into(), decoder)
    }

    pub fn contains(&self, command: &str) -> bool {
        self.decoders.contains_key(command)
    }

    /// Registered command tokens, in no particular order.
    pub fn commands(&self) -> impl Iterator<Item = &str> {
        self.decoders.keys().map(String::as_str)
    }

    /// Splits a verified body into fields and hands them to the decoder
    /// registered for its command token.
    ///
    /// # Errors
    ///
    /// - [`Error::UnknownCommand`] if no decoder is registered for the token
    /// - [`Error::MalformedSentence`] if a registered command has too many fields
    /// - any error returned by the decoder
    pub fn dispatch<'a>(
        &self,
        body: &'a str,
        config: &Config,
    ) -> Result<DecodedRecord<'a>, Error<'a>> {
        let command = body.split(',').next().unwrap_or_default();

        let Some(decode) = self.decoders.get(command) else {
            debug!("no decoder registered for command {command:?}");
            return Err(Error::UnknownCommand(command));
        };

        decode(&Fields::split(body)?, config)
    }
}
