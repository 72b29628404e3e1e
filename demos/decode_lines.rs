use std::io::{self, BufRead};

use env_logger::Env;
use nmea0183_fix::{Config, Nmea0183, nmea_content::CenturyRule};

/// Decodes NMEA 0183 lines from stdin, one record or error per line.
///
/// ```text
/// RUST_LOG=debug cargo run --example decode_lines < capture.nmea
/// ```
fn main() -> io::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let parser = Nmea0183::new(Config {
        century: CenturyRule::Pivot(80),
        ..Config::default()
    });

    let (mut decoded, mut skipped) = (0usize, 0usize);
    for line in io::stdin().lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match parser.parse(&line) {
            Ok(record) => {
                decoded += 1;
                println!("{record:?}");
            }
            Err(e) => {
                skipped += 1;
                println!("skipped: {e}");
            }
        }
    }

    log::info!("{decoded} decoded, {skipped} skipped");
    Ok(())
}
