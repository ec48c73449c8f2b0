use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use selene_search::date_of_vernal_equinox;
use selene_time::{CalendarTime, jd_to_calendar};

/// Julian Date of the Unix epoch (1970 Jan 1.0 UT).
const UNIX_EPOCH_JD: f64 = 2_440_587.5;

#[derive(Parser)]
#[command(name = "selene", about = "Vernal equinox lookup")]
struct Cli {
    /// Year to compute the equinox for (default: current year)
    year: Option<i32>,
}

fn current_year() -> i32 {
    let unix_seconds = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64())
        .unwrap_or(0.0);
    let jd = unix_seconds / 86_400.0 + UNIX_EPOCH_JD;
    jd_to_calendar(jd).0
}

fn main() {
    let cli = Cli::parse();
    let year = cli.year.unwrap_or_else(current_year);
    let equinox = date_of_vernal_equinox(year);
    println!(
        "Vernal equinox {year}: {} UT",
        CalendarTime::from_jd(equinox.as_jd_ut())
    );
}
