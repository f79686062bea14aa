use std::env;

use chrono::Datelike;

use shukujitsu::configuration::Configuration;
use shukujitsu::holidayerror::HolidayError;

fn main() -> Result<(), HolidayError> {
    env_logger::init();

    let config = match env::args().nth(1) {
        Some(config_path) => Configuration::from_reader(config_path)?,
        None => Configuration::new()
    };
    let calendar = config.build_calendar()?;
    for entry in calendar.list_all_entries() {
        println!("{}, {}, {}", entry.date(), entry.date().weekday(), entry.name());
    }
    Ok(())
}
