//! Interactive selection of city, month and day.

use std::io::{BufRead, Write};
use std::str::FromStr;

use bikeshare_core::cities::City;
use bikeshare_core::error::{BikeshareError, Result};
use bikeshare_core::models::{DayFilter, MonthFilter, Selection};
use tracing::debug;

use crate::console::{rule, Console};

pub const GREETING: &str = "Hello! Let's explore some US bikeshare data!";
pub const CITY_PROMPT: &str = "Enter a city (chicago, new york city, washington): ";
pub const MONTH_PROMPT: &str = "Enter a month (all, january, february, ... , june): ";
pub const DAY_PROMPT: &str = "Enter a day of the week (all, monday, tuesday, ... sunday): ";

/// Whether an answer to a yes/no question means yes.
///
/// Only `yes` counts, in any casing and with surrounding whitespace
/// ignored. End-of-file (`None`) is a no.
pub fn is_yes(answer: Option<&str>) -> bool {
    answer.is_some_and(|a| a.trim().eq_ignore_ascii_case("yes"))
}

/// Ask `prompt` until the answer parses as `T`.
///
/// Invalid answers are simply asked again, without limit. Only end-of-file
/// ends the loop early, as [`BikeshareError::InputClosed`].
pub fn ask_until_valid<T, R, W>(console: &mut Console<R, W>, prompt: &str) -> Result<T>
where
    T: FromStr<Err = BikeshareError>,
    R: BufRead,
    W: Write,
{
    loop {
        let Some(answer) = console.ask(prompt)? else {
            return Err(BikeshareError::InputClosed);
        };
        match answer.parse::<T>() {
            Ok(value) => return Ok(value),
            Err(e) => debug!("Rejected answer {:?}: {}", answer, e),
        }
    }
}

/// Greet the user and collect a full [`Selection`].
///
/// Prints a rule and the normalised selection once all three answers are
/// valid.
pub fn get_filters<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<Selection> {
    console.say(GREETING)?;

    let city: City = ask_until_valid(console, CITY_PROMPT)?;
    let month: MonthFilter = ask_until_valid(console, MONTH_PROMPT)?;
    let day: DayFilter = ask_until_valid(console, DAY_PROMPT)?;

    let selection = Selection::new(city, month, day);
    console.say(&rule())?;
    console.say(&selection.to_string())?;
    Ok(selection)
}
