//! The interactive session loop.
//!
//! One iteration collects a selection, loads and filters the city's trips,
//! prints the four reports, offers raw rows, then asks whether to start
//! over. Each iteration reloads its dataset from disk; nothing carries over.

use std::io::{BufRead, Write};

use bikeshare_core::cities::CityRegistry;
use bikeshare_core::error::Result;
use bikeshare_core::models::Selection;
use bikeshare_data::reader::load_data;
use bikeshare_ui::console::Console;
use bikeshare_ui::prompts::{get_filters, is_yes};
use bikeshare_ui::reports;
use bikeshare_ui::table_view::browse_rows;
use tracing::{debug, info};

pub const RESTART_PROMPT: &str = "\nWould you like to restart? Enter yes or no.\n";

/// Drives analysis passes over a console until the user declines to restart.
pub struct SessionDriver<'a, R, W> {
    console: Console<R, W>,
    registry: &'a CityRegistry,
    iterations: usize,
}

impl<'a, R: BufRead, W: Write> SessionDriver<'a, R, W> {
    pub fn new(console: Console<R, W>, registry: &'a CityRegistry) -> Self {
        Self {
            console,
            registry,
            iterations: 0,
        }
    }

    /// Run passes until the restart answer is anything but "yes".
    ///
    /// Load failures end the session with the error; invalid answers never
    /// do.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.run_once()?;

            let answer = self.console.ask(RESTART_PROMPT)?;
            if !is_yes(answer.as_deref()) {
                info!("Session finished after {} pass(es)", self.iterations);
                return Ok(());
            }
            debug!("Restarting session");
        }
    }

    /// One full pass: collect, load, report, browse.
    pub fn run_once(&mut self) -> Result<Selection> {
        let selection = get_filters(&mut self.console)?;
        info!("Selection: {}", selection);

        let dataset = load_data(self.registry, &selection)?;
        reports::all_stats(self.console.output(), &dataset)?;
        let pages = browse_rows(&mut self.console, &dataset)?;
        debug!("Browsed {} page(s) of raw trips", pages);

        self.iterations += 1;
        Ok(selection)
    }

    /// Completed passes so far.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    pub fn into_console(self) -> Console<R, W> {
        self.console
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bikeshare_core::cities::City;
    use bikeshare_core::error::BikeshareError;
    use bikeshare_core::models::{DayFilter, Month, MonthFilter};
    use bikeshare_ui::reports::{GENDER_ABSENT, NO_TRIPS};
    use bikeshare_ui::table_view::CONTINUE_PROMPT;
    use std::io::Cursor;
    use std::path::Path;
    use tempfile::TempDir;

    const CHICAGO: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
0,2017-01-01 09:07:57,2017-01-01 09:20:53,776,Canal St,Wells St,Customer,,
1,2017-03-02 10:00:00,2017-03-02 10:05:00,300,Canal St,Clark St,Subscriber,Male,1992.0
2,2017-03-02 17:15:00,2017-03-02 17:25:00,600,Wells St,Canal St,Subscriber,Female,1985.0
3,2017-03-09 17:00:00,2017-03-09 17:20:00,1200,Canal St,Wells St,Subscriber,Male,1992.0
4,2017-03-10 17:30:00,2017-03-10 17:40:00,600,Clark St,Canal St,Customer,,
5,2017-02-13 07:45:00,2017-02-13 08:00:00,900,Canal St,Wells St,Subscriber,Female,1970.0
";

    const WASHINGTON: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type
0,2017-06-21 08:36:34,2017-06-21 08:44:43,489,14th & Belmont St NW,15th & K St NW,Subscriber
";

    fn data_dir() -> TempDir {
        let tmp = TempDir::new().expect("tempdir");
        std::fs::write(tmp.path().join("chicago.csv"), CHICAGO).expect("write chicago");
        std::fs::write(tmp.path().join("washington.csv"), WASHINGTON).expect("write washington");
        tmp
    }

    fn run(dir: &Path, input: &str) -> (Result<()>, usize, String) {
        let registry = CityRegistry::new(dir);
        let console = Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        let mut driver = SessionDriver::new(console, &registry);
        let result = driver.run();
        let passes = driver.iterations();
        let out = String::from_utf8(driver.into_console().into_output()).unwrap();
        (result, passes, out)
    }

    #[test]
    fn test_single_pass_march_reports_month_three() {
        let dir = data_dir();
        let (result, passes, out) = run(dir.path(), "chicago\nmarch\nall\nno\nno\n");

        result.unwrap();
        assert_eq!(passes, 1);
        assert!(out.contains("chicago march all"));
        assert!(out.contains("The most common month is: 3 (March)"));
        assert!(out.contains("The most common day of week is: Thursday"));
        assert!(out.contains("Counts of gender:"));
        assert_eq!(out.matches(RESTART_PROMPT).count(), 1);
    }

    #[test]
    fn test_restart_yes_runs_another_pass() {
        let dir = data_dir();
        let input = "chicago\nall\nall\nno\nYES\nwashington\nall\nall\nno\nno\n";
        let (result, passes, out) = run(dir.path(), input);

        result.unwrap();
        assert_eq!(passes, 2);
        assert!(out.contains("washington all all"));
        assert!(out.contains(GENDER_ABSENT));
        assert_eq!(out.matches(RESTART_PROMPT).count(), 2);
    }

    #[test]
    fn test_restart_answer_is_trimmed() {
        let dir = data_dir();
        let input = "washington\nall\nall\nno\n  Yes \nwashington\nall\nall\nno\ny\n";
        let (result, passes, _) = run(dir.path(), input);

        result.unwrap();
        assert_eq!(passes, 2);
    }

    #[test]
    fn test_invalid_answers_are_reprompted_within_a_pass() {
        let dir = data_dir();
        let input = "paris\nChicago\nseptember\nMarch\nfri\nFriday\nno\nno\n";
        let (result, passes, out) = run(dir.path(), input);

        result.unwrap();
        assert_eq!(passes, 1);
        assert!(out.contains("chicago march friday"));
        assert!(out.contains("The most common day of week is: Friday"));
    }

    #[test]
    fn test_empty_selection_still_completes_pass() {
        let dir = data_dir();
        let (result, passes, out) = run(dir.path(), "chicago\njune\nall\nyes\nno\nno\n");

        result.unwrap();
        assert_eq!(passes, 1);
        assert_eq!(out.matches(NO_TRIPS).count(), 4);
        // "yes" on an empty table shows nothing and asks to continue.
        assert_eq!(out.matches(CONTINUE_PROMPT).count(), 1);
    }

    #[test]
    fn test_missing_city_file_ends_session_with_error() {
        let dir = data_dir();
        let (result, passes, _) = run(dir.path(), "new york city\nall\nall\n");

        match result {
            Err(BikeshareError::FileRead { path, .. }) => {
                assert!(path.ends_with("new_york_city.csv"));
            }
            other => panic!("expected FileRead, got {other:?}"),
        }
        assert_eq!(passes, 0);
    }

    #[test]
    fn test_eof_at_restart_prompt_ends_normally() {
        let dir = data_dir();
        let (result, passes, _) = run(dir.path(), "washington\nall\nall\nno\n");
        result.unwrap();
        assert_eq!(passes, 1);
    }

    #[test]
    fn test_run_once_returns_selection() {
        let dir = data_dir();
        let registry = CityRegistry::new(dir.path());
        let console = Console::new(Cursor::new(b"chicago\nfebruary\nmonday\nno\n".to_vec()), Vec::new());
        let mut driver = SessionDriver::new(console, &registry);

        let selection = driver.run_once().unwrap();
        assert_eq!(selection.city, City::Chicago);
        assert_eq!(selection.month, MonthFilter::Only(Month::February));
        assert_eq!(selection.day, "monday".parse::<DayFilter>().unwrap());
    }
}
