use crate::error::{BikeshareError, Result};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Cities with a published trip-data file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

impl City {
    /// Every supported city, in prompt order.
    pub const ALL: [City; 3] = [City::Chicago, City::NewYorkCity, City::Washington];

    /// The canonical lowercase name, as typed at the prompt.
    pub fn as_str(&self) -> &'static str {
        match self {
            City::Chicago => "chicago",
            City::NewYorkCity => "new york city",
            City::Washington => "washington",
        }
    }

    /// File name of the city's CSV inside the data directory.
    pub fn default_file_name(&self) -> &'static str {
        match self {
            City::Chicago => "chicago.csv",
            City::NewYorkCity => "new_york_city.csv",
            City::Washington => "washington.csv",
        }
    }
}

impl FromStr for City {
    type Err = BikeshareError;

    /// Case-insensitive construction from a string slice.
    ///
    /// Surrounding whitespace is ignored; inner spacing must match exactly
    /// (`"new york city"`).
    fn from_str(value: &str) -> Result<Self> {
        let normalised = value.trim().to_lowercase();
        City::ALL
            .into_iter()
            .find(|c| c.as_str() == normalised)
            .ok_or(BikeshareError::UnknownCity(normalised))
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── CityRegistry ──────────────────────────────────────────────────────────────

/// Read-only mapping from [`City`] to the CSV file holding its trips.
///
/// Built once at startup and handed to the loader by reference.
#[derive(Debug, Clone)]
pub struct CityRegistry {
    data_dir: PathBuf,
    /// Indexed by the `City` discriminant.
    files: [PathBuf; 3],
}

impl CityRegistry {
    /// Registry resolving every city to its default file name under `data_dir`.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        let data_dir = data_dir.into();
        let files = City::ALL.map(|c| data_dir.join(c.default_file_name()));
        Self { data_dir, files }
    }

    /// Directory the registry was built from.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Path of the CSV for `city`.
    pub fn path_for(&self, city: City) -> &Path {
        &self.files[city as usize]
    }

    /// Cities whose data file currently exists on disk.
    pub fn available(&self) -> Vec<City> {
        City::ALL
            .into_iter()
            .filter(|c| self.path_for(*c).is_file())
            .collect()
    }
}
