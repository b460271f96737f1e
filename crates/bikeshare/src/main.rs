mod bootstrap;

use anyhow::Result;
use bikeshare_core::cities::{City, CityRegistry};
use bikeshare_core::settings::Settings;
use bikeshare_runtime::session::SessionDriver;
use bikeshare_ui::console::Console;

fn main() -> Result<()> {
    let settings = Settings::load();

    bootstrap::setup_logging(&settings.log_level, settings.log_file.as_deref())?;

    tracing::info!("Bikeshare explorer v{} starting", env!("CARGO_PKG_VERSION"));

    let registry = CityRegistry::new(bootstrap::discover_data_dir(settings.data_dir.clone()));
    tracing::info!("Reading city data from {}", registry.data_dir().display());

    let available = registry.available();
    for city in City::ALL.into_iter().filter(|c| !available.contains(c)) {
        tracing::warn!(
            "No data file for {} at {}",
            city,
            registry.path_for(city).display()
        );
    }

    let mut session = SessionDriver::new(Console::stdio(), &registry);
    session.run()?;

    tracing::info!("Bikeshare explorer exiting");
    Ok(())
}
