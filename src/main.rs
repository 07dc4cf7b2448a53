use farrell::config::Config;
use farrell::utils::print_reflectance_summary;

use std::env;

const DEFAULT_CONFIG: &str = "./data/config/farrell.json";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config_path = env::args().nth(1).unwrap_or_else(|| DEFAULT_CONFIG.to_string());

    log::info!("Loading configuration from {}", config_path);
    let config = Config::from_file(&config_path)?;

    let rd = config.compute_rd()?;
    let summary = print_reflectance_summary(&config, &rd)?;

    if summary.non_finite() > 0 {
        log::warn!(
            "{} of {} reflectance values are not finite, check mua, musp and n",
            summary.non_finite(),
            summary.count
        );
    }

    log::info!("Computed {} reflectance values", summary.count);

    Ok(())
}
