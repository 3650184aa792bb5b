use netbox_dns_domain::{CliOverrides, Config};
use tracing::info;

pub fn load_config(
    config_path: Option<&str>,
    cli_overrides: CliOverrides,
) -> anyhow::Result<Config> {
    let config = Config::load(config_path, cli_overrides)?;
    config.validate()?;
    Ok(config)
}

/// Logged once the subscriber exists; the token is never printed.
pub fn log_config(config_path: Option<&str>, config: &Config) {
    info!(
        config_file = config_path.unwrap_or("default"),
        url = %config.ipam.url,
        cache_ttl_secs = config.ipam.cache_ttl,
        max_attempts = config.ipam.max_attempts,
        token_set = !config.ipam.token.is_empty(),
        "Configuration loaded"
    );
}
