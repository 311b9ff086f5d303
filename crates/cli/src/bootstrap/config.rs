use dns_admin_domain::{ConfigDefaults, EffectiveConfig};
use dns_admin_infrastructure::load_config_layer;
use tracing::info;

use crate::cli::GlobalArgs;

pub fn load_config(args: &GlobalArgs) -> anyhow::Result<EffectiveConfig> {
    let (file_layer, config_path) = load_config_layer(args.config.as_deref())?;
    let cli_layer = args.config_layer();

    let config = EffectiveConfig::resolve(&ConfigDefaults::default(), &file_layer, &cli_layer)?;

    let config_file = config_path
        .as_deref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "none".to_string());

    info!(
        config_file = %config_file,
        db_host = %config.db_host,
        db_port = config.db_port,
        db_schema = %config.db_schema,
        db_user = %config.db_user,
        simulate = config.simulate,
        "Configuration loaded"
    );

    Ok(config)
}
