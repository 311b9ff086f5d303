use dns_admin_domain::EffectiveConfig;

pub fn show_config(config: &EffectiveConfig, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(config)?);
    } else {
        print!("{}", render(config));
    }
    Ok(())
}

fn render(config: &EffectiveConfig) -> String {
    let password = if config.has_password() {
        "********"
    } else {
        "<not set>"
    };

    format!(
        "db_host:     {}\n\
         db_port:     {}\n\
         db_schema:   {}\n\
         db_user:     {}\n\
         db_password: {}\n\
         config_dir:  {}\n\
         bind_dir:    {}\n\
         log_dir:     {}\n\
         simulate:    {}\n\
         timeout:     {}s\n",
        config.db_host,
        config.db_port,
        config.db_schema,
        config.db_user,
        password,
        config.config_dir.display(),
        config.bind_dir.display(),
        config.log_dir.display(),
        config.simulate,
        config.timeout,
    )
}
