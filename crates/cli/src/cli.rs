use clap::{ArgAction, Args, Parser, Subcommand};
use dns_admin_domain::ConfigLayer;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dns-admin")]
#[command(version)]
#[command(about = "Administration of a BIND name server fleet backed by PostgreSQL")]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Flags shared by every subcommand. Each one left out defers to the
/// configuration file, then to the built-in default.
#[derive(Args)]
pub struct GlobalArgs {
    /// Configuration file (default: /etc/dns-admin/dns-admin.toml if present)
    #[arg(short = 'c', long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Host of the PostgreSQL server
    #[arg(long, global = true, value_name = "HOST")]
    pub db_host: Option<String>,

    /// TCP port of the PostgreSQL server
    #[arg(long, global = true, value_name = "PORT")]
    pub db_port: Option<String>,

    /// Database schema holding the DNS tables
    #[arg(long, global = true, value_name = "SCHEMA")]
    pub db_schema: Option<String>,

    /// Database user
    #[arg(short = 'U', long, global = true, value_name = "USER")]
    pub db_user: Option<String>,

    /// Database password (otherwise looked up in the password file)
    #[arg(
        long,
        global = true,
        value_name = "PASSWORD",
        env = "DNS_ADMIN_DB_PASSWORD",
        hide_env_values = true
    )]
    pub db_password: Option<String>,

    /// Directory of the BIND configuration
    #[arg(long, global = true, value_name = "DIR")]
    pub config_dir: Option<String>,

    /// Working directory of BIND
    #[arg(long, global = true, value_name = "DIR")]
    pub bind_dir: Option<String>,

    /// Directory of the BIND log files
    #[arg(long, global = true, value_name = "DIR")]
    pub log_dir: Option<String>,

    /// Only show what would be changed (`--simulate=false` overrides the file)
    #[arg(
        short = 's',
        long,
        global = true,
        value_name = "BOOL",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    pub simulate: Option<String>,

    /// Timeout in seconds for connecting to the database
    #[arg(long, global = true, value_name = "SECONDS")]
    pub timeout: Option<String>,
}

impl GlobalArgs {
    /// The command-line layer of the configuration.
    pub fn config_layer(&self) -> ConfigLayer {
        ConfigLayer {
            db_host: self.db_host.clone(),
            db_port: self.db_port.clone(),
            db_schema: self.db_schema.clone(),
            db_user: self.db_user.clone(),
            db_password: self.db_password.clone(),
            config_dir: self.config_dir.clone(),
            bind_dir: self.bind_dir.clone(),
            log_dir: self.log_dir.clone(),
            simulate: self.simulate.clone(),
            timeout: self.timeout.clone(),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the version of the deployed database schema
    SchemaVersion,

    /// Print the effective configuration
    Config {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Inspect managed name servers
    #[command(subcommand)]
    Ns(NsCommand),
}

#[derive(Subcommand, Debug)]
pub enum NsCommand {
    /// List all name servers
    List,

    /// Show one name server
    Show {
        /// Name of the name server
        name: String,
    },

    /// Validate name server fields without touching the database
    Check(NsCheckArgs),
}

/// Raw name server fields; every one is optional here so that missing
/// values are reported by the entity validation.
#[derive(Args, Debug, Default)]
pub struct NsCheckArgs {
    #[arg(long)]
    pub id: Option<String>,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub fqdn: Option<String>,

    #[arg(long)]
    pub admin_user: Option<String>,

    #[arg(long)]
    pub mgmt_address: Option<String>,

    /// BIND configuration directory on the name server
    #[arg(long = "ns-config-dir")]
    pub ns_config_dir: Option<String>,

    /// BIND working directory on the name server
    #[arg(long = "ns-bind-dir")]
    pub ns_bind_dir: Option<String>,

    #[arg(long)]
    pub enabled: Option<String>,

    #[arg(long)]
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use dns_admin_domain::{ConfigDefaults, EffectiveConfig};

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_missing_subcommand_parses_to_none() {
        let cli = Cli::try_parse_from(["dns-admin", "--db-host", "db1"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_unset_flags_stay_absent_in_layer() {
        let cli = Cli::try_parse_from(["dns-admin", "schema-version"]).unwrap();
        let layer = cli.global.config_layer();

        assert_eq!(layer.db_host, None);
        assert_eq!(layer.db_port, None);
        assert_eq!(layer.simulate, None);
        assert_eq!(layer.timeout, None);
    }

    #[test]
    fn test_flags_after_subcommand_reach_layer() {
        let cli = Cli::try_parse_from([
            "dns-admin",
            "ns",
            "list",
            "--db-port",
            "65536",
            "--simulate",
            "-U",
            "ops",
        ])
        .unwrap();
        let layer = cli.global.config_layer();

        assert_eq!(layer.db_port.as_deref(), Some("65536"));
        assert_eq!(layer.simulate.as_deref(), Some("true"));
        assert_eq!(layer.db_user.as_deref(), Some("ops"));
        assert!(matches!(cli.command, Some(Command::Ns(NsCommand::List))));
    }

    #[test]
    fn test_simulate_takes_an_optional_value() {
        let cli = Cli::try_parse_from(["dns-admin", "--simulate=false", "config"]).unwrap();
        assert_eq!(cli.global.config_layer().simulate.as_deref(), Some("false"));
        assert!(matches!(cli.command, Some(Command::Config { json: false })));

        let cli = Cli::try_parse_from(["dns-admin", "-s", "config"]).unwrap();
        assert_eq!(cli.global.config_layer().simulate.as_deref(), Some("true"));
        assert!(matches!(cli.command, Some(Command::Config { .. })));
    }

    #[test]
    fn test_simulate_false_on_command_line_beats_file() {
        let cli = Cli::try_parse_from(["dns-admin", "schema-version", "--simulate=no"]).unwrap();
        let file = ConfigLayer {
            simulate: Some("true".to_string()),
            ..Default::default()
        };

        let config =
            EffectiveConfig::resolve(&ConfigDefaults::default(), &file, &cli.global.config_layer())
                .unwrap();

        assert!(!config.simulate);
    }

    #[test]
    fn test_ns_check_fields_are_optional() {
        let cli = Cli::try_parse_from(["dns-admin", "ns", "check", "--name", "ns1"]).unwrap();

        match cli.command {
            Some(Command::Ns(NsCommand::Check(args))) => {
                assert_eq!(args.name.as_deref(), Some("ns1"));
                assert_eq!(args.fqdn, None);
            }
            _ => panic!("expected ns check"),
        }
    }
}
