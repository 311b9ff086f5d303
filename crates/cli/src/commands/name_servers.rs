use anyhow::bail;
use dns_admin_application::ports::DbHandle;
use dns_admin_application::tables::NameServerTable;
use dns_admin_domain::{NameServer, NameServerFields};
use tracing::info;

use crate::cli::NsCheckArgs;

pub async fn list_name_servers<H: DbHandle + ?Sized>(handle: &mut H) -> anyhow::Result<()> {
    let mut table = NameServerTable::new(handle)?;
    let servers = table.fetch_all().await?;

    if servers.is_empty() {
        println!("No name servers found.");
        return Ok(());
    }

    println!(
        "{:>5}  {:<16} {:<32} {:<39} {:<8}",
        "ID", "NAME", "FQDN", "MGMT ADDRESS", "ENABLED"
    );
    for ns in &servers {
        println!("{}", summary_line(ns));
    }
    Ok(())
}

pub async fn show_name_server<H: DbHandle + ?Sized>(
    handle: &mut H,
    name: &str,
) -> anyhow::Result<()> {
    let mut table = NameServerTable::new(handle)?;

    match table.fetch_by_name(name).await? {
        Some(ns) => {
            print!("{}", details(&ns));
            Ok(())
        }
        None => bail!("name server '{}' not found", name),
    }
}

pub fn check_name_server(args: &NsCheckArgs) -> anyhow::Result<()> {
    let ns = NameServer::build(&fields_from_args(args))?;
    info!(id = ns.id, name = %ns.name, "Name server fields are valid");

    print!("{}", details(&ns));
    Ok(())
}

fn fields_from_args(args: &NsCheckArgs) -> NameServerFields {
    NameServerFields {
        id: args.id.clone(),
        name: args.name.clone(),
        fqdn: args.fqdn.clone(),
        admin_user: args.admin_user.clone(),
        mgmt_address: args.mgmt_address.clone(),
        config_dir: args.ns_config_dir.clone(),
        bind_dir: args.ns_bind_dir.clone(),
        enabled: args.enabled.clone(),
        description: args.description.clone(),
    }
}

fn summary_line(ns: &NameServer) -> String {
    format!(
        "{:>5}  {:<16} {:<32} {:<39} {:<8}",
        ns.id,
        ns.name,
        ns.fqdn,
        ns.mgmt_address,
        if ns.enabled { "yes" } else { "no" }
    )
}

fn details(ns: &NameServer) -> String {
    format!(
        "id:           {}\n\
         name:         {}\n\
         fqdn:         {}\n\
         admin user:   {}\n\
         mgmt address: {}\n\
         config dir:   {}\n\
         bind dir:     {}\n\
         enabled:      {}\n\
         description:  {}\n",
        ns.id,
        ns.name,
        ns.fqdn,
        ns.admin_user,
        ns.mgmt_address,
        ns.config_dir.display(),
        ns.bind_dir.display(),
        ns.enabled,
        ns.description.as_deref().unwrap_or("-"),
    )
}
