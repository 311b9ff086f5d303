use dns_admin_application::ports::DbHandle;
use dns_admin_application::queries::SchemaVersionQuery;

pub async fn print_schema_version<H: DbHandle + ?Sized>(handle: &mut H) -> anyhow::Result<()> {
    let version = SchemaVersionQuery::get(handle).await?;
    println!("{version}");
    Ok(())
}
