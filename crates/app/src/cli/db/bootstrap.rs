use catalog_app::{context::AppContext, database::DatabaseSettings, domain::schema::SchemaService};
use clap::Args;

#[derive(Debug, Args)]
pub(crate) struct BootstrapArgs {
    #[command(flatten)]
    database: DatabaseSettings,

    /// Print the outcome as JSON
    #[arg(long)]
    json: bool,
}

pub(crate) async fn run(args: BootstrapArgs) -> Result<(), String> {
    let context = AppContext::new(&args.database);

    let outcome = context
        .schema
        .bootstrap()
        .await
        .map_err(|error| format!("failed to bootstrap schema: {error}"))?;

    if args.json {
        let line = serde_json::to_string(&outcome)
            .map_err(|error| format!("failed to encode outcome: {error}"))?;

        println!("{line}");

        return Ok(());
    }

    println!("database: {}", args.database.name);
    println!("database_created: {}", yes_no(outcome.database_created));
    println!("seeded: {}", yes_no(outcome.seeded));

    Ok(())
}

fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}
