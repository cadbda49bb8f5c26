use catalog_app::{context::AppContext, database::DatabaseSettings, domain::schema::SchemaService};
use clap::Args;

#[derive(Debug, Args)]
pub(crate) struct SampleArgs {
    #[command(flatten)]
    database: DatabaseSettings,

    /// Number of rows to print
    #[arg(long, default_value_t = 2)]
    limit: u32,

    /// Print one JSON object per row
    #[arg(long)]
    json: bool,
}

pub(crate) async fn run(args: SampleArgs) -> Result<(), String> {
    let context = AppContext::new(&args.database);

    let samples = context
        .schema
        .sample_products(args.limit)
        .await
        .map_err(|error| format!("failed to fetch products: {error}"))?;

    if args.json {
        for sample in &samples {
            let line = serde_json::to_string(sample)
                .map_err(|error| format!("failed to encode product: {error}"))?;

            println!("{line}");
        }

        return Ok(());
    }

    if samples.is_empty() {
        println!("no products found");
        return Ok(());
    }

    println!("product_id\tstatus\tproduct_name");

    for sample in samples {
        println!("{sample}");
    }

    Ok(())
}
