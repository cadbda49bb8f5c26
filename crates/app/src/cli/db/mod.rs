use clap::{Args, Subcommand};

mod bootstrap;
mod sample;

#[derive(Debug, Args)]
pub(crate) struct DbCommand {
    #[command(subcommand)]
    command: DbSubcommand,
}

#[derive(Debug, Subcommand)]
enum DbSubcommand {
    /// Create the database, table and indexes, seeding an empty table
    Bootstrap(bootstrap::BootstrapArgs),

    /// Print the first products by id
    Sample(sample::SampleArgs),
}

pub(crate) async fn run(command: DbCommand) -> Result<(), String> {
    match command.command {
        DbSubcommand::Bootstrap(args) => bootstrap::run(args).await,
        DbSubcommand::Sample(args) => sample::run(args).await,
    }
}
