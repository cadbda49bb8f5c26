use clap::{Parser, Subcommand};

mod db;

#[derive(Debug, Parser)]
#[command(name = "catalog-app", about = "Catalog CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Db(db::DbCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Db(command) => db::run(command).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_sample_limit_defaults_to_two() -> testresult::TestResult {
        let cli = Cli::try_parse_from([
            "catalog-app",
            "db",
            "sample",
            "--db-user",
            "catalog",
            "--db-name",
            "catalog",
        ])?;

        assert!(
            format!("{cli:?}").contains("limit: 2"),
            "unexpected parse: {cli:?}"
        );

        Ok(())
    }
}
