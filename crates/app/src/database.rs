//! Database connection management

use std::time::Duration;

use clap::{Args, ValueEnum};
use sqlx::{
    Connection, PgConnection, PgPool,
    postgres::{PgConnectOptions, PgPoolOptions, PgSslMode},
    query, query_scalar,
};
use thiserror::Error;
use tracing::{debug, info};

/// SQLSTATE raised when `CREATE DATABASE` races another creator.
const DUPLICATE_DATABASE_SQLSTATE: &str = "42P04";

const DATABASE_EXISTS_SQL: &str = "SELECT EXISTS (SELECT 1 FROM pg_database WHERE datname = $1)";

const RESERVED_DATABASE_NAMES: [&str; 15] = [
    "user", "table", "select", "insert", "update", "delete", "drop", "create", "alter", "index",
    "database", "schema", "role", "grant", "revoke",
];

/// TLS negotiation mode for database connections.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SslMode {
    /// Never use TLS.
    Disable,

    /// Use TLS when the server supports it.
    Prefer,

    /// Refuse to connect without TLS.
    Require,
}

impl From<SslMode> for PgSslMode {
    fn from(mode: SslMode) -> Self {
        match mode {
            SslMode::Disable => PgSslMode::Disable,
            SslMode::Prefer => PgSslMode::Prefer,
            SslMode::Require => PgSslMode::Require,
        }
    }
}

/// Database connection settings.
#[derive(Clone, Debug, Args)]
pub struct DatabaseSettings {
    /// `PostgreSQL` host
    #[arg(
        id = "db_host",
        long = "db-host",
        env = "DB_HOST",
        default_value = "localhost"
    )]
    pub host: String,

    /// `PostgreSQL` port
    #[arg(id = "db_port", long = "db-port", env = "DB_PORT", default_value_t = 5432)]
    pub port: u16,

    /// `PostgreSQL` user
    #[arg(id = "db_user", long = "db-user", env = "DB_USER")]
    pub user: String,

    /// `PostgreSQL` password
    #[arg(
        id = "db_password",
        long = "db-password",
        env = "DB_PASSWORD",
        hide_env_values = true,
        default_value = ""
    )]
    pub password: String,

    /// Application database name
    #[arg(id = "db_name", long = "db-name", env = "DB_NAME")]
    pub name: String,

    /// Database to connect to when the application database must be created
    #[arg(
        id = "db_maintenance_name",
        long = "db-maintenance-name",
        env = "DB_MAINTENANCE_NAME",
        default_value = "postgres"
    )]
    pub maintenance_name: String,

    /// TLS mode (disable, prefer, require)
    #[arg(
        id = "db_ssl_mode",
        long = "db-ssl-mode",
        env = "DB_SSL_MODE",
        value_enum,
        default_value_t = SslMode::Prefer
    )]
    pub ssl_mode: SslMode,

    /// Maximum number of pooled connections
    #[arg(
        id = "db_max_connections",
        long = "db-max-connections",
        env = "DB_MAX_CONNECTIONS",
        default_value_t = 10
    )]
    pub max_connections: u32,

    /// Seconds an idle pooled connection is kept open
    #[arg(
        id = "db_idle_timeout_seconds",
        long = "db-idle-timeout-seconds",
        env = "DB_IDLE_TIMEOUT_SECONDS",
        default_value_t = 300
    )]
    pub idle_timeout_seconds: u64,
}

impl DatabaseSettings {
    /// Connection options for the application database.
    #[must_use]
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.name)
            .ssl_mode(self.ssl_mode.into())
    }
}

/// Errors raised while making sure the application database exists.
#[derive(Debug, Error)]
pub enum EnsureDatabaseError {
    #[error(transparent)]
    InvalidName(#[from] DatabaseNameError),

    #[error("failed to create database: {0}")]
    Sql(#[from] sqlx::Error),
}

/// Reasons a database name is refused.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DatabaseNameError {
    #[error("database name must be 1-63 characters long")]
    Length,

    #[error("database name must start with a letter or underscore")]
    InvalidStart,

    #[error("database name can only contain letters, digits, underscores, and dollar signs")]
    InvalidCharacters,

    #[error("database name '{0}' is a reserved word")]
    Reserved(String),
}

/// Lazily connected database handle shared by every service.
#[derive(Debug, Clone)]
pub struct Db {
    pool: PgPool,
    maintenance: PgConnectOptions,
    name: String,
}

impl Db {
    /// Build a pool that opens connections on first use.
    #[must_use]
    pub fn lazy(settings: &DatabaseSettings) -> Self {
        let options = settings.connect_options();

        let pool = PgPoolOptions::new()
            .max_connections(settings.max_connections)
            .idle_timeout(Duration::from_secs(settings.idle_timeout_seconds))
            .connect_lazy_with(options.clone());

        debug!(
            host = %settings.host,
            port = settings.port,
            database = %settings.name,
            max_connections = settings.max_connections,
            "configured lazy database pool"
        );

        Self {
            pool,
            maintenance: options.database(&settings.maintenance_name),
            name: settings.name.clone(),
        }
    }

    /// Returns the underlying connection pool.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Name of the application database.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Create the application database when it does not exist yet.
    ///
    /// Returns `true` when the database was created by this call.
    ///
    /// # Errors
    ///
    /// Returns an error when the name is invalid or the maintenance connection fails.
    pub async fn ensure_database(&self) -> Result<bool, EnsureDatabaseError> {
        validate_database_name(&self.name)?;

        let mut conn = PgConnection::connect_with(&self.maintenance).await?;

        let exists: bool = query_scalar(DATABASE_EXISTS_SQL)
            .bind(&self.name)
            .fetch_one(&mut conn)
            .await?;

        if exists {
            conn.close().await?;

            return Ok(false);
        }

        // Identifiers cannot be bound, so quote server-side before interpolating.
        let database_ident: String = query_scalar("SELECT quote_ident($1)")
            .bind(&self.name)
            .fetch_one(&mut conn)
            .await?;

        let created = match query(&format!("CREATE DATABASE {database_ident}"))
            .execute(&mut conn)
            .await
        {
            Ok(_) => true,
            Err(sqlx::Error::Database(error))
                if error.code().as_deref() == Some(DUPLICATE_DATABASE_SQLSTATE) =>
            {
                false
            }
            Err(error) => return Err(error.into()),
        };

        conn.close().await?;

        if created {
            info!(database = %self.name, "created database");
        }

        Ok(created)
    }
}

/// Validate a database name before it is used in DDL.
///
/// Names must be 1-63 characters, start with a letter or underscore, contain only
/// letters, digits, underscores and dollar signs, and not be a common reserved word.
///
/// # Errors
///
/// Returns the first rule the name breaks.
pub fn validate_database_name(name: &str) -> Result<(), DatabaseNameError> {
    if name.is_empty() || name.len() > 63 {
        return Err(DatabaseNameError::Length);
    }

    if !name
        .chars()
        .next()
        .is_some_and(|first| first.is_ascii_alphabetic() || first == '_')
    {
        return Err(DatabaseNameError::InvalidStart);
    }

    if !name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
    {
        return Err(DatabaseNameError::InvalidCharacters);
    }

    if RESERVED_DATABASE_NAMES
        .iter()
        .any(|&word| name.eq_ignore_ascii_case(word))
    {
        return Err(DatabaseNameError::Reserved(name.to_string()));
    }

    Ok(())
}
