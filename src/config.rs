use anyhow::{Context, Result};
use clap::Parser;
use std::{env, fmt};

/// Centralized application configuration.
/// Combines environment variables and CLI arguments.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: DatabaseConfig,
    pub minio: MinioConfig,
}

/// PostgreSQL connection target.
#[derive(Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub user: String,
    pub host: String,
    pub port: u16,
    pub name: String,
    pub password: String,
}

/// MinIO (S3-compatible) connection target.
#[derive(Clone, PartialEq, Eq)]
pub struct MinioConfig {
    pub endpoint: String,
    pub port: u16,
    pub use_ssl: bool,
    pub access_key: String,
    pub secret_key: String,
    pub region: String,
}

/// Command-line + environment configuration.
#[derive(Parser, Debug, Default)]
#[command(author, version, about = "Data API: database time and MinIO buckets as JSON")]
pub struct Args {
    /// Host to bind to (overrides APP_HOST)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind to (overrides APP_PORT)
    #[arg(long)]
    pub port: Option<u16>,

    /// Database user (overrides DB_USER)
    #[arg(long)]
    pub db_user: Option<String>,

    /// Database host (overrides DB_HOST)
    #[arg(long)]
    pub db_host: Option<String>,

    /// Database port (overrides DB_PORT)
    #[arg(long)]
    pub db_port: Option<u16>,

    /// Database name (overrides DB_NAME)
    #[arg(long)]
    pub db_name: Option<String>,

    /// Database password (overrides DB_PASSWORD)
    #[arg(long)]
    pub db_password: Option<String>,

    /// MinIO host name (overrides MINIO_ENDPOINT)
    #[arg(long)]
    pub minio_endpoint: Option<String>,

    /// MinIO port (overrides MINIO_PORT)
    #[arg(long)]
    pub minio_port: Option<u16>,

    /// Connect to MinIO over TLS, `true` or `false` (overrides MINIO_USE_SSL)
    #[arg(long)]
    pub minio_use_ssl: Option<bool>,

    /// MinIO access key (overrides MINIO_ACCESS_KEY)
    #[arg(long)]
    pub minio_access_key: Option<String>,

    /// MinIO secret key (overrides MINIO_SECRET_KEY)
    #[arg(long)]
    pub minio_secret_key: Option<String>,

    /// Region sent with signed MinIO requests (overrides MINIO_REGION)
    #[arg(long)]
    pub minio_region: Option<String>,
}

impl AppConfig {
    /// Parse environment variables + CLI args into AppConfig.
    pub fn from_env_and_args() -> Result<Self> {
        let args = Args::parse();
        Self::resolve(args, |key| env::var(key).ok())
    }

    /// Merge parsed arguments over values produced by `lookup`, falling back
    /// to the built-in defaults. Empty variables count as unset.
    pub fn resolve<F>(args: Args, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.is_empty());
        let text = |key: &str, default: &str| var(key).unwrap_or_else(|| default.to_string());
        let port = |key: &str, default: u16| -> Result<u16> {
            match var(key) {
                Some(value) => value
                    .trim()
                    .parse::<u16>()
                    .with_context(|| format!("parsing {} value `{}`", key, value)),
                None => Ok(default),
            }
        };

        // --- Environment fallback ---
        let env_host = text("APP_HOST", "0.0.0.0");
        let env_port = port("APP_PORT", 3000)?;
        let env_db_port = port("DB_PORT", 5432)?;
        let env_minio_port = port("MINIO_PORT", 9000)?;
        // Anything other than the literal `true` leaves TLS off.
        let env_use_ssl = var("MINIO_USE_SSL").is_some_and(|value| value == "true");

        // --- Merge ---
        let database = DatabaseConfig {
            user: args.db_user.unwrap_or_else(|| text("DB_USER", "postgres")),
            host: args.db_host.unwrap_or_else(|| text("DB_HOST", "localhost")),
            port: args.db_port.unwrap_or(env_db_port),
            name: args.db_name.unwrap_or_else(|| text("DB_NAME", "postgres")),
            password: args
                .db_password
                .unwrap_or_else(|| text("DB_PASSWORD", "password")),
        };

        let minio = MinioConfig {
            endpoint: args
                .minio_endpoint
                .unwrap_or_else(|| text("MINIO_ENDPOINT", "localhost")),
            port: args.minio_port.unwrap_or(env_minio_port),
            use_ssl: args.minio_use_ssl.unwrap_or(env_use_ssl),
            access_key: args
                .minio_access_key
                .unwrap_or_else(|| text("MINIO_ACCESS_KEY", "minioadmin")),
            secret_key: args
                .minio_secret_key
                .unwrap_or_else(|| text("MINIO_SECRET_KEY", "minioadmin")),
            region: args
                .minio_region
                .unwrap_or_else(|| text("MINIO_REGION", "us-east-1")),
        };

        Ok(Self {
            host: args.host.unwrap_or(env_host),
            port: args.port.unwrap_or(env_port),
            database,
            minio,
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Display-client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerConfig {
    pub api_url: String,
    pub title: String,
    pub json: bool,
}

/// Command-line + environment configuration for the viewer.
#[derive(Parser, Debug, Default)]
#[command(author, version, about = "Show the data served by the backend")]
pub struct ViewerArgs {
    /// Base URL of the API service (overrides API_URL)
    #[arg(long)]
    pub api_url: Option<String>,

    /// Page heading (overrides VIEWER_TITLE)
    #[arg(long)]
    pub title: Option<String>,

    /// Print the raw JSON instead of the HTML view
    #[arg(long)]
    pub json: bool,
}

impl ViewerConfig {
    /// Parse environment variables + CLI args into ViewerConfig.
    pub fn from_env_and_args() -> Self {
        let args = ViewerArgs::parse();
        Self::resolve(args, |key| env::var(key).ok())
    }

    /// Same precedence as `AppConfig::resolve`: CLI, then non-empty
    /// variables, then defaults.
    pub fn resolve<F>(args: ViewerArgs, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let text = |key: &str, default: &str| {
            lookup(key)
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        Self {
            api_url: args
                .api_url
                .unwrap_or_else(|| text("API_URL", "http://localhost:3000")),
            title: args.title.unwrap_or_else(|| text("VIEWER_TITLE", "3-tier-app")),
            json: args.json,
        }
    }
}

impl MinioConfig {
    /// Base URL of the MinIO API, e.g. `http://localhost:9000`.
    pub fn endpoint_url(&self) -> String {
        let scheme = if self.use_ssl { "https" } else { "http" };
        format!("{}://{}:{}", scheme, self.endpoint, self.port)
    }
}

// Credentials stay out of startup logs.
impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("user", &self.user)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("name", &self.name)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl fmt::Debug for MinioConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MinioConfig")
            .field("endpoint", &self.endpoint)
            .field("port", &self.port)
            .field("use_ssl", &self.use_ssl)
            .field("access_key", &self.access_key)
            .field("secret_key", &"<redacted>")
            .field("region", &self.region)
            .finish()
    }
}
