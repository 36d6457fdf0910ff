use clap::Parser;
use ladle_core::domain::common::{DatabaseConfig, LadleConfig, ObjectStorageConfig};

#[derive(Debug, Clone, Parser)]
#[command(name = "ladle-api", about = "Recipe and nutrition management API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub database: DatabaseArgs,

    #[command(flatten)]
    pub storage: StorageArgs,

    /// Default tracing filter; overridden by RUST_LOG when set.
    #[arg(long, env = "LOG_FILTER", default_value = "info")]
    pub log_filter: String,

    /// Emit logs as JSON lines.
    #[arg(long, env = "LOG_JSON", default_value_t = false)]
    pub log_json: bool,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long, env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    /// Prefix every route is mounted under, e.g. "/api/v1".
    #[arg(long, env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long,
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct DatabaseArgs {
    #[arg(long, env = "DATABASE_HOST", default_value = "localhost")]
    pub database_host: String,

    #[arg(long, env = "DATABASE_PORT", default_value_t = 5432)]
    pub database_port: u16,

    #[arg(long, env = "DATABASE_USER", default_value = "ladle")]
    pub database_user: String,

    #[arg(long, env = "DATABASE_PASSWORD", default_value = "ladle")]
    pub database_password: String,

    #[arg(long, env = "DATABASE_NAME", default_value = "ladle")]
    pub database_name: String,
}

#[derive(Debug, Clone, clap::Args)]
pub struct StorageArgs {
    #[arg(long, env = "STORAGE_ENDPOINT", default_value = "http://localhost:9000")]
    pub storage_endpoint: String,

    #[arg(long, env = "STORAGE_REGION", default_value = "us-east-1")]
    pub storage_region: String,

    #[arg(long, env = "STORAGE_ACCESS_KEY", default_value = "minioadmin")]
    pub storage_access_key: String,

    #[arg(long, env = "STORAGE_SECRET_KEY", default_value = "minioadmin")]
    pub storage_secret_key: String,

    #[arg(long, env = "STORAGE_BUCKET", default_value = "ladle-recipes")]
    pub storage_bucket: String,

    /// Public base URL for uploaded objects when it differs from the
    /// storage endpoint (e.g. behind a CDN or reverse proxy).
    #[arg(long, env = "STORAGE_PUBLIC_BASE_URL")]
    pub storage_public_base_url: Option<String>,
}

impl From<Args> for LadleConfig {
    fn from(args: Args) -> Self {
        Self {
            database: DatabaseConfig {
                host: args.database.database_host,
                port: args.database.database_port,
                username: args.database.database_user,
                password: args.database.database_password,
                name: args.database.database_name,
            },
            object_storage: ObjectStorageConfig {
                endpoint: args.storage.storage_endpoint,
                region: args.storage.storage_region,
                access_key: args.storage.storage_access_key,
                secret_key: args.storage.storage_secret_key,
                bucket: args.storage.storage_bucket,
                public_base_url: args.storage.storage_public_base_url,
            },
        }
    }
}
