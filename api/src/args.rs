use assetdesk_core::domain::common::{
    DatabaseConfig, IdentityStrategy, InventoryConfig, QrConfig,
};
use clap::Parser;
use url::Url;

#[derive(Debug, Clone, Parser)]
#[command(name = "assetdesk-api", version, about = "Device inventory API with QR labels")]
pub struct Args {
    #[command(flatten)]
    pub db: DatabaseArgs,

    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub qr: QrArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(clap::Args, Debug, Clone)]
pub struct DatabaseArgs {
    #[arg(id = "database_host", long = "database-host", env = "DATABASE_HOST", default_value = "localhost")]
    pub host: String,

    #[arg(id = "database_port", long = "database-port", env = "DATABASE_PORT", default_value_t = 5432)]
    pub port: u16,

    #[arg(long = "database-user", env = "DATABASE_USER", default_value = "postgres")]
    pub user: String,

    #[arg(long = "database-password", env = "DATABASE_PASSWORD", default_value = "postgres")]
    pub password: String,

    #[arg(long = "database-name", env = "DATABASE_NAME", default_value = "assetdesk")]
    pub name: String,
}

#[derive(clap::Args, Debug, Clone)]
pub struct ServerArgs {
    #[arg(id = "server_host", long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(id = "server_port", long = "server-port", env = "PORT", default_value_t = 5000)]
    pub port: u16,

    /// Prefix for every route, e.g. `/inventory` behind a reverse proxy.
    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(clap::Args, Debug, Clone)]
pub struct QrArgs {
    /// Origin of the public device pages encoded into QR codes.
    #[arg(
        long = "public-base-url",
        env = "PUBLIC_BASE_URL",
        default_value = "http://localhost:5173",
        value_parser = parse_base_url
    )]
    pub public_base_url: String,

    /// Attribute encoded into QR links: `code` or `id`.
    #[arg(long = "qr-identity", env = "QR_IDENTITY", default_value = "code")]
    pub identity: IdentityStrategy,

    #[arg(long = "qr-size", env = "QR_SIZE", default_value_t = 240)]
    pub size: u32,
}

#[derive(clap::Args, Debug, Clone)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

fn parse_base_url(value: &str) -> Result<String, String> {
    let url = Url::parse(value).map_err(|e| format!("invalid public base url '{value}': {e}"))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(format!("public base url must be http(s), got '{}'", url.scheme()));
    }

    Ok(value.trim_end_matches('/').to_string())
}

impl From<Args> for InventoryConfig {
    fn from(args: Args) -> Self {
        let mut qr = QrConfig::new(args.qr.public_base_url, args.qr.identity);
        qr.size = args.qr.size;

        InventoryConfig {
            database: DatabaseConfig {
                host: args.db.host,
                port: args.db.port,
                username: args.db.user,
                password: args.db.password,
                name: args.db.name,
            },
            qr,
        }
    }
}
