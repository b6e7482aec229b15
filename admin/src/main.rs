use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use assetdesk_admin::{
    client::{ApiClient, ClientError},
    form::DeviceForm,
    label::{label_file_name, render_label},
    state::{DeviceListState, SortKey},
};
use assetdesk_core::domain::device::{Device, DeviceType, Location};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Admin client for the AssetDesk device inventory.
#[derive(Parser, Debug)]
#[command(name = "assetdesk-admin", version, about = "AssetDesk admin client")]
struct Cli {
    /// Base URL of the AssetDesk API.
    #[arg(
        long = "api-url",
        env = "ASSETDESK_API_URL",
        default_value = "http://localhost:5000",
        global = true
    )]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List devices with search, filters, sort and paging.
    List {
        /// Case-insensitive text matched against most fields.
        #[arg(long)]
        search: Option<String>,
        #[arg(long = "type")]
        device_type: Option<DeviceType>,
        #[arg(long)]
        location: Option<Location>,
        #[arg(long, value_enum)]
        sort: Option<SortKey>,
        /// Sort descending instead of ascending.
        #[arg(long, requires = "sort")]
        desc: bool,
        #[arg(long, default_value_t = 1)]
        page: usize,
    },

    /// Show one device, by id or with `--code`.
    Show {
        id: Option<i32>,
        #[arg(long, conflicts_with = "id")]
        code: Option<String>,
    },

    /// Create a device and print its QR-bearing record.
    Create {
        #[command(flatten)]
        fields: FieldArgs,
    },

    /// Edit a device. Only the given fields change.
    Update {
        id: i32,
        #[command(flatten)]
        fields: FieldArgs,
    },

    /// Delete a device.
    Delete {
        id: i32,
        /// Skip confirmation.
        #[arg(long = "yes", short = 'y')]
        yes: bool,
    },

    /// Re-encode a device's QR code.
    RegenerateQr { id: i32 },

    /// Write a 50 x 30 mm printable label to an HTML file.
    PrintLabel {
        id: i32,
        /// Output file (default: label-<code>.html in the current directory).
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[derive(clap::Args, Debug, Default)]
struct FieldArgs {
    #[arg(long)]
    code: Option<String>,
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    brand: Option<String>,
    #[arg(long)]
    model: Option<String>,
    #[arg(long = "type")]
    device_type: Option<DeviceType>,
    /// Remove the device type.
    #[arg(long = "clear-type", conflicts_with = "device_type")]
    clear_type: bool,
    #[arg(long)]
    location: Option<Location>,
    /// Remove the location.
    #[arg(long = "clear-location", conflicts_with = "location")]
    clear_location: bool,
    /// Price in baht; an empty value clears it.
    #[arg(long)]
    price: Option<String>,
    #[arg(long)]
    details: Option<String>,
    #[arg(long = "ip-address")]
    ip_address: Option<String>,
    /// Date the device was added, RFC 3339 (e.g. 2024-03-01T08:30:00Z).
    #[arg(long = "created-at")]
    created_at: Option<DateTime<Utc>>,
}

impl FieldArgs {
    fn apply(self, form: &mut DeviceForm) {
        if let Some(code) = self.code {
            form.code = code;
        }
        if let Some(name) = self.name {
            form.name = name;
        }
        if let Some(brand) = self.brand {
            form.brand = brand;
        }
        if let Some(model) = self.model {
            form.model = model;
        }
        if self.device_type.is_some() || self.clear_type {
            form.device_type = self.device_type;
        }
        if self.location.is_some() || self.clear_location {
            form.location = self.location;
        }
        if let Some(price) = self.price {
            form.price = price;
        }
        if let Some(details) = self.details {
            form.details = details;
        }
        if let Some(ip_address) = self.ip_address {
            form.ip_address = ip_address;
        }
        if self.created_at.is_some() {
            form.created_at = self.created_at;
        }
    }
}

fn confirm(prompt: &str) -> io::Result<bool> {
    eprint!("{} [y/N] ", prompt);
    io::stderr().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}

fn print_device(device: &Device) {
    let or_dash = |value: Option<String>| value.unwrap_or_else(|| "-".to_string());

    println!("id:         {}", device.id);
    println!("code:       {}", device.code);
    println!("name:       {}", or_dash(device.name.clone()));
    println!("brand:      {}", device.brand);
    println!("model:      {}", device.model);
    println!("type:       {}", or_dash(device.device_type.map(|t| t.to_string())));
    println!("location:   {}", or_dash(device.location.map(|l| l.to_string())));
    println!("price:      {}", or_dash(device.price.map(|p| format!("{:.2}", p))));
    println!("ip address: {}", or_dash(device.ip_address.clone()));
    println!("details:    {}", or_dash(device.details.clone()));
    println!("created:    {}", device.created_at.format("%Y-%m-%d %H:%M"));
    println!(
        "qr code:    {}",
        if device.qr_code.is_some() { "yes" } else { "no" }
    );
}

fn print_page(state: &DeviceListState) {
    let items = state.page_items();
    if items.is_empty() {
        println!("ไม่พบข้อมูลอุปกรณ์");
        return;
    }

    println!(
        "{:>5}  {:<12} {:<24} {:<12} {:<16} {:>10}",
        "ID", "CODE", "NAME", "BRAND", "MODEL", "PRICE"
    );
    for device in items {
        println!(
            "{:>5}  {:<12} {:<24} {:<12} {:<16} {:>10}",
            device.id,
            device.code,
            device.name.as_deref().unwrap_or("-"),
            device.brand,
            device.model,
            device
                .price
                .map(|p| format!("{:.2}", p))
                .unwrap_or_else(|| "-".to_string()),
        );
    }
    println!(
        "page {}/{} ({} devices)",
        state.page(),
        state.total_pages(),
        state.filtered().len()
    );
}

/// Inline errors are meant for the user to correct; banner errors are operational.
fn report(error: ClientError) -> anyhow::Error {
    if error.is_inline() {
        anyhow::anyhow!("{}", error)
    } else {
        anyhow::anyhow!("server error: {}", error)
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let client = ApiClient::new(cli.api_url);

    match cli.command {
        Commands::List {
            search,
            device_type,
            location,
            sort,
            desc,
            page,
        } => {
            let devices = client.list_devices().await.map_err(report)?;
            let mut state = DeviceListState::new(devices);
            if let Some(search) = search {
                state.set_search(search);
            }
            state.set_type_filter(device_type);
            state.set_location_filter(location);
            if let Some(key) = sort {
                state.toggle_sort(key);
                if desc {
                    state.toggle_sort(key);
                }
            }
            state.set_page(page);
            print_page(&state);
        }

        Commands::Show { id, code } => {
            let device = match (id, code) {
                (Some(id), _) => client.get_device(id).await,
                (None, Some(code)) => client.get_device_by_code(&code).await,
                (None, None) => anyhow::bail!("give a device id or --code"),
            }
            .map_err(report)?;
            print_device(&device);
        }

        Commands::Create { fields } => {
            let config = client.config().await.map_err(report)?;
            let mut form = DeviceForm::default();
            fields.apply(&mut form);

            let payload = form.create_payload(config.identity)?;
            let device = client.create_device(&payload).await.map_err(report)?;
            print_device(&device);
        }

        Commands::Update { id, fields } => {
            let config = client.config().await.map_err(report)?;
            let existing = client.get_device(id).await.map_err(report)?;
            let mut form = DeviceForm::from_device(&existing);
            fields.apply(&mut form);

            let payload = form.update_payload(config.identity)?;
            let device = client.update_device(id, &payload).await.map_err(report)?;
            print_device(&device);
        }

        Commands::Delete { id, yes } => {
            let device = client.get_device(id).await.map_err(report)?;
            if !yes && !confirm(&format!("ลบอุปกรณ์ {} ({})?", device.code, device.id))? {
                println!("cancelled");
                return Ok(());
            }

            let message = client.delete_device(id).await.map_err(report)?;
            println!("{}", message);
        }

        Commands::RegenerateQr { id } => {
            let regenerated = client.regenerate_qr(id).await.map_err(report)?;
            println!("{}", regenerated.message);
            print_device(&regenerated.device);
        }

        Commands::PrintLabel { id, out } => {
            let device = client.get_device(id).await.map_err(report)?;
            let path = out.unwrap_or_else(|| PathBuf::from(label_file_name(&device)));

            std::fs::write(&path, render_label(&device))
                .with_context(|| format!("failed to write label to {}", path.display()))?;
            println!("label written to {}", path.display());
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    run(Cli::parse()).await
}
