use clap::Args;
use delivery_insights::deliveries::{ClientRecord, DashboardSummary, DeliveryRecord};
use delivery_insights::error::AppError;
use delivery_insights::geocoding::{AddressResolver, GeocodeEnvelope, Resolution};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Args, Debug)]
pub(crate) struct GeocodeArgs {
    /// Free-text address, e.g. "Avenida Paulista, São Paulo"
    pub(crate) address: String,
    /// Print the response envelope as JSON instead of a table
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct StatsArgs {
    /// JSON array of deliveries as returned by GET /deliveries
    #[arg(long)]
    pub(crate) deliveries: PathBuf,
    /// Optional JSON array of clients as returned by GET /clients
    #[arg(long)]
    pub(crate) clients: Option<PathBuf>,
    /// Print the summary as JSON instead of a table
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_geocode(args: GeocodeArgs) -> Result<(), AppError> {
    let resolution = AddressResolver::instant().resolve_detailed(&args.address);

    if args.json {
        let envelope = GeocodeEnvelope::success(resolution.address);
        println!("{}", serde_json::to_string_pretty(&envelope)?);
    } else {
        println!("{}", render_resolution(&args.address, &resolution));
    }

    Ok(())
}

pub(crate) fn run_stats(args: StatsArgs) -> Result<(), AppError> {
    let deliveries: Vec<DeliveryRecord> = read_json(&args.deliveries)?;
    let client_count = match args.clients.as_deref() {
        Some(path) => read_json::<Vec<ClientRecord>>(path)?.len(),
        None => 0,
    };

    let summary = DashboardSummary::build(&deliveries, client_count);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{}", render_summary(&summary));
    }

    Ok(())
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, AppError> {
    let raw = fs::read_to_string(path)?;
    serde_json::from_str(&raw)
        .map_err(|err| AppError::Input(format!("{}: {err}", path.display())))
}

fn render_resolution(query: &str, resolution: &Resolution) -> String {
    let address = &resolution.address;
    let mut lines = vec![format!("Address lookup: {query}")];

    match resolution.matched {
        Some(hit) => lines.push(format!(
            "Matched gazetteer entry #{} via keyword '{}'",
            hit.position + 1,
            hit.keyword
        )),
        None => lines.push("No gazetteer keyword matched; placeholder address".to_string()),
    }

    lines.push(format!("- logradouro: {}, {}", address.logradouro, address.numero));
    lines.push(format!("- bairro: {}", address.bairro));
    lines.push(format!(
        "- cidade: {} / {} ({})",
        address.cidade, address.estado, address.pais
    ));
    lines.push(format!(
        "- coordinates: {}, {}",
        address.latitude, address.longitude
    ));
    lines.join("\n")
}

fn render_summary(summary: &DashboardSummary) -> String {
    let aggregation = &summary.aggregation;
    let mut lines = vec![
        "Delivery statistics".to_string(),
        format!("Total deliveries: {}", aggregation.total_deliveries),
        format!("Average weight: {:.1} kg", aggregation.average_weight),
        format!("Total weight: {:.1} kg", summary.total_weight),
        format!("Deliveries per client: {:.1}", summary.deliveries_per_client),
        format!("States served: {}", summary.states_served),
        format!(
            "Top city: {}",
            summary.top_city.as_deref().unwrap_or("N/A")
        ),
        format!(
            "Top state: {}",
            summary.top_state.as_deref().unwrap_or("N/A")
        ),
    ];

    if aggregation.city_counts.is_empty() {
        lines.push("\nDeliveries by city: none".to_string());
    } else {
        lines.push("\nDeliveries by city".to_string());
        for entry in &aggregation.city_counts {
            lines.push(format!("- {}: {}", entry.label, entry.count));
        }
    }

    if !aggregation.state_counts.is_empty() {
        lines.push("\nDeliveries by state".to_string());
        for entry in &aggregation.state_counts {
            lines.push(format!("- {}: {}", entry.label, entry.count));
        }
    }

    if !summary.recent_deliveries.is_empty() {
        lines.push("\nRecent deliveries".to_string());
        for delivery in &summary.recent_deliveries {
            lines.push(format!(
                "- #{} {}, {}",
                delivery.id, delivery.cidade, delivery.estado
            ));
        }
    }

    lines.join("\n")
}
