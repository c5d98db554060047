//! Command-line interface.
//!
//! `totals` and `words` work offline. Everything else reads the store
//! credentials from the environment (`AIRTABLE_*`) and talks to the
//! remote store through [`quote_store::Store`].

use std::path::{Path, PathBuf};

use chrono::{Local, Utc};
use clap::{Args, Parser, Subcommand};
use quote_core::address::ShippingAddress;
use quote_core::{
    rupees_in_words, NewClient, QuotationDraft, Rupees, TotalsResult, CGST_RATE, SGST_RATE,
};
use quote_store::{Store, StoreConfig};
use tracing::info;

use crate::artifacts::LocalArtifactStore;
use crate::config::AppConfig;
use crate::error::AppError;
use crate::render::PdfRenderer;
use crate::workflow::{finalize_quotation, prepare_draft};

#[derive(Debug, Parser)]
#[command(name = "quote", about = "Quotation Desk", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Preview the totals of a draft file
    Totals(TotalsArgs),
    /// Spell out an amount in Indian-numbering words
    Words(WordsArgs),
    /// Show the number the next quotation will get
    NextId,
    /// List products with their current rates
    Products,
    /// List clients
    Clients,
    /// List team members
    Team,
    /// Create a client record
    AddClient(AddClientArgs),
    /// Save a draft file as a quotation and attach its PDF
    Save(SaveArgs),
}

#[derive(Debug, Args)]
struct TotalsArgs {
    /// Draft file (JSON)
    draft: PathBuf,

    /// Print the totals as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Args)]
struct WordsArgs {
    /// Amount in rupees; fractions are dropped
    #[arg(allow_negative_numbers = true)]
    amount: f64,
}

#[derive(Debug, Args)]
struct AddClientArgs {
    #[arg(long)]
    name: String,

    #[arg(long, default_value = "")]
    contact: String,

    #[arg(long, default_value = "")]
    city: String,

    #[arg(long = "type", default_value = "")]
    client_type: String,

    #[arg(long, default_value = "")]
    gstin: String,
}

#[derive(Debug, Args)]
struct SaveArgs {
    /// Draft file (JSON)
    draft: PathBuf,

    /// Team member record id, overriding the draft's `createdBy`
    #[arg(long, env = "QUOTE_CREATED_BY")]
    created_by: Option<String>,
}

impl Cli {
    pub async fn run(self) -> Result<(), AppError> {
        match self.command {
            Commands::Totals(args) => totals(args).await,
            Commands::Words(args) => {
                println!("{}", rupees_in_words(Rupees::new(args.amount)));
                Ok(())
            }
            Commands::NextId => {
                let next = connect()?.quotations().next_id().await?;
                println!("{next}");
                Ok(())
            }
            Commands::Products => {
                for product in connect()?.products().list().await? {
                    println!("{}\t{}\t{}", product.id, product.name, product.price());
                }
                Ok(())
            }
            Commands::Clients => {
                for client in connect()?.clients().list().await? {
                    println!("{}\t{}\t{}", client.id, client.name, client.city);
                }
                Ok(())
            }
            Commands::Team => {
                for member in connect()?.team().list().await? {
                    println!("{}\t{}", member.id, member.name);
                }
                Ok(())
            }
            Commands::AddClient(args) => add_client(args).await,
            Commands::Save(args) => save(args).await,
        }
    }
}

fn connect() -> Result<Store, AppError> {
    Ok(Store::new(StoreConfig::from_env()?)?)
}

/// Reads a draft file.
pub async fn load_draft(path: &Path) -> Result<QuotationDraft, AppError> {
    let invalid = |reason: String| AppError::InvalidDraft {
        path: path.display().to_string(),
        reason,
    };

    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| invalid(e.to_string()))?;
    serde_json::from_str(&raw).map_err(|e| invalid(e.to_string()))
}

/// Totals block as printed by `quote totals`.
pub fn format_totals(totals: &TotalsResult) -> String {
    let discount_label = format!("Discount ({}%):", totals.discount_percent);
    let lines = [
        ("Subtotal:".to_string(), totals.subtotal.to_string()),
        (discount_label, format!("-{}", totals.discount_amount.abs())),
        ("Taxable Amount:".to_string(), totals.taxable_amount.to_string()),
        (format!("SGST ({}%):", SGST_RATE.percentage()), totals.sgst.to_string()),
        (format!("CGST ({}%):", CGST_RATE.percentage()), totals.cgst.to_string()),
        ("Grand Total:".to_string(), totals.grand_total.to_string()),
        ("In Words:".to_string(), totals.total_in_words.clone()),
    ];

    let width = lines.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
    lines
        .iter()
        .map(|(label, value)| format!("{label:<width$}  {value}"))
        .collect::<Vec<_>>()
        .join("\n")
}

async fn totals(args: TotalsArgs) -> Result<(), AppError> {
    let draft = load_draft(&args.draft).await?;
    let totals = draft.totals();

    if args.json {
        let json = serde_json::to_string_pretty(&totals).map_err(|e| AppError::InvalidDraft {
            path: args.draft.display().to_string(),
            reason: e.to_string(),
        })?;
        println!("{json}");
        return Ok(());
    }

    for (i, row) in draft.line_breakdown().iter().enumerate() {
        println!(
            "{:>3}. {}  CGST {}  SGST {}  Total {}",
            i + 1,
            row.amount,
            row.cgst,
            row.sgst,
            row.total
        );
    }
    println!("{}", format_totals(&totals));
    Ok(())
}

async fn add_client(args: AddClientArgs) -> Result<(), AppError> {
    let store = connect()?;
    let client = store
        .clients()
        .create(
            NewClient {
                name: args.name,
                contact_details: args.contact,
                city: args.city,
                client_type: args.client_type,
                gst_number: args.gstin,
            },
            Utc::now(),
        )
        .await?;

    println!("{}\t{}", client.id, client.name);
    Ok(())
}

async fn save(args: SaveArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let mut draft = load_draft(&args.draft).await?;
    if let Some(created_by) = args.created_by {
        draft.created_by = Some(created_by);
    }

    let store = connect()?;
    let (client_repo, product_repo) = (store.clients(), store.products());
    let (clients, catalog) = tokio::try_join!(client_repo.list(), product_repo.list())?;

    let client = match draft.client() {
        Some(id) => Some(
            clients
                .iter()
                .find(|c| c.id == id)
                .cloned()
                .ok_or_else(|| AppError::ClientNotFound(id.to_string()))?,
        ),
        None => None,
    };
    if let Some(client) = &client {
        if draft.ship_to.is_empty() {
            draft.ship_to = ShippingAddress::parse(&client.shipping_address);
        }
    }

    prepare_draft(&store, &mut draft, Local::now().date_naive(), config.validity_days).await?;

    let artifacts = LocalArtifactStore::new(&config.artifact_dir, config.artifact_base_url.clone());
    info!(dir = %artifacts.root().display(), "Storing documents locally");

    let saved = finalize_quotation(
        &store,
        &PdfRenderer::new(),
        &artifacts,
        &draft,
        client.as_ref(),
        &catalog,
    )
    .await?;

    println!("Quotation:   {}", saved.quotation_id);
    println!("Record:      {}", saved.record_id);
    println!("Document:    {}", saved.url);
    println!("Grand Total: {}", saved.totals.grand_total);
    println!("In Words:    {}", saved.totals.total_in_words);
    Ok(())
}
