//! TCAnnex CLI
//!
//! Command-line access to the CPRT API: documents, elements and their relationships.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tcannex_rs::{Client, ClientConfig, CprtResponse};

mod telemetry;

/// Query the TCAnnex CPRT API
#[derive(Parser)]
#[command(name = "tcannex")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// API key (defaults to TCANNEX_API_KEY)
    #[arg(long)]
    api_key: Option<String>,

    /// API base URL
    #[arg(long)]
    base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write JSON logs to this directory
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Print counts and identifiers instead of JSON
    #[arg(short, long)]
    summary: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Read the API root
    Root,

    /// List all documents
    Documents,

    /// Get a document with its elements and relationships
    Document {
        /// Document identifier (e.g., NIST_CSF_2.0)
        doc_id: String,
    },

    /// Get an element with its relationships
    Element {
        /// Document identifier
        doc_id: String,

        /// Element identifier (e.g., GV)
        element_id: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let _guard = match telemetry::init_telemetry(cli.log_dir.as_deref(), cli.verbose) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Error: failed to initialize logging: {:#}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&cli) {
        tracing::debug!("command failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;
    let client = Client::from_config(config)?;

    let response = match &cli.command {
        Commands::Root => client.get_root().context("failed to read API root"),
        Commands::Documents => client.get_documents().context("failed to list documents"),
        Commands::Document { doc_id } => client
            .get_document(doc_id)
            .with_context(|| format!("failed to fetch document {}", doc_id)),
        Commands::Element { doc_id, element_id } => client
            .get_element(doc_id, element_id)
            .with_context(|| format!("failed to fetch element {}/{}", doc_id, element_id)),
    }?;
    client.close();

    if cli.summary {
        print!("{}", summarize(&response));
    } else {
        println!("{}", serde_json::to_string_pretty(&response)?);
    }

    Ok(())
}

/// File (or defaults), then flags, then TCANNEX_API_KEY for a still-missing key
fn load_config(cli: &Cli) -> Result<ClientConfig> {
    let mut config = match &cli.config {
        Some(path) => ClientConfig::load(&path.to_string_lossy())
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => ClientConfig::default(),
    };

    if let Some(api_key) = &cli.api_key {
        config = config.with_api_key(api_key.as_str());
    }
    if let Some(base_url) = &cli.base_url {
        config = config.with_base_url(base_url.as_str());
    }
    if let Some(timeout) = cli.timeout {
        config = config.with_timeout_secs(timeout);
    }

    Ok(config.with_env())
}

fn summarize(response: &CprtResponse) -> String {
    let mut out = String::new();

    out.push_str(&format!("documents: {}\n", response.documents.len()));
    for doc in &response.documents {
        out.push_str(&format!(
            "  {}  {} ({})\n",
            doc.doc_identifier, doc.name, doc.version
        ));
    }

    out.push_str(&format!("elements: {}\n", response.elements.len()));
    for element in &response.elements {
        out.push_str(&format!(
            "  {}/{}  [{}] {}\n",
            element.doc_identifier, element.element_identifier, element.element_type, element.title
        ));
    }

    out.push_str(&format!(
        "relationship_types: {}\n",
        response.relationship_types.len()
    ));

    out.push_str(&format!("relationships: {}\n", response.relationships.len()));
    for edge in &response.relationships {
        out.push_str(&format!(
            "  {}/{} -[{}]-> {}/{}\n",
            edge.source_doc_identifier,
            edge.source_element_identifier,
            edge.relationship_identifier,
            edge.dest_doc_identifier,
            edge.dest_element_identifier
        ));
    }

    out
}
