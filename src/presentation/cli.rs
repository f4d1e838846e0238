use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde_json::Value;

use crate::application::ports::SchemaValidator;
use crate::application::services::is_pdf_file;
use crate::domain::{ExtractionRequest, ExtractorSettings};
use crate::infrastructure::ExtractorFactory;
use crate::infrastructure::schema::JsonSchemaValidator;

#[derive(Debug, Parser)]
#[command(
    name = "schemapdf",
    version,
    about = "Extract schema-conforming JSON from PDF documents with an OpenAI-compatible model"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract structured data from a PDF
    Extract(ExtractArgs),
    /// Check that a file carries the PDF signature
    Check {
        /// Path to the PDF file
        pdf: PathBuf,
    },
    /// Check that a file holds a well-formed JSON Schema
    ValidateSchema {
        /// Path to the JSON Schema file
        schema: PathBuf,
    },
}

#[derive(Debug, clap::Args)]
pub struct ExtractArgs {
    /// Path to the PDF file
    pub pdf: PathBuf,

    /// JSON Schema describing the data to extract
    #[arg(short, long, value_name = "FILE")]
    pub schema: PathBuf,

    /// Sampling temperature (0-2)
    #[arg(short, long)]
    pub temperature: Option<f64>,

    /// Maximum tokens in the completion
    #[arg(long)]
    pub max_tokens: Option<u32>,

    /// Model for both text and vision extraction
    #[arg(long)]
    pub model: Option<String>,

    /// Model for text-mode extraction
    #[arg(long)]
    pub text_model: Option<String>,

    /// Model for vision-mode extraction
    #[arg(long)]
    pub vision_model: Option<String>,

    /// Fail instead of falling back to page images for text-less PDFs
    #[arg(long)]
    pub no_vision: bool,

    /// Minimum trimmed text length for text-mode extraction
    #[arg(long, value_name = "CHARS")]
    pub threshold: Option<usize>,

    /// Print single-line JSON
    #[arg(long)]
    pub compact: bool,
}

impl ExtractArgs {
    /// Command-line flags win over file and environment settings.
    pub fn apply_overrides(&self, settings: &mut ExtractorSettings) {
        if let Some(model) = &self.model {
            settings.model = Some(model.clone());
        }
        if let Some(model) = &self.text_model {
            settings.text_model = Some(model.clone());
        }
        if let Some(model) = &self.vision_model {
            settings.vision_model = Some(model.clone());
        }
        if self.no_vision {
            settings.vision_enabled = Some(false);
        }
        if let Some(threshold) = self.threshold {
            settings.text_threshold = Some(threshold);
        }
    }
}

pub async fn run(cli: Cli, settings: ExtractorSettings) -> anyhow::Result<()> {
    match cli.command {
        Command::Extract(args) => extract(args, settings).await,
        Command::Check { pdf } => {
            if !is_pdf_file(&pdf) {
                anyhow::bail!("{} is not a PDF", pdf.display());
            }
            eprintln!("{} has a valid PDF signature", pdf.display());
            Ok(())
        }
        Command::ValidateSchema { schema } => {
            let schema = read_schema(&schema)?;
            JsonSchemaValidator::new().validate(&schema)?;
            eprintln!("Schema is valid");
            Ok(())
        }
    }
}

async fn extract(args: ExtractArgs, mut settings: ExtractorSettings) -> anyhow::Result<()> {
    args.apply_overrides(&mut settings);

    let schema = read_schema(&args.schema)?;
    let service = ExtractorFactory::create(settings)?;

    let mut request = ExtractionRequest::from_path(schema, &args.pdf);
    request.temperature = args.temperature;
    request.max_tokens = args.max_tokens;

    let result = service
        .extract(&request)
        .await
        .with_context(|| format!("failed to extract data from {}", args.pdf.display()))?;

    let json = if args.compact {
        serde_json::to_string(&result)?
    } else {
        serde_json::to_string_pretty(&result)?
    };
    println!("{json}");

    Ok(())
}

fn read_schema(path: &Path) -> anyhow::Result<Value> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read schema {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("schema {} is not JSON", path.display()))
}
