//! docstruct CLI - rebuild and verify document structure from layout extractions

use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use colored::Colorize;

use docstruct::assemble::tally_element_types;
use docstruct::render::{report_summary, to_json};
use docstruct::{
    detect_kind_from_path, Assessment, Docstruct, Document, InputKind, JsonFormat, RawExtraction,
    Verifier,
};

#[derive(Parser)]
#[command(name = "docstruct")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Rebuild page-indexed documents from layout extractions and verify them", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rebuild a document from a raw extraction (structuredData JSON)
    Restructure {
        /// Raw extraction JSON file
        #[arg(value_name = "RAW")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Source filename recorded in the metadata (defaults to the input name)
        #[arg(long, value_name = "NAME")]
        source: Option<String>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Skip elements on pages beyond the page count instead of failing
        #[arg(long)]
        lenient: bool,

        /// Assemble pages on a single thread
        #[arg(long)]
        sequential: bool,
    },

    /// Verify a rebuilt document
    Verify {
        /// Rebuilt document JSON file
        #[arg(value_name = "DOC")]
        input: PathBuf,

        /// Raw extraction to compare element counts against
        #[arg(long, value_name = "RAW")]
        compare: Option<PathBuf>,

        /// Write the JSON report to this file
        #[arg(short, long, value_name = "REPORT")]
        output: Option<PathBuf>,

        /// Print the JSON report instead of the summary
        #[arg(long)]
        json: bool,
    },

    /// Show information about a raw extraction or a rebuilt document
    Info {
        /// JSON file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Show version information
    Version,
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Restructure {
            input,
            output,
            source,
            compact,
            lenient,
            sequential,
        } => cmd_restructure(
            &input,
            output.as_deref(),
            source.as_deref(),
            compact,
            lenient,
            sequential,
        ),
        Commands::Verify {
            input,
            compare,
            output,
            json,
        } => cmd_verify(&input, compare.as_deref(), output.as_deref(), json),
        Commands::Info { input } => cmd_info(&input).map(|_| ExitCode::SUCCESS),
        Commands::Version => {
            cmd_version();
            Ok(ExitCode::SUCCESS)
        }
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", "Error".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn cmd_restructure(
    input: &Path,
    output: Option<&Path>,
    source: Option<&str>,
    compact: bool,
    lenient: bool,
    sequential: bool,
) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let mut builder = Docstruct::new();
    if lenient {
        builder = builder.lenient();
    }
    if sequential {
        builder = builder.sequential();
    }

    let source = match source {
        Some(name) => name.to_string(),
        None => input
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .into_owned(),
    };

    log::debug!("Restructuring {} as {}", input.display(), source);
    let reader = BufReader::new(File::open(input)?);
    let doc = builder.restructure_reader(reader, &source)?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };
    let json = to_json(&doc, format)?;

    if let Some(path) = output {
        fs::write(path, &json)?;
        println!("{} {}", "Saved to".green(), path.display());
        println!(
            "  {} pages, {} tables, {} images",
            doc.page_count(),
            doc.table_count(),
            doc.image_count()
        );
    } else {
        println!("{}", json);
    }

    Ok(ExitCode::SUCCESS)
}

fn cmd_verify(
    input: &Path,
    compare: Option<&Path>,
    output: Option<&Path>,
    json: bool,
) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let report = docstruct::verify_file(input, compare)?;

    if let Some(path) = output {
        fs::write(path, to_json(&report, JsonFormat::Pretty)?)?;
    }

    if json {
        println!("{}", to_json(&report, JsonFormat::Pretty)?);
    } else {
        println!("{}", "Verification Report".cyan().bold());
        println!("{}", "─".repeat(40).dimmed());
        println!("{}", report_summary(&report)?);
        println!();
        println!("{}: {}", "Overall".bold(), colored_assessment(report.overall_assessment));
        if let Some(path) = output {
            println!("{} {}", "Saved to".green(), path.display());
        }
    }

    Ok(if report.is_passing() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn colored_assessment(assessment: Assessment) -> colored::ColoredString {
    let label = assessment.as_str().to_uppercase();
    match assessment {
        Assessment::Excellent => label.green().bold(),
        Assessment::Good => label.green(),
        Assessment::Fair => label.yellow(),
        Assessment::Poor => label.red().bold(),
    }
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let (kind, value) = detect_kind_from_path(input)?;

    println!("{}", "Input Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Kind".bold(), kind);

    match kind {
        InputKind::RawExtraction => {
            let raw: RawExtraction = serde_json::from_value(value)?;
            let info = &raw.extended_metadata;
            println!("{}: {}", "Pages".bold(), info.page_count);
            if !info.pdf_version.is_empty() {
                println!("{}: PDF {}", "Format".bold(), info.pdf_version);
            }
            if !info.language.is_empty() {
                println!("{}: {}", "Language".bold(), info.language);
            }
            println!("{}: {}", "Elements".bold(), raw.elements.len());

            println!();
            println!("{}", "Element Types".cyan().bold());
            println!("{}", "─".repeat(40).dimmed());
            for (name, count) in tally_element_types(&raw.elements) {
                println!("  {:<12} {}", name, count);
            }
        }
        InputKind::Document => {
            let doc: Document = serde_json::from_value(value)?;
            println!("{}: {}", "Document".bold(), doc.document_id);
            println!("{}: {}", "Source".bold(), doc.metadata.source);
            println!("{}: {}", "Pages".bold(), doc.page_count());

            println!();
            println!("{}", "Content Statistics".cyan().bold());
            println!("{}", "─".repeat(40).dimmed());
            let text = doc.plain_text();
            println!("{}: {}", "Words".bold(), text.split_whitespace().count());
            println!("{}: {}", "Characters".bold(), text.chars().count());
            println!("{}: {}", "Tables".bold(), doc.table_count());
            println!("{}: {}", "Images".bold(), doc.image_count());
            println!(
                "{}: {}",
                "Captions".bold(),
                doc.images().filter(|(_, image)| image.has_caption()).count()
            );
        }
    }

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "docstruct".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Document structure reconstruction and verification tool");
    println!();
    println!("License: MIT");
}
