//! Command-line front end: batch segmentation and single-document inspection.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use strata::{AnySource, BatchOptions, ParagraphSource, Segmentation, Segmenter, Threshold};

#[derive(Parser)]
#[command(
    name = "strata",
    version,
    about = "Split press releases into lead, body, and trailer"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct SegmentArgs {
    /// Minimum normalized length of a substantial paragraph
    #[arg(short, long, env = "STRATA_MIN_LENGTH", default_value_t = Threshold::DEFAULT.min_length())]
    min_length: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Segment every .txt/.json document in a directory
    Run {
        /// Directory of input documents
        input: PathBuf,
        /// Directory for <name>_S1/_S2/_S3 outputs (created if missing)
        output: PathBuf,
        #[command(flatten)]
        segment: SegmentArgs,
        /// Do not write an empty _S3 file when a document has no trailer
        #[arg(long)]
        skip_empty_trailer: bool,
        /// Segment and report without writing files
        #[arg(long)]
        dry_run: bool,
    },
    /// Print the regions of a single document
    Show {
        /// The document to segment
        file: PathBuf,
        #[command(flatten)]
        segment: SegmentArgs,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            input,
            output,
            segment,
            skip_empty_trailer,
            dry_run,
        } => {
            let options = BatchOptions {
                threshold: Threshold::new(segment.min_length),
                skip_empty_trailer,
                dry_run,
            };
            let report = strata::process_dir(&input, &output, &options)
                .with_context(|| format!("processing {}", input.display()))?;

            let total = report.documents.len();
            let failed = report.failure_count();
            let single = report.succeeded().filter(|s| s.single).count();
            println!(
                "Segmented {} documents ({} single-paragraph, {} failed), wrote {} files in {:.1}s",
                total - failed,
                single,
                failed,
                report.files_written(),
                t0.elapsed().as_secs_f64()
            );
            for (path, err) in report.failed() {
                eprintln!("  {}: {err}", path.display());
            }
            if failed > 0 {
                anyhow::bail!("{failed} of {total} documents failed");
            }
            Ok(())
        }
        Commands::Show { file, segment } => {
            let doc = AnySource
                .read(&file)
                .with_context(|| format!("reading {}", file.display()))?;
            let seg = Segmenter::new(Threshold::new(segment.min_length)).segment(&doc);
            print_segmentation(&seg);
            Ok(())
        }
    }
}

fn print_segmentation(seg: &Segmentation) {
    match seg {
        Segmentation::Single { body } => {
            println!("single substantial paragraph, body only\n");
            println!("--- S2 ---\n{}", body.text);
        }
        Segmentation::Regions {
            lead,
            body,
            trailer,
        } => {
            println!("--- S1 (paragraph {}) ---\n{}\n", position(lead.index), lead.text);
            let span = body
                .span
                .as_ref()
                .map_or_else(|| "-".to_string(), |s| format!("{}..={}", s.start(), s.end()));
            println!("--- S2 (paragraphs {span}) ---\n{}\n", body.text);
            println!(
                "--- S3 (from paragraph {}) ---\n{}",
                position(trailer.start),
                trailer.text
            );
        }
    }
}

fn position(index: Option<usize>) -> String {
    index.map_or_else(|| "-".to_string(), |i| i.to_string())
}
