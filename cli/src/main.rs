//! docroute CLI - document classification and post-processing tool

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use colored::Colorize;

use docroute::inspect::DocumentSample;
use docroute::postprocess::DEFAULT_KEYWORD_COUNT;
use docroute::{Classifier, PostProcessor, Verdict};

#[derive(Parser)]
#[command(name = "docroute")]
#[command(version)]
#[command(about = "Classify documents and post-process extracted text", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a document sample (page measurements JSON) as NATIVE or SCANNED
    Classify {
        /// Path to a serialized DocumentSample
        #[arg(value_name = "SAMPLE")]
        sample: PathBuf,

        /// Emit the verdict and signals as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run the full post-processing pipeline over extracted text
    Process {
        /// Input text or markdown file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Emit the full processed record as JSON instead of cleaned text
        #[arg(long)]
        json: bool,
    },

    /// Extract keywords from a text file
    Keywords {
        /// Input text file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Number of keywords to extract
        #[arg(short = 'k', long, default_value_t = DEFAULT_KEYWORD_COUNT)]
        count: usize,
    },

    /// Assess the quality of a text file
    Quality {
        /// Input text file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> docroute::Result<()> {
    match cli.command {
        Commands::Classify { sample, json } => classify(&sample, json),
        Commands::Process {
            input,
            output,
            json,
        } => process(&input, output.as_deref(), json),
        Commands::Keywords { input, count } => keywords(&input, count),
        Commands::Quality { input } => quality(&input),
    }
}

fn classify(path: &std::path::Path, json: bool) -> docroute::Result<()> {
    let content = fs::read_to_string(path)?;
    let sample = DocumentSample::from_json(&content)?;
    log::debug!("loaded sample with {} pages", sample.pages.len());

    let classifier = Classifier::default();
    let (verdict, signals) = classifier.identify_with_signals(&sample);

    if json {
        let record = serde_json::json!({
            "verdict": verdict,
            "text_density": signals.text_density,
            "text_quality": signals.text_quality,
            "images_area_ratio": signals.images_area_ratio,
            "image_count": signals.image_count,
        });
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        let label = match verdict {
            Verdict::Native => verdict.to_string().green().bold(),
            Verdict::Scanned => verdict.to_string().yellow().bold(),
        };
        println!("{}: {label}", path.display());
        println!(
            "  density {:.2}%  quality {:.3}  image ratio {:.3}",
            signals.text_density, signals.text_quality, signals.images_area_ratio
        );
    }

    Ok(())
}

fn process(
    input: &std::path::Path,
    output: Option<&std::path::Path>,
    json: bool,
) -> docroute::Result<()> {
    let content = fs::read_to_string(input)?;
    let processed = PostProcessor::new().process(&content);

    let rendered = if json {
        serde_json::to_string_pretty(&processed)?
    } else {
        processed.cleaned_text.clone()
    };

    match output {
        Some(path) => {
            fs::write(path, rendered)?;
            println!(
                "{} {} ({} sections, {} keywords, quality {:.2})",
                "wrote".green().bold(),
                path.display(),
                processed.structured.stats.section_count,
                processed.keywords.len(),
                processed.quality.overall
            );
        }
        None => println!("{rendered}"),
    }

    Ok(())
}

fn keywords(input: &std::path::Path, count: usize) -> docroute::Result<()> {
    let content = fs::read_to_string(input)?;
    let keywords = docroute::extract_keywords(&content, count);

    for keyword in keywords {
        println!("{keyword}");
    }

    Ok(())
}

fn quality(input: &std::path::Path) -> docroute::Result<()> {
    let content = fs::read_to_string(input)?;
    let metrics = docroute::assess_quality(&content);

    println!("readability   {:.2}", metrics.readability);
    println!("coherence     {:.2}", metrics.coherence);
    println!("completeness  {:.2}", metrics.completeness);
    println!("{}       {:.2}", "overall".bold(), metrics.overall);

    Ok(())
}
