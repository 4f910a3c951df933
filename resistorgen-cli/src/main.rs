//! resistorgen CLI - E24 resistor color bands and STEP model generation.

use clap::{Parser, Subcommand, ValueEnum};
use resistorgen::{
    series, ColorBand, Encoding, GenerationOptions, GenerationReport, ResistorGenCore, Tolerance,
};
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "resistorgen")]
#[command(about = "E24 resistor color-band encoder and STEP model generator", long_about = None)]
#[command(version)]
struct Cli {
    /// Log what is being generated
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every value of the E24 series
    Series {
        /// Output format
        #[arg(short, long, value_enum, default_value = "human")]
        format: OutputFormat,
    },

    /// Show the label, bands and file name for one value
    Encode {
        /// Resistance in ohms
        #[arg(value_name = "VALUE")]
        value: f64,

        /// Tolerance in percent
        #[arg(short, long, default_value = "1")]
        tolerance: Tolerance,

        /// Output format
        #[arg(short, long, value_enum, default_value = "human")]
        format: OutputFormat,
    },

    /// List supported tolerances and their band colors
    Tolerances,

    /// Render one STEP file per value and tolerance from a template
    Generate {
        /// Template containing {{BAND_<n>_RED}}-style tokens
        #[arg(short, long, value_name = "FILE")]
        template: PathBuf,

        /// Directory for generated files
        #[arg(short, long, value_name = "DIR")]
        output: PathBuf,

        /// Tolerance in percent (repeatable, default 1)
        #[arg(long = "tolerance", value_name = "PCT")]
        tolerances: Vec<Tolerance>,

        /// Only generate these values (repeatable, default whole series)
        #[arg(long = "value", value_name = "OHMS")]
        values: Vec<f64>,

        /// Extension of generated files
        #[arg(long, default_value = "step")]
        ext: String,

        /// Fail when a rendered file still contains band tokens
        #[arg(long)]
        strict: bool,

        /// Stop at the first value that cannot be generated
        #[arg(long)]
        fail_fast: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value = "human")]
        format: OutputFormat,
    },
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output for scripts
    Json,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let exit_code = match cli.command {
        Commands::Series { format } => {
            handle_series(&format);
            0
        }
        Commands::Encode {
            value,
            tolerance,
            format,
        } => handle_encode(value, tolerance, &format),
        Commands::Tolerances => {
            handle_tolerances();
            0
        }
        Commands::Generate {
            template,
            output,
            tolerances,
            values,
            ext,
            strict,
            fail_fast,
            format,
        } => {
            let mut options = GenerationOptions {
                values,
                extension: ext,
                strict_placeholders: strict,
                fail_fast,
                ..Default::default()
            };
            if !tolerances.is_empty() {
                options.tolerances = tolerances;
            }
            tracing::debug!("Generation options: {:?}", options);
            handle_generate(&template, &output, &options, &format)
        }
    };

    process::exit(exit_code);
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn handle_series(format: &OutputFormat) {
    let values = series::generate();
    match format {
        OutputFormat::Human => {
            for value in values {
                println!("{}", value);
            }
        }
        OutputFormat::Json => print_json(&serde_json::json!({
            "count": values.len(),
            "values": values,
        })),
    }
}

fn handle_encode(value: f64, tolerance: Tolerance, format: &OutputFormat) -> i32 {
    match ResistorGenCore::encode(value, tolerance, "step") {
        Ok(encoding) => {
            match format {
                OutputFormat::Human => output_encoding_human(&encoding),
                OutputFormat::Json => output_encoding_json(&encoding),
            }
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn output_encoding_human(encoding: &Encoding) {
    println!("\nValue: {} Ω", encoding.value);
    println!("{}", "─".repeat(40));
    println!("  Label:     {}", encoding.label);
    println!("  Tolerance: {}", encoding.tolerance);
    println!("  File:      {}", encoding.file_name);
    println!("\n  Bands:");
    for (i, band) in encoding.colors().iter().enumerate() {
        let rgb = band.rgb();
        println!(
            "    {}. {:<7} rgb({}, {}, {})",
            i + 1,
            band.name(),
            rgb.red,
            rgb.green,
            rgb.blue
        );
    }
}

fn output_encoding_json(encoding: &Encoding) {
    let bands: Vec<_> = encoding
        .colors()
        .iter()
        .map(|band: &ColorBand| {
            serde_json::json!({
                "color": band,
                "rgb": band.rgb(),
            })
        })
        .collect();
    print_json(&serde_json::json!({
        "value": encoding.value,
        "label": encoding.label,
        "tolerance": encoding.tolerance.display_name(),
        "file_name": encoding.file_name,
        "bands": bands,
    }));
}

fn handle_tolerances() {
    println!("Supported tolerances:\n");
    for tolerance in Tolerance::ALL {
        let spec = tolerance.spec();
        println!("  {:<6} {:<7} {}", tolerance.to_string(), spec.color, spec.name);
    }
}

fn handle_generate(
    template: &PathBuf,
    output: &PathBuf,
    options: &GenerationOptions,
    format: &OutputFormat,
) -> i32 {
    match ResistorGenCore::generate(template, output, options) {
        Ok(report) => {
            match format {
                OutputFormat::Human => output_report_human(&report),
                OutputFormat::Json => match report.to_json_pretty() {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        eprintln!("Error: {}", e);
                        return 1;
                    }
                },
            }
            if report.has_failures() {
                1
            } else {
                0
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn output_report_human(report: &GenerationReport) {
    println!("\nTemplate: {}", report.template.display());
    println!("Output:   {}", report.output_dir.display());
    println!("{}", "─".repeat(60));

    for artifact in &report.artifacts {
        println!("  {:<10} {}", artifact.label, artifact.path.display());
    }

    if report.has_failures() {
        println!("\n  FAILED:");
        for failure in &report.failures {
            println!("    - {} at {}: {}", failure.value, failure.tolerance, failure.error);
        }
    }

    println!("\n  Summary:");
    println!("    Generated: {}", report.artifacts.len());
    println!("    Failed:    {}", report.failures.len());
}

fn print_json(value: &serde_json::Value) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error: {}", e),
    }
}
