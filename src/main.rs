//! # Etiqueta CLI
//!
//! Command-line interface for the nutrition facts label studio.
//!
//! ## Usage
//!
//! ```bash
//! # Start the web editor on the default port
//! etiqueta serve
//!
//! # Serve on another address, keeping labels in memory only
//! etiqueta serve --listen 127.0.0.1:8080 --ephemeral
//!
//! # Write an example label to try offline rendering
//! etiqueta sample
//!
//! # Render a label JSON straight to a file
//! etiqueta render granola-bar.json --format pdf
//! etiqueta render granola-bar.json --format png --scale 2 --output label.png
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use etiqueta::{
    EtiquetaError,
    export::{self, ExportFormat, EXPORT_SCALE},
    label::{AdditionalIngredient, LabelDraft, NutritionLabel, Unit},
    render,
    server::{self, ServerConfig},
};

/// Etiqueta - Nutrition facts label composer
#[derive(Parser, Debug)]
#[command(name = "etiqueta")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the web editor and JSON API
    Serve {
        /// Address to listen on
        #[arg(long, default_value = "0.0.0.0:4775")]
        listen: String,

        /// Directory for the label and session blobs
        #[arg(long, default_value = "data")]
        data_dir: PathBuf,

        /// Keep everything in memory, write nothing to disk
        #[arg(long)]
        ephemeral: bool,
    },

    /// Render a label JSON file to PNG, JPEG, or PDF
    Render {
        /// Label JSON file (as written by `sample` or the editor API)
        input: PathBuf,

        /// Output format
        #[arg(long, default_value = "png")]
        format: ExportFormat,

        /// Output file (defaults to the format's fixed download name)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Device scale factor (defaults to the export scale)
        #[arg(long)]
        scale: Option<usize>,
    },

    /// Write a filled-in example label JSON
    Sample {
        /// Where to write the example
        #[arg(long, default_value = "granola-bar.json")]
        output: PathBuf,
    },
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), EtiquetaError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { listen, data_dir, ephemeral } => {
            init_tracing();
            let config = ServerConfig { listen_addr: listen, data_dir, ephemeral };
            server::serve(config).await
        }
        Commands::Render { input, format, output, scale } => {
            render_file(input, format, output, scale)
        }
        Commands::Sample { output } => write_sample(output),
    }
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "etiqueta=info,tower_http=info".to_string());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();
}

/// Render a label JSON file to an image or PDF on disk.
///
/// The input is parsed with the tolerant draft schema, so hand-written
/// JSON with missing fields works the same as editor output.
fn render_file(
    input: PathBuf,
    format: ExportFormat,
    output: Option<PathBuf>,
    scale: Option<usize>,
) -> Result<(), EtiquetaError> {
    let json = std::fs::read_to_string(&input)?;
    let draft: LabelDraft = serde_json::from_str(&json)
        .map_err(|e| EtiquetaError::InvalidLabel(format!("{}: {e}", input.display())))?;
    let view = draft.view();

    let image = render::render_image(&view, scale.unwrap_or(EXPORT_SCALE));
    let bytes = match format {
        ExportFormat::Png => render::encode_png(&image)?,
        ExportFormat::Jpeg => export::encode_jpeg(&image)?,
        ExportFormat::Pdf => export::pdf::document(&image)?,
    };

    let path = output.unwrap_or_else(|| PathBuf::from(format.filename()));
    std::fs::write(&path, &bytes)?;
    println!(
        "Wrote {} ({} bytes, {}x{})",
        path.display(),
        bytes.len(),
        image.width(),
        image.height()
    );
    Ok(())
}

/// Write the example label: a filled-in granola bar with one extra
/// ingredient, enough to exercise every row kind on the panel.
fn write_sample(output: PathBuf) -> Result<(), EtiquetaError> {
    let mut label = NutritionLabel::new("Granola Bar");
    label.serving.servings_per_container = "6".into();
    label.serving.serving_size = "1 bar (40g)".into();
    label.serving.calories = "190".into();

    for nutrient in &mut label.nutrients {
        match nutrient.name.as_str() {
            "Total Fat" => {
                nutrient.amount = 8.0;
                nutrient.unit = Unit::G;
                nutrient.daily_value = 10.0;
            }
            "Saturated Fat" => {
                nutrient.amount = 1.0;
                nutrient.unit = Unit::G;
                nutrient.daily_value = 5.0;
            }
            "Sodium" => {
                nutrient.amount = 140.0;
                nutrient.daily_value = 6.0;
            }
            "Total Carbohydrate" => {
                nutrient.amount = 24.0;
                nutrient.unit = Unit::G;
                nutrient.daily_value = 9.0;
            }
            "Dietary Fiber" => {
                nutrient.amount = 3.0;
                nutrient.unit = Unit::G;
                nutrient.daily_value = 11.0;
            }
            "Total Sugars" => {
                nutrient.amount = 9.0;
                nutrient.unit = Unit::G;
            }
            "Added Sugars" => {
                nutrient.amount = 7.0;
                nutrient.unit = Unit::G;
                nutrient.daily_value = 14.0;
            }
            "Protein" => {
                nutrient.amount = 4.0;
                nutrient.unit = Unit::G;
            }
            _ => {}
        }
    }

    label.extras.push(AdditionalIngredient::new("Vitamin C", "60", Unit::Mg, "100"));

    let json = serde_json::to_string_pretty(&label)?;
    std::fs::write(&output, json)?;
    println!("Wrote {}", output.display());
    Ok(())
}
