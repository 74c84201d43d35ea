use casebook::prelude::*;
use clap::{Parser, Subcommand, ValueEnum};
use std::time::Instant;
use tracing_subscriber::EnvFilter;

/// Output formats for a rendered document.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Html,
    Tree,
    Json,
}

/// Renders authored case studies into documents
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the projects in a catalog
    List {
        /// Path to the catalog JSON file
        catalog_path: String,
    },
    /// Render one project's case study
    Render {
        /// Path to the catalog JSON file
        catalog_path: String,
        /// Id of the project to render
        project_id: String,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Html)]
        format: OutputFormat,
        /// Image URL substituted when a block's image fails to load
        #[arg(long)]
        fallback_image: Option<String>,
        /// Map a custom block kind onto a built-in one, as `custom=builtin`
        #[arg(long = "alias", value_name = "CUSTOM=BUILTIN")]
        aliases: Vec<String>,
    },
    /// Pre-render every project into a binary artifact
    Bake {
        /// Path to the catalog JSON file
        catalog_path: String,
        /// Where to write the artifact
        #[arg(short, long)]
        out: String,
        /// Image URL substituted when a block's image fails to load
        #[arg(long)]
        fallback_image: Option<String>,
    },
    /// Print a document from a baked artifact
    Show {
        /// Path to the artifact file
        artifact_path: String,
        /// Id of the project to show
        project_id: String,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Tree)]
        format: OutputFormat,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::List { catalog_path } => run_list(&catalog_path),
        Command::Render {
            catalog_path,
            project_id,
            format,
            fallback_image,
            aliases,
        } => run_render(&catalog_path, &project_id, format, fallback_image, &aliases),
        Command::Bake {
            catalog_path,
            out,
            fallback_image,
        } => run_bake(&catalog_path, &out, fallback_image),
        Command::Show {
            artifact_path,
            project_id,
            format,
        } => run_show(&artifact_path, &project_id, format),
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_list(catalog_path: &str) {
    let catalog = load_catalog(catalog_path, CatalogLoader::default());
    println!("{} projects in '{}':", catalog.len(), catalog_path);
    for project in catalog.iter() {
        let blocks = project
            .case_study
            .as_ref()
            .map_or("no case study".to_string(), |cs| {
                format!("{} blocks", cs.supported_block_count())
            });
        println!(
            "  [{}] {} ({}) - {}",
            project.id, project.title, project.year, blocks
        );
    }
}

fn run_render(
    catalog_path: &str,
    project_id: &str,
    format: OutputFormat,
    fallback_image: Option<String>,
    aliases: &[String],
) {
    let mut loader = CatalogLoader::builder();
    for alias in aliases {
        let (custom, builtin) = alias.split_once('=').unwrap_or_else(|| {
            exit_with_error(&format!(
                "Invalid alias '{}', expected CUSTOM=BUILTIN",
                alias
            ))
        });
        loader = loader.with_kind_alias(custom, builtin);
    }
    let catalog = load_catalog(catalog_path, loader.build());
    let renderer = build_renderer(fallback_image);

    let view = ViewState::default().open_case_study(project_id);
    let render_start = Instant::now();
    let document = catalog
        .render_view(&view, &renderer)
        .unwrap_or_else(|| exit_with_error(&format!("Project '{}' not found", project_id)));
    tracing::debug!(elapsed = ?render_start.elapsed(), "Rendered document");

    print_document(&document, format);
}

fn run_bake(catalog_path: &str, out: &str, fallback_image: Option<String>) {
    let total_start = Instant::now();
    let catalog = load_catalog(catalog_path, CatalogLoader::default());
    let renderer = build_renderer(fallback_image);

    let artifact = DocumentArtifact::bake(&catalog, &renderer);
    artifact
        .save(out)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to save artifact: {}", e)));

    println!(
        "Baked {} documents into '{}' in {:?}",
        artifact.documents.len(),
        out,
        total_start.elapsed()
    );
}

fn run_show(artifact_path: &str, project_id: &str, format: OutputFormat) {
    let artifact = DocumentArtifact::from_file(artifact_path)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to load artifact: {}", e)));
    let document = artifact.get(project_id).unwrap_or_else(|| {
        exit_with_error(&format!(
            "Project '{}' not found in artifact",
            project_id
        ))
    });
    print_document(document, format);
}

fn load_catalog(path: &str, loader: CatalogLoader) -> Catalog {
    loader
        .load_file(path)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to load catalog: {}", e)))
}

fn build_renderer(fallback_image: Option<String>) -> Renderer {
    let mut builder = Renderer::builder();
    if let Some(url) = fallback_image {
        builder = builder.with_fallback_image(&url);
    }
    builder.build()
}

fn print_document(document: &Document, format: OutputFormat) {
    match format {
        OutputFormat::Html => print!("{}", HtmlFormatter::format_document(document)),
        OutputFormat::Tree => print!("{}", DisplayDocument::new(document)),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(document)
                .unwrap_or_else(|e| exit_with_error(&format!("Failed to encode JSON: {}", e)));
            println!("{}", json);
        }
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
