use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use lopdf::Document;
use pdf_booklet::{Alignment, BookletOptions, LayoutMode, PaperSize};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

const EPILOG: &str = "\
Pages are laid out so that page 1 is printed next to the last page and so on,
so that after folding they read in order.

The large size prints two pages per sheet side, the small size eight. Pages are
scaled to fit and keep their aspect ratio.

The --hoffset, --width and --height amounts are delta adjustments and need a
unit suffix: in, cm or mm.

--signature sets the maximum number of pages per signature (binding group) and
must be a multiple of 4. Without it the whole PDF becomes one signature.";

#[derive(Parser)]
#[command(
    name = "pdf-booklet",
    about = "Create a PDF booklet",
    after_help = EPILOG,
    version
)]
struct Cli {
    /// Input PDF file
    file_in: PathBuf,

    /// Output PDF file
    file_out: PathBuf,

    /// Destination paper size
    #[arg(long, value_enum)]
    paper: Option<PaperArg>,

    /// Number of blank pages to append
    #[arg(long)]
    blank: Option<usize>,

    /// Max number of pages per signature (must be a multiple of 4)
    #[arg(long)]
    signature: Option<usize>,

    /// Amount to reduce/increase distance from edge
    #[arg(long, allow_hyphen_values = true)]
    hoffset: Option<String>,

    /// Amount to reduce/increase width
    #[arg(long, allow_hyphen_values = true)]
    width: Option<String>,

    /// Amount to reduce/increase height
    #[arg(long, allow_hyphen_values = true)]
    height: Option<String>,

    /// Booklet size
    #[arg(long, value_enum)]
    size: Option<SizeArg>,

    /// Vertical alignment when scaled
    #[arg(long, value_enum)]
    valign: Option<ValignArg>,

    /// Load options from a JSON file; flags override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Save the effective options as JSON
    #[arg(long)]
    save_config: Option<PathBuf>,

    /// Show statistics only, don't generate PDF
    #[arg(long)]
    stats_only: bool,

    /// Additional logging for debugging
    #[arg(long)]
    debug: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum PaperArg {
    Letter,
    Legal,
    Tabloid,
    A5,
    A4,
}

#[derive(Clone, Copy, ValueEnum)]
enum SizeArg {
    Large,
    Small,
}

#[derive(Clone, Copy, ValueEnum)]
enum ValignArg {
    Top,
    Center,
    Bottom,
}

impl From<PaperArg> for PaperSize {
    fn from(arg: PaperArg) -> Self {
        match arg {
            PaperArg::Letter => Self::Letter,
            PaperArg::Legal => Self::Legal,
            PaperArg::Tabloid => Self::Tabloid,
            PaperArg::A5 => Self::A5,
            PaperArg::A4 => Self::A4,
        }
    }
}

impl From<SizeArg> for LayoutMode {
    fn from(arg: SizeArg) -> Self {
        match arg {
            SizeArg::Large => Self::Large,
            SizeArg::Small => Self::Small,
        }
    }
}

impl From<ValignArg> for Alignment {
    fn from(arg: ValignArg) -> Self {
        match arg {
            ValignArg::Top => Self::Top,
            ValignArg::Center => Self::Center,
            ValignArg::Bottom => Self::Bottom,
        }
    }
}

impl Cli {
    /// Flags layered over `options`
    fn apply(&self, mut options: BookletOptions) -> BookletOptions {
        if let Some(paper) = self.paper {
            options.paper = paper.into();
        }
        if let Some(blank) = self.blank {
            options.blank_pages = blank;
        }
        if let Some(signature) = self.signature {
            options.signature_size = signature;
        }
        if let Some(hoffset) = &self.hoffset {
            options.hoffset = Some(hoffset.clone());
        }
        if let Some(width) = &self.width {
            options.width_adjust = Some(width.clone());
        }
        if let Some(height) = &self.height {
            options.height_adjust = Some(height.clone());
        }
        if let Some(size) = self.size {
            options.layout = size.into();
        }
        if let Some(valign) = self.valign {
            options.alignment = valign.into();
        }
        options
    }
}

fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn load_options(path: Option<&Path>) -> Result<BookletOptions> {
    let Some(path) = path else {
        return Ok(BookletOptions::default());
    };
    let json = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("reading {}", path.display()))?;
    Ok(BookletOptions::from_json(&json)?)
}

async fn load_pdf(path: &Path) -> Result<Document> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("reading {}", path.display()))?;
    let doc = tokio::task::spawn_blocking(move || Document::load_mem(&bytes)).await??;
    Ok(doc)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);
    let start_time = Instant::now();

    let options = cli.apply(load_options(cli.config.as_deref()).await?);
    options.resolve()?;
    debug!("Options: {:?}", options);

    if let Some(path) = &cli.save_config {
        tokio::fs::write(path, options.to_json()?).await?;
        info!("Saved options to {}", path.display());
    }

    let source = load_pdf(&cli.file_in).await?;
    let page_count = source.get_pages().len();
    debug!(
        "Source PDF name={} page_count={}",
        cli.file_in.display(),
        page_count
    );

    let stats = pdf_booklet::calculate_statistics(page_count, &options)?;
    println!("Booklet Statistics:");
    println!("  Source pages: {}", stats.source_pages);
    println!("  Signatures: {}", stats.signatures);
    println!("  Output pages: {}", stats.output_pages);
    println!("  Blank pages added: {}", stats.blank_pages_added);
    println!("  Sheet sides: {}", stats.sheet_sides);
    println!("  Paper sheets: {}", stats.paper_sheets);

    if cli.stats_only {
        return Ok(());
    }

    let (bytes, summary) = tokio::task::spawn_blocking(move || {
        let mut writer = Vec::new();
        let summary = pdf_booklet::write_booklet(&source, &options, &mut writer)?;
        Ok::<_, pdf_booklet::BookletError>((writer, summary))
    })
    .await??;

    debug!("Writing new pages to output file");
    tokio::fs::write(&cli.file_out, bytes)
        .await
        .with_context(|| format!("writing {}", cli.file_out.display()))?;

    info!(
        "Processed {} new pdf pages in {:.2}s",
        summary.sheets,
        start_time.elapsed().as_secs_f64()
    );
    Ok(())
}
