use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use pdfsmith::{Document, Font, Page};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "pdfsmith",
    about = "Generate simple PDF documents",
    version,
    author
)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a simple PDF with text
    Create {
        /// Output file path
        #[arg(short, long)]
        output: PathBuf,

        /// Text to include in the PDF, one line per newline
        #[arg(short, long)]
        text: String,

        /// Document title
        #[arg(long)]
        title: Option<String>,

        /// Document author
        #[arg(long)]
        author: Option<String>,

        /// Store the content stream without Flate compression
        #[arg(long)]
        no_compress: bool,

        /// Page size
        #[arg(long, value_enum, default_value_t = PageSize::A4)]
        page_size: PageSize,
    },

    /// Generate a demo PDF with several fonts and pages
    Demo {
        /// Output file path
        #[arg(short, long, default_value = "demo.pdf")]
        output: PathBuf,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum PageSize {
    A4,
    Letter,
}

impl PageSize {
    fn page(self) -> Page {
        match self {
            PageSize::A4 => Page::a4(),
            PageSize::Letter => Page::letter(),
        }
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "pdfsmith=warn",
        1 => "pdfsmith=debug",
        _ => "pdfsmith=trace",
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn create_command(
    output: PathBuf,
    text: &str,
    title: Option<String>,
    author: Option<String>,
    compress: bool,
    page_size: PageSize,
) -> Result<()> {
    let mut doc = Document::new();
    if let Some(title) = title {
        doc.set_title(title);
    }
    if let Some(author) = author {
        doc.set_author(author);
    }
    doc.set_compress(compress);

    let mut page = page_size.page();
    let top = page.height() - 92.0;
    for (index, line) in text.lines().enumerate() {
        page.text(Font::Helvetica, 24.0, 50.0, top - 30.0 * index as f64, line);
    }
    doc.add_page(page);

    doc.save(&output)
        .with_context(|| format!("failed to write {}", output.display()))?;
    info!(path = %output.display(), "created PDF");
    println!("PDF created successfully!");
    Ok(())
}

fn demo_command(output: PathBuf) -> Result<()> {
    let mut doc = Document::new();
    doc.set_title("pdfsmith Demo");
    doc.set_author("pdfsmith CLI");
    doc.set_subject("Standard Type1 fonts");

    let mut cover = Page::a4();
    cover
        .text(Font::HelveticaBold, 36.0, 100.0, 700.0, "pdfsmith Demo")
        .text(
            Font::Helvetica,
            16.0,
            100.0,
            650.0,
            "Native Rust PDF Generation",
        );
    doc.add_page(cover);

    let mut fonts = Page::letter();
    let mut y = 720.0;
    for font in Font::ALL {
        fonts.text(font, 14.0, 72.0, y, font.pdf_name());
        y -= 24.0;
    }
    doc.add_page(fonts);

    doc.save(&output)
        .with_context(|| format!("failed to write {}", output.display()))?;
    info!(path = %output.display(), pages = doc.page_count(), "created demo PDF");
    println!("Demo PDF created successfully!");
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Create {
            output,
            text,
            title,
            author,
            no_compress,
            page_size,
        } => create_command(output, &text, title, author, !no_compress, page_size),
        Commands::Demo { output } => demo_command(output),
    }
}
