//! markpdf CLI - styled markup reconstruction from PDF fragment dumps

use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use markpdf::{
    extract_markup_with_stats, strip_tags, JsonSource, MarkupOptions, QuizClient, TagPolicy,
};

#[derive(Parser)]
#[command(name = "markpdf")]
#[command(version)]
#[command(about = "Reconstruct styled markup text from PDF fragment dumps", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a fragment dump to styled markup
    Markup {
        /// Input fragment dump (JSON)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Tag emission policy
        #[arg(long, value_enum, default_value = "wrapped")]
        policy: PolicyArg,

        /// Omit `--- Page n ---` markers
        #[arg(long)]
        no_page_markers: bool,

        /// Apply NFC normalization to fragment text
        #[arg(long)]
        normalize: bool,
    },

    /// Render a fragment dump to plain text (markup stripped)
    Text {
        /// Input fragment dump (JSON)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Omit `--- Page n ---` markers
        #[arg(long)]
        no_page_markers: bool,
    },

    /// Show dump information and extraction statistics
    Info {
        /// Input fragment dump (JSON)
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Extract multiple-choice questions via a hosted language model
    Quiz {
        /// Input fragment dump (JSON)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file for the question JSON (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// API key for the chat-completions endpoint
        #[arg(long, env = "MARKPDF_API_KEY", hide_env_values = true)]
        api_key: String,

        /// Model identifier
        #[arg(long)]
        model: Option<String>,

        /// Endpoint base URL
        #[arg(long)]
        base_url: Option<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum PolicyArg {
    /// Self-contained tag pair around every run
    Wrapped,
    /// Tags toggle across runs on style changes
    Toggled,
}

impl From<PolicyArg> for TagPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Wrapped => TagPolicy::Wrapped,
            PolicyArg::Toggled => TagPolicy::Toggled,
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Markup {
            input,
            output,
            policy,
            no_page_markers,
            normalize,
        } => cmd_markup(
            &input,
            output.as_deref(),
            policy,
            no_page_markers,
            normalize,
        ),
        Commands::Text {
            input,
            output,
            no_page_markers,
        } => cmd_text(&input, output.as_deref(), no_page_markers),
        Commands::Info { input } => cmd_info(&input),
        Commands::Quiz {
            input,
            output,
            api_key,
            model,
            base_url,
        } => cmd_quiz(&input, output.as_deref(), api_key, model, base_url),
    };

    if let Err(e) = result {
        eprintln!("{} {}", "Error:".red().bold(), e);
        process::exit(1);
    }
}

fn cmd_markup(
    input: &Path,
    output: Option<&Path>,
    policy: PolicyArg,
    no_page_markers: bool,
    normalize: bool,
) -> markpdf::Result<()> {
    let options = MarkupOptions::new()
        .with_policy(policy.into())
        .with_page_markers(!no_page_markers)
        .with_normalize_unicode(normalize);

    let source = JsonSource::from_path(input)?;
    let result = extract_markup_with_stats(&source, &options)?;
    log::debug!(
        "{} pages, {} runs",
        result.stats.page_count,
        result.stats.run_count
    );

    write_output(output, &result.content)
}

fn cmd_text(input: &Path, output: Option<&Path>, no_page_markers: bool) -> markpdf::Result<()> {
    let options = MarkupOptions::new().with_page_markers(!no_page_markers);

    let source = JsonSource::from_path(input)?;
    let result = extract_markup_with_stats(&source, &options)?;

    write_output(output, &strip_tags(&result.content))
}

fn cmd_info(input: &Path) -> markpdf::Result<()> {
    let source = JsonSource::from_path(input)?;
    let result = extract_markup_with_stats(&source, &MarkupOptions::default())?;
    let stats = &result.stats;

    println!("{}", "Fragment dump".bold());
    println!("  {} {}", "File:".cyan(), input.display());
    println!("  {} {}", "Pages:".cyan(), stats.page_count);
    println!("  {} {}", "Fragments:".cyan(), stats.fragment_count);
    println!("  {} {}", "Styled runs:".cyan(), stats.run_count);
    println!("  {} {}", "Line breaks:".cyan(), stats.line_break_count);
    println!("  {} {} bytes", "Markup size:".cyan(), result.content_len());

    Ok(())
}

fn cmd_quiz(
    input: &Path,
    output: Option<&Path>,
    api_key: String,
    model: Option<String>,
    base_url: Option<String>,
) -> markpdf::Result<()> {
    let source = JsonSource::from_path(input)?;
    let result = extract_markup_with_stats(&source, &MarkupOptions::default())?;

    let mut client = QuizClient::new(api_key);
    if let Some(model) = model {
        client = client.with_model(model);
    }
    if let Some(base_url) = base_url {
        client = client.with_base_url(base_url);
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .expect("valid spinner template"),
    );
    spinner.set_message("Extracting questions...");
    spinner.enable_steady_tick(std::time::Duration::from_millis(100));

    let runtime = tokio::runtime::Runtime::new()?;
    let questions = runtime.block_on(client.extract_questions(&result.content));
    spinner.finish_and_clear();
    let questions = questions?;

    println!(
        "{} {} question(s) extracted",
        "OK".green().bold(),
        questions.len()
    );

    let json = serde_json::to_string_pretty(&questions)
        .map_err(|e| markpdf::Error::Llm(e.to_string()))?;
    write_output(output, &json)
}

fn write_output(output: Option<&Path>, content: &str) -> markpdf::Result<()> {
    match output {
        Some(path) => {
            fs::write(path, content)?;
            eprintln!("{} {}", "Saved".green(), path.display());
        }
        None => println!("{}", content),
    }
    Ok(())
}
