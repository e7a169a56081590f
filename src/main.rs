use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use recase::case::CaseStyle;
use recase::cli::output::OutputFormat;
use recase::{cli, renamer, Config};
use std::io;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "recase")]
#[command(version, about = "A blazingly fast file renamer CLI", long_about = None)]
struct Cli {
    /// File or directory to rename
    ///
    /// When PATH is a directory, files in subdirectories are renamed
    /// too. Use --depth to limit how deep the traversal goes.
    #[arg(value_name = "PATH")]
    path: Option<PathBuf>,

    /// Case style to rename files into
    ///
    /// Supported styles:
    ///   title:        This is an Example
    ///   pascal:       ThisIsAnExample
    ///   camel:        thisIsAnExample
    ///   snake:        this_is_an_example
    ///   kebab:        this-is-an-example
    ///   pascal-snake: This_Is_An_Example
    ///   pascal-kebab: This-Is-An-Example
    #[arg(short, long, verbatim_doc_comment)]
    case: Option<CaseStyle>,

    /// Maximum directory depth to descend, counted from 1
    #[arg(short, long)]
    depth: Option<usize>,

    /// Show what would be renamed without touching any files
    #[arg(short = 'n', long)]
    dry_run: bool,

    /// Preserve words that are entirely upper-case, e.g. "GO is fun" -> "GO-is-fun"
    #[arg(short, long)]
    keep_upper: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Output format (text, json)
    #[arg(short = 'o', long, default_value = "text")]
    format: OutputFormat,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Handle shell completion generation
    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "recase", &mut io::stdout());
        return Ok(());
    }

    // Validate input path
    let path = match cli.path {
        Some(ref path) if !path.as_os_str().is_empty() => path.clone(),
        _ => anyhow::bail!("No path specified. Use --help for usage information."),
    };

    let style = match cli.case {
        Some(style) => style,
        None => anyhow::bail!("No case style specified. Use --help for usage information."),
    };

    // Load configuration
    let config = Config::load(cli.depth, cli.keep_upper)?;
    if config.depth == 0 {
        anyhow::bail!("Depth must be at least 1");
    }

    if cli.dry_run && matches!(cli.format, OutputFormat::Text) {
        cli::output::print_dry_run_notice(!cli.no_color);
    }

    // Process the tree
    let renamer = renamer::Renamer::new(style, &config, cli.dry_run);
    let report = renamer.run(&path, !cli.no_color, &cli.format)?;

    // Print summary
    match cli.format {
        OutputFormat::Text => cli::output::print_summary(&report, cli.dry_run, !cli.no_color),
        OutputFormat::Json => cli::output::print_json_report(&report),
    }

    // Exit with appropriate code
    if report.failed > 0 {
        std::process::exit(1);
    }

    Ok(())
}
