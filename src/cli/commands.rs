use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use super::output::OutputFormat;

/// Registry generation and landing-page rendering for the web playground
#[derive(Parser, Debug)]
#[command(
    name = "playground",
    about = "Registry generation and landing-page rendering for the web playground",
    version,
    author,
    long_about = "playground scans the sample packages directory, derives display metadata \
                  from each package manifest, and renders the result as navigable cards: \
                  a generated registry module for compile-time use and a static landing \
                  page that needs no script execution."
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, global = true, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(short = 'v', long, global = true, help = "Increase verbosity")]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        global = true,
        conflicts_with = "verbose",
        help = "Quiet mode - suppress non-error output"
    )]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(
        about = "Generate the registry data module from the packages directory",
        long_about = "Scans the packages directory, merges the curated external entries, \
                      and writes the sorted registry as a generated Rust module.\n\n\
                      Examples:\n  \
                      playground generate\n  \
                      playground generate path/to/packages\n  \
                      playground generate --out src/registry/generated.rs"
    )]
    Generate(GenerateArgs),

    #[command(
        about = "Render the static landing page",
        long_about = "Builds the registry and splices the card markup into the page \
                      template, producing a landing page that is fully navigable \
                      without scripts.\n\n\
                      Examples:\n  \
                      playground render\n  \
                      playground render --template templates/index.html --out dist/index.html\n  \
                      playground render --bundled"
    )]
    Render(RenderArgs),

    #[command(
        about = "List registry entries",
        long_about = "Builds the registry and prints its entries for inspection.\n\n\
                      Examples:\n  \
                      playground list\n  \
                      playground list --format json\n  \
                      playground list --bundled"
    )]
    List(ListArgs),
}

#[derive(Parser, Debug, Clone)]
pub struct GenerateArgs {
    #[arg(
        value_name = "PATH",
        help = "Packages directory (defaults to the configured path)"
    )]
    pub packages_dir: Option<PathBuf>,

    #[arg(
        short = 'o',
        long,
        value_name = "FILE",
        help = "Write the generated module to FILE instead of the configured path"
    )]
    pub out: Option<PathBuf>,

    #[arg(long, help = "Skip the hand-curated external entries")]
    pub no_curated: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct RenderArgs {
    #[arg(
        value_name = "PATH",
        help = "Packages directory (defaults to the configured path)"
    )]
    pub packages_dir: Option<PathBuf>,

    #[arg(
        short = 't',
        long,
        value_name = "FILE",
        help = "Page template containing the cards placeholder"
    )]
    pub template: Option<PathBuf>,

    #[arg(
        short = 'o',
        long,
        value_name = "FILE",
        help = "Write the rendered page to FILE instead of the configured path"
    )]
    pub out: Option<PathBuf>,

    #[arg(long, help = "Render from the bundled registry instead of scanning")]
    pub bundled: bool,

    #[arg(long, help = "Skip the hand-curated external entries")]
    pub no_curated: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct ListArgs {
    #[arg(
        value_name = "PATH",
        help = "Packages directory (defaults to the configured path)"
    )]
    pub packages_dir: Option<PathBuf>,

    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "human",
        help = "Output format"
    )]
    pub format: OutputFormatArg,

    #[arg(long, help = "List the bundled registry instead of scanning")]
    pub bundled: bool,

    #[arg(long, help = "Skip the hand-curated external entries")]
    pub no_curated: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormatArg {
    /// Human-readable formatted text
    Human,
    /// JSON format (machine-readable)
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_generate() {
        let args = CliArgs::try_parse_from(["playground", "generate", "packages"]).unwrap();
        match args.command {
            Commands::Generate(g) => {
                assert_eq!(g.packages_dir.unwrap(), PathBuf::from("packages"));
                assert!(!g.no_curated);
            }
            other => panic!("expected generate, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_list_format() {
        let args =
            CliArgs::try_parse_from(["playground", "list", "--format", "json", "--bundled"])
                .unwrap();
        match args.command {
            Commands::List(l) => {
                assert_eq!(l.format, OutputFormatArg::Json);
                assert!(l.bundled);
            }
            other => panic!("expected list, got {other:?}"),
        }
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        assert!(CliArgs::try_parse_from(["playground", "list", "-v", "-q"]).is_err());
    }
}
