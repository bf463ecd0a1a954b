use std::io;
use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

use crate::query::SortOrder;
use crate::types::{DEFAULT_DATA_PATH, DEFAULT_SKIPPED_PATH};

#[derive(Parser)]
#[command(name = "repofolio")]
#[command(about = "Browse, sort and search a catalog of GitHub projects")]
#[command(version)]
pub struct Cli {
    /// Configuration file (default: ./repofolio.yaml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Arguments shared by the commands that show the catalog
#[derive(Args, Debug, Clone, Default)]
pub struct ViewArgs {
    /// Catalog document to load (overrides the configured data_path)
    #[arg(short, long)]
    pub data: Option<PathBuf>,

    /// Sort order: date-newest, date-oldest, alphabetical-asc, alphabetical-desc
    #[arg(short, long, value_parser = parse_sort_order)]
    pub sort: Option<SortOrder>,

    /// Only show projects whose name or description contains this text
    #[arg(short = 'q', long)]
    pub search: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the catalog as an HTML page
    Render {
        #[command(flatten)]
        view: ViewArgs,

        /// Expand the issue list of the project at this position (repeatable)
        #[arg(short, long = "expand", value_name = "N")]
        expand: Vec<usize>,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Emit only the project list element
        #[arg(long)]
        fragment: bool,
    },

    /// List the catalog in the terminal
    #[command(visible_alias = "l")]
    Ls {
        #[command(flatten)]
        view: ViewArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Drive the list with sort/search/toggle events read from stdin
    Browse {
        #[command(flatten)]
        view: ViewArgs,
    },

    /// Build the catalog document from a saved GitHub API export
    Ingest {
        /// JSON array of repositories (GET /users/{user}/repos)
        #[arg(long)]
        repos: PathBuf,

        /// Directory holding <repo name>.json issue listings
        #[arg(long)]
        issues_dir: Option<PathBuf>,

        /// Attach issues to each repository
        #[arg(long)]
        include_issues: bool,

        /// Catalog output file
        #[arg(short, long, default_value = DEFAULT_DATA_PATH)]
        output: PathBuf,

        /// Where to list repositories that have no issues
        #[arg(long, default_value = DEFAULT_SKIPPED_PATH)]
        skipped: PathBuf,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for [possible values: bash, zsh, fish, powershell, elvish]
        shell: Shell,
    },
}

impl ViewArgs {
    fn as_options<'a>(&'a self, config: Option<&'a PathBuf>) -> crate::commands::ViewOptions<'a> {
        crate::commands::ViewOptions {
            config_path: config.map(PathBuf::as_path),
            data_path: self.data.as_deref(),
            sort: self.sort,
            search: self.search.as_deref(),
        }
    }
}

impl Cli {
    /// Execute the command, dispatching to the appropriate handler.
    pub async fn run(self) -> crate::error::Result<()> {
        use crate::commands::{
            IngestOptions, RenderCommandOptions, cmd_browse, cmd_ingest, cmd_ls, cmd_render,
        };
        use crate::ingest::IngestSource;

        let config = self.config.as_ref();
        match self.command {
            Commands::Render {
                ref view,
                ref expand,
                ref output,
                fragment,
            } => {
                cmd_render(RenderCommandOptions {
                    view: view.as_options(config),
                    expand: expand.clone(),
                    output: output.clone(),
                    fragment,
                })
                .await
            }

            Commands::Ls { ref view, json } => cmd_ls(view.as_options(config), json).await,

            Commands::Browse { ref view } => cmd_browse(view.as_options(config)).await,

            Commands::Ingest {
                ref repos,
                ref issues_dir,
                include_issues,
                ref output,
                ref skipped,
            } => cmd_ingest(IngestOptions {
                source: IngestSource {
                    repos_path: repos.clone(),
                    issues_dir: issues_dir.clone(),
                    include_issues,
                },
                output: output.clone(),
                skipped: skipped.clone(),
            }),

            Commands::Completions { shell } => {
                generate_completions(shell);
                Ok(())
            }
        }
    }
}

fn parse_sort_order(s: &str) -> Result<SortOrder, String> {
    s.parse().map_err(|_| {
        format!(
            "Invalid sort order. Must be one of: {}",
            SortOrder::ALL_STRINGS.join(", ")
        )
    })
}

pub fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "repofolio", &mut io::stdout());
}
