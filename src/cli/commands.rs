use crate::config::RoutesFile;
use crate::route::Route;
use crate::uri::{FieldValues, Query};
use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;

/// Command-line interface for brrtroute
///
/// Matches paths against a route template and generates URLs from one.
#[derive(Parser, Debug)]
#[command(name = "brrtroute")]
#[command(about = "brrtroute CLI", long_about = None)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Where the route comes from: an inline template or a named entry of a route file
#[derive(Args, Debug, Clone)]
pub struct RouteSource {
    /// Route template, e.g. `/user/{id:int}`
    #[arg(short, long, conflicts_with_all = ["routes", "name"], required_unless_present = "routes")]
    pub template: Option<String>,

    /// Route file (YAML or JSON)
    #[arg(short, long, requires = "name")]
    pub routes: Option<PathBuf>,

    /// Name of the route inside the route file
    #[arg(short, long, requires = "routes")]
    pub name: Option<String>,
}

impl RouteSource {
    pub fn load(&self) -> anyhow::Result<Route> {
        match (&self.template, &self.routes, &self.name) {
            (Some(template), _, _) => Ok(Route::new(template)?),
            (None, Some(routes), Some(name)) => {
                let file = RoutesFile::load(routes)?;
                Ok(file.build(name)?)
            }
            _ => anyhow::bail!("either --template or --routes with --name is required"),
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Match a path or URL and print the extracted fields as JSON
    ///
    /// Exits with status 1 when the path does not match.
    Match {
        #[command(flatten)]
        source: RouteSource,

        /// Path or URL to match
        path: String,
    },
    /// Generate a URL from field values
    Generate {
        #[command(flatten)]
        source: RouteSource,

        /// Field value as `name=value` (repeatable)
        #[arg(short, long = "field", value_parser = parse_field)]
        fields: Vec<(String, String)>,

        /// Query string to attach, e.g. `q=cats&page=2`
        #[arg(short, long)]
        query: Option<String>,
    },
    /// List the routes defined in a route file
    List {
        /// Route file (YAML or JSON)
        #[arg(short, long)]
        routes: PathBuf,
    },
}

/// Parse `name=value`
fn parse_field(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name.to_string(), value.to_string())),
        _ => Err(format!("expected name=value, got '{}'", s)),
    }
}

/// Execute a parsed command, writing results to `out`
///
/// Returns `false` when a `match` command found no match.
pub fn execute(cli: &Cli, out: &mut impl Write) -> anyhow::Result<bool> {
    match &cli.command {
        Commands::Match { source, path } => {
            let route = source.load()?;
            match route.matches(path.as_str()) {
                Some(params) => {
                    let json = serde_json::to_string(&params)?;
                    writeln!(out, "{}", json)?;
                    Ok(true)
                }
                None => Ok(false),
            }
        }
        Commands::Generate {
            source,
            fields,
            query,
        } => {
            let route = source.load()?;
            let values: FieldValues = fields.iter().cloned().collect();
            let url = route.url(Some(&values), query.as_deref().map(Query::from))?;
            writeln!(out, "{}", url)?;
            Ok(true)
        }
        Commands::List { routes } => {
            let file = RoutesFile::load(routes)
                .with_context(|| format!("cannot list routes in {}", routes.display()))?;
            for name in file.names() {
                let definition = file.definition(name)?;
                writeln!(out, "{}\t{}", name, definition.template)?;
            }
            Ok(true)
        }
    }
}

/// Parse arguments from the process and run the command
pub fn run_cli() -> anyhow::Result<bool> {
    let cli = Cli::parse();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let matched = execute(&cli, &mut out)?;
    if !matched {
        eprintln!("no match");
    }
    Ok(matched)
}
