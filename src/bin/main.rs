//! schema-ld CLI
//!
//! Command-line tool for building schema.org JSON-LD documents.

use std::fs;
use std::io::Read;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use serde_json::Value;

use schema_ld::{
    breadcrumbs, parse_base_url, parse_specs, resolve_breadcrumbs, to_json_string, to_jsonld,
    BreadcrumbItem, NodeSpec, RenderOptions, SchemaError,
};

#[derive(Parser)]
#[command(name = "schema-ld")]
#[command(about = "Build schema.org JSON-LD structured data")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build nodes described in a JSON file
    Build(BuildArgs),
    /// Build a BreadcrumbList from NAME=TARGET pairs
    Breadcrumbs(BreadcrumbsArgs),
}

#[derive(Args)]
struct OutputArgs {
    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,

    /// Don't wrap output in the schema.org @context
    #[arg(long)]
    no_context: bool,

    /// Resolve relative URL targets against this base URL
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,
}

impl OutputArgs {
    fn render_options(&self) -> RenderOptions {
        RenderOptions {
            include_context: !self.no_context,
            pretty: self.pretty,
        }
    }
}

#[derive(Args)]
struct BuildArgs {
    /// JSON file with one node spec or an array of them ("-" for stdin)
    input: String,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Args)]
struct BreadcrumbsArgs {
    /// Trail entries in order: --item Home=/ --item Blog=/blog
    #[arg(long = "item", value_name = "NAME=TARGET")]
    items: Vec<String>,

    #[command(flatten)]
    output: OutputArgs,
}

/// Split a NAME=TARGET argument on its first '='
fn parse_item(arg: &str) -> Result<BreadcrumbItem, SchemaError> {
    match arg.split_once('=') {
        Some((name, target)) => Ok(BreadcrumbItem::new(name, target)),
        None => Err(SchemaError::InvalidInput(format!(
            "breadcrumb item must be NAME=TARGET: {}",
            arg
        ))),
    }
}

/// Read input from a file path or stdin
fn read_input(source: &str) -> Result<String, SchemaError> {
    if source == "-" {
        let mut content = String::new();
        std::io::stdin().read_to_string(&mut content)?;
        return Ok(content);
    }

    let path = PathBuf::from(source);
    if !path.is_file() {
        return Err(SchemaError::InvalidPath(path));
    }
    Ok(fs::read_to_string(&path)?)
}

/// Write output to file or stdout
fn write_output(content: &str, output: Option<&PathBuf>) -> Result<(), SchemaError> {
    match output {
        Some(path) => {
            fs::write(path, content)?;
            eprintln!("Wrote structured data to {}", path.display());
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}

fn emit(nodes: Vec<Value>, output: &OutputArgs) -> Result<(), SchemaError> {
    let options = output.render_options();
    let doc = to_jsonld(nodes, &options)?;
    let content = to_json_string(&doc, options.pretty)?;
    write_output(&content, output.output.as_ref())
}

fn run_build(args: BuildArgs) -> Result<(), SchemaError> {
    let content = read_input(&args.input)?;
    let mut specs = parse_specs(&content)?;

    if let Some(base) = &args.output.base_url {
        let base = parse_base_url(base)?;
        specs = specs
            .into_iter()
            .map(|spec| spec.resolve_against(&base))
            .collect::<Result<Vec<NodeSpec>, SchemaError>>()?;
    }

    let nodes = specs
        .into_iter()
        .map(NodeSpec::build)
        .collect::<Result<Vec<Value>, SchemaError>>()?;

    eprintln!("Built {} structured data nodes", nodes.len());
    emit(nodes, &args.output)
}

fn run_breadcrumbs(args: BreadcrumbsArgs) -> Result<(), SchemaError> {
    let mut items = args
        .items
        .iter()
        .map(|arg| parse_item(arg))
        .collect::<Result<Vec<BreadcrumbItem>, SchemaError>>()?;

    if let Some(base) = &args.output.base_url {
        items = resolve_breadcrumbs(&items, &parse_base_url(base)?)?;
    }

    let list = breadcrumbs(items);
    eprintln!("Built BreadcrumbList with {} items", list.count());
    emit(vec![serde_json::to_value(&list)?], &args.output)
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Build(args) => run_build(args),
        Commands::Breadcrumbs(args) => run_breadcrumbs(args),
    };

    if let Err(e) = result {
        log::debug!("command failed: {:?}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
