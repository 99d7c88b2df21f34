use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::io;
use std::path::{Path, PathBuf};
use xvg_lib::{DataMatrix, FileKind, Layout, ReadOptions, XvgFile};

#[derive(Parser)]
#[command(name = "xvg", version, about = "Read numeric data from xvg plot files")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Copy, Clone, Debug, Default, ValueEnum)]
enum OutputFormat {
    /// JSON array of rows
    #[default]
    Json,
    /// Tab-separated rows
    Tsv,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the data matrix, optionally filtered and reordered by variable name
    Read {
        input: PathBuf,
        /// Variable to include; repeat to select several, in output order
        #[arg(long = "var", value_name = "NAME")]
        vars: Vec<String>,
        /// Print one row per variable instead of one row per sample
        #[arg(long)]
        unpack: bool,
        /// Fail on variable names the file does not define
        #[arg(long)]
        strict: bool,
        /// TOML file with read options; flags given here take precedence
        #[arg(long)]
        config: Option<PathBuf>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },
    /// Print title, axis labels, variable names and layout as JSON
    Vars { input: PathBuf },
    /// Print comment and directive lines collected from the header as JSON
    Header { input: PathBuf },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.command {
        Commands::Read {
            input,
            vars,
            unpack,
            strict,
            config,
            format,
        } => cmd_read(&input, vars, unpack, strict, config.as_deref(), format)?,
        Commands::Vars { input } => cmd_vars(&input)?,
        Commands::Header { input } => cmd_header(&input)?,
    }
    Ok(())
}

fn load_options(
    config: Option<&Path>,
    vars: Vec<String>,
    unpack: bool,
    strict: bool,
) -> Result<ReadOptions> {
    let mut options = match config {
        Some(path) => ReadOptions::load(path)
            .with_context(|| format!("loading options from {}", path.display()))?,
        None => ReadOptions::default(),
    };
    if !vars.is_empty() {
        options = options.with_variables(vars);
    }
    if unpack {
        options = options.with_unpack(true);
    }
    if strict {
        options = options.strict();
    }
    Ok(options)
}

fn cmd_read(
    input: &Path,
    vars: Vec<String>,
    unpack: bool,
    strict: bool,
    config: Option<&Path>,
    format: OutputFormat,
) -> Result<()> {
    let options = load_options(config, vars, unpack, strict)?;
    let data = xvg_lib::read_with(input, &options)
        .with_context(|| format!("reading {}", input.display()))?;
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string(&data.to_rows())?),
        OutputFormat::Tsv => write_tsv(&data)?,
    }
    Ok(())
}

fn write_tsv(data: &DataMatrix) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .from_writer(io::stdout());
    for row in data.rows() {
        writer.write_record(row.iter().map(|v| v.to_string()))?;
    }
    writer.flush()?;
    Ok(())
}

#[derive(Serialize)]
struct VarsSummary<'a> {
    title: Option<&'a str>,
    xaxis: Option<&'a str>,
    yaxis: Option<&'a str>,
    variables: &'a [String],
    kind: FileKind,
    layout: Layout,
}

fn cmd_vars(input: &Path) -> Result<()> {
    let file = XvgFile::open(input, ReadOptions::default())
        .with_context(|| format!("reading {}", input.display()))?;
    let summary = VarsSummary {
        title: file.title(),
        xaxis: file.xaxis_label(),
        yaxis: file.yaxis_label(),
        variables: file.variables(),
        kind: file.kind()?,
        layout: file.layout()?,
    };
    println!("{}", serde_json::to_string(&summary)?);
    Ok(())
}

#[derive(Serialize)]
struct HeaderSummary<'a> {
    comments: &'a [String],
    directives: &'a [String],
    first_data_index: Option<usize>,
    first_data_line: Option<&'a str>,
}

fn cmd_header(input: &Path) -> Result<()> {
    let file = XvgFile::open(input, ReadOptions::default())
        .with_context(|| format!("reading {}", input.display()))?;
    let header = file.header();
    let summary = HeaderSummary {
        comments: &header.comments,
        directives: &header.directives,
        first_data_index: header.first_data.as_ref().map(|f| f.index),
        first_data_line: header.first_data.as_ref().map(|f| f.text.as_str()),
    };
    println!("{}", serde_json::to_string(&summary)?);
    Ok(())
}
