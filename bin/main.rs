use std::fs::File;
use std::io::{BufWriter, IsTerminal, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use cnfdot::cnf::{Cnf, Statistics};
use cnfdot::error::CnfDotError;
use cnfdot::input::{read_input, InputSource};
use cnfdot::options::RenderOptions;

/// Exit status when stdin was requested but holds no CNF. Chosen apart from
/// clap's usage error status (2).
const MISSING_STDIN_STATUS: u8 = 3;

#[derive(Debug, Clone, ValueEnum)]
enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    None,
}

impl LogLevel {
    fn to_trace(&self) -> Option<tracing::Level> {
        Some(match self {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::None => return None,
        })
    }
}

/// Convert CNF to a DOT file.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The CNF expression in JSON, a file containing it, or '-' to read from stdin
    #[arg(value_name = "CNF")]
    cnf: String,

    /// Where to store the DOT graph
    #[arg(value_name = "OUT.dot")]
    out: PathBuf,

    /// Include the cluster id in node labels; for example, "x1"
    /// in cluster 2 will be denoted as "x1_2".
    #[arg(short = 'c', long)]
    with_cluster_id: bool,

    /// Name of the rendered graph.
    #[arg(long, default_value = "G")]
    graph_name: String,

    /// Print size statistics of the rendered graph.
    #[arg(short, long)]
    print_statistics: bool,

    /// Verbosity level. See `tracing::Level` for more information.
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    verbosity: LogLevel,
}

fn main() -> ExitCode {
    let args = Cli::parse();

    if let Some(level) = args.verbosity.to_trace() {
        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_writer(std::io::stderr)
            .init();
    }

    let stdin = std::io::stdin();
    let is_terminal = stdin.is_terminal();
    match run(&args, &mut stdin.lock(), is_terminal) {
        Ok(statistics) => {
            if args.print_statistics {
                println!("{statistics}");
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::from(exit_status(&err))
        }
    }
}

fn exit_status(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<CnfDotError>() {
        Some(CnfDotError::MissingStdin) => MISSING_STDIN_STATUS,
        _ => 1,
    }
}

/// Render the CNF described by `args` and write it to `args.out`.
/// The output file is created only once the whole document is rendered.
fn run(args: &Cli, stdin: &mut dyn Read, stdin_is_terminal: bool) -> anyhow::Result<Statistics> {
    let source = InputSource::from_arg(&args.cnf);
    let expression = read_input(&source, stdin, stdin_is_terminal)?;

    let options = RenderOptions::builder()
        .include_cluster_id_in_label(args.with_cluster_id)
        .graph_name(args.graph_name.clone())
        .build();
    let cnf = match Cnf::from_json(&expression, &options) {
        Err(err @ CnfDotError::MalformedJson(_))
            if matches!(source, InputSource::Inline(_)) && !args.cnf.contains('[') =>
        {
            return Err(anyhow::Error::new(err).context(format!(
                "'{}' is not a file, parsed it as a JSON expression",
                args.cnf
            )));
        }
        result => result?,
    };
    let rendered = cnf.render();

    write_to_file(&args.out, |writer| rendered.dot.write(writer))
        .with_context(|| format!("could not write DOT graph to '{}'", args.out.display()))?;
    tracing::info!(path = %args.out.display(), "rendered CNF");

    Ok(rendered.statistics)
}

fn write_to_file(
    path: &Path,
    writer: impl Fn(&mut dyn Write) -> std::io::Result<()>,
) -> std::io::Result<()> {
    let f = File::create(path)?;
    let mut b = BufWriter::new(f);
    writer(&mut b as &mut dyn Write)
}
