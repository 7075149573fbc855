use anyhow::{Context, Result, bail};
use markdown_sluice_config::Config;
use markdown_sluice_engine::compile_to_writer;
use std::{
    env,
    fs::{self, File},
    io::{self, BufWriter, Read, Write},
    path::PathBuf,
    process::ExitCode,
};

const USAGE_EXIT: u8 = 2;

#[derive(Debug, Default, PartialEq, Eq)]
struct Args {
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    config: Option<PathBuf>,
    strict: bool,
    to_output_dir: bool,
}

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Run(Args),
    Help,
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
enum UsageError {
    #[error("unknown argument '{0}'")]
    UnknownArgument(String),
    #[error("{0} requires a value")]
    MissingValue(String),
}

fn usage(program: &str) -> String {
    format!(
        "Usage: {program} [-i <input.md>] [-o <output.html>] [--config <path>] [--strict] [-d]\n\
         \n\
         Reads Markdown from <input.md> (default: stdin) and writes HTML to\n\
         <output.html> (default: stdout).\n\
         \n\
         Options:\n\
         \x20 -i <input.md>       Markdown file to read\n\
         \x20 -o <output.html>    HTML file to write\n\
         \x20 --config <path>     Config file (default: {})\n\
         \x20 -d, --to-output-dir Write <output_dir>/<input stem>.html, with\n\
         \x20                     output_dir taken from the config file\n\
         \x20 --strict            Exit with status 1 if any warning is reported\n\
         \x20 -h, --help          Show this help",
        Config::config_path().display()
    )
}

fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Command, UsageError> {
    let mut parsed = Args::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-i" | "--input" => parsed.input = Some(path_value(&mut args, &arg)?),
            "-o" | "--output" => parsed.output = Some(path_value(&mut args, &arg)?),
            "--config" => parsed.config = Some(path_value(&mut args, &arg)?),
            "--strict" => parsed.strict = true,
            "-d" | "--to-output-dir" => parsed.to_output_dir = true,
            "-h" | "--help" => return Ok(Command::Help),
            _ => return Err(UsageError::UnknownArgument(arg)),
        }
    }

    Ok(Command::Run(parsed))
}

fn path_value(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<PathBuf, UsageError> {
    args.next()
        .map(PathBuf::from)
        .ok_or_else(|| UsageError::MissingValue(flag.to_string()))
}

fn load_config(args: &Args) -> Result<Config> {
    let config = match &args.config {
        Some(path) => Config::load_from_path(path)?
            .with_context(|| format!("config file '{}' does not exist", path.display()))?,
        None => Config::load()?.unwrap_or_default(),
    };
    log::debug!("Config: {config:?}");
    Ok(config)
}

fn read_source(input: Option<&PathBuf>) -> Result<Vec<u8>> {
    match input {
        Some(path) => fs::read(path)
            .with_context(|| format!("cannot open file '{}' for reading", path.display())),
        None => {
            let mut source = Vec::new();
            io::stdin()
                .lock()
                .read_to_end(&mut source)
                .context("cannot read from stdin")?;
            Ok(source)
        }
    }
}

fn open_sink(output: Option<&PathBuf>) -> Result<Box<dyn Write>> {
    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("cannot open file '{}' for writing", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(BufWriter::new(io::stdout().lock()))),
    }
}

/// Where the HTML goes: `-o`, else the configured output directory when
/// `-d` asks for it, else stdout (`None`).
fn output_path(args: &Args, config: &Config) -> Result<Option<PathBuf>> {
    if args.output.is_some() || !args.to_output_dir {
        return Ok(args.output.clone());
    }
    let Some(input) = args.input.as_deref() else {
        bail!("--to-output-dir requires an input file (-i)");
    };
    match config.output_for(input) {
        Some(path) => Ok(Some(path)),
        None => bail!("--to-output-dir requires output_dir in the config file"),
    }
}

/// Converts the input and reports whether the run counts as a failure.
fn run(args: Args) -> Result<bool> {
    let config = load_config(&args)?;
    let strict = args.strict || config.strict;

    let output = output_path(&args, &config)?;

    let source = read_source(args.input.as_ref())?;
    let sink = open_sink(output.as_ref())?;
    log::info!(
        "Compiling {} bytes from {} to {}",
        source.len(),
        args.input
            .as_ref()
            .map_or("stdin".into(), |p| p.display().to_string()),
        output
            .as_ref()
            .map_or("stdout".into(), |p| p.display().to_string()),
    );

    let report = compile_to_writer(&source, sink)?;

    let warnings = report.diagnostics.len();
    if strict && warnings > 0 {
        eprintln!("Error: {warnings} warning(s) reported in strict mode");
        return Ok(false);
    }
    Ok(true)
}

fn main() -> ExitCode {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Warn)
        .init();

    let mut args = env::args();
    let program = args.next().unwrap_or_else(|| "markdown-sluice".to_string());

    let args = match parse_args(args) {
        Ok(Command::Run(args)) => args,
        Ok(Command::Help) => {
            println!("{}", usage(&program));
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("{}", usage(&program));
            return ExitCode::from(USAGE_EXIT);
        }
    };

    match run(args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
