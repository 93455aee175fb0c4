use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::Parser;

use wpblocks::config::OutputFormat;
use wpblocks::{Diagnostic, Severity, parse, strip_markers};

mod cli;
use cli::{Cli, Commands, FormatArg};

fn read_all(path: Option<&PathBuf>) -> io::Result<String> {
    match path {
        Some(p) => fs::read_to_string(p),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn start_dir_for(input_path: &Option<PathBuf>) -> io::Result<PathBuf> {
    if let Some(p) = input_path {
        Ok(p.parent().unwrap_or(Path::new(".")).to_path_buf())
    } else {
        std::env::current_dir()
    }
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Debug => OutputFormat::Debug,
            FormatArg::Summary => OutputFormat::Summary,
        }
    }
}

fn main() -> io::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Parse {
            file,
            format,
            compact,
            check,
        } => {
            let start_dir = start_dir_for(&file)?;
            let (cfg, cfg_path) = wpblocks::config::load(cli.config.as_deref(), &start_dir)?;

            if let Some(path) = &cfg_path {
                log::debug!("Using config from: {}", path.display());
            } else {
                log::debug!("Using default config");
            }

            let input = read_all(file.as_ref())?;
            let output = parse(&input, Some(&cfg));

            let format = format.map(OutputFormat::from).unwrap_or(cfg.output);
            let pretty = cfg.pretty && !compact;
            println!("{}", wpblocks::output::render(&output, format, pretty)?);

            print_diagnostics(&output.diagnostics, &input, file.as_ref());

            if check && !output.diagnostics.is_empty() {
                std::process::exit(1);
            }

            Ok(())
        }
        Commands::Strip { file } => {
            let input = read_all(file.as_ref())?;
            println!("{}", strip_markers(&input));
            Ok(())
        }
    }
}

fn print_diagnostics(diagnostics: &[Diagnostic], input: &str, file: Option<&PathBuf>) {
    let file_name = file.and_then(|p| p.to_str()).unwrap_or("<stdin>");

    for diag in diagnostics {
        let severity_str = match diag.severity {
            Severity::Error => "\x1b[31merror\x1b[0m",     // red
            Severity::Warning => "\x1b[33mwarning\x1b[0m", // yellow
        };

        match diag.location(input) {
            Some(loc) => eprintln!(
                "{severity_str}[{}]: {} at {}:{}:{}",
                diag.code, diag.message, file_name, loc.line, loc.column
            ),
            None => eprintln!(
                "{severity_str}[{}]: {} in {}",
                diag.code, diag.message, file_name
            ),
        }
    }
}
