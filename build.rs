use clap::{Command, CommandFactory};
use clap_complete::{Shell, generate_to};
use clap_mangen::Man;
use std::env;
use std::fs;
use std::io::Result;
use std::path::{Path, PathBuf};

// The build script only needs the command definition, not the parsed values.
#[path = "src/cli.rs"]
#[allow(dead_code)]
mod cli;

use cli::Cli;

const BIN: &str = "wpblocks";

fn generate_completions(outdir: &std::ffi::OsString) -> Result<()> {
    let mut cmd = Cli::command();

    for shell in [
        Shell::Bash,
        Shell::Fish,
        Shell::Zsh,
        Shell::PowerShell,
        Shell::Elvish,
    ] {
        generate_to(shell, &mut cmd, BIN, outdir)?;
    }

    Ok(())
}

fn write_page(cmd: Command, title: &str, out_dir: &Path) -> Result<()> {
    let mut buffer = Vec::new();
    Man::new(cmd).title(title).render(&mut buffer)?;
    fs::write(out_dir.join(format!("{title}.1")), buffer)
}

/// `wpblocks.1` plus one page per subcommand (`wpblocks-parse.1`,
/// `wpblocks-strip.1`), whose synopsis reads `wpblocks parse ...`.
fn generate_man_pages(out_dir: &Path) -> Result<()> {
    fs::create_dir_all(out_dir)?;

    let cmd = Cli::command();
    write_page(cmd.clone(), BIN, out_dir)?;

    for subcommand in cmd.get_subcommands() {
        let name = subcommand.get_name();
        if name == "help" {
            continue;
        }

        let page = subcommand.clone().bin_name(format!("{BIN} {name}"));
        write_page(page, &format!("{BIN}-{name}"), out_dir)?;
    }

    Ok(())
}

fn main() -> Result<()> {
    if let Some(outdir) = env::var_os("OUT_DIR") {
        generate_completions(&outdir)?;
    }

    generate_man_pages(&PathBuf::from("target/man"))?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=build.rs");

    Ok(())
}
