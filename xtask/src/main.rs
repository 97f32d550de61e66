//! Development tasks for markwise.
//!
//! Run with `cargo run -p xtask -- <task>`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

#[derive(Parser, Debug)]
#[command(name = "xtask")]
#[command(about = "Development tasks for markwise", long_about = None)]
struct XtaskCli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate man pages for the CLI and each subcommand
    Man {
        /// Output directory
        #[arg(long, default_value = "target/man")]
        out_dir: PathBuf,
    },
    /// Generate shell completion scripts
    Completions {
        /// Output directory
        #[arg(long, default_value = "target/completions")]
        out_dir: PathBuf,

        /// Only generate for this shell (default: all)
        #[arg(long, value_enum)]
        shell: Option<ShellArg>,
    },
    /// Generate man pages and completions
    Dist {
        /// Output directory root
        #[arg(long, default_value = "target/dist")]
        out_dir: PathBuf,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ShellArg {
    Bash,
    Elvish,
    Fish,
    Powershell,
    Zsh,
}

impl From<ShellArg> for Shell {
    fn from(shell: ShellArg) -> Self {
        match shell {
            ShellArg::Bash => Self::Bash,
            ShellArg::Elvish => Self::Elvish,
            ShellArg::Fish => Self::Fish,
            ShellArg::Powershell => Self::PowerShell,
            ShellArg::Zsh => Self::Zsh,
        }
    }
}

fn main() -> io::Result<()> {
    let cli = XtaskCli::parse();

    match cli.command {
        Commands::Man { out_dir } => man(&out_dir),
        Commands::Completions { out_dir, shell } => completions(&out_dir, shell),
        Commands::Dist { out_dir } => {
            man(&out_dir.join("man"))?;
            completions(&out_dir.join("completions"), None)
        }
    }
}

fn man(out_dir: &Path) -> io::Result<()> {
    fs::create_dir_all(out_dir)?;
    let cmd = markwise::command();
    clap_mangen::generate_to(cmd, out_dir)?;
    println!("man pages written to {}", out_dir.display());
    Ok(())
}

fn completions(out_dir: &Path, only: Option<ShellArg>) -> io::Result<()> {
    fs::create_dir_all(out_dir)?;
    let shells: Vec<Shell> = match only {
        Some(shell) => vec![shell.into()],
        None => ShellArg::value_variants()
            .iter()
            .map(|s| Shell::from(*s))
            .collect(),
    };

    let mut cmd = markwise::command();
    let name = cmd.get_name().to_string();
    for shell in shells {
        let path = clap_complete::generate_to(shell, &mut cmd, &name, out_dir)?;
        println!("{shell} completions written to {}", path.display());
    }
    Ok(())
}
