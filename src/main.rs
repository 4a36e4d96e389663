use std::{fs, io, path::PathBuf};

use clap::Parser;
use sprig::{Mode, run};
use tracing::Level;

/// sprig runs programs written in a tiny C-like language, or shows how it
/// tokenizes and parses them.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Prints the tokens of the file instead of running it.
    #[arg(long, conflicts_with = "astdump")]
    lexdump: bool,

    /// Prints the syntax tree of the file instead of running it.
    #[arg(long)]
    astdump: bool,

    /// Logs what the interpreter is doing to standard error.
    #[arg(short, long)]
    verbose: bool,

    file: PathBuf,
}

impl Args {
    const fn mode(&self) -> Mode {
        if self.lexdump {
            Mode::LexDump
        } else if self.astdump {
            Mode::AstDump
        } else {
            Mode::Interpret
        }
    }
}

fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt().with_writer(io::stderr)
                             .with_target(false)
                             .with_max_level(if args.verbose { Level::DEBUG } else { Level::WARN })
                             .init();

    let file = args.file.display().to_string();
    let source = fs::read_to_string(&args.file).unwrap_or_else(|_| {
                     eprintln!("Failed to read the input file '{file}'. Perhaps this file does not exist?");
                     std::process::exit(1);
                 });

    if let Err(e) = run(&file, &source, args.mode(), io::stdout(), io::stderr()) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
