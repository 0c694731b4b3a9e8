//! CLI tool that translates Expression Language source files to C++.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use elc_rs::{Error, USAGE};

struct Options {
    source: PathBuf,
    output_dir: Option<PathBuf>,
    tokens: bool,
}

impl Options {
    fn parse(args: &[String]) -> Result<Self, Error> {
        let mut source = None;
        let mut output_dir = None;
        let mut tokens = false;

        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--tokens" => tokens = true,
                "-o" => {
                    let dir = iter.next().ok_or_else(usage)?;
                    output_dir = Some(PathBuf::from(dir));
                }
                flag if flag.starts_with('-') => return Err(usage()),
                path => {
                    if source.replace(PathBuf::from(path)).is_some() {
                        return Err(usage());
                    }
                }
            }
        }

        Ok(Self {
            source: source.ok_or_else(usage)?,
            output_dir,
            tokens,
        })
    }
}

fn usage() -> Error {
    Error::Usage(USAGE.to_string())
}

fn print_help() {
    eprintln!("Usage: elc [--tokens] <source.el> [-o <output-dir>]");
    eprintln!();
    eprintln!("Translates <source.el> into <source>.cpp next to it,");
    eprintln!("or into <output-dir> when -o is given.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --tokens  Write the token stream instead of C++");
    eprintln!("  -o DIR    Directory for the generated file");
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.is_empty() || args[0] == "--help" || args[0] == "-h" {
        print_help();
        return ExitCode::from(2);
    }

    let options = match Options::parse(&args) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::from(2);
        }
    };

    let output = match elc_rs::output_path(&options.source, options.output_dir.as_deref()) {
        Ok(path) => path,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::from(2);
        }
    };

    println!(
        "compiling '{}' -> '{}'",
        options.source.display(),
        output.display()
    );

    let result = if options.tokens {
        dump_tokens(&options.source)
    } else {
        elc_rs::translate_file(&options.source)
    };

    let create_dir = options.output_dir.is_some();
    match result {
        Ok(text) => {
            if options.tokens {
                print!("{text}");
            }
            match write_output(&output, &text, create_dir) {
                Ok(()) => ExitCode::SUCCESS,
                Err(e) => {
                    eprintln!("{}: {e}", output.display());
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            eprintln!("{e}");
            // The output file holds only the error message.
            if let Err(io) = write_output(&output, &format!("{e}\n"), create_dir) {
                eprintln!("{}: {io}", output.display());
            }
            if matches!(e, Error::Usage(_)) {
                ExitCode::from(2)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}

fn dump_tokens(source: &Path) -> Result<String, Error> {
    use std::fmt::Write as _;

    let input = elc_rs::read_source(source)?;
    let mut out = String::new();
    for token in elc_rs::tokenize(&input)? {
        let _ = writeln!(out, "{token}");
    }
    Ok(out)
}

/// Write the generated file. Only an explicit `-o` directory is created;
/// otherwise the source's directory must already exist.
fn write_output(path: &Path, text: &str, create_dir: bool) -> std::io::Result<()> {
    if let Some(parent) = path
        .parent()
        .filter(|p| create_dir && !p.as_os_str().is_empty())
    {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, text)
}
