use clap::Parser;
use htmlboard::{copy_html, read_stdin, HtmlboardError, SystemClipboard};
use std::process::ExitCode;

/// Copy HTML from stdin to the clipboard as rich text
///
/// Reads the whole of stdin, then publishes it as HTML together with a
/// tag-stripped plain-text fallback for apps that cannot paste rich text.
#[derive(Parser, Debug)]
#[command(name = "htmlboard")]
#[command(version, about, long_about = None)]
struct Args {
    /// Verbose output on stderr
    #[arg(short, long)]
    verbose: bool,

    /// Extra arguments are accepted and ignored
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    _rest: Vec<String>,
}

fn run(args: Args) -> Result<(), HtmlboardError> {
    if args.verbose {
        eprintln!("Reading HTML from stdin...");
    }
    let html = read_stdin()?;

    if args.verbose {
        eprintln!("Read {} bytes of HTML", html.len());
    }

    let mut clipboard = SystemClipboard::new()?;
    let plain = copy_html(&mut clipboard, &html)?;

    if args.verbose {
        eprintln!("Published {} bytes of plain text", plain.len());
    }
    println!("Copied to clipboard as rich text");

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
