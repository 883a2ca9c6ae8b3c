//! mini-lang CLI - demonstration driver
//!
//! Usage:
//!   mini-cli <FILE>             Parse a source file and print the AST
//!   mini-cli -e <CODE>          Parse inline source
//!   mini-cli --tokens <FILE>    Print the token listing only
//!   mini-cli -o json ...        Machine-readable output
//!   cat file | mini-cli         Read source from stdin

mod output;

use clap::Parser;
use mini_lang::lexer::{tokenize, TokenKind};
use mini_lang::parser::parse;
use output::{
    format_error_json, format_program_json, format_program_text, format_tokens_json,
    format_tokens_text, OutputMode,
};
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

/// mini-lang demonstration driver
#[derive(Parser, Debug)]
#[command(name = "mini-cli")]
#[command(version, about = "Tokenize and parse mini-lang source", long_about = None)]
struct Args {
    /// The source file to parse (optional if using -e or stdin)
    file: Option<PathBuf>,

    /// Parse inline source
    #[arg(short = 'e', long = "eval")]
    eval: Option<String>,

    /// Print the token listing and skip parsing
    #[arg(long = "tokens")]
    tokens: bool,

    /// Output format: text (default), json
    #[arg(short = 'o', long = "output", value_name = "FORMAT")]
    output: Option<String>,
}

/// Parse the output mode from CLI args.
fn parse_output_mode(args: &Args) -> Result<OutputMode, String> {
    match args.output.as_deref() {
        None | Some("text") => Ok(OutputMode::Text),
        Some("json") => Ok(OutputMode::Json),
        Some(other) => Err(format!("Invalid output format: '{}'. Use: text, json", other)),
    }
}

fn get_source(args: &Args) -> Result<String, String> {
    // Priority: -e flag > file argument > stdin
    if let Some(ref source) = args.eval {
        return Ok(source.clone());
    }

    if let Some(ref path) = args.file {
        return std::fs::read_to_string(path)
            .map_err(|e| format!("Error reading file {:?}: {}", path, e));
    }

    if !atty::is(atty::Stream::Stdin) {
        let mut source = String::new();
        std::io::stdin()
            .read_to_string(&mut source)
            .map_err(|e| format!("Error reading from stdin: {}", e))?;
        return Ok(source);
    }

    Err("No input provided. Use: mini-cli <FILE>, mini-cli -e <CODE>, or pipe to stdin".to_string())
}

fn main() -> ExitCode {
    let args = Args::parse();

    let output_mode = match parse_output_mode(&args) {
        Ok(mode) => mode,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::from(1);
        }
    };

    let source = match get_source(&args) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::from(1);
        }
    };

    let tokens = tokenize(&source);

    if args.tokens {
        match output_mode {
            OutputMode::Text => print!("{}", format_tokens_text(&tokens)),
            OutputMode::Json => println!("{}", format_tokens_json(&tokens)),
        }
        return ExitCode::SUCCESS;
    }

    // Comments are ordinary tokens; filter them at the boundary before parsing
    let significant: Vec<_> = tokens
        .into_iter()
        .filter(|t| t.kind != TokenKind::Comment)
        .collect();

    match parse(&significant) {
        Ok(program) => {
            match output_mode {
                OutputMode::Text => print!("{}", format_program_text(&program)),
                OutputMode::Json => println!("{}", format_program_json(&program)),
            }
            ExitCode::SUCCESS
        }
        Err(error) => {
            match output_mode {
                OutputMode::Text => eprintln!("Parse error: {}", error),
                OutputMode::Json => println!("{}", format_error_json(&error)),
            }
            ExitCode::from(2)
        }
    }
}
