//! seqscript CLI

use clap::{Parser as ClapParser, Subcommand};
use seqscript_error::{DiagnosticRenderer, SourceFile};
use seqscript_lexer::Scanner;
use seqscript_parser::{Parser, Statement};
use std::fs;
use std::path::PathBuf;

#[derive(ClapParser)]
#[command(name = "seqscript")]
#[command(version = "0.1.0")]
#[command(about = "Sequence-diagram language tools", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Shows file tokens (debug)
    Lex {
        /// Input file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Shows the parsed statements and the participant table
    Parse {
        /// Input file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Checks for errors without printing statements
    Check {
        /// Input file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Lex { input } => {
            let (_, source) = read_input(&input);

            let mut scanner = Scanner::new(&source);
            let tokens = scanner.scan_all();

            for token in &tokens {
                println!(
                    "  {:4}:{:<3}  {}",
                    token.span.start.line, token.span.start.column, token.kind
                );
            }

            println!("\nTotal: {} tokens", tokens.len());
        }

        Commands::Parse { input } => {
            let (file, source) = read_input(&input);
            let mut parser = Parser::new(&source);
            let mut count = 0usize;

            loop {
                match parser.parse_next() {
                    Ok(Some(statement)) => {
                        count += 1;
                        println!("{}. {}", count, format_statement(&statement));
                    }
                    Ok(None) => break,
                    Err(err) => {
                        let renderer = DiagnosticRenderer::new(&file);
                        eprintln!("{}", renderer.render(&err.to_diagnostic()));
                        std::process::exit(1);
                    }
                }
            }

            println!("\nParticipants ({}):", parser.definitions().len());
            for def in parser.definitions() {
                match &def.alias {
                    Some(alias) => println!("  {} {} as {}", def.kind, def.name, alias),
                    None => println!("  {} {}", def.kind, def.name),
                }
            }
        }

        Commands::Check { input } => {
            let (file, source) = read_input(&input);
            let mut parser = Parser::new(&source);
            let mut count = 0usize;

            loop {
                match parser.parse_next() {
                    Ok(Some(_)) => count += 1,
                    Ok(None) => break,
                    Err(err) => {
                        let renderer = DiagnosticRenderer::new(&file);
                        eprintln!("{}", renderer.render(&err.to_diagnostic()));
                        std::process::exit(1);
                    }
                }
            }

            println!("ok: {} statements", count);
        }
    }
}

/// Reads the input file, exiting with a message on failure
fn read_input(input: &PathBuf) -> (SourceFile, String) {
    match fs::read_to_string(input) {
        Ok(source) => {
            let file = SourceFile::new(input.display().to_string(), source.as_str());
            (file, source)
        }
        Err(e) => {
            eprintln!("Error reading file: {}", e);
            std::process::exit(1);
        }
    }
}

/// Formats a statement for display
fn format_statement(statement: &Statement) -> String {
    match statement {
        Statement::Definition(def) => {
            let alias_str = def
                .alias
                .as_ref()
                .map(|a| format!(" as {}", a))
                .unwrap_or_default();
            format!("Definition {} {}{}", def.kind, def.name, alias_str)
        }
        Statement::Message(msg) => {
            let desc_str = if msg.description.is_empty() {
                String::new()
            } else {
                format!(" : {}", msg.description)
            };
            format!("Message {} {} {}{}", msg.from, msg.arrow, msg.to, desc_str)
        }
        Statement::Blank => "Blank".to_string(),
    }
}
