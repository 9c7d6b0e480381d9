// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! fxpeek CLI - FXML Previewer Core
//!
//! Runs the sanitize-and-inline pipeline over FXML files and prints the
//! safe document plus the harvested stylesheet URLs.

use std::env;
use std::process::ExitCode;

use fxpeek::{Previewer, sanitize};

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("fxpeek=info".parse().unwrap()),
        )
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return ExitCode::from(1);
    }

    match args[1].as_str() {
        "preview" => {
            if args.len() < 3 {
                eprintln!("Usage: fxpeek preview <file> [--json]");
                return ExitCode::from(1);
            }
            let json = args.iter().any(|a| a == "--json");
            preview_file(&args[2], json).await
        }
        "sanitize" => {
            if args.len() < 3 {
                eprintln!("Usage: fxpeek sanitize <file>");
                return ExitCode::from(1);
            }
            sanitize_file(&args[2]).await
        }
        "styles" => {
            if args.len() < 3 {
                eprintln!("Usage: fxpeek styles <file>");
                return ExitCode::from(1);
            }
            list_styles(&args[2]).await
        }
        "--help" | "-h" | "help" => {
            print_usage();
            ExitCode::SUCCESS
        }
        "--version" | "-v" | "version" => {
            println!("fxpeek {}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        cmd => {
            eprintln!("Unknown command: {}", cmd);
            print_usage();
            ExitCode::from(1)
        }
    }
}

fn print_usage() {
    println!(
        r#"fxpeek - FXML Previewer Core

USAGE:
    fxpeek <COMMAND> [OPTIONS]

COMMANDS:
    preview <file>      Sanitize, inline and print the safe document
    sanitize <file>     Strip code-bearing constructs only, print the result
    styles <file>       Print the harvested stylesheet URLs
    help                Show this help message
    version             Show version information

OPTIONS:
    --json              With preview: print the document as JSON

EXAMPLES:
    fxpeek preview ui/main.fxml
    fxpeek preview ui/main.fxml --json
    fxpeek sanitize ui/main.fxml
    fxpeek styles ui/main.fxml

For more information, see: https://github.com/bountyyfi/fxpeek
"#
    );
}

async fn preview_file(path: &str, json: bool) -> ExitCode {
    let previewer = match Previewer::new() {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Failed to create previewer: {}", e);
            return ExitCode::from(1);
        }
    };

    match previewer.preview_file(path).await {
        Ok(doc) => {
            if json {
                match serde_json::to_string_pretty(&doc) {
                    Ok(out) => println!("{}", out),
                    Err(e) => {
                        eprintln!("Failed to serialize document: {}", e);
                        return ExitCode::from(1);
                    }
                }
            } else {
                println!("{}", doc.xml);
                if !doc.stylesheets.is_empty() {
                    println!("\n=== Stylesheets ({}) ===", doc.stylesheets.len());
                    for url in &doc.stylesheets {
                        println!("  - {}", url);
                    }
                }
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Failed to preview {}: {}", path, e);
            ExitCode::from(1)
        }
    }
}

async fn sanitize_file(path: &str) -> ExitCode {
    match tokio::fs::read_to_string(path).await {
        Ok(xml) => {
            println!("{}", sanitize(&xml));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Failed to read {}: {}", path, e);
            ExitCode::from(1)
        }
    }
}

async fn list_styles(path: &str) -> ExitCode {
    let previewer = match Previewer::new() {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Failed to create previewer: {}", e);
            return ExitCode::from(1);
        }
    };

    match previewer.preview_file(path).await {
        Ok(doc) => {
            if doc.stylesheets.is_empty() {
                println!("No stylesheets found");
            } else {
                for url in &doc.stylesheets {
                    println!("{}", url);
                }
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Failed to process {}: {}", path, e);
            ExitCode::from(1)
        }
    }
}
