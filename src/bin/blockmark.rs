//! Command-line interface for blockmark
//! This binary parses block markup documents and prints the node tree.
//!
//! Usage:
//!   blockmark parse `<path>` [--format `<format>`]  - Parse a document and print the node tree
//!   blockmark tree `<path>`                        - Print an indented outline of the blocks
//!
//! A path of `-` reads the document from stdin.

use clap::{Arg, Command};
use std::io::Read;

use blockmark::{parse, BlockNode};

fn main() {
    let matches = Command::new("blockmark")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for inspecting comment-delimited block markup")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("parse")
                .about("Parse a document and print the node tree")
                .arg(
                    Arg::new("path")
                        .help("Path to the document, or - for stdin")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format ('json', 'json-pretty', 'yaml')")
                        .default_value("json-pretty"),
                ),
        )
        .subcommand(
            Command::new("tree")
                .about("Print an indented outline of the blocks")
                .arg(
                    Arg::new("path")
                        .help("Path to the document, or - for stdin")
                        .required(true)
                        .index(1),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("parse", parse_matches)) => {
            let path = parse_matches.get_one::<String>("path").unwrap();
            let format = parse_matches.get_one::<String>("format").unwrap();
            handle_parse_command(path, format);
        }
        Some(("tree", tree_matches)) => {
            let path = tree_matches.get_one::<String>("path").unwrap();
            handle_tree_command(path);
        }
        _ => unreachable!(),
    }
}

/// Handle the parse command
fn handle_parse_command(path: &str, format: &str) {
    let document = read_document(path);
    let nodes = parse(&document);

    let output = match format {
        "json" => serde_json::to_string(&nodes).unwrap_or_else(|e| serialize_error(e)),
        "json-pretty" => serde_json::to_string_pretty(&nodes).unwrap_or_else(|e| serialize_error(e)),
        "yaml" => serde_yaml::to_string(&nodes).unwrap_or_else(|e| serialize_error(e)),
        other => {
            eprintln!("Unknown format: {} (expected 'json', 'json-pretty' or 'yaml')", other);
            std::process::exit(1);
        }
    };

    println!("{}", output);
}

/// Handle the tree command
fn handle_tree_command(path: &str) {
    let document = read_document(path);
    let nodes = parse(&document);
    print_tree(&nodes, 0);
}

fn read_document(path: &str) -> String {
    if path == "-" {
        let mut buffer = String::new();
        if let Err(e) = std::io::stdin().read_to_string(&mut buffer) {
            eprintln!("Error reading stdin: {}", e);
            std::process::exit(1);
        }
        return buffer;
    }

    std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file: {}", e);
        std::process::exit(1);
    })
}

fn serialize_error(e: impl std::fmt::Display) -> String {
    eprintln!("Serialization error: {}", e);
    std::process::exit(1);
}

fn print_tree(nodes: &[BlockNode], depth: usize) {
    let indent = "  ".repeat(depth);
    for node in nodes {
        match &node.name {
            Some(name) => println!(
                "{}{} ({} attrs, {} children)",
                indent,
                name,
                node.attributes.len(),
                node.children.len()
            ),
            None => println!("{}#text ({} chars)", indent, node.raw_inner.chars().count()),
        }
        print_tree(&node.children, depth + 1);
    }
}
