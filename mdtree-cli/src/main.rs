//! Command-line interface for mdtree
//! Parses a markup file and renders it as an HTML page plus stylesheet, or in another format.
//!
//! Usage:
//!   mdtree `<input>` [-o `<page.html>`] [-s `<styles.css>`]    - Write the page and its stylesheet
//!   mdtree `<input>` --format treeviz                        - Print another format to stdout
//!   mdtree --list-formats                                    - List the available formats
//!
//! Settings are layered: embedded defaults, then the file given with --config, then flags.

mod logging;

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use mdtree_babel::{render_page, FormatRegistry};
use mdtree_config::{ConfigError, Loader, MdtreeConfig};
use mdtree_parser::mdtree::formats::to_treeviz_str;
use mdtree_parser::{parse_reader, Document};
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;
use std::process;

fn main() {
    let matches = Command::new("mdtree")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert lightweight markup into an HTML page and stylesheet")
        .arg_required_else_help(true)
        .arg(
            Arg::new("input")
                .help("Path to the markup file")
                .required_unless_present("list-formats")
                .index(1),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .help("Where to write the HTML page (default: output.html)"),
        )
        .arg(
            Arg::new("styles")
                .long("styles")
                .short('s')
                .help("Where to write the stylesheet (default: styles.css)"),
        )
        .arg(
            Arg::new("verbosity")
                .long("verbosity")
                .short('v')
                .help("0 = off, 1 = errors, 2 = warnings, 3 = info")
                .value_parser(value_parser!(u8).range(0..=3)),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format")
                .default_value("html"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Configuration file layered over the defaults"),
        )
        .arg(
            Arg::new("print-tree")
                .long("print-tree")
                .help("Also print the parsed tree to stdout")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    let config = load_config(&matches)
        .unwrap_or_else(|e| fail(&format!("Configuration error: {}", e)));
    if let Err(e) = logging::init(&config.logging) {
        fail(&format!("Cannot open log file: {}", e));
    }

    let Some(input) = matches.get_one::<String>("input") else {
        fail("An input file is required");
    };
    let format = matches
        .get_one::<String>("format")
        .map(String::as_str)
        .unwrap_or("html");
    handle_convert_command(input, format, &config);
}

/// Defaults, then the --config file, then flags.
fn load_config(matches: &ArgMatches) -> Result<MdtreeConfig, ConfigError> {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if let Some(&verbosity) = matches.get_one::<u8>("verbosity") {
        loader = loader.set_override("logging.verbosity", i64::from(verbosity))?;
    }
    if let Some(output) = matches.get_one::<String>("output") {
        loader = loader.set_override("output.html", output.as_str())?;
    }
    if let Some(styles) = matches.get_one::<String>("styles") {
        loader = loader.set_override("output.stylesheet", styles.as_str())?;
    }
    if matches.get_flag("print-tree") {
        loader = loader.set_override("output.print_tree", true)?;
    }
    loader.build()
}

fn handle_convert_command(input: &str, format: &str, config: &MdtreeConfig) {
    let registry = FormatRegistry::with_defaults();
    if !registry.has(format) {
        fail(&format!(
            "Unknown format '{}'. Available formats: {}",
            format,
            registry.list_formats().join(", ")
        ));
    }

    let doc = parse_file(Path::new(input));
    tracing::info!(
        blocks = doc.blocks().len(),
        warnings = doc.warnings().count(),
        "parsed {}",
        input
    );

    if config.output.print_tree {
        print!("{}", to_treeviz_str(&doc));
    }

    if format == "html" {
        write_page(&doc, config);
    } else {
        match registry.serialize(&doc, format) {
            Ok(output) => print!("{}", output),
            Err(e) => fail(&format!("Error formatting output: {}", e)),
        }
    }
}

fn parse_file(path: &Path) -> Document {
    let file = File::open(path)
        .unwrap_or_else(|e| fail(&format!("Failed to read {}: {}", path.display(), e)));
    parse_reader(BufReader::new(file)).unwrap_or_else(|e| {
        tracing::error!("parse aborted: {}", e);
        fail(&format!("Failed to parse {}: {}", path.display(), e))
    })
}

fn write_page(doc: &Document, config: &MdtreeConfig) {
    let stylesheet = &config.output.stylesheet;
    let page = render_page(doc, &stylesheet.to_string_lossy())
        .unwrap_or_else(|e| fail(&format!("Error rendering HTML: {}", e)));

    let html_path = &config.output.html;
    fs::write(html_path, page.html)
        .unwrap_or_else(|e| fail(&format!("Failed to write {}: {}", html_path.display(), e)));
    fs::write(stylesheet, page.css)
        .unwrap_or_else(|e| fail(&format!("Failed to write {}: {}", stylesheet.display(), e)));
    tracing::info!("wrote {} and {}", html_path.display(), stylesheet.display());
}

fn handle_list_formats_command() {
    let registry = FormatRegistry::with_defaults();
    println!("Available formats:\n");
    for name in registry.list_formats() {
        if let Ok(format) = registry.get(&name) {
            println!("  {:<10} {}", name, format.description());
        }
    }
}

fn fail(message: &str) -> ! {
    eprintln!("{}", message);
    process::exit(1);
}
