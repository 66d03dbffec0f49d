// Command-line interface for procdoc
//
// This binary turns Capability/Process Pattern XML records into Markdown. The
// conversion itself lives in procdoc-babel; this crate only parses arguments,
// loads configuration, installs the logger and writes results.
//
// Usage:
//  procdoc [DIR]                                - Publish every directory below DIR (default)
//  procdoc generate [DIR]                       - Same as above (explicit)
//  procdoc convert <FILE> [-o <OUT>]            - Render one record to stdout or OUT
//  procdoc table --headers A,B <JSON>           - Render JSON records as a table
//
// Extra Parameters:
//
// Configuration keys can be overridden with --extra-<key> <value>. The CLI layer
// strips the "extra-" prefix and applies the value on top of the loaded config.
// Example:
//  procdoc generate docs --extra-separator "***" --extra-file-name INDEX.md

use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use log::{error, info, LevelFilter};
use procdoc_babel::{convert_file, format_table, publish_tree, TableRecord};
use procdoc_config::{Loader, ProcdocConfig};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use std::collections::HashMap;
use std::fs;
use std::io::Read;
use std::path::Path;
use std::process;

const SUBCOMMANDS: &[&str] = &["generate", "convert", "table", "help"];

/// Parse extra-* arguments from command line args
/// Returns (cleaned_args_without_extras, extra_params_map)
///
/// Supports both:
/// - `--extra-<key> <value>` (explicit value)
/// - `--extra-<key>` (flag, defaults to "true")
/// - `--extras-<key>` (alias for `--extra-<key>`)
fn parse_extra_args(args: &[String]) -> (Vec<String>, HashMap<String, String>) {
    let mut cleaned_args = Vec::new();
    let mut extra_params = HashMap::new();
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];

        let key_opt = arg
            .strip_prefix("--extra-")
            .or_else(|| arg.strip_prefix("--extras-"));

        if let Some(key) = key_opt {
            let has_value = args.get(i + 1).is_some_and(|next| !looks_like_flag(next));

            if has_value {
                extra_params.insert(key.to_string(), args[i + 1].clone());
                i += 2;
            } else {
                extra_params.insert(key.to_string(), "true".to_string());
                i += 1;
            }
            continue;
        }

        cleaned_args.push(arg.clone());
        i += 1;
    }

    (cleaned_args, extra_params)
}

/// `-v`, `--config`, ... but not values made of dashes such as `---`.
fn looks_like_flag(arg: &str) -> bool {
    arg.len() > 1
        && arg.starts_with('-')
        && arg
            .trim_start_matches('-')
            .starts_with(|c: char| c.is_ascii_alphabetic())
}

/// Global flags that may precede the subcommand. `--config` takes a value.
fn global_flag_width(arg: &str) -> Option<usize> {
    match arg {
        "--config" => Some(2),
        "--verbose" | "--quiet" => Some(1),
        _ if arg.starts_with("--config=") => Some(1),
        _ if arg.len() > 1
            && arg.starts_with('-')
            && arg[1..].chars().all(|c| c == 'v' || c == 'q') =>
        {
            Some(1)
        }
        _ => None,
    }
}

/// Insert the default `generate` subcommand when none was given.
///
/// Leading global flags are stepped over, so `procdoc -q convert a.xml` keeps
/// its subcommand while `procdoc -q docs` becomes `procdoc -q generate docs`.
fn with_default_subcommand(mut args: Vec<String>) -> Vec<String> {
    let mut index = 1;
    while let Some(width) = args.get(index).and_then(|arg| global_flag_width(arg)) {
        index += width;
    }

    let explicit = args.get(index).is_some_and(|arg| {
        SUBCOMMANDS.contains(&arg.as_str())
            || matches!(arg.as_str(), "--help" | "-h" | "--version" | "-V")
    });
    if !explicit {
        args.insert(index.min(args.len()), "generate".to_string());
    }
    args
}

fn build_cli() -> Command {
    Command::new("procdoc")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Generate Markdown documentation from Capability/Process Pattern XML")
        .long_about(
            "procdoc renders Capability/Process Pattern (CPP) XML records as Markdown.\n\n\
            Commands:\n  \
            - generate: Write one Markdown file per directory of records (default)\n  \
            - convert:  Render a single record\n  \
            - table:    Render JSON records as an aligned Markdown table\n\n\
            Extra Parameters:\n  \
            Use --extra-<key> <value> to override configuration, e.g.\n  \
            --extra-separator, --extra-file-name, --extra-namespace.\n\n\
            Examples:\n  \
            procdoc                                  # Publish below the current directory\n  \
            procdoc generate patterns/               # Publish below patterns/\n  \
            procdoc convert CPP-001.xml -o cpp.md    # Render one record to a file\n  \
            procdoc table --headers Step,Note rows.json",
        )
        .subcommand_required(true)
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a procdoc.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log per-section detail")
                .action(ArgAction::SetTrue)
                .conflicts_with("quiet")
                .global(true),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .short('q')
                .help("Only log errors")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("generate")
                .about("Write a Markdown document for every directory of records (default command)")
                .long_about(
                    "Find every record below DIR and write one Markdown document per\n\
                    directory, next to the records (README.md by default).\n\n\
                    Records are rendered in path order and separated by a rule line.\n\
                    Records that fail to parse are reported and skipped; the exit\n\
                    status is 1 if any record failed.",
                )
                .arg(
                    Arg::new("dir")
                        .help("Root directory to search (defaults to the current directory)")
                        .default_value(".")
                        .index(1)
                        .value_hint(ValueHint::DirPath),
                ),
        )
        .subcommand(
            Command::new("convert")
                .about("Render a single record")
                .arg(
                    Arg::new("input")
                        .help("Record XML file")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("table")
                .about("Render a JSON array of records as a Markdown table")
                .long_about(
                    "Render records as an aligned Markdown table.\n\n\
                    The input is a JSON array of objects mapping column names to cell\n\
                    text. Columns follow the --headers order; missing keys are empty.\n\n\
                    Examples:\n  \
                    procdoc table --headers Purpose,\"Worst Case\" rows.json\n  \
                    echo '[{\"A\":\"1\"}]' | procdoc table --headers A -",
                )
                .arg(
                    Arg::new("headers")
                        .long("headers")
                        .value_name("A,B,...")
                        .help("Comma-separated column names")
                        .required(true)
                        .value_delimiter(','),
                )
                .arg(
                    Arg::new("input")
                        .help("JSON file, or - for stdin")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                ),
        )
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    // Parse extra-* arguments before clap processing
    let (cleaned_args, mut extra_params) = parse_extra_args(&args);

    let matches = build_cli()
        .try_get_matches_from(with_default_subcommand(cleaned_args))
        .unwrap_or_else(|e| e.exit());

    init_logger(log_level(&matches));

    let mut config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));
    apply_config_overrides(&mut config, &mut extra_params);
    for key in extra_params.keys() {
        log::warn!("Ignoring unknown parameter --extra-{key}");
    }

    let status = match matches.subcommand() {
        Some(("generate", sub_matches)) => {
            let dir = sub_matches
                .get_one::<String>("dir")
                .map(|s| s.as_str())
                .unwrap_or(".");
            handle_generate_command(dir, &config)
        }
        Some(("convert", sub_matches)) => {
            let Some(input) = sub_matches.get_one::<String>("input") else {
                fail("Missing input file");
            };
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_convert_command(input, output, &config)
        }
        Some(("table", sub_matches)) => {
            let headers: Vec<String> = sub_matches
                .get_many::<String>("headers")
                .map(|values| values.map(|h| h.trim().to_string()).collect())
                .unwrap_or_default();
            let Some(input) = sub_matches.get_one::<String>("input") else {
                fail("Missing JSON input");
            };
            handle_table_command(&headers, input)
        }
        _ => fail("Unknown subcommand. Use --help for usage information."),
    };

    process::exit(status);
}

fn log_level(matches: &ArgMatches) -> LevelFilter {
    if matches.get_flag("verbose") {
        LevelFilter::Debug
    } else if matches.get_flag("quiet") {
        LevelFilter::Error
    } else {
        LevelFilter::Info
    }
}

fn init_logger(level: LevelFilter) {
    // stdout carries converted output, so every log record goes to stderr.
    if TermLogger::init(level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto).is_err() {
        eprintln!("Logger already initialized");
    }
}

/// Log a fatal error and exit with status 1.
fn fail(message: &str) -> ! {
    error!("{message}");
    process::exit(1);
}

/// Publish every directory below `dir`. Returns the exit status.
fn handle_generate_command(dir: &str, config: &ProcdocConfig) -> i32 {
    let root = Path::new(dir);
    if !root.is_dir() {
        fail(&format!("Not a directory: {dir}"));
    }

    let reports = publish_tree(root, &config.render_options(), &config.publish_options())
        .unwrap_or_else(|e| fail(&e.to_string()));

    let converted: usize = reports.iter().map(|r| r.converted.len()).sum();
    let failed: usize = reports.iter().map(|r| r.failed.len()).sum();
    info!(
        "Converted {converted} record(s) in {} director(ies), {failed} failed",
        reports.len()
    );

    if failed > 0 {
        1
    } else {
        0
    }
}

/// Render one record to stdout or `output`.
fn handle_convert_command(input: &str, output: Option<&str>, config: &ProcdocConfig) -> i32 {
    let markdown = convert_file(Path::new(input), &config.render_options())
        .unwrap_or_else(|e| fail(&e.to_string()));

    match output {
        Some(path) => {
            fs::write(path, markdown)
                .unwrap_or_else(|e| fail(&format!("Error writing file '{path}': {e}")));
            info!("Wrote {path}");
        }
        None => print!("{markdown}"),
    }
    0
}

/// Render JSON records read from `input` (or stdin for `-`) as a table.
fn handle_table_command(headers: &[String], input: &str) -> i32 {
    let source = if input == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .unwrap_or_else(|e| fail(&format!("Error reading stdin: {e}")));
        buffer
    } else {
        fs::read_to_string(input)
            .unwrap_or_else(|e| fail(&format!("Error reading file '{input}': {e}")))
    };

    let records: Vec<TableRecord> = serde_json::from_str(&source)
        .unwrap_or_else(|e| fail(&format!("Invalid table records: {e}")));

    let table = format_table(headers, &records);
    if !table.is_empty() {
        println!("{table}");
    }
    0
}

fn load_cli_config(explicit_path: Option<&str>) -> ProcdocConfig {
    let loader = Loader::new().with_optional_file("procdoc.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader
        .build()
        .unwrap_or_else(|err| fail(&format!("Failed to load configuration: {err}")))
}

fn apply_config_overrides(config: &mut ProcdocConfig, extra_params: &mut HashMap<String, String>) {
    if let Some(raw) = take_override(extra_params, &["namespace", "source-namespace"]) {
        config.source.namespace = raw;
    }
    if let Some(raw) = take_override(extra_params, &["extension", "ext"]) {
        config.source.extension = raw;
    }
    if let Some(raw) = take_override(extra_params, &["file-name", "output-file"]) {
        config.output.file_name = raw;
    }
    if let Some(raw) = take_override(extra_params, &["separator"]) {
        config.output.separator = raw;
    }
    if let Some(raw) = take_override(extra_params, &["missing-label"]) {
        config.render.missing_label = raw;
    }
    if let Some(raw) = take_override(extra_params, &["solution-language", "language"]) {
        config.render.solution_language = raw;
    }
}

fn take_override(map: &mut HashMap<String, String>, keys: &[&str]) -> Option<String> {
    for key in keys {
        if let Some(value) = map.remove(*key) {
            return Some(value);
        }
    }
    None
}
