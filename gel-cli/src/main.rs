// Command-line interface for gel
//
// This binary is a thin shell over gel-markup. It lists the known tag table, regenerates the
// element constants module, renders the demo trees and assembles simple html5 pages from files.
//
// Rendering settings come from gel-config: the embedded defaults, then `gel.toml` in the working
// directory, then `--config <path>`, then the flags given on the command line.
//
// Usage:
//  gel tags [--void|--normal] [--json]             - List known tags
//  gel gen-tags [--output <file>]                  - Emit the element constants module
//  gel demo [container|document] [--compact]       - Render a demo tree
//  gel page --title <title> [--include <file>]...  - Render an html5 page
//
// Set RUST_LOG=debug (or warn, info, ...) to see library diagnostics such as failed includes.

use gel_cli::codegen::{self, TagFilter};
use gel_cli::demos;

use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use gel_config::{GelConfig, Loader};
use gel_markup::elements::{BODY, HEAD, TITLE};
use gel_markup::{html5, Node};
use std::fs;

fn build_cli() -> Command {
    Command::new("gel")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Build and render markup trees")
        .long_about(
            "gel is a command-line companion to the gel-markup library.\n\n\
            Commands:\n  \
            - tags:     List the known tag names and whether they are void\n  \
            - gen-tags: Regenerate the element constants module\n  \
            - demo:     Render one of the bundled demo trees\n  \
            - page:     Render an html5 page from included files\n\n\
            Examples:\n  \
            gel demo                          # Indented container demo\n  \
            gel demo document --compact       # Whole document on one line\n  \
            gel page --title Home --include body.html\n  \
            gel gen-tags -o gel-markup/src/elements.rs",
        )
        .arg_required_else_help(true)
        .subcommand_required(true)
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a gel.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .subcommand(
            Command::new("tags")
                .about("List known tag names")
                .arg(
                    Arg::new("void")
                        .long("void")
                        .help("Only list void (self-closing) tags")
                        .action(ArgAction::SetTrue)
                        .conflicts_with("normal"),
                )
                .arg(
                    Arg::new("normal")
                        .long("normal")
                        .help("Only list tags that take a closing tag")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Print the table as JSON")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("gen-tags")
                .about("Emit the element constants module")
                .long_about(
                    "Print the Rust source of gel-markup's elements module.\n\n\
                    The output is deterministic: normal tags first, then void tags,\n\
                    one `Tag` constant per line.",
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
            Command::new("demo")
                .about("Render a demo tree")
                .arg(
                    Arg::new("name")
                        .help("Demo to render. Defaults to 'container'")
                        .required(false)
                        .value_parser(clap::builder::PossibleValuesParser::new(
                            demos::AVAILABLE_DEMOS,
                        ))
                        .index(1)
                        .value_hint(ValueHint::Other),
                )
                .args(render_args()),
        )
        .subcommand(
            Command::new("page")
                .about("Render an html5 page whose body holds the included files")
                .long_about(
                    "Render an html5 page.\n\n\
                    Each --include is resolved against `include.root` from the\n\
                    configuration and inserted verbatim into <body>, in order.\n\
                    Missing files are skipped with a warning.",
                )
                .arg(
                    Arg::new("title")
                        .long("title")
                        .help("Page title")
                        .required(true),
                )
                .arg(
                    Arg::new("include")
                        .long("include")
                        .short('i')
                        .value_name("FILE")
                        .help("File to insert into the body (repeatable)")
                        .action(ArgAction::Append)
                        .value_hint(ValueHint::FilePath),
                )
                .args(render_args()),
        )
}

fn render_args() -> [Arg; 2] {
    [
        Arg::new("compact")
            .long("compact")
            .help("Render on a single line")
            .action(ArgAction::SetTrue),
        Arg::new("indent-string")
            .long("indent-string")
            .value_name("S")
            .help("String written once per indentation level")
            .value_hint(ValueHint::Other),
    ]
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let matches = build_cli().get_matches();
    let mut config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));

    match matches.subcommand() {
        Some(("tags", sub_matches)) => {
            let filter = if sub_matches.get_flag("void") {
                TagFilter::Void
            } else if sub_matches.get_flag("normal") {
                TagFilter::Normal
            } else {
                TagFilter::All
            };
            handle_tags_command(filter, sub_matches.get_flag("json"));
        }
        Some(("gen-tags", sub_matches)) => {
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_gen_tags_command(output);
        }
        Some(("demo", sub_matches)) => {
            apply_render_overrides(&mut config, sub_matches);
            let name = sub_matches
                .get_one::<String>("name")
                .map(|s| s.as_str())
                .unwrap_or(demos::DEFAULT_DEMO);
            handle_demo_command(name, &config);
        }
        Some(("page", sub_matches)) => {
            apply_render_overrides(&mut config, sub_matches);
            let title = sub_matches
                .get_one::<String>("title")
                .map(|s| s.as_str())
                .unwrap_or_default();
            let includes: Vec<&str> = sub_matches
                .get_many::<String>("include")
                .map(|values| values.map(|s| s.as_str()).collect())
                .unwrap_or_default();
            handle_page_command(title, &includes, &config);
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

/// Handle the tags command
fn handle_tags_command(filter: TagFilter, json: bool) {
    let tags = codegen::list_tags(filter);

    if json {
        let rendered = serde_json::to_string_pretty(&tags).unwrap_or_else(|e| {
            eprintln!("Error: {e}");
            std::process::exit(1);
        });
        println!("{rendered}");
        return;
    }

    for tag in tags {
        let kind = if tag.void { "void" } else { "normal" };
        println!("{:<12} {kind}", tag.name);
    }
}

/// Handle the gen-tags command
fn handle_gen_tags_command(output: Option<&str>) {
    let module = codegen::generate_elements_module();
    match output {
        Some(path) => {
            fs::write(path, module).unwrap_or_else(|e| {
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            });
            log::info!("wrote element constants to {path}");
        }
        None => print!("{module}"),
    }
}

/// Handle the demo command
fn handle_demo_command(name: &str, config: &GelConfig) {
    let node = demos::build_demo(name).unwrap_or_else(|| {
        eprintln!("Error: unknown demo '{name}'");
        std::process::exit(1);
    });
    println!("{}", render_or_exit(&node, config));
}

/// Handle the page command
fn handle_page_command(title: &str, includes: &[&str], config: &GelConfig) {
    let page = build_page(title, includes, config);
    println!("{}", render_or_exit(&page, config));
}

fn build_page(title: &str, includes: &[&str], config: &GelConfig) -> Node {
    let inserter = config.include.inserter();
    let body: Vec<Node> = includes.iter().map(|file| inserter.include(file)).collect();
    html5(HEAD.add([TITLE.text([title])]), BODY.add(body))
}

fn render_or_exit(node: &Node, config: &GelConfig) -> String {
    node.render(&config.render.indentation())
        .unwrap_or_else(|err| {
            eprintln!("Error: {err}");
            std::process::exit(1);
        })
}

fn load_cli_config(explicit_path: Option<&str>) -> GelConfig {
    let loader = Loader::new().with_optional_file("gel.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}

fn apply_render_overrides(config: &mut GelConfig, matches: &ArgMatches) {
    if matches.get_flag("compact") {
        config.render.compact = true;
    }
    if let Some(indent) = matches.get_one::<String>("indent-string") {
        config.render.indent_string = indent.clone();
    }
}
