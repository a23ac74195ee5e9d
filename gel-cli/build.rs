use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the demos from src/demos.rs
// We need to duplicate this here since build scripts can't access src/ modules
const AVAILABLE_DEMOS: &[&str] = &["container", "document"];

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

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("gel")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Build and render markup trees")
        .arg_required_else_help(true)
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
                .arg(Arg::new("void").long("void").action(ArgAction::SetTrue))
                .arg(Arg::new("normal").long("normal").action(ArgAction::SetTrue))
                .arg(Arg::new("json").long("json").action(ArgAction::SetTrue)),
        )
        .subcommand(
            Command::new("gen-tags")
                .about("Emit the element constants module")
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("demo")
                .about("Render a demo tree")
                .arg(
                    Arg::new("name")
                        .value_parser(clap::builder::PossibleValuesParser::new(AVAILABLE_DEMOS))
                        .index(1),
                )
                .args(render_args()),
        )
        .subcommand(
            Command::new("page")
                .about("Render an html5 page whose body holds the included files")
                .arg(Arg::new("title").long("title").required(true))
                .arg(
                    Arg::new("include")
                        .long("include")
                        .short('i')
                        .action(ArgAction::Append)
                        .value_hint(ValueHint::FilePath),
                )
                .args(render_args()),
        );

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "gel", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "gel", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "gel", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
