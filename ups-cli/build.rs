use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the command tree in src/main.rs
// We need to duplicate this here since build scripts can't access src/ modules
fn input_arg(help: &'static str) -> Arg {
    Arg::new("input")
        .help(help)
        .required(true)
        .index(1)
        .value_hint(ValueHint::FilePath)
}

fn output_arg() -> Arg {
    Arg::new("output")
        .long("output")
        .short('o')
        .help("Output file path (defaults to stdout)")
        .value_hint(ValueHint::FilePath)
}

fn to_arg() -> Arg {
    Arg::new("to")
        .long("to")
        .help("Target format")
        .value_hint(ValueHint::Other)
}

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("ups")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Render, prompt and extract UPS/A3 problem-solving reports")
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a ups.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log debug output to stderr")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("render")
                .about("Render report markdown or a project file")
                .arg(input_arg("Report markdown or project JSON"))
                .arg(to_arg())
                .arg(
                    Arg::new("from")
                        .long("from")
                        .help("Input kind")
                        .value_parser(["markdown", "project"]),
                )
                .arg(output_arg()),
        )
        .subcommand(
            Command::new("prompt")
                .about("Print the generation prompt for a project")
                .arg(input_arg("Project JSON"))
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Print the full request body instead of the prompt text")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("chat")
                .about("Print a chat refinement request for a report")
                .arg(input_arg("Report markdown"))
                .arg(
                    Arg::new("message")
                        .long("message")
                        .short('m')
                        .help("The refinement request")
                        .required(true),
                ),
        )
        .subcommand(
            Command::new("response")
                .about("Render the report contained in an API response")
                .arg(input_arg("generateContent response JSON"))
                .arg(to_arg())
                .arg(output_arg()),
        )
        .subcommand(
            Command::new("extract")
                .about("Auto-fill a project from a spreadsheet export")
                .arg(input_arg("Workbook JSON or tab-separated sheet"))
                .arg(
                    Arg::new("into")
                        .long("into")
                        .help("Existing project to fill")
                        .value_hint(ValueHint::FilePath),
                )
                .arg(output_arg()),
        )
        .subcommand(Command::new("generate-css").about("Output the baseline CSS of the A3 page"));

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "ups", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "ups", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "ups", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
