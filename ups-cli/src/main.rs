// Command-line interface for UPS/A3 reports
//
// The web wizard collects the form, talks to the generative API and shows the report. This
// binary covers everything around that which does not need a browser or a network
// connection: rendering reports, printing the exact prompts and request bodies the wizard
// would send, reading API responses and auto-filling projects from spreadsheet exports.
//
// Usage:
//  ups <input> [--to <format>] [--from markdown|project] [-o <file>]   - Render (default)
//  ups render <input> ...                        - Same as above (explicit)
//  ups prompt <project.json> [--json]            - Generation prompt / request body
//  ups chat <report.md> --message <text>         - Chat refinement request body
//  ups response <response.json> [--to <format>]  - Render the report in an API response
//  ups extract <sheet> [--into <project.json>]   - Spreadsheet auto-fill
//  ups generate-css                              - Baseline CSS of the A3 page
//  ups --list-formats                            - List output formats
//
// The target format is taken from --to, else from the output file extension, else html.
//
// Extra Parameters:
//
// Settings can be overridden using --extra-<name> [value]. Known names (escape-html, layout,
// css, model, temperature) update the configuration; everything else is passed to the
// format as an option.
// Example:
//  ups a3.md -o a3.html --extra-layout screen --extra-escape-html

mod input;

use chrono::Utc;
use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use input::InputKind;
use std::collections::HashMap;
use std::fs;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use ups_config::{LayoutConfig, Loader, UpsConfig};
use ups_report::chat::ChatSession;
use ups_report::extract::scan_workbook;
use ups_report::formats::{get_default_css, PageLayout};
use ups_report::gemini::{chat_request, generate_request, parse_generate_response, GenerationSettings};
use ups_report::prompt::build_generation_prompt;
use ups_report::{FormatRegistry, ProjectFile, Report};

const SUBCOMMANDS: &[&str] = &[
    "render",
    "prompt",
    "chat",
    "response",
    "extract",
    "generate-css",
    "help",
];

/// Parse extra-* arguments from command line args
/// Returns (cleaned_args_without_extras, extra_params_map)
///
/// Supports both:
/// - `--extra-<key> <value>` (explicit value)
/// - `--extra-<key>` (boolean flag, defaults to "true")
/// - `--extras-<key>` (alias for `--extra-<key>`)
fn parse_extra_args(args: &[String]) -> (Vec<String>, HashMap<String, String>) {
    let mut cleaned_args = Vec::new();
    let mut extra_params = HashMap::new();
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];

        let key_opt = if let Some(key) = arg.strip_prefix("--extra-") {
            Some(key)
        } else {
            arg.strip_prefix("--extras-")
        };

        if let Some(key) = key_opt {
            let has_value = args
                .get(i + 1)
                .is_some_and(|next| !next.starts_with('-'));

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
        .help("Target format (html, a3-html, markdown)")
        .long_help(
            "Target format to render to.\n\n\
            If not given, the format is detected from the output file extension\n\
            (.html -> a3-html, .htm -> html, .md -> markdown), else html.",
        )
        .value_hint(ValueHint::Other)
}

fn build_cli() -> Command {
    Command::new("ups")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Render, prompt and extract UPS/A3 problem-solving reports")
        .long_about(
            "ups works with the reports of the UPS/A3 problem-solving wizard.\n\n\
            Commands:\n  \
            - render:   Turn report markdown (or a saved project) into HTML\n  \
            - prompt:   Print the generation prompt for a project\n  \
            - chat:     Print a chat refinement request\n  \
            - response: Render the report contained in an API response\n  \
            - extract:  Auto-fill a project from a spreadsheet export\n\n\
            Extra Parameters:\n  \
            Use --extra-<name> [value] to override settings or pass format options.\n  \
            Boolean flags can omit the value (defaults to 'true').\n\n\
            Examples:\n  \
            ups a3.md                               # HTML fragment to stdout\n  \
            ups a3.md -o a3.html                    # Printable A3 page\n  \
            ups project.json --to markdown          # Saved report markdown\n  \
            ups prompt project.json --json          # generateContent request body",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
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
                .about("Render report markdown or a project file (default command)")
                .arg(input_arg("Report markdown or project JSON"))
                .arg(to_arg())
                .arg(
                    Arg::new("from")
                        .long("from")
                        .help("Input kind (detected from the extension: .json is a project)")
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
                .long_about(
                    "Scan a spreadsheet for known labels (Projekt, Problem, Warum 1-5,\n\
                    Maßnahme, SOP, ...) and write a project file with the values found.\n\n\
                    The input is a workbook as JSON ({\"sheets\": [{\"name\", \"rows\"}]})\n\
                    or a single sheet as tab-separated text. With --into, the values are\n\
                    filled into an existing project; empty results leave fields untouched.",
                )
                .arg(input_arg("Workbook JSON or tab-separated sheet"))
                .arg(
                    Arg::new("into")
                        .long("into")
                        .help("Existing project to fill")
                        .value_hint(ValueHint::FilePath),
                )
                .arg(output_arg()),
        )
        .subcommand(
            Command::new("generate-css")
                .about("Output the baseline CSS of the A3 page")
                .long_about(
                    "Outputs the baseline CSS embedded in a3-html pages.\n\n\
                    Use it as a starting point for custom styling and pass the result\n\
                    via --extra-css (or export.custom_css in ups.toml).",
                ),
        )
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    // Parse extra-* arguments before clap processing
    let (cleaned_args, mut extra_params) = parse_extra_args(&args);

    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&cleaned_args) {
        Ok(m) => m,
        Err(e) => {
            // A leading path means the render subcommand was left out
            if cleaned_args.len() > 1
                && !cleaned_args[1].starts_with('-')
                && !SUBCOMMANDS.contains(&cleaned_args[1].as_str())
            {
                let mut new_args = vec![cleaned_args[0].clone(), "render".to_string()];
                new_args.extend_from_slice(&cleaned_args[1..]);

                match cli.try_get_matches_from(&new_args) {
                    Ok(m) => m,
                    Err(e2) => e2.exit(),
                }
            } else {
                e.exit();
            }
        }
    };

    init_logging(matches.get_flag("verbose"));

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    let mut config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));
    apply_config_overrides(&mut config, &mut extra_params);

    match matches.subcommand() {
        Some(("render", sub_matches)) => {
            let input = required(sub_matches, "input");
            let kind = match sub_matches.get_one::<String>("from") {
                Some(from) => InputKind::parse(from).unwrap_or_else(|e| fail(&e)),
                None => InputKind::detect(input),
            };
            let output = optional(sub_matches, "output");
            let to = resolve_target_format(optional(sub_matches, "to"), output);
            let report = input::load_report(input, kind).unwrap_or_else(|e| fail(&e));
            handle_render_command(&report, &to, output, &extra_params, &config);
        }
        Some(("prompt", sub_matches)) => {
            let input = required(sub_matches, "input");
            handle_prompt_command(input, sub_matches.get_flag("json"), &config);
        }
        Some(("chat", sub_matches)) => {
            let input = required(sub_matches, "input");
            let message = required(sub_matches, "message");
            handle_chat_command(input, message, &config);
        }
        Some(("response", sub_matches)) => {
            let input = required(sub_matches, "input");
            let output = optional(sub_matches, "output");
            let to = resolve_target_format(optional(sub_matches, "to"), output);
            let body = input::read_file(input).unwrap_or_else(|e| fail(&e));
            let markdown = parse_generate_response(&body)
                .unwrap_or_else(|e| fail(&format!("Error: {e}")));
            handle_render_command(
                &Report::from_markdown(markdown),
                &to,
                output,
                &extra_params,
                &config,
            );
        }
        Some(("extract", sub_matches)) => {
            let input = required(sub_matches, "input");
            let into = optional(sub_matches, "into");
            let output = optional(sub_matches, "output");
            handle_extract_command(input, into, output, &config);
        }
        Some(("generate-css", _)) => {
            handle_generate_css_command();
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

fn required<'a>(matches: &'a ArgMatches, id: &str) -> &'a str {
    matches
        .get_one::<String>(id)
        .map(|s| s.as_str())
        .unwrap_or_else(|| fail(&format!("Missing required argument '{id}'")))
}

fn optional<'a>(matches: &'a ArgMatches, id: &str) -> Option<&'a str> {
    matches.get_one::<String>(id).map(|s| s.as_str())
}

fn fail(message: &str) -> ! {
    eprintln!("{message}");
    std::process::exit(1);
}

/// `--to`, else the format registered for the output file extension, else the fragment.
fn resolve_target_format(to: Option<&str>, output: Option<&str>) -> String {
    if let Some(to) = to {
        return to.to_string();
    }
    output
        .and_then(|path| FormatRegistry::default().detect_format_from_filename(path))
        .unwrap_or_else(|| "html".to_string())
}

/// Handle the render command (also used for API responses)
fn handle_render_command(
    report: &Report,
    to: &str,
    output: Option<&str>,
    extra_params: &HashMap<String, String>,
    config: &UpsConfig,
) {
    let registry = FormatRegistry::default();

    if let Err(e) = registry.get(to) {
        fail(&format!("Error: {e}"));
    }

    let mut format_options = format_options_from_config(config, to).unwrap_or_else(|e| fail(&e));
    for (key, value) in extra_params {
        format_options.insert(key.clone(), value.clone());
    }

    let rendered = registry
        .render_with_options(report, to, &format_options)
        .unwrap_or_else(|e| fail(&format!("Render error: {e}")));

    write_output(output, &rendered);
}

/// Handle the prompt command
fn handle_prompt_command(input: &str, as_request: bool, config: &UpsConfig) {
    let project = input::load_project(input).unwrap_or_else(|e| fail(&e));
    if let Err(e) = project.data.ensure_ready_for_generation() {
        fail(&format!("Error: {e}"));
    }

    let prompt = build_generation_prompt(&project.data);
    if as_request {
        let settings = GenerationSettings::from(&config.generation);
        debug!(model = %settings.model, endpoint = %config.endpoint(), "generation request");
        print_json(&generate_request(&prompt, &settings));
    } else {
        println!("{prompt}");
    }
}

/// Handle the chat command
fn handle_chat_command(input: &str, message: &str, config: &UpsConfig) {
    let report = input::read_file(input).unwrap_or_else(|e| fail(&e));
    let mut session = ChatSession::new(report);
    session.push_user(message);

    let settings = GenerationSettings::from(&config.chat);
    debug!(model = %settings.model, "chat request");
    print_json(&chat_request(&session, &settings));
}

/// Handle the extract command
fn handle_extract_command(
    input: &str,
    into: Option<&str>,
    output: Option<&str>,
    config: &UpsConfig,
) {
    let workbook = input::load_workbook(input, config.extraction.max_upload_bytes)
        .unwrap_or_else(|e| fail(&e));
    let extracted = scan_workbook(&workbook);

    let data = match into {
        Some(path) => {
            let mut project = input::load_project(path).unwrap_or_else(|e| fail(&e));
            project.data.apply_extracted(&extracted);
            project.data
        }
        None => extracted.into_project(),
    };

    let now = Utc::now();
    let file = ProjectFile::export(data, &config.export.version, now);
    debug!(suggested = %file.suggested_file_name(now), "exporting project");
    let json = file
        .to_json_pretty()
        .unwrap_or_else(|e| fail(&format!("Serialization error: {e}")));
    write_output(output, &format!("{json}\n"));
}

/// Handle the generate-css command
fn handle_generate_css_command() {
    print!("{}", get_default_css());
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    println!("Available formats:\n");
    let registry = FormatRegistry::default();
    for name in registry.list_formats() {
        if let Ok(format) = registry.get(&name) {
            let extensions = format.file_extensions().join(", ");
            println!("  {name:<10} {:<44} [{extensions}]", format.description());
        }
    }
}

fn write_output(output: Option<&str>, text: &str) {
    match output {
        Some(path) => {
            fs::write(path, text).unwrap_or_else(|e| {
                fail(&format!("Error writing file '{path}': {e}"));
            });
        }
        None => print!("{text}"),
    }
}

fn print_json(value: &serde_json::Value) {
    let text = serde_json::to_string_pretty(value)
        .unwrap_or_else(|e| fail(&format!("Serialization error: {e}")));
    println!("{text}");
}

fn load_cli_config(explicit_path: Option<&str>) -> UpsConfig {
    let loader = Loader::new().with_optional_file("ups.toml");
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

fn apply_config_overrides(config: &mut UpsConfig, extra_params: &mut HashMap<String, String>) {
    if let Some(raw) = take_override(extra_params, &["escape-html", "escape"]) {
        config.render.escape_html = parse_bool_arg("escape-html", &raw);
    }

    if let Some(raw) = take_override(extra_params, &["layout"]) {
        config.export.layout = match raw.as_str() {
            "a3-landscape" | "a3" => LayoutConfig::A3Landscape,
            "screen" => LayoutConfig::Screen,
            other => fail(&format!(
                "Invalid layout '{other}' for --extra-layout (expected 'a3-landscape' or 'screen')"
            )),
        };
    }

    if let Some(path) = take_override(extra_params, &["css", "css-path"]) {
        config.export.custom_css = Some(path.into());
    }

    if let Some(model) = take_override(extra_params, &["model"]) {
        config.generation.model = model.clone();
        config.chat.model = model;
    }

    if let Some(raw) = take_override(extra_params, &["temperature"]) {
        let temperature = raw.parse::<f64>().unwrap_or_else(|_| {
            fail(&format!("Invalid number '{raw}' for --extra-temperature"))
        });
        config.generation.temperature = temperature;
        config.chat.temperature = temperature;
    }
}

/// Options the configured settings imply for a format.
fn format_options_from_config(
    config: &UpsConfig,
    format: &str,
) -> Result<HashMap<String, String>, String> {
    let mut options = HashMap::new();
    let escape = config.render.escape_html.to_string();

    match format {
        "html" => {
            options.insert("escape".to_string(), escape);
        }
        "a3-html" => {
            options.insert("escape".to_string(), escape);
            let layout = PageLayout::from(config.export.layout);
            options.insert("layout".to_string(), layout.as_str().to_string());
            if let Some(path) = &config.export.custom_css {
                let css = fs::read_to_string(path).map_err(|e| {
                    format!("Error reading stylesheet '{}': {e}", path.display())
                })?;
                options.insert("css".to_string(), css);
            }
        }
        _ => {}
    }

    Ok(options)
}

fn take_override(map: &mut HashMap<String, String>, keys: &[&str]) -> Option<String> {
    for key in keys {
        if let Some(value) = map.remove(*key) {
            return Some(value);
        }
    }
    None
}

fn parse_bool_arg(flag: &str, raw: &str) -> bool {
    match raw.to_lowercase().as_str() {
        "true" | "1" | "yes" | "y" => true,
        "false" | "0" | "no" | "n" => false,
        other => fail(&format!("Invalid boolean value '{other}' for --extra-{flag}")),
    }
}
