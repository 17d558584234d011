use clap::{Arg, ArgAction, ArgMatches, Command};
use owo_colors::OwoColorize;
use std::io::Read;
use std::path::Path;
use tracing::{debug, Level};

use shiki::templating::{self, Fragment, Page};
use shiki::{HighlightError, Highlighter, Options, Output};

fn main() {
    const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

    let matches = Command::new("shiki")
        .version(VERSION)
        .propagate_version(true)
        .about("Render source code as HTML using the Shiki highlighter.")
        .disable_help_subcommand(true)
        .arg(
            Arg::new("debug")
                .long("debug")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Log diagnostic information to standard error."),
        )
        .arg(
            Arg::new("working-dir")
                .long("working-dir")
                .global(true)
                .help("Directory containing shiki.js and its node_modules, if not the bundled one."),
        )
        .subcommand(
            Command::new("highlight")
                .about("Highlight the given source file")
                .arg(
                    Arg::new("language")
                        .short('l')
                        .long("language")
                        .help("Language of the code. Defaults to php."),
                )
                .arg(
                    Arg::new("theme")
                        .short('t')
                        .long("theme")
                        .help("Theme to colour the code with. Defaults to nord."),
                )
                .arg(line_option("highlight", "Lines to highlight"))
                .arg(line_option("add", "Lines to mark as added"))
                .arg(line_option("delete", "Lines to mark as deleted"))
                .arg(line_option("focus", "Lines to focus on"))
                .arg(
                    Arg::new("label")
                        .long("label")
                        .action(ArgAction::SetTrue)
                        .help("Show the language name above the code."),
                )
                .arg(
                    Arg::new("raw")
                        .long("raw")
                        .action(ArgAction::SetTrue)
                        .conflicts_with("standalone")
                        .help("Emit the tokens from Shiki as JSON instead of rendering HTML."),
                )
                .arg(
                    Arg::new("standalone")
                        .short('s')
                        .long("standalone")
                        .action(ArgAction::SetTrue)
                        .help("Wrap the output in a complete HTML page."),
                )
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .help("The file containing the code to highlight, or '-' to read standard input."),
                ),
        )
        .subcommand(Command::new("languages").about("List the languages Shiki can highlight"))
        .subcommand(Command::new("themes").about("List the themes Shiki provides"))
        .get_matches();

    let level = if matches.get_flag("debug") {
        Level::DEBUG
    } else {
        Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let mut highlighter = Highlighter::new();
    if let Some(directory) = matches.get_one::<String>("working-dir") {
        highlighter = highlighter.with_working_directory(directory);
    }

    let result = match matches.subcommand() {
        Some(("highlight", submatches)) => highlight(highlighter, submatches),
        Some(("languages", _)) => highlighter
            .available_languages()
            .map(print_list),
        Some(("themes", _)) => highlighter
            .available_themes()
            .map(print_list),
        Some(_) => {
            println!("No valid subcommand was used");
            Ok(())
        }
        None => {
            println!("usage: shiki [COMMAND] ...");
            println!("Try '--help' for more information.");
            Ok(())
        }
    };

    if let Err(error) = result {
        eprintln!("{}: {}", "error".bright_red(), error);
        std::process::exit(1);
    }
}

fn line_option(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name)
        .long(name)
        .action(ArgAction::Append)
        .value_delimiter(',')
        .value_name("LINES")
        .help(format!("{}, as line numbers or ranges like 3-5.", help))
}

fn lines(submatches: &ArgMatches, name: &str) -> Vec<String> {
    submatches
        .get_many::<String>(name)
        .map(|values| {
            values
                .cloned()
                .collect()
        })
        .unwrap_or_default()
}

fn highlight(highlighter: Highlighter, submatches: &ArgMatches) -> Result<(), HighlightError> {
    let filename = submatches
        .get_one::<String>("filename")
        .map(String::as_str)
        .unwrap_or("-");

    let code = load(Path::new(filename))?;

    let language = submatches
        .get_one::<String>("language")
        .map(String::as_str);
    let theme = submatches
        .get_one::<String>("theme")
        .map(String::as_str);

    let mut options = Options::new()
        .highlight(lines(submatches, "highlight"))
        .add(lines(submatches, "add"))
        .delete(lines(submatches, "delete"))
        .focus(lines(submatches, "focus"));

    if submatches.get_flag("label") {
        options = options.label(language.unwrap_or(shiki::highlighter::DEFAULT_LANGUAGE));
    }

    let highlighter = if submatches.get_flag("raw") {
        highlighter.without_renderer()
    } else {
        highlighter
    };

    debug!(?options);

    let output = highlighter.highlight(&code, language, theme, &options)?;

    match output {
        Output::Tokens(result) => {
            let json = serde_json::to_string_pretty(&result)?;
            println!("{}", json);
        }
        Output::Markup(markup) => {
            let result = if submatches.get_flag("standalone") {
                templating::fill(&Page, &markup, filename)?
            } else {
                templating::fill(&Fragment, &markup, filename)?
            };
            print!("{}", result);
        }
    }

    Ok(())
}

/// Read the code to highlight, from standard input if the filename is "-".
fn load(filename: &Path) -> Result<String, HighlightError> {
    if filename.to_str() == Some("-") {
        let mut content = String::new();
        std::io::stdin().read_to_string(&mut content)?;
        return Ok(content);
    }

    let content = std::fs::read_to_string(filename)?;
    Ok(content)
}

fn print_list(items: Vec<String>) {
    for item in items {
        println!("{}", item);
    }
}
