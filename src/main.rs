//! Message Templates CLI
//!
//! Usage:
//!   message-templates [OPTIONS] [TEMPLATE]
//!
//! Options:
//!   -p, --property <NAME=VALUE>  Property value (repeatable)
//!   -c, --config <FILE>          Culture and cache settings (TOML format)
//!   -t, --tokens                 Print the parsed tokens instead of rendering
//!   --check                      Report malformed placeholders
//!   -h, --help                   Print help

use std::collections::HashMap;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::Parser;

use message_templates::diagnostics::check;
use message_templates::{Config, ScalarValue, TemplateCache, Token};

#[derive(Parser)]
#[command(name = "message-templates")]
#[command(about = "Parse and render structured-logging message templates")]
struct Cli {
    /// Template text (reads stdin if not provided)
    template: Option<String>,

    /// Property value as NAME=VALUE; values are read as null, bool, number or text
    #[arg(short, long = "property", value_name = "NAME=VALUE", value_parser = parse_property)]
    properties: Vec<(String, ScalarValue)>,

    /// Culture and cache settings (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the parsed tokens instead of rendering
    #[arg(short, long)]
    tokens: bool,

    /// Report malformed placeholders; exits with status 1 when any are found
    #[arg(long)]
    check: bool,
}

fn parse_property(arg: &str) -> Result<(String, ScalarValue), String> {
    match arg.split_once('=') {
        Some((name, value)) if !name.is_empty() => {
            Ok((name.to_string(), ScalarValue::infer(value)))
        }
        _ => Err(format!("expected NAME=VALUE, got '{}'", arg)),
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    // If no template and stdin is a terminal (interactive), show intro help
    if cli.template.is_none() && io::stdin().is_terminal() {
        print_intro();
        return;
    }

    // Load configuration
    let config = match &cli.config {
        Some(path) => match Config::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => Config::default(),
    };

    // Read template
    let source = match &cli.template {
        Some(text) => text.clone(),
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => buffer.trim_end_matches(['\r', '\n']).to_string(),
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    if cli.check {
        let diagnostics = check(&source);
        for diagnostic in &diagnostics {
            eprint!("{}", diagnostic.format(&source, "template"));
        }
        if !diagnostics.is_empty() {
            std::process::exit(1);
        }
        return;
    }

    let cache = TemplateCache::with_config(config.cache);
    let template = cache.get_or_parse(&source);

    if cli.tokens {
        for token in template.tokens() {
            print_token(token);
        }
        return;
    }

    let properties: HashMap<String, ScalarValue> = cli.properties.into_iter().collect();
    match template.render_to_string(&properties, Some(&config.culture)) {
        Ok(text) => println!("{}", text),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn print_token(token: &Token) {
    let span = token.span();
    match token {
        Token::Literal(literal) => {
            println!("{:>4}..{:<4} literal      {:?}", span.start, span.end, literal.text());
        }
        Token::Placeholder(placeholder) => {
            let mut details = vec![format!("name={}", placeholder.name())];
            if let Some(alignment) = placeholder.alignment() {
                details.push(format!("alignment={}", alignment.signed_width()));
            }
            if let Some(format) = placeholder.format() {
                details.push(format!("format={:?}", format));
            }
            if let Some(sigil) = placeholder.destructuring().sigil() {
                details.push(format!("hint={}", sigil));
            }
            println!(
                "{:>4}..{:<4} placeholder  {}",
                span.start,
                span.end,
                details.join(" ")
            );
        }
    }
}

fn print_intro() {
    println!(
        r#"Message Templates - parse and render structured-logging message templates

USAGE:
    message-templates [OPTIONS] [TEMPLATE]
    echo '<template>' | message-templates [OPTIONS]

OPTIONS:
    -p, --property NAME=VALUE   Property value (repeatable)
    -c, --config FILE           Culture and cache settings (TOML)
    -t, --tokens                Print parsed tokens
    --check                     Report malformed placeholders
    -h, --help                  Print help

SYNTAX:
    {{Name}}        property            {{0}}          positional property
    {{@Name}}       destructure hint    {{$Name}}      stringify hint
    {{Name,10}}     right-align         {{Name,-10}}   left-align
    {{Name:F2}}     format specifier    {{{{ }}}}        literal braces

QUICK START:
    message-templates -p User=alice -p Elapsed=34.5 '{{User:l}} finished in {{Elapsed:F1}} ms'"#
    );
}
