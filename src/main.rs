//! Overlay Composer CLI
//!
//! Usage:
//!   overlay-composer [OPTIONS] [FILE]
//!
//! Options:
//!   -t, --theme <FILE>    Brand palette file (TOML format)
//!   -m, --merge <FILE>    Suggestion JSON to merge before composing
//!   -p, --prefix <NAME>   Class selector prefix (default "ov-")
//!   -c, --compact         Single-line output without indentation
//!       --styles          List gradient style names
//!       --shapes          List frame shape names
//!       --skill           Output LLM-optimized skill document
//!   -h, --help            Print help

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::Parser;

use overlay_composer::settings::{FrameShape, GradientType};
use overlay_composer::store;
use overlay_composer::suggestion::{merge_settings, skill_document, OverlaySuggestion};
use overlay_composer::{
    compose_with_config, ComposeConfig, CssConfig, OverlaySettings, Theme,
};

#[derive(Parser)]
#[command(name = "overlay-composer")]
#[command(about = "Branded image overlay styles as CSS")]
struct Cli {
    /// Settings JSON file (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Brand palette file (TOML format)
    #[arg(short, long)]
    theme: Option<PathBuf>,

    /// Suggestion JSON to merge into the settings before composing
    #[arg(short, long)]
    merge: Option<PathBuf>,

    /// Class selector prefix
    #[arg(short, long)]
    prefix: Option<String>,

    /// Single-line output without indentation
    #[arg(short, long)]
    compact: bool,

    /// Debug mode: dump normalized settings to stderr
    #[arg(short, long)]
    debug: bool,

    /// List gradient style names
    #[arg(long)]
    styles: bool,

    /// List frame shape names
    #[arg(long)]
    shapes: bool,

    /// Output LLM-optimized skill document for agent integration
    #[arg(long)]
    skill: bool,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    // Handle documentation flags first
    if cli.styles {
        for gradient_type in GradientType::ALL {
            println!("{}", gradient_type.name());
        }
        return;
    }

    if cli.shapes {
        for shape in FrameShape::ALL {
            println!("{}", shape.name());
        }
        return;
    }

    if cli.skill {
        println!("{}", skill_document());
        return;
    }

    // If no input file and stdin is a terminal (interactive), show intro help
    if cli.input.is_none() && io::stdin().is_terminal() {
        print_intro();
        return;
    }

    // Load theme
    let theme = match &cli.theme {
        Some(path) => match Theme::from_file(path) {
            Ok(t) => t,
            Err(e) => {
                eprintln!("Error loading theme '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => Theme::default(),
    };

    // Read settings: documents load through the store (a missing file
    // behaves like a fresh profile), stdin parses directly
    let mut settings: OverlaySettings = match &cli.input {
        Some(path) => match store::load_settings(path) {
            Ok(settings) => settings,
            Err(e) => {
                eprintln!("Error loading settings '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            if let Err(e) = io::stdin().read_to_string(&mut buffer) {
                eprintln!("Error reading from stdin: {}", e);
                std::process::exit(1);
            }
            match serde_json::from_str(&buffer) {
                Ok(settings) => settings,
                Err(e) => {
                    eprintln!("Error parsing settings: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    // Merge a suggestion document if requested
    if let Some(path) = &cli.merge {
        let reply = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error reading suggestion '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        };
        let suggestion = OverlaySuggestion::from_model_reply(&reply);
        settings = merge_settings(&settings, &suggestion);
    }

    // Compose with theme, prefix and output mode
    let mut css_config = CssConfig::default().with_pretty_print(!cli.compact);
    if let Some(prefix) = &cli.prefix {
        css_config = css_config.with_class_prefix(prefix.clone());
    }
    let config = ComposeConfig::new()
        .with_css(css_config)
        .with_theme(theme)
        .with_debug(cli.debug);

    match compose_with_config(&settings, config) {
        Ok(css) => {
            println!("{}", css);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn print_intro() {
    println!(
        r#"Overlay Composer - branded image overlay styles as CSS

USAGE:
    overlay-composer [OPTIONS] [FILE]
    echo '<settings json>' | overlay-composer

OPTIONS:
    -t, --theme     Brand palette file (TOML)
    -m, --merge     Suggestion JSON to merge before composing
    -p, --prefix    Class selector prefix (default "ov-")
    -c, --compact   Single-line output
    -d, --debug     Dump normalized settings to stderr
    --styles        List gradient style names
    --shapes        List frame shape names
    --skill         Output LLM skill document (for embedding in agent context)
    -h, --help      Print help

QUICK START:
    echo '{{"gradient": {{"gradientType": "fire"}}}}' | overlay-composer

This composes a fire-style gradient overlay with default logo and text
placement. Run --styles for the style roster or --skill for the
suggestion-model integration document."#
    );
}
