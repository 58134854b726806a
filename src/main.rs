//! Anchor Layout CLI
//!
//! Usage:
//!   anchor-layout [OPTIONS] [FILE]
//!
//! Options:
//!   -p, --preset <NAME>    Anchor preset to apply to the selection
//!   --pivot                Also move the pivot to the preset
//!   --position             Also move the item to the preset position
//!   --resize <WxH>         Resize the selection
//!   --move <X,Y>           Move the selection (top-origin)
//!   -s, --summary          Print the first selected item instead of the scene
//!   -o, --output <FILE>    Write the edited scene to a file
//!   -h, --help             Print help

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::Parser;
use env_logger::Env;
use log::LevelFilter;

use anchor_layout::layout::{AnchorH, AnchorV, Point, Size};
use anchor_layout::{apply_edits, Edit, EditConfig, Modifiers, PresetRequest, Scene};

#[derive(Parser)]
#[command(name = "anchor-layout")]
#[command(about = "Anchor and pivot layout for scene items")]
struct Cli {
    /// Scene file (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Anchor preset, e.g. top-left, middle-center, stretch-right
    #[arg(short, long)]
    preset: Option<PresetRequest>,

    /// Move the pivot to the preset as well
    #[arg(long)]
    pivot: bool,

    /// Move the item to the preset position as well
    #[arg(long)]
    position: bool,

    /// New size as WIDTHxHEIGHT
    #[arg(long, value_parser = parse_size)]
    resize: Option<Size>,

    /// New position as X,Y (top-origin)
    #[arg(long = "move", value_parser = parse_point)]
    move_to: Option<Point>,

    /// Rename the selected items
    #[arg(long)]
    rename: Option<String>,

    /// Make the selected items visible
    #[arg(long, conflicts_with = "hide")]
    show: bool,

    /// Hide the selected items
    #[arg(long)]
    hide: bool,

    /// Print a summary of the first selected item instead of the scene
    #[arg(short, long)]
    summary: bool,

    /// Write the edited scene here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Debug mode: log layouts before and after editing
    #[arg(short, long)]
    debug: bool,

    /// List the available presets
    #[arg(long)]
    presets: bool,
}

impl Cli {
    fn edits(&self) -> Vec<Edit> {
        let mut edits = vec![];
        if let Some(request) = self.preset {
            edits.push(Edit::Preset {
                request,
                modifiers: Modifiers::new(self.pivot, self.position),
            });
        }
        if let Some(size) = self.resize {
            edits.push(Edit::Resize(size));
        }
        if let Some(point) = self.move_to {
            edits.push(Edit::Move(point));
        }
        if let Some(name) = &self.rename {
            edits.push(Edit::Rename(name.clone()));
        }
        if self.show {
            edits.push(Edit::SetVisible(true));
        }
        if self.hide {
            edits.push(Edit::SetVisible(false));
        }
        edits
    }
}

fn parse_size(s: &str) -> Result<Size, String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{}'", s))?;
    let width: f64 = w.trim().parse().map_err(|e| format!("bad width '{}': {}", w, e))?;
    let height: f64 = h.trim().parse().map_err(|e| format!("bad height '{}': {}", h, e))?;
    Ok(Size::new(width, height))
}

fn parse_point(s: &str) -> Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got '{}'", s))?;
    let x: f64 = x.trim().parse().map_err(|e| format!("bad x '{}': {}", x, e))?;
    let y: f64 = y.trim().parse().map_err(|e| format!("bad y '{}': {}", y, e))?;
    Ok(Point::new(x, y))
}

fn main() {
    let cli = Cli::parse();

    let mut logger = env_logger::Builder::from_env(Env::default().default_filter_or("warn"));
    if cli.debug {
        logger.filter_level(LevelFilter::Debug);
    }
    logger.format_timestamp(None).init();

    if cli.presets {
        print_presets();
        return;
    }

    // If no input file and stdin is a terminal (interactive), show intro help
    if cli.input.is_none() && io::stdin().is_terminal() {
        print_intro();
        return;
    }

    let filename = cli
        .input
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "<stdin>".to_string());

    // Read input
    let source = match &cli.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => buffer,
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    let mut scene = match Scene::from_str(&source) {
        Ok(scene) => scene,
        Err(e) => {
            eprintln!("{}", e.format(&source, &filename));
            std::process::exit(1);
        }
    };

    let config = EditConfig::new().with_debug(cli.debug);
    let edits = cli.edits();
    let count = apply_edits(&mut scene, &edits, &config);
    if count == 0 && !edits.is_empty() {
        eprintln!("Warning: no items selected in '{}'", filename);
    }

    if cli.summary {
        match scene.summary() {
            Some(summary) => println!("{}", summary),
            None => println!("(no selection)"),
        }
        return;
    }

    match &cli.output {
        Some(path) => {
            if let Err(e) = scene.write_file(path) {
                eprintln!("Error writing file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        }
        None => match scene.to_toml() {
            Ok(text) => print!("{}", text),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
    }
}

fn print_intro() {
    println!(
        r#"Anchor Layout - anchor and pivot layout for scene items

USAGE:
    anchor-layout [OPTIONS] [FILE]
    cat scene.toml | anchor-layout [OPTIONS]

OPTIONS:
    -p, --preset <NAME>   Apply an anchor preset to the selection
    --pivot               Also move the pivot to the preset
    --position            Also move the item to the preset position
    --resize <WxH>        Resize the selection
    --move <X,Y>          Move the selection (top-origin)
    --rename <NAME>       Rename the selection
    --show, --hide        Change visibility of the selection
    -s, --summary         Print the first selected item
    -o, --output <FILE>   Write the edited scene to a file
    -d, --debug           Log layouts before and after editing
    --presets             List available presets
    -h, --help            Print help

QUICK START:
    anchor-layout scene.toml -p bottom-right --pivot --position -s

This pins the selected items to the bottom-right corner of the canvas."#
    );
}

fn print_presets() {
    println!("PRESETS (vertical-horizontal)");
    println!("=============================");
    for v in AnchorV::ALL {
        let row: Vec<String> = AnchorH::ALL
            .iter()
            .map(|h| PresetRequest::new(*h, v).to_string())
            .collect();
        println!("{}", row.join("  "));
    }
    println!();
    println!("Modifiers:");
    println!("  (none)                keep placement, adopt anchors and pivot");
    println!("  --pivot               snap the pivot onto the anchor point");
    println!("  --position            move to the preset position");
    println!("  --pivot --position    full reset to the preset");
}
