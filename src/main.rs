//! CLI entry point for treeviz

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use treeviz::{
    build_graph, write_json, DotBackend, GraphBackend, TreeFormatter, TreeWalker, WalkerConfig,
};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            // Respect FORCE_COLOR environment variable
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            // Respect TERM=dumb
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            // Check if stdout is a TTY
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "treeviz")]
#[command(about = "Display a directory tree, save it as JSON, and render it as a PNG graph")]
#[command(version)]
struct Args {
    /// Directory to analyze
    path: PathBuf,

    /// Show hidden files and directories
    #[arg(long = "show-hidden")]
    show_hidden: bool,

    /// Maximum depth to explore (unlimited by default)
    #[arg(long = "max-depth", value_name = "N")]
    max_depth: Option<usize>,

    /// Output path for the JSON file (default: directory_tree.json inside PATH)
    #[arg(long = "json-out", value_name = "FILE")]
    json_out: Option<PathBuf>,

    /// Output path for the PNG image (default: directory_tree.png inside PATH)
    #[arg(long = "image-out", value_name = "FILE")]
    image_out: Option<PathBuf>,

    /// Skip writing the JSON file
    #[arg(long = "no-json")]
    no_json: bool,

    /// Skip rendering the PNG image
    #[arg(long = "no-image")]
    no_image: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,
}

fn main() {
    let args = Args::parse();

    let root = if args.path.is_absolute() {
        args.path.clone()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(&args.path)
    };

    let config = WalkerConfig {
        show_hidden: args.show_hidden,
        max_depth: args.max_depth,
    };
    let mut walker = TreeWalker::new(config);
    let tree = match walker.walk(&root) {
        Ok(tree) => tree,
        Err(e) => {
            eprintln!("treeviz: {}", e);
            process::exit(1);
        }
    };
    for warning in walker.warnings() {
        eprintln!("treeviz: warning: {}", warning);
    }

    // The three render passes are independent: a failed pass is reported and
    // the remaining passes still run.
    let mut failed = false;

    let formatter = TreeFormatter::new(should_use_color(args.color));
    if let Err(e) = formatter.print(&tree, &root.display().to_string()) {
        eprintln!("treeviz: error writing output: {}", e);
        failed = true;
    }

    if !args.no_json {
        let json_path = args
            .json_out
            .clone()
            .unwrap_or_else(|| root.join("directory_tree.json"));
        match write_json(&tree, &json_path) {
            Ok(()) => println!("\nSaved directory tree to '{}'", json_path.display()),
            Err(e) => {
                eprintln!("treeviz: {}", e);
                failed = true;
            }
        }
    }

    if !args.no_image {
        let image_path = args
            .image_out
            .clone()
            .unwrap_or_else(|| root.join("directory_tree.png"));
        let mut backend = DotBackend::new();
        build_graph(&tree, tree.name(), &mut backend);
        match backend.render_to_file(&image_path) {
            Ok(()) => println!("Saved tree image to '{}'", image_path.display()),
            Err(e) => {
                eprintln!("treeviz: {}", e);
                failed = true;
            }
        }
    }

    if failed {
        process::exit(2);
    }
}
