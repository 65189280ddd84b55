//! Gridtag - A cell-selection console for CSV grids

#[cfg(feature = "tui")]
mod tui;

use std::env;
use std::path::PathBuf;

use gridtag_core::Sheet;
use gridtag_core::sync::{apply_selection, display_selection};
use gridtag_core::tagger::preview_selection;

fn print_usage() {
    eprintln!("Usage: gridtag [OPTIONS] [FILE]");
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  [FILE]                  CSV file to open");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -c, --select <EXPR>     Apply a selection expression and print its canonical form");
    eprintln!("  -t, --tags <TEXT>       Preview #tag references found in TEXT");
    eprintln!("  -h, --help              Print help");
}

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut file_path: Option<PathBuf> = None;
    let mut select_expr: Option<String> = None;
    let mut tags_text: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_usage();
                return;
            }
            "-c" | "--select" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --select requires an expression");
                    std::process::exit(1);
                }
                select_expr = Some(args[i].to_string());
            }
            "-t" | "--tags" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --tags requires text");
                    std::process::exit(1);
                }
                tags_text = Some(args[i].to_string());
            }
            arg if arg.starts_with('-') => {
                eprintln!("Error: Unknown option: {}", arg);
                print_usage();
                std::process::exit(1);
            }
            _ => {
                if file_path.is_none() {
                    file_path = Some(PathBuf::from(&args[i]));
                } else {
                    eprintln!("Error: Unexpected argument: {}", args[i]);
                    print_usage();
                    std::process::exit(1);
                }
            }
        }
        i += 1;
    }

    if select_expr.is_some() || tags_text.is_some() {
        let Some(path) = file_path else {
            eprintln!("Error: --select and --tags require a CSV file");
            std::process::exit(1);
        };
        let mut sheet = match Sheet::from_csv_path(&path) {
            Ok(sheet) => sheet,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        };

        if let Some(expr) = select_expr {
            if let Err(e) = apply_selection(&mut sheet, &expr) {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
            println!("{}", display_selection(&sheet));
        }

        if let Some(text) = tags_text {
            // Preview failures are silent: incomplete tags print "-".
            let _ = preview_selection(&mut sheet, &text);
            println!("{}", display_selection(&sheet));
        }
        return;
    }

    #[cfg(feature = "tui")]
    {
        let mut app = match tui::App::with_file(file_path) {
            Ok(app) => app,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        };
        if let Err(e) = tui::run(&mut app) {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }

    #[cfg(not(feature = "tui"))]
    {
        let _ = file_path;
        eprintln!("Error: built without the `tui` feature; use --select or --tags");
        std::process::exit(1);
    }
}
