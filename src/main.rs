// src/main.rs

use std::env;
use std::error::Error;
use std::path::PathBuf;

use log::info;

use noise_vs_exposure::data_input::report_parser::load_report;
use noise_vs_exposure::datasets::{DatasetCatalog, DEFAULT_DATASET_INDEX};
use noise_vs_exposure::plot_framework::RenderConfig;
use noise_vs_exposure::plot_functions::plot_noise_vs_exposure::plot_noise_vs_exposure;

#[derive(Debug, PartialEq)]
enum Command {
    Render(CliOptions),
    ListDatasets { root: Option<PathBuf> },
    Help,
    Version,
}

#[derive(Debug, PartialEq)]
struct CliOptions {
    input: Option<PathBuf>,
    root: Option<PathBuf>,
    index: usize,
    render: RenderConfig,
}

fn print_usage(program_name: &str) {
    eprintln!("Usage: {program_name} [OPTIONS] [FILE]");
    eprintln!();
    eprintln!("Renders a DevWare Noise vs. Exposure report as a three-panel PNG next to the input file.");
    eprintln!("Without FILE, the report is taken from the dataset catalog.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --root <DIR>     Catalog root directory");
    eprintln!("  --index <N>      Catalog entry to load (default {DEFAULT_DATASET_INDEX})");
    eprintln!("  --list           List the catalog entries and exit");
    eprintln!("  --no-display     Do not open the figure window");
    eprintln!("  --opaque         Write a white background instead of a transparent one");
    eprintln!("  --no-crop        Keep the full canvas instead of cropping to the content");
    eprintln!("  --title          Write the full figure title above the panels");
    eprintln!("  -h, --help       Show this help");
    eprintln!("  -V, --version    Show the version");
}

fn parse_args(args: &[String]) -> Result<Command, String> {
    let mut input: Option<PathBuf> = None;
    let mut root: Option<PathBuf> = None;
    let mut index = DEFAULT_DATASET_INDEX;
    let mut list = false;
    let mut render = RenderConfig::default();

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "-V" | "--version" => return Ok(Command::Version),
            "--list" => list = true,
            "--no-display" => render.display = false,
            "--opaque" => render.transparent = false,
            "--no-crop" => render.tight_bbox = false,
            "--title" => render.draw_title = true,
            "--root" => {
                let value = iter.next().ok_or("--root requires a directory")?;
                root = Some(PathBuf::from(value));
            }
            "--index" => {
                let value = iter.next().ok_or("--index requires a number")?;
                index = value
                    .parse()
                    .map_err(|_| format!("invalid --index value '{value}'"))?;
            }
            other if other.starts_with('-') => return Err(format!("unknown option '{other}'")),
            other => {
                if input.is_some() {
                    return Err("only one input file can be rendered per run".to_string());
                }
                input = Some(PathBuf::from(other));
            }
        }
    }

    if list {
        return Ok(Command::ListDatasets { root });
    }
    Ok(Command::Render(CliOptions {
        input,
        root,
        index,
        render,
    }))
}

fn catalog_for(root: Option<PathBuf>) -> DatasetCatalog {
    match root {
        Some(dir) => DatasetCatalog::default().with_root(dir),
        None => DatasetCatalog::default(),
    }
}

fn run(options: CliOptions) -> Result<(), Box<dyn Error>> {
    let input_path = match options.input {
        Some(path) => path,
        None => catalog_for(options.root).select(options.index)?,
    };

    info!("Reading data file '{}'", input_path.display());
    let report = load_report(&input_path)?;
    info!("{}", report.metadata().description());

    let output_path = plot_noise_vs_exposure(&report, &options.render)?;

    if options.render.display {
        #[cfg(feature = "viewer")]
        noise_vs_exposure::viewer::show_figure(&output_path, &report.metadata().figure_title())?;
        #[cfg(not(feature = "viewer"))]
        log::warn!(
            "Built without the 'viewer' feature; open '{}' manually.",
            output_path.display()
        );
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().collect();
    let program_name = args.first().map(String::as_str).unwrap_or("noise-vs-exposure");

    let command = match parse_args(args.get(1..).unwrap_or_default()) {
        Ok(command) => command,
        Err(message) => {
            eprintln!("Error: {message}");
            print_usage(program_name);
            std::process::exit(2);
        }
    };

    match command {
        Command::Help => print_usage(program_name),
        Command::Version => println!("{} {}", program_name, noise_vs_exposure::crate_version()),
        Command::ListDatasets { root } => {
            let catalog = catalog_for(root);
            println!("Datasets in '{}':", catalog.root().display());
            for (index, name) in catalog.files().iter().enumerate() {
                println!("  {index}: {name}");
            }
        }
        Command::Render(options) => run(options)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_defaults_select_catalog_entry() {
        match parse_args(&[]).unwrap() {
            Command::Render(options) => {
                assert_eq!(options.input, None);
                assert_eq!(options.index, DEFAULT_DATASET_INDEX);
                assert_eq!(options.render, RenderConfig::default());
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_flags_and_file() {
        let parsed = parse_args(&args(&[
            "--no-display",
            "--opaque",
            "--no-crop",
            "--title",
            "--root",
            "/tmp/noise",
            "--index",
            "2",
            "A_B_1_2_3_4.txt",
        ]))
        .unwrap();
        match parsed {
            Command::Render(options) => {
                assert_eq!(options.input, Some(PathBuf::from("A_B_1_2_3_4.txt")));
                assert_eq!(options.root, Some(PathBuf::from("/tmp/noise")));
                assert_eq!(options.index, 2);
                assert!(!options.render.display);
                assert!(!options.render.transparent);
                assert!(!options.render.tight_bbox);
                assert!(options.render.draw_title);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_list_and_help() {
        assert_eq!(
            parse_args(&args(&["--list", "--root", "/data"])).unwrap(),
            Command::ListDatasets {
                root: Some(PathBuf::from("/data"))
            }
        );
        assert_eq!(parse_args(&args(&["-h"])).unwrap(), Command::Help);
        assert_eq!(parse_args(&args(&["--version"])).unwrap(), Command::Version);
    }

    #[test]
    fn test_rejects_bad_arguments() {
        assert!(parse_args(&args(&["--index", "seven"])).is_err());
        assert!(parse_args(&args(&["--index"])).is_err());
        assert!(parse_args(&args(&["--bogus"])).is_err());
        assert!(parse_args(&args(&["a.txt", "b.txt"])).is_err());
    }
}

// src/main.rs
