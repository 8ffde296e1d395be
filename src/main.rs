use mdg_boundaries::converter::{self, ConvertConfig};
use mdg_boundaries::server::{self, ServerConfig};
use std::path::PathBuf;

const DEFAULT_DATA_DIR: &str = "data";
const DEFAULT_OUT_DIR: &str = "assets";
const DEFAULT_PORT: u16 = 8000;

fn print_usage(program: &str) {
    eprintln!(
        "Usage: {} [--data-dir <dir>] [--out-dir <dir>] [--port <port>] [--convert-only | --serve-only]",
        program
    );
    eprintln!("  --data-dir <dir>   directory with the OCHA boundary files (default: data)");
    eprintln!("  --out-dir <dir>    directory for the generated documents (default: assets)");
    eprintln!("  --port <port>      HTTP listen port (default: 8000)");
    eprintln!("  --convert-only     run the conversion pipeline and exit");
    eprintln!("  --serve-only       skip conversion and serve existing documents");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();

    let mut data_dir = PathBuf::from(DEFAULT_DATA_DIR);
    let mut out_dir = PathBuf::from(DEFAULT_OUT_DIR);
    let mut port = DEFAULT_PORT;
    let mut convert_only = false;
    let mut serve_only = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--data-dir" | "--out-dir" | "--port" if i + 1 >= args.len() => {
                eprintln!("{} requires a value", args[i]);
                print_usage(&args[0]);
                std::process::exit(1);
            }
            "--data-dir" => {
                data_dir = PathBuf::from(&args[i + 1]);
                i += 2;
            }
            "--out-dir" => {
                out_dir = PathBuf::from(&args[i + 1]);
                i += 2;
            }
            "--port" => {
                port = args[i + 1].parse()?;
                i += 2;
            }
            "--convert-only" => {
                convert_only = true;
                i += 1;
            }
            "--serve-only" => {
                serve_only = true;
                i += 1;
            }
            "--help" | "-h" => {
                print_usage(&args[0]);
                return Ok(());
            }
            other => {
                eprintln!("unknown argument: {}", other);
                print_usage(&args[0]);
                std::process::exit(1);
            }
        }
    }

    if convert_only && serve_only {
        eprintln!("--convert-only and --serve-only are mutually exclusive");
        std::process::exit(1);
    }

    if !serve_only {
        tracing::info!(
            "converting boundary files from {} into {}",
            data_dir.display(),
            out_dir.display()
        );
        let convert_config = ConvertConfig::new(&data_dir, &out_dir);
        converter::run(&convert_config).await?;
        tracing::info!("conversion complete");
    }

    if !convert_only {
        server::serve(ServerConfig::new(&out_dir, port)).await?;
    }

    Ok(())
}
