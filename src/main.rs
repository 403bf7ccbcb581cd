use std::path::PathBuf;
use std::process;

use clap::Parser;
use iconset::commands::convert::{self, ConvertEvent, ConvertOptions};
use iconset::error::REMEDIATION;
use iconset::tool::ConvertTool;

#[derive(Parser)]
#[command(name = "iconset")]
#[command(about = "Render an SVG icon into a fixed set of square PNG sizes")]
#[command(version)]
struct Cli {
    /// SVG icon to convert
    #[arg(long, env = "ICONSET_INPUT", default_value = convert::DEFAULT_INPUT)]
    input: PathBuf,

    /// Directory to write <name>_<size>.png files into
    #[arg(long, env = "ICONSET_OUTPUT_DIR", default_value = convert::DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Converter program (must accept sips-style arguments)
    #[arg(long, env = "ICONSET_TOOL", default_value = iconset::tool::DEFAULT_TOOL)]
    tool: PathBuf,
}

fn init_tracing() {
    use std::io::IsTerminal;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let options = ConvertOptions {
        input: cli.input,
        output_dir: cli.output_dir,
    };
    let tool = ConvertTool::new(cli.tool);

    let result = convert::run(&options, &tool, |event| match event {
        ConvertEvent::Started => {
            println!("Converting SVG to PNG...");
        }
        ConvertEvent::Created { size, .. } => {
            println!("✓ Created {}x{} icon", size, size);
        }
        ConvertEvent::Failed { size, stderr } => {
            println!("✗ Failed to create {}x{} icon", size, size);
            eprintln!("{}", stderr.trim_end());
        }
    });

    match result {
        Ok(report) => {
            let failed: Vec<String> = report
                .failed()
                .map(|size| format!("{}x{}", size, size))
                .collect();
            if !failed.is_empty() {
                println!("\nFailed sizes: {}", failed.join(", "));
            }
            println!("\nDone! Icons created in {}", report.output_dir.display());
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            if e.needs_remediation() {
                eprintln!("\nAlternatively, you can:");
                for line in REMEDIATION {
                    eprintln!("{}", line);
                }
            }
            process::exit(1);
        }
    }
}
