use clap::{Parser, Subcommand};
use responsive_images::{config, logging, output, process};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gen-images")]
#[command(about = "Generate responsive JPEG/WebP variants and an image map")]
#[command(long_about = "\
Generate responsive JPEG/WebP variants and an image map

Run with no arguments from the project root:

  assets/freepik/*.jp*g        source images (not searched recursively)
  assets/optimized/            <name>-<width>.jpg and .webp, widths 768/1280/1600
  data/images.json             map from image path to its variants

Images narrower than a target width are referenced as-is instead of being
upscaled. Images that fail to decode or encode are skipped and reported.

Run 'gen-images gen-config' to print a documented config file.")]
#[command(version)]
struct Cli {
    /// Project root; all configured paths are relative to it
    #[arg(long, default_value = ".", global = true)]
    root: PathBuf,

    /// TOML file overriding the built-in defaults
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Generate variants and write the image map (default)
    Run,
    /// Print a config file with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Run) {
        Command::Run => {
            logging::init(cli.verbose);
            let converter_config = config::load_config(cli.config.as_deref())?;
            let result = process::process(&cli.root, &converter_config, |event| {
                output::print_process_event(&event)
            })?;
            output::print_summary(&result, &cli.root);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
