//! template-helpers CLI: render Handlebars templates with the `embed`,
//! `jsfiddle` and `read` helpers, or run a single helper directly.

mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "template-helpers",
    about = "Render Handlebars templates with embed, jsfiddle and read helpers",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to a helpers config JSON file (defaults are used when omitted)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a template file
    Render {
        /// Path to the Handlebars template
        template: PathBuf,

        /// JSON file used as the data context
        #[arg(long, short)]
        data: Option<PathBuf>,

        /// Comma-separated helper groups to register (code, fs)
        #[arg(long)]
        helpers: Option<String>,

        /// Directory that helper paths resolve against
        #[arg(long)]
        base_dir: Option<PathBuf>,

        /// Write the result here instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Print a file as a fenced code block
    Embed {
        /// File to embed
        file: PathBuf,

        /// Language tag (defaults to the file extension)
        #[arg(long)]
        lang: Option<String>,
    },

    /// Print the iframe for an embedded jsFiddle
    Jsfiddle {
        /// Fiddle id, e.g. `0dfk10ks` or `user/0dfk10ks`
        #[arg(long)]
        id: Option<String>,

        #[arg(long)]
        width: Option<String>,

        #[arg(long)]
        height: Option<String>,

        /// Tabs to show, e.g. `result,js`
        #[arg(long)]
        tabs: Option<String>,

        /// Skin path appended to the tabs, e.g. `/light/`
        #[arg(long)]
        skin: Option<String>,
    },

    /// Print a file's contents, or nothing if it cannot be read
    Read {
        /// File to read
        file: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = commands::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Render {
            template,
            data,
            helpers,
            base_dir,
            output,
        } => {
            commands::render::run(
                config,
                &template,
                data.as_deref(),
                helpers.as_deref(),
                base_dir,
                output.as_deref(),
            )?;
        }
        Commands::Embed { file, lang } => {
            commands::embed::run(&file, lang.as_deref())?;
        }
        Commands::Jsfiddle {
            id,
            width,
            height,
            tabs,
            skin,
        } => {
            let args = commands::jsfiddle::FiddleArgs {
                id,
                width,
                height,
                tabs,
                skin,
            };
            commands::jsfiddle::run(&config, &args);
        }
        Commands::Read { file } => {
            commands::read::run(&file);
        }
    }

    Ok(())
}
