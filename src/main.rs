use anyhow::Result;
use clap::Parser;
use ricecooker::console::{self, ConsoleConfig};
use tokio::io::BufReader;
use tracing_subscriber::EnvFilter;

/// Rice cooker simulator.
///
/// Drive a simulated rice cooker from a numbered menu: cook, warm, cancel,
/// add water, plug in and unplug.
#[derive(Parser, Debug)]
#[command(name = "ricecooker", version, about)]
struct Cli {
    /// Print only the prompt before each command, not the full menu.
    #[arg(long, env = "RICECOOKER_HIDE_MENU")]
    hide_menu: bool,
}

impl From<&Cli> for ConsoleConfig {
    fn from(cli: &Cli) -> Self {
        Self {
            show_menu: !cli.hide_menu,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let input = BufReader::new(tokio::io::stdin());
    let mut output = tokio::io::stdout();
    let end = console::run(
        ConsoleConfig::from(&cli),
        input,
        &mut output,
        ricecooker::shutdown::interrupted(),
    )
    .await?;
    tracing::info!(%end, "session ended");

    // stdin may still have a blocking read in flight; the runtime would wait on it.
    // exit skips destructors: stdout is already flushed and stderr logging is unbuffered
    std::process::exit(0)
}
