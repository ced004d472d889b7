//! CLI frontend for ClavTarot: paced tarot readings in the terminal.

mod commands;
mod present;

use std::process;
use std::time::Duration;

use chrono::NaiveDate;
use clap::{ArgAction, Parser, Subcommand};

use commands::install::InstallArgs;
use present::PresentConfig;

#[derive(Parser)]
#[command(
    name = "clavtarot",
    about = "ClavTarot — tarot readings in your terminal",
    version,
    propagate_version = true
)]
struct Cli {
    /// Reveal everything at once, without pauses or animation
    #[arg(long, global = true)]
    instant: bool,

    /// Pause between card reveals, in milliseconds
    #[arg(long, global = true, value_name = "MS")]
    delay_ms: Option<u64>,

    /// Wrap width for card meanings
    #[arg(long, global = true, default_value = "62")]
    width: usize,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Print readings as JSON instead of animating them
    #[arg(long, global = true)]
    json: bool,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Without a command, an interactive menu starts
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw one card
    Single,

    /// Past, present, and future
    Three,

    /// Five cards for matters of the heart
    Love,

    /// Four cards for your professional path
    Career,

    /// The ten-card Celtic Cross
    Celtic,

    /// The card of the day
    Daily {
        /// Date to read for, YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Browse all 78 cards
    Deck,

    /// How to play
    #[command(alias = "how")]
    Guide,

    /// Install the tarot skill into an OpenClaw host
    Install(InstallArgs),
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    present::pacing::install_interrupt_handler();

    let config = PresentConfig::default()
        .with_instant(cli.instant)
        .with_delay(cli.delay_ms.map(Duration::from_millis))
        .with_width(cli.width)
        .with_color(!cli.no_color);
    if !config.color {
        colored::control::set_override(false);
    }

    let result = commands::load_deck().and_then(|tarot| match cli.command {
        None => commands::menu::run(&tarot, &config),
        Some(Commands::Single) => commands::reading::run(&tarot, "single", &config, cli.json),
        Some(Commands::Three) => commands::reading::run(&tarot, "three", &config, cli.json),
        Some(Commands::Love) => commands::reading::run(&tarot, "love", &config, cli.json),
        Some(Commands::Career) => commands::reading::run(&tarot, "career", &config, cli.json),
        Some(Commands::Celtic) => commands::reading::run(&tarot, "celtic", &config, cli.json),
        Some(Commands::Daily { date }) => commands::daily::run(&tarot, date, &config, cli.json),
        Some(Commands::Deck) => commands::deck::run(&tarot),
        Some(Commands::Guide) => commands::guide::run(),
        Some(Commands::Install(args)) => commands::install::run(args),
    });

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
