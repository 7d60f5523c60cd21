#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use tictactoe::{init_logging, play, replay};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play a two-player game in this terminal.
    Play,
    /// Apply a list of moves to a fresh game and print where it ends up.
    Replay {
        #[arg(long, value_delimiter = ',', help = "Slot indices 0-8, e.g. --moves 0,3,1,4,2")]
        moves: Vec<usize>,
        #[arg(long, help = "Print the final state as JSON")]
        json: bool,
    },
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play => {
            println!("Tic-tac-toe: type 'h' for help.");
            let stdin = std::io::stdin();
            play(stdin.lock(), std::io::stdout())?;
        }
        Commands::Replay { moves, json } => {
            let report = replay(&moves);
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", report);
            }
        }
    }
    Ok(())
}
