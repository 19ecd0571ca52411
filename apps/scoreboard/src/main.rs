use std::io::{self, Write};

use clap::{Parser, Subcommand};
use time::OffsetDateTime;

use scoreboard::config::Config;
use scoreboard::domain::{catalog, HistorySort, RoundId, Seat};
use scoreboard::error::AppError;
use scoreboard::services::{FlowEvent, GameFlowService, ADVANCE_DEBOUNCE_MS};
use scoreboard::storage::FileStore;
use scoreboard::telemetry;

#[derive(Parser)]
#[command(name = "scoreboard")]
#[command(about = "King card-game scorekeeper")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the table, totals, dealer, and progress
    Show,
    /// Start a game (activates the session, unlocks editing)
    Start,
    /// Enter a raw cell value; "" clears, "-" is the explicit placeholder
    Set {
        round: String,
        seat: Seat,
        /// Raw value; negative festa entries and "-" need `--` or quoting
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// Toggle a festa round's positive/negative mode (clears that row)
    Festa { round: String },
    /// Rename a seat
    Name { seat: Seat, name: String },
    /// Shuffle seat order
    Shuffle {
        #[arg(long)]
        yes: bool,
    },
    /// Block edits
    Lock,
    /// Allow edits
    Unlock,
    /// Toggle the persisted dark-mode preference
    Dark,
    /// Discard the game in progress
    Reset {
        #[arg(long)]
        yes: bool,
    },
    /// Save the finished game to history and reset
    Save,
    /// List match history
    History {
        #[arg(long, default_value = "")]
        query: String,
        #[arg(long, default_value = "date_desc")]
        sort: String,
    },
    /// Delete one history entry
    HistoryDelete {
        id: i64,
        #[arg(long)]
        yes: bool,
    },
    /// Load a past entry's players into the session
    HistoryRepeat { id: i64 },
}

fn main() {
    telemetry::init_tracing();

    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    let args = Args::parse();
    let config = Config::from_env()?;
    let mut flow = GameFlowService::load(FileStore::open(config.data_dir));

    match args.command {
        Command::Show => print_board(&flow),
        Command::Start => {
            flow.start_game();
            println!("Game started.");
        }
        Command::Set { round, seat, value } => {
            let round: RoundId = round.parse().map_err(AppError::from)?;
            let now = now_ms();
            match flow.update_score(round, seat, &value, now) {
                Ok(outcome) => {
                    println!("Stored {round} seat {seat} = \"{}\"", outcome.cell);
                    if outcome.advance {
                        // Drain the debounce immediately: a one-shot command
                        // has no further keystrokes to wait for.
                        for event in flow.tick(now + ADVANCE_DEBOUNCE_MS) {
                            if let FlowEvent::FocusCell { round, seat } = event {
                                println!("Next cell: {round} seat {seat}");
                            }
                        }
                    }
                }
                Err(err) => {
                    if let Some(msg) = flow.row_error(round) {
                        eprintln!("{msg}");
                    }
                    return Err(err.into());
                }
            }
        }
        Command::Festa { round } => {
            let round: RoundId = round.parse().map_err(AppError::from)?;
            let mode = flow.toggle_festa_mode(round)?;
            println!("Festa {round} is now {mode}. Values cleared.");
        }
        Command::Name { seat, name } => {
            flow.set_player_name(seat, &name)?;
            println!("Seat {seat} is now {}", flow.session.players[seat as usize]);
        }
        Command::Shuffle { yes } => {
            if !yes && !confirm("Shuffle the seat order?") {
                return Ok(());
            }
            flow.shuffle_players(&mut rand::rng());
            println!("Seats: {}", flow.session.players.join(" / "));
        }
        Command::Lock => {
            flow.set_locked(true);
            println!("Editing locked.");
        }
        Command::Unlock => {
            flow.set_locked(false);
            println!("Editing unlocked.");
        }
        Command::Dark => {
            let dark = !flow.dark_mode;
            flow.set_dark_mode(dark);
            println!("Dark mode {}.", if dark { "on" } else { "off" });
        }
        Command::Reset { yes } => {
            let prompt = if flow.should_warn_before_exit() {
                "A game is in progress; its data will be lost. Reset?"
            } else {
                "Reset the game?"
            };
            if !yes && !confirm(prompt) {
                return Ok(());
            }
            flow.reset_game();
            println!("Game reset.");
        }
        Command::Save => {
            let id = flow.save_game(OffsetDateTime::now_utc())?;
            println!("Game saved to history (id {id}).");
        }
        Command::History { query, sort } => {
            let sort: HistorySort = sort.parse().map_err(AppError::from)?;
            let entries = flow.history_view(&query, sort);
            if entries.is_empty() {
                println!("No results.");
            }
            for entry in entries {
                let finals: Vec<String> = entry
                    .scores
                    .iter()
                    .map(|s| format!("{} {:+}", s.name, s.score))
                    .collect();
                println!("{}  {}  {}", entry.id, entry.date, finals.join(" / "));
            }
        }
        Command::HistoryDelete { id, yes } => {
            if !yes && !confirm("Delete this game from history?") {
                return Ok(());
            }
            flow.delete_history_entry(id)?;
            println!("Deleted history entry {id}.");
        }
        Command::HistoryRepeat { id } => {
            flow.repeat_history_players(id)?;
            println!("Players loaded: {}", flow.session.players.join(" / "));
        }
    }

    Ok(())
}

fn print_board<S: scoreboard::storage::KvStore>(flow: &GameFlowService<S>) {
    let session = &flow.session;
    let totals = session.totals();
    let leaders = session.leaders();

    for (seat, name) in session.players.iter().enumerate() {
        let mut tags = String::new();
        if session.active && session.dealer() == seat as Seat {
            tags.push_str(" [dealer]");
        }
        if leaders.contains(&(seat as Seat)) {
            tags.push_str(" [leader]");
        }
        println!("{seat}: {name}  {:+}{tags}", totals[seat]);
    }
    println!();

    for def in catalog().iter() {
        let row = session.table.row(def.id);
        let cells: Vec<String> = row
            .iter()
            .map(|c| {
                let s = c.to_string();
                if s.is_empty() {
                    "·".to_string()
                } else {
                    s
                }
            })
            .collect();
        let note = match def.max_units() {
            Some(max) => format!("{}/{max}", session.table.row_units_sum(def.id)),
            None => session
                .festa_modes
                .get(def.id)
                .map(|m| m.to_string())
                .unwrap_or_default(),
        };
        let error = flow
            .row_error(def.id)
            .map(|msg| format!("  ! {msg}"))
            .unwrap_or_default();
        println!(
            "{:14} {:>5} {:>5} {:>5} {:>5}  ({note}){error}",
            def.label(&session.players),
            cells[0],
            cells[1],
            cells[2],
            cells[3],
        );
    }

    println!();
    println!(
        "Rounds done: {}/{}",
        session.completed_count(),
        catalog().len()
    );
    match session.next_incomplete_round() {
        Some(id) => {
            let def = scoreboard::domain::round_def(id);
            println!("Next: {}", def.label(&session.players));
        }
        None => println!("Game complete."),
    }
    if session.game_finished() {
        println!("Save with `scoreboard save`.");
    }
}

fn confirm(prompt: &str) -> bool {
    print!("{prompt} [y/N] ");
    io::stdout().flush().ok();

    let mut line = String::new();
    if io::stdin().read_line(&mut line).is_err() {
        return false;
    }
    matches!(line.trim(), "y" | "Y" | "yes")
}

fn now_ms() -> u64 {
    let now = OffsetDateTime::now_utc();
    (now.unix_timestamp_nanos() / 1_000_000) as u64
}
