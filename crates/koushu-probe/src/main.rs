use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;
use koushu_core::{Move, Position, Rules, SFEN_STARTPOS, Square};
use log::info;

#[derive(Parser)]
#[command(name = "koushu-probe")]
#[command(about = "Replay moves on a shogi position and report legal moves, check and mate")]
struct Args {
    /// SFEN of the starting position ("startpos" for the opening array)
    #[arg(short, long, default_value = "startpos")]
    sfen: String,

    /// Moves to play, e.g. 7g7f 3c3d 8h2b+ B*5e
    moves: Vec<String>,

    /// Reject pawn drops that deliver mate
    #[arg(long)]
    forbid_pawn_drop_mate: bool,

    /// Only list legal destinations of the piece on this square
    #[arg(long)]
    from: Option<String>,

    /// Print a JSON report instead of text
    #[arg(long)]
    json: bool,

    /// Default log filter when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn init_logger(level: &str) {
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, level),
    )
    .format(|buf, record| writeln!(buf, "[{}] {}: {}", record.level(), record.target(), record.args()))
    .write_style(env_logger::WriteStyle::Never)
    .target(env_logger::Target::Stderr)
    .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logger(&args.log_level);

    let sfen = if args.sfen == "startpos" { SFEN_STARTPOS } else { args.sfen.as_str() };
    let rules = Rules { forbid_pawn_drop_mate: args.forbid_pawn_drop_mate };
    let mut pos = Position::from_sfen(sfen)
        .with_context(|| format!("invalid SFEN: {sfen}"))?
        .with_rules(rules);
    info!("start: {}", pos.to_sfen());

    for (i, text) in args.moves.iter().enumerate() {
        let mv: Move = text.parse().with_context(|| format!("move {}: cannot parse {text:?}", i + 1))?;
        pos.apply_move(mv).with_context(|| format!("move {}: {mv} is illegal", i + 1))?;
    }

    let from: Option<Square> = args
        .from
        .as_deref()
        .map(|s| s.parse::<Square>())
        .transpose()
        .context("invalid --from square")?;

    let moves: Vec<String> = match from {
        Some(sq) => pos.legal_destinations(sq).iter().map(|to| to.to_string()).collect(),
        None => pos.legal_moves().iter().map(Move::to_string).collect(),
    };
    let checkers: Vec<String> = pos.checkers().iter().map(|s| s.to_string()).collect();

    if args.json {
        let report = serde_json::json!({
            "sfen": pos.to_sfen(),
            "position": pos.snapshot(),
            "checkers": checkers,
            "legal": moves,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{pos}");
    println!("sfen: {}", pos.to_sfen());
    if checkers.is_empty() {
        println!("check: no");
    } else {
        println!("check: yes ({})", checkers.join(" "));
    }
    println!("terminal: {}", if pos.is_terminal() { "yes (mate)" } else { "no" });
    match from {
        Some(sq) => println!("destinations from {sq} ({}): {}", moves.len(), moves.join(" ")),
        None => println!("legal moves ({}): {}", moves.len(), moves.join(" ")),
    }
    Ok(())
}
