use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};

use scorebook::aggregate::Accumulator;
use scorebook::http_client::http_client;
use scorebook::{attendance, report, resolve, statsapi};

struct Args {
    file: PathBuf,
}

fn main() -> Result<()> {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");

    let args = parse_args()?;
    run(&args)
}

fn run(args: &Args) -> Result<()> {
    let rows = attendance::read_rows(&args.file)?;
    let client = http_client()?;

    let mut totals = Accumulator::new();
    let mut games = 0usize;
    for row in &rows {
        let game_pk = resolve::resolve_game(client, row)?;
        eprintln!("game {game_pk} ({} {})", row.home_team, row.date);
        let boxscore = statsapi::fetch_boxscore(client, game_pk)
            .with_context(|| format!("boxscore fetch failed for game {game_pk}"))?;
        totals.fold_boxscore(game_pk, &boxscore)?;
        games += 1;
    }

    report::print_report(client, &totals, games)
}

fn parse_args() -> Result<Args> {
    let argv = std::env::args().skip(1).collect::<Vec<_>>();
    let mut file = None;

    let mut idx = 0;
    while idx < argv.len() {
        let arg = &argv[idx];
        if let Some(path) = arg.strip_prefix("--file=") {
            file = Some(PathBuf::from(path));
        } else if arg == "--file" || arg == "-f" {
            idx += 1;
            let value = argv
                .get(idx)
                .ok_or_else(|| anyhow!("{arg} needs a path"))?;
            file = Some(PathBuf::from(value));
        } else if let Some(raw) = arg.strip_prefix("--year=") {
            // Validated and discarded; year highlighting is not implemented.
            parse_year(raw)?;
        } else if arg == "--year" || arg == "-y" {
            idx += 1;
            let value = argv
                .get(idx)
                .ok_or_else(|| anyhow!("{arg} needs a value"))?;
            parse_year(value)?;
        } else {
            return Err(anyhow!(
                "unrecognized argument {arg:?}; usage: scorebook --file games.csv [--year YYYY]"
            ));
        }
        idx += 1;
    }

    let file = file.ok_or_else(|| anyhow!("--file/-f is required"))?;
    Ok(Args { file })
}

fn parse_year(raw: &str) -> Result<u32> {
    raw.trim()
        .parse::<u32>()
        .with_context(|| format!("year {raw:?} is not an integer"))
}
