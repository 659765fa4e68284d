use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use duty_roster::conflict::{ConflictReport, detect_conflicts};
use duty_roster::dates;
use duty_roster::rotation;
use duty_roster::schedule::{ScheduleRepo, SqliteRepo};

#[derive(Parser)]
#[command(version, about = "Duty roster CLI")]
struct Cli {
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    Roster(RosterCmd),
    Assign {
        #[arg(long, value_name = "ID_NUMBER")]
        person: String,
        #[arg(long, value_name = "YYYY-MM-DD")]
        date: String,
        #[arg(long)]
        role: Option<String>,
    },
    Unassign {
        #[arg(long, value_name = "ID_NUMBER")]
        person: String,
        #[arg(long, value_name = "YYYY-MM-DD")]
        date: String,
    },
    Conflicts {
        #[arg(long, value_name = "YYYY-MM")]
        month: String,
    },
    Calendar {
        #[arg(long, value_name = "YYYY-MM")]
        month: String,
    },
}

#[derive(Args)]
struct RosterCmd {
    #[command(subcommand)]
    sub: RosterSub,
}

#[derive(Subcommand)]
enum RosterSub {
    Sync {
        #[arg(long, value_name = "FILE")]
        file: String,
        #[arg(long)]
        dry_run: bool,
        #[arg(long)]
        prune: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let db_url = std::env::var("DATABASE_URL")?;
    duty_roster::db::migrate::run_sqlite(&db_url)?;
    let mut conn = duty_roster::db::connection::connect_sqlite(&db_url)?;
    let repo = SqliteRepo::new();

    match cli.cmd {
        Cmd::Roster(RosterCmd {
            sub:
                RosterSub::Sync {
                    file,
                    dry_run,
                    prune,
                },
        }) => {
            let s = std::fs::read_to_string(&file)?;
            let roster: duty_roster::roster::config::Roster = toml::from_str(&s)?;

            let opt = duty_roster::roster::sync::SyncOptions { dry_run, prune };
            let diff = duty_roster::roster::sync::sync_roster(&mut conn, roster, opt)?;
            println!("{diff}");
        }

        Cmd::Assign { person, date, role } => {
            let date = dates::parse_service_date(&date)?;
            let id = repo.assign(&mut conn, &person, date, role.as_deref())?;
            println!("assigned #{id}: {person} on {date}");
        }

        Cmd::Unassign { person, date } => {
            let date = dates::parse_service_date(&date)?;
            if repo.unassign(&mut conn, &person, date)? {
                println!("unassigned {person} on {date}");
            } else {
                println!("no assignment for {person} on {date}");
            }
        }

        Cmd::Conflicts { month } => {
            let (year, m) = dates::parse_month(&month)?;
            let (start, end) = dates::month_bounds(year, m)?;

            // inputs are re-read fresh on every invocation; nothing is cached
            let personnel = repo.list_personnel(&mut conn)?;
            let assignments = repo.list_assignments(&mut conn, start, end)?;

            let report = ConflictReport(detect_conflicts(&personnel, &assignments, start, end));
            println!("{report}");
        }

        Cmd::Calendar { month } => {
            let (year, m) = dates::parse_month(&month)?;
            let (start, end) = dates::month_bounds(year, m)?;

            for day in start.iter_days() {
                if day > end {
                    break;
                }
                println!("{day}  {}", rotation::duty_group_for(day).name());
            }
        }
    }

    Ok(())
}
