// ABOUTME: Command-line interface for the linksman golf rules engine.
// ABOUTME: Plays rounds, simulates score distributions, and prints course cards.

use clap::{Parser, Subcommand};
use linksman::{play_round, simulate, simulate_seeded, Course, FastDice, Resolver, RoundState, SimResult};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "linksman")]
#[command(about = "Dice-driven golf from the 1987 In Pursuit of Par board game")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play one 18-hole round with the caddie picking clubs
    Play {
        /// Comma-separated player names
        #[arg(long, value_delimiter = ',', default_value = "player 1")]
        players: Vec<String>,

        /// Seed the dice for a reproducible round
        #[arg(long)]
        seed: Option<u64>,

        /// Course file (JSON); defaults to the built-in championship course
        #[arg(long)]
        course: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Simulate many rounds and report the score distribution
    Sim {
        /// Number of rounds to simulate
        #[arg(short, long, default_value = "1000")]
        n: usize,

        /// Seed the dice for reproducible statistics
        #[arg(long)]
        seed: Option<u64>,

        /// Course file (JSON); defaults to the built-in championship course
        #[arg(long)]
        course: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the course card
    Card {
        /// Course file (JSON); defaults to the built-in championship course
        #[arg(long)]
        course: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play {
            players,
            seed,
            course,
            json,
        } => cmd_play(players, seed, course, json),
        Commands::Sim {
            n,
            seed,
            course,
            json,
        } => cmd_sim(n, seed, course, json),
        Commands::Card { course } => load_course(course).map(|c| print_card(&c)),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn load_course(path: Option<PathBuf>) -> Result<Course, String> {
    match path {
        None => Ok(Course::championship()),
        Some(path) => {
            let text = std::fs::read_to_string(&path)
                .map_err(|e| format!("{}: {}", path.display(), e))?;
            serde_json::from_str(&text).map_err(|e| format!("{}: {}", path.display(), e))
        }
    }
}

fn cmd_play(
    players: Vec<String>,
    seed: Option<u64>,
    course: Option<PathBuf>,
    json: bool,
) -> Result<(), String> {
    let course = load_course(course)?;
    let mut dice = match seed {
        Some(seed) => FastDice::with_seed(seed),
        None => FastDice::new(),
    };
    let round = play_round(&course, players, &Resolver::new(), &mut dice)
        .map_err(|e| e.to_string())?;

    if json {
        print_round_json(&course, &round);
    } else {
        print_scorecard(&course, &round);
    }
    Ok(())
}

fn cmd_sim(n: usize, seed: Option<u64>, course: Option<PathBuf>, json: bool) -> Result<(), String> {
    let course = load_course(course)?;
    let result = match seed {
        Some(seed) => simulate_seeded(&course, n, seed),
        None => simulate(&course, n),
    }
    .map_err(|e| e.to_string())?;

    if json {
        print_sim_json(&result);
    } else {
        print_sim_histogram(&course, &result);
    }
    Ok(())
}

fn print_card(course: &Course) {
    println!("{}", course.name);
    println!();
    println!("{:>4}  {:>3}  {:>5}", "hole", "par", "yards");
    for hole in course.holes() {
        let mark = if hole.signature { "  *" } else { "" };
        println!("{:>4}  {:>3}  {:>5.0}{}", hole.number, hole.par, hole.yardage, mark);
    }
    println!();
    println!("total par {}", course.total_par());
}

fn print_scorecard(course: &Course, round: &RoundState) {
    println!("{}", course.name);
    println!();

    print!("{:<12}", "hole");
    for hole in course.holes() {
        print!("{:>3}", hole.number);
    }
    println!("{:>6}", "tot");

    print!("{:<12}", "par");
    for hole in course.holes() {
        print!("{:>3}", hole.par);
    }
    println!("{:>6}", course.total_par());

    for player in round.players() {
        print!("{:<12}", player.name);
        for score in &player.scores {
            match score {
                Some(s) => print!("{:>3}", s),
                None => print!("{:>3}", "-"),
            }
        }
        let total = player.total_score();
        println!("{:>6}", total);

        let to_par = total as i64 - course.total_par() as i64;
        let vs = match to_par {
            0 => "even".to_string(),
            d if d > 0 => format!("+{}", d),
            d => d.to_string(),
        };
        println!("{:<12}{}", "", vs);
    }
}

fn print_round_json(course: &Course, round: &RoundState) {
    use serde_json::json;

    let players: Vec<_> = round
        .players()
        .iter()
        .map(|p| {
            json!({
                "name": p.name,
                "scores": p.scores,
                "total": p.total_score(),
            })
        })
        .collect();

    let output = json!({
        "course": course.name,
        "par": course.total_par(),
        "players": players,
    });

    println!("{}", serde_json::to_string_pretty(&output).unwrap());
}

fn print_sim_json(result: &SimResult) {
    use serde_json::json;

    let output = json!({
        "n": result.n,
        "par": result.par,
        "min": result.min,
        "max": result.max,
        "mean": result.mean,
        "std_dev": result.std_dev,
        "distribution": result.distribution,
    });

    println!("{}", serde_json::to_string_pretty(&output).unwrap());
}

fn print_sim_histogram(course: &Course, result: &SimResult) {
    println!("{} (n={}, par {})", course.name, result.n, result.par);
    println!();

    let outcomes = result.sorted_outcomes();
    let max_count = outcomes.iter().map(|(_, c)| *c).max().unwrap_or(1);
    let max_bar_width = 40;

    for (score, count) in outcomes {
        let pct = (count as f64 / result.n as f64) * 100.0;
        let bar_width = (count as f64 / max_count as f64 * max_bar_width as f64) as usize;
        let bar: String = "█".repeat(bar_width);

        println!("{:>4}: {:40} {:5.1}%", score, bar, pct);
    }

    println!();
    println!("mean: {:.2}, std: {:.2}", result.mean, result.std_dev);
}
