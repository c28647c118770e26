use std::env;
use std::error::Error;
use std::fs;
use std::path::PathBuf;

use anyhow::bail;
use clap::Parser;
use stanza::renderer::console::Console;
use stanza::renderer::Renderer;
use tracing::{debug, info, warn};

use goalcast::domain::{RatingPair, Winner};
use goalcast::form::FormGuide;
use goalcast::market::{Market, OddsTriple};
use goalcast::model::{Config, MatchRequest, Predictor};
use goalcast::print;

/// Forecast a match outcome from bookmaker odds and/or Elo-style ratings.
///
/// Example: goalcast --home "Barcelona" --away "Club Brugge" --odds 1.57,3.90,5.19
#[derive(Debug, clap::Parser, Clone)]
struct Args {
    /// home team name
    #[clap(long)]
    home: String,

    /// away team name
    #[clap(long)]
    away: String,

    /// decimal odds as home,draw,away
    #[clap(short = 'o', long, value_parser = parse_odds)]
    odds: Option<OddsTriple>,

    /// strength ratings as home,away
    #[clap(short = 'r', long, value_parser = parse_ratings)]
    ratings: Option<RatingPair>,

    /// JSON file mapping team names to recent-form multipliers
    #[clap(short = 'f', long)]
    form: Option<PathBuf>,

    /// emit the prediction as JSON instead of a table
    #[clap(long)]
    json: bool,
}
impl Args {
    fn validate(&self) -> anyhow::Result<()> {
        if self.odds.is_none() && self.ratings.is_none() {
            bail!("either the -o or the -r flag must be specified");
        }
        Ok(())
    }
}

fn parse_odds(value: &str) -> Result<OddsTriple, String> {
    let fields = parse_fields(value, 3)?;
    Ok(OddsTriple::new(fields[0], fields[1], fields[2]))
}

fn parse_ratings(value: &str) -> Result<RatingPair, String> {
    let fields = parse_fields(value, 2)?;
    Ok(RatingPair::new(fields[0], fields[1]))
}

fn parse_fields(value: &str, arity: usize) -> Result<Vec<f64>, String> {
    let fields = value
        .split(',')
        .map(|field| field.trim().parse::<f64>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|err| format!("{err} in '{value}'"))?;
    if fields.len() != arity {
        return Err(format!("expected {arity} comma-separated values in '{value}'"));
    }
    Ok(fields)
}

fn main() -> Result<(), Box<dyn Error>> {
    if env::var("RUST_BACKTRACE").is_err() {
        env::set_var("RUST_BACKTRACE", "full")
    }
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info")
    }
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    args.validate()?;
    debug!("args: {args:?}");

    let form = match &args.form {
        Some(path) => Some(serde_json::from_str::<FormGuide>(&fs::read_to_string(path)?)?),
        None => None,
    };

    if let Some(odds) = args.odds {
        let market = Market::fit(odds)?;
        debug!("implied probabilities: {:?}", market.probs);
        info!("bookmaker overround: {:.4}", market.overround);
    }

    let predictor = Predictor::try_from(Config::default())?;
    let prediction = predictor.predict(&MatchRequest {
        home_team: &args.home,
        away_team: &args.away,
        odds: args.odds,
        ratings: args.ratings,
        form: form.as_ref(),
    })?;

    if prediction.expected_goals.is_degenerate() {
        warn!(
            "degenerate scoring rates {:.4}/{:.4}; forecast is a near-point mass",
            prediction.expected_goals.home, prediction.expected_goals.away
        );
    }

    let winner_prob = match prediction.winner {
        Winner::Home => prediction.probs.home,
        Winner::Draw => prediction.probs.draw,
        Winner::Away => prediction.probs.away,
    };
    info!(
        "{} vs {}: {} ({:.1}%), expected goals {:.2}-{:.2}",
        prediction.home_team,
        prediction.away_team,
        prediction.winner,
        winner_prob * 100.0,
        prediction.expected_goals.home,
        prediction.expected_goals.away
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&prediction)?);
    } else {
        println!("{}", Console::default().render(&print::tabulate(&prediction)));
    }
    Ok(())
}
