use crate::reports::{self, ValidationRow};
use clap::Args;
use seqforge::config::Config;
use seqforge::error::SfResult;
use seqforge::scorer::Scorer;
use seqforge::sequence::{parse_sequence, random_sequence};
use seqforge::sequences::KnownSequence;
use std::sync::Arc;
use strum::IntoEnumIterator;
use tracing::warn;

#[derive(Args, Debug, Clone)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub config: Config,

    /// Comma-separated sequence to score instead of the known ones.
    #[arg(short, long)]
    pub sequence: Option<String>,

    /// Only known sequences whose name contains this.
    #[arg(short, long)]
    pub name: Option<String>,

    /// Adds a random permutation drawn with this seed as a baseline.
    #[arg(long)]
    pub random: Option<u64>,
}

fn evaluate(scorer: &Scorer, name: String, seq: &[usize]) -> SfResult<ValidationRow> {
    Ok(ValidationRow {
        name,
        reference: scorer.score_reference(seq)?,
        details: scorer.score_debug(seq)?,
    })
}

pub fn run(args: ValidateArgs, scorer: Arc<Scorer>) -> SfResult<()> {
    let n = scorer.universe_size();
    let mut rows = Vec::new();

    println!("\n🔎 === SEQUENCE AUDIT === 🔎");

    if let Some(raw) = &args.sequence {
        let seq = parse_sequence(raw)?;
        reports::print_sequence_grid("CUSTOM", &seq);
        rows.push(evaluate(&scorer, "custom".to_string(), &seq)?);
    } else {
        for known in KnownSequence::iter() {
            let name = known.to_string();
            if let Some(ref filter) = args.name {
                if !name.contains(&filter.to_lowercase()) {
                    continue;
                }
            }
            if known.items().len() != n {
                warn!("Skipping '{}': it orders 100 items, universe has {}", name, n);
                continue;
            }
            rows.push(evaluate(&scorer, name, known.items())?);
        }
    }

    if let Some(seed) = args.random {
        let mut rng = fastrand::Rng::with_seed(seed);
        let seq = random_sequence(&mut rng, n);
        rows.push(evaluate(&scorer, format!("random_{}", seed), &seq)?);
    }

    rows.sort_by(|a, b| b.details.score.total_cmp(&a.details.score));
    reports::print_scoring_report(&rows, scorer.window);
    Ok(())
}
