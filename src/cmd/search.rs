use crate::reports;
use clap::Args;
use seqforge::config::Config;
use seqforge::optimizer::runner::{OptimizationOptions, Optimizer};
use seqforge::optimizer::ProgressCallback;
use seqforge::scorer::Scorer;
use std::process;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};

#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    #[command(flatten)]
    pub config: Config,

    /// Time budget in seconds for the refinement phase.
    #[arg(short = 'T', long)]
    pub time: Option<u64>,
}

struct ConsoleProgress {
    starts_done: AtomicUsize,
    total_starts: usize,
}

impl ProgressCallback for ConsoleProgress {
    fn on_greedy_start(&self, _start: usize, _score: f64) {
        let done = self.starts_done.fetch_add(1, Ordering::Relaxed) + 1;
        if done % 10 == 0 || done == self.total_starts {
            info!("    Greedy starts: {}/{}", done, self.total_starts);
        }
    }

    fn on_sweep(&self, sweep: usize, score: f64, accepted: usize) -> bool {
        info!(
            "Sweep {:3} | Swaps: {:4} | Score: {:.2}",
            sweep, accepted, score
        );
        true
    }
}

pub fn run(args: SearchArgs, scorer: Arc<Scorer>) {
    let mut options = OptimizationOptions::from(&args.config);
    options.max_time = args.time.map(Duration::from_secs);

    let progress = ConsoleProgress {
        starts_done: AtomicUsize::new(0),
        total_starts: scorer.universe_size(),
    };

    let result = match Optimizer::new(scorer.clone(), options).run(progress) {
        Ok(r) => r,
        Err(e) => {
            error!("❌ Search failed: {}", e);
            process::exit(1);
        }
    };

    println!("\n=== 🏆 FINAL RESULT ===");
    reports::print_sequence_grid("GREEDY", &result.greedy.result.sequence);
    reports::print_sequence_grid("REFINED", &result.refined.sequence);
    reports::print_search_summary(&result);
    println!("Score: {:.4}", result.refined.score);
    println!(
        "Sequence: {}",
        result
            .refined
            .sequence
            .iter()
            .map(|n| n.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    );
}
