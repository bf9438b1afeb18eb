use clap::Args;
use seqforge::scorer::affinity::affinity;
use seqforge::scorer::distance::Metric;
use seqforge::scorer::trace::trace;

#[derive(Args, Debug, Clone)]
pub struct DistanceArgs {
    #[arg(allow_hyphen_values = true)]
    pub a: String,
    #[arg(allow_hyphen_values = true)]
    pub b: String,

    #[arg(short, long, default_value = "levenshtein")]
    pub metric: Metric,

    /// Treat both arguments as items and compare their fingerprints.
    #[arg(long, default_value_t = false)]
    pub items: bool,
}

pub fn run(args: DistanceArgs) {
    if args.items {
        let (n, m) = match (args.a.parse::<i64>(), args.b.parse::<i64>()) {
            (Ok(n), Ok(m)) => (n, m),
            _ => {
                eprintln!("❌ --items needs two integers, got '{}' and '{}'", args.a, args.b);
                std::process::exit(1);
            }
        };
        println!("trace({}) = {}", n, trace(n));
        println!("trace({}) = {}", m, trace(m));
        println!("Affinity: {}", affinity(n, m));
        return;
    }

    let cost = args.metric.build().distance(&args.a, &args.b);
    println!("{} distance: {}", args.metric, cost);
}
