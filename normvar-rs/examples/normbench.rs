use clap::Parser;
use normvar_rs::{BenchConfig, Harness, consts::DEFAULT_SAMPLES};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uniform_rs::DEFAULT_SEED;

/// Time four standard-normal generators and rank them by elapsed time
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Number of variates per algorithm
    #[arg(short = 'n', long, default_value_t = DEFAULT_SAMPLES, env = "NORMVAR_SAMPLES")]
    samples: usize,

    /// Seed for the uniform stream
    #[arg(short, long, default_value_t = DEFAULT_SEED, env = "NORMVAR_SEED")]
    seed: u64,

    /// Fail if a rejection sampler rejects this many proposals in a row
    #[arg(long)]
    max_attempts: Option<usize>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", env = "NORMVAR_LOG")]
    log_level: String,
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_tracing(&args.log_level);

    let mut builder = BenchConfig::builder().samples(args.samples).seed(args.seed);
    if let Some(cap) = args.max_attempts {
        builder = builder.max_attempts(cap);
    }
    let harness = Harness::new(builder.build()?)?;

    tracing::info!(
        samples = harness.config().samples(),
        seed = harness.config().seed(),
        "running benchmark"
    );
    let ranking = harness.run()?;
    print!("{}", ranking);
    Ok(())
}
