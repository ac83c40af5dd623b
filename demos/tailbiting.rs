//! Generate one tail-biting 2-SAT instance and write it in DIMACS format.
//!
//! Run with: `cargo run --example tailbiting -- --density 1.2 -o out.cnf`

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use tailbiting_sat::generator::Generator;
use tailbiting_sat::params::{Mode, Params};
use tailbiting_sat::stats::InstanceStats;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ModeArg {
    Uniform,
    Biased,
}

#[derive(Debug, Parser)]
#[command(author, version)]
#[command(about = "Generate a tail-biting random 2-SAT instance")]
struct Cli {
    /// Block-selection mode.
    #[arg(long, value_enum, default_value = "uniform")]
    mode: ModeArg,

    /// Number of blocks on the ring (default: 100 uniform, 200 biased).
    #[arg(short = 'L', long, value_name = "INT")]
    blocks: Option<usize>,

    /// Variables per block (default: 100 uniform, 40 biased).
    #[arg(short = 'n', long, value_name = "INT")]
    block_size: Option<usize>,

    /// Window width in blocks (default: 3 uniform, 7 biased).
    #[arg(short = 'w', long, value_name = "INT")]
    width: Option<usize>,

    /// Clauses per variable.
    #[arg(short = 'r', long, value_name = "FLOAT", default_value_t = 1.0)]
    density: f64,

    /// Exponential decay rate of window weights (biased mode).
    #[arg(long, value_name = "FLOAT", default_value_t = Mode::DEFAULT_BIAS_STRENGTH)]
    bias_strength: f64,

    /// Probability of a windowed draw rather than a global one (biased mode).
    #[arg(long, value_name = "FLOAT", default_value_t = Mode::DEFAULT_BIASED_PROB)]
    biased_prob: f64,

    /// Random seed (optional).
    #[arg(long)]
    seed: Option<u64>,

    /// Output file (default: stdout).
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
}

impl Cli {
    fn params(&self) -> Params {
        let (l, n, w) = match self.mode {
            ModeArg::Uniform => (100, 100, 3),
            ModeArg::Biased => (200, 40, 7),
        };
        let params = Params::new(
            self.blocks.unwrap_or(l),
            self.block_size.unwrap_or(n),
            self.density,
            self.width.unwrap_or(w),
        );
        match self.mode {
            ModeArg::Uniform => params,
            ModeArg::Biased => params.biased(self.bias_strength, self.biased_prob),
        }
    }
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    simplelog::TermLogger::init(
        simplelog::LevelFilter::Info,
        simplelog::Config::default(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;

    let time_total = std::time::Instant::now();

    let args = Cli::parse();
    log::info!("args = {:?}", args);

    let seed = match args.seed {
        Some(s) => s,
        None => rand::random(),
    };
    log::info!("Random seed: {}", seed);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let params = args.params();
    let generator = Generator::new(params.clone())?;
    let instance = generator.generate(&mut rng);

    let stats = InstanceStats::new(&instance, generator.ring());
    for line in stats.to_string().lines() {
        log::info!("{}", line);
    }
    log::info!(
        "Clauses within window distance {}: {:.2}%",
        params.width - 1,
        100.0 * stats.local_fraction(params.width - 1)
    );

    let comments = vec![
        format!(
            "tail-biting 2-SAT: L={} n={} w={} r={}",
            params.num_blocks, params.block_size, params.width, params.density
        ),
        format!("mode: {}", params.mode),
        format!("seed: {}", seed),
    ];
    match &args.output {
        Some(path) => {
            let mut writer = BufWriter::new(File::create(path)?);
            instance.write_dimacs(&mut writer, &comments)?;
            writer.flush()?;
            log::info!("Written {} clauses to {}", instance.len(), path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut writer = BufWriter::new(stdout.lock());
            instance.write_dimacs(&mut writer, &comments)?;
            writer.flush()?;
        }
    }

    log::info!("All done in {:.3} s", time_total.elapsed().as_secs_f64());
    Ok(())
}
