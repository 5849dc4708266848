use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clap::ArgMatches;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

use spvec_core::SparseVector;
use spvec_core::io::write_vectors;
use spvec_core::random::generate_random_with_rng;

// batches smaller than this finish before a progress bar is worth drawing
const PROGRESS_THRESHOLD: usize = 10_000;

pub fn run_generate(matches: &ArgMatches) -> Result<()> {
    let dimensions = *matches
        .get_one::<u64>("dimensions")
        .expect("--dimensions is required");
    let density = *matches
        .get_one::<f64>("density")
        .expect("--density is required");
    let count = *matches
        .get_one::<usize>("count")
        .expect("--count has a default value");
    let seed = matches.get_one::<u64>("seed");
    let output = matches.get_one::<String>("output");

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(*seed),
        None => StdRng::from_os_rng(),
    };

    let pb = if output.is_some() && count >= PROGRESS_THRESHOLD {
        let pb = ProgressBar::new(count as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} vectors generated")?,
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let mut vectors: Vec<SparseVector> = Vec::with_capacity(count);
    for _ in 0..count {
        let vector = generate_random_with_rng(&mut rng, dimensions, density)
            .context("Failed to generate sparse vector")?;
        vectors.push(vector);
        pb.inc(1);
    }
    pb.finish_and_clear();

    match output {
        Some(path) => {
            write_vectors(Path::new(path), &vectors)?;
            info!("Wrote {} sparse vectors to {}", vectors.len(), path);
        }
        None => {
            let mut handle = io::stdout().lock();
            serde_json::to_writer(&mut handle, &vectors)?;
            writeln!(handle)?;
        }
    }

    Ok(())
}
