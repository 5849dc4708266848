mod generate;
mod logging;
mod score;

use anyhow::Result;
use clap::Command;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const BIN_NAME: &str = "spvec";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .about("Generate sparse vectors and score them against a query with a merge-scan dot product.")
        .subcommand_required(true)
        .subcommand(generate::cli::create_generate_cli())
        .subcommand(score::cli::create_score_cli())
}

fn main() -> Result<()> {
    logging::init_logging();

    let app = build_parser();
    let matches = app.get_matches();

    match matches.subcommand() {
        //
        // GENERATE
        //
        Some((generate::cli::GENERATE_CMD, matches)) => {
            generate::handlers::run_generate(matches)?;
        }

        //
        // SCORE
        //
        Some((score::cli::SCORE_CMD, matches)) => {
            score::handlers::run_score(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}
