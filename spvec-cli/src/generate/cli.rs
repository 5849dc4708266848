use clap::{Command, arg};

pub const GENERATE_CMD: &str = "generate";
pub const DEFAULT_COUNT: &str = "1";

pub fn create_generate_cli() -> Command {
    Command::new(GENERATE_CMD)
        .about("Generate random sparse vectors and write them as JSON.")
        .arg(
            arg!(--dimensions <DIMENSIONS>)
                .required(true)
                .value_parser(clap::value_parser!(u64))
                .help("Size of the dimension space; indices fall in [0, DIMENSIONS)"),
        )
        .arg(
            arg!(--density <DENSITY>)
                .required(true)
                .value_parser(clap::value_parser!(f64))
                .help("Fraction of non-zero dimensions, within [0, 1]"),
        )
        .arg(
            arg!(--count <COUNT>)
                .required(false)
                .default_value(DEFAULT_COUNT)
                .value_parser(clap::value_parser!(usize))
                .help("Number of vectors to generate"),
        )
        .arg(
            arg!(--seed <SEED>)
                .required(false)
                .value_parser(clap::value_parser!(u64))
                .help("Seed for reproducible output"),
        )
        .arg(
            arg!(--output <OUTPUT>)
                .required(false)
                .help("Output JSON path, gzip'd when it ends in .gz (default: stdout)"),
        )
}
