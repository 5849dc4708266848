use clap::{Arg, Command, arg};

pub const SCORE_CMD: &str = "score";

pub fn create_score_cli() -> Command {
    Command::new(SCORE_CMD)
        .about("Rank candidate sparse vectors by dot product with a query vector.")
        .arg(
            arg!(--query <QUERY>)
                .required(true)
                .help("JSON file holding the query vector (the first vector is used)"),
        )
        .arg(
            arg!(--candidates <CANDIDATES>)
                .required(true)
                .help("JSON file holding the candidate vectors"),
        )
        .arg(
            arg!(--config <CONFIG>)
                .required(false)
                .help("Scoring config in TOML format"),
        )
        .arg(
            arg!(--limit <LIMIT>)
                .required(false)
                .value_parser(clap::value_parser!(usize))
                .help("Keep at most LIMIT candidates (overrides the config)"),
        )
        .arg(
            Arg::new("keep-non-overlapping")
                .long("keep-non-overlapping")
                .help("Rank candidates that share no index with the query last instead of dropping them")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            arg!(--output <OUTPUT>)
                .required(false)
                .help("Output JSON path (default: stdout)"),
        )
}
