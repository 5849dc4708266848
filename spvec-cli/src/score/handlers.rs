use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clap::ArgMatches;
use tracing::info;

use spvec_core::io::read_vectors;
use spvec_scoring::{ScoredCandidate, ScoringConfig, search};

fn load_config(matches: &ArgMatches) -> Result<ScoringConfig> {
    let mut config = match matches.get_one::<String>("config") {
        Some(path) => ScoringConfig::try_from(Path::new(path))
            .with_context(|| format!("Failed to load scoring config: {}", path))?,
        None => ScoringConfig::default(),
    };

    if let Some(limit) = matches.get_one::<usize>("limit") {
        config = config.with_limit(*limit);
    }
    if matches.get_flag("keep-non-overlapping") {
        config = config.with_exclude_non_overlapping(false);
    }

    Ok(config)
}

pub fn score_files(query: &Path, candidates: &Path, config: &ScoringConfig) -> Result<Vec<ScoredCandidate>> {
    let query = read_vectors(query)?
        .into_iter()
        .next()
        .with_context(|| format!("No query vector found in {:?}", query))?;
    let candidates = read_vectors(candidates)?;

    let ranked = search(&query, &candidates, config)?;
    info!(
        "Ranked {} of {} candidates",
        ranked.len(),
        candidates.len()
    );

    Ok(ranked)
}

pub fn run_score(matches: &ArgMatches) -> Result<()> {
    let query = matches
        .get_one::<String>("query")
        .expect("--query is required");
    let candidates = matches
        .get_one::<String>("candidates")
        .expect("--candidates is required");
    let output = matches.get_one::<String>("output");

    let config = load_config(matches)?;
    let ranked = score_files(Path::new(query), Path::new(candidates), &config)?;

    let mut writer: Box<dyn Write> = match output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("Failed to create file: {}", path))?,
        )),
        None => Box::new(io::stdout().lock()),
    };
    serde_json::to_writer(&mut writer, &ranked)?;
    writeln!(writer)?;
    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;
    use std::fs;
    use tempfile::{TempDir, tempdir};

    use spvec_scoring::NO_OVERLAP_SCORE;

    use crate::score::cli::create_score_cli;

    #[fixture]
    fn workdir() -> TempDir {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("query.json"),
            r#"{"indices": [5, 1, 3], "values": [4.0, 2.0, 1.0]}"#,
        )
        .unwrap();
        fs::write(
            dir.path().join("candidates.json"),
            r#"[
                {"indices": [2, 4], "values": [1.0, 1.0]},
                {"indices": [3, 5, 7], "values": [3.0, 2.0, 1.0]},
                {"indices": [1], "values": [0.5]}
            ]"#,
        )
        .unwrap();
        dir
    }

    #[rstest]
    fn test_score_files(workdir: TempDir) {
        let ranked = score_files(
            &workdir.path().join("query.json"),
            &workdir.path().join("candidates.json"),
            &ScoringConfig::default(),
        )
        .unwrap();

        assert_eq!(
            ranked,
            vec![
                ScoredCandidate { position: 1, score: 11.0 },
                ScoredCandidate { position: 2, score: 1.0 },
            ]
        );
    }

    #[rstest]
    fn test_score_files_empty_query(workdir: TempDir) {
        let query = workdir.path().join("empty.json");
        fs::write(&query, "[]").unwrap();

        let result = score_files(
            &query,
            &workdir.path().join("candidates.json"),
            &ScoringConfig::default(),
        );

        assert!(result.is_err());
    }

    #[rstest]
    fn test_flags_override_config(workdir: TempDir) {
        let query = workdir.path().join("query.json");
        let candidates = workdir.path().join("candidates.json");
        let matches = create_score_cli()
            .try_get_matches_from([
                "score",
                "--query",
                query.to_str().unwrap(),
                "--candidates",
                candidates.to_str().unwrap(),
                "--limit",
                "10",
                "--keep-non-overlapping",
            ])
            .unwrap();

        let config = load_config(&matches).unwrap();
        assert_eq!(config.limit, Some(10));
        assert_eq!(config.exclude_non_overlapping, false);

        let ranked = score_files(&query, &candidates, &config).unwrap();
        assert_eq!(ranked.len(), 3);
        assert_eq!(ranked[2].score, NO_OVERLAP_SCORE);
    }

    #[rstest]
    fn test_run_score_writes_json(workdir: TempDir) {
        let output = workdir.path().join("ranked.json");
        let matches = create_score_cli()
            .try_get_matches_from([
                "score",
                "--query",
                workdir.path().join("query.json").to_str().unwrap(),
                "--candidates",
                workdir.path().join("candidates.json").to_str().unwrap(),
                "--output",
                output.to_str().unwrap(),
            ])
            .unwrap();

        run_score(&matches).unwrap();

        let written: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(written[0]["position"], 1);
        assert_eq!(written[0]["score"], 11.0);
    }
}
