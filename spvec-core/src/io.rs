use std::ffi::OsStr;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use flate2::Compression;
use flate2::read::MultiGzDecoder;
use flate2::write::GzEncoder;
use serde::Deserialize;

use crate::models::SparseVector;

#[derive(Deserialize)]
#[serde(untagged)]
enum VectorFile {
    Many(Vec<SparseVector>),
    One(SparseVector),
}

fn is_gzipped(path: &Path) -> bool {
    path.extension() == Some(OsStr::new("gz"))
}

///
/// Get a reader for either a gzip'd or non-gzip'd file.
///
/// # Arguments
///
/// - path: path to the file to read
///
pub fn get_dynamic_reader(path: &Path) -> Result<BufReader<Box<dyn Read>>> {
    let file = File::open(path).with_context(|| format!("Failed to open file: {:?}", path))?;
    let file: Box<dyn Read> = match is_gzipped(path) {
        true => Box::new(MultiGzDecoder::new(file)),
        false => Box::new(file),
    };

    Ok(BufReader::new(file))
}

///
/// Get a writer that gzip-compresses when the path ends in `.gz`.
///
pub fn get_dynamic_writer(path: &Path) -> Result<BufWriter<Box<dyn Write>>> {
    let file = File::create(path).with_context(|| format!("Failed to create file: {:?}", path))?;
    let file: Box<dyn Write> = match is_gzipped(path) {
        true => Box::new(GzEncoder::new(file, Compression::default())),
        false => Box::new(file),
    };

    Ok(BufWriter::new(file))
}

///
/// Read sparse vectors from a JSON file.
///
/// The file holds either a JSON array of `{"indices": [...], "values": [...]}`
/// objects or a single such object. Every vector is validated.
///
pub fn read_vectors(path: &Path) -> Result<Vec<SparseVector>> {
    let reader = get_dynamic_reader(path)?;
    let parsed: VectorFile = serde_json::from_reader(reader)
        .with_context(|| format!("Failed to parse sparse vectors from {:?}", path))?;

    let vectors = match parsed {
        VectorFile::Many(vectors) => vectors,
        VectorFile::One(vector) => vec![vector],
    };

    for (position, vector) in vectors.iter().enumerate() {
        vector
            .validate()
            .with_context(|| format!("Invalid sparse vector at position {} in {:?}", position, path))?;
    }

    Ok(vectors)
}

/// Write sparse vectors to a JSON file as an array.
pub fn write_vectors(path: &Path, vectors: &[SparseVector]) -> Result<()> {
    let mut writer = get_dynamic_writer(path)?;
    serde_json::to_writer(&mut writer, vectors)
        .with_context(|| format!("Failed to write sparse vectors to {:?}", path))?;
    writer.flush()?;
    Ok(())
}
