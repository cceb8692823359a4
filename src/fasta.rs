//! Parser for FASTA sequence files.

use std::io::{BufRead, BufReader, Read};

use flate2::read::GzDecoder;

use crate::error::Error;

/// Reads gzip-compressed FASTA and yields (name, sequence) pairs.
///
/// The name is the first whitespace-delimited token after `>`; the rest of
/// the header line is ignored. Sequence bases are uppercased.
pub fn parse_fasta_gz<R: Read>(reader: R) -> Result<Vec<(String, Vec<u8>)>, Error> {
    let decoder = GzDecoder::new(reader);
    let buf_reader = BufReader::new(decoder);
    parse_fasta(buf_reader)
}

fn parse_fasta<R: BufRead>(reader: R) -> Result<Vec<(String, Vec<u8>)>, Error> {
    let mut results: Vec<(String, Vec<u8>)> = Vec::new();
    let mut current_name: Option<String> = None;
    let mut current_sequence: Vec<u8> = Vec::new();

    for line in reader.lines() {
        let line = line?;
        if line.starts_with('>') {
            // Finish previous record
            if let Some(name) = current_name.take() {
                results.push((name, current_sequence));
                current_sequence = Vec::new();
            }
            current_name = Some(extract_name(&line)?);
        } else if current_name.is_some() {
            // Append sequence data, uppercased
            let trimmed = line.trim();
            let start = current_sequence.len();
            current_sequence.extend_from_slice(trimmed.as_bytes());
            current_sequence[start..].make_ascii_uppercase();
        }
    }

    // Don't forget the last record
    if let Some(name) = current_name {
        results.push((name, current_sequence));
    }

    Ok(results)
}

fn extract_name(header: &str) -> Result<String, Error> {
    let header = header.trim_start_matches('>');
    let first_token = header.split_whitespace().next().unwrap_or("");
    if first_token.is_empty() {
        return Err(Error::Parse(format!("empty FASTA header: >{header}")));
    }
    Ok(first_token.to_string())
}
