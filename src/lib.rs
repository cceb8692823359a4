//! Exonic: coding-region coordinate math and bounded annotation description caching.

pub mod error;

pub mod cache;
pub mod codon;
pub mod config;
pub mod fasta;
pub mod interval;
pub mod sequence;
pub mod strand;
pub mod translate;
