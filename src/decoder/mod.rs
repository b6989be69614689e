//! Aztec decoding modules
//!
//! Everything after localization: bit extraction from the sampled layers,
//! Reed-Solomon correction with bit un-stuffing, and character decoding.

/// Top-level decoder that runs every stage
pub mod aztec_decoder;
/// Layer traversal and reference-grid removal
pub mod bitstream;
/// Environment tunables
pub mod config;
/// Codeword assembly and un-stuffing
pub mod correction;
/// Character tables and the mode-switching state machine
pub mod modes;
/// Galois fields and Reed-Solomon decoding
pub mod reed_solomon;
/// Symbol capacity tables
pub mod tables;
