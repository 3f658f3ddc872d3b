// Wordscope: comparative lexical analysis of two documents.
//
// This is the library root. `analysis` is the pure pipeline; `source` and
// `output` are the I/O on either side of it.

pub mod analysis;
pub mod config;
pub mod output;
pub mod source;
