// Lexical analysis — the pure text-to-vector pipeline.
//
// Raw text goes through normalize -> stopwords -> frequency, and the
// resulting maps feed stats, similarity and ranking. Nothing in here does
// I/O; fetching and rendering live in `source` and `output`.

pub mod corpus;
pub mod frequency;
pub mod normalize;
pub mod ranking;
pub mod similarity;
pub mod stats;
pub mod stopwords;

pub use frequency::FrequencyMap;
