// Cagematch: thematic UFC fighter recommendations for streaming-content fans
//
// This is the library root. Tags flow from the data loader through the
// similarity engine into the bundle composer; config and output sit at the
// edges.

pub mod bundle;
pub mod config;
pub mod data;
pub mod models;
pub mod output;
pub mod similarity;
pub mod tags;
