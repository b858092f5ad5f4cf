//! querygen - Generate database-testing queries with the Gemini API
//!
//! Maps source and target data systems, builds a natural-language prompt from
//! the mapping details, sends it to the Google Generative Language API, and
//! extracts the SQL query (plus explanation and notes) from the reply.

pub mod cli;
pub mod config;
pub mod extract;
pub mod fields;
pub mod llm;
pub mod prompt;
pub mod table;
pub mod util;
