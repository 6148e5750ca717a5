mod client;
mod schema;

pub use client::GeminiAnalyzer;
pub use schema::ANALYSIS_PROMPT;
