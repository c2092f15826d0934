/// Analysis endpoint module
///
/// This module handles:
/// - Submitting a file (multipart) or a URL (JSON) to the endpoint
/// - Parsing the response and classifying it into a displayed verdict

pub mod client;
pub mod verdict;

pub use client::AnalysisClient;
pub use verdict::Verdict;
