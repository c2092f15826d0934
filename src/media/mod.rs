/// Local image handling
///
/// This module handles:
/// - Reading a chosen file into memory (loader.rs)
/// - Building data URLs and decoding preview pixels (preview.rs)

pub mod loader;
pub mod preview;
