/// State management module
///
/// This module handles all widget state, including:
/// - Shared data structures (data.rs)
/// - The idle/loading state machine and displayed verdict (widget.rs)
/// - Drag-and-drop gesture tracking (drop_zone.rs)

pub mod data;
pub mod drop_zone;
pub mod widget;
