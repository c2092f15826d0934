/// View helpers for the upload widget
///
/// - `drop_area.rs` - drop target, file picker button and URL row
/// - `preview_pane.rs` - the chosen image
/// - `result_panel.rs` - loading and result regions

pub mod drop_area;
pub mod preview_pane;
pub mod result_panel;
