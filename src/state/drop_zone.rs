/// Drag-and-drop gesture tracking for the drop area
///
/// The window reports one event per file: every dragged file is hovered,
/// then every file is dropped. Only the first dropped file of a gesture is
/// taken.

use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Gesture {
    #[default]
    Idle,
    /// Files are being dragged over the window
    Hovering,
    /// The first file of this gesture has been taken
    Dropped,
}

#[derive(Debug, Clone, Default)]
pub struct DropZone {
    gesture: Gesture,
}

impl DropZone {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the drop area should be drawn highlighted
    pub fn is_highlighted(&self) -> bool {
        self.gesture == Gesture::Hovering
    }

    /// A file entered the window (reported once per dragged file)
    pub fn hovered(&mut self) {
        self.gesture = Gesture::Hovering;
    }

    /// The drag left the window without dropping
    pub fn left(&mut self) {
        self.gesture = Gesture::Idle;
    }

    /// The taken file has been read; the gesture is over even if the
    /// platform never reports a hover for the next one.
    pub fn settle(&mut self) {
        if self.gesture == Gesture::Dropped {
            self.gesture = Gesture::Idle;
        }
    }

    /// A file was dropped. Returns it only if it is the first of its gesture.
    pub fn dropped(&mut self, path: PathBuf) -> Option<PathBuf> {
        match self.gesture {
            Gesture::Dropped => None,
            Gesture::Idle | Gesture::Hovering => {
                self.gesture = Gesture::Dropped;
                Some(path)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hover_highlights() {
        let mut zone = DropZone::new();
        assert!(!zone.is_highlighted());

        zone.hovered();
        assert!(zone.is_highlighted());

        zone.left();
        assert!(!zone.is_highlighted());
    }

    #[test]
    fn test_only_first_file_of_a_gesture_is_taken() {
        let mut zone = DropZone::new();
        zone.hovered();
        zone.hovered();

        assert_eq!(zone.dropped("a.jpg".into()), Some(PathBuf::from("a.jpg")));
        assert!(!zone.is_highlighted());
        assert_eq!(zone.dropped("b.jpg".into()), None);
    }

    #[test]
    fn test_next_gesture_is_accepted() {
        let mut zone = DropZone::new();
        zone.hovered();
        assert!(zone.dropped("a.jpg".into()).is_some());

        zone.hovered();
        assert_eq!(zone.dropped("c.png".into()), Some(PathBuf::from("c.png")));
    }

    #[test]
    fn test_settle_ends_the_gesture() {
        let mut zone = DropZone::new();
        assert!(zone.dropped("a.jpg".into()).is_some());
        assert!(zone.dropped("b.jpg".into()).is_none());

        zone.settle();
        assert_eq!(zone.dropped("c.jpg".into()), Some(PathBuf::from("c.jpg")));
    }

    #[test]
    fn test_settle_keeps_an_active_hover() {
        let mut zone = DropZone::new();
        zone.hovered();
        zone.settle();
        assert!(zone.is_highlighted());
    }

    #[test]
    fn test_drop_without_hover_is_accepted() {
        let mut zone = DropZone::new();
        assert_eq!(zone.dropped("a.jpg".into()), Some(PathBuf::from("a.jpg")));
    }
}
