use crate::*;

/// Tracks one press-drag-release stroke and forwards only new cells to the engine.
///
/// Pointer and touch adapters call [`Stroke::hover`] on every move event; the
/// tracker drops repeats for the cell that is already under the pointer so the
/// engine sees each cell once per visit.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Stroke {
    drawing: bool,
    hovered: Option<Coord2>,
}

impl Stroke {
    pub const fn new() -> Self {
        Self {
            drawing: false,
            hovered: None,
        }
    }

    pub const fn is_drawing(&self) -> bool {
        self.drawing
    }

    pub const fn hovered(&self) -> Option<Coord2> {
        self.hovered
    }

    /// Pointer down on `coords`: arms the stroke and tries the cell as a click.
    pub fn press(&mut self, engine: &mut PathEngine, coords: Coord2) -> MoveOutcome {
        self.drawing = true;
        self.hovered = Some(coords);
        log::trace!("stroke pressed at {:?}", coords);
        engine.try_move(coords)
    }

    /// Pointer moved over `coords` while possibly drawing.
    pub fn hover(&mut self, engine: &mut PathEngine, coords: Coord2) -> MoveOutcome {
        if !self.drawing || self.hovered == Some(coords) {
            return MoveOutcome::Rejected;
        }

        self.hovered = Some(coords);
        engine.try_move(coords)
    }

    /// Pointer left the board; the stroke stays armed.
    pub fn leave(&mut self) {
        self.hovered = None;
    }

    pub fn release(&mut self) {
        if self.drawing {
            log::trace!("stroke released at {:?}", self.hovered);
        }
        self.drawing = false;
        self.hovered = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> PathEngine {
        PathEngine::new(PuzzleConfig::new((3, 2), (0, 0), (0, 1))).unwrap()
    }

    #[test]
    fn hover_without_press_is_ignored() {
        let mut engine = engine();
        let mut stroke = Stroke::new();

        assert_eq!(stroke.hover(&mut engine, (1, 0)), MoveOutcome::Rejected);
        assert_eq!(engine.path(), [(0, 0)]);
    }

    #[test]
    fn drag_draws_through_each_new_cell() {
        let mut engine = engine();
        let mut stroke = Stroke::new();

        // pressing the head itself is a harmless rejection
        assert_eq!(stroke.press(&mut engine, (0, 0)), MoveOutcome::Rejected);
        assert!(stroke.is_drawing());

        for coords in [(1, 0), (1, 0), (2, 0), (2, 1), (2, 1), (1, 1)] {
            stroke.hover(&mut engine, coords);
        }
        assert_eq!(stroke.hover(&mut engine, (0, 1)), MoveOutcome::Cleared);

        assert_eq!(engine.path(), [(0, 0), (1, 0), (2, 0), (2, 1), (1, 1), (0, 1)]);
        assert!(engine.is_cleared());
    }

    #[test]
    fn repeated_hover_does_not_reach_engine() {
        let mut engine = engine();
        let mut stroke = Stroke::new();
        stroke.press(&mut engine, (0, 0));

        assert_eq!(stroke.hover(&mut engine, (1, 0)), MoveOutcome::Extended);
        assert_eq!(stroke.hover(&mut engine, (1, 0)), MoveOutcome::Rejected);
        assert_eq!(stroke.hovered(), Some((1, 0)));
    }

    #[test]
    fn leave_allows_reentering_same_cell() {
        let mut engine = engine();
        let mut stroke = Stroke::new();
        stroke.press(&mut engine, (0, 0));
        stroke.hover(&mut engine, (2, 0));
        stroke.leave();

        assert!(stroke.is_drawing());
        assert_eq!(stroke.hovered(), None);
        assert_eq!(stroke.hover(&mut engine, (1, 0)), MoveOutcome::Extended);
    }

    #[test]
    fn click_extends_path_one_cell_at_a_time() {
        let mut engine = engine();
        let mut stroke = Stroke::new();

        assert_eq!(stroke.press(&mut engine, (1, 0)), MoveOutcome::Extended);
        stroke.release();
        assert!(!stroke.is_drawing());
        assert_eq!(stroke.hover(&mut engine, (2, 0)), MoveOutcome::Rejected);

        assert_eq!(stroke.press(&mut engine, (2, 0)), MoveOutcome::Extended);
        assert_eq!(engine.path(), [(0, 0), (1, 0), (2, 0)]);
    }
}
