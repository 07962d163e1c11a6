use ratatui::Frame;
use ratatui::layout::Rect;

/// A renderable UI piece.
///
/// Components follow the persistent-state + transient-wrapper pattern:
/// long-lived state (selection, scroll offsets) lives in `TuiState`, and a
/// wrapper struct is built each frame with borrowed state plus props.
///
/// `render` takes `&mut self` so a component can update cached layout or
/// scroll state during the pass, in line with ratatui's `StatefulWidget`.
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}
