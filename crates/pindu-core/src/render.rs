use crate::types::Placement;

/// Renderer collaborator driven by the layout engine.
///
/// The engine only positions text and signals page breaks; fonts,
/// colors and output bytes live behind this seam.
pub trait Canvas {
    fn draw_text(&mut self, placement: &Placement);

    /// Start a new page. Subsequent placements belong to it.
    fn new_page(&mut self);
}
