//! Handle to the embedded report's root controller.

/// State-mutation surface of the patched document's internal controller, as
/// exposed to the host once the handshake completes.
///
/// Implemented by the embedding surface (and by mocks in tests). The handle
/// is only valid for as long as the rendered document itself lives.
pub trait ReportController {
    /// Marks the sidebar panel as pinned.
    fn set_pinned(&mut self, pinned: bool);

    /// Toggles the chunk context menu flag.
    fn show_context_menu(&mut self, visible: bool);

    /// Runs the controller's own pin-state-change procedure.
    fn apply_pin_state(&mut self, pinned: bool);

    /// Labels of every chunk item the report renders.
    fn chunk_labels(&self) -> Vec<String>;

    /// Replaces the current chunk selection.
    fn select_chunks(&mut self, labels: Vec<String>);
}
