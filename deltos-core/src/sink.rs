//! Render sink for panel output.

use crate::panel::DisplayLine;

/// Where the panel pushes its rendered output.
///
/// The firmware wires this to whatever carries the pixels - a serial
/// console today, a graphical panel behind the same seam tomorrow.
/// Implementations are called with the panel mutex held, so they must
/// only stage; slow I/O belongs after the lock is released.
pub trait PanelSink {
    /// Present the current task lines.
    fn show_tasks(&mut self, lines: &[DisplayLine]);

    /// Present the 1-based selection cursor.
    fn show_selection(&mut self, index: usize);
}
