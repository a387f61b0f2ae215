//! Serial console render sink
//!
//! Carries the rendered panel text to the operator over the console
//! UART. The graphical panel hangs off the same [`PanelSink`] seam; this
//! implementation is the text-mode rendition. `show_*` only stage (they
//! run with the panel mutex held); `flush` does the slow write after the
//! lock is released.

use core::fmt::Write as _;

use defmt::*;
use embassy_rp::uart::BufferedUartTx;
use embedded_io_async::Write;
use heapless::String;

use deltos_core::panel::DisplayLine;
use deltos_core::sink::PanelSink;

/// Staging buffer for one rendered screen
const STAGE_LEN: usize = 4352;

/// Text-mode panel sink writing to the console UART.
pub struct SerialConsole {
    tx: BufferedUartTx,
    staged: String<STAGE_LEN>,
}

impl SerialConsole {
    /// Wrap a console UART writer.
    pub fn new(tx: BufferedUartTx) -> Self {
        Self {
            tx,
            staged: String::new(),
        }
    }

    /// Write out everything staged since the last flush.
    pub async fn flush(&mut self) {
        if self.staged.is_empty() {
            return;
        }
        if let Err(e) = self.tx.write_all(self.staged.as_bytes()).await {
            warn!("Console write failed: {:?}", e);
        }
        self.staged.clear();
    }
}

impl PanelSink for SerialConsole {
    fn show_tasks(&mut self, lines: &[DisplayLine]) {
        let _ = self.staged.push_str("\r\n==== Tasks ====\r\n");
        for line in lines {
            let _ = self.staged.push_str(line);
            let _ = self.staged.push_str("\r\n");
        }
    }

    fn show_selection(&mut self, index: usize) {
        let _ = write!(self.staged, "> {}\r\n", index);
    }
}
