//! Inter-task communication channels
//!
//! Static embassy-sync primitives connecting the link, worker, and UI
//! tasks. The panel mutex is the single guard for all shared panel
//! state: task table, selection cursor, and display lines.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::mutex::Mutex;
use embassy_sync::signal::Signal;

use deltos_core::panel::{Panel, PanelInput};
use deltos_protocol::{Command, RawFrame};

/// Frame queue depth between reassembly and the worker
const FRAME_CHANNEL_SIZE: usize = 4;

/// Outbound command queue depth
const CMD_CHANNEL_SIZE: usize = 4;

/// Input trigger queue depth
const INPUT_CHANNEL_SIZE: usize = 8;

/// Complete frames from the link RX task to the worker
pub static FRAME_CHANNEL: Channel<CriticalSectionRawMutex, RawFrame, FRAME_CHANNEL_SIZE> =
    Channel::new();

/// Commands awaiting transmission on the link
pub static CMD_CHANNEL: Channel<CriticalSectionRawMutex, Command, CMD_CHANNEL_SIZE> =
    Channel::new();

/// Input triggers from the button tasks
pub static INPUT_CHANNEL: Channel<CriticalSectionRawMutex, PanelInput, INPUT_CHANNEL_SIZE> =
    Channel::new();

/// Signal that panel content changed and the sink should re-render
pub static REDRAW: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// All shared panel state, behind the one mutex every reader and writer
/// must hold
pub static PANEL: Mutex<CriticalSectionRawMutex, Panel> = Mutex::new(Panel::new());
