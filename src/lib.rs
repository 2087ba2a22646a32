pub mod config;
pub mod dispatch; // Event routing: classify -> trigger -> aggregate -> levels
pub mod dsp;
pub mod engine; // Audio-thread mixer and the handle that feeds it
pub mod error;
pub mod graph; // Composable audio graph nodes
pub mod io;
pub mod presence; // Locations, events, directory snapshots, occupancy
pub mod sonify; // Event → sound mapping
pub mod voices;

pub use config::Config;
pub use dispatch::{Dispatched, Dispatcher};
pub use error::{Error, Result};

pub const MAX_BLOCK_SIZE: usize = 2048;
pub(crate) const MIN_TIME: f32 = 1.0 / 48_000.0;
/// Longest echo the displacement delay can hold (2 s at 48 kHz).
pub(crate) const MAX_DELAY_SAMPLES: usize = 96_000;
