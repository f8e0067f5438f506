pub mod color;
pub mod error;
pub mod library;
pub mod palette;
pub mod slot;
pub mod storage;

pub use color::{Channel, Color, TextTone};
pub use error::{PaletteError, Result};
pub use library::{PaletteLibrary, SavedPalette};
pub use palette::PaletteState;
pub use slot::PaletteSlot;
pub use storage::StorageManager;
