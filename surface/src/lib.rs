mod console;
mod mock;

pub use console::ConsoleSurface;
pub use mock::MockSurface;

use thiserror::Error;
use tweenfx::StyleFrame;

#[derive(Debug, Error, PartialEq)]
pub enum SurfaceError {
    #[error("surface connection lost: {reason}")]
    ConnectionLost { reason: String },
}

/// Write-only presentation boundary. The stage pushes the retained style
/// frame here once per tick; nothing is ever read back.
pub trait Surface {
    fn present(&self, frame: &StyleFrame) -> Result<(), SurfaceError>;
}
