pub mod scripted;
pub mod steady;

/// A source of viewport events. Generators push `ViewportEvent`s into an
/// mpsc channel from a background task and stop when the receiver closes.
pub trait ScrollEventGenerator: Send + Sync {
    fn get_name(&self) -> &str;

    fn restart(&mut self) {}
}
