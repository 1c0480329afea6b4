pub mod count_up;
pub mod parallax;
pub mod reveal;
pub mod typewriter;

pub use count_up::CountUp;
pub use parallax::Parallax;
pub use reveal::Reveal;
pub use typewriter::Typewriter;
