pub mod easing;
pub mod reveal;
pub mod summon;

pub use easing::EasingType;
pub use reveal::RevealWindow;
pub use summon::{SummonFrame, SummonPhase, SummonSequence};
