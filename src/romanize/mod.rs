pub mod interface;
pub mod engine;
pub mod gate;

pub use interface::Romanizer;
pub use engine::{load_default, KanaRomanizer};
#[cfg(feature = "ipadic")]
pub use engine::IpadicRomanizer;
pub use gate::{EngineGate, EngineState};
