pub mod interface;
pub mod direction;
pub mod client;

pub use interface::{Direction, Lang, TranslateInterface, TranslateRequest};
pub use direction::{contains_japanese_script, resolve_direction, romanize_target, InputType, RomanizeTarget};
pub use client::{parse_upstream_body, GoogleTranslateClient};
