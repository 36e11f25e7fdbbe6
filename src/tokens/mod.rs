mod color;
mod spacing;
mod typography;

pub use color::{parse_hex, try_parse_hex, Color, ColorParseError, ColorParseResult};
pub use spacing::Spacing;
pub use typography::{Font, FontToken, FontWeight};
