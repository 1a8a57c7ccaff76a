/// Data model — roll codes and the recognized media extension set.
pub mod media_ext;
pub mod roll_code;

pub use media_ext::MediaExtension;
pub use roll_code::{ParseRollCodeError, RollCode};
