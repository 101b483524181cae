pub mod response;
pub mod screen;
pub mod system;

pub use response::{present_ask, present_response};
pub use screen::{present_screen, ScreenContext};
pub use system::{present_examples, present_health, present_tables};
