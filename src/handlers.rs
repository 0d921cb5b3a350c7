pub mod info;
pub mod text;

pub use info::show_system_info;
pub use text::{handle_text, help};
