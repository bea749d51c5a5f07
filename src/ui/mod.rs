mod layout;
mod theme;

pub use layout::{center_rect, Layout};
pub use theme::Theme;
