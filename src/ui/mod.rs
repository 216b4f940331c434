pub mod popup;

pub use popup::{Popup, PopupOptions};
