pub mod accordion;
pub mod banner;
pub mod color_scheme;
pub mod config;
pub mod debounce;
pub mod dom;
pub mod error;
pub mod events;
pub mod hover;
pub mod init;
pub mod lazy_images;
pub mod parallax;
pub mod reveal;
pub mod smooth_scroll;
pub mod timers;
pub mod viewport;

pub use debounce::{debounce, debounce_with, Debounced};
pub use error::{Error, Result};
pub use init::{enhance, Enhancements};
