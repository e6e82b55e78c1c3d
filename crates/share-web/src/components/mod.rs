mod icon_share;
mod share_button;

pub use icon_share::IconShare;
pub use share_button::{ShareButton, ShareControl};
