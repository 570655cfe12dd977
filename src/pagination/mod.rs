pub mod nav;
pub mod window;

pub use nav::{nav_items, NavItem};
pub use window::{compute, PageWindow};
