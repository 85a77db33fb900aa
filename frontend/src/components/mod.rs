pub mod layout;
pub mod overlay;
pub mod profile_popover;
