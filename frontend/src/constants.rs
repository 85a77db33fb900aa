// Client-wide constants

/// Longest position string shown in a profile popover.
pub const MAX_POSITION_LENGTH: usize = 35;

/// Hover delay before the call button tooltip appears.
pub const WEBRTC_TIME_DELAY_MS: u32 = 750;

pub const PROFILE_IMAGE_SIZE: u32 = 128;

/// Channel every member belongs to.
pub const DEFAULT_CHANNEL: &str = "town-square";

pub const VIDEO_ICON: &str = r#"<svg width="16px" height="16px" viewBox="0 0 16 16" xmlns="http://www.w3.org/2000/svg"><path fill="currentColor" d="M15.7 3.3c-.2-.1-.4-.1-.6 0L12 5.5V4c0-.6-.4-1-1-1H1c-.6 0-1 .4-1 1v8c0 .6.4 1 1 1h10c.6 0 1-.4 1-1v-1.5l3.1 2.2c.1.1.2.1.3.1.1 0 .2 0 .3-.1.2-.1.3-.3.3-.5V3.8c0-.2-.1-.4-.3-.5z"/></svg>"#;
