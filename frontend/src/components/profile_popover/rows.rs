use parlor_shared::User;
use yew::virtual_dom::AttrValue;

use super::policy::CallAffordance;
use crate::constants::{MAX_POSITION_LENGTH, PROFILE_IMAGE_SIZE};

/// One line of popover content, in display order.
#[derive(Clone, Debug, PartialEq)]
pub enum PopoverRow {
    Image { src: AttrValue, size: u32 },
    Text { key: &'static str, title: String, text: String },
    Action(CallAffordance),
    Link { title: String, href: String, text: String },
}

impl PopoverRow {
    pub fn key(&self) -> &'static str {
        match self {
            PopoverRow::Image { .. } => "user-popover-image",
            PopoverRow::Text { key, .. } => *key,
            PopoverRow::Action(_) => "makeCall",
            PopoverRow::Link { .. } => "user-popover-email",
        }
    }
}

/// Per-render decisions that feed [`build_rows`].
#[derive(Clone, Copy, Debug)]
pub struct RowOptions {
    /// `None` hides the call control entirely.
    pub call: Option<CallAffordance>,
    pub show_email: bool,
}

/// First `max` characters of `s`.
pub fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((end, _)) => &s[..end],
        None => s,
    }
}

pub fn build_rows(user: &User, src: &AttrValue, options: RowOptions) -> Vec<PopoverRow> {
    let mut rows = vec![PopoverRow::Image {
        src: src.clone(),
        size: PROFILE_IMAGE_SIZE,
    }];

    let full_name = user.full_name();
    if !full_name.is_empty() {
        rows.push(PopoverRow::Text {
            key: "user-popover-fullname",
            title: full_name.clone(),
            text: full_name,
        });
    }

    if let Some(position) = user.display_position() {
        let position = truncate_chars(position, MAX_POSITION_LENGTH).to_string();
        rows.push(PopoverRow::Text {
            key: "user-popover-position",
            title: position.clone(),
            text: position,
        });
    }

    if let Some(affordance) = options.call {
        rows.push(PopoverRow::Action(affordance));
    }

    if options.show_email {
        rows.push(PopoverRow::Link {
            title: user.email.clone(),
            href: format!("mailto:{}", user.email),
            text: user.email.clone(),
        });
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subject() -> User {
        User {
            id: "bob".to_string(),
            username: "bob".to_string(),
            first_name: "Bob".to_string(),
            last_name: "Smith".to_string(),
            nickname: String::new(),
            email: "bob@example.com".to_string(),
            position: Some("Engineer".to_string()),
            roles: "system_user".to_string(),
            last_picture_update: 0,
            update_at: None,
        }
    }

    fn keys(rows: &[PopoverRow]) -> Vec<&'static str> {
        rows.iter().map(PopoverRow::key).collect()
    }

    #[test]
    fn test_full_composition_order() {
        let rows = build_rows(
            &subject(),
            &AttrValue::from("avatar.png"),
            RowOptions {
                call: Some(CallAffordance::Available),
                show_email: true,
            },
        );

        assert_eq!(
            keys(&rows),
            vec![
                "user-popover-image",
                "user-popover-fullname",
                "user-popover-position",
                "makeCall",
                "user-popover-email",
            ]
        );
        assert_eq!(
            rows[0],
            PopoverRow::Image {
                src: AttrValue::from("avatar.png"),
                size: 128,
            }
        );
        assert_eq!(
            rows[4],
            PopoverRow::Link {
                title: "bob@example.com".to_string(),
                href: "mailto:bob@example.com".to_string(),
                text: "bob@example.com".to_string(),
            }
        );
    }

    #[test]
    fn test_optional_rows_omitted() {
        let mut user = subject();
        user.first_name.clear();
        user.last_name.clear();
        user.position = None;

        let rows = build_rows(
            &user,
            &AttrValue::from("avatar.png"),
            RowOptions {
                call: None,
                show_email: false,
            },
        );

        assert_eq!(keys(&rows), vec!["user-popover-image"]);
    }

    #[test]
    fn test_busy_call_row_keeps_its_slot() {
        let rows = build_rows(
            &subject(),
            &AttrValue::from("avatar.png"),
            RowOptions {
                call: Some(CallAffordance::Busy),
                show_email: false,
            },
        );

        assert_eq!(rows.last(), Some(&PopoverRow::Action(CallAffordance::Busy)));
    }

    #[test]
    fn test_long_position_truncated_in_text_and_title() {
        let mut user = subject();
        user.position = Some("Senior Principal Staff Engineer of Everything".to_string());

        let rows = build_rows(
            &user,
            &AttrValue::from("avatar.png"),
            RowOptions {
                call: None,
                show_email: false,
            },
        );

        let expected = "Senior Principal Staff Engineer of ";
        assert_eq!(expected.chars().count(), MAX_POSITION_LENGTH);
        assert_eq!(
            rows[2],
            PopoverRow::Text {
                key: "user-popover-position",
                title: expected.to_string(),
                text: expected.to_string(),
            }
        );
    }

    #[test]
    fn test_truncate_chars_respects_code_points() {
        assert_eq!(truncate_chars("héllo", 2), "hé");
        assert_eq!(truncate_chars("short", 35), "short");
        assert_eq!(truncate_chars("", 3), "");
    }
}
