use parlor_shared::{User, UserStatus};
use yew::prelude::*;

use crate::components::overlay::ForwardedProps;

#[derive(Properties, Clone, PartialEq)]
pub struct ProfilePopoverProps {
    /// Avatar URL
    pub src: AttrValue,
    pub user: User,
    pub status: UserStatus,
    /// The viewer is already in a call
    pub is_busy: bool,
    #[prop_or_default]
    pub forwarded: ForwardedProps,
}

/// Whether moving from `prev` to `next` can change what the popover shows.
///
/// Placement and any other forwarded hint outside the four offsets are
/// ignored; the subject is compared by value.
pub fn should_update(prev: &ProfilePopoverProps, next: &ProfilePopoverProps) -> bool {
    prev.user != next.user
        || prev.src != next.src
        || prev.status != next.status
        || prev.is_busy != next.is_busy
        || prev.forwarded.offsets() != next.forwarded.offsets()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::overlay::Placement;

    fn props() -> ProfilePopoverProps {
        ProfilePopoverProps {
            src: AttrValue::from("/api/v4/users/bob/image?_=0"),
            user: User {
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
            },
            status: UserStatus::Online,
            is_busy: false,
            forwarded: ForwardedProps::anchored_below(400.0, 100.0),
        }
    }

    #[test]
    fn test_identical_props_skip_update() {
        assert!(!should_update(&props(), &props()));
    }

    #[test]
    fn test_placement_alone_skips_update() {
        let mut next = props();
        next.forwarded.placement = Placement::Left;

        assert!(!should_update(&props(), &next));
    }

    #[test]
    fn test_equal_user_in_new_allocation_skips_update() {
        let prev = props();
        let next = ProfilePopoverProps {
            user: prev.user.clone(),
            ..props()
        };

        assert!(!should_update(&prev, &next));
    }

    #[test]
    fn test_user_field_change_updates() {
        let mut next = props();
        next.user.position = Some("Manager".to_string());
        assert!(should_update(&props(), &next));

        let mut next = props();
        next.user.email = "robert@example.com".to_string();
        assert!(should_update(&props(), &next));
    }

    #[test]
    fn test_each_local_field_updates() {
        let mut next = props();
        next.src = AttrValue::from("/api/v4/users/bob/image?_=1");
        assert!(should_update(&props(), &next));

        let mut next = props();
        next.status = UserStatus::Offline;
        assert!(should_update(&props(), &next));

        let mut next = props();
        next.is_busy = true;
        assert!(should_update(&props(), &next));
    }

    #[test]
    fn test_each_offset_updates() {
        let mutations: [fn(&mut ForwardedProps); 4] = [
            |f| f.arrow_offset_left = Some(1.0),
            |f| f.arrow_offset_top = Some(1.0),
            |f| f.position_left = None,
            |f| f.position_top = Some(0.0),
        ];

        for mutate in mutations {
            let mut next = props();
            mutate(&mut next.forwarded);
            assert!(should_update(&props(), &next));
        }
    }
}
