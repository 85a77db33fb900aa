// Members Page - channel member list with profile popovers

use std::collections::HashMap;

use parlor_shared::{User, UserStatus};
use yew::prelude::*;
use yew_hooks::{use_async_with_options, UseAsyncOptions};

use crate::components::overlay::ForwardedProps;
use crate::components::profile_popover::ProfilePopover;
use crate::constants::DEFAULT_CHANNEL;
use crate::services::{users, ApiResult};
use crate::stores::use_client;

#[derive(Clone, Debug, PartialEq)]
pub struct Member {
    pub user: User,
    pub status: UserStatus,
}

/// Pair users with their presence; users without a reported status are offline.
pub fn join_statuses(users: Vec<User>, statuses: &HashMap<String, UserStatus>) -> Vec<Member> {
    users
        .into_iter()
        .map(|user| Member {
            status: statuses.get(&user.id).copied().unwrap_or_default(),
            user,
        })
        .collect()
}

async fn load_members() -> ApiResult<Vec<Member>> {
    let members = users::get_channel_members(DEFAULT_CHANNEL).await?;
    let statuses = users::get_statuses().await.unwrap_or_else(|e| {
        tracing::warn!(error = %e, "failed to load statuses");
        HashMap::new()
    });
    Ok(join_statuses(members, &statuses))
}

fn status_color(status: UserStatus) -> &'static str {
    match status {
        UserStatus::Online => "bg-green-400",
        UserStatus::Away => "bg-yellow-400",
        UserStatus::DoNotDisturb => "bg-red-500",
        UserStatus::Offline => "bg-gray-500",
    }
}

#[derive(Clone, PartialEq)]
struct OpenPopover {
    user_id: String,
    forwarded: ForwardedProps,
}

#[function_component(MembersPage)]
pub fn members_page() -> Html {
    let client = use_client();
    let members = use_async_with_options(load_members(), UseAsyncOptions::enable_auto());
    let open = use_state(|| None::<OpenPopover>);

    let on_member_click = |user_id: String| {
        let open = open.clone();
        Callback::from(move |e: MouseEvent| {
            let same = (*open).as_ref().is_some_and(|o| o.user_id == user_id);
            if same {
                open.set(None);
            } else {
                open.set(Some(OpenPopover {
                    user_id: user_id.clone(),
                    forwarded: ForwardedProps::anchored_below(e.page_x() as f64, e.page_y() as f64),
                }));
            }
        })
    };

    let list = match (&members.data, &members.error) {
        (Some(members), _) if members.is_empty() => html! {
            <p class="text-gray-400 text-sm">{"No one else is here yet."}</p>
        },
        (Some(members), _) => html! {
            <ul class="divide-y divide-gray-700">
                { for members.iter().map(|member| html! {
                    <li key={member.user.id.clone()} class="flex items-center py-2">
                        <button
                            onclick={on_member_click(member.user.id.clone())}
                            class="flex items-center space-x-3 text-left hover:bg-gray-800 rounded px-2 py-1"
                        >
                            <span class={classes!("w-2", "h-2", "rounded-full", status_color(member.status))}></span>
                            <span class="text-white">{format!("@{}", member.user.username)}</span>
                            <span class="text-gray-400 text-sm">{member.user.full_name()}</span>
                        </button>
                    </li>
                }) }
            </ul>
        },
        (None, Some(error)) => html! {
            <div class="bg-red-50 border border-red-200 text-red-700 px-4 py-3 rounded">
                {format!("Could not load members: {}", error)}
            </div>
        },
        (None, None) => html! {
            <p class="text-gray-400 text-sm">{"Loading members..."}</p>
        },
    };

    let popover = (*open).as_ref().and_then(|o| {
        let member = members
            .data
            .as_ref()?
            .iter()
            .find(|m| m.user.id == o.user_id)?;
        Some(html! {
            <ProfilePopover
                src={users::profile_image_url(&member.user)}
                user={member.user.clone()}
                status={member.status}
                is_busy={client.is_call_busy()}
                forwarded={o.forwarded.clone()}
            />
        })
    });

    html! {
        <div class="p-6">
            <h1 class="text-2xl font-bold text-white mb-4">{"Town Square"}</h1>
            {list}
            {popover.unwrap_or_default()}
        </div>
    }
}
