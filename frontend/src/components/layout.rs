use gloo::timers::callback::Interval;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::stores::side_panel::SidePanel;
use crate::stores::use_client;
use parlor_shared::ClientConfig;

const DEFAULT_SITE_NAME: &str = "Parlor";

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Html,
}

/// Chat shell: header, channel content and the right-hand side panel
#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    let client = use_client();
    let current_route = use_route::<Route>().unwrap_or(Route::Members);

    let site_name = client
        .config_value(ClientConfig::SITE_NAME)
        .filter(|name| !name.is_empty())
        .unwrap_or(DEFAULT_SITE_NAME)
        .to_string();

    let toggle_panel = |view: SidePanel| {
        let open = client.open_side_panel.clone();
        let close = client.close_side_panel.clone();
        let is_open = client.side_panel == Some(view);
        Callback::from(move |_: MouseEvent| {
            if is_open {
                close.emit(());
            } else {
                open.emit(view);
            }
        })
    };

    html! {
        <div class="min-h-screen bg-gray-900 flex flex-col">
            // ===== HEADER =====
            <header class="bg-gray-800 border-b border-gray-700 h-14 flex-shrink-0 z-50">
                <div class="h-full flex items-center justify-between px-4">
                    <div class="flex items-center space-x-6">
                        <div class="flex items-center space-x-2">
                            <div class="w-8 h-8 bg-blue-500 rounded flex items-center justify-center">
                                <span class="text-white font-bold text-lg">
                                    {site_name.chars().next().unwrap_or('P')}
                                </span>
                            </div>
                            <span class="text-white font-semibold text-lg">{site_name.clone()}</span>
                        </div>

                        <nav class="hidden lg:flex items-center space-x-1">
                            <NavTab route={Route::Members} label="Members" current={current_route.clone()} />
                            <NavTab route={Route::Settings} label="Advanced Settings" current={current_route.clone()} />
                        </nav>
                    </div>

                    <div class="flex items-center space-x-4">
                        <ActiveCallBanner />

                        <button
                            onclick={toggle_panel(SidePanel::RecentMentions)}
                            class="text-gray-300 hover:text-white px-2 py-1 rounded hover:bg-gray-700 text-sm"
                        >
                            {"@"}
                        </button>
                        <button
                            onclick={toggle_panel(SidePanel::Flagged)}
                            class="text-gray-300 hover:text-white px-2 py-1 rounded hover:bg-gray-700 text-sm"
                        >
                            {"⚑"}
                        </button>

                        <div class="w-8 h-8 bg-blue-500 rounded-full flex items-center justify-center">
                            <span class="text-white text-sm font-medium">
                                {client.viewer().map(|u| u.username.chars().next().unwrap_or('U')).unwrap_or('U')}
                            </span>
                        </div>
                    </div>
                </div>
            </header>

            // ===== MAIN CONTENT AREA =====
            <div class="flex flex-1 overflow-hidden">
                <main class="flex-1 overflow-auto bg-gray-900 relative">
                    { props.children.clone() }
                </main>

                if let Some(view) = client.side_panel {
                    <aside id="sidebar-right" class="w-80 bg-gray-800 border-l border-gray-700 flex-shrink-0">
                        <div class="flex items-center justify-between px-4 py-3 border-b border-gray-700">
                            <h3 class="text-white font-medium">{view.title()}</h3>
                            <button
                                onclick={client.close_side_panel.reform(|_: MouseEvent| ())}
                                class="text-gray-400 hover:text-white"
                            >
                                {"×"}
                            </button>
                        </div>
                        <p class="px-4 py-6 text-gray-400 text-sm">{view.empty_text()}</p>
                    </aside>
                }
            </div>
        </div>
    }
}

// ===== HELPER COMPONENTS =====

#[derive(Properties, PartialEq)]
struct NavTabProps {
    route: Route,
    label: &'static str,
    current: Route,
}

#[function_component(NavTab)]
fn nav_tab(props: &NavTabProps) -> Html {
    let is_active = props.route == props.current;
    let classes = if is_active {
        "px-3 py-2 text-sm font-medium text-white border-b-2 border-blue-500"
    } else {
        "px-3 py-2 text-sm font-medium text-gray-300 hover:text-white border-b-2 border-transparent hover:border-gray-500"
    };

    html! {
        <Link<Route> to={props.route.clone()} classes={classes}>
            {props.label}
        </Link<Route>>
    }
}

/// Elapsed call time as `m:ss`, or `h:mm:ss` past the hour
fn format_call_duration(seconds: i64) -> String {
    let seconds = seconds.max(0);
    let (hours, minutes, secs) = (seconds / 3600, (seconds % 3600) / 60, seconds % 60);
    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, secs)
    } else {
        format!("{}:{:02}", minutes, secs)
    }
}

#[function_component(ActiveCallBanner)]
fn active_call_banner() -> Html {
    let client = use_client();
    let redraw = use_force_update();

    // Tick once a second while a call is up
    {
        let in_call = client.calls.is_busy();
        use_effect_with(in_call, move |in_call| {
            let interval = in_call.then(move || Interval::new(1_000, move || redraw.force_update()));
            move || drop(interval)
        });
    }

    let Some(session) = client.calls.active.clone() else {
        return html! {};
    };

    let elapsed = (chrono::Utc::now() - session.started_at).num_seconds();
    let direction = if session.outgoing { "Calling" } else { "In call with" };

    html! {
        <div class="flex items-center space-x-2 bg-green-600/20 border border-green-500/50 rounded px-2 py-1">
            <div class="w-2 h-2 bg-green-400 rounded-full animate-pulse"></div>
            <span class="text-green-300 text-sm">
                {format!("{} {} · {}", direction, session.peer_id, format_call_duration(elapsed))}
            </span>
            <button
                onclick={client.end_call.reform(|_: MouseEvent| ())}
                class="bg-red-600 hover:bg-red-700 text-white px-2 py-0.5 rounded text-xs"
                title="End Call"
            >
                {"End Call"}
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_call_duration() {
        assert_eq!(format_call_duration(0), "0:00");
        assert_eq!(format_call_duration(75), "1:15");
        assert_eq!(format_call_duration(3_661), "1:01:01");
        assert_eq!(format_call_duration(-5), "0:00");
    }
}
