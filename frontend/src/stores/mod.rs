//! Client-side stores, shared with every component through [`ClientContext`].

pub mod calls;
pub mod media;
pub mod preferences;
pub mod session;
pub mod side_panel;

use std::rc::Rc;

use parlor_shared::{ClientConfig, User};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::profile_popover::CallDispatcher;
use crate::services;
use calls::{CallRequest, CallStore};
use preferences::{PreReleaseFeature, PreReleaseFeatures};
use side_panel::SidePanel;

/// Everything a view needs to know about the running client, plus the
/// actions it may dispatch.
#[derive(Clone, Debug, PartialEq)]
pub struct ClientContext {
    pub viewer: Option<User>,
    pub config: Rc<ClientConfig>,
    pub features: PreReleaseFeatures,
    pub calls: CallStore,
    pub side_panel: Option<SidePanel>,
    pub media_capture_available: bool,
    pub begin_call: Callback<CallRequest>,
    pub end_call: Callback<()>,
    pub open_side_panel: Callback<SidePanel>,
    pub close_side_panel: Callback<()>,
    pub set_feature: Callback<(PreReleaseFeature, bool)>,
}

impl Default for ClientContext {
    fn default() -> Self {
        Self {
            viewer: None,
            config: Rc::new(ClientConfig::default()),
            features: PreReleaseFeatures::default(),
            calls: CallStore::default(),
            side_panel: None,
            media_capture_available: false,
            begin_call: Callback::noop(),
            end_call: Callback::noop(),
            open_side_panel: Callback::noop(),
            close_side_panel: Callback::noop(),
            set_feature: Callback::noop(),
        }
    }
}

impl ClientContext {
    pub fn viewer(&self) -> Option<&User> {
        self.viewer.as_ref()
    }

    pub fn viewer_id(&self) -> Option<&str> {
        self.viewer.as_ref().map(|v| v.id.as_str())
    }

    pub fn is_privileged(&self) -> bool {
        self.viewer.as_ref().is_some_and(User::is_system_admin)
    }

    pub fn is_call_busy(&self) -> bool {
        self.calls.is_busy()
    }

    pub fn is_feature_enabled(&self, feature: PreReleaseFeature) -> bool {
        self.features.is_enabled(feature)
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn config_value(&self, key: &str) -> Option<&str> {
        self.config.get(key)
    }
}

impl CallDispatcher for ClientContext {
    fn is_busy(&self) -> bool {
        self.is_call_busy()
    }

    fn close_side_panel(&self) {
        self.close_side_panel.emit(());
    }

    fn begin_call(&self, peer_id: &str, outgoing: bool) {
        self.begin_call.emit(CallRequest {
            peer_id: peer_id.to_string(),
            outgoing,
        });
    }
}

#[derive(Properties, PartialEq)]
pub struct ClientProviderProps {
    pub children: Html,
}

#[function_component(ClientProvider)]
pub fn client_provider(props: &ClientProviderProps) -> Html {
    let viewer = use_state(session::restore_viewer);
    let config = use_state(|| Rc::new(ClientConfig::default()));
    let features = use_state(PreReleaseFeatures::load);
    let calls = use_state(CallStore::default);
    let side_panel = use_state(|| None::<SidePanel>);
    let media_capture_available = use_state(media::has_user_media);

    // Load server config and refresh the viewer on mount
    {
        let viewer = viewer.clone();
        let config = config.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match services::config::get_client_config().await {
                    Ok(loaded) => config.set(Rc::new(loaded)),
                    Err(e) => tracing::warn!(error = %e, "failed to load client config"),
                }
            });
            spawn_local(async move {
                match services::users::get_me().await {
                    Ok(me) => {
                        session::persist_viewer(&me);
                        viewer.set(Some(me));
                    }
                    Err(e) => tracing::warn!(error = %e, "failed to load current user"),
                }
            });
            || ()
        });
    }

    let begin_call = {
        let calls = calls.clone();
        Callback::from(move |request: CallRequest| match calls.begin(&request) {
            Some(next) => {
                tracing::info!(peer_id = %request.peer_id, outgoing = request.outgoing, "call started");
                calls.set(next);
            }
            None => tracing::warn!(peer_id = %request.peer_id, "call requested while another call is active"),
        })
    };

    let end_call = {
        let calls = calls.clone();
        Callback::from(move |_| {
            tracing::info!("call ended");
            calls.set(calls.end());
        })
    };

    let open_side_panel = {
        let side_panel = side_panel.clone();
        Callback::from(move |view: SidePanel| side_panel.set(Some(view)))
    };

    let close_side_panel = {
        let side_panel = side_panel.clone();
        Callback::from(move |_| side_panel.set(None))
    };

    let set_feature = {
        let features = features.clone();
        Callback::from(move |(feature, enabled): (PreReleaseFeature, bool)| {
            let next = (*features).clone().with(feature, enabled);
            next.save();
            features.set(next);
        })
    };

    let context = ClientContext {
        viewer: (*viewer).clone(),
        config: (*config).clone(),
        features: (*features).clone(),
        calls: (*calls).clone(),
        side_panel: *side_panel,
        media_capture_available: *media_capture_available,
        begin_call,
        end_call,
        open_side_panel,
        close_side_panel,
        set_feature,
    };

    html! {
        <ContextProvider<ClientContext> {context}>
            {props.children.clone()}
        </ContextProvider<ClientContext>>
    }
}

/// Hook to access the client context
#[hook]
pub fn use_client() -> ClientContext {
    use_context::<ClientContext>().expect("ClientContext not found")
}

#[cfg(test)]
mod tests {
    use super::*;
    use parlor_shared::CallSession;

    fn viewer(roles: &str) -> User {
        User {
            id: "me".to_string(),
            username: "me".to_string(),
            first_name: String::new(),
            last_name: String::new(),
            nickname: String::new(),
            email: "me@example.com".to_string(),
            position: None,
            roles: roles.to_string(),
            last_picture_update: 0,
            update_at: None,
        }
    }

    #[test]
    fn test_queries_without_viewer() {
        let ctx = ClientContext::default();

        assert_eq!(ctx.viewer_id(), None);
        assert!(!ctx.is_privileged());
        assert!(!ctx.is_call_busy());
        assert_eq!(ctx.config_value(ClientConfig::ENABLE_WEBRTC), None);
    }

    #[test]
    fn test_queries_with_viewer_and_call() {
        let ctx = ClientContext {
            viewer: Some(viewer("system_user system_admin")),
            config: Rc::new(ClientConfig::default().with(ClientConfig::ENABLE_WEBRTC, "true")),
            calls: CallStore {
                active: Some(CallSession::start("bob", true)),
            },
            ..ClientContext::default()
        };

        assert_eq!(ctx.viewer_id(), Some("me"));
        assert!(ctx.is_privileged());
        assert!(ctx.is_call_busy());
        assert!(CallDispatcher::is_busy(&ctx));
        assert!(ctx.config().enable_webrtc());
    }
}
