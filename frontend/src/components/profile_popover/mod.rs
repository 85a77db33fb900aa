//! Profile popover: avatar, name, position, email and a video call button
//! for one user.

mod policy;
mod props;
mod rows;

pub use policy::{
    call_affordance_visible, email_visible, initiate_call, CallAffordance, CallDispatcher,
    CallGates,
};
pub use props::{should_update, ProfilePopoverProps};
pub use rows::{build_rows, PopoverRow, RowOptions};

use yew::prelude::*;
use yew::context::ContextHandle;

use crate::components::overlay::{OverlayTrigger, Placement, Popover, Tooltip};
use crate::constants::{VIDEO_ICON, WEBRTC_TIME_DELAY_MS};
use crate::stores::ClientContext;

pub enum ProfilePopoverMsg {
    ClientChanged(ClientContext),
    StartCall,
}

pub struct ProfilePopover {
    /// Captured when the popover is created and never refreshed.
    viewer_id: Option<String>,
    client: ClientContext,
    _client_handle: Option<ContextHandle<ClientContext>>,
}

impl Component for ProfilePopover {
    type Message = ProfilePopoverMsg;
    type Properties = ProfilePopoverProps;

    fn create(ctx: &Context<Self>) -> Self {
        let (client, handle) = match ctx
            .link()
            .context::<ClientContext>(ctx.link().callback(ProfilePopoverMsg::ClientChanged))
        {
            Some((client, handle)) => (client, Some(handle)),
            None => {
                tracing::warn!("profile popover mounted outside ClientProvider");
                (ClientContext::default(), None)
            }
        };

        Self {
            viewer_id: client.viewer_id().map(str::to_string),
            client,
            _client_handle: handle,
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        should_update(old_props, ctx.props())
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ProfilePopoverMsg::ClientChanged(client) => {
                let redraw = client != self.client;
                self.client = client;
                redraw
            }
            ProfilePopoverMsg::StartCall => {
                let props = ctx.props();
                initiate_call(props.status, &props.user.id, &self.client);
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let viewer_id = self.viewer_id.as_deref();

        let gates = CallGates::from_client(&self.client);
        let call = call_affordance_visible(&gates, &props.user.id, viewer_id)
            .then(|| CallAffordance::select(props.status, props.is_busy));
        let show_email = email_visible(
            self.client.config(),
            self.client.is_privileged(),
            &props.user.id,
            viewer_id,
        );

        let rows = build_rows(&props.user, &props.src, RowOptions { call, show_email });
        let title = AttrValue::from(format!("@{}", props.user.username));

        html! {
            <Popover
                id="user-profile-popover"
                title={Some(title)}
                forwarded={props.forwarded.clone()}
            >
                { for rows.iter().map(|row| self.view_row(ctx, row)) }
            </Popover>
        }
    }
}

impl ProfilePopover {
    fn view_row(&self, ctx: &Context<Self>, row: &PopoverRow) -> Html {
        match row {
            PopoverRow::Image { src, size } => html! {
                <img
                    key={row.key()}
                    class="user-popover__image"
                    src={src.clone()}
                    height={size.to_string()}
                    width={size.to_string()}
                />
            },
            PopoverRow::Text { key, title, text } => html! {
                <div key={*key} data-toggle="tooltip" title={title.clone()}>
                    <p class="text-nowrap">{text.clone()}</p>
                </div>
            },
            PopoverRow::Action(affordance) => self.view_call(ctx, *affordance),
            PopoverRow::Link { title, href, text } => html! {
                <div key={row.key()} data-toggle="tooltip" title={title.clone()}>
                    <a href={href.clone()} class="text-nowrap text-lowercase user-popover__email">
                        {text.clone()}
                    </a>
                </div>
            },
        }
    }

    fn view_call(&self, ctx: &Context<Self>, affordance: CallAffordance) -> Html {
        let is_online = !ctx.props().status.is_offline();
        let onclick = ctx.link().callback(|e: MouseEvent| {
            e.prevent_default();
            ProfilePopoverMsg::StartCall
        });

        let tooltip = html! {
            <Tooltip id="webrtcTooltip">
                <span data-message-id={affordance.message_id()}>{affordance.label()}</span>
            </Tooltip>
        };

        html! {
            <div class="webrtc__user-profile" key="makeCall">
                <a href="#" {onclick} disabled={!is_online}>
                    <OverlayTrigger delay_ms={WEBRTC_TIME_DELAY_MS} placement={Placement::Top} overlay={tooltip}>
                        <div
                            id="webrtc-btn"
                            class={classes!("webrtc__button", (!affordance.is_active()).then_some("offline"))}
                        >
                            <span>{Html::from_html_unchecked(AttrValue::from(VIDEO_ICON))}</span>
                        </div>
                    </OverlayTrigger>
                </a>
            </div>
        }
    }
}
