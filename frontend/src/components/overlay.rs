// Popover / tooltip presentation primitives

use gloo::timers::callback::Timeout;
use yew::prelude::*;

/// Bootstrap's default popover max-width.
const POPOVER_WIDTH: f64 = 276.0;
const ARROW_HEIGHT: f64 = 11.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Placement {
    Top,
    #[default]
    Bottom,
    Left,
    Right,
}

impl Placement {
    pub fn as_str(&self) -> &'static str {
        match self {
            Placement::Top => "top",
            Placement::Bottom => "bottom",
            Placement::Left => "left",
            Placement::Right => "right",
        }
    }
}

/// Layout hints an overlay trigger hands to the popover it positions.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ForwardedProps {
    pub placement: Placement,
    pub position_left: Option<f64>,
    pub position_top: Option<f64>,
    pub arrow_offset_left: Option<f64>,
    pub arrow_offset_top: Option<f64>,
}

impl ForwardedProps {
    /// Place a popover under the point `(x, y)`, centered where the page
    /// edge allows, with the arrow still pointing at `x`.
    pub fn anchored_below(x: f64, y: f64) -> Self {
        let left = (x - POPOVER_WIDTH / 2.0).max(0.0);
        Self {
            placement: Placement::Bottom,
            position_left: Some(left),
            position_top: Some(y + ARROW_HEIGHT),
            arrow_offset_left: Some(x - left),
            arrow_offset_top: None,
        }
    }

    /// The numeric offsets, in a fixed order. Placement is not included.
    pub fn offsets(&self) -> [Option<f64>; 4] {
        [
            self.arrow_offset_left,
            self.arrow_offset_top,
            self.position_left,
            self.position_top,
        ]
    }

    fn popover_style(&self) -> String {
        let mut style = String::from("display: block;");
        if let Some(left) = self.position_left {
            style.push_str(&format!(" left: {}px;", left));
        }
        if let Some(top) = self.position_top {
            style.push_str(&format!(" top: {}px;", top));
        }
        style
    }

    fn arrow_style(&self) -> String {
        let mut style = String::new();
        if let Some(left) = self.arrow_offset_left {
            style.push_str(&format!("left: {}px;", left));
        }
        if let Some(top) = self.arrow_offset_top {
            style.push_str(&format!("top: {}px;", top));
        }
        style
    }
}

#[derive(Properties, PartialEq)]
pub struct PopoverProps {
    pub id: AttrValue,
    #[prop_or_default]
    pub title: Option<AttrValue>,
    #[prop_or_default]
    pub forwarded: ForwardedProps,
    pub children: Html,
}

#[function_component(Popover)]
pub fn popover(props: &PopoverProps) -> Html {
    let placement = props.forwarded.placement.as_str();

    html! {
        <div
            id={props.id.clone()}
            role="tooltip"
            class={classes!("popover", placement)}
            style={props.forwarded.popover_style()}
        >
            <div class="arrow" style={props.forwarded.arrow_style()}></div>
            if let Some(title) = props.title.clone() {
                <h3 class="popover-title">{title}</h3>
            }
            <div class="popover-content">
                {props.children.clone()}
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TooltipProps {
    pub id: AttrValue,
    pub children: Html,
}

#[function_component(Tooltip)]
pub fn tooltip(props: &TooltipProps) -> Html {
    html! {
        <div id={props.id.clone()} role="tooltip" class="tooltip in">
            <div class="tooltip-arrow"></div>
            <div class="tooltip-inner">{props.children.clone()}</div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct OverlayTriggerProps {
    #[prop_or_default]
    pub delay_ms: u32,
    #[prop_or(Placement::Top)]
    pub placement: Placement,
    pub overlay: Html,
    pub children: Html,
}

/// Shows `overlay` after the pointer rests on the children for `delay_ms`.
#[function_component(OverlayTrigger)]
pub fn overlay_trigger(props: &OverlayTriggerProps) -> Html {
    let shown = use_state(|| false);
    let pending = use_mut_ref(|| None::<Timeout>);

    let onmouseenter = {
        let shown = shown.clone();
        let pending = pending.clone();
        let delay_ms = props.delay_ms;
        Callback::from(move |_: MouseEvent| {
            let shown = shown.clone();
            let timeout = Timeout::new(delay_ms, move || shown.set(true));
            // Replacing the handle cancels any earlier pending show
            *pending.borrow_mut() = Some(timeout);
        })
    };

    let onmouseleave = {
        let shown = shown.clone();
        let pending = pending.clone();
        Callback::from(move |_: MouseEvent| {
            pending.borrow_mut().take();
            shown.set(false);
        })
    };

    html! {
        <span class="overlay-trigger" {onmouseenter} {onmouseleave}>
            {props.children.clone()}
            if *shown {
                <div class={classes!("overlay", props.placement.as_str())}>
                    {props.overlay.clone()}
                </div>
            }
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchored_below_centers_on_point() {
        let props = ForwardedProps::anchored_below(500.0, 40.0);

        assert_eq!(props.placement, Placement::Bottom);
        assert_eq!(props.position_left, Some(362.0));
        assert_eq!(props.position_top, Some(51.0));
        assert_eq!(props.arrow_offset_left, Some(138.0));
        assert_eq!(props.arrow_offset_top, None);
    }

    #[test]
    fn test_anchored_below_clamps_to_page_edge() {
        let props = ForwardedProps::anchored_below(50.0, 0.0);

        assert_eq!(props.position_left, Some(0.0));
        // Arrow still points at the click
        assert_eq!(props.arrow_offset_left, Some(50.0));
    }

    #[test]
    fn test_styles_skip_missing_offsets() {
        let props = ForwardedProps::default();
        assert_eq!(props.popover_style(), "display: block;");
        assert_eq!(props.arrow_style(), "");

        let props = ForwardedProps::anchored_below(500.0, 40.0);
        assert_eq!(props.popover_style(), "display: block; left: 362px; top: 51px;");
        assert_eq!(props.arrow_style(), "left: 138px;");
    }
}
