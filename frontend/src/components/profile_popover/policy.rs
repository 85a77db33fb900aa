//! Who gets a call button, what it says, and when activating it does
//! anything.

use parlor_shared::{ClientConfig, UserStatus};

use crate::stores::ClientContext;
use crate::stores::preferences::PreReleaseFeature;

/// The three switches that must all be on for calling to exist at all.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CallGates {
    /// Server config `EnableWebrtc`
    pub webrtc_enabled: bool,
    /// Browser can capture audio/video
    pub media_capture: bool,
    /// Viewer opted into the WebRTC preview
    pub preview_enabled: bool,
}

impl CallGates {
    pub fn from_client(client: &ClientContext) -> Self {
        Self {
            webrtc_enabled: client.config().enable_webrtc(),
            media_capture: client.media_capture_available,
            preview_enabled: client.is_feature_enabled(PreReleaseFeature::WebrtcPreview),
        }
    }

    pub fn all_open(&self) -> bool {
        self.webrtc_enabled && self.media_capture && self.preview_enabled
    }
}

/// A viewer that is not known yet never matches the subject.
fn is_viewer(subject_id: &str, viewer_id: Option<&str>) -> bool {
    viewer_id == Some(subject_id)
}

pub fn call_affordance_visible(gates: &CallGates, subject_id: &str, viewer_id: Option<&str>) -> bool {
    gates.all_open() && !is_viewer(subject_id, viewer_id)
}

pub fn email_visible(
    config: &ClientConfig,
    viewer_privileged: bool,
    subject_id: &str,
    viewer_id: Option<&str>,
) -> bool {
    config.show_email_address() || viewer_privileged || is_viewer(subject_id, viewer_id)
}

/// Display state of the call control.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CallAffordance {
    Available,
    Busy,
    Offline,
}

impl CallAffordance {
    /// Busy wins over offline.
    pub fn select(status: UserStatus, is_busy: bool) -> Self {
        if !status.is_offline() && !is_busy {
            CallAffordance::Available
        } else if is_busy {
            CallAffordance::Busy
        } else {
            CallAffordance::Offline
        }
    }

    pub fn message_id(&self) -> &'static str {
        match self {
            CallAffordance::Available => "user_profile.webrtc.call",
            CallAffordance::Busy => "user_profile.webrtc.unavailable",
            CallAffordance::Offline => "user_profile.webrtc.offline",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CallAffordance::Available => "Start Video Call",
            CallAffordance::Busy => "New call unavailable until your existing call ends",
            CallAffordance::Offline => "The user is offline",
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, CallAffordance::Available)
    }
}

/// Side effects available to the call control.
#[cfg_attr(test, mockall::automock)]
pub trait CallDispatcher {
    fn is_busy(&self) -> bool;
    fn close_side_panel(&self);
    fn begin_call(&self, peer_id: &str, outgoing: bool);
}

/// Start an outgoing call to `subject_id` unless the subject is offline or
/// the viewer is already in a call. Returns whether anything was dispatched.
///
/// The control is already inert in both refused cases, so refusal is silent.
pub fn initiate_call(status: UserStatus, subject_id: &str, dispatcher: &impl CallDispatcher) -> bool {
    if status.is_offline() || dispatcher.is_busy() {
        tracing::debug!(peer_id = subject_id, status = status.as_str(), "call not started");
        return false;
    }

    dispatcher.close_side_panel();
    dispatcher.begin_call(subject_id, true);
    tracing::info!(peer_id = subject_id, "starting video call");
    true
}
