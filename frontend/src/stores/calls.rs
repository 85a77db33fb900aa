// One-on-one call session state

use parlor_shared::CallSession;

#[derive(Clone, Debug, PartialEq)]
pub struct CallRequest {
    pub peer_id: String,
    pub outgoing: bool,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CallStore {
    pub active: Option<CallSession>,
}

impl CallStore {
    pub fn is_busy(&self) -> bool {
        self.active.is_some()
    }

    /// Next state after a call request, or `None` when a call is already up.
    pub fn begin(&self, request: &CallRequest) -> Option<CallStore> {
        if self.is_busy() {
            return None;
        }
        Some(CallStore {
            active: Some(CallSession::start(request.peer_id.clone(), request.outgoing)),
        })
    }

    pub fn end(&self) -> CallStore {
        CallStore::default()
    }
}
