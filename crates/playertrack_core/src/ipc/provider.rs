//! Startup/shutdown wiring for the exposed channels.
//!
//! # Invariants
//! - Each channel is registered and unregistered independently.
//! - A failing channel is logged and skipped; it never aborts the others and
//!   never surfaces to the caller of `register`/`dispose`.

use crate::ipc::channel::{Channel, PlayerTrackApi};
use crate::ipc::gate::CallGate;
use log::{error, trace};
use std::sync::Arc;

/// Owner of the channel registrations made on a gate.
pub struct PlayerTrackProvider {
    registered: Vec<Channel>,
}

impl PlayerTrackProvider {
    /// Registers every channel in `Channel::ALL` on `gate`.
    pub fn register(gate: &mut dyn CallGate, api: Arc<dyn PlayerTrackApi>) -> Self {
        trace!("event=ipc_register module=ipc status=start");
        let mut registered = Vec::with_capacity(Channel::ALL.len());

        for channel in Channel::ALL {
            match gate.register_func(channel.label(), channel.handler(Arc::clone(&api))) {
                Ok(()) => registered.push(channel),
                Err(err) => error!(
                    "event=ipc_register module=ipc status=error channel={} error={err}",
                    channel.label()
                ),
            }
        }

        trace!(
            "event=ipc_register module=ipc status=ok registered={}",
            registered.len()
        );
        Self { registered }
    }

    /// Channels whose registration succeeded and are still active.
    pub fn registered_channels(&self) -> &[Channel] {
        &self.registered
    }

    /// Unregisters every channel this provider registered.
    pub fn dispose(&mut self, gate: &mut dyn CallGate) {
        trace!("event=ipc_dispose module=ipc status=start");
        for channel in self.registered.drain(..) {
            if let Err(err) = gate.unregister_func(channel.label()) {
                error!(
                    "event=ipc_dispose module=ipc status=error channel={} error={err}",
                    channel.label()
                );
            }
        }
    }
}
