//! Cross-process call surface.
//!
//! This module exposes a read-only projection of tracked players through
//! named request/response channels. The transport is abstracted behind
//! `CallGate`; the data source behind `PlayerTrackApi`.

pub mod channel;
pub mod gate;
pub mod provider;

pub use channel::{
    Channel, ChannelHandler, ChannelRequest, ChannelResponse, NameWorldHistory, PlayerNameWorld,
    PlayerTrackApi,
};
pub use gate::{CallGate, InProcessCallGate, IpcError, IpcResult};
pub use provider::PlayerTrackProvider;
