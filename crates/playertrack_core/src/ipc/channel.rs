//! Channel descriptors and typed request/response payloads.

use crate::ipc::gate::{IpcError, IpcResult};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::sync::Arc;

/// Player identity as seen by other processes: name plus home world id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerNameWorld {
    pub name: String,
    pub world_id: u32,
}

impl PlayerNameWorld {
    pub fn new(name: impl Into<String>, world_id: u32) -> Self {
        Self {
            name: name.into(),
            world_id,
        }
    }
}

/// Joined form used by consumers that expect a single string.
impl Display for PlayerNameWorld {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{}", self.name, self.world_id)
    }
}

/// Unique name/world history for one requested player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameWorldHistory {
    pub player: PlayerNameWorld,
    pub history: Vec<PlayerNameWorld>,
}

/// Request payload carried by a channel call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "payload", rename_all = "snake_case")]
pub enum ChannelRequest {
    ApiVersion,
    CurrentNameWorld(PlayerNameWorld),
    Notes(PlayerNameWorld),
    NameWorldHistories(Vec<PlayerNameWorld>),
}

/// Response payload returned by a channel call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "payload", rename_all = "snake_case")]
pub enum ChannelResponse {
    ApiVersion(i32),
    CurrentNameWorld(PlayerNameWorld),
    Notes(String),
    NameWorldHistories(Vec<NameWorldHistory>),
}

/// Data source queried by the exposed channels.
pub trait PlayerTrackApi: Send + Sync {
    fn api_version(&self) -> i32;
    fn get_player_current_name_world(&self, player: &PlayerNameWorld) -> PlayerNameWorld;
    fn get_player_notes(&self, player: &PlayerNameWorld) -> String;
    fn get_unique_player_name_world_histories(
        &self,
        players: &[PlayerNameWorld],
    ) -> Vec<NameWorldHistory>;
}

/// Callable registered on a gate for one channel label.
pub type ChannelHandler = Arc<dyn Fn(ChannelRequest) -> IpcResult<ChannelResponse> + Send + Sync>;

/// Every channel exposed by the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    ApiVersion,
    CurrentNameWorld,
    Notes,
    NameWorldHistories,
}

impl Channel {
    /// Registration order used at startup.
    pub const ALL: [Channel; 4] = [
        Channel::ApiVersion,
        Channel::CurrentNameWorld,
        Channel::Notes,
        Channel::NameWorldHistories,
    ];

    /// Stable label other processes use to reach this channel.
    pub fn label(self) -> &'static str {
        match self {
            Self::ApiVersion => "PlayerTrack.APIVersion",
            Self::CurrentNameWorld => "PlayerTrack.GetPlayerCurrentNameWorld",
            Self::Notes => "PlayerTrack.GetPlayerNotes",
            Self::NameWorldHistories => "PlayerTrack.GetUniquePlayerNameWorldHistories",
        }
    }

    /// Builds the gate handler that routes this channel to `api`.
    pub fn handler(self, api: Arc<dyn PlayerTrackApi>) -> ChannelHandler {
        Arc::new(move |request: ChannelRequest| self.dispatch(api.as_ref(), request))
    }

    fn dispatch(
        self,
        api: &dyn PlayerTrackApi,
        request: ChannelRequest,
    ) -> IpcResult<ChannelResponse> {
        match (self, request) {
            (Self::ApiVersion, ChannelRequest::ApiVersion) => {
                Ok(ChannelResponse::ApiVersion(api.api_version()))
            }
            (Self::CurrentNameWorld, ChannelRequest::CurrentNameWorld(player)) => Ok(
                ChannelResponse::CurrentNameWorld(api.get_player_current_name_world(&player)),
            ),
            (Self::Notes, ChannelRequest::Notes(player)) => {
                Ok(ChannelResponse::Notes(api.get_player_notes(&player)))
            }
            (Self::NameWorldHistories, ChannelRequest::NameWorldHistories(players)) => {
                Ok(ChannelResponse::NameWorldHistories(
                    api.get_unique_player_name_world_histories(&players),
                ))
            }
            (channel, _) => Err(IpcError::RequestMismatch(channel.label().to_string())),
        }
    }
}
