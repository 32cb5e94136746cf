use std::fmt;

use serde::Deserialize;
use serde::Serialize;

/// Runtime-tunable bot settings, persisted as a whole record after every change.
///
/// Only the settings service writes this; everything else reads snapshots.
#[derive(Serialize, Deserialize, Default, Clone, Debug, PartialEq, Eq)]
pub struct BotSettings {
    /// The one channel normal commands are accepted in. `None` until `setchannel` runs.
    #[serde(default)]
    pub channel_id: Option<u64>,
    /// Role required for privileged commands. `None` means nobody is authorized.
    #[serde(default)]
    pub master_role_id: Option<u64>,
    #[serde(default)]
    pub song_limit: i64,
    #[serde(default)]
    pub votes_per_user: i64,
    /// Votes granted to members of the elevated (patron) tier.
    #[serde(default)]
    pub votes_per_patron: i64,
}

impl BotSettings {
    pub fn limit(&self, setting: LimitSetting) -> i64 {
        match setting {
            LimitSetting::SongLimit => self.song_limit,
            LimitSetting::VotesPerUser => self.votes_per_user,
            LimitSetting::VotesPerPatron => self.votes_per_patron,
        }
    }

    pub fn limit_mut(&mut self, setting: LimitSetting) -> &mut i64 {
        match setting {
            LimitSetting::SongLimit => &mut self.song_limit,
            LimitSetting::VotesPerUser => &mut self.votes_per_user,
            LimitSetting::VotesPerPatron => &mut self.votes_per_patron,
        }
    }
}

/// The integer settings that can be changed from chat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LimitSetting {
    SongLimit,
    VotesPerUser,
    VotesPerPatron,
}

impl LimitSetting {
    /// Human-readable name used in replies and logs.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::SongLimit => "Song limit",
            Self::VotesPerUser => "Vote count",
            Self::VotesPerPatron => "Patreon vote count",
        }
    }
}

impl fmt::Display for LimitSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A song in the voting catalog.
#[derive(Serialize, Deserialize, Default, Clone, Debug, PartialEq, Eq)]
pub struct Song {
    pub id: u32,
    pub title: String,
    pub artist: String,
}
