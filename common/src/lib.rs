//! Wire types shared between the collector backend and its clients.
//!
//! Everything the game server reports is optional on the wire; absent list
//! fields default to empty so the ingestion pipeline always sees a
//! well-formed (possibly empty) sequence.

/// One round submission as posted by the game server at round end.
#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub struct RoundPayload {
    #[serde(default)]
    pub round_id: Option<String>,
    #[serde(default)]
    pub map_name: Option<String>,
    #[serde(default)]
    pub winner: Option<String>,
    #[serde(default)]
    pub duration: Option<i32>,
    #[serde(default)]
    pub start_roles: Vec<RoleEntry>,
    #[serde(default)]
    pub end_roles: Vec<RoleEntry>,
    #[serde(default)]
    pub kills: Vec<KillEntry>,
    #[serde(default)]
    pub buys: Vec<BuyEntry>,
}

/// A single player's role/metric snapshot, reported once at round start and
/// once at round end.
#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub struct RoleEntry {
    #[serde(default)]
    pub player_steamid: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub karma: Option<i32>,
    #[serde(default)]
    pub points: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub struct KillEntry {
    #[serde(default)]
    pub attacker_steamid: Option<String>,
    #[serde(default)]
    pub attacker_role: Option<String>,
    #[serde(default)]
    pub victim_steamid: Option<String>,
    #[serde(default)]
    pub victim_role: Option<String>,
    #[serde(default)]
    pub weapon: Option<String>,
    #[serde(default)]
    pub headshot: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub struct BuyEntry {
    #[serde(default)]
    pub steam_id: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub item: Option<String>,
}

/// One stored round with its nested sub-records, as returned by the stats
/// listing.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RoundStats {
    pub id: String,
    pub map_name: Option<String>,
    pub winner: Option<String>,
    pub duration: Option<i32>,
    pub timestamp: chrono::NaiveDateTime,
    pub kills: Vec<KillStats>,
    pub players: Vec<RoundPlayerStats>,
    pub buys: Vec<BuyStats>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RoundPlayerStats {
    pub steam_id: String,
    pub role_start: Option<String>,
    pub role_end: Option<String>,
    pub karma_diff: Option<i32>,
    pub points_diff: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct KillStats {
    pub attacker_steamid: Option<String>,
    pub attacker_role: Option<String>,
    pub victim_steamid: Option<String>,
    pub victim_role: Option<String>,
    pub weapon: Option<String>,
    pub headshot: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BuyStats {
    pub steam_id: Option<String>,
    pub role: Option<String>,
    pub item: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CollectResponse {
    pub message: String,
    pub round_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct HealthResponse {
    pub status: String,
}
