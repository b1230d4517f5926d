#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundHeader {
    pub id: String,
    pub map_name: Option<String>,
    pub winner: Option<String>,
    pub duration: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerRoundRecord {
    pub steam_id: String,
    pub role_start: Option<String>,
    pub role_end: Option<String>,
    pub karma_diff: Option<i32>,
    pub points_diff: Option<i32>,
}

/// Everything one submission produces, packaged for a single atomic write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundBundle {
    pub header: RoundHeader,
    pub players: Vec<PlayerRoundRecord>,
    pub kills: Vec<crate::events::KillRecord>,
    pub buys: Vec<crate::events::BuyRecord>,
}

/// Builds the full round aggregate from one submission payload.
///
/// Total over any deserialized payload: absent lists are already empty at
/// this point and a minimal submission simply yields a round with no
/// children.
pub fn assemble(payload: &common::RoundPayload) -> RoundBundle {
    let header = RoundHeader {
        id: payload.round_id.clone().unwrap_or_default(),
        map_name: payload.map_name.clone(),
        winner: payload.winner.clone(),
        duration: payload.duration,
    };

    let merged = crate::reconcile::merge_role_reports(&payload.start_roles, &payload.end_roles);
    let players = merged
        .into_values()
        .map(|player| PlayerRoundRecord {
            karma_diff: player.karma_diff(),
            points_diff: player.points_diff(),
            steam_id: player.steam_id,
            role_start: player.role_start,
            role_end: player.role_end,
        })
        .collect();

    RoundBundle {
        header,
        players,
        kills: crate::events::normalize_kills(&payload.kills),
        buys: crate::events::normalize_buys(&payload.buys),
    }
}
