use indexmap::IndexMap;

/// One player's merged view of a round, combining the start and end role
/// reports. Either side may be missing entirely if that report never
/// mentioned the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedPlayer {
    pub steam_id: String,
    pub role_start: Option<String>,
    pub role_end: Option<String>,
    pub karma_start: Option<i32>,
    pub karma_end: Option<i32>,
    pub points_start: Option<i32>,
    pub points_end: Option<i32>,
}

impl MergedPlayer {
    fn new(steam_id: String) -> Self {
        Self {
            steam_id,
            role_start: None,
            role_end: None,
            karma_start: None,
            karma_end: None,
            points_start: None,
            points_end: None,
        }
    }

    pub fn karma_diff(&self) -> Option<i32> {
        metric_diff(self.karma_start, self.karma_end)
    }

    pub fn points_diff(&self) -> Option<i32> {
        metric_diff(self.points_start, self.points_end)
    }
}

/// `end - start`, but only when both sides were actually reported. A
/// one-sided value must never be treated as a zero baseline.
pub fn metric_diff(start: Option<i32>, end: Option<i32>) -> Option<i32> {
    match (start, end) {
        (Some(start), Some(end)) => Some(end - start),
        _ => None,
    }
}

/// Merges the two role reports into one record per steamid.
///
/// The start report seeds the map, the end report fills in end-side fields
/// and creates records for players that only showed up at round end (late
/// joins). Entries without a steamid are skipped, duplicates within one side
/// overwrite that side's fields.
pub fn merge_role_reports(
    start_roles: &[common::RoleEntry],
    end_roles: &[common::RoleEntry],
) -> IndexMap<String, MergedPlayer> {
    let mut merged = IndexMap::new();

    for entry in start_roles {
        let steam_id = match entry.player_steamid.as_deref().filter(|id| !id.is_empty()) {
            Some(id) => id.to_owned(),
            None => {
                tracing::debug!("Skipping start role entry without steamid: {:?}", entry);
                continue;
            }
        };

        let record = merged
            .entry(steam_id.clone())
            .or_insert_with(|| MergedPlayer::new(steam_id));
        record.role_start = entry.role.clone();
        record.karma_start = entry.karma;
        record.points_start = entry.points;
    }

    for entry in end_roles {
        let steam_id = match entry.player_steamid.as_deref().filter(|id| !id.is_empty()) {
            Some(id) => id.to_owned(),
            None => {
                tracing::debug!("Skipping end role entry without steamid: {:?}", entry);
                continue;
            }
        };

        let record = merged
            .entry(steam_id.clone())
            .or_insert_with(|| MergedPlayer::new(steam_id));
        record.role_end = entry.role.clone();
        record.karma_end = entry.karma;
        record.points_end = entry.points;
    }

    merged
}
