/// A single elimination, 1:1 with the submitted entry. A missing attacker
/// denotes a world/environmental kill, a missing victim is kept as-is
/// rather than dropping the event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KillRecord {
    pub attacker_steamid: Option<String>,
    pub attacker_role: Option<String>,
    pub victim_steamid: Option<String>,
    pub victim_role: Option<String>,
    pub weapon: Option<String>,
    pub headshot: bool,
}

/// A single equipment purchase, 1:1 with the submitted entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuyRecord {
    pub steam_id: Option<String>,
    pub role: Option<String>,
    pub item: Option<String>,
}

pub fn normalize_kills(entries: &[common::KillEntry]) -> Vec<KillRecord> {
    entries
        .iter()
        .map(|entry| KillRecord {
            attacker_steamid: entry.attacker_steamid.clone(),
            attacker_role: entry.attacker_role.clone(),
            victim_steamid: entry.victim_steamid.clone(),
            victim_role: entry.victim_role.clone(),
            weapon: entry.weapon.clone(),
            headshot: entry.headshot.unwrap_or(false),
        })
        .collect()
}

pub fn normalize_buys(entries: &[common::BuyEntry]) -> Vec<BuyRecord> {
    entries
        .iter()
        .map(|entry| BuyRecord {
            steam_id: entry.steam_id.clone(),
            role: entry.role.clone(),
            item: entry.item.clone(),
        })
        .collect()
}
