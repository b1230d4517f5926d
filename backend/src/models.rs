use diesel::prelude::*;

#[derive(Queryable, Selectable, Insertable, Debug)]
#[diesel(table_name = crate::schema::rounds)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Round {
    pub id: String,
    pub map_name: Option<String>,
    pub winner: Option<String>,
    pub duration: Option<i32>,
    pub timestamp: chrono::NaiveDateTime,
}

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::round_players)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct RoundPlayer {
    pub id: i32,
    pub round_id: String,
    pub steam_id: String,
    pub role_start: Option<String>,
    pub role_end: Option<String>,
    pub karma_diff: Option<i32>,
    pub points_diff: Option<i32>,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = crate::schema::round_players)]
pub struct AddRoundPlayer {
    pub round_id: String,
    pub steam_id: String,
    pub role_start: Option<String>,
    pub role_end: Option<String>,
    pub karma_diff: Option<i32>,
    pub points_diff: Option<i32>,
}

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::kills)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Kill {
    pub id: i32,
    pub round_id: String,
    pub attacker_steamid: Option<String>,
    pub attacker_role: Option<String>,
    pub victim_steamid: Option<String>,
    pub victim_role: Option<String>,
    pub weapon: Option<String>,
    pub headshot: bool,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = crate::schema::kills)]
pub struct AddKill {
    pub round_id: String,
    pub attacker_steamid: Option<String>,
    pub attacker_role: Option<String>,
    pub victim_steamid: Option<String>,
    pub victim_role: Option<String>,
    pub weapon: Option<String>,
    pub headshot: bool,
}

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::round_buys)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct RoundBuy {
    pub id: i32,
    pub round_id: String,
    pub steam_id: Option<String>,
    pub role: Option<String>,
    pub item: Option<String>,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = crate::schema::round_buys)]
pub struct AddRoundBuy {
    pub round_id: String,
    pub steam_id: Option<String>,
    pub role: Option<String>,
    pub item: Option<String>,
}
