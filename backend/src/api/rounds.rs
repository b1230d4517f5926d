use axum::extract::{Query, State};
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use std::sync::Arc;

fn error_response(
    status: axum::http::StatusCode,
    message: &str,
) -> (
    axum::http::StatusCode,
    axum::response::Json<common::ErrorResponse>,
) {
    (
        status,
        axum::Json(common::ErrorResponse {
            error: message.to_owned(),
        }),
    )
}

#[tracing::instrument(skip(state, _key, body))]
pub async fn collect(
    State(state): State<Arc<super::ApiState>>,
    _key: crate::ApiKey,
    body: axum::body::Bytes,
) -> Result<
    (
        axum::http::StatusCode,
        axum::response::Json<common::CollectResponse>,
    ),
    (
        axum::http::StatusCode,
        axum::response::Json<common::ErrorResponse>,
    ),
> {
    // A present-but-minimal JSON body is fine, a missing body is not.
    if body.is_empty() {
        return Err(error_response(
            axum::http::StatusCode::BAD_REQUEST,
            "No data provided",
        ));
    }

    let payload: common::RoundPayload = match serde_json::from_slice(&body) {
        Ok(payload) => payload,
        Err(e) => {
            tracing::error!("Parsing round payload: {:?}", e);
            return Err(error_response(
                axum::http::StatusCode::BAD_REQUEST,
                "Invalid JSON",
            ));
        }
    };

    let bundle = ingest::round::assemble(&payload);
    let round_id = bundle.header.id.clone();

    tracing::info!(
        "Round {:?}: {} players, {} kills, {} buys",
        round_id,
        bundle.players.len(),
        bundle.kills.len(),
        bundle.buys.len()
    );

    let round = crate::models::Round {
        id: bundle.header.id.clone(),
        map_name: bundle.header.map_name.clone(),
        winner: bundle.header.winner.clone(),
        duration: bundle.header.duration,
        timestamp: chrono::Utc::now().naive_utc(),
    };

    let players: Vec<crate::models::AddRoundPlayer> = bundle
        .players
        .into_iter()
        .map(|player| crate::models::AddRoundPlayer {
            round_id: round_id.clone(),
            steam_id: player.steam_id,
            role_start: player.role_start,
            role_end: player.role_end,
            karma_diff: player.karma_diff,
            points_diff: player.points_diff,
        })
        .collect();

    let kills: Vec<crate::models::AddKill> = bundle
        .kills
        .into_iter()
        .map(|kill| crate::models::AddKill {
            round_id: round_id.clone(),
            attacker_steamid: kill.attacker_steamid,
            attacker_role: kill.attacker_role,
            victim_steamid: kill.victim_steamid,
            victim_role: kill.victim_role,
            weapon: kill.weapon,
            headshot: kill.headshot,
        })
        .collect();

    let buys: Vec<crate::models::AddRoundBuy> = bundle
        .buys
        .into_iter()
        .map(|buy| crate::models::AddRoundBuy {
            round_id: round_id.clone(),
            steam_id: buy.steam_id,
            role: buy.role,
            item: buy.item,
        })
        .collect();

    let mut db_con = crate::db_connection(&state.config.database_url).await;

    let result = db_con
        .build_transaction()
        .run(|conn| {
            Box::pin(async move {
                diesel::dsl::insert_into(crate::schema::rounds::dsl::rounds)
                    .values(&round)
                    .execute(conn)
                    .await?;

                if !players.is_empty() {
                    diesel::dsl::insert_into(crate::schema::round_players::dsl::round_players)
                        .values(&players)
                        .execute(conn)
                        .await?;
                }

                if !kills.is_empty() {
                    diesel::dsl::insert_into(crate::schema::kills::dsl::kills)
                        .values(&kills)
                        .execute(conn)
                        .await?;
                }

                if !buys.is_empty() {
                    diesel::dsl::insert_into(crate::schema::round_buys::dsl::round_buys)
                        .values(&buys)
                        .execute(conn)
                        .await?;
                }

                Ok::<_, diesel::result::Error>(())
            })
        })
        .await;

    match result {
        Ok(()) => Ok((
            axum::http::StatusCode::CREATED,
            axum::Json(common::CollectResponse {
                message: "Stats collected successfully".to_owned(),
                round_id,
            }),
        )),
        Err(diesel::result::Error::DatabaseError(
            diesel::result::DatabaseErrorKind::UniqueViolation,
            _,
        )) => {
            tracing::error!("Round {:?} was already submitted", round_id);
            Err(error_response(
                axum::http::StatusCode::CONFLICT,
                "Round already exists",
            ))
        }
        Err(e) => {
            tracing::error!("Saving round: {:?}", e);
            Err(error_response(
                axum::http::StatusCode::INTERNAL_SERVER_ERROR,
                "Error saving stats",
            ))
        }
    }
}

#[derive(Debug, serde::Deserialize)]
pub struct StatsQuery {
    #[serde(default = "default_limit")]
    pub limit: i64,
    #[serde(default)]
    pub offset: i64,
}

fn default_limit() -> i64 {
    20
}

#[tracing::instrument(skip(state))]
pub async fn stats(
    State(state): State<Arc<super::ApiState>>,
    Query(query): Query<StatsQuery>,
) -> Result<axum::response::Json<Vec<common::RoundStats>>, axum::http::StatusCode> {
    let mut db_con = crate::db_connection(&state.config.database_url).await;

    let rounds_query = crate::schema::rounds::dsl::rounds
        .order(crate::schema::rounds::dsl::timestamp.desc())
        .offset(query.offset)
        .limit(query.limit)
        .select(crate::models::Round::as_select());
    let rounds: Vec<crate::models::Round> = match rounds_query.load(&mut db_con).await {
        Ok(rounds) => rounds,
        Err(e) => {
            tracing::error!("Querying rounds: {:?}", e);
            return Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    let round_ids: Vec<String> = rounds.iter().map(|round| round.id.clone()).collect();

    let players: Vec<crate::models::RoundPlayer> =
        match crate::schema::round_players::dsl::round_players
            .filter(crate::schema::round_players::dsl::round_id.eq_any(&round_ids))
            .select(crate::models::RoundPlayer::as_select())
            .load(&mut db_con)
            .await
        {
            Ok(players) => players,
            Err(e) => {
                tracing::error!("Querying round players: {:?}", e);
                return Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR);
            }
        };

    let kills: Vec<crate::models::Kill> = match crate::schema::kills::dsl::kills
        .filter(crate::schema::kills::dsl::round_id.eq_any(&round_ids))
        .select(crate::models::Kill::as_select())
        .load(&mut db_con)
        .await
    {
        Ok(kills) => kills,
        Err(e) => {
            tracing::error!("Querying kills: {:?}", e);
            return Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    let buys: Vec<crate::models::RoundBuy> = match crate::schema::round_buys::dsl::round_buys
        .filter(crate::schema::round_buys::dsl::round_id.eq_any(&round_ids))
        .select(crate::models::RoundBuy::as_select())
        .load(&mut db_con)
        .await
    {
        Ok(buys) => buys,
        Err(e) => {
            tracing::error!("Querying round buys: {:?}", e);
            return Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    let mut players_by_round = std::collections::HashMap::<String, Vec<_>>::new();
    for player in players {
        players_by_round
            .entry(player.round_id.clone())
            .or_default()
            .push(common::RoundPlayerStats {
                steam_id: player.steam_id,
                role_start: player.role_start,
                role_end: player.role_end,
                karma_diff: player.karma_diff,
                points_diff: player.points_diff,
            });
    }

    let mut kills_by_round = std::collections::HashMap::<String, Vec<_>>::new();
    for kill in kills {
        kills_by_round
            .entry(kill.round_id.clone())
            .or_default()
            .push(common::KillStats {
                attacker_steamid: kill.attacker_steamid,
                attacker_role: kill.attacker_role,
                victim_steamid: kill.victim_steamid,
                victim_role: kill.victim_role,
                weapon: kill.weapon,
                headshot: kill.headshot,
            });
    }

    let mut buys_by_round = std::collections::HashMap::<String, Vec<_>>::new();
    for buy in buys {
        buys_by_round
            .entry(buy.round_id.clone())
            .or_default()
            .push(common::BuyStats {
                steam_id: buy.steam_id,
                role: buy.role,
                item: buy.item,
            });
    }

    let response: Vec<common::RoundStats> = rounds
        .into_iter()
        .map(|round| common::RoundStats {
            kills: kills_by_round.remove(&round.id).unwrap_or_default(),
            players: players_by_round.remove(&round.id).unwrap_or_default(),
            buys: buys_by_round.remove(&round.id).unwrap_or_default(),
            id: round.id,
            map_name: round.map_name,
            winner: round.winner,
            duration: round.duration,
            timestamp: round.timestamp,
        })
        .collect();

    Ok(axum::Json(response))
}
