use axum::{extract::State, Json};

use super::commit;
use crate::dto::{
    ClaimLoginBonusQuery, Committed, LoginBonusClaimResponse, LoginBonusStatusResponse,
};
use crate::engine::login_bonus;
use crate::error::AppResult;
use crate::extract::AppQuery;
use crate::notifications::Notification;
use crate::AppState;

/// Reports a pending bonus without granting it.
pub async fn check_login_bonus(
    State(state): State<AppState>,
) -> AppResult<Json<LoginBonusStatusResponse>> {
    let game = state.game.lock().await;
    let xp = login_bonus::check_login_bonus(&game.player, state.clock.today());

    Ok(Json(LoginBonusStatusResponse {
        due: xp.is_some(),
        xp,
        streak: game.player.streak,
    }))
}

/// The client's acknowledgment of the bonus; only now is the XP committed.
/// `?xp=` carries the amount the player was shown.
pub async fn claim_login_bonus(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<ClaimLoginBonusQuery>,
) -> AppResult<Json<Committed<LoginBonusClaimResponse>>> {
    let mut game = state.game.lock().await;
    let grant = login_bonus::grant_login_bonus(&game.player, state.clock.today(), query.xp)?;

    let mut next = (*game).clone();
    next.player = grant.player.clone();
    let warning = commit(&state, &mut game, next).await;
    drop(game);

    tracing::info!(
        xp = grant.amount,
        level = grant.player.level,
        streak = grant.player.streak,
        "Login bonus granted"
    );
    state
        .notifications
        .push(Notification::LoginBonus { xp: grant.amount })
        .await;
    if grant.gain.leveled_up() {
        state
            .notifications
            .push(Notification::LevelUp {
                level: grant.player.level,
            })
            .await;
    }

    Ok(Json(Committed {
        data: LoginBonusClaimResponse {
            xp_granted: grant.amount,
            leveled_up: grant.gain.leveled_up(),
            player: grant.player,
        },
        warning,
    }))
}
