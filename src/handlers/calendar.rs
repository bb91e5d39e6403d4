use axum::{extract::State, Json};
use chrono::{Datelike, NaiveDate};

use crate::dto::{DayQuestsResponse, MonthQuery};
use crate::engine::calendar::{self, CalendarMonth};
use crate::error::{AppError, AppResult};
use crate::extract::{AppPath, AppQuery};
use crate::AppState;

/// Quests completed on one calendar day.
pub async fn quests_on_date(
    State(state): State<AppState>,
    AppPath(date): AppPath<NaiveDate>,
) -> AppResult<Json<DayQuestsResponse>> {
    let game = state.game.lock().await;
    let quests = calendar::quests_completed_on(&game.quests, date, state.clock.offset())
        .into_iter()
        .cloned()
        .collect();

    Ok(Json(DayQuestsResponse { date, quests }))
}

/// Month grid; defaults to the current month.
pub async fn month(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<MonthQuery>,
) -> AppResult<Json<CalendarMonth>> {
    let today = state.clock.today();
    let year = query.year.unwrap_or_else(|| today.year());
    let month = query.month.unwrap_or_else(|| today.month());

    let game = state.game.lock().await;
    calendar::month_activity(&game.quests, year, month, state.clock.offset())
        .map(Json)
        .ok_or_else(|| AppError::Validation(format!("Invalid month: {year}-{month}")))
}
