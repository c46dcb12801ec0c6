use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::database::manager::DatabaseError;

/// One player's result on one hole.
/// At most one row per (game_id, player_number, hole_number).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PlayerHoleScore {
    pub id: Uuid,
    pub game_id: Uuid,
    pub player_number: i32,
    pub hole_number: i32,
    pub player_score: i32,
    pub net_score: i32,
    pub gross_score: i32,
    pub player_money: Decimal,
    pub wolf_score: i32,
    pub prox_score: i32,
}

#[derive(Debug, Deserialize)]
pub struct CreatePlayerHoleScore {
    pub game_id: Uuid,
    pub player_number: i32,
    pub hole_number: i32,
    #[serde(default)]
    pub player_score: i32,
    #[serde(default)]
    pub net_score: i32,
    #[serde(default)]
    pub gross_score: i32,
    #[serde(default = "default_money_zero")]
    pub player_money: Decimal,
    #[serde(default)]
    pub wolf_score: i32,
    #[serde(default)]
    pub prox_score: i32,
}

fn default_money_zero() -> Decimal {
    Decimal::new(0, 2)
}

/// Both position keys are checked at write time
pub fn validate_position(player_number: i32, hole_number: i32) -> Result<(), DatabaseError> {
    if !(1..=9).contains(&player_number) {
        return Err(DatabaseError::ConstraintViolation {
            constraint: "player_hole_scores_player_number_check".to_string(),
        });
    }
    if !(1..=18).contains(&hole_number) {
        return Err(DatabaseError::ConstraintViolation {
            constraint: "player_hole_scores_hole_number_check".to_string(),
        });
    }
    Ok(())
}

#[derive(Debug, Default, Deserialize)]
pub struct PlayerHoleScorePatch {
    pub player_score: Option<i32>,
    pub net_score: Option<i32>,
    pub gross_score: Option<i32>,
    pub player_money: Option<Decimal>,
    pub wolf_score: Option<i32>,
    pub prox_score: Option<i32>,
}

impl PlayerHoleScorePatch {
    pub fn apply(&self, score: &mut PlayerHoleScore) {
        if let Some(v) = self.player_score {
            score.player_score = v;
        }
        if let Some(v) = self.net_score {
            score.net_score = v;
        }
        if let Some(v) = self.gross_score {
            score.gross_score = v;
        }
        if let Some(v) = self.player_money {
            score.player_money = v;
        }
        if let Some(v) = self.wolf_score {
            score.wolf_score = v;
        }
        if let Some(v) = self.prox_score {
            score.prox_score = v;
        }
    }
}
