use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// One match in progress. `updated_at` refreshes on every mutation.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Game {
    pub id: Uuid,
    pub game_name: String,
    pub hole: i32,
    pub last_saved: DateTime<Utc>,
    pub dollars: Decimal,
    pub total_dollars: Decimal,
    pub is_continuing_game: bool,
    pub pressed_button: i32,
    pub wolf: i32,
    pub wolf_birdie_points: i32,
    pub wolf_eagle_points: i32,
    pub wolf_non_eagle_points: i32,
    pub non_wolf_birdie_points: i32,
    pub prox: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create payload. The serde defaults below are the single source of truth
/// for per-field defaults on create.
#[derive(Debug, Deserialize)]
pub struct CreateGame {
    #[serde(default = "default_game_name")]
    pub game_name: String,
    #[serde(default)]
    pub hole: i32,
    #[serde(default = "default_dollars")]
    pub dollars: Decimal,
    #[serde(default = "default_money_zero")]
    pub total_dollars: Decimal,
    #[serde(default = "default_true")]
    pub is_continuing_game: bool,
    #[serde(default)]
    pub pressed_button: i32,
    #[serde(default)]
    pub wolf: i32,
    #[serde(default)]
    pub wolf_birdie_points: i32,
    #[serde(default)]
    pub wolf_eagle_points: i32,
    #[serde(default)]
    pub wolf_non_eagle_points: i32,
    #[serde(default)]
    pub non_wolf_birdie_points: i32,
    #[serde(default)]
    pub prox: i32,
}

fn default_game_name() -> String {
    "New Game".to_string()
}

fn default_dollars() -> Decimal {
    Decimal::new(200, 2)
}

fn default_money_zero() -> Decimal {
    Decimal::new(0, 2)
}

fn default_true() -> bool {
    true
}

/// Partial update: only fields present in the payload overwrite stored values.
#[derive(Debug, Default, Deserialize)]
pub struct GamePatch {
    pub game_name: Option<String>,
    pub hole: Option<i32>,
    pub dollars: Option<Decimal>,
    pub total_dollars: Option<Decimal>,
    pub is_continuing_game: Option<bool>,
    pub pressed_button: Option<i32>,
    pub wolf: Option<i32>,
    pub wolf_birdie_points: Option<i32>,
    pub wolf_eagle_points: Option<i32>,
    pub wolf_non_eagle_points: Option<i32>,
    pub non_wolf_birdie_points: Option<i32>,
    pub prox: Option<i32>,
}

impl GamePatch {
    pub fn apply(&self, game: &mut Game) {
        if let Some(v) = &self.game_name {
            game.game_name = v.clone();
        }
        if let Some(v) = self.hole {
            game.hole = v;
        }
        if let Some(v) = self.dollars {
            game.dollars = v;
        }
        if let Some(v) = self.total_dollars {
            game.total_dollars = v;
        }
        if let Some(v) = self.is_continuing_game {
            game.is_continuing_game = v;
        }
        if let Some(v) = self.pressed_button {
            game.pressed_button = v;
        }
        if let Some(v) = self.wolf {
            game.wolf = v;
        }
        if let Some(v) = self.wolf_birdie_points {
            game.wolf_birdie_points = v;
        }
        if let Some(v) = self.wolf_eagle_points {
            game.wolf_eagle_points = v;
        }
        if let Some(v) = self.wolf_non_eagle_points {
            game.wolf_non_eagle_points = v;
        }
        if let Some(v) = self.non_wolf_birdie_points {
            game.non_wolf_birdie_points = v;
        }
        if let Some(v) = self.prox {
            game.prox = v;
        }
    }
}
