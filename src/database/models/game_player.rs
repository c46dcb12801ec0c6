use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::database::manager::DatabaseError;

/// A participant in a game. At most one row per (game_id, player_number).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct GamePlayer {
    pub id: Uuid,
    pub game_id: Uuid,
    pub player_number: i32,
    pub player_name: String,
    pub is_activated: bool,
    pub handicap: i32,
    pub wolf_birdie_points: i32,
    pub wolf_eagle_points: i32,
    pub wolf_non_eagle_points: i32,
    pub non_wolf_birdie_points: i32,
}

#[derive(Debug, Deserialize)]
pub struct CreateGamePlayer {
    pub game_id: Uuid,
    pub player_number: i32,
    #[serde(default)]
    pub player_name: String,
    #[serde(default = "default_true")]
    pub is_activated: bool,
    #[serde(default)]
    pub handicap: i32,
    #[serde(default)]
    pub wolf_birdie_points: i32,
    #[serde(default)]
    pub wolf_eagle_points: i32,
    #[serde(default)]
    pub wolf_non_eagle_points: i32,
    #[serde(default)]
    pub non_wolf_birdie_points: i32,
}

fn default_true() -> bool {
    true
}

/// Player numbers are checked at write time, 1..=9
pub fn validate_player_number(player_number: i32) -> Result<(), DatabaseError> {
    if !(1..=9).contains(&player_number) {
        return Err(DatabaseError::ConstraintViolation {
            constraint: "game_players_player_number_check".to_string(),
        });
    }
    Ok(())
}

#[derive(Debug, Default, Deserialize)]
pub struct GamePlayerPatch {
    pub player_name: Option<String>,
    pub is_activated: Option<bool>,
    pub handicap: Option<i32>,
    pub wolf_birdie_points: Option<i32>,
    pub wolf_eagle_points: Option<i32>,
    pub wolf_non_eagle_points: Option<i32>,
    pub non_wolf_birdie_points: Option<i32>,
}

impl GamePlayerPatch {
    pub fn apply(&self, player: &mut GamePlayer) {
        if let Some(v) = &self.player_name {
            player.player_name = v.clone();
        }
        if let Some(v) = self.is_activated {
            player.is_activated = v;
        }
        if let Some(v) = self.handicap {
            player.handicap = v;
        }
        if let Some(v) = self.wolf_birdie_points {
            player.wolf_birdie_points = v;
        }
        if let Some(v) = self.wolf_eagle_points {
            player.wolf_eagle_points = v;
        }
        if let Some(v) = self.wolf_non_eagle_points {
            player.wolf_non_eagle_points = v;
        }
        if let Some(v) = self.non_wolf_birdie_points {
            player.non_wolf_birdie_points = v;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_defaults() {
        let json = format!(r#"{{"game_id":"{}","player_number":3}}"#, Uuid::new_v4());
        let create: CreateGamePlayer = serde_json::from_str(&json).unwrap();
        assert_eq!(create.player_name, "");
        assert!(create.is_activated);
        assert_eq!(create.handicap, 0);
        assert_eq!(create.wolf_birdie_points, 0);
    }

    #[test]
    fn player_number_range_is_enforced() {
        assert!(validate_player_number(1).is_ok());
        assert!(validate_player_number(9).is_ok());
        assert!(validate_player_number(0).is_err());
        assert!(validate_player_number(10).is_err());
    }

    #[test]
    fn patch_leaves_absent_fields_alone() {
        let mut player = GamePlayer {
            id: Uuid::new_v4(),
            game_id: Uuid::new_v4(),
            player_number: 2,
            player_name: "Ada".to_string(),
            is_activated: true,
            handicap: 12,
            wolf_birdie_points: 1,
            wolf_eagle_points: 0,
            wolf_non_eagle_points: 0,
            non_wolf_birdie_points: 0,
        };
        let patch: GamePlayerPatch = serde_json::from_str(r#"{"handicap": 10}"#).unwrap();
        patch.apply(&mut player);
        assert_eq!(player.handicap, 10);
        assert_eq!(player.player_name, "Ada");
        assert!(player.is_activated);
    }
}
