use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::database::manager::DatabaseError;

/// Per-hole configuration and state within a game.
/// At most one row per (game_id, hole_number).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct GameHoleData {
    pub id: Uuid,
    pub game_id: Uuid,
    pub hole_number: i32,
    pub hole_dollars: Decimal,
    pub activated_dollars: Decimal,
    pub pressed_count: bool,
    pub pressed_pushed_toggle: bool,
    pub alone_pushed: bool,
    pub roll_pushed: bool,
    pub re_roll_pushed: bool,
    pub wolf_hole: i32,
    pub hole_handicap: i32,
    pub hole_par: i32,
    pub prox_array: bool,
}

/// Create payload: game_id and hole_number are required, everything else
/// defaults per the table below.
#[derive(Debug, Deserialize)]
pub struct CreateGameHoleData {
    pub game_id: Uuid,
    pub hole_number: i32,
    #[serde(default = "default_hole_dollars")]
    pub hole_dollars: Decimal,
    #[serde(default = "default_money_zero")]
    pub activated_dollars: Decimal,
    #[serde(default)]
    pub pressed_count: bool,
    #[serde(default)]
    pub pressed_pushed_toggle: bool,
    #[serde(default)]
    pub alone_pushed: bool,
    #[serde(default)]
    pub roll_pushed: bool,
    #[serde(default)]
    pub re_roll_pushed: bool,
    #[serde(default)]
    pub wolf_hole: i32,
    #[serde(default)]
    pub hole_handicap: i32,
    #[serde(default = "default_hole_par")]
    pub hole_par: i32,
    #[serde(default)]
    pub prox_array: bool,
}

fn default_hole_dollars() -> Decimal {
    Decimal::new(200, 2)
}

fn default_money_zero() -> Decimal {
    Decimal::new(0, 2)
}

fn default_hole_par() -> i32 {
    4
}

/// Hole numbers are checked at write time, 1..=18
pub fn validate_hole_number(hole_number: i32) -> Result<(), DatabaseError> {
    if !(1..=18).contains(&hole_number) {
        return Err(DatabaseError::ConstraintViolation {
            constraint: "game_hole_data_hole_number_check".to_string(),
        });
    }
    Ok(())
}

#[derive(Debug, Default, Deserialize)]
pub struct GameHoleDataPatch {
    pub hole_dollars: Option<Decimal>,
    pub activated_dollars: Option<Decimal>,
    pub pressed_count: Option<bool>,
    pub pressed_pushed_toggle: Option<bool>,
    pub alone_pushed: Option<bool>,
    pub roll_pushed: Option<bool>,
    pub re_roll_pushed: Option<bool>,
    pub wolf_hole: Option<i32>,
    pub hole_handicap: Option<i32>,
    pub hole_par: Option<i32>,
    pub prox_array: Option<bool>,
}

impl GameHoleDataPatch {
    pub fn apply(&self, data: &mut GameHoleData) {
        if let Some(v) = self.hole_dollars {
            data.hole_dollars = v;
        }
        if let Some(v) = self.activated_dollars {
            data.activated_dollars = v;
        }
        if let Some(v) = self.pressed_count {
            data.pressed_count = v;
        }
        if let Some(v) = self.pressed_pushed_toggle {
            data.pressed_pushed_toggle = v;
        }
        if let Some(v) = self.alone_pushed {
            data.alone_pushed = v;
        }
        if let Some(v) = self.roll_pushed {
            data.roll_pushed = v;
        }
        if let Some(v) = self.re_roll_pushed {
            data.re_roll_pushed = v;
        }
        if let Some(v) = self.wolf_hole {
            data.wolf_hole = v;
        }
        if let Some(v) = self.hole_handicap {
            data.hole_handicap = v;
        }
        if let Some(v) = self.hole_par {
            data.hole_par = v;
        }
        if let Some(v) = self.prox_array {
            data.prox_array = v;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_payload_gets_documented_defaults() {
        let json = format!(r#"{{"game_id":"{}","hole_number":7}}"#, Uuid::new_v4());
        let create: CreateGameHoleData = serde_json::from_str(&json).unwrap();
        assert_eq!(create.hole_number, 7);
        assert_eq!(create.hole_dollars, Decimal::new(200, 2));
        assert_eq!(create.activated_dollars, Decimal::new(0, 2));
        assert_eq!(create.hole_par, 4);
        assert_eq!(create.hole_handicap, 0);
        assert_eq!(create.wolf_hole, 0);
        assert!(!create.pressed_count);
        assert!(!create.pressed_pushed_toggle);
        assert!(!create.alone_pushed);
        assert!(!create.roll_pushed);
        assert!(!create.re_roll_pushed);
        assert!(!create.prox_array);
    }

    #[test]
    fn missing_required_fields_are_rejected() {
        // hole_number carries no default, so its absence is a parse error
        let json = format!(r#"{{"game_id":"{}"}}"#, Uuid::new_v4());
        assert!(serde_json::from_str::<CreateGameHoleData>(&json).is_err());
        assert!(serde_json::from_str::<CreateGameHoleData>(r#"{"hole_number":3}"#).is_err());
    }

    #[test]
    fn hole_number_range_is_enforced() {
        assert!(validate_hole_number(1).is_ok());
        assert!(validate_hole_number(18).is_ok());
        assert!(validate_hole_number(0).is_err());
        assert!(validate_hole_number(19).is_err());
    }
}
