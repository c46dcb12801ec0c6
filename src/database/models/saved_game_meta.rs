use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// One-to-one bookmark describing a saved snapshot of a game. The id is the
/// game's own id (shared primary key), so exactly one meta row can exist per
/// game and it goes away with the game.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SavedGameMeta {
    pub id: Uuid,
    pub name: String,
    pub saved_at: DateTime<Utc>,
    pub hole: i32,
}

/// Unlike the other entities the client supplies the id, and no field is
/// defaulted: all four are required.
#[derive(Debug, Deserialize)]
pub struct CreateSavedGameMeta {
    pub id: Uuid,
    pub name: String,
    pub saved_at: DateTime<Utc>,
    pub hole: i32,
}

#[derive(Debug, Default, Deserialize)]
pub struct SavedGameMetaPatch {
    pub name: Option<String>,
    pub saved_at: Option<DateTime<Utc>>,
    pub hole: Option<i32>,
}

impl SavedGameMetaPatch {
    pub fn apply(&self, meta: &mut SavedGameMeta) {
        if let Some(v) = &self.name {
            meta.name = v.clone();
        }
        if let Some(v) = self.saved_at {
            meta.saved_at = v;
        }
        if let Some(v) = self.hole {
            meta.hole = v;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_four_fields_are_required() {
        let id = Uuid::new_v4();
        let full = format!(
            r#"{{"id":"{}","name":"Front nine","saved_at":"2025-06-01T14:30:00Z","hole":9}}"#,
            id
        );
        let create: CreateSavedGameMeta = serde_json::from_str(&full).unwrap();
        assert_eq!(create.id, id);
        assert_eq!(create.hole, 9);

        let missing_hole = format!(
            r#"{{"id":"{}","name":"Front nine","saved_at":"2025-06-01T14:30:00Z"}}"#,
            id
        );
        assert!(serde_json::from_str::<CreateSavedGameMeta>(&missing_hole).is_err());
    }

    #[test]
    fn patch_is_partial() {
        let mut meta = SavedGameMeta {
            id: Uuid::new_v4(),
            name: "Front nine".to_string(),
            saved_at: Utc::now(),
            hole: 9,
        };
        let patch: SavedGameMetaPatch = serde_json::from_str(r#"{"hole": 12}"#).unwrap();
        patch.apply(&mut meta);
        assert_eq!(meta.hole, 12);
        assert_eq!(meta.name, "Front nine");
    }
}
