pub mod game;
pub mod game_hole_data;
pub mod game_player;
pub mod player_hole_score;
pub mod saved_game_meta;
pub mod user;
