pub mod admin;
pub mod auth;
pub mod game_hole_data;
pub mod game_players;
pub mod games;
pub mod player_hole_scores;
pub mod saved_game_meta;
