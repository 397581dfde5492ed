use super::*;

mod endgame;
mod kiwipete;
mod middle_game;
mod starting_position;
