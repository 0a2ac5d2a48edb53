pub mod best_move;
pub mod play;
