/// Chess domain types.
pub mod chess;
/// The legality of moves.
pub mod rules;
/// A game of chess in progress.
pub mod game;
