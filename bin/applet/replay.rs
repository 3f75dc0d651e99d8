use crate::io::Io;
use anyhow::{Context, Error as Anyhow};
use clap::Parser;
use lib::chess::{Board, Color, Move};
use lib::game::Game;
use std::io::{empty, stdout};
use tracing::{info, instrument};

/// Replay a sequence of moves and print the resulting position.
#[derive(Debug, Parser)]
#[clap(disable_help_flag = true, disable_version_flag = true)]
pub struct Replay {
    /// Render pieces as figurines rather than letters.
    #[clap(long)]
    figurine: bool,

    /// Start from this piece placement in FEN instead of the initial position.
    #[clap(long)]
    board: Option<Board>,

    /// Black moves first.
    #[clap(long)]
    black: bool,

    /// The moves to replay, e.g. `e2e4`.
    moves: Vec<Move>,
}

impl Replay {
    fn replay(&self) -> Result<Game, Anyhow> {
        let turn = if self.black { Color::Black } else { Color::White };
        let mut game = Game::new(self.board.unwrap_or_default(), turn);

        for (ply, &m) in self.moves.iter().enumerate() {
            game.execute(m)
                .with_context(|| format!("failed to replay ply #{}", ply + 1))?;
        }

        Ok(game)
    }

    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        let game = self.replay()?;
        info!(plies = self.moves.len(), turn = %game.turn());

        let mut io = Io::new(stdout(), empty());
        if self.figurine {
            io.send(format_args!("{:#}", game.board()))?;
        } else {
            io.send(game.board())?;
        }

        io.send(format_args!("{} to move", game.turn()))?;
        io.flush()?;
        Ok(())
    }
}
