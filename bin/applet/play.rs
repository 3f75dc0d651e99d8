use crate::io::Io;
use anyhow::Error as Anyhow;
use clap::Parser;
use lib::{chess::Move, game::Game};
use std::io::{self, stdin, stdout, Read, Write};
use tracing::{debug, info, instrument};

/// Play a game of chess on the terminal, both sides taking turns at the keyboard.
#[derive(Debug, Default, Parser)]
#[clap(disable_help_flag = true, disable_version_flag = true)]
pub struct Play {
    /// Render pieces as figurines rather than letters.
    #[clap(long)]
    figurine: bool,
}

impl Play {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        let mut io = Io::new(stdout(), stdin());
        let game = self.run(&mut io)?;
        info!(turn = %game.turn(), "game over");
        Ok(())
    }

    fn run<W: Write, R: Read>(&self, io: &mut Io<W, R>) -> io::Result<Game> {
        let mut game = Game::default();

        io.send("Welcome to Terminal Chess")?;
        io.send("Enter moves like e2e4 or e2 e4. Type 'quit' to exit.")?;

        loop {
            if self.figurine {
                io.send(format_args!("\n{:#}", game.board()))?;
            } else {
                io.send(format_args!("\n{}", game.board()))?;
            }

            io.prompt(format_args!("{} to move > ", game.turn()))?;

            let line = match io.recv()? {
                None => break,
                Some(line) => line,
            };

            let input = line.trim();
            match input {
                "quit" | "exit" => break,
                "" => continue,
                _ => {}
            }

            let m: Move = match input.parse() {
                Ok(m) => m,
                Err(e) => {
                    debug!(%input, "{}", e);
                    io.send("Invalid input.")?;
                    continue;
                }
            };

            match game.execute(m) {
                Ok(()) => info!(%m, turn = %game.turn()),
                Err(e) => {
                    debug!("{}", e);
                    io.send("Illegal move.")?;
                }
            }
        }

        io.send("Goodbye!")?;
        io.flush()?;
        Ok(game)
    }
}
