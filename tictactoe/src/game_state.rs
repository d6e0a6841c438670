use std::fmt::{self, Display, Formatter};

use engine::Player;
use serde::{Deserialize, Serialize};

pub const BOARD_SIZE: usize = 3;
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;
pub const PASS_ACTION: usize = CELL_COUNT;
pub const ACTION_COUNT: usize = CELL_COUNT + 1;

const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// A 3x3 board. Each cell holds `+1` for player one, `-1` for player two or `0` when empty.
///
/// Cells are indexed row major from the top left.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    pub board: [i8; CELL_COUNT],
}

impl GameState {
    pub fn initial() -> Self {
        Self {
            board: [0; CELL_COUNT],
        }
    }

    pub fn from_board(board: [i8; CELL_COUNT]) -> Self {
        Self { board }
    }

    pub fn place(&self, cell: usize, player: Player) -> Self {
        debug_assert!(self.board[cell] == 0, "cell {} is occupied", cell);

        let mut board = self.board;
        board[cell] = player.sign();

        Self { board }
    }

    /// Multiplies every cell by `sign`.
    pub fn scaled(&self, sign: i8) -> Self {
        let mut board = self.board;
        for cell in board.iter_mut() {
            *cell *= sign;
        }

        Self { board }
    }

    pub fn is_full(&self) -> bool {
        self.board.iter().all(|c| *c != 0)
    }

    pub fn number_of_pieces(&self) -> usize {
        self.board.iter().filter(|c| **c != 0).count()
    }

    pub fn has_line(&self, sign: i8) -> bool {
        LINES
            .iter()
            .any(|line| line.iter().all(|cell| self.board[*cell] == sign))
    }

    /// Base 3 encoding of the board, one digit per cell.
    pub fn key(&self) -> u32 {
        self.board
            .iter()
            .fold(0, |key, cell| key * 3 + (*cell + 1) as u32)
    }
}

impl Display for GameState {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE {
            let cells: Vec<&str> = (0..BOARD_SIZE)
                .map(|col| match self.board[row * BOARD_SIZE + col] {
                    1 => "X",
                    -1 => "O",
                    _ => " ",
                })
                .collect();

            writeln!(f, " {} ", cells.join(" | "))?;

            if row != BOARD_SIZE - 1 {
                writeln!(f, "---+---+---")?;
            }
        }

        Ok(())
    }
}
