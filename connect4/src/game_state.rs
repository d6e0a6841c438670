use std::fmt::{self, Display, Formatter};

use engine::Player;
use serde::{Deserialize, Serialize};

use crate::{column_base, has_connected_4, map_board_to_arr, mirror, COLS, ROWS, TOP_ROW_MASK};

/// Two bitboards, one per player, with 7 bits per column starting in the bottom left.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    pub p1_piece_board: u64,
    pub p2_piece_board: u64,
}

impl GameState {
    pub fn initial() -> Self {
        GameState {
            p1_piece_board: 0,
            p2_piece_board: 0,
        }
    }

    fn all_pieces(&self) -> u64 {
        self.p1_piece_board | self.p2_piece_board
    }

    pub fn board_for(&self, player: Player) -> u64 {
        match player {
            Player::One => self.p1_piece_board,
            Player::Two => self.p2_piece_board,
        }
    }

    /// Drops a piece for `player` into the 0 based `column`.
    pub fn drop_piece(&self, column: usize, player: Player) -> Self {
        let all_pieces = self.all_pieces();
        let dropped_piece = (all_pieces + column_base(column)) & !all_pieces;

        debug_assert!(
            dropped_piece & TOP_ROW_MASK << 1 == 0,
            "column {} is full",
            column
        );

        match player {
            Player::One => Self {
                p1_piece_board: self.p1_piece_board | dropped_piece,
                ..*self
            },
            Player::Two => Self {
                p2_piece_board: self.p2_piece_board | dropped_piece,
                ..*self
            },
        }
    }

    pub fn get_valid_columns(&self) -> Vec<bool> {
        let all_pieces = self.all_pieces();

        (0..COLS)
            .map(|column| {
                let column_mask_row_six = column_base(column) << (ROWS - 1);
                column_mask_row_six & all_pieces == 0
            })
            .collect()
    }

    pub fn is_full(&self) -> bool {
        self.all_pieces() & TOP_ROW_MASK == TOP_ROW_MASK
    }

    pub fn has_connected_4(&self, player: Player) -> bool {
        has_connected_4(self.board_for(player))
    }

    pub fn number_of_pieces(&self) -> usize {
        self.all_pieces().count_ones() as usize
    }

    pub fn swapped(&self) -> Self {
        Self {
            p1_piece_board: self.p2_piece_board,
            p2_piece_board: self.p1_piece_board,
        }
    }

    pub fn mirrored(&self) -> Self {
        Self {
            p1_piece_board: mirror(self.p1_piece_board),
            p2_piece_board: mirror(self.p2_piece_board),
        }
    }

    /// Both bitboards packed side by side.
    pub fn key(&self) -> u128 {
        ((self.p1_piece_board as u128) << 64) | self.p2_piece_board as u128
    }
}

impl Display for GameState {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let p1_board = map_board_to_arr(self.p1_piece_board);
        let p2_board = map_board_to_arr(self.p2_piece_board);

        writeln!(f)?;
        writeln!(f, "   +---+---+---+---+---+---+---+")?;

        for y in 0..ROWS {
            for x in 0..COLS {
                if x == 0 {
                    write!(f, "   |")?;
                }
                let idx = y * COLS + x;
                let p = if p1_board[idx] {
                    "X"
                } else if p2_board[idx] {
                    "O"
                } else {
                    " "
                };
                write!(f, " {} |", p)?;
            }
            writeln!(f)?;
            if y != ROWS - 1 {
                writeln!(f, "   |---+---+---+---+---+---+---|")?;
            }
        }

        writeln!(f, "   +---+---+---+---+---+---+---+")?;
        writeln!(f, "     0   1   2   3   4   5   6  ")?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drop_alternating(columns: &[usize]) -> GameState {
        let mut state = GameState::initial();
        let mut player = Player::One;

        for column in columns {
            state = state.drop_piece(*column, player);
            player = player.opponent();
        }

        state
    }

    fn fill_five_rows() -> GameState {
        let columns: Vec<usize> = (0..COLS).flat_map(|c| std::iter::repeat(c).take(5)).collect();
        drop_alternating(&columns)
    }

    #[test]
    fn test_new_state_is_correct() {
        let state = GameState::initial();
        assert_eq!(state.p1_piece_board, 0);
        assert_eq!(state.p2_piece_board, 0);
    }

    #[test]
    fn test_drop_piece_empty_first_column() {
        let state = GameState::initial().drop_piece(0, Player::One);
        assert_eq!(state.p1_piece_board, 1);
    }

    #[test]
    fn test_drop_piece_empty_last_column() {
        let state = GameState::initial().drop_piece(6, Player::Two);
        assert_eq!(state.p2_piece_board, 1 << (7 * 6));
        assert_eq!(state.p1_piece_board, 0);
    }

    #[test]
    fn test_drop_piece_empty_column_includes_other_pieces() {
        let state = drop_alternating(&[0, 1, 2]);

        let piece_1 = 1;
        let piece_3 = 1 << (7 * 2);
        assert_eq!(state.p1_piece_board, piece_1 | piece_3);
    }

    #[test]
    fn test_drop_piece_column_on_other_player_piece() {
        let state = drop_alternating(&[0, 0, 3, 3, 3, 3, 3]);

        let piece_1_1 = 1;
        let piece_1_2 = 2;

        let column_4 = 1 << (7 * 3);
        let piece_4_1 = column_4;
        let piece_4_2 = column_4 << 1;
        let piece_4_3 = column_4 << 2;
        let piece_4_4 = column_4 << 3;
        let piece_4_5 = column_4 << 4;

        assert_eq!(
            state.p1_piece_board,
            piece_1_1 | piece_4_1 | piece_4_3 | piece_4_5
        );
        assert_eq!(state.p2_piece_board, piece_1_2 | piece_4_2 | piece_4_4);
    }

    #[test]
    fn test_get_valid_columns_all_available() {
        assert_eq!(fill_five_rows().get_valid_columns(), vec![true; COLS]);
    }

    #[test]
    fn test_get_valid_columns_first_column_full() {
        let state = fill_five_rows().drop_piece(0, Player::One);

        assert_eq!(
            state.get_valid_columns(),
            vec![false, true, true, true, true, true, true]
        );
        assert!(!state.is_full());
    }

    #[test]
    fn test_get_valid_columns_all_full() {
        let mut state = fill_five_rows();
        for column in 0..COLS {
            state = state.drop_piece(column, Player::One);
        }

        assert_eq!(state.get_valid_columns(), vec![false; COLS]);
        assert!(state.is_full());
        assert_eq!(state.number_of_pieces(), 42);
    }

    #[test]
    fn test_number_of_pieces() {
        assert_eq!(GameState::initial().number_of_pieces(), 0);
        assert_eq!(drop_alternating(&[3]).number_of_pieces(), 1);
        assert_eq!(drop_alternating(&[3, 3, 4]).number_of_pieces(), 3);
    }

    #[test]
    fn test_has_connected_4_only_for_owner() {
        let state = drop_alternating(&[0, 1, 0, 1, 0, 1, 0]);

        assert!(state.has_connected_4(Player::One));
        assert!(!state.has_connected_4(Player::Two));
    }

    #[test]
    fn test_swapped_and_mirrored() {
        let state = drop_alternating(&[0, 6]);

        let swapped = state.swapped();
        assert_eq!(swapped.p1_piece_board, state.p2_piece_board);
        assert_eq!(swapped.p2_piece_board, state.p1_piece_board);

        let mirrored = state.mirrored();
        assert_eq!(mirrored.p1_piece_board, 1 << (7 * 6));
        assert_eq!(mirrored.p2_piece_board, 1);
    }

    #[test]
    fn test_key_distinguishes_players() {
        let a = GameState::initial().drop_piece(0, Player::One);
        let b = GameState::initial().drop_piece(0, Player::Two);

        assert_ne!(a.key(), b.key());
        assert_eq!(a.key(), b.swapped().key());
    }

    #[test]
    fn test_display_bottom_left_piece() {
        let state = GameState::initial().drop_piece(0, Player::One);
        let display = state.to_string();
        let bottom_row = display.lines().nth(12).unwrap();

        assert_eq!(bottom_row, "   | X |   |   |   |   |   |   |");
    }
}
