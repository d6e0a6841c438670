pub const ROWS: usize = 6;
pub const COLS: usize = 7;
pub const CELL_COUNT: usize = ROWS * COLS;

/// Bits per column. The top bit of each column is padding and is never set.
pub const COLUMN_BITS: usize = ROWS + 1;

const COLUMN_MASK: u64 = 0b0111111;

pub const TOP_ROW_MASK: u64 = 0b0100000_0100000_0100000_0100000_0100000_0100000_0100000;

/// Lowest bit of `column`.
pub fn column_base(column: usize) -> u64 {
    1 << (COLUMN_BITS * column)
}

/// Reflects the board left to right.
pub fn mirror(board: u64) -> u64 {
    (0..COLS).fold(0, |mirrored, column| {
        let pieces = (board >> (COLUMN_BITS * column)) & COLUMN_MASK;
        mirrored | (pieces << (COLUMN_BITS * (COLS - 1 - column)))
    })
}

pub fn has_connected_4(board: u64) -> bool {
    // Diagonal, horizontal, diagonal, vertical.
    for shift in [COLUMN_BITS - 1, COLUMN_BITS, COLUMN_BITS + 1, 1] {
        let c2 = board & (board << shift);
        if c2 & (c2 << (2 * shift)) != 0 {
            return true;
        }
    }

    false
}

pub fn map_board_to_arr(mut board: u64) -> [bool; CELL_COUNT] {
    let mut result = [false; CELL_COUNT];
    while board != 0 {
        let board_without_first_bit = board & (board - 1);
        let removed_bit = board ^ board_without_first_bit;
        let removed_bit_idx = removed_bit.trailing_zeros() as usize;

        result[map_board_idx_to_vec_idx(removed_bit_idx)] = true;
        board = board_without_first_bit;
    }

    result
}

/// Converts from the bitboard index, which starts in the bottom left and traverses bottom to top with every
/// 7th bit being empty.
/// From:
/// 05  12  19  26  33  40  47
/// 04  11  18  25  32  39  46
/// 03  10  17  24  31  38  45
/// 02  09  16  23  30  37  44
/// 01  08  15  22  29  36  43
/// 00  07  14  21  28  35  42
///
/// To the vector form which starts in the top left and goes left to right with no skipped bits.
/// To:
/// 00  01  02  03  04  05  06
/// 07  08  09  10  11  12  13
/// 14  15  16  17  18  19  20
/// 21  22  23  24  25  26  27
/// 28  29  30  31  32  33  34
/// 35  36  37  38  39  40  41
fn map_board_idx_to_vec_idx(board_idx: usize) -> usize {
    let column_idx = board_idx / COLUMN_BITS;
    let row_idx = board_idx % COLUMN_BITS;
    ((ROWS - 1 - row_idx) * COLS) + column_idx
}
