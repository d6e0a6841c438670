use super::game_state::{BOARD_SIZE, CELL_COUNT};

/// A permutation of cells where `perm[target] == source`.
pub type Permutation = [usize; CELL_COUNT];

fn identity() -> Permutation {
    let mut perm = [0; CELL_COUNT];
    for (i, p) in perm.iter_mut().enumerate() {
        *p = i;
    }

    perm
}

/// Counter clockwise quarter turn.
fn rotate(perm: &Permutation) -> Permutation {
    let mut rotated = [0; CELL_COUNT];
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            rotated[row * BOARD_SIZE + col] = perm[col * BOARD_SIZE + (BOARD_SIZE - 1 - row)];
        }
    }

    rotated
}

fn flip(perm: &Permutation) -> Permutation {
    let mut flipped = [0; CELL_COUNT];
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            flipped[row * BOARD_SIZE + col] = perm[row * BOARD_SIZE + (BOARD_SIZE - 1 - col)];
        }
    }

    flipped
}

/// The eight symmetries of the square. The last one is the identity.
pub fn dihedral_permutations() -> Vec<Permutation> {
    let mut perms = Vec::with_capacity(8);
    let mut rotated = identity();

    for _ in 0..4 {
        rotated = rotate(&rotated);
        perms.push(flip(&rotated));
        perms.push(rotated);
    }

    perms
}

pub fn permute<T: Copy>(values: &[T], perm: &Permutation) -> Vec<T> {
    perm.iter().map(|source| values[*source]).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotate_corner() {
        let rotated = rotate(&identity());
        // Counter clockwise: the top right corner moves to the top left.
        assert_eq!(rotated[0], 2);
        assert_eq!(rotated[4], 4);
    }

    #[test]
    fn test_four_rotations_is_identity() {
        let mut perm = identity();
        for _ in 0..4 {
            perm = rotate(&perm);
        }

        assert_eq!(perm, identity());
    }

    #[test]
    fn test_permutations_are_distinct() {
        let perms = dihedral_permutations();
        assert_eq!(perms.len(), 8);

        for (i, a) in perms.iter().enumerate() {
            for b in perms.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }

        assert_eq!(perms[7], identity());
    }
}
