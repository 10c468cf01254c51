use crate::chess::{between, is_owned_by, Board, Color, Role, Square};

/// Whether the piece on `whence` could move to `whither` by its own movement rule.
///
/// This is the pseudo-legal notion of a move: it ignores whether the piece belongs to the
/// player to move, what occupies the destination (except for pawns, whose movement depends
/// on it) and whether the move would leave the mover's own king in check.
///
/// An empty square has no valid movement.
pub fn is_valid_movement(board: &Board, whence: Square, whither: Square) -> bool {
    let Some(piece) = board[whence] else {
        return false;
    };

    match piece.role() {
        Role::King => is_valid_king_movement(whence, whither),
        Role::Queen => is_valid_queen_movement(board, whence, whither),
        Role::Rook => is_valid_rook_movement(board, whence, whither),
        Role::Bishop => is_valid_bishop_movement(board, whence, whither),
        Role::Knight => is_valid_knight_movement(whence, whither),
        Role::Pawn => is_valid_pawn_movement(board, whence, whither, piece.color()),
    }
}

/// Kings move exactly one square in any direction.
pub fn is_valid_king_movement(whence: Square, whither: Square) -> bool {
    let (dr, dc) = whither - whence;
    whence != whither && dr.abs() <= 1 && dc.abs() <= 1
}

/// Knights jump in an L shape, two squares one way and one square the other.
pub fn is_valid_knight_movement(whence: Square, whither: Square) -> bool {
    let (dr, dc) = whither - whence;
    matches!((dr.abs(), dc.abs()), (1, 2) | (2, 1))
}

/// Rooks move any distance along a row or a column, but not through other pieces.
pub fn is_valid_rook_movement(board: &Board, whence: Square, whither: Square) -> bool {
    let (dr, dc) = whither - whence;
    (dr == 0) != (dc == 0) && is_path_clear(board, whence, whither)
}

/// Bishops move any distance along a diagonal, but not through other pieces.
pub fn is_valid_bishop_movement(board: &Board, whence: Square, whither: Square) -> bool {
    let (dr, dc) = whither - whence;
    dr != 0 && dr.abs() == dc.abs() && is_path_clear(board, whence, whither)
}

/// Queens move like either a rook or a bishop.
pub fn is_valid_queen_movement(board: &Board, whence: Square, whither: Square) -> bool {
    is_valid_rook_movement(board, whence, whither)
        || is_valid_bishop_movement(board, whence, whither)
}

/// Pawns of a given [`Color`] move forward onto an empty square, two squares at once from
/// their starting row, or diagonally forward onto a square occupied by the opponent.
pub fn is_valid_pawn_movement(board: &Board, whence: Square, whither: Square, c: Color) -> bool {
    let (dr, dc) = whither - whence;
    let forward = c.forward();

    match dc.abs() {
        0 if dr == forward => board[whither].is_none(),
        0 if dr == 2 * forward => {
            whence.row() == c.pawn_row()
                && board[whither].is_none()
                && whence.offset((forward, 0)).is_some_and(|sq| board[sq].is_none())
        }
        1 if dr == forward => is_owned_by(board[whither], !c),
        _ => false,
    }
}

/// Whether every square strictly between two aligned squares is empty.
///
/// Squares that are not on the same row, column or diagonal have no path between them.
pub fn is_path_clear(board: &Board, whence: Square, whither: Square) -> bool {
    between(whence, whither).is_some_and(|line| line.iter().all(|&sq| board[sq].is_none()))
}
