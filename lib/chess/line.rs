use crate::chess::Square;
use arrayvec::ArrayVec;

/// An ordered sequence of [`Square`]s along a straight line.
///
/// No line on the board visits more than 7 squares besides its origin.
pub type Line = ArrayVec<Square, 7>;

/// The squares visited when taking up to `steps` steps of `(Δrow, Δcol)` from `start`.
///
/// The starting square itself is not included and the line stops at the edge of the board.
pub fn line(start: Square, step: (i8, i8), steps: usize) -> Line {
    let mut squares = Line::new();
    let mut current = start;

    for _ in 0..steps.min(squares.capacity()) {
        match current.offset(step) {
            Some(next) if next != current => {
                squares.push(next);
                current = next;
            }

            _ => break,
        }
    }

    squares
}

/// The unit step `(Δrow, Δcol)` leading from `a` to `b` and the number of steps it takes.
///
/// Returns `None` unless `a` and `b` are distinct squares on the same row, column or diagonal.
pub fn direction(a: Square, b: Square) -> Option<((i8, i8), usize)> {
    let (dr, dc) = b - a;

    if (dr, dc) == (0, 0) || (dr != 0 && dc != 0 && dr.abs() != dc.abs()) {
        return None;
    }

    let steps = dr.abs().max(dc.abs()) as usize;
    Some(((dr.signum(), dc.signum()), steps))
}

/// The squares strictly between `a` and `b`, from `a` towards `b`.
///
/// Returns `None` unless `a` and `b` are distinct squares on the same row, column or diagonal.
pub fn between(a: Square, b: Square) -> Option<Line> {
    let (step, steps) = direction(a, b)?;
    Some(line(a, step, steps - 1))
}
