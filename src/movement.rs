use crate::policies::Cylinder;

/// Sums the distance travelled by a head that starts at `start` and visits
/// `visit_order` in exactly that order.
///
/// The total saturates at `u64::MAX` rather than wrapping.
pub fn accumulate(visit_order: &[Cylinder], start: Cylinder) -> u64 {
    let mut current = start;
    let mut total_moves: u64 = 0;
    for &cylinder in visit_order {
        total_moves = total_moves.saturating_add(cylinder.abs_diff(current));
        v_trace!("\t{:6} -> {:6} ({})", current, cylinder, cylinder.abs_diff(current));
        current = cylinder;
    }
    total_moves
}
