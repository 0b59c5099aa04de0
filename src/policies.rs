use std::fmt;

use crate::movement::accumulate;

/// A cylinder (track) index. Signed so that out-of-range inputs flow through
/// the arithmetic instead of being rejected.
pub type Cylinder = i64;

/// Highest addressable cylinder when nothing else is configured.
pub const DEFAULT_MAX_CYLINDER: Cylinder = 4999;

/// Physical bound of the simulated disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiskGeometry {
    pub max_cylinder: Cylinder,
}

impl DiskGeometry {
    pub fn new(max_cylinder: Cylinder) -> Self {
        DiskGeometry { max_cylinder }
    }
}

impl Default for DiskGeometry {
    fn default() -> Self {
        DiskGeometry::new(DEFAULT_MAX_CYLINDER)
    }
}

pub trait DiskPolicy {
    /// Total cylinders traversed to service `requests` from `start`,
    /// saturating at `u64::MAX`.
    fn total_movement(&self, requests: &[Cylinder], start: Cylinder, disk: &DiskGeometry) -> u64;
}

// Splits a private, ascending copy of the requests around the head.
// `left_inclusive` puts cylinders equal to `start` on the left side.
fn partition(
    requests: &[Cylinder],
    start: Cylinder,
    left_inclusive: bool,
) -> (Vec<Cylinder>, Vec<Cylinder>) {
    let mut sorted = requests.to_vec();
    sorted.sort_unstable();
    let (left, right): (Vec<Cylinder>, Vec<Cylinder>) = sorted.into_iter().partition(|&c| {
        if left_inclusive {
            c <= start
        } else {
            c < start
        }
    });
    q_trace!("\tleft: {:?}", left);
    q_trace!("\tright: {:?}", right);
    (left, right)
}

fn descending(left: &[Cylinder]) -> Vec<Cylinder> {
    left.iter().rev().copied().collect()
}

pub struct Fcfs;

impl DiskPolicy for Fcfs {
    fn total_movement(&self, requests: &[Cylinder], start: Cylinder, _: &DiskGeometry) -> u64 {
        accumulate(requests, start)
    }
}

/// Services requests in ascending order regardless of arrival order.
pub struct OptimizedFcfs;

impl DiskPolicy for OptimizedFcfs {
    fn total_movement(&self, requests: &[Cylinder], start: Cylinder, _: &DiskGeometry) -> u64 {
        let mut sorted = requests.to_vec();
        sorted.sort_unstable();
        accumulate(&sorted, start)
    }
}

/// Sweeps down to the lowest request, then reverses and sweeps up.
pub struct Scan;

impl DiskPolicy for Scan {
    fn total_movement(&self, requests: &[Cylinder], start: Cylinder, _: &DiskGeometry) -> u64 {
        let (left, right) = partition(requests, start, true);

        let mut total_moves = accumulate(&descending(&left), start);
        if let Some(&first_right) = right.first() {
            let turn = left.first().copied().unwrap_or(start);
            total_moves = total_moves.saturating_add(turn.abs_diff(first_right));
            total_moves = total_moves.saturating_add(accumulate(&right, first_right));
        }
        total_moves
    }
}

/// Sweeps down to cylinder 0, crosses the whole disk, and services the
/// upper requests on a fresh sweep from 0.
pub struct CScan;

impl DiskPolicy for CScan {
    fn total_movement(&self, requests: &[Cylinder], start: Cylinder, disk: &DiskGeometry) -> u64 {
        let (left, right) = partition(requests, start, true);

        let mut total_moves = accumulate(&descending(&left), start);
        if !right.is_empty() {
            let lowest = left.first().copied().unwrap_or(start);
            total_moves = total_moves.saturating_add(lowest.abs_diff(0));
            total_moves = total_moves.saturating_add(disk.max_cylinder.abs_diff(0));
            v_trace!("\twrap {} -> 0 -> {}", lowest, disk.max_cylinder);
            total_moves = total_moves.saturating_add(accumulate(&right, 0));
        }
        total_moves
    }
}

/// Sorts each half on its own and only pays the gap between the halves.
pub struct OptimizedScan;

impl DiskPolicy for OptimizedScan {
    fn total_movement(&self, requests: &[Cylinder], start: Cylinder, _: &DiskGeometry) -> u64 {
        let (left, right) = partition(requests, start, true);
        let lower = descending(&left);

        let mut total_moves: u64 = 0;
        if !lower.is_empty() {
            total_moves = total_moves.saturating_add(accumulate(&lower, start));
        }
        if let Some(&first_right) = right.first() {
            // gap is measured from the highest lower cylinder
            if let Some(&highest_lower) = lower.first() {
                total_moves = total_moves.saturating_add(highest_lower.abs_diff(first_right));
            }
            total_moves = total_moves.saturating_add(accumulate(&right, first_right));
        }
        total_moves
    }
}

/// Sweeps up from the head, then wraps to the lower request nearest the
/// disk's upper bound instead of crossing the full disk.
pub struct OptimizedCScan;

impl OptimizedCScan {
    fn wrap_target(left: &[Cylinder], disk: &DiskGeometry) -> Option<Cylinder> {
        left.iter()
            .copied()
            .min_by_key(|&c| disk.max_cylinder.abs_diff(c))
    }
}

impl DiskPolicy for OptimizedCScan {
    fn total_movement(&self, requests: &[Cylinder], start: Cylinder, disk: &DiskGeometry) -> u64 {
        let (left, right) = partition(requests, start, false);

        let mut total_moves: u64 = 0;
        let mut position = start;
        if let Some(&last_right) = right.last() {
            total_moves = total_moves.saturating_add(accumulate(&right, start));
            position = last_right;
        }
        if let Some(target) = OptimizedCScan::wrap_target(&left, disk) {
            v_trace!("\twrap {} -> {}", position, target);
            total_moves = total_moves.saturating_add(position.abs_diff(target));
            total_moves = total_moves.saturating_add(accumulate(&left, target));
        }
        total_moves
    }
}

/// The six supported policies, in reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Policy {
    Fcfs,
    Scan,
    CScan,
    OptimizedFcfs,
    OptimizedScan,
    OptimizedCScan,
}

impl Policy {
    pub const ALL: [Policy; 6] = [
        Policy::Fcfs,
        Policy::Scan,
        Policy::CScan,
        Policy::OptimizedFcfs,
        Policy::OptimizedScan,
        Policy::OptimizedCScan,
    ];

    /// Single-letter selector used on the command line.
    pub fn code(&self) -> char {
        match self {
            Policy::Fcfs => 'N',
            Policy::Scan => 's',
            Policy::CScan => 'c',
            Policy::OptimizedFcfs => 'n',
            Policy::OptimizedScan => 'o',
            Policy::OptimizedCScan => 'C',
        }
    }

    pub fn from_code(code: char) -> Option<Policy> {
        Policy::ALL.into_iter().find(|p| p.code() == code)
    }

    pub fn scheduler(&self) -> Box<dyn DiskPolicy> {
        match self {
            Policy::Fcfs => Box::new(Fcfs),
            Policy::Scan => Box::new(Scan),
            Policy::CScan => Box::new(CScan),
            Policy::OptimizedFcfs => Box::new(OptimizedFcfs),
            Policy::OptimizedScan => Box::new(OptimizedScan),
            Policy::OptimizedCScan => Box::new(OptimizedCScan),
        }
    }

    pub fn total_movement(&self, requests: &[Cylinder], start: Cylinder, disk: &DiskGeometry) -> u64 {
        self.scheduler().total_movement(requests, start, disk)
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Policy::Fcfs => "FCFS",
            Policy::Scan => "SCAN",
            Policy::CScan => "C-SCAN",
            Policy::OptimizedFcfs => "Optimized FCFS",
            Policy::OptimizedScan => "Optimized SCAN",
            Policy::OptimizedCScan => "Optimized C-SCAN",
        };
        write!(f, "{}", label)
    }
}

/// Parses a string of policy codes such as `"Nsc"`, keeping the fixed
/// reporting order and dropping repeats.
pub fn parse_policy_codes(codes: &str) -> Result<Vec<Policy>, String> {
    let mut selected = Vec::new();
    for code in codes.chars() {
        match Policy::from_code(code) {
            Some(policy) => selected.push(policy),
            None => {
                return Err(format!(
                    "Invalid policy code: {}. Must be any of N, s, c, n, o, C",
                    code
                ))
            }
        }
    }
    if selected.is_empty() {
        return Err("No policy selected".to_string());
    }
    Ok(Policy::ALL
        .into_iter()
        .filter(|p| selected.contains(p))
        .collect())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolicyReport {
    pub policy: Policy,
    pub total: u64,
}

/// Evaluates each policy on the same requests. Every policy works on its own
/// copy, so the order of `policies` never changes a result.
pub fn run_policies(
    policies: &[Policy],
    requests: &[Cylinder],
    start: Cylinder,
    disk: &DiskGeometry,
) -> Vec<PolicyReport> {
    policies
        .iter()
        .map(|&policy| {
            v_trace!("{}", policy);
            PolicyReport {
                policy,
                total: policy.total_movement(requests, start, disk),
            }
        })
        .collect()
}
