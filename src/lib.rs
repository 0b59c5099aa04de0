//! Disk-arm scheduling simulator.
//!
//! Computes the total head movement needed to service a list of cylinder
//! requests under FCFS, SCAN, C-SCAN and their sorted "optimized" variants.

#[macro_use]
pub mod trace;

pub mod movement;
pub mod policies;
pub mod rand_generator;
pub mod utils;

pub use movement::accumulate;
pub use policies::{
    parse_policy_codes, run_policies, Cylinder, DiskGeometry, DiskPolicy, Policy, PolicyReport,
    DEFAULT_MAX_CYLINDER,
};
pub use rand_generator::RequestGenerator;
pub use utils::{read_input_file, write_requests, DriverError};
