// ==========================================
// GreenBit - Mock Roster Generation
// ==========================================
// Demo collaborator that produces the initial roster the dashboard
// aggregates over. Takes the RNG by argument so tests can pin a
// seed; production callers pass `rand::thread_rng()`.
// ==========================================

use crate::domain::employee::{CommuteRecord, EmployeeRecord};
use crate::domain::types::{CommuteMode, Department};
use chrono::{Duration, Utc};
use rand::seq::SliceRandom;
use rand::Rng;

/// Default roster size at startup.
pub const DEFAULT_ROSTER_SIZE: usize = 25;

// Name pool for the demo roster (Indian context). Cycled when the
// requested size exceeds the pool.
const NAMES: [&str; 25] = [
    "Aarav Patel",
    "Vihaan Sharma",
    "Aditya Verma",
    "Sai Kumar",
    "Arjun Reddy",
    "Reyansh Singh",
    "Muhammad Khan",
    "Ishaan Gupta",
    "Krishna Iyer",
    "Dhruv Malhotra",
    "Ananya Das",
    "Diya Rao",
    "Saanvi Nair",
    "Aadhya Joshi",
    "Kiara Shah",
    "Pari Mehta",
    "Myra Kapoor",
    "Riya Jain",
    "Anika Choudhury",
    "Navya Agarwal",
    "Kabir Chatterjee",
    "Vivaan Saxena",
    "Ayaan Bhat",
    "Vihaan Mishra",
    "Advik Deshmukh",
];

/// Generate `count` mock employees with ids starting at 1.
///
/// Departments and commute modes are drawn uniformly; one-way
/// distance is 5..=34 km, hours 4..=7, timestamps scattered over
/// roughly the last three hours.
pub fn generate_roster<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<EmployeeRecord> {
    let now = Utc::now();
    (0..count)
        .map(|i| {
            let department = *Department::ALL
                .choose(rng)
                .unwrap_or(&Department::Engineering);
            let mode = *CommuteMode::ALL.choose(rng).unwrap_or(&CommuteMode::Metro);
            let distance_km = rng.gen_range(5..35) as f64;
            let hours_logged = rng.gen_range(4..8) as f64;
            let age_ms: i64 = rng.gen_range(0..10_000_000);

            EmployeeRecord {
                employee_id: (i + 1) as u64,
                name: NAMES[i % NAMES.len()].to_string(),
                department,
                commute: CommuteRecord {
                    mode_id: mode.id().to_string(),
                    distance_km,
                },
                hours_logged,
                logged_at: Some(now - Duration::milliseconds(age_ms)),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generate_roster_size_and_ids() {
        let mut rng = StdRng::seed_from_u64(7);
        let roster = generate_roster(&mut rng, DEFAULT_ROSTER_SIZE);
        assert_eq!(roster.len(), 25);
        assert_eq!(roster[0].employee_id, 1);
        assert_eq!(roster[24].employee_id, 25);
        assert_eq!(roster[0].name, "Aarav Patel");
    }

    #[test]
    fn test_generate_roster_respects_ranges() {
        let mut rng = StdRng::seed_from_u64(42);
        for employee in generate_roster(&mut rng, 200) {
            assert!((5.0..=34.0).contains(&employee.commute.distance_km));
            assert!((4.0..=7.0).contains(&employee.hours_logged));
            assert!(CommuteMode::from_id(&employee.commute.mode_id).is_some());
            assert!(employee.logged_at.is_some());
        }
    }

    #[test]
    fn test_generate_roster_is_deterministic_under_fixed_seed() {
        let mut rng_a = StdRng::seed_from_u64(99);
        let mut rng_b = StdRng::seed_from_u64(99);
        let a = generate_roster(&mut rng_a, 10);
        let b = generate_roster(&mut rng_b, 10);
        for (x, y) in a.iter().zip(b.iter()) {
            assert_eq!(x.commute.mode_id, y.commute.mode_id);
            assert_eq!(x.commute.distance_km, y.commute.distance_km);
            assert_eq!(x.hours_logged, y.hours_logged);
            assert_eq!(x.department, y.department);
        }
    }
}
