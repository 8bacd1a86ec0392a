//! Demo-data generator: syntactically valid student records for seeding a
//! fresh install or exercising the dashboard.

use chrono::{Datelike, Utc};
use rand::Rng;

use crate::error::Result;
use crate::model::{Course, Student};
use crate::store::{StorageBackend, StudentStore};
use crate::validation::{MAX_AGE, MIN_AGE};

const FIRST_NAMES: &[&str] = &[
    "John", "Jane", "Juan", "Maria", "Jose", "Ana", "Carlos", "Sofia", "Miguel", "Isabel",
    "Ramon", "Teresa", "Andres", "Lucia", "Pablo", "Elena", "Marco", "Clara", "Diego", "Rosa",
];

const MIDDLE_NAMES: &[&str] = &[
    "Cruz", "Reyes", "Santos", "Marie", "Grace", "Luis", "Anton", "Fe",
];

const LAST_NAMES: &[&str] = &[
    "Smith", "Garcia", "Reyes", "Santos", "Cruz", "Bautista", "Torres", "Flores", "Ramos",
    "Mendoza", "Castillo", "Villanueva", "Aquino", "Navarro", "Domingo", "Salazar",
];

const STREETS: &[&str] = &[
    "Maple Street", "Acacia Avenue", "Rizal Boulevard", "Mabini Road", "Luna Street",
    "Sampaguita Lane", "Bonifacio Drive", "Katipunan Avenue",
];

const CITIES: &[&str] = &[
    "Quezon City", "Cebu City", "Davao City", "Baguio", "Iloilo City", "Taguig",
];

fn random_course(rng: &mut impl Rng) -> Course {
    Course::ALL[rng.gen_range(0..Course::ALL.len())]
}

/// Age first, then a birth date consistent with it: birth year is the
/// current year minus the age, day capped at 28 so every month is valid.
fn random_birth_date_and_age(rng: &mut impl Rng) -> (String, String) {
    let age = rng.gen_range(MIN_AGE..=MAX_AGE);
    let year = Utc::now().year() - age as i32;
    let month = rng.gen_range(1..=12u32);
    let day = rng.gen_range(1..=28u32);
    (format!("{:04}-{:02}-{:02}", year, month, day), age.to_string())
}

fn pick<'a>(rng: &mut impl Rng, pool: &[&'a str]) -> &'a str {
    pool[rng.gen_range(0..pool.len())]
}

/// Generate `count` records with ids `1..=count`. Roughly one record in
/// three carries a middle name, matching the mixed data the forms produce.
pub fn generate_students(count: usize, rng: &mut impl Rng) -> Vec<Student> {
    (1..=count)
        .map(|i| {
            let (birth_date, age) = random_birth_date_and_age(rng);
            let middle_name = if rng.gen_ratio(1, 3) {
                Some(pick(rng, MIDDLE_NAMES).to_string())
            } else {
                None
            };
            let address = format!(
                "{} {}, {}",
                rng.gen_range(1..=999),
                pick(rng, STREETS),
                pick(rng, CITIES)
            );

            Student {
                id: i as u32,
                first_name: pick(rng, FIRST_NAMES).to_string(),
                middle_name,
                last_name: pick(rng, LAST_NAMES).to_string(),
                birth_date,
                age,
                address,
                course: random_course(rng),
                avatar: Some(format!("https://i.pravatar.cc/150?img={}", rng.gen_range(1..=70))),
            }
        })
        .collect()
}

/// Generate and persist, replacing whatever list the store held.
pub fn seed_store<B: StorageBackend>(
    store: &mut StudentStore<B>,
    count: usize,
    rng: &mut impl Rng,
) -> Result<()> {
    store.replace_all(generate_students(count, rng))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemBackend;
    use crate::validation::validate_student;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn generates_the_requested_count_with_sequential_ids() {
        let students = generate_students(20, &mut rng());
        assert_eq!(students.len(), 20);
        let ids: Vec<u32> = students.iter().map(|s| s.id).collect();
        assert_eq!(ids, (1..=20).collect::<Vec<u32>>());
    }

    #[test]
    fn generated_records_pass_validation() {
        for student in generate_students(50, &mut rng()) {
            assert_eq!(validate_student(&student), Ok(()), "{:?}", student);
        }
    }

    #[test]
    fn birth_year_is_consistent_with_age() {
        for student in generate_students(20, &mut rng()) {
            let age: i32 = student.age.parse().unwrap();
            let year: i32 = student.birth_date[..4].parse().unwrap();
            assert_eq!(year + age, Utc::now().year());
        }
    }

    #[test]
    fn seed_store_persists_the_generated_list() {
        let mut store = StudentStore::with_backend(MemBackend::new());
        seed_store(&mut store, 12, &mut rng()).unwrap();
        assert_eq!(store.len(), 12);

        let mut reloaded = StudentStore::with_backend(MemBackend::new());
        reloaded.load().unwrap();
        // Different backend: nothing leaked across stores
        assert!(reloaded.is_empty());
    }

    #[test]
    fn zero_count_yields_an_empty_list() {
        assert!(generate_students(0, &mut rng()).is_empty());
    }
}
