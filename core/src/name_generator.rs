//! Deterministic borrower contact details using curated name lists.
//!
//! All generation is deterministic (same RNG seed = same names).

use crate::rng::GeneratorRng;

/// Deterministic name and contact generator.
pub struct NameGenerator;

impl NameGenerator {
    pub fn generate_first_name(rng: &mut GeneratorRng) -> &'static str {
        *rng.pick(Self::first_names())
    }

    pub fn generate_last_name(rng: &mut GeneratorRng) -> &'static str {
        *rng.pick(Self::last_names())
    }

    /// Contact address keyed on the borrower's sequence number.
    pub fn email_for(sequence: usize) -> String {
        format!("borrower{sequence}@kcb.com")
    }

    /// Safaricom-style mobile number: `+2547` followed by eight digits.
    pub fn generate_phone(rng: &mut GeneratorRng) -> String {
        format!("+2547{}", rng.int_between(10_000_000, 100_000_000))
    }

    fn first_names() -> &'static [&'static str] {
        &[
            "Wanjiru", "Akinyi", "Njeri", "Atieno", "Wambui", "Chebet", "Nyambura",
            "Achieng", "Mumbua", "Jepkosgei", "Nafula", "Kerubo", "Moraa", "Wairimu",
            "Faith", "Grace", "Mercy", "Esther", "Joy", "Caroline",
            "Kamau", "Otieno", "Mwangi", "Kiprotich", "Odhiambo", "Mutua", "Njoroge",
            "Kipchoge", "Wafula", "Onyango", "Kariuki", "Barasa", "Omondi", "Kibet",
            "Brian", "Dennis", "Kevin", "Peter", "James", "Samuel",
        ]
    }

    fn last_names() -> &'static [&'static str] {
        &[
            "Kamau", "Otieno", "Mwangi", "Ochieng", "Kiprono", "Wanyama", "Mutiso",
            "Njoroge", "Kimani", "Odhiambo", "Chepkoech", "Maina", "Kiplagat",
            "Omondi", "Wekesa", "Nyaga", "Mugo", "Ruto", "Korir", "Owino",
            "Macharia", "Muriuki", "Karanja", "Kilonzo", "Musyoka", "Nzioka",
            "Juma", "Hassan", "Ali", "Mohamed", "Simiyu", "Wafula", "Cheruiyot",
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_generation_is_deterministic() {
        let mut rng1 = GeneratorRng::seeded(12345);
        let mut rng2 = GeneratorRng::seeded(12345);
        assert_eq!(
            NameGenerator::generate_first_name(&mut rng1),
            NameGenerator::generate_first_name(&mut rng2),
            "Same seed should produce same name"
        );
    }

    #[test]
    fn names_come_from_curated_lists() {
        let mut rng = GeneratorRng::seeded(31);
        for _ in 0..100 {
            let first = NameGenerator::generate_first_name(&mut rng);
            let last = NameGenerator::generate_last_name(&mut rng);
            assert!(NameGenerator::first_names().contains(&first), "unknown first name {first}");
            assert!(NameGenerator::last_names().contains(&last), "unknown last name {last}");
        }
    }

    #[test]
    fn phone_numbers_have_kenyan_mobile_shape() {
        let mut rng = GeneratorRng::seeded(7);
        for _ in 0..200 {
            let phone = NameGenerator::generate_phone(&mut rng);
            assert!(phone.starts_with("+2547"), "bad prefix: {phone}");
            assert_eq!(phone.len(), 13, "bad length: {phone}");
            assert!(phone[1..].chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn email_uses_sequence_number() {
        assert_eq!(NameGenerator::email_for(7), "borrower7@kcb.com");
    }
}
