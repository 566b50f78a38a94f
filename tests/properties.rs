use passgen::PasswordGenerator;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn seeded(seed: u64) -> PasswordGenerator<StdRng> {
    PasswordGenerator::with_rng(StdRng::seed_from_u64(seed)).unwrap()
}

proptest! {
    #[test]
    fn password_has_requested_length(seed in any::<u64>(), length in 1usize..=128) {
        let mut generator = seeded(seed);
        generator.set_length(length).unwrap();
        let password = generator.generate().unwrap();
        prop_assert_eq!(password.char_count(), length);
    }

    #[test]
    fn out_of_range_lengths_are_rejected(length in prop_oneof![Just(0usize), 129usize..10_000]) {
        let mut generator = seeded(0);
        prop_assert!(generator.set_length(length).is_err());
        prop_assert_eq!(generator.length(), 12);
    }

    #[test]
    fn characters_come_from_key_space(
        seed in any::<u64>(),
        numeric in any::<bool>(),
        lower in any::<bool>(),
        upper in any::<bool>(),
        symbols in any::<bool>(),
        trim in any::<bool>(),
        custom in "\\PC{0,24}",
    ) {
        let mut generator = seeded(seed);
        generator
            .use_numeric(numeric)
            .use_lower_alphabet(lower)
            .use_upper_alphabet(upper)
            .use_symbols(symbols)
            .use_trim_similar_looking(trim)
            .set_symbols(&custom)
            .set_length(128)
            .unwrap();

        if generator.key_space().is_empty() {
            prop_assert!(generator.generate().is_err());
        } else {
            let password = generator.generate().unwrap();
            for ch in password.as_str().chars() {
                prop_assert!(generator.key_space().contains(&ch));
            }
        }
    }

    #[test]
    fn symbols_are_unique_and_never_ascii_alphanumeric(custom in "\\PC{0,64}") {
        let mut generator = seeded(0);
        generator.set_symbols(&custom);
        let symbols = generator.symbols();
        for (i, ch) in symbols.iter().enumerate() {
            prop_assert!(!ch.is_ascii_alphanumeric());
            prop_assert!(!symbols[..i].contains(ch));
            prop_assert!(custom.contains(*ch));
        }
    }

    #[test]
    fn trimmed_key_space_has_no_lookalikes(custom in "\\PC{0,32}") {
        let mut generator = seeded(0);
        generator.set_symbols(&custom).use_trim_similar_looking(true);
        for ch in "0oO1Il6b9gq\"'(),.:;[]{}`|".chars() {
            prop_assert!(!generator.key_space().contains(&ch));
        }
    }
}

#[test]
fn os_passwords_are_distinct() {
    let mut generator = PasswordGenerator::new().unwrap();
    generator.set_length(16).unwrap();
    let passwords = generator.generate_many(32).unwrap();
    for (i, password) in passwords.iter().enumerate() {
        assert!(!passwords[..i].contains(password));
    }
}

/// Pearson's chi-squared test over the ten digits.
#[test]
fn draws_are_uniform() {
    let mut generator = seeded(0xc0ffee);
    generator
        .use_lower_alphabet(false)
        .use_upper_alphabet(false)
        .use_symbols(false)
        .set_length(128)
        .unwrap();
    assert_eq!(generator.key_space().len(), 10);

    let mut counts = [0u64; 10];
    for password in generator.generate_many(400).unwrap() {
        for ch in password.as_str().chars() {
            counts[ch.to_digit(10).unwrap() as usize] += 1;
        }
    }

    let total: u64 = counts.iter().sum();
    assert_eq!(total, 400 * 128);
    let expected = total as f64 / 10.0;
    let chi_squared: f64 = counts
        .iter()
        .map(|&observed| (observed as f64 - expected).powi(2) / expected)
        .sum();
    // Critical value for 9 degrees of freedom at p = 0.001.
    assert!(chi_squared < 27.877, "chi-squared {chi_squared} with counts {counts:?}");
}
