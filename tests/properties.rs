use cipherkit::alphabet::PLAYFAIR_ALPHABET;
use cipherkit::playfair::{join_digraphs, Digraph};
use cipherkit::{
    brute_force_rotate, build_key_square, generate_permutation_with, playfair_decrypt,
    playfair_encrypt, preprocess_for_playfair, rotate, substitution_decrypt, substitution_encrypt,
    vigenere_decrypt, vigenere_encrypt, KeySquare,
};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn letters_lowercased(text: &str) -> String {
    text.chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

proptest! {
    #[test]
    fn prop_key_square_is_permutation_of_playfair_alphabet(keyword in "[a-zA-Z]{0,40}") {
        let square = build_key_square(&keyword).unwrap();
        let mut letters = square.letters().to_vec();
        letters.sort_unstable();
        prop_assert_eq!(letters, PLAYFAIR_ALPHABET.to_vec());
    }

    #[test]
    fn prop_preprocess_output_is_well_formed(text in "[ -~]{0,80}") {
        let digraphs = preprocess_for_playfair(&text);
        let joined = join_digraphs(&digraphs);
        prop_assert_eq!(joined.len() % 2, 0);
        prop_assert!(!joined.contains('j'));
        for d in &digraphs {
            prop_assert_ne!(d.first(), d.second());
        }
    }

    #[test]
    fn prop_preprocess_keeps_every_letter_in_order(text in "[a-ik-zA-IK-Z ]{0,60}") {
        // Removing the inserted fillers leaves a subsequence check: every
        // input letter must appear in order in the output.
        let joined = join_digraphs(&preprocess_for_playfair(&text));
        let mut output = joined.chars();
        for c in letters_lowercased(&text).chars() {
            prop_assert!(output.any(|o| o == c));
        }
    }

    #[test]
    fn prop_playfair_roundtrip(keyword in "[a-z]{0,12}", text in "[a-zA-Z ,.]{0,60}") {
        let square = build_key_square(&keyword).unwrap();
        let digraphs = preprocess_for_playfair(&text);
        let ciphertext = playfair_encrypt(&digraphs, &square);
        prop_assert_eq!(ciphertext.len(), digraphs.len());
        prop_assert_eq!(
            playfair_decrypt(&ciphertext, &square),
            join_digraphs(&digraphs).to_uppercase()
        );
    }

    #[test]
    fn prop_playfair_roundtrip_on_arbitrary_square(seed in any::<u64>(), pairs in proptest::collection::vec((0usize..25, 1usize..25), 0..20)) {
        // Shuffle the alphabet into an arbitrary square
        use rand::seq::SliceRandom;
        let mut letters = PLAYFAIR_ALPHABET.to_vec();
        letters.shuffle(&mut StdRng::seed_from_u64(seed));
        let square = KeySquare::from_letters(&letters).unwrap();

        let digraphs: Vec<Digraph> = pairs
            .iter()
            .map(|&(a, offset)| {
                let b = (a + offset) % 25;
                Digraph::new(PLAYFAIR_ALPHABET[a] as char, PLAYFAIR_ALPHABET[b] as char).unwrap()
            })
            .collect();
        let ciphertext = playfair_encrypt(&digraphs, &square);
        prop_assert_eq!(
            playfair_decrypt(&ciphertext, &square),
            join_digraphs(&digraphs).to_uppercase()
        );
    }

    #[test]
    fn prop_rotate_inverts(text in "\\PC{0,60}", shift in 0i64..26) {
        prop_assert_eq!(rotate(&rotate(&text, shift), -shift), text);
    }

    #[test]
    fn prop_brute_force_finds_plaintext(text in "[ -~]{0,60}", k in 0i64..26) {
        let candidates = brute_force_rotate(&rotate(&text, k));
        prop_assert_eq!(candidates.len(), 26);
        prop_assert_eq!(candidates[k as usize].key as i64, k);
        prop_assert_eq!(&candidates[k as usize].plaintext, &text);
    }

    #[test]
    fn prop_substitution_roundtrip(text in "[ -~]{0,80}", seed in any::<u64>()) {
        let key = generate_permutation_with(&mut StdRng::seed_from_u64(seed));
        let ciphertext = substitution_encrypt(&text, &key);
        prop_assert_eq!(substitution_decrypt(&ciphertext, &key), letters_lowercased(&text));
    }

    #[test]
    fn prop_vigenere_roundtrip(text in "[ -~]{0,80}", key in "[a-zA-Z]{1,12}") {
        let ciphertext = vigenere_encrypt(&text, &key).unwrap();
        prop_assert_eq!(vigenere_decrypt(&ciphertext, &key).unwrap(), letters_lowercased(&text));
    }
}

#[test]
fn monarchy_golden_vectors() {
    let square = build_key_square("monarchy").unwrap();
    assert_eq!(square.as_string(), "monarchybdefgiklpqstuvwxz");

    let digraphs = preprocess_for_playfair("instruments");
    let pairs: Vec<String> = digraphs.iter().map(ToString::to_string).collect();
    assert_eq!(pairs, ["in", "st", "ru", "me", "nt", "sq"]);

    let ciphertext = playfair_encrypt(&digraphs, &square);
    assert_eq!(join_digraphs(&ciphertext).to_uppercase(), "GATLMZCLRQTS");
}

#[test]
fn classical_shift_and_vigenere_vectors() {
    assert_eq!(rotate("ABC", 3), "DEF");
    assert_eq!(rotate("xyz", 3), "abc");
    assert_eq!(vigenere_encrypt("attackatdawn", "lemon").unwrap(), "lxfopvefrnhr");
}
