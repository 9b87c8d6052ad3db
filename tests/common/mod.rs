//! Synthetic token corpus shared by the integration tests and benchmarks.
#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

const BASE64: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Random tokens together with the totals a trie should report after adding
/// all of them.
pub struct Corpus {
    pub tokens: Vec<String>,
    pub total_characters: usize,
    pub words: usize,
}

/// Builds roughly `budget` bytes of random input.
///
/// Each token is the base64 encoding of 8 to 30 random bytes with `+`, `/` and
/// padding removed. Tokens of one character or less are discarded. Tokens are
/// mixed case, so the trie folds them on insertion.
pub fn build_corpus(seed: u64, budget: usize) -> Corpus {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut remaining = budget as isize;
    let mut tokens = Vec::new();
    let mut total_characters = 0;

    while remaining > 0 {
        let len = rng.gen_range(8..=30);
        let mut raw = vec![0u8; len];
        rng.fill_bytes(&mut raw);

        let token: String = encode_base64(&raw)
            .chars()
            .filter(char::is_ascii_alphanumeric)
            .collect();
        if token.len() <= 1 {
            continue;
        }

        remaining -= len as isize;
        total_characters += token.len();
        tokens.push(token);
    }

    let words = tokens.len();
    Corpus {
        tokens,
        total_characters,
        words,
    }
}

fn encode_base64(bytes: &[u8]) -> String {
    let mut out = String::with_capacity((bytes.len() + 2) / 3 * 4);
    for chunk in bytes.chunks(3) {
        let b = [
            chunk[0],
            chunk.get(1).copied().unwrap_or(0),
            chunk.get(2).copied().unwrap_or(0),
        ];
        let n = (u32::from(b[0]) << 16) | (u32::from(b[1]) << 8) | u32::from(b[2]);
        let emitted = chunk.len() + 1;
        for i in 0..4 {
            if i < emitted {
                out.push(BASE64[((n >> (18 - 6 * i)) & 0x3f) as usize] as char);
            } else {
                out.push('=');
            }
        }
    }
    out
}

#[test]
fn test_encode_base64() {
    assert_eq!(encode_base64(b"Man"), "TWFu");
    assert_eq!(encode_base64(b"Ma"), "TWE=");
    assert_eq!(encode_base64(b"M"), "TQ==");
}
