// ============================
// crates/backend-lib/src/naming.rs
// ============================
//! Room-name derivation: random group room codes and canonical
//! peer-to-peer room names.
use rand::Rng;

/// Length of a generated group room code
pub const ROOM_CODE_LEN: usize = 10;

/// Base-36 alphabet, uppercased
const ROOM_CODE_ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Prefix of every peer-to-peer room name
pub const P2P_PREFIX: &str = "p2p";

/// Separator between the prefix and the two wallet fragments
pub const P2P_DELIMITER: char = '_';

/// Characters kept from each wallet in a peer-to-peer room name
const P2P_WALLET_CHARS: usize = 8;

/// Generate a fresh group room code such as `K3ZQ09XH2A`.
///
/// No uniqueness check is made against live rooms; 36^10 codes make
/// collisions negligible.
pub fn generate_room_code() -> String {
    let mut rng = rand::rng();
    (0..ROOM_CODE_LEN)
        .map(|_| ROOM_CODE_ALPHABET[rng.random_range(0..ROOM_CODE_ALPHABET.len())] as char)
        .collect()
}

/// Whether `code` has the shape produced by [`generate_room_code`]
pub fn is_room_code(code: &str) -> bool {
    code.len() == ROOM_CODE_LEN && code.bytes().all(|b| ROOM_CODE_ALPHABET.contains(&b))
}

/// Canonical room name for a pair of wallets.
///
/// Order independent: both call legs derive the same name, which is how they
/// meet in the same media room. Wallets sharing their first eight characters
/// (case-insensitively) collide.
pub fn p2p_room_name(wallet_a: &str, wallet_b: &str) -> String {
    let a = wallet_a.to_lowercase();
    let b = wallet_b.to_lowercase();
    let (first, second) = if a <= b { (a, b) } else { (b, a) };

    format!(
        "{P2P_PREFIX}{P2P_DELIMITER}{}{P2P_DELIMITER}{}",
        prefix_chars(&first, P2P_WALLET_CHARS),
        prefix_chars(&second, P2P_WALLET_CHARS)
    )
}

/// First `n` characters of `s`, or all of it when shorter
pub fn prefix_chars(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_code_format() {
        for _ in 0..100 {
            let code = generate_room_code();
            assert_eq!(code.len(), ROOM_CODE_LEN);
            assert!(is_room_code(&code), "unexpected code {code}");
        }
    }

    #[test]
    fn test_room_codes_differ() {
        assert_ne!(generate_room_code(), generate_room_code());
    }

    #[test]
    fn test_is_room_code() {
        assert!(is_room_code("ABCDEF1234"));
        assert!(!is_room_code("abcdef1234"));
        assert!(!is_room_code("ABC"));
        assert!(!is_room_code("ABCDEF-234"));
    }

    #[test]
    fn test_p2p_name_is_order_independent() {
        let a = "0xAlice1234";
        let b = "0xBob5678";
        assert_eq!(p2p_room_name(a, b), p2p_room_name(b, a));
        assert_eq!(p2p_room_name(a, b), "p2p_0xalice1_0xbob567");
    }

    #[test]
    fn test_p2p_name_ignores_case() {
        assert_eq!(
            p2p_room_name("0xABCDEF99", "0x12345678"),
            p2p_room_name("0xabcdef99", "0X12345678")
        );
    }

    #[test]
    fn test_p2p_name_self_call() {
        let name = p2p_room_name("0xSelf0000", "0xSelf0000");
        assert_eq!(name, "p2p_0xself00_0xself00");
        assert_eq!(name, p2p_room_name("0xSelf0000", "0xSelf0000"));
    }

    #[test]
    fn test_p2p_name_short_wallets() {
        assert_eq!(p2p_room_name("b", "a"), "p2p_a_b");
    }

    #[test]
    fn test_p2p_name_shared_prefix_collides() {
        assert_eq!(
            p2p_room_name("0x123456AA", "0xffff0000"),
            p2p_room_name("0x123456BB", "0xffff0000")
        );
    }

    #[test]
    fn test_prefix_chars() {
        assert_eq!(prefix_chars("0x12345678", 8), "0x123456");
        assert_eq!(prefix_chars("abc", 8), "abc");
        assert_eq!(prefix_chars("ééééééééé", 8), "éééééééé");
    }
}
