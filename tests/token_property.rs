//! Property-based tests for the session token codec
//!
//! Uses proptest to generate random identities, tamper positions, and
//! key pairs, and verifies the properties the session model leans on:
//! a token verifies exactly as issued, and nothing derived from it by
//! mutation, truncation, or re-keying does.

use proptest::prelude::*;
use uuid::Uuid;

use taskdeck::auth::sessions::SessionCodec;

const TEST_SECRET: &str = "property-test-secret";

/// Characters a tampered token byte may be replaced with.
const BASE64URL: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

proptest! {
    #[test]
    fn issued_tokens_verify_and_round_trip(
        name in ".{0,32}",
        email in ".{0,32}",
        bytes in any::<[u8; 16]>(),
    ) {
        let codec = SessionCodec::new(TEST_SECRET);
        let user_id = Uuid::from_bytes(bytes);

        let issued = codec.issue(user_id, &name, &email).unwrap();
        let claims = codec.verify(&issued.token).expect("fresh token verifies");

        prop_assert_eq!(claims.sub, user_id.to_string());
        prop_assert_eq!(claims.name, name);
        prop_assert_eq!(claims.email, email);
        prop_assert_eq!(claims.exp, issued.expires_at.timestamp());
    }

    #[test]
    fn changing_any_signed_character_is_rejected(
        index_seed in any::<usize>(),
        replacement_seed in any::<usize>(),
    ) {
        let codec = SessionCodec::new(TEST_SECRET);
        let issued = codec
            .issue(Uuid::new_v4(), "Ada", "ada@example.com")
            .unwrap();
        let token = issued.token;

        // The signature covers the "header.payload" text, so changing
        // any character before the final dot must invalidate it.
        let signed_region = token.rfind('.').unwrap();
        let mut index = index_seed % signed_region;
        if token.as_bytes()[index] == b'.' {
            index += 1;
        }

        let original = token.as_bytes()[index];
        let mut replacement = BASE64URL[replacement_seed % BASE64URL.len()];
        if replacement == original {
            replacement = if original == b'A' { b'B' } else { b'A' };
        }

        let mut tampered = token.into_bytes();
        tampered[index] = replacement;
        let tampered = String::from_utf8(tampered).unwrap();

        prop_assert!(codec.verify(&tampered).is_none());
    }

    #[test]
    fn tokens_never_verify_under_a_different_key(
        secret_a in "[a-z0-9]{1,32}",
        secret_b in "[a-z0-9]{1,32}",
        bytes in any::<[u8; 16]>(),
    ) {
        prop_assume!(secret_a != secret_b);

        let issued = SessionCodec::new(&secret_a)
            .issue(Uuid::from_bytes(bytes), "Ada", "ada@example.com")
            .unwrap();

        prop_assert!(SessionCodec::new(&secret_b).verify(&issued.token).is_none());
    }

    #[test]
    fn truncated_tokens_are_rejected(cut_seed in any::<usize>()) {
        let codec = SessionCodec::new(TEST_SECRET);
        let issued = codec
            .issue(Uuid::new_v4(), "Ada", "ada@example.com")
            .unwrap();
        let token = issued.token;

        let cut = cut_seed % token.len();
        prop_assert!(codec.verify(&token[..cut]).is_none());
    }
}
