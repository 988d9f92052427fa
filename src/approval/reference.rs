//! Reference-number generation.
//!
//! Reference numbers are opaque tokens of the form `HLM-` followed by a
//! fixed number of uppercase base-36 characters, derived from UUIDv4
//! entropy. Collisions are negligible but not assumed away: the engine
//! verifies uniqueness against the store with a bounded retry loop (see
//! [`crate::api`]).

use uuid::Uuid;

/// The prefix carried by every reference number.
pub const REFERENCE_PREFIX: &str = "HLM-";

/// The number of base-36 characters after the prefix.
pub const REFERENCE_TOKEN_LENGTH: usize = 15;

const BASE36_ALPHABET: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Generates a fresh reference number.
///
/// Each call draws a new UUIDv4 and encodes its 128 bits into
/// `token_length` base-36 characters. Shorter tokens simply truncate the
/// entropy; a 15-character token keeps roughly 77 bits, which is far more
/// than the record volume of a hostel could ever collide against.
///
/// # Examples
///
/// ```
/// use leave_engine::approval::{REFERENCE_PREFIX, generate_reference_no};
///
/// let reference = generate_reference_no(REFERENCE_PREFIX, 15);
/// assert!(reference.starts_with("HLM-"));
/// assert_eq!(reference.len(), 4 + 15);
/// ```
pub fn generate_reference_no(prefix: &str, token_length: usize) -> String {
    let mut entropy = Uuid::new_v4().as_u128();
    let mut reference = String::with_capacity(prefix.len() + token_length);
    reference.push_str(prefix);

    for _ in 0..token_length {
        let digit = (entropy % 36) as usize;
        reference.push(BASE36_ALPHABET[digit] as char);
        entropy /= 36;
    }

    reference
}
