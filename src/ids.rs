// src/ids.rs
//! Random identifiers: UUID v4 strings and raw random bytes

use rand::Rng;
use uuid::Uuid;

/// Length of a hyphenated UUID string
pub const UUID_LEN: usize = 36;

/// Fresh random (version 4) UUID in lowercase hyphenated form,
/// `xxxxxxxx-xxxx-4xxx-yxxx-xxxxxxxxxxxx` with `y` in `8..=b`.
pub fn random_uuid() -> String {
    Uuid::new_v4().hyphenated().to_string()
}

/// Fill `buf` with random bytes and hand it back
pub fn fill_random(buf: &mut [u8]) -> &mut [u8] {
    rand::rng().fill(&mut *buf);
    buf
}

/// True for a random (version 4, RFC 4122 variant) UUID written in
/// lowercase hyphenated form
pub fn is_uuid_v4(value: &str) -> bool {
    match Uuid::try_parse(value) {
        Ok(uuid) => {
            uuid.get_version_num() == 4
                && uuid.get_variant() == uuid::Variant::RFC4122
                && value == uuid.hyphenated().to_string()
        }
        Err(_) => false,
    }
}
