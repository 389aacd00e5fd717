//! Short opaque identifiers for tickets and lots.

use uuid::Uuid;

/// Number of characters kept from the UUID.
pub const SHORT_ID_LEN: usize = 8;

/// Generate a short identifier from the first characters of a random UUID v4.
pub fn generate_short_id() -> String {
    let mut id = Uuid::new_v4().to_string();
    id.truncate(SHORT_ID_LEN);
    id
}
