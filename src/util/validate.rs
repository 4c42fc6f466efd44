use uuid::Uuid;

/// Parse a dealer id, accepting only the canonical hyphenated textual form
/// (8-4-4-4-12 hex groups). The uuid crate is more permissive than the wire
/// contract, so the shape is checked before parsing.
pub fn parse_canonical_uuid(s: &str) -> Option<Uuid> {
    let bytes = s.as_bytes();
    if bytes.len() != 36 {
        return None;
    }
    for (i, b) in bytes.iter().enumerate() {
        match i {
            8 | 13 | 18 | 23 => {
                if *b != b'-' {
                    return None;
                }
            }
            _ => {
                if !b.is_ascii_hexdigit() {
                    return None;
                }
            }
        }
    }
    Uuid::parse_str(s).ok()
}
