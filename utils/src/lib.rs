//! Helpers shared by the signature benchmark crates.

/// Converts bytes to a lowercase hexadecimal string.
pub fn hex(bytes: &[u8]) -> String {
    let mut hex = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        hex.push_str(&format!("{:02x}", byte));
    }
    hex
}

/// Converts a hexadecimal string to bytes.
///
/// Returns `None` if the string has an odd length or contains a character
/// that is not a hexadecimal digit.
pub fn from_hex(hex: &str) -> Option<Vec<u8>> {
    let hex = hex.as_bytes();
    if hex.len() % 2 != 0 {
        return None;
    }
    hex.chunks(2)
        .map(|pair| {
            let hi = (pair[0] as char).to_digit(16)?;
            let lo = (pair[1] as char).to_digit(16)?;
            Some(((hi << 4) | lo) as u8)
        })
        .collect()
}

/// Converts a hexadecimal string to bytes after stripping whitespace and an
/// optional `0x` prefix.
///
/// Key material and test vectors are often split across lines (or quoted with a
/// prefix) and this lets them be pasted verbatim.
pub fn from_hex_formatted(hex: &str) -> Option<Vec<u8>> {
    let hex: String = hex.chars().filter(|c| !c.is_whitespace()).collect();
    from_hex(hex.strip_prefix("0x").unwrap_or(&hex))
}
