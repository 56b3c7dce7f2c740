//! Caesar rotation used to display cracked passwords.

/// Shift applied when a cracked password is shown in the dashboard.
pub const DISPLAY_SHIFT: i32 = 3;

/// Rotate ASCII letters by `shift` places, preserving case.
/// Everything else passes through unchanged.
pub fn caesar_shift(text: &str, shift: i32) -> String {
    let shift = shift.rem_euclid(26) as u8;
    text.chars()
        .map(|c| {
            if c.is_ascii_alphabetic() {
                let base = if c.is_ascii_uppercase() { b'A' } else { b'a' };
                ((c as u8 - base + shift) % 26 + base) as char
            } else {
                c
            }
        })
        .collect()
}
