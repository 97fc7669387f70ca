use super::CharCipher;

const ALPHABET_LEN: i64 = 26;

/// How the shift cipher treats a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Upper,
    Lower,
    Other,
}

impl CharClass {
    /// Alphabetic characters outside the two ASCII letter blocks have no
    /// 26-letter range to rotate in, so they classify as `Other`.
    pub fn of(ch: char) -> Self {
        if !ch.is_alphabetic() {
            CharClass::Other
        } else if ch.is_ascii_uppercase() {
            CharClass::Upper
        } else if ch.is_ascii_lowercase() {
            CharClass::Lower
        } else {
            CharClass::Other
        }
    }

    fn range_start(self) -> Option<u8> {
        match self {
            CharClass::Upper => Some(b'A'),
            CharClass::Lower => Some(b'a'),
            CharClass::Other => None,
        }
    }
}

/// Caesar rotation within `A..=Z` and `a..=z`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShiftCipher;

// `offset` must already be reduced into -25..=25.
fn rotate(ch: char, offset: i64) -> char {
    let Some(start) = CharClass::of(ch).range_start() else {
        return ch;
    };
    let pos = ch as i64 - i64::from(start);
    let rotated = (pos + offset).rem_euclid(ALPHABET_LEN);
    char::from(start + rotated as u8)
}

impl CharCipher for ShiftCipher {
    fn encrypt_char(&self, ch: char, key: i64) -> char {
        rotate(ch, key.rem_euclid(ALPHABET_LEN))
    }

    fn decrypt_char(&self, ch: char, key: i64) -> char {
        rotate(ch, -(key.rem_euclid(ALPHABET_LEN)))
    }
}
