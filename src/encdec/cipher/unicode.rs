use super::CharCipher;

const SURROGATE_START: u32 = 0xD800;
const SURROGATE_LEN: u32 = 0x800;
const SCALAR_COUNT: i64 = 0x11_0000 - SURROGATE_LEN as i64;

/// Moves every character's code point by the key.
///
/// Code points are counted over the valid scalar values only, so shifts step
/// over the surrogate block and wrap from `U+10FFFF` back to `U+0000`. Away
/// from those two edges this is plain `code point ± key`.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeCipher;

fn to_ordinal(ch: char) -> i64 {
    let cp = ch as u32;
    if cp >= SURROGATE_START {
        i64::from(cp - SURROGATE_LEN)
    } else {
        i64::from(cp)
    }
}

fn from_ordinal(ordinal: i64) -> char {
    let ordinal = ordinal as u32;
    let cp = if ordinal >= SURROGATE_START {
        ordinal + SURROGATE_LEN
    } else {
        ordinal
    };
    // ordinal < SCALAR_COUNT, so cp is always a scalar value
    char::from_u32(cp).unwrap_or(char::REPLACEMENT_CHARACTER)
}

// `offset` must already be reduced into -(SCALAR_COUNT-1)..SCALAR_COUNT.
fn shift(ch: char, offset: i64) -> char {
    from_ordinal((to_ordinal(ch) + offset).rem_euclid(SCALAR_COUNT))
}

impl CharCipher for UnicodeCipher {
    fn encrypt_char(&self, ch: char, key: i64) -> char {
        shift(ch, key.rem_euclid(SCALAR_COUNT))
    }

    fn decrypt_char(&self, ch: char, key: i64) -> char {
        shift(ch, -(key.rem_euclid(SCALAR_COUNT)))
    }
}
