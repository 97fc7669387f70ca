//! # Cipher Engines
//!
//! Each engine transforms one character at a time; no engine carries state
//! between characters. Whole strings are handled by the provided methods of
//! [`CharCipher`], which map the per-character function over the input in
//! order.

use crate::model::Direction;

pub mod shift;
pub mod unicode;

pub trait CharCipher {
    fn encrypt_char(&self, ch: char, key: i64) -> char;

    fn decrypt_char(&self, ch: char, key: i64) -> char;

    fn encrypt(&self, text: &str, key: i64) -> String {
        text.chars().map(|c| self.encrypt_char(c, key)).collect()
    }

    fn decrypt(&self, text: &str, key: i64) -> String {
        text.chars().map(|c| self.decrypt_char(c, key)).collect()
    }

    fn apply(&self, text: &str, key: i64, direction: Direction) -> String {
        match direction {
            Direction::Encrypt => self.encrypt(text, key),
            Direction::Decrypt => self.decrypt(text, key),
        }
    }
}
