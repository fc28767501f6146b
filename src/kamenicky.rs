//! Kamenický (KEYBCS2) decoding.
//!
//! Kamenický is code page 437 with 31 positions reassigned to Czech and
//! Slovak letters. There is no standard table for it, so a buffer is read
//! as code page 437 and every character in [`REPAIRS`] is swapped for the
//! letter Kamenický puts at that byte.
//!
//! Both steps happen in one pass: each byte is transcoded and then
//! classified exactly once, so a letter produced by one repair is never
//! looked at by another.

use crate::codepage::cp437_char;

/// `(kamenicky, cp437)` pairs: the letter that belongs in the output and
/// the code page 437 character decoded from the same byte.
///
/// No `kamenicky` letter appears in the `cp437` column.
pub static REPAIRS: [(char, char); 31] = [
    ('ě', 'ê'), // 0x88
    ('ů', 'û'), // 0x96
    ('ý', 'ÿ'), // 0x98
    ('č', 'ç'), // 0x87
    ('ď', 'â'), // 0x83
    ('ĺ', 'ì'), // 0x8D
    ('ľ', 'î'), // 0x8C
    ('ň', 'ñ'), // 0xA4
    ('ŕ', '¬'), // 0xAA
    ('ř', '⌐'), // 0xA9
    ('š', '¿'), // 0xA8
    ('ť', 'ƒ'), // 0x9F
    ('ž', 'æ'), // 0x91
    ('Á', 'Å'), // 0x8F
    ('Ě', 'ë'), // 0x89
    ('Í', 'ï'), // 0x8B
    ('Ó', 'ò'), // 0x95
    ('Ô', 'º'), // 0xA7
    ('Ú', 'ù'), // 0x97
    ('Ů', 'ª'), // 0xA6
    ('Ý', '¥'), // 0x9D
    ('Č', 'Ç'), // 0x80
    ('Ď', 'à'), // 0x85
    ('Ĺ', 'è'), // 0x8A
    ('Ľ', '£'), // 0x9C
    ('Ň', 'Ñ'), // 0xA5
    ('Ŕ', '½'), // 0xAB
    ('Ř', '₧'), // 0x9E
    ('Š', '¢'), // 0x9B
    ('Ť', 'å'), // 0x86
    ('Ž', 'Æ'), // 0x92
];

/// Map a code page 437 character to its Kamenický counterpart.
///
/// Characters not listed in [`REPAIRS`] are returned unchanged.
pub fn repair(ch: char) -> char {
    // Everything in the cp437 column is outside ASCII.
    if ch.is_ascii() {
        return ch;
    }
    REPAIRS
        .iter()
        .find(|&&(_, cp437)| cp437 == ch)
        .map_or(ch, |&(kamenicky, _)| kamenicky)
}

/// Decode a Kamenický byte slice to a UTF-8 string.
pub(crate) fn to_string(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| repair(cp437_char(b))).collect()
}
