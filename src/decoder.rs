//! The [`Decoder`] a record reader applies to raw field bytes.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use crate::error::{DecodeError, Result};
use crate::{codepage, kamenicky};

/// How the bytes of a data source are turned into UTF-8.
///
/// One decoder is chosen per data source and applied to every field value
/// read from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decoder {
    /// Assume the data is already UTF-8 and pass it through untouched.
    Utf8,
    /// Pass UTF-8 through, reject anything else.
    Utf8Strict,
    /// Windows-1250 (Central European).
    Windows1250,
    /// Kamenický (KEYBCS2), the DOS-era Czech and Slovak code page.
    Kamenicky,
}

impl Decoder {
    /// Every decoder, in declaration order.
    pub const ALL: [Self; 4] = [
        Self::Utf8,
        Self::Utf8Strict,
        Self::Windows1250,
        Self::Kamenicky,
    ];

    /// Decode a raw field value to UTF-8.
    ///
    /// The input is borrowed back whenever it needs no conversion. The code
    /// page decoders leave input that is already valid UTF-8 alone, since it
    /// may have been converted upstream and running it through a single-byte
    /// table again would garble it.
    ///
    /// # Errors
    ///
    /// [`DecodeError::InvalidUtf8`] from [`Decoder::Utf8Strict`] when `input`
    /// is not UTF-8, and [`DecodeError::Transcoding`] if a code page table
    /// rejects the input.
    pub fn decode<'a>(&self, input: &'a [u8]) -> Result<Cow<'a, [u8]>> {
        match self {
            Self::Utf8 => Ok(Cow::Borrowed(input)),
            Self::Utf8Strict => {
                std::str::from_utf8(input)?;
                Ok(Cow::Borrowed(input))
            }
            Self::Windows1250 => {
                if std::str::from_utf8(input).is_ok() {
                    return Ok(Cow::Borrowed(input));
                }
                let text = codepage::windows_1250_to_string(input)?;
                Ok(Cow::Owned(text.into_bytes()))
            }
            Self::Kamenicky => {
                if std::str::from_utf8(input).is_ok() {
                    return Ok(Cow::Borrowed(input));
                }
                Ok(Cow::Owned(kamenicky::to_string(input).into_bytes()))
            }
        }
    }

    /// Canonical name, as accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            Self::Utf8 => "utf-8",
            Self::Utf8Strict => "utf-8-strict",
            Self::Windows1250 => "windows-1250",
            Self::Kamenicky => "kamenicky",
        }
    }
}

impl fmt::Display for Decoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Decoder {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "utf-8" | "utf8" => Ok(Self::Utf8),
            "utf-8-strict" | "utf8-strict" | "strict" => Ok(Self::Utf8Strict),
            "windows-1250" | "cp1250" | "1250" => Ok(Self::Windows1250),
            "kamenicky" | "kamenický" | "cp895" | "895" | "keybcs2" => Ok(Self::Kamenicky),
            _ => Err(DecodeError::UnknownDecoder(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &[&[u8]] = &[
        b"",
        b"plain ascii",
        "Příliš žluťoučký kůň".as_bytes(),
        "╔═╗ ¢£¥".as_bytes(),
        "\u{10FFFF}".as_bytes(),
    ];

    const INVALID: &[&[u8]] = &[
        &[0x80],
        &[b'a', 0xE8, b'b'],
        &[0xC3],             // truncated two-byte sequence
        &[0xC0, 0xAF],       // overlong '/'
        &[0xED, 0xA0, 0x80], // surrogate
        &[0xFF, 0xFE],
    ];

    // ── Utf8 ──────────────────────────────────────────────────────

    #[test]
    fn utf8_is_identity() {
        for input in VALID.iter().chain(INVALID) {
            let out = Decoder::Utf8.decode(input).unwrap();
            assert_eq!(&*out, *input);
            assert!(matches!(out, Cow::Borrowed(_)));
        }
    }

    // ── Utf8Strict ────────────────────────────────────────────────

    #[test]
    fn strict_accepts_valid() {
        for input in VALID {
            let out = Decoder::Utf8Strict.decode(input).unwrap();
            assert_eq!(&*out, *input);
        }
    }

    #[test]
    fn strict_rejects_invalid() {
        for input in INVALID {
            let err = Decoder::Utf8Strict.decode(input).unwrap_err();
            assert!(matches!(err, DecodeError::InvalidUtf8 { .. }), "{input:?}");
        }
    }

    #[test]
    fn strict_reports_offset() {
        let err = Decoder::Utf8Strict.decode(b"abc\xE8def").unwrap_err();
        assert_eq!(err, DecodeError::InvalidUtf8 { valid_up_to: 3 });
    }

    // ── Windows1250 ───────────────────────────────────────────────

    #[test]
    fn cp1250_c_caron() {
        let out = Decoder::Windows1250.decode(&[0xE8]).unwrap();
        assert_eq!(&*out, "č".as_bytes());
    }

    #[test]
    fn cp1250_word() {
        // "kůň"
        let out = Decoder::Windows1250.decode(&[b'k', 0xF9, 0xF2]).unwrap();
        assert_eq!(&*out, "kůň".as_bytes());
    }

    #[test]
    fn cp1250_leaves_utf8_alone() {
        for input in VALID {
            let out = Decoder::Windows1250.decode(input).unwrap();
            assert_eq!(&*out, *input);
            assert!(matches!(out, Cow::Borrowed(_)));
        }
    }

    #[test]
    fn cp1250_output_is_utf8() {
        for input in INVALID {
            let out = Decoder::Windows1250.decode(input).unwrap();
            assert!(std::str::from_utf8(&out).is_ok());
        }
    }

    // ── Kamenicky ─────────────────────────────────────────────────

    #[test]
    fn kamenicky_c_caron() {
        let out = Decoder::Kamenicky.decode(&[0x87]).unwrap();
        assert_eq!(&*out, "č".as_bytes());
    }

    #[test]
    fn kamenicky_word() {
        // "Řež" in Kamenický
        let out = Decoder::Kamenicky.decode(&[0x9E, b'e', 0x91]).unwrap();
        assert_eq!(&*out, "Řež".as_bytes());
    }

    #[test]
    fn kamenicky_leaves_utf8_alone() {
        for input in VALID {
            let out = Decoder::Kamenicky.decode(input).unwrap();
            assert_eq!(&*out, *input);
            assert!(matches!(out, Cow::Borrowed(_)));
        }
    }

    #[test]
    fn kamenicky_repairs_whole_buffer() {
        let (bytes, expected) = kamenicky::tests::interleaved_sample();
        let out = Decoder::Kamenicky.decode(&bytes).unwrap();
        assert_eq!(&*out, expected.as_bytes());
        assert!(matches!(out, Cow::Owned(_)));
    }

    #[test]
    fn kamenicky_single_runtime_byte() {
        for byte in 0x80..=0xFF_u8 {
            let buf = [byte];
            let out = Decoder::Kamenicky.decode(&buf).unwrap();
            let expected = kamenicky::repair(codepage::cp437_char(byte)).to_string();
            assert_eq!(&*out, expected.as_bytes(), "byte {byte:#04X}");
        }
    }

    #[test]
    fn same_bytes_differ_by_code_page() {
        // 0x9E is Ř in Kamenický and ž in Windows-1250
        let kam = Decoder::Kamenicky.decode(&[0x9E]).unwrap();
        let win = Decoder::Windows1250.decode(&[0x9E]).unwrap();
        assert_eq!(&*kam, "Ř".as_bytes());
        assert_eq!(&*win, "ž".as_bytes());
    }

    // ── all decoders ──────────────────────────────────────────────

    #[test]
    fn empty_input() {
        for decoder in Decoder::ALL {
            let out = decoder.decode(&[]).unwrap();
            assert!(out.is_empty(), "{decoder}");
        }
    }

    #[test]
    fn usable_across_threads() {
        let handles: Vec<_> = Decoder::ALL
            .into_iter()
            .map(|decoder| {
                std::thread::spawn(move || decoder.decode(b"abc").map(Cow::into_owned))
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap().unwrap(), b"abc");
        }
    }

    // ── names ─────────────────────────────────────────────────────

    #[test]
    fn name_round_trip() {
        for decoder in Decoder::ALL {
            assert_eq!(decoder.to_string().parse::<Decoder>().unwrap(), decoder);
        }
    }

    #[test]
    fn name_aliases() {
        assert_eq!("UTF8".parse::<Decoder>().unwrap(), Decoder::Utf8);
        assert_eq!("strict".parse::<Decoder>().unwrap(), Decoder::Utf8Strict);
        assert_eq!("CP1250".parse::<Decoder>().unwrap(), Decoder::Windows1250);
        assert_eq!("Kamenický".parse::<Decoder>().unwrap(), Decoder::Kamenicky);
        assert_eq!(" cp895 ".parse::<Decoder>().unwrap(), Decoder::Kamenicky);
        assert_eq!("KEYBCS2".parse::<Decoder>().unwrap(), Decoder::Kamenicky);
    }

    #[test]
    fn name_unknown() {
        let err = "latin-1".parse::<Decoder>().unwrap_err();
        assert_eq!(err, DecodeError::UnknownDecoder("latin-1".into()));
    }
}
