//! `dbfdecode` — character decoding for legacy dBASE field values.
//!
//! A record reader extracts raw field bytes from a `.dbf` file and hands
//! them to a [`Decoder`] chosen for that file, getting UTF-8 back. Four
//! decoders are provided:
//!
//! - [`Decoder::Utf8`] passes bytes through untouched
//! - [`Decoder::Utf8Strict`] passes UTF-8 through and rejects anything else
//! - [`Decoder::Windows1250`] transcodes Windows-1250
//! - [`Decoder::Kamenicky`] transcodes the DOS Kamenický code page
//!
//! ```
//! use dbfdecode::Decoder;
//!
//! let decoded = Decoder::Kamenicky.decode(&[0x9E, b'e', 0x91]).unwrap();
//! assert_eq!(&*decoded, "Řež".as_bytes());
//! ```

#![allow(clippy::redundant_pub_crate)]

mod codepage;
mod decoder;
mod error;
pub mod kamenicky;

pub use decoder::Decoder;
pub use error::{DecodeError, Result};
