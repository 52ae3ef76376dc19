pub mod securemem {

    /// zero the given slice.
    ///
    /// We assume the compiler won't optimise out the call to this function
    pub fn zero(to_zero: &mut [u8]) {
        // the unsafety of this call is bounded to the existence of the
        // pointer and the accuracy of the length of the array.
        //
        // since to_zero is borrowed for the duration of the call and we
        // use the length (in bytes) of the given slice, this call is safe.
        unsafe { std::ptr::write_bytes(to_zero.as_mut_ptr(), 0, to_zero.len()) }
    }
}

pub mod hex {
    //! simple implementation of hexadecimal encoding and decoding
    //!
    //! this is the rendering used for BIP39 seeds: 2 lowercase symbols
    //! per byte, no separator, no prefix.
    //!
    //! # Example
    //!
    //! ```
    //! use sui_crypto::util::hex::{encode, decode};
    //!
    //! let example = b"some bytes";
    //!
    //! assert!(example.as_ref() == decode(&encode(example)).unwrap().as_slice());
    //! ```
    //!
    use std::{error, fmt, result};

    const ALPHABET: &'static [u8] = b"0123456789abcdef";

    /// hexadecimal decoding potential errors
    #[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
    pub enum Error {
        /// error when a given character is not part of the supported
        /// hexadecimal alphabet. Contains the index of the faulty byte
        UnknownSymbol(usize),
    }
    impl fmt::Display for Error {
        fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
            match self {
                &Error::UnknownSymbol(idx) => {
                    write!(f, "Unknown symbol at byte index {}", idx)
                }
            }
        }
    }
    impl error::Error for Error {}

    pub type Result<T> = result::Result<T, Error>;

    /// encode bytes into an hexadecimal string
    ///
    ///  # Example
    ///
    /// ```
    /// use sui_crypto::util::hex::encode;
    ///
    /// let example = b"some bytes";
    ///
    /// assert_eq!("736f6d65206279746573", encode(example));
    /// ```
    pub fn encode(input: &[u8]) -> String {
        let mut v = Vec::with_capacity(input.len() * 2);
        for &byte in input.iter() {
            v.push(ALPHABET[(byte >> 4) as usize]);
            v.push(ALPHABET[(byte & 0xf) as usize]);
        }

        // the alphabet is pure ASCII
        unsafe { String::from_utf8_unchecked(v) }
    }

    /// decode the given hexadecimal string
    ///
    /// uppercase symbols and ASCII whitespace are accepted here, only
    /// `encode` is restricted to the lowercase alphabet.
    ///
    ///  # Example
    ///
    /// ```
    /// use sui_crypto::util::hex::decode;
    ///
    /// let example = r"736f6d65206279746573";
    ///
    /// assert!(decode(example).is_ok());
    /// ```
    pub fn decode(input: &str) -> Result<Vec<u8>> {
        let mut b = Vec::with_capacity(input.len() / 2);
        let mut modulus = 0;
        let mut buf = 0;

        for (idx, byte) in input.bytes().enumerate() {
            buf <<= 4;

            match byte {
                b'A'..=b'F' => buf |= byte - b'A' + 10,
                b'a'..=b'f' => buf |= byte - b'a' + 10,
                b'0'..=b'9' => buf |= byte - b'0',
                b' ' | b'\r' | b'\n' | b'\t' => {
                    buf >>= 4;
                    continue;
                }
                _ => {
                    return Err(Error::UnknownSymbol(idx));
                }
            }

            modulus += 1;
            if modulus == 2 {
                modulus = 0;
                b.push(buf);
            }
        }

        Ok(b)
    }

}
