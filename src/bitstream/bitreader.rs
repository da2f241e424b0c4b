//! BitReader: walks a packed byte buffer one bit at a time, most significant bit first.
//!
//! The trailing padding bits of the last byte are never returned.

/// Reads bits from a borrowed byte buffer.
#[derive(Debug)]
pub struct BitReader<'a> {
    buffer: &'a [u8],
    cursor: usize,
    bit_index: usize,
    /// Number of readable bits (total bits minus padding)
    limit: usize,
}

impl<'a> BitReader<'a> {
    /// Creates a new BitReader. Returns None if `padding` is more than the buffer holds.
    pub fn new(buffer: &'a [u8], padding: usize) -> Option<Self> {
        let limit = (buffer.len() * 8).checked_sub(padding)?;
        Some(Self {
            buffer,
            cursor: 0,
            bit_index: 0,
            limit,
        })
    }

    /// Position in bits from the start of the buffer.
    fn bit_pos(&self) -> usize {
        self.cursor * 8 + self.bit_index
    }

    /// Bits left before the padding.
    pub fn remaining(&self) -> usize {
        self.limit - self.bit_pos()
    }

    /// Return bit as Option<usize> (1 or 0), or None if there is no more data to read
    pub fn bit(&mut self) -> Option<usize> {
        if self.bit_pos() >= self.limit {
            return None;
        }
        let bit = (self.buffer[self.cursor] >> (7 - self.bit_index)) & 1;
        self.bit_index += 1;
        if self.bit_index == 8 {
            self.bit_index = 0;
            self.cursor += 1;
        }
        Some(bit as usize)
    }

    /// Return a bit as the character '0' or '1'
    pub fn char_bit(&mut self) -> Option<char> {
        self.bit().map(|b| if b == 1 { '1' } else { '0' })
    }

    /// Debugging function to return the number of bytes.bits read so far
    pub fn loc(&self) -> String {
        format!("[{}.{}]", self.cursor, self.bit_index)
    }
}

impl Iterator for BitReader<'_> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        self.char_bit()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining(), Some(self.remaining()))
    }
}

#[cfg(test)]
mod test {
    use super::BitReader;

    #[test]
    fn basic_test() {
        let x = [0b10000001_u8];
        let mut br = BitReader::new(&x, 0).unwrap();
        assert_eq!(br.bit(), Some(1));
        assert_eq!(br.bit(), Some(0));
        assert_eq!(br.bit(), Some(0));
        assert_eq!(br.bit(), Some(0));
        assert_eq!(br.bit(), Some(0));
        assert_eq!(br.bit(), Some(0));
        assert_eq!(br.bit(), Some(0));
        assert_eq!(br.bit(), Some(1));
        assert_eq!(br.bit(), None);
    }

    #[test]
    fn padding_test() {
        let x = [0xff_u8, 0b1010_0000];
        let br = BitReader::new(&x, 4).unwrap();
        assert_eq!(br.remaining(), 12);
        assert_eq!(br.collect::<String>(), "111111111010");
    }

    #[test]
    fn too_much_padding_test() {
        assert!(BitReader::new(&[], 3).is_none());
        assert!(BitReader::new(&[0], 9).is_none());
        assert!(BitReader::new(&[], 0).is_some());
    }

    #[test]
    fn bit_then_iterate_test() {
        let x = [0b1100_1010_u8];
        let mut br = BitReader::new(&x, 2).unwrap();
        assert_eq!(br.bit(), Some(1));
        assert_eq!(br.remaining(), 5);
        assert_eq!(br.char_bit(), Some('1'));
        assert_eq!(br.collect::<String>(), "0010");
    }

    #[test]
    fn loc_test() {
        let x = "Hello".as_bytes();
        let mut br = BitReader::new(x, 0).unwrap();
        for _ in 0..11 {
            br.bit();
        }
        assert_eq!(br.loc(), "[1.3]");
    }
}
