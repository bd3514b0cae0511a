use std::io::Read;

use crate::bitstream::bitreader::BitReader;
use crate::huffman_coding::{ALPH_SIZE, PSEUDO_EOF};

/// Count per symbol, indexed by symbol value. The last slot belongs to PSEUDO_EOF.
pub type Counts = [u64; ALPH_SIZE + 1];

/// Returns a frequency count of every byte left in the reader. PSEUDO_EOF is always counted
/// exactly once, even when there was no data.
pub fn freqs<R: Read>(br: &mut BitReader<R>) -> std::io::Result<Counts> {
    let mut freqs = [0_u64; ALPH_SIZE + 1];
    while let Some(byte) = br.byte()? {
        freqs[byte as usize] += 1;
    }
    freqs[PSEUDO_EOF as usize] = 1;
    Ok(freqs)
}

/// Returns a frequency count of the input data, PSEUDO_EOF included.
#[cfg(test)]
pub(crate) fn freqs_from_slice(data: &[u8]) -> Counts {
    let mut freqs = [0_u64; ALPH_SIZE + 1];
    data.iter().for_each(|&el| freqs[el as usize] += 1);
    freqs[PSEUDO_EOF as usize] = 1;
    freqs
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn empty_input_test() {
        let mut br = BitReader::new(b"".as_slice());
        let counts = freqs(&mut br).unwrap();
        assert_eq!(counts[PSEUDO_EOF as usize], 1);
        assert_eq!(counts.iter().sum::<u64>(), 1);
    }

    #[test]
    fn counts_every_byte_test() {
        let data = "Making a silly test.".as_bytes();
        let mut br = BitReader::with_capacity(data, 4);
        let counts = freqs(&mut br).unwrap();
        assert_eq!(counts[b'l' as usize], 2);
        assert_eq!(counts[b' ' as usize], 3);
        assert_eq!(counts[b'M' as usize], 1);
        assert_eq!(counts[b'q' as usize], 0);
        assert_eq!(counts.iter().sum::<u64>(), data.len() as u64 + 1);
        assert_eq!(counts, freqs_from_slice(data));
    }

    #[test]
    fn full_range_test() {
        let data = (0..=255).collect::<Vec<u8>>();
        let counts = freqs_from_slice(&data);
        assert!(counts.iter().all(|&c| c == 1));
    }
}
