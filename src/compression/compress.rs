use std::io::{Cursor, Read, Seek, Write};

use log::{debug, info, trace};

use super::Report;
use crate::bitstream::{bitreader::BitReader, bitwriter::BitWriter};
use crate::error::{HuffError, Result};
use crate::huffman_coding::code_table::CodeTable;
use crate::huffman_coding::tree::HuffTree;
use crate::huffman_coding::{BITS_PER_INT, HUFF_TREE, PSEUDO_EOF};
use crate::tools::freq_count::freqs;
use crate::tools::options::HuffOpts;

/// Compress everything from the current position of `input` to its end. The input is read
/// twice, so it must be seekable; it is rewound to that starting position before the second pass.
pub fn compress<R, W>(opts: &HuffOpts, input: R, output: W) -> Result<Report>
where
    R: Read + Seek,
    W: Write,
{
    let mut br = BitReader::seekable(input, opts.buffer_size)?;
    let mut bw = BitWriter::with_capacity(output, opts.buffer_size);

    // First pass: count, then build the tree and codes from the counts
    let counts = freqs(&mut br)?;
    let bytes_in = br.bits_read() / 8;
    let tree = HuffTree::from_counts(&counts);
    let codes = tree.code_table();
    debug!(
        "Read {} bytes, {} distinct symbols, tree depth {}",
        bytes_in,
        codes.len(),
        tree.depth()
    );
    for (sym, code) in codes.iter() {
        trace!("{:>3} {:>10} {}", sym, counts[sym as usize], code);
    }

    // Header: magic number and tree
    bw.out(BITS_PER_INT, HUFF_TREE)?;
    tree.write_header(&mut bw)?;
    let header_bits = bw.bits_written() - BITS_PER_INT as u64;

    // Second pass: the body
    br.reset()?;
    encode_body(&codes, &mut br, &mut bw)?;
    let total_bits = bw.bits_written();
    bw.close()?;

    let report = Report {
        bytes_in,
        bytes_out: total_bits.div_ceil(8),
        header_bits,
        body_bits: total_bits - header_bits - BITS_PER_INT as u64,
    };
    info!("Compressed: {}", report);
    Ok(report)
}

/// Replace every byte left in the reader with its code, then close the body with the code
/// for PSEUDO_EOF.
pub fn encode_body<R: Read, W: Write>(
    codes: &CodeTable,
    br: &mut BitReader<R>,
    bw: &mut BitWriter<W>,
) -> Result<()> {
    while let Some(byte) = br.byte()? {
        let code = codes
            .get(byte as u16)
            .ok_or(HuffError::InputChanged(byte))?;
        code.write_to(bw)?;
    }
    codes
        .get(PSEUDO_EOF)
        .ok_or_else(|| HuffError::CorruptTree("no PSEUDO_EOF leaf".to_string()))?
        .write_to(bw)?;
    Ok(())
}

/// Compress a byte slice in memory with the default options.
pub fn compress_bytes(data: &[u8]) -> Result<Vec<u8>> {
    let mut packed = Vec::with_capacity(data.len() / 2 + 8);
    compress(&HuffOpts::default(), Cursor::new(data), &mut packed)?;
    Ok(packed)
}
