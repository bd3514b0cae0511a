//! The bitstream module forms the I/O subsystem for the huffman processor.
//!
//! Everything the codec writes is a sequence of unsigned fields of arbitrary width: a 32 bit
//! magic number, single flag bits and 9 bit symbol values in the tree header, and variable
//! length codes in the body. None of these are byte aligned, so both directions go through
//! a bit queue. Bits are always most significant first within a byte.
//!
//! The reader can be rewound when its source supports seeking. Compression needs that,
//! because it reads the input twice. The writer pads the final partial byte with zero bits
//! only when it is closed.
//!
pub mod bitreader;
pub mod bitwriter;
