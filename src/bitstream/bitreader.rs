//! BitReader: reads a packed bitstream, most significant bit first.
//!
//! NOTE: This module can read from any I/O source that supports the read() call. Sources that
//! also support seek() can be rewound with reset(), back to where reading started.
//!
use std::io::{self, Read, Seek, SeekFrom};

pub(crate) const BUFFER_SIZE: usize = 1024 * 1024;

/// Reads a packed bitstream from any byte source.
#[derive(Debug)]
pub struct BitReader<R> {
    buffer: Vec<u8>,
    capacity: usize,
    cursor: usize,
    bit_index: u8,
    bits_read: u64,
    /// Source offset that reset() returns to.
    origin: u64,
    source: R,
}

impl<R: Read> BitReader<R> {
    /// Creates a new BitReader (with a 1Mbyte buffer).
    pub fn new(source: R) -> Self {
        Self::with_capacity(source, BUFFER_SIZE)
    }

    /// Creates a new BitReader that reads up to `capacity` bytes from the source at a time.
    pub fn with_capacity(source: R, capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            buffer: Vec::with_capacity(capacity),
            capacity,
            cursor: 0,
            bit_index: 0,
            bits_read: 0,
            origin: 0,
            source,
        }
    }

    /// Check (and refill) buffer. Returns true if we have data, false if there is no more.
    fn have_data(&mut self) -> io::Result<bool> {
        // Only try to read more data when the whole buffer has been consumed
        if self.cursor < self.buffer.len() {
            return Ok(true);
        }
        self.buffer.resize(self.capacity, 0);
        let size = loop {
            match self.source.read(&mut self.buffer) {
                Ok(size) => break size,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    self.buffer.clear();
                    self.cursor = 0;
                    return Err(e);
                }
            }
        };
        // Adjust the buffer if we read less than the buffer size
        self.buffer.truncate(size);
        self.cursor = 0;
        self.bit_index = 0;
        Ok(size > 0)
    }

    /// Return the next bit (1 or 0), or None if there is no more data to read.
    pub fn bit(&mut self) -> io::Result<Option<u32>> {
        self.bint(1)
    }

    /// Return the next n bits (n <= 32) as an unsigned value, or None if the stream ends
    /// before n bits could be read.
    pub fn bint(&mut self, n: u8) -> io::Result<Option<u32>> {
        debug_assert!(n <= 32, "bint reads at most 32 bits, asked for {}", n);
        let mut result = 0_u32;
        let mut needed = n;

        while needed > 0 {
            // A fresh byte is needed whenever we sit on a byte boundary
            if self.bit_index == 0 && !self.have_data()? {
                return Ok(None);
            }
            let available = 8 - self.bit_index;
            let take = needed.min(available);

            // Grab `take` bits starting at bit_index, counted from the top of the byte
            let byte = self.buffer[self.cursor];
            let chunk = (byte >> (available - take)) & (0xff_u8 >> (8 - take));
            result = ((result as u64) << take) as u32 | chunk as u32;

            self.bit_index += take;
            self.bits_read += take as u64;
            needed -= take;
            if self.bit_index == 8 {
                self.bit_index = 0;
                self.cursor += 1;
            }
        }
        Ok(Some(result))
    }

    /// Returns a byte, or None if there is no more data to read. This is a convenience
    /// function, and calls bint(8).
    pub fn byte(&mut self) -> io::Result<Option<u8>> {
        Ok(self.bint(8)?.map(|byte| byte as u8))
    }

    /// Number of bits consumed since creation or the last reset.
    pub fn bits_read(&self) -> u64 {
        self.bits_read
    }

    /// Debugging function. Report current position as [bytes.bits] consumed.
    pub fn loc(&self) -> String {
        format!("[{}.{}]", self.bits_read / 8, self.bits_read % 8)
    }
}

impl<R: Read + Seek> BitReader<R> {
    /// Creates a BitReader whose reset() returns to the source's current position rather
    /// than to its first byte.
    pub fn seekable(mut source: R, capacity: usize) -> io::Result<Self> {
        let origin = source.stream_position()?;
        let mut br = Self::with_capacity(source, capacity);
        br.origin = origin;
        Ok(br)
    }

    /// Rewind the source to where reading started and drop anything buffered.
    pub fn reset(&mut self) -> io::Result<()> {
        self.source.seek(SeekFrom::Start(self.origin))?;
        self.buffer.clear();
        self.cursor = 0;
        self.bit_index = 0;
        self.bits_read = 0;
        Ok(())
    }
}
