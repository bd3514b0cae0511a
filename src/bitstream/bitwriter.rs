use std::io::{self, Write};

use super::bitreader::BUFFER_SIZE;

/// Writes a packed bitstream, most significant bit first. Bits collect in a queue, full bytes
/// move to an output buffer, and the buffer is handed to the writer whenever it fills up.
pub struct BitWriter<W: Write> {
    /// Output buffer used to collect whole bytes before they are written.
    output: Vec<u8>,
    /// Size at which the output buffer is drained to the writer.
    capacity: usize,
    /// Private queue to hold bits that are waiting to be put as bytes into the output buffer.
    queue: u64,
    /// Count of valid bits in the queue.
    q_bits: u8,
    /// Total bits handed to out() so far, excluding padding.
    bits_written: u64,
    /// Handle to the output stream
    writer: W,
}

impl<W: Write> BitWriter<W> {
    /// Create a new BitWriter with a 1Mbyte output buffer.
    pub fn new(writer: W) -> Self {
        Self::with_capacity(writer, BUFFER_SIZE)
    }

    /// Create a new BitWriter that drains to the writer every `capacity` bytes.
    pub fn with_capacity(writer: W, capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            output: Vec::with_capacity(capacity),
            capacity,
            queue: 0,
            q_bits: 0,
            bits_written: 0,
            writer,
        }
    }

    /// Move every full byte from the queue into the output buffer, then drain the buffer
    /// if it has reached capacity.
    fn push_queue(&mut self) -> io::Result<()> {
        while self.q_bits > 7 {
            let byte = (self.queue >> (self.q_bits - 8)) as u8;
            self.output.push(byte); //push the packed byte out
            self.q_bits -= 8; //adjust the count of bits left in the queue
        }
        if self.output.len() >= self.capacity {
            self.writer.write_all(&self.output)?;
            self.output.clear();
        }
        Ok(())
    }

    /// Put the low `n` bits of `data` (n <= 32) on the stream.
    pub fn out(&mut self, n: u8, data: u32) -> io::Result<()> {
        debug_assert!(n <= 32, "out writes at most 32 bits, asked for {}", n);
        // At most 7 bits wait in the queue between calls, so 32 more always fit
        self.queue <<= n;
        self.queue |= data as u64 & ((1_u64 << n) - 1);
        self.q_bits += n;
        self.bits_written += n as u64;
        self.push_queue()
    }

    /// Put a byte on the stream.
    pub fn out8(&mut self, data: u8) -> io::Result<()> {
        self.out(8, data as u32)
    }

    /// Number of bits written so far, excluding the final padding.
    pub fn bits_written(&self) -> u64 {
        self.bits_written
    }

    /// Flushes the remaining bits (1-7) from the queue, padding with 0s in the least
    /// significant bits, writes out everything still buffered and flushes the writer.
    /// Returns the writer.
    pub fn close(mut self) -> io::Result<W> {
        if self.q_bits > 0 {
            let pad = 8 - self.q_bits;
            self.queue <<= pad; //pad the queue with zeros
            self.q_bits += pad;
        }
        while self.q_bits > 7 {
            let byte = (self.queue >> (self.q_bits - 8)) as u8;
            self.output.push(byte);
            self.q_bits -= 8;
        }
        self.writer.write_all(&self.output)?;
        self.output.clear();
        self.writer.flush()?;
        Ok(self.writer)
    }
}
