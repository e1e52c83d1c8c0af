use crate::error::DecodingError;
use std::io::{self, BufReader, ErrorKind, Read};

/// A forward-only reader over a byte source, consumed by every type's decoder.
///
/// Each decode owns its cursor exclusively. There is no seeking; reads either
/// yield exactly the requested number of bytes or fail.
pub struct StreamCursor<R> {
    r: R,
    position: usize,
}

impl<R: Read> From<R> for StreamCursor<R> {
    fn from(r: R) -> Self {
        Self { r, position: 0 }
    }
}

impl<R: Read> StreamCursor<BufReader<R>> {
    /// Wraps an unbuffered source, such as a file or socket.
    pub fn buffered(r: R) -> Self {
        Self::from(BufReader::new(r))
    }
}

impl<R: Read> StreamCursor<R> {
    pub fn new(r: R) -> Self {
        Self::from(r)
    }

    /// Count of bytes consumed so far.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn into_inner(self) -> R {
        self.r
    }

    pub fn read_byte(&mut self) -> Result<u8, DecodingError> {
        let [byte] = self.read_array::<1>()?;
        Ok(byte)
    }

    pub fn read_array<const LEN: usize>(&mut self) -> Result<[u8; LEN], DecodingError> {
        let mut buf = [0u8; LEN];
        let start = self.position;
        let got = self.fill(&mut buf)?;
        if got < LEN {
            return Err(DecodingError::UnexpectedEnd {
                position: start,
                needed: LEN,
                got,
            });
        }
        Ok(buf)
    }

    /// Reads exactly `len` bytes.
    ///
    /// `len` frequently comes from untrusted input, so the buffer grows with
    /// the bytes actually read rather than being allocated up front.
    pub fn read_exact(&mut self, len: usize) -> Result<Vec<u8>, DecodingError> {
        let start = self.position;
        let mut buf = vec![];
        let got = (&mut self.r).take(len as u64).read_to_end(&mut buf)?;
        self.position += got;
        if got < len {
            return Err(DecodingError::UnexpectedEnd {
                position: start,
                needed: len,
                got,
            });
        }
        Ok(buf)
    }

    fn fill(&mut self, buf: &mut [u8]) -> Result<usize, io::Error> {
        let mut filled = 0;
        while filled < buf.len() {
            match self.r.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(r_len) => filled += r_len,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
        self.position += filled;
        Ok(filled)
    }
}
