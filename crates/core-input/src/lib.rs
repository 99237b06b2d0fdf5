//! Blocking byte input.
//!
//! Raw mode delivers each keystroke as one or more bytes on stdin. The viewer
//! consumes them one at a time; the read is the only place the event loop
//! blocks. End of input is reported as `UnexpectedEof` so the loop treats it
//! like any other read failure.

use std::io::{self, Read};

/// One byte at a time, blocking until a byte is available.
pub trait ByteSource {
    fn read_byte(&mut self) -> io::Result<u8>;
}

/// `ByteSource` over any reader (stdin in production, slices in tests).
#[derive(Debug)]
pub struct ReaderSource<R> {
    inner: R,
}

impl<R: Read> ReaderSource<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }
}

impl ReaderSource<io::Stdin> {
    pub fn stdin() -> Self {
        Self::new(io::stdin())
    }
}

impl<R: Read> ByteSource for ReaderSource<R> {
    fn read_byte(&mut self) -> io::Result<u8> {
        let mut buf = [0u8; 1];
        loop {
            match self.inner.read(&mut buf) {
                Ok(0) => {
                    tracing::debug!(target: "input", "input_eof");
                    return Err(io::Error::new(
                        io::ErrorKind::UnexpectedEof,
                        "input closed",
                    ));
                }
                Ok(_) => {
                    tracing::trace!(target: "input", byte = buf[0], "byte_read");
                    return Ok(buf[0]);
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }
}

impl<S: ByteSource + ?Sized> ByteSource for &mut S {
    fn read_byte(&mut self) -> io::Result<u8> {
        (**self).read_byte()
    }
}
