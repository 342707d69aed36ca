//! Byte-oriented console the `.` and `,` instructions talk to

use std::io::{self, Read, Stdin, Stdout, Write};

/// Console interface
pub trait Console {
    /// Read one byte, [`None`] on end of stream
    fn read_byte(&mut self) -> io::Result<Option<u8>>;

    /// Write one byte, visible immediately
    fn write_byte(&mut self, byte: u8) -> io::Result<()>;
}

/// [`Console`] over a reader and a writer
#[derive(Debug)]
pub struct IoConsole<R, W> {
    input: R,
    output: W,
}

impl<R, W> IoConsole<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the reader and writer
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Writer, for inspecting what the program printed so far
    pub fn output(&self) -> &W {
        &self.output
    }
}

impl IoConsole<Stdin, Stdout> {
    /// Process standard input and output
    pub fn stdio() -> Self {
        Self::new(io::stdin(), io::stdout())
    }
}

impl<R: Read, W: Write> Console for IoConsole<R, W> {
    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        let mut byte = 0;
        loop {
            match self.input.read(core::slice::from_mut(&mut byte)) {
                Ok(0) => break Ok(None),
                Ok(_) => break Ok(Some(byte)),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => (),
                Err(e) => break Err(e),
            }
        }
    }

    fn write_byte(&mut self, byte: u8) -> io::Result<()> {
        self.output.write_all(&[byte])?;
        self.output.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_until_end_of_stream() {
        let mut console = IoConsole::new(&b"ab"[..], Vec::new());
        assert_eq!(console.read_byte().unwrap(), Some(b'a'));
        assert_eq!(console.read_byte().unwrap(), Some(b'b'));
        assert_eq!(console.read_byte().unwrap(), None);
        assert_eq!(console.read_byte().unwrap(), None);
    }

    #[test]
    fn writes_each_byte() {
        let mut console = IoConsole::new(io::empty(), Vec::new());
        console.write_byte(b'h').unwrap();
        console.write_byte(b'i').unwrap();
        assert_eq!(console.output(), b"hi");
        let (_, output) = console.into_inner();
        assert_eq!(output, b"hi");
    }

    #[test]
    fn write_failure_surfaces() {
        let mut full = [0_u8; 0];
        let mut console = IoConsole::new(io::empty(), &mut full[..]);
        assert_eq!(console.write_byte(b'x').unwrap_err().kind(), io::ErrorKind::WriteZero);
    }
}
