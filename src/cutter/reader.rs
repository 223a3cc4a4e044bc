use std::io::{self, ErrorKind, Read};

/// Read from `reader` until `buf` is full or the stream ends.
///
/// Returns the number of bytes placed in `buf`. A count smaller than
/// `buf.len()` means end-of-stream was reached, which is not an error.
pub fn fill_buffer<R: Read>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}
