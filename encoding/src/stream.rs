//! Byte sources and sinks for the codec.
//!
//! The readers and writers of this workspace only require
//! [`Read`], [`Write`] and [`Seek`].
//! [`ByteStream`] adds the two capabilities used by the file layer:
//! the total length of the stream and,
//! for in-memory streams, direct access to the underlying bytes.

use std::fs::{File, OpenOptions};
use std::io::{self, Cursor, Read, Seek, SeekFrom, Write};
use std::path::Path;

/// A seekable byte stream which can be both read and written.
pub trait ByteStream: Read + Write + Seek {
    /// The total number of bytes in the stream.
    fn length(&mut self) -> io::Result<u64>;

    /// The bytes of the stream,
    /// if they are held in memory.
    fn buffer(&self) -> Option<&[u8]>;
}

impl<T: ?Sized + ByteStream> ByteStream for &mut T {
    fn length(&mut self) -> io::Result<u64> {
        (**self).length()
    }

    fn buffer(&self) -> Option<&[u8]> {
        (**self).buffer()
    }
}

/// An owning in-memory stream which grows as it is written to.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct MemoryStream {
    inner: Cursor<Vec<u8>>,
}

impl MemoryStream {
    /// Create a new empty stream.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a stream over the given bytes,
    /// positioned at the start.
    pub fn from_vec(data: Vec<u8>) -> Self {
        MemoryStream {
            inner: Cursor::new(data),
        }
    }

    /// The current position in the stream.
    pub fn position(&self) -> u64 {
        self.inner.position()
    }

    /// Take the bytes out of the stream.
    pub fn into_inner(self) -> Vec<u8> {
        self.inner.into_inner()
    }
}

impl From<Vec<u8>> for MemoryStream {
    fn from(data: Vec<u8>) -> Self {
        MemoryStream::from_vec(data)
    }
}

impl Read for MemoryStream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.inner.read(buf)
    }
}

impl Write for MemoryStream {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Seek for MemoryStream {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        self.inner.seek(pos)
    }
}

impl ByteStream for MemoryStream {
    fn length(&mut self) -> io::Result<u64> {
        Ok(self.inner.get_ref().len() as u64)
    }

    fn buffer(&self) -> Option<&[u8]> {
        Some(self.inner.get_ref())
    }
}

/// A non-owning stream over a caller-provided buffer.
///
/// The stream never grows:
/// writing past the end of the buffer fails with [`io::ErrorKind::WriteZero`].
#[derive(Debug)]
pub struct SliceStream<'a> {
    inner: Cursor<&'a mut [u8]>,
}

impl<'a> SliceStream<'a> {
    /// Create a stream over the given buffer, positioned at the start.
    pub fn new(buffer: &'a mut [u8]) -> Self {
        SliceStream {
            inner: Cursor::new(buffer),
        }
    }

    /// The current position in the stream.
    pub fn position(&self) -> u64 {
        self.inner.position()
    }
}

impl Read for SliceStream<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.inner.read(buf)
    }
}

impl Write for SliceStream<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Seek for SliceStream<'_> {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        self.inner.seek(pos)
    }
}

impl ByteStream for SliceStream<'_> {
    fn length(&mut self) -> io::Result<u64> {
        Ok(self.inner.get_ref().len() as u64)
    }

    fn buffer(&self) -> Option<&[u8]> {
        Some(self.inner.get_ref())
    }
}

/// A stream backed by a file handle.
#[derive(Debug)]
pub struct FileStream {
    file: File,
}

impl FileStream {
    /// Open an existing file for reading and writing.
    pub fn open<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let file = OpenOptions::new().read(true).write(true).open(path)?;
        Ok(FileStream { file })
    }

    /// Create a file, truncating it if it already exists.
    pub fn create<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)?;
        Ok(FileStream { file })
    }

    /// Take the underlying file handle.
    pub fn into_inner(self) -> File {
        self.file
    }
}

impl From<File> for FileStream {
    fn from(file: File) -> Self {
        FileStream { file }
    }
}

impl Read for FileStream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.file.read(buf)
    }
}

impl Write for FileStream {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.file.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}

impl Seek for FileStream {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        self.file.seek(pos)
    }
}

impl ByteStream for FileStream {
    fn length(&mut self) -> io::Result<u64> {
        Ok(self.file.metadata()?.len())
    }

    fn buffer(&self) -> Option<&[u8]> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_stream_grows() {
        let mut stream = MemoryStream::new();
        stream.write_all(b"DICM").unwrap();
        stream.write_all(&[0; 4]).unwrap();
        assert_eq!(stream.length().unwrap(), 8);
        assert_eq!(stream.buffer(), Some(&b"DICM\0\0\0\0"[..]));

        stream.seek(SeekFrom::Start(0)).unwrap();
        let mut magic = [0u8; 4];
        stream.read_exact(&mut magic).unwrap();
        assert_eq!(&magic, b"DICM");
    }

    #[test]
    fn slice_stream_refuses_to_grow() {
        let mut storage = [0u8; 6];
        let mut stream = SliceStream::new(&mut storage);
        stream.write_all(b"1.2").unwrap();
        let err = stream.write_all(b"3.4.5").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::WriteZero);
        assert_eq!(stream.length().unwrap(), 6);
        drop(stream);
        assert_eq!(&storage[..3], b"1.2");
    }
}
