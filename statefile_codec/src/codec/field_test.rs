#[cfg(test)]
mod test {
    use crate::codec::{DeserField, FieldCodec, Mode, SerField};
    use crate::error::CodecError;
    use anyhow::Result;
    use std::fmt::Debug;
    use std::io::{self, Cursor, Write};
    use std::mem;

    /// Sink that accepts at most `cap` bytes, then reports zero-length
    /// transfers, the way an exhausted byte sink does.
    struct CappedSink {
        buf: Vec<u8>,
        cap: usize,
    }
    impl CappedSink {
        fn new(cap: usize) -> Self {
            Self { buf: vec![], cap }
        }
    }
    impl Write for CappedSink {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            let take = buf.len().min(self.cap - self.buf.len());
            self.buf.extend_from_slice(&buf[..take]);
            Ok(take)
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn verify_scalar<T>(val: T) -> Result<()>
    where
        T: FieldCodec + Default + PartialEq + Debug,
    {
        let mut stream: Vec<u8> = vec![];
        let w_len = val.ser_field(&mut stream, "ignored in binary mode", Mode::Binary)?;
        assert_eq!(mem::size_of::<T>(), *w_len);
        assert_eq!(stream.len(), *w_len);

        let mut out = T::default();
        let r_len = out.deser_field(&mut Cursor::new(&stream))?;
        assert_eq!(*w_len, *r_len);
        assert_eq!(val, out);
        Ok(())
    }

    #[test]
    fn scalar_round_trip() -> Result<()> {
        verify_scalar(0u8)?;
        verify_scalar(u8::MAX)?;
        verify_scalar(0x1234u16)?;
        verify_scalar(0x1234_5678u32)?;
        verify_scalar(0x1234_5678_9abc_def0u64)?;
        verify_scalar(u128::MAX)?;
        verify_scalar(usize::MAX)?;
        verify_scalar(-5i8)?;
        verify_scalar(-5i32)?;
        verify_scalar(i64::MIN)?;
        verify_scalar(i128::MIN)?;
        verify_scalar(isize::MAX)?;
        verify_scalar(-0.25f32)?;
        verify_scalar(3.5f64)?;
        Ok(())
    }

    #[test]
    fn scalar_text_default_line() -> Result<()> {
        let mut stream: Vec<u8> = vec![];
        let w_len = 7u32.ser_field(&mut stream, "count", Mode::Text)?;
        assert_eq!(b"count = 7\n".as_slice(), &stream[..]);
        assert_eq!(stream.len(), *w_len);
        Ok(())
    }

    #[test]
    fn scalar_text_template_substitution() -> Result<()> {
        let mut stream: Vec<u8> = vec![];
        let w_len = 0.5f64.ser_field(&mut stream, "rate: {}", Mode::Text)?;
        assert_eq!(b"rate: 0.5".as_slice(), &stream[..]);
        assert_eq!(stream.len(), *w_len);
        Ok(())
    }

    #[test]
    fn text_empty_directive_writes_nothing() -> Result<()> {
        let mut stream: Vec<u8> = vec![];
        let w_len = 7u32.ser_field(&mut stream, "", Mode::Text)?;
        assert_eq!(0, *w_len);
        assert!(stream.is_empty());
        Ok(())
    }

    #[test]
    fn text_multiple_markers_rejected() {
        let mut stream: Vec<u8> = vec![];
        let err = 7u32
            .ser_field(&mut stream, "{} and then {}", Mode::Text)
            .unwrap_err();
        assert_eq!(
            Some(&CodecError::TemplateFormat {
                directive: String::from("{} and then {}"),
            }),
            err.downcast_ref::<CodecError>(),
        );
        assert!(stream.is_empty());
    }

    #[test]
    fn read_truncated_source() {
        let stream = 0x1234_5678_9abc_def0u64.to_ne_bytes();

        let mut out = 0u64;
        let err = out.deser_field(&mut Cursor::new(&stream[..5])).unwrap_err();
        assert_eq!(
            Some(&CodecError::TruncatedIo {
                expected: 8,
                actual: 5,
            }),
            err.downcast_ref::<CodecError>(),
        );

        let err = out.deser_field(&mut Cursor::new(&[] as &[u8])).unwrap_err();
        assert_eq!(
            Some(&CodecError::TruncatedIo {
                expected: 8,
                actual: 0,
            }),
            err.downcast_ref::<CodecError>(),
        );
    }

    #[test]
    fn write_truncated_binary_sink() {
        let mut sink = CappedSink::new(3);
        let err = 0u64.ser_field(&mut sink, "", Mode::Binary).unwrap_err();
        assert_eq!(
            Some(&CodecError::TruncatedIo {
                expected: 8,
                actual: 3,
            }),
            err.downcast_ref::<CodecError>(),
        );
        // No rollback: the partial bytes stay in the sink.
        assert_eq!(3, sink.buf.len());
    }

    #[test]
    fn write_truncated_text_sink() {
        // "count = 7\n" is 10 bytes; the check is against the rendered
        // string's own length.
        let mut sink = CappedSink::new(4);
        let err = 7u32.ser_field(&mut sink, "count", Mode::Text).unwrap_err();
        assert_eq!(
            Some(&CodecError::TruncatedIo {
                expected: 10,
                actual: 4,
            }),
            err.downcast_ref::<CodecError>(),
        );
        assert_eq!(b"coun".as_slice(), &sink.buf[..]);
    }

    #[test]
    fn string_binary_layout_and_round_trip() -> Result<()> {
        let val = String::from("hello");
        let mut stream: Vec<u8> = vec![];
        let w_len = val.ser_field(&mut stream, "s", Mode::Binary)?;

        let mut expected: Vec<u8> = vec![];
        expected.extend_from_slice(&5u64.to_ne_bytes());
        expected.extend_from_slice(b"hello");
        assert_eq!(expected, stream);
        assert_eq!(stream.len(), *w_len);

        // Decoding replaces whatever the target held.
        let mut out = String::from("junk");
        let r_len = out.deser_field(&mut Cursor::new(&stream))?;
        assert_eq!(*w_len, *r_len);
        assert_eq!(val, out);
        Ok(())
    }

    #[test]
    fn empty_string_round_trip() -> Result<()> {
        let mut stream: Vec<u8> = vec![];
        let w_len = String::new().ser_field(&mut stream, "s", Mode::Binary)?;
        assert_eq!(mem::size_of::<u64>(), *w_len);

        let mut out = String::from("junk");
        let r_len = out.deser_field(&mut Cursor::new(&stream))?;
        assert_eq!(*w_len, *r_len);
        assert_eq!(String::new(), out);
        Ok(())
    }

    #[test]
    fn string_text_is_one_line() -> Result<()> {
        let val = String::from("resume ok");
        let mut stream: Vec<u8> = vec![];
        val.ser_field(&mut stream, "note", Mode::Text)?;
        assert_eq!(b"note = resume ok\n".as_slice(), &stream[..]);
        Ok(())
    }
}
