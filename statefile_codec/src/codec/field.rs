use crate::codec::{read_fixed, write_fixed, write_text_field, ReadLen, WriteLen};
use anyhow::Result;
use std::io::{Read, Write};
use std::mem;

/// Selects the wire representation for one `ser_field` call. Reads have no
/// mode: the text rendering is a write-only diagnostic stream.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Mode {
    Binary,
    Text,
}

/// Serializes one field. In [`Mode::Binary`] the label is ignored; in
/// [`Mode::Text`] it is the field's text directive (empty = suppressed,
/// one marker = template, otherwise a `label = value` line).
pub trait SerField {
    fn ser_field<W: Write>(&self, w: &mut W, label: &str, mode: Mode) -> Result<WriteLen>;
}

/// Deserializes one field into `self`, from the binary representation only.
/// Scalars and strings are overwritten; containers absorb decoded elements
/// into whatever they already hold.
pub trait DeserField {
    fn deser_field<R: Read>(&mut self, r: &mut R) -> Result<ReadLen>;
}

/// One round-trippable field type.
pub trait FieldCodec: SerField + DeserField {}
impl<T: SerField + DeserField> FieldCodec for T {}

macro_rules! scalar_field_codec {
    ($($t:ty),* $(,)?) => {
        $(
            impl SerField for $t {
                fn ser_field<W: Write>(&self, w: &mut W, label: &str, mode: Mode) -> Result<WriteLen> {
                    match mode {
                        Mode::Text => write_text_field(w, self, label),
                        Mode::Binary => {
                            let w_len = write_fixed(w, &self.to_ne_bytes())?;
                            Ok(WriteLen(w_len))
                        }
                    }
                }
            }
            impl DeserField for $t {
                fn deser_field<R: Read>(&mut self, r: &mut R) -> Result<ReadLen> {
                    let mut buf = [0u8; mem::size_of::<$t>()];
                    let r_len = read_fixed(r, &mut buf)?;
                    *self = <$t>::from_ne_bytes(buf);
                    Ok(ReadLen(r_len))
                }
            }
        )*
    };
}

scalar_field_codec!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64);

/* A string is a leaf, not a container: binary mode carries a u64 byte count
then the raw UTF-8 bytes; text mode renders the whole value as one field. */
impl SerField for String {
    fn ser_field<W: Write>(&self, w: &mut W, label: &str, mode: Mode) -> Result<WriteLen> {
        match mode {
            Mode::Text => write_text_field(w, self, label),
            Mode::Binary => {
                let mut w_len = WriteLen(0);
                w_len.0 += write_fixed(w, &(self.len() as u64).to_ne_bytes())?;
                w_len.0 += write_fixed(w, self.as_bytes())?;
                Ok(w_len)
            }
        }
    }
}
impl DeserField for String {
    fn deser_field<R: Read>(&mut self, r: &mut R) -> Result<ReadLen> {
        let mut r_len = ReadLen(0);
        let mut byte_count = 0u64;
        r_len.0 += *byte_count.deser_field(r)?;

        let mut buf = vec![0u8; byte_count as usize];
        r_len.0 += read_fixed(r, &mut buf)?;
        *self = String::from_utf8(buf)?;
        Ok(r_len)
    }
}
