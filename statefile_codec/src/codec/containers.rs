use crate::codec::{DeserField, Mode, ReadLen, SerField, WriteLen, TEMPLATE_MARKER};
use crate::error::CodecError;
use anyhow::Result;
use std::collections::{BTreeMap, BTreeSet, BinaryHeap};
use std::fmt::Display;
use std::io::{Read, Write};

/// Composite codecs synthesize sub-labels around the caller's label, so the
/// label itself may not carry the substitution marker. Checked before any
/// bytes are written, in either mode.
fn ensure_plain_label(label: &str) -> Result<()> {
    if label.contains(TEMPLATE_MARKER) {
        return Err(CodecError::FieldLabelConfig {
            label: String::from(label),
        }
        .into());
    }
    Ok(())
}

/// Sub-labels only matter to the text rendering; binary mode skips the
/// allocation and passes the empty (suppressing) directive down.
fn sub_label(mode: Mode, render: impl FnOnce() -> String) -> String {
    match mode {
        Mode::Text => render(),
        Mode::Binary => String::new(),
    }
}

/* Sequence: element count, then elements in original order. */
impl<T: SerField> SerField for Vec<T> {
    fn ser_field<W: Write>(&self, w: &mut W, label: &str, mode: Mode) -> Result<WriteLen> {
        ensure_plain_label(label)?;
        let mut w_len = WriteLen(0);

        let count = self.len() as u64;
        w_len.0 += *count.ser_field(w, &sub_label(mode, || format!("{label}.size()")), mode)?;
        for (i, elem) in self.iter().enumerate() {
            w_len.0 += *elem.ser_field(w, &sub_label(mode, || format!("{label}[{i}]")), mode)?;
        }
        Ok(w_len)
    }
}
impl<T: DeserField + Default> DeserField for Vec<T> {
    fn deser_field<R: Read>(&mut self, r: &mut R) -> Result<ReadLen> {
        let mut r_len = ReadLen(0);

        let mut count = 0u64;
        r_len.0 += *count.deser_field(r)?;
        self.reserve(count as usize);
        for _ in 0..count {
            let mut elem = T::default();
            r_len.0 += *elem.deser_field(r)?;
            self.push(elem);
        }
        Ok(r_len)
    }
}

/* Set: same framing as a sequence; elements leave in canonical sorted
order, so the stream is deterministic regardless of insertion history. */
impl<T: SerField> SerField for BTreeSet<T> {
    fn ser_field<W: Write>(&self, w: &mut W, label: &str, mode: Mode) -> Result<WriteLen> {
        ensure_plain_label(label)?;
        let mut w_len = WriteLen(0);

        let count = self.len() as u64;
        w_len.0 += *count.ser_field(w, &sub_label(mode, || format!("{label}.size()")), mode)?;
        for (i, elem) in self.iter().enumerate() {
            w_len.0 += *elem.ser_field(w, &sub_label(mode, || format!("{label}[{i}]")), mode)?;
        }
        Ok(w_len)
    }
}
impl<T: DeserField + Default + Ord> DeserField for BTreeSet<T> {
    fn deser_field<R: Read>(&mut self, r: &mut R) -> Result<ReadLen> {
        let mut r_len = ReadLen(0);

        let mut count = 0u64;
        r_len.0 += *count.deser_field(r)?;
        for _ in 0..count {
            let mut elem = T::default();
            r_len.0 += *elem.deser_field(r)?;
            self.insert(elem);
        }
        Ok(r_len)
    }
}

/* Pair: fixed arity, no count framing. `first` precedes `second`. */
impl<F: SerField, S: SerField> SerField for (F, S) {
    fn ser_field<W: Write>(&self, w: &mut W, label: &str, mode: Mode) -> Result<WriteLen> {
        ensure_plain_label(label)?;
        let mut w_len = WriteLen(0);

        w_len.0 += *self
            .0
            .ser_field(w, &sub_label(mode, || format!("{label}.first")), mode)?;
        w_len.0 += *self
            .1
            .ser_field(w, &sub_label(mode, || format!("{label}.second")), mode)?;
        Ok(w_len)
    }
}
impl<F: DeserField, S: DeserField> DeserField for (F, S) {
    fn deser_field<R: Read>(&mut self, r: &mut R) -> Result<ReadLen> {
        let mut r_len = ReadLen(0);
        r_len.0 += *self.0.deser_field(r)?;
        r_len.0 += *self.1.deser_field(r)?;
        Ok(r_len)
    }
}

/* Map: entry count, then key/value byte pairs in canonical key order. The
value's text label embeds the key's rendering, a debug convenience with no
bearing on the binary layout. */
impl<K: SerField + Display, V: SerField> SerField for BTreeMap<K, V> {
    fn ser_field<W: Write>(&self, w: &mut W, label: &str, mode: Mode) -> Result<WriteLen> {
        ensure_plain_label(label)?;
        let mut w_len = WriteLen(0);

        let count = self.len() as u64;
        w_len.0 += *count.ser_field(w, &sub_label(mode, || format!("{label}.size()")), mode)?;
        for (i, (key, value)) in self.iter().enumerate() {
            w_len.0 += *key.ser_field(w, &sub_label(mode, || format!("{label}.key{i}")), mode)?;
            w_len.0 += *value.ser_field(w, &sub_label(mode, || format!("{label}[{key}]")), mode)?;
        }
        Ok(w_len)
    }
}
impl<K, V> DeserField for BTreeMap<K, V>
where
    K: DeserField + Default + Ord,
    V: DeserField + Default,
{
    fn deser_field<R: Read>(&mut self, r: &mut R) -> Result<ReadLen> {
        let mut r_len = ReadLen(0);

        let mut count = 0u64;
        r_len.0 += *count.deser_field(r)?;
        for _ in 0..count {
            let mut entry = (K::default(), V::default());
            r_len.0 += *entry.deser_field(r)?;
            // The encoder never emits duplicate keys; a hand-made stream
            // holding some resolves to the last value.
            let (key, value) = entry;
            self.insert(key, value);
        }
        Ok(r_len)
    }
}

/* Priority queue: element count, then elements in priority-descending pop
order. The writer drains a local clone; the caller's heap is never mutated. */
impl<T: SerField + Ord + Clone> SerField for BinaryHeap<T> {
    fn ser_field<W: Write>(&self, w: &mut W, label: &str, mode: Mode) -> Result<WriteLen> {
        ensure_plain_label(label)?;
        let mut w_len = WriteLen(0);

        let count = self.len() as u64;
        w_len.0 += *count.ser_field(w, &sub_label(mode, || format!("{label}.size()")), mode)?;
        let mut remaining = self.clone();
        let mut i = 0usize;
        while let Some(elem) = remaining.pop() {
            w_len.0 += *elem.ser_field(w, &sub_label(mode, || format!("{label}[{i}]")), mode)?;
            i += 1;
        }
        Ok(w_len)
    }
}
impl<T: DeserField + Default + Ord> DeserField for BinaryHeap<T> {
    fn deser_field<R: Read>(&mut self, r: &mut R) -> Result<ReadLen> {
        let mut r_len = ReadLen(0);

        let mut count = 0u64;
        r_len.0 += *count.deser_field(r)?;
        for _ in 0..count {
            let mut elem = T::default();
            r_len.0 += *elem.deser_field(r)?;
            self.push(elem);
        }
        Ok(r_len)
    }
}
