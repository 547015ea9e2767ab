use derive_more::Deref;

/// Count of bytes a single `ser_field` call pushed into the sink.
/// Callers sum these to track stream position; the codec itself holds none.
#[derive(Deref, Clone, Copy, Debug)]
pub struct WriteLen(pub(crate) usize);

/// Count of bytes a single `deser_field` call consumed from the source.
#[derive(Deref, Clone, Copy, Debug)]
pub struct ReadLen(pub(crate) usize);
