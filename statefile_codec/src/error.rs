use thiserror::Error;

/// Fatal failures of a single field operation. Each aborts the enclosing
/// read or write immediately; bytes already accepted by the sink stay there.
#[derive(Error, PartialEq, Eq, Debug)]
pub enum CodecError {
    /// The sink or source moved fewer bytes than the nonzero amount requested.
    #[error("truncated transfer: moved {actual} of {expected} bytes")]
    TruncatedIo { expected: usize, actual: usize },

    /// A composite field's label carries the substitution marker, which is
    /// reserved for synthesized sub-labels.
    #[error("label {label:?} must not contain a substitution marker")]
    FieldLabelConfig { label: String },

    /// A text directive with more than one substitution marker is ambiguous.
    #[error("directive {directive:?} contains more than one substitution marker")]
    TemplateFormat { directive: String },
}
