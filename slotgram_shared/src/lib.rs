// Copyright (c) 2026 The Vino Authors. All rights reserved.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Vocabulary shared between the `slotgram` grammar engine and the crates
//! that declare commands against it.
//!
//! A small, dependency-light crate holding the types both sides need to
//! agree on, so that the engine crate doesn't have to depend on any
//! particular command catalog and vice versa.

/// The primitive value shape a bound field carries.
///
/// Every field bound to a `Flag` or `Argument`/`Arguments` slot declares one
/// of these so the engine knows how to consume and emit it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarType {
    /// A pure switch; present or absent, never carries a value token.
    Bool,
    /// A required string.
    Str,
    /// An optional string.
    OptStr,
    /// A required signed integer (width <= 64).
    I64,
    /// An optional signed integer.
    OptI64,
    /// A required unsigned integer (width <= 64).
    U64,
    /// An optional unsigned integer.
    OptU64,
    /// Zero or more strings.
    ListStr,
    /// Zero or more signed integers.
    ListI64,
    /// Zero or more unsigned integers.
    ListU64,
}

impl ScalarType {
    /// Whether this scalar type accumulates more than one value per field.
    pub fn is_list(self) -> bool {
        matches!(self, ScalarType::ListStr | ScalarType::ListI64 | ScalarType::ListU64)
    }

    /// Whether a flag of this type is a pure switch (no following value token).
    pub fn is_bool(self) -> bool {
        matches!(self, ScalarType::Bool)
    }

    /// Whether an enum constraint may legally be attached to a field of this
    /// type. Enum constraints only ever apply to string-valued flags.
    pub fn accepts_enum(self) -> bool {
        matches!(self, ScalarType::Str | ScalarType::OptStr)
    }
}

/// Errors produced by the grammar engine.
///
/// Each variant corresponds to one of the error kinds enumerated in the
/// design's error handling section, and carries whatever context (field
/// name, offending token, ...) lets a caller produce a useful message
/// without re-deriving it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SlotError {
    /// A command's field bindings are inconsistent with its declared `Slot`
    /// tree. Carries every violation found, not just the first.
    #[error("tag error(s):\n{}", .0.join("\n"))]
    Tag(Vec<String>),

    /// A `Literal` slot was reached but the next token didn't match.
    #[error("expected literal {expected:?}, found {found:?}")]
    ExpectedLiteral { expected: String, found: Option<String> },

    /// An `Argument` slot ran out of tokens before it could be filled.
    #[error("missing value for {name}")]
    MissingPositional { name: String },

    /// A non-bool flag was the last token in the stream.
    #[error("no value provided for option '{flag}'")]
    MissingOptionValue { flag: String },

    /// Tokens remained after every ordered slot was satisfied.
    #[error("unexpected trailing args: {0:?}")]
    TrailingArgs(Vec<String>),

    /// A typed conversion (integer parse, etc.) failed.
    #[error("error parsing '{field}' from input '{input}': {reason}")]
    Value { field: String, input: String, reason: String },

    /// The Union Dispatcher found no subcommand token among the inputs.
    #[error("no valid subcommand")]
    NoSubcommand,

    /// The renderer encountered a field kind it doesn't know how to emit.
    /// Reaching this is a programming bug, not a user error.
    #[error("unsupported field kind during render: {0}")]
    Render(String),

    /// A Delegating Client was constructed with an empty delegate path.
    #[error("empty delegate path")]
    EmptyDelegatePath,
}

impl SlotError {
    /// Convenience constructor for a single-message tag error.
    pub fn tag(message: impl Into<String>) -> Self {
        SlotError::Tag(vec![message.into()])
    }
}
