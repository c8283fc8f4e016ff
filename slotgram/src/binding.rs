// Copyright (c) 2026 The Vino Authors. All rights reserved.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Field Binding: the reflective layer that maps a `Command`'s declared
//! fields to the `Slot`s they fill.
//!
//! Rust has no runtime reflection, so this is a hand-written schema table:
//! each `Command` implements [`Command::bindings`] itself, returning one
//! [`FieldBinding`] per bound field in declaration order (embeds simply
//! splice their own `bindings()` call in at the right spot). The observable
//! behavior -- order preservation, embed flattening -- is identical to what
//! reflection or a derive macro would produce.

use slotgram_shared::ScalarType;
use std::collections::HashMap;

use crate::slot::Slot;

/// How one field is bound into the grammar: to a flag, or to a positional.
#[derive(Debug, Clone)]
pub enum BindingKind {
    /// Bound to a `FlagGroup`.
    Flag {
        /// The canonical `--long` spelling.
        long: &'static str,
        /// Accepted aliases, e.g. short forms like `-b`.
        alternatives: &'static [&'static str],
        /// The spelling the renderer actually emits. Equal to `long` for
        /// every flag except `update`'s `-r`, which keeps its own canonical
        /// short form rather than normalizing to `--resources`.
        render_as: &'static str,
        /// The `FlagGroup` name this flag belongs to.
        group: &'static str,
    },
    /// Bound to an `Argument` or `Arguments`.
    Positional {
        /// The argument name, matching a `Slot::Argument`/`Slot::Arguments`.
        arg_name: &'static str,
    },
}

/// A type that can serve as storage for a bound field.
///
/// This collapses the usual read-slot/write-slot split into a single
/// bidirectional trait: the same slot knows how to accept a token during
/// parsing and how to produce its token(s) back during rendering.
pub trait FieldSlot {
    /// Whether this slot currently holds no meaningful value: `false` for a
    /// switch, `None` for an optional, an empty string, zero for a bare
    /// numeric, or an empty list. Drives both "omit on render" and the
    /// permissive "missing required arguments are not render errors" rule.
    fn is_empty(&self) -> bool;

    /// Set a boolean switch. Only ever called on `ScalarType::Bool` fields.
    fn set_flag(&mut self);

    /// Parse and store one token's worth of value. For list-typed slots
    /// this appends; for scalar slots this assigns (a field is only ever
    /// assigned once by the parser unless it's a list).
    fn consume(&mut self, field_name: &str, raw: &str) -> Result<(), slotgram_shared::SlotError>;

    /// The token(s) this slot currently renders as, excluding the flag name
    /// itself. Empty when `is_empty()` is true. A list yields one string per
    /// element, in insertion order.
    fn render(&self) -> Vec<String>;
}

/// One bound field: its binding kind, scalar type, optional enum
/// constraint, and a live handle to its storage.
pub struct FieldBinding<'a> {
    pub binding: BindingKind,
    pub scalar: ScalarType,
    pub enum_values: Option<&'static [&'static str]>,
    pub slot: &'a mut dyn FieldSlot,
}

impl<'a> FieldBinding<'a> {
    pub fn flag(
        long: &'static str,
        alternatives: &'static [&'static str],
        group: &'static str,
        scalar: ScalarType,
        slot: &'a mut dyn FieldSlot,
    ) -> Self {
        FieldBinding {
            binding: BindingKind::Flag { long, alternatives, render_as: long, group },
            scalar,
            enum_values: None,
            slot,
        }
    }

    /// Like [`flag`](Self::flag), but the renderer emits `render_as` instead
    /// of `long`. `render_as` must also appear in `alternatives` (or equal
    /// `long`) so the parser still recognizes its own output.
    pub fn flag_rendered_as(
        long: &'static str,
        alternatives: &'static [&'static str],
        render_as: &'static str,
        group: &'static str,
        scalar: ScalarType,
        slot: &'a mut dyn FieldSlot,
    ) -> Self {
        FieldBinding {
            binding: BindingKind::Flag { long, alternatives, render_as, group },
            scalar,
            enum_values: None,
            slot,
        }
    }

    pub fn flag_enum(
        long: &'static str,
        alternatives: &'static [&'static str],
        group: &'static str,
        scalar: ScalarType,
        enum_values: &'static [&'static str],
        slot: &'a mut dyn FieldSlot,
    ) -> Self {
        FieldBinding {
            binding: BindingKind::Flag { long, alternatives, render_as: long, group },
            scalar,
            enum_values: Some(enum_values),
            slot,
        }
    }

    pub fn positional(arg_name: &'static str, scalar: ScalarType, slot: &'a mut dyn FieldSlot) -> Self {
        FieldBinding { binding: BindingKind::Positional { arg_name }, scalar, enum_values: None, slot }
    }
}

/// A Command: a record of bound fields, reflectively discoverable, plus the
/// `Slot` tree those fields are bound against.
pub trait Command: Default {
    /// This type's grammar tree. Must be a `Group` at the root.
    /// Implementations may memoize; callers should treat repeated calls as
    /// cheap.
    fn slots() -> Slot;

    /// This value's bound fields, outer-fields-first then
    /// embedded-in-declaration-order, as a flat list the engine can index
    /// by group/argument name.
    fn bindings(&mut self) -> Vec<FieldBinding<'_>>;
}

/// The two lookup tables the Parser and Renderer both need, built once per
/// call from a `Command`'s live bindings, rather than threading reflection
/// through every recursive step.
pub(crate) struct Indices {
    pub flags_by_group: HashMap<&'static str, Vec<usize>>,
    pub args_by_name: HashMap<&'static str, Vec<usize>>,
    /// token (long or any alternative) -> (owning group, index into bindings)
    pub flag_lookup: HashMap<&'static str, (&'static str, usize)>,
}

impl Indices {
    pub fn build(bindings: &[FieldBinding<'_>]) -> Indices {
        let mut flags_by_group: HashMap<&'static str, Vec<usize>> = HashMap::new();
        let mut args_by_name: HashMap<&'static str, Vec<usize>> = HashMap::new();
        let mut flag_lookup: HashMap<&'static str, (&'static str, usize)> = HashMap::new();

        for (i, binding) in bindings.iter().enumerate() {
            match &binding.binding {
                BindingKind::Flag { long, alternatives, group, .. } => {
                    flags_by_group.entry(group).or_default().push(i);
                    flag_lookup.insert(long, (group, i));
                    for alt in *alternatives {
                        flag_lookup.insert(alt, (group, i));
                    }
                }
                BindingKind::Positional { arg_name } => {
                    args_by_name.entry(arg_name).or_default().push(i);
                }
            }
        }

        Indices { flags_by_group, args_by_name, flag_lookup }
    }
}

// --- Blanket `FieldSlot` impls for the concrete field types a Command's
// struct fields are actually declared with. There is no intermediate
// "parsed into an Option, unwrapped later" step as in a derive expansion;
// since bindings() is hand-written, each field is its final type already. ---

fn parse_err(field: &str, raw: &str, reason: impl std::fmt::Display) -> slotgram_shared::SlotError {
    slotgram_shared::SlotError::Value {
        field: field.to_string(),
        input: raw.to_string(),
        reason: reason.to_string(),
    }
}

impl FieldSlot for bool {
    fn is_empty(&self) -> bool {
        !*self
    }
    fn set_flag(&mut self) {
        *self = true;
    }
    fn consume(&mut self, field_name: &str, raw: &str) -> Result<(), slotgram_shared::SlotError> {
        Err(parse_err(field_name, raw, "bool fields do not take a value"))
    }
    fn render(&self) -> Vec<String> {
        Vec::new()
    }
}

impl FieldSlot for String {
    fn is_empty(&self) -> bool {
        self.is_empty()
    }
    fn set_flag(&mut self) {}
    fn consume(&mut self, _field_name: &str, raw: &str) -> Result<(), slotgram_shared::SlotError> {
        *self = raw.to_string();
        Ok(())
    }
    fn render(&self) -> Vec<String> {
        if self.is_empty() {
            Vec::new()
        } else {
            vec![self.clone()]
        }
    }
}

impl FieldSlot for Option<String> {
    fn is_empty(&self) -> bool {
        self.is_none()
    }
    fn set_flag(&mut self) {}
    fn consume(&mut self, _field_name: &str, raw: &str) -> Result<(), slotgram_shared::SlotError> {
        *self = Some(raw.to_string());
        Ok(())
    }
    fn render(&self) -> Vec<String> {
        self.clone().into_iter().collect()
    }
}

macro_rules! impl_field_slot_for_int {
    ($ty:ty) => {
        impl FieldSlot for $ty {
            fn is_empty(&self) -> bool {
                *self == 0
            }
            fn set_flag(&mut self) {}
            fn consume(&mut self, field_name: &str, raw: &str) -> Result<(), slotgram_shared::SlotError> {
                *self = raw.parse::<$ty>().map_err(|e| parse_err(field_name, raw, e))?;
                Ok(())
            }
            fn render(&self) -> Vec<String> {
                if *self == 0 {
                    Vec::new()
                } else {
                    vec![self.to_string()]
                }
            }
        }

        impl FieldSlot for Option<$ty> {
            fn is_empty(&self) -> bool {
                self.is_none()
            }
            fn set_flag(&mut self) {}
            fn consume(&mut self, field_name: &str, raw: &str) -> Result<(), slotgram_shared::SlotError> {
                *self = Some(raw.parse::<$ty>().map_err(|e| parse_err(field_name, raw, e))?);
                Ok(())
            }
            fn render(&self) -> Vec<String> {
                self.map(|v| v.to_string()).into_iter().collect()
            }
        }
    };
}

impl_field_slot_for_int!(i64);
impl_field_slot_for_int!(u64);

impl FieldSlot for Vec<String> {
    fn is_empty(&self) -> bool {
        self.is_empty()
    }
    fn set_flag(&mut self) {}
    fn consume(&mut self, _field_name: &str, raw: &str) -> Result<(), slotgram_shared::SlotError> {
        self.push(raw.to_string());
        Ok(())
    }
    fn render(&self) -> Vec<String> {
        self.clone()
    }
}

macro_rules! impl_field_slot_for_int_list {
    ($ty:ty) => {
        impl FieldSlot for Vec<$ty> {
            fn is_empty(&self) -> bool {
                self.is_empty()
            }
            fn set_flag(&mut self) {}
            fn consume(&mut self, field_name: &str, raw: &str) -> Result<(), slotgram_shared::SlotError> {
                self.push(raw.parse::<$ty>().map_err(|e| parse_err(field_name, raw, e))?);
                Ok(())
            }
            fn render(&self) -> Vec<String> {
                self.iter().map(ToString::to_string).collect()
            }
        }
    };
}

impl_field_slot_for_int_list!(i64);
impl_field_slot_for_int_list!(u64);
