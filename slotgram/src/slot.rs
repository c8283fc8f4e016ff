// Copyright (c) 2026 The Vino Authors. All rights reserved.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! The Slot algebra: the grammar description language every `Command`
//! exposes via [`Command::slots`](crate::Command::slots).
//!
//! A `Slot` tree carries no field values and no parsing behavior; it is
//! purely structure. The Parser and Renderer walk the same tree, which is
//! what gives them round-trip fidelity for free instead of by convention.

/// One node of a command's grammar tree.
///
/// `Group` is the only composite variant. Everything else is a leaf that
/// either names a syntactic position (`Argument`, `Arguments`, `FlagGroup`)
/// or is a fixed token (`Literal`, `Subcommand`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Slot {
    /// A named bag of flags sharing a syntactic window.
    FlagGroup { name: &'static str },
    /// Exactly one positional, identified by name.
    Argument { name: &'static str },
    /// Zero or more trailing positionals, identified by name.
    Arguments { name: &'static str },
    /// A verbatim token that must appear at its position. Never binds a field.
    Literal { value: &'static str },
    /// The token identifying which command variant this is.
    Subcommand { value: &'static str },
    /// The only composite slot. `unordered` holds `FlagGroup`s whose flags
    /// may appear anywhere within this group's dynamic extent; `ordered`
    /// holds everything else (and `FlagGroup`s that are position-local) in
    /// strict sequence.
    Group { unordered: Vec<Slot>, ordered: Vec<Slot> },
}

impl Slot {
    /// Build a `Group`, the required shape of every Command's root slot.
    pub fn group(unordered: Vec<Slot>, ordered: Vec<Slot>) -> Slot {
        Slot::Group { unordered, ordered }
    }

    /// Depth-first walk of `ordered` (recursing into nested `Group`s in
    /// declared order), returning the first `Subcommand` value found.
    ///
    /// Returns `""` when the tree has no `Subcommand` slot at all.
    pub fn subcommand_of(&self) -> &'static str {
        match self {
            Slot::Subcommand { value } => value,
            Slot::Group { ordered, .. } => {
                for item in ordered {
                    let found = item.subcommand_of();
                    if !found.is_empty() {
                        return found;
                    }
                }
                ""
            }
            _ => "",
        }
    }

    /// Every `FlagGroup` name reachable anywhere in the tree.
    pub fn group_names(&self) -> Vec<&'static str> {
        let mut out = Vec::new();
        self.collect_group_names(&mut out);
        out
    }

    fn collect_group_names(&self, out: &mut Vec<&'static str>) {
        match self {
            Slot::FlagGroup { name } => out.push(name),
            Slot::Group { unordered, ordered } => {
                for item in unordered {
                    item.collect_group_names(out);
                }
                for item in ordered {
                    item.collect_group_names(out);
                }
            }
            _ => {}
        }
    }

    /// Every `Argument`/`Arguments` name reachable anywhere in the tree.
    pub fn arg_names(&self) -> Vec<&'static str> {
        let mut out = Vec::new();
        self.collect_arg_names(&mut out);
        out
    }

    fn collect_arg_names(&self, out: &mut Vec<&'static str>) {
        match self {
            Slot::Argument { name } | Slot::Arguments { name } => out.push(name),
            Slot::Group { unordered, ordered } => {
                for item in unordered {
                    item.collect_arg_names(out);
                }
                for item in ordered {
                    item.collect_arg_names(out);
                }
            }
            _ => {}
        }
    }

    /// Returns the `(unordered, ordered)` slices of this slot if it is a
    /// `Group`, or `None` otherwise. Every `Command::slots()` must return a
    /// `Group` at its root; this is the checked accessor the engine uses to
    /// enforce that.
    pub fn as_group(&self) -> Option<(&[Slot], &[Slot])> {
        match self {
            Slot::Group { unordered, ordered } => Some((unordered, ordered)),
            _ => None,
        }
    }
}
