// Copyright (c) 2026 The Vino Authors. All rights reserved.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! The Union Dispatcher: picks which `Command` variant a token stream names,
//! by locating the earliest token that matches one of the variants'
//! `Subcommand` literals.
//!
//! A `CommandUnion` is modeled as a plain Rust enum rather than as a new
//! algebraic concept in the engine, since Rust already has real sum types.
//! The `define_union!` macro below generates the enum plus its `parse`/`render`
//! pair from a short declarative list, `macro_rules!` standing in for codegen
//! the same way hand-written schema tables stand in for derived structs
//! elsewhere in this crate.

/// Find the earliest token in `tokens` that equals one of `candidates`.
///
/// Returns `(token_index, candidate_index)`. Ties at the same token index
/// can only happen if two candidates share a spelling, in which case the
/// first one in declaration order wins, matching `candidates.iter().position`.
pub fn find_subcommand(tokens: &[&str], candidates: &[&str]) -> Option<(usize, usize)> {
    for (tok_idx, tok) in tokens.iter().enumerate() {
        if let Some(cand_idx) = candidates.iter().position(|c| c == tok) {
            return Some((tok_idx, cand_idx));
        }
    }
    None
}

/// Declare a `CommandUnion`-style enum over a set of `Command` types, each
/// keyed by the literal token that names it.
///
/// ```ignore
/// slotgram::define_union! {
///     pub enum CommandUnion {
///         Create(Create) => "create",
///         Run(Run) => "run",
///     }
/// }
/// ```
///
/// generates a `CommandUnion` enum plus inherent `parse`/`render` methods
/// that locate the subcommand token via [`find_subcommand`], strip it from
/// the stream before handing the remainder to that variant's
/// [`parse`](crate::parse), and re-emit it via that variant's
/// [`render`](crate::render).
#[macro_export]
macro_rules! define_union {
    ($(#[$meta:meta])* $vis:vis enum $name:ident { $($variant:ident($ty:ty) => $lit:literal),+ $(,)? }) => {
        $(#[$meta])*
        $vis enum $name {
            $($variant($ty)),+
        }

        impl $name {
            /// Every subcommand literal this union recognizes, in declaration order.
            pub const SUBCOMMANDS: &'static [&'static str] = &[$($lit),+];

            /// Locate the variant named by `tokens`, strip its subcommand
            /// token, and parse the remainder into that variant.
            pub fn parse(tokens: &[&str]) -> Result<$name, slotgram_shared::SlotError> {
                // Equals-expand before scanning for the subcommand token, so
                // a flag spelled `--foo=run` can never be mistaken for (or
                // mistakenly shadow) a literal `run`.
                let expanded = $crate::equals_expand(tokens);
                let expanded_refs: Vec<&str> = expanded.iter().map(::std::string::String::as_str).collect();

                let (pos, which) = $crate::dispatch::find_subcommand(&expanded_refs, Self::SUBCOMMANDS)
                    .ok_or(slotgram_shared::SlotError::NoSubcommand)?;

                let mut rest: Vec<&str> = Vec::with_capacity(expanded_refs.len().saturating_sub(1));
                rest.extend_from_slice(&expanded_refs[..pos]);
                rest.extend_from_slice(&expanded_refs[pos + 1..]);

                let mut idx = 0usize;
                $(
                    if idx == which {
                        let mut value = <$ty as ::std::default::Default>::default();
                        $crate::parse(&mut value, &rest)?;
                        return Ok($name::$variant(value));
                    }
                    idx += 1;
                )+
                unreachable!("candidate index {which} out of range for {} variants", idx)
            }

            /// Render the held variant back to its canonical token sequence,
            /// including its subcommand token.
            pub fn render(&mut self) -> Result<Vec<String>, slotgram_shared::SlotError> {
                match self {
                    $($name::$variant(value) => $crate::render(value)),+
                }
            }
        }
    };
}
