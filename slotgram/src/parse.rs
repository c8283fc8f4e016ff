// Copyright (c) 2026 The Vino Authors. All rights reserved.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! The Parser: token sequence -> typed Command, honoring flag windows,
//! literal anchors, positional discipline, and the `--` separator.

use std::collections::HashSet;

use slotgram_shared::SlotError;

use crate::binding::{BindingKind, FieldBinding, Indices};
use crate::slot::Slot;
use crate::validate::validate_tags;
use crate::Command;

/// Pre-processing pass: any token beginning with `-` and containing `=` is
/// split at the first `=` into two tokens.
pub fn equals_expand(tokens: &[&str]) -> Vec<String> {
    let mut out = Vec::with_capacity(tokens.len());
    for tok in tokens {
        if tok.starts_with('-') {
            if let Some(eq) = tok.find('=') {
                out.push(tok[..eq].to_string());
                out.push(tok[eq + 1..].to_string());
                continue;
            }
        }
        out.push(tok.to_string());
    }
    out
}

/// Consume `tokens` into `cmd`, honoring `cmd`'s declared `Slot` tree.
pub fn parse<C: Command>(cmd: &mut C, tokens: &[&str]) -> Result<(), SlotError> {
    validate_tags(cmd)?;

    let expanded = equals_expand(tokens);
    let root = C::slots();
    let (unordered, ordered) =
        root.as_group().expect("Command::slots() must return a Group at the root");

    let mut bindings = cmd.bindings();
    let indices = Indices::build(&bindings);

    let mut idx = 0usize;
    parse_group(&expanded, &mut idx, unordered, ordered, &HashSet::new(), &indices, &mut bindings, None)?;

    if idx != expanded.len() {
        return Err(SlotError::TrailingArgs(expanded[idx..].to_vec()));
    }

    Ok(())
}

fn parse_group(
    tokens: &[String],
    idx: &mut usize,
    unordered: &[Slot],
    ordered: &[Slot],
    inherited: &HashSet<&'static str>,
    indices: &Indices,
    bindings: &mut [FieldBinding<'_>],
    stop_literal: Option<&'static str>,
) -> Result<(), SlotError> {
    let mut active: HashSet<&'static str> = inherited.clone();
    for item in unordered {
        if let Slot::FlagGroup { name } = item {
            active.insert(name);
        }
    }

    let mut dash_dash_seen = false;

    // Step 2: before the first ordered item, greedily consume ambient flags.
    consume_ambient(tokens, idx, &active, indices, bindings)?;

    for (i, item) in ordered.iter().enumerate() {
        if !matches!(item, Slot::Literal { .. }) && !dash_dash_seen {
            consume_ambient(tokens, idx, &active, indices, bindings)?;
        }

        match item {
            Slot::FlagGroup { name } => {
                consume_group_window(tokens, idx, name, indices, bindings)?;
            }
            Slot::Subcommand { .. } => {
                // No consumption here: the Union Dispatcher already stripped
                // the subcommand token before handing `tokens` to `parse`.
            }
            Slot::Literal { value } => {
                let found = tokens.get(*idx).map(|s| s.as_str());
                if found != Some(*value) {
                    return Err(SlotError::ExpectedLiteral {
                        expected: value.to_string(),
                        found: found.map(|s| s.to_string()),
                    });
                }
                *idx += 1;
                dash_dash_seen = true;
            }
            Slot::Argument { name } => {
                consume_argument(tokens, idx, name, indices, bindings)?;
            }
            Slot::Arguments { name } => {
                consume_arguments(tokens, idx, name, stop_literal, indices, bindings)?;
            }
            Slot::Group { unordered: inner_u, ordered: inner_o } => {
                let child_stop = match ordered.get(i + 1) {
                    Some(Slot::Literal { value }) => Some(*value),
                    _ => None,
                };
                parse_group(tokens, idx, inner_u, inner_o, &active, indices, bindings, child_stop)?;
            }
        }

        let next_is_literal =
            matches!(ordered.get(i + 1), Some(Slot::Literal { .. }));
        if !dash_dash_seen && !next_is_literal {
            consume_ambient(tokens, idx, &active, indices, bindings)?;
        }
    }

    if !dash_dash_seen {
        consume_ambient(tokens, idx, &active, indices, bindings)?;
    }

    Ok(())
}

fn consume_ambient(
    tokens: &[String],
    idx: &mut usize,
    active: &HashSet<&'static str>,
    indices: &Indices,
    bindings: &mut [FieldBinding<'_>],
) -> Result<(), SlotError> {
    loop {
        let Some(tok) = tokens.get(*idx) else { break };
        let Some(&(group, field_idx)) = indices.flag_lookup.get(tok.as_str()) else { break };
        if !active.contains(group) {
            break;
        }
        consume_flag_token(tokens, idx, tok, field_idx, bindings)?;
    }
    Ok(())
}

fn consume_group_window(
    tokens: &[String],
    idx: &mut usize,
    window_group: &'static str,
    indices: &Indices,
    bindings: &mut [FieldBinding<'_>],
) -> Result<(), SlotError> {
    loop {
        let Some(tok) = tokens.get(*idx) else { break };
        let Some(&(group, field_idx)) = indices.flag_lookup.get(tok.as_str()) else { break };
        if group != window_group {
            break;
        }
        consume_flag_token(tokens, idx, tok, field_idx, bindings)?;
    }
    Ok(())
}

fn consume_flag_token(
    tokens: &[String],
    idx: &mut usize,
    tok: &str,
    field_idx: usize,
    bindings: &mut [FieldBinding<'_>],
) -> Result<(), SlotError> {
    *idx += 1;
    let binding = &mut bindings[field_idx];
    let long = match &binding.binding {
        BindingKind::Flag { long, .. } => *long,
        BindingKind::Positional { .. } => unreachable!("flag_lookup only indexes flag bindings"),
    };

    if binding.scalar.is_bool() {
        binding.slot.set_flag();
        return Ok(());
    }

    let value = tokens
        .get(*idx)
        .ok_or_else(|| SlotError::MissingOptionValue { flag: tok.to_string() })?;
    binding.slot.consume(long, value)?;
    *idx += 1;
    Ok(())
}

fn consume_argument(
    tokens: &[String],
    idx: &mut usize,
    name: &'static str,
    indices: &Indices,
    bindings: &mut [FieldBinding<'_>],
) -> Result<(), SlotError> {
    let Some(field_indices) = indices.args_by_name.get(name) else { return Ok(()) };

    for &fidx in field_indices {
        let tok = tokens
            .get(*idx)
            .ok_or_else(|| SlotError::MissingPositional { name: name.to_string() })?;
        bindings[fidx].slot.consume(name, tok)?;
        *idx += 1;
    }

    Ok(())
}

fn consume_arguments(
    tokens: &[String],
    idx: &mut usize,
    name: &'static str,
    stop_literal: Option<&'static str>,
    indices: &Indices,
    bindings: &mut [FieldBinding<'_>],
) -> Result<(), SlotError> {
    let field_idx = indices.args_by_name.get(name).and_then(|v| v.first().copied());

    loop {
        let Some(tok) = tokens.get(*idx) else { break };
        if let Some(stop) = stop_literal {
            if tok.as_str() == stop {
                break;
            }
        }
        if let Some(fidx) = field_idx {
            bindings[fidx].slot.consume(name, tok)?;
        }
        *idx += 1;
    }

    Ok(())
}
