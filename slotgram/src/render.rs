// Copyright (c) 2026 The Vino Authors. All rights reserved.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! The Renderer: typed Command -> canonical token sequence, round-tripping
//! the Parser.

use slotgram_shared::SlotError;

use crate::binding::{BindingKind, FieldBinding, Indices};
use crate::slot::Slot;
use crate::validate::validate_tags;
use crate::Command;

/// The subcommand name that triggers the "after-first-argument" unordered
/// injection rule (the `update <id> [flags]` form). Kept as an explicit
/// name check rather than a declarative slot marker, since exactly one
/// subcommand in this catalog needs the non-default placement.
const AFTER_FIRST_ARGUMENT_SUBCOMMAND: &str = "update";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Placement {
    Default,
    AfterFirstArgument,
}

/// Render `cmd` into its canonical token sequence. Errors surface from tag
/// validation or from a field kind the engine doesn't know how to emit.
pub fn render<C: Command>(cmd: &mut C) -> Result<Vec<String>, SlotError> {
    validate_tags(cmd)?;

    let root = C::slots();
    let subcommand_name = root.subcommand_of();
    let mut bindings = cmd.bindings();
    let indices = Indices::build(&bindings);

    let (unordered, ordered) =
        root.as_group().expect("Command::slots() must return a Group at the root");

    let mut out = Vec::new();
    render_group(&mut out, unordered, ordered, &indices, &mut bindings, subcommand_name)?;
    Ok(out)
}

fn placement_strategy(ordered: &[Slot], subcommand_name: &str) -> Placement {
    let non_flaggroup: Vec<&Slot> =
        ordered.iter().filter(|s| !matches!(s, Slot::FlagGroup { .. })).collect();

    if subcommand_name == AFTER_FIRST_ARGUMENT_SUBCOMMAND
        && non_flaggroup.len() == 2
        && matches!(non_flaggroup[0], Slot::Subcommand { .. })
        && matches!(non_flaggroup[1], Slot::Argument { .. })
    {
        Placement::AfterFirstArgument
    } else {
        Placement::Default
    }
}

fn render_group(
    out: &mut Vec<String>,
    unordered: &[Slot],
    ordered: &[Slot],
    indices: &Indices,
    bindings: &mut [FieldBinding<'_>],
    subcommand_name: &str,
) -> Result<(), SlotError> {
    let strategy = placement_strategy(ordered, subcommand_name);
    let mut injected = unordered.is_empty();

    for item in ordered {
        if !injected && strategy == Placement::Default {
            let leading = matches!(item, Slot::FlagGroup { .. } | Slot::Subcommand { .. });
            if !leading {
                emit_unordered(out, unordered, indices, bindings)?;
                injected = true;
            }
        }

        match item {
            Slot::FlagGroup { name } => emit_flag_group(out, name, indices, bindings)?,
            Slot::Subcommand { value } => out.push((*value).to_string()),
            Slot::Literal { value } => out.push((*value).to_string()),
            Slot::Argument { name } => emit_argument(out, name, indices, bindings)?,
            Slot::Arguments { name } => emit_arguments(out, name, indices, bindings)?,
            Slot::Group { unordered: inner_u, ordered: inner_o } => {
                render_group(out, inner_u, inner_o, indices, bindings, subcommand_name)?
            }
        }

        if !injected && strategy == Placement::AfterFirstArgument && matches!(item, Slot::Argument { .. }) {
            emit_unordered(out, unordered, indices, bindings)?;
            injected = true;
        }
    }

    if !injected {
        emit_unordered(out, unordered, indices, bindings)?;
    }

    Ok(())
}

fn emit_unordered(
    out: &mut Vec<String>,
    unordered: &[Slot],
    indices: &Indices,
    bindings: &mut [FieldBinding<'_>],
) -> Result<(), SlotError> {
    for item in unordered {
        if let Slot::FlagGroup { name } = item {
            emit_flag_group(out, name, indices, bindings)?;
        }
    }
    Ok(())
}

fn emit_flag_group(
    out: &mut Vec<String>,
    group: &str,
    indices: &Indices,
    bindings: &mut [FieldBinding<'_>],
) -> Result<(), SlotError> {
    let Some(field_indices) = indices.flags_by_group.get(group) else {
        return Ok(());
    };

    for &idx in field_indices {
        let binding = &bindings[idx];
        let render_as = match &binding.binding {
            BindingKind::Flag { render_as, .. } => *render_as,
            BindingKind::Positional { .. } => {
                return Err(SlotError::Render(format!(
                    "field indexed under flag group {group:?} is not a flag binding"
                )))
            }
        };

        if binding.scalar.is_bool() {
            if !binding.slot.is_empty() {
                out.push(render_as.to_string());
            }
            continue;
        }

        let values = binding.slot.render();
        if values.is_empty() {
            continue;
        }

        if binding.scalar.is_list() {
            for value in values {
                out.push(render_as.to_string());
                out.push(value);
            }
        } else {
            out.push(render_as.to_string());
            out.push(values.into_iter().next().expect("checked non-empty above"));
        }
    }

    Ok(())
}

fn emit_argument(
    out: &mut Vec<String>,
    name: &str,
    indices: &Indices,
    bindings: &mut [FieldBinding<'_>],
) -> Result<(), SlotError> {
    let Some(field_indices) = indices.args_by_name.get(name) else {
        return Ok(());
    };

    for &idx in field_indices {
        let values = bindings[idx].slot.render();
        // Missing required arguments are not render errors: empty values
        // are silently skipped.
        if let Some(value) = values.into_iter().next() {
            out.push(value);
        }
    }

    Ok(())
}

fn emit_arguments(
    out: &mut Vec<String>,
    name: &str,
    indices: &Indices,
    bindings: &mut [FieldBinding<'_>],
) -> Result<(), SlotError> {
    let Some(field_indices) = indices.args_by_name.get(name) else {
        return Ok(());
    };

    for &idx in field_indices {
        out.extend(bindings[idx].slot.render());
    }

    Ok(())
}
