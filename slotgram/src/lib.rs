// Copyright (c) 2026 The Vino Authors. All rights reserved.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! A reflective, bidirectional slot-based grammar engine for runc-style CLI
//! surfaces.
//!
//! A [`Command`] declares its grammar once, as a [`Slot`] tree, and its
//! fields once, via [`Command::bindings`]. Everything else -- [`validate_tags`],
//! [`parse`], and [`render`] -- walks that single declaration, so a
//! catalog's parser and its `--help`-free renderer can never drift apart the
//! way a hand-rolled pair of functions could.
//!
//! Modules are layered in dependency order: [`slot`] has no dependents
//! inside this crate to depend on; [`binding`] depends only on `slot`;
//! [`validate`] depends on both; [`render`] and [`parse`] each depend on
//! `validate`; [`dispatch`] and [`client`] sit on top as the multi-command
//! and process-handoff layers.

mod binding;
mod client;
mod dispatch;
mod parse;
mod render;
mod slot;
mod validate;

pub use binding::{BindingKind, Command, FieldBinding, FieldSlot};
pub use client::{inherit_stdin, only, Client, Middleware, ProcessDescriptor};
pub use dispatch::find_subcommand;
pub use parse::{equals_expand, parse};
pub use render::render;
pub use slot::Slot;
pub use validate::validate_tags;

pub use slotgram_shared::{ScalarType, SlotError};
