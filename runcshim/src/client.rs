// Copyright (c) 2026 The Vino Authors. All rights reserved.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Wiring `slotgram`'s generic Delegating Client to the real `runc` binary:
//! which subcommands need stdin inherited, and how a dispatched
//! `CommandUnion` becomes a `ProcessDescriptor`.

use slotgram::{inherit_stdin, only, Client, ProcessDescriptor};
use slotgram_shared::SlotError;

use crate::catalog::CommandUnion;
use crate::error::ClientError;

/// The subcommands that attach an interactive console and so need this
/// process's stdin forwarded to the delegate.
const INHERITS_STDIN: &[&str] = &["run", "exec", "create"];

/// Fails with [`ClientError::EmptyDelegatePath`] when `delegate` is empty,
/// per the Delegating Client's `new_client` contract (spec.md §4.7/§6.2).
pub fn delegate_client(delegate: impl Into<String>) -> Result<Client, ClientError> {
    let mut client = Client::new(delegate).map_err(|err| match err {
        SlotError::EmptyDelegatePath => ClientError::EmptyDelegatePath,
        other => ClientError::Grammar(other),
    })?;
    for name in INHERITS_STDIN {
        client = client.with(only(name, inherit_stdin()));
    }
    Ok(client)
}

pub fn build_process(client: &Client, union: &mut CommandUnion) -> Result<ProcessDescriptor, ClientError> {
    let subcommand = subcommand_name(union);
    let args = union.render()?;
    Ok(client.build(subcommand, args)?)
}

fn subcommand_name(union: &CommandUnion) -> &'static str {
    match union {
        CommandUnion::Checkpoint(_) => "checkpoint",
        CommandUnion::Create(_) => "create",
        CommandUnion::Delete(_) => "delete",
        CommandUnion::Events(_) => "events",
        CommandUnion::Exec(_) => "exec",
        CommandUnion::Features(_) => "features",
        CommandUnion::Kill(_) => "kill",
        CommandUnion::List(_) => "list",
        CommandUnion::Pause(_) => "pause",
        CommandUnion::Ps(_) => "ps",
        CommandUnion::Restore(_) => "restore",
        CommandUnion::Resume(_) => "resume",
        CommandUnion::Run(_) => "run",
        CommandUnion::Spec(_) => "spec",
        CommandUnion::Start(_) => "start",
        CommandUnion::State(_) => "state",
        CommandUnion::Update(_) => "update",
    }
}
