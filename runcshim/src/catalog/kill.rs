// Copyright (c) 2026 The Vino Authors. All rights reserved.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

use slotgram::{Command, FieldBinding, ScalarType, Slot};

use super::common::GlobalFlags;

/// `runc kill <id> [signal]`. `signal` is genuinely optional in real runc;
/// it is modeled as `Arguments` (zero-or-more) rather than `Argument`
/// (exactly one) so a missing signal isn't a parse error, and by this
/// catalog's own convention never holds more than one element.
#[derive(Debug, Default)]
pub struct Kill {
    pub global: GlobalFlags,
    pub all: bool,
    pub container_id: String,
    pub signal: Vec<String>,
}

impl Command for Kill {
    fn slots() -> Slot {
        Slot::group(
            vec![GlobalFlags::slot(), Slot::FlagGroup { name: "kill" }],
            vec![
                Slot::Subcommand { value: "kill" },
                Slot::Argument { name: "container_id" },
                Slot::Arguments { name: "signal" },
            ],
        )
    }

    fn bindings(&mut self) -> Vec<FieldBinding<'_>> {
        let mut out = self.global.bindings();
        out.push(FieldBinding::flag("--all", &["-a"], "kill", ScalarType::Bool, &mut self.all));
        out.push(FieldBinding::positional("container_id", ScalarType::Str, &mut self.container_id));
        out.push(FieldBinding::positional("signal", ScalarType::ListStr, &mut self.signal));
        out
    }
}
