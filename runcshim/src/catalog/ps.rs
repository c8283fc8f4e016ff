// Copyright (c) 2026 The Vino Authors. All rights reserved.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

use slotgram::{Command, FieldBinding, ScalarType, Slot};

use super::common::{FormatFlag, GlobalFlags};

/// `runc ps <id> [ps options...]`: anything after `container_id` is passed
/// straight through to the host `ps(1)`, so it must not be reinterpreted as
/// this command's own flags.
#[derive(Debug, Default)]
pub struct Ps {
    pub global: GlobalFlags,
    pub format: FormatFlag,
    pub container_id: String,
    pub ps_args: Vec<String>,
}

impl Command for Ps {
    fn slots() -> Slot {
        Slot::group(
            vec![GlobalFlags::slot()],
            vec![
                Slot::Subcommand { value: "ps" },
                Slot::group(
                    vec![Slot::FlagGroup { name: "ps" }],
                    vec![Slot::Argument { name: "container_id" }],
                ),
                Slot::Arguments { name: "ps_args" },
            ],
        )
    }

    fn bindings(&mut self) -> Vec<FieldBinding<'_>> {
        let mut out = self.global.bindings();
        out.push(self.format.bindings("ps"));
        out.push(FieldBinding::positional("container_id", ScalarType::Str, &mut self.container_id));
        out.push(FieldBinding::positional("ps_args", ScalarType::ListStr, &mut self.ps_args));
        out
    }
}
