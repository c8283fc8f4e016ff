// Copyright (c) 2026 The Vino Authors. All rights reserved.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

use slotgram::{Command, FieldBinding, ScalarType, Slot};

use super::common::GlobalFlags;

#[derive(Debug, Default)]
pub struct Delete {
    pub global: GlobalFlags,
    pub force: bool,
    pub container_id: String,
}

impl Command for Delete {
    fn slots() -> Slot {
        Slot::group(
            vec![GlobalFlags::slot(), Slot::FlagGroup { name: "delete" }],
            vec![Slot::Subcommand { value: "delete" }, Slot::Argument { name: "container_id" }],
        )
    }

    fn bindings(&mut self) -> Vec<FieldBinding<'_>> {
        let mut out = self.global.bindings();
        out.push(FieldBinding::flag("--force", &["-f"], "delete", ScalarType::Bool, &mut self.force));
        out.push(FieldBinding::positional("container_id", ScalarType::Str, &mut self.container_id));
        out
    }
}
