// Copyright (c) 2026 The Vino Authors. All rights reserved.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

use slotgram::{Command, FieldBinding, ScalarType, Slot};

use super::common::GlobalFlags;

#[derive(Debug, Default)]
pub struct Start {
    pub global: GlobalFlags,
    pub container_id: String,
}

impl Command for Start {
    fn slots() -> Slot {
        Slot::group(
            vec![GlobalFlags::slot()],
            vec![Slot::Subcommand { value: "start" }, Slot::Argument { name: "container_id" }],
        )
    }

    fn bindings(&mut self) -> Vec<FieldBinding<'_>> {
        let mut out = self.global.bindings();
        out.push(FieldBinding::positional("container_id", ScalarType::Str, &mut self.container_id));
        out
    }
}
