// Copyright (c) 2026 The Vino Authors. All rights reserved.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

use slotgram::{Command, FieldBinding, ScalarType, Slot};

use super::common::{FormatFlag, GlobalFlags};

#[derive(Debug, Default)]
pub struct List {
    pub global: GlobalFlags,
    pub format: FormatFlag,
    pub quiet: bool,
}

impl Command for List {
    fn slots() -> Slot {
        Slot::group(
            vec![GlobalFlags::slot(), Slot::FlagGroup { name: "list" }],
            vec![Slot::Subcommand { value: "list" }],
        )
    }

    fn bindings(&mut self) -> Vec<FieldBinding<'_>> {
        let mut out = self.global.bindings();
        out.push(self.format.bindings("list"));
        out.push(FieldBinding::flag("--quiet", &["-q"], "list", ScalarType::Bool, &mut self.quiet));
        out
    }
}
