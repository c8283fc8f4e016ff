// Copyright (c) 2026 The Vino Authors. All rights reserved.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

use slotgram::{Command, FieldBinding, ScalarType, Slot};

use super::common::GlobalFlags;

#[derive(Debug, Default)]
pub struct Events {
    pub global: GlobalFlags,
    pub interval: Option<u64>,
    pub stats: bool,
    pub container_id: String,
}

impl Command for Events {
    fn slots() -> Slot {
        Slot::group(
            vec![GlobalFlags::slot(), Slot::FlagGroup { name: "events" }],
            vec![Slot::Subcommand { value: "events" }, Slot::Argument { name: "container_id" }],
        )
    }

    fn bindings(&mut self) -> Vec<FieldBinding<'_>> {
        let mut out = self.global.bindings();
        out.push(FieldBinding::flag("--interval", &[], "events", ScalarType::OptU64, &mut self.interval));
        out.push(FieldBinding::flag("--stats", &[], "events", ScalarType::Bool, &mut self.stats));
        out.push(FieldBinding::positional("container_id", ScalarType::Str, &mut self.container_id));
        out
    }
}
