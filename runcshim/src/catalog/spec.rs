// Copyright (c) 2026 The Vino Authors. All rights reserved.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

use slotgram::{Command, FieldBinding, ScalarType, Slot};

use super::common::GlobalFlags;

#[derive(Debug, Default)]
pub struct Spec {
    pub global: GlobalFlags,
    pub bundle: Option<String>,
    pub rootless: bool,
}

impl Command for Spec {
    fn slots() -> Slot {
        Slot::group(
            vec![GlobalFlags::slot(), Slot::FlagGroup { name: "spec" }],
            vec![Slot::Subcommand { value: "spec" }],
        )
    }

    fn bindings(&mut self) -> Vec<FieldBinding<'_>> {
        let mut out = self.global.bindings();
        out.push(FieldBinding::flag("--bundle", &["-b"], "spec", ScalarType::OptStr, &mut self.bundle));
        out.push(FieldBinding::flag("--rootless", &[], "spec", ScalarType::Bool, &mut self.rootless));
        out
    }
}
