// Copyright (c) 2026 The Vino Authors. All rights reserved.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

use slotgram::{Command, FieldBinding, Slot};

use super::common::GlobalFlags;

/// `runc features`: prints the feature-detection document. No own flags,
/// no positionals -- exercises the Renderer's trailing-injection fallback.
#[derive(Debug, Default)]
pub struct Features {
    pub global: GlobalFlags,
}

impl Command for Features {
    fn slots() -> Slot {
        Slot::group(vec![GlobalFlags::slot()], vec![Slot::Subcommand { value: "features" }])
    }

    fn bindings(&mut self) -> Vec<FieldBinding<'_>> {
        self.global.bindings()
    }
}
