// Copyright (c) 2026 The Vino Authors. All rights reserved.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

use slotgram::{Command, FieldBinding, ScalarType, Slot};

use super::common::GlobalFlags;

#[derive(Debug, Default)]
pub struct Create {
    pub global: GlobalFlags,
    pub bundle: Option<String>,
    pub console_socket: Option<String>,
    pub pid_file: Option<String>,
    pub no_pivot: bool,
    pub no_new_keyring: bool,
    pub preserve_fds: Option<u64>,
    pub container_id: String,
}

impl Command for Create {
    fn slots() -> Slot {
        Slot::group(
            vec![GlobalFlags::slot(), Slot::FlagGroup { name: "create" }],
            vec![Slot::Subcommand { value: "create" }, Slot::Argument { name: "container_id" }],
        )
    }

    fn bindings(&mut self) -> Vec<FieldBinding<'_>> {
        let mut out = self.global.bindings();
        out.push(FieldBinding::flag("--bundle", &["-b"], "create", ScalarType::OptStr, &mut self.bundle));
        out.push(FieldBinding::flag(
            "--console-socket",
            &[],
            "create",
            ScalarType::OptStr,
            &mut self.console_socket,
        ));
        out.push(FieldBinding::flag("--pid-file", &[], "create", ScalarType::OptStr, &mut self.pid_file));
        out.push(FieldBinding::flag("--no-pivot", &[], "create", ScalarType::Bool, &mut self.no_pivot));
        out.push(FieldBinding::flag("--no-new-keyring", &[], "create", ScalarType::Bool, &mut self.no_new_keyring));
        out.push(FieldBinding::flag("--preserve-fds", &[], "create", ScalarType::OptU64, &mut self.preserve_fds));
        out.push(FieldBinding::positional("container_id", ScalarType::Str, &mut self.container_id));
        out
    }
}
