// Copyright (c) 2026 The Vino Authors. All rights reserved.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Flags shared by every runc subcommand. `GlobalFlags` is an embed, not a
//! `Command` in its own right: each catalog command holds one and splices
//! its `bindings()` in alongside its own, per the embed-flattening contract
//! documented on `slotgram::Command::bindings`.

use slotgram::{FieldBinding, ScalarType, Slot};

/// The `global` flag group: legal anywhere in a command's dynamic extent,
/// on either side of the subcommand token.
#[derive(Debug, Default, Clone)]
pub struct GlobalFlags {
    pub debug: bool,
    pub log: Option<String>,
    pub log_format: Option<String>,
    pub root: Option<String>,
    pub criu: Option<String>,
    pub systemd_cgroup: bool,
    pub rootless: Option<String>,
}

impl GlobalFlags {
    pub const GROUP: &'static str = "global";

    pub fn slot() -> Slot {
        Slot::FlagGroup { name: Self::GROUP }
    }

    pub fn bindings(&mut self) -> Vec<FieldBinding<'_>> {
        vec![
            FieldBinding::flag("--debug", &[], Self::GROUP, ScalarType::Bool, &mut self.debug),
            FieldBinding::flag("--log", &[], Self::GROUP, ScalarType::OptStr, &mut self.log),
            FieldBinding::flag_enum(
                "--log-format",
                &[],
                Self::GROUP,
                ScalarType::OptStr,
                &["text", "json"],
                &mut self.log_format,
            ),
            FieldBinding::flag("--root", &[], Self::GROUP, ScalarType::OptStr, &mut self.root),
            FieldBinding::flag("--criu", &[], Self::GROUP, ScalarType::OptStr, &mut self.criu),
            FieldBinding::flag("--systemd-cgroup", &[], Self::GROUP, ScalarType::Bool, &mut self.systemd_cgroup),
            FieldBinding::flag_enum(
                "--rootless",
                &[],
                Self::GROUP,
                ScalarType::OptStr,
                &["true", "false", "auto"],
                &mut self.rootless,
            ),
        ]
    }
}

/// The `--format table|json` flag shared by `list` and `ps`.
#[derive(Debug, Default, Clone)]
pub struct FormatFlag {
    pub format: Option<String>,
}

impl FormatFlag {
    pub fn bindings<'a>(&'a mut self, group: &'static str) -> FieldBinding<'a> {
        FieldBinding::flag_enum("--format", &[], group, ScalarType::OptStr, &["table", "json"], &mut self.format)
    }
}

/// The `--manage-cgroups-mode soft|full|strict` flag shared by `checkpoint`
/// and `restore`.
#[derive(Debug, Default, Clone)]
pub struct ManageCgroupsModeFlag {
    pub manage_cgroups_mode: Option<String>,
}

impl ManageCgroupsModeFlag {
    pub fn bindings<'a>(&'a mut self, group: &'static str) -> FieldBinding<'a> {
        FieldBinding::flag_enum(
            "--manage-cgroups-mode",
            &[],
            group,
            ScalarType::OptStr,
            &["soft", "full", "strict"],
            &mut self.manage_cgroups_mode,
        )
    }
}
