// Copyright (c) 2026 The Vino Authors. All rights reserved.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

use slotgram::{Command, FieldBinding, ScalarType, Slot};

use super::common::{GlobalFlags, ManageCgroupsModeFlag};

#[derive(Debug, Default)]
pub struct Checkpoint {
    pub global: GlobalFlags,
    pub image_path: Option<String>,
    pub work_path: Option<String>,
    pub parent_path: Option<String>,
    pub leave_running: bool,
    pub tcp_established: bool,
    pub ext_unix_sk: bool,
    pub shell_job: bool,
    pub lazy_pages: bool,
    pub status_fd: Option<String>,
    pub page_server: Option<String>,
    pub file_locks: bool,
    pub pre_dump: bool,
    pub manage_cgroups_mode: ManageCgroupsModeFlag,
    pub empty_ns: Option<String>,
    pub auto_dedup: bool,
    pub container_id: String,
}

impl Command for Checkpoint {
    fn slots() -> Slot {
        Slot::group(
            vec![GlobalFlags::slot(), Slot::FlagGroup { name: "checkpoint" }],
            vec![Slot::Subcommand { value: "checkpoint" }, Slot::Argument { name: "container_id" }],
        )
    }

    fn bindings(&mut self) -> Vec<FieldBinding<'_>> {
        let mut out = self.global.bindings();
        let g = "checkpoint";
        out.push(FieldBinding::flag("--image-path", &[], g, ScalarType::OptStr, &mut self.image_path));
        out.push(FieldBinding::flag("--work-path", &[], g, ScalarType::OptStr, &mut self.work_path));
        out.push(FieldBinding::flag("--parent-path", &[], g, ScalarType::OptStr, &mut self.parent_path));
        out.push(FieldBinding::flag("--leave-running", &[], g, ScalarType::Bool, &mut self.leave_running));
        out.push(FieldBinding::flag("--tcp-established", &[], g, ScalarType::Bool, &mut self.tcp_established));
        out.push(FieldBinding::flag("--ext-unix-sk", &[], g, ScalarType::Bool, &mut self.ext_unix_sk));
        out.push(FieldBinding::flag("--shell-job", &[], g, ScalarType::Bool, &mut self.shell_job));
        out.push(FieldBinding::flag("--lazy-pages", &[], g, ScalarType::Bool, &mut self.lazy_pages));
        out.push(FieldBinding::flag("--status-fd", &[], g, ScalarType::OptStr, &mut self.status_fd));
        out.push(FieldBinding::flag("--page-server", &[], g, ScalarType::OptStr, &mut self.page_server));
        out.push(FieldBinding::flag("--file-locks", &[], g, ScalarType::Bool, &mut self.file_locks));
        out.push(FieldBinding::flag("--pre-dump", &[], g, ScalarType::Bool, &mut self.pre_dump));
        out.push(self.manage_cgroups_mode.bindings(g));
        out.push(FieldBinding::flag("--empty-ns", &[], g, ScalarType::OptStr, &mut self.empty_ns));
        out.push(FieldBinding::flag("--auto-dedup", &[], g, ScalarType::Bool, &mut self.auto_dedup));
        out.push(FieldBinding::positional("container_id", ScalarType::Str, &mut self.container_id));
        out
    }
}
