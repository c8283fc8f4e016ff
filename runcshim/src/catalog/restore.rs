// Copyright (c) 2026 The Vino Authors. All rights reserved.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

use slotgram::{Command, FieldBinding, ScalarType, Slot};

use super::common::{GlobalFlags, ManageCgroupsModeFlag};

#[derive(Debug, Default)]
pub struct Restore {
    pub global: GlobalFlags,
    pub image_path: Option<String>,
    pub work_path: Option<String>,
    pub tcp_established: bool,
    pub ext_unix_sk: bool,
    pub shell_job: bool,
    pub file_locks: bool,
    pub manage_cgroups_mode: ManageCgroupsModeFlag,
    pub bundle: Option<String>,
    pub detach: bool,
    pub pid_file: Option<String>,
    pub no_subreaper: bool,
    pub no_pivot: bool,
    pub empty_ns: Option<String>,
    pub auto_dedup: bool,
    pub lazy_pages: bool,
    pub container_id: String,
}

impl Command for Restore {
    fn slots() -> Slot {
        Slot::group(
            vec![GlobalFlags::slot(), Slot::FlagGroup { name: "restore" }],
            vec![Slot::Subcommand { value: "restore" }, Slot::Argument { name: "container_id" }],
        )
    }

    fn bindings(&mut self) -> Vec<FieldBinding<'_>> {
        let mut out = self.global.bindings();
        let g = "restore";
        out.push(FieldBinding::flag("--image-path", &[], g, ScalarType::OptStr, &mut self.image_path));
        out.push(FieldBinding::flag("--work-path", &[], g, ScalarType::OptStr, &mut self.work_path));
        out.push(FieldBinding::flag("--tcp-established", &[], g, ScalarType::Bool, &mut self.tcp_established));
        out.push(FieldBinding::flag("--ext-unix-sk", &[], g, ScalarType::Bool, &mut self.ext_unix_sk));
        out.push(FieldBinding::flag("--shell-job", &[], g, ScalarType::Bool, &mut self.shell_job));
        out.push(FieldBinding::flag("--file-locks", &[], g, ScalarType::Bool, &mut self.file_locks));
        out.push(self.manage_cgroups_mode.bindings(g));
        out.push(FieldBinding::flag("--bundle", &["-b"], g, ScalarType::OptStr, &mut self.bundle));
        out.push(FieldBinding::flag("--detach", &["-d"], g, ScalarType::Bool, &mut self.detach));
        out.push(FieldBinding::flag("--pid-file", &[], g, ScalarType::OptStr, &mut self.pid_file));
        out.push(FieldBinding::flag("--no-subreaper", &[], g, ScalarType::Bool, &mut self.no_subreaper));
        out.push(FieldBinding::flag("--no-pivot", &[], g, ScalarType::Bool, &mut self.no_pivot));
        out.push(FieldBinding::flag("--empty-ns", &[], g, ScalarType::OptStr, &mut self.empty_ns));
        out.push(FieldBinding::flag("--auto-dedup", &[], g, ScalarType::Bool, &mut self.auto_dedup));
        out.push(FieldBinding::flag("--lazy-pages", &[], g, ScalarType::Bool, &mut self.lazy_pages));
        out.push(FieldBinding::positional("container_id", ScalarType::Str, &mut self.container_id));
        out
    }
}
