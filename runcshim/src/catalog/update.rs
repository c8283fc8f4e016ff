// Copyright (c) 2026 The Vino Authors. All rights reserved.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

use slotgram::{Command, FieldBinding, ScalarType, Slot};

use super::common::GlobalFlags;

/// `runc update <id> [resource flags]`. This is the one subcommand whose
/// `resources` flag group renders *after* its positional rather than before
/// it -- see the Renderer's after-first-argument placement rule, keyed off
/// this subcommand's literal name.
#[derive(Debug, Default)]
pub struct Update {
    pub global: GlobalFlags,
    pub resources: Option<String>,
    pub blkio_weight: Option<u64>,
    pub cpu_period: Option<u64>,
    pub cpu_quota: Option<u64>,
    pub cpu_share: Option<u64>,
    pub cpu_rt_period: Option<u64>,
    pub cpu_rt_runtime: Option<u64>,
    pub cpuset_cpus: Option<String>,
    pub cpuset_mems: Option<String>,
    pub kernel_memory: Option<u64>,
    pub kernel_memory_tcp: Option<u64>,
    pub memory: Option<u64>,
    pub memory_reservation: Option<u64>,
    pub memory_swap: Option<u64>,
    pub pids_limit: Option<u64>,
    pub l3_cache_schema: Option<String>,
    pub mem_bw_schema: Option<String>,
    pub container_id: String,
}

impl Command for Update {
    fn slots() -> Slot {
        Slot::group(
            vec![GlobalFlags::slot(), Slot::FlagGroup { name: "resources" }],
            vec![Slot::Subcommand { value: "update" }, Slot::Argument { name: "container_id" }],
        )
    }

    fn bindings(&mut self) -> Vec<FieldBinding<'_>> {
        let mut out = self.global.bindings();
        let g = "resources";
        // `-r` is `update`'s own canonical spelling (runc never normalizes
        // it to `--resources`); keep it as the render form rather than the
        // long flag the way every other command's aliases are handled.
        out.push(FieldBinding::flag_rendered_as(
            "--resources",
            &["-r"],
            "-r",
            g,
            ScalarType::OptStr,
            &mut self.resources,
        ));
        out.push(FieldBinding::flag("--blkio-weight", &[], g, ScalarType::OptU64, &mut self.blkio_weight));
        out.push(FieldBinding::flag("--cpu-period", &[], g, ScalarType::OptU64, &mut self.cpu_period));
        out.push(FieldBinding::flag("--cpu-quota", &[], g, ScalarType::OptU64, &mut self.cpu_quota));
        out.push(FieldBinding::flag("--cpu-share", &[], g, ScalarType::OptU64, &mut self.cpu_share));
        out.push(FieldBinding::flag("--cpu-rt-period", &[], g, ScalarType::OptU64, &mut self.cpu_rt_period));
        out.push(FieldBinding::flag("--cpu-rt-runtime", &[], g, ScalarType::OptU64, &mut self.cpu_rt_runtime));
        out.push(FieldBinding::flag("--cpuset-cpus", &[], g, ScalarType::OptStr, &mut self.cpuset_cpus));
        out.push(FieldBinding::flag("--cpuset-mems", &[], g, ScalarType::OptStr, &mut self.cpuset_mems));
        out.push(FieldBinding::flag("--kernel-memory", &[], g, ScalarType::OptU64, &mut self.kernel_memory));
        out.push(FieldBinding::flag(
            "--kernel-memory-tcp",
            &[],
            g,
            ScalarType::OptU64,
            &mut self.kernel_memory_tcp,
        ));
        out.push(FieldBinding::flag("--memory", &[], g, ScalarType::OptU64, &mut self.memory));
        out.push(FieldBinding::flag(
            "--memory-reservation",
            &[],
            g,
            ScalarType::OptU64,
            &mut self.memory_reservation,
        ));
        out.push(FieldBinding::flag("--memory-swap", &[], g, ScalarType::OptU64, &mut self.memory_swap));
        out.push(FieldBinding::flag("--pids-limit", &[], g, ScalarType::OptU64, &mut self.pids_limit));
        out.push(FieldBinding::flag("--l3-cache-schema", &[], g, ScalarType::OptStr, &mut self.l3_cache_schema));
        out.push(FieldBinding::flag("--mem-bw-schema", &[], g, ScalarType::OptStr, &mut self.mem_bw_schema));
        out.push(FieldBinding::positional("container_id", ScalarType::Str, &mut self.container_id));
        out
    }
}
