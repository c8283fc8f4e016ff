// Copyright (c) 2026 The Vino Authors. All rights reserved.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

use slotgram::{Command, FieldBinding, ScalarType, Slot};

use super::common::GlobalFlags;

/// `runc exec [flags] <id> -- <command> [args...]`. `exec`'s own flags are
/// nested in a position-local `Group` around `container_id` so they stop
/// being legal once the passthrough command begins -- `runc exec foo -- ls
/// -t` must hand `-t` to `ls`, not parse it as exec's own `--tty`. The
/// trailing `Literal("--")` is the separator itself; once it is matched, no
/// later token in this command is read as a flag even if it starts with
/// `-`, and `command` (the program to exec) is a field distinct from `args`
/// (what's passed to it).
#[derive(Debug, Default)]
pub struct Exec {
    pub global: GlobalFlags,
    pub console_socket: Option<String>,
    pub cwd: Option<String>,
    pub env: Vec<String>,
    pub tty: bool,
    pub user: Option<String>,
    pub additional_gids: Vec<String>,
    pub process: Option<String>,
    pub detach: bool,
    pub pid_file: Option<String>,
    pub process_label: Option<String>,
    pub apparmor: Option<String>,
    pub no_new_privs: bool,
    pub cap: Vec<String>,
    pub preserve_fds: Option<u64>,
    pub container_id: String,
    pub command: String,
    pub args: Vec<String>,
}

impl Command for Exec {
    fn slots() -> Slot {
        Slot::group(
            vec![GlobalFlags::slot()],
            vec![
                Slot::Subcommand { value: "exec" },
                Slot::group(
                    vec![Slot::FlagGroup { name: "exec" }],
                    vec![Slot::Argument { name: "container_id" }],
                ),
                Slot::group(
                    vec![],
                    vec![
                        Slot::Literal { value: "--" },
                        Slot::Argument { name: "command" },
                        Slot::Arguments { name: "args" },
                    ],
                ),
            ],
        )
    }

    fn bindings(&mut self) -> Vec<FieldBinding<'_>> {
        let mut out = self.global.bindings();
        let g = "exec";
        out.push(FieldBinding::flag("--console-socket", &[], g, ScalarType::OptStr, &mut self.console_socket));
        out.push(FieldBinding::flag("--cwd", &[], g, ScalarType::OptStr, &mut self.cwd));
        out.push(FieldBinding::flag("--env", &["-e"], g, ScalarType::ListStr, &mut self.env));
        out.push(FieldBinding::flag("--tty", &["-t"], g, ScalarType::Bool, &mut self.tty));
        out.push(FieldBinding::flag("--user", &["-u"], g, ScalarType::OptStr, &mut self.user));
        out.push(FieldBinding::flag(
            "--additional-gids",
            &[],
            g,
            ScalarType::ListStr,
            &mut self.additional_gids,
        ));
        out.push(FieldBinding::flag("--process", &["-p"], g, ScalarType::OptStr, &mut self.process));
        out.push(FieldBinding::flag("--detach", &["-d"], g, ScalarType::Bool, &mut self.detach));
        out.push(FieldBinding::flag("--pid-file", &[], g, ScalarType::OptStr, &mut self.pid_file));
        out.push(FieldBinding::flag("--process-label", &[], g, ScalarType::OptStr, &mut self.process_label));
        out.push(FieldBinding::flag("--apparmor", &[], g, ScalarType::OptStr, &mut self.apparmor));
        out.push(FieldBinding::flag("--no-new-privs", &[], g, ScalarType::Bool, &mut self.no_new_privs));
        out.push(FieldBinding::flag("--cap", &["-c"], g, ScalarType::ListStr, &mut self.cap));
        out.push(FieldBinding::flag("--preserve-fds", &[], g, ScalarType::OptU64, &mut self.preserve_fds));
        out.push(FieldBinding::positional("container_id", ScalarType::Str, &mut self.container_id));
        out.push(FieldBinding::positional("command", ScalarType::Str, &mut self.command));
        out.push(FieldBinding::positional("args", ScalarType::ListStr, &mut self.args));
        out
    }
}
