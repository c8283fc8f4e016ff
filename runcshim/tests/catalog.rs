// Copyright (c) 2026 The Vino Authors. All rights reserved.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

use runcshim::catalog::{CommandUnion, Exec, Kill, Ps, Run, Update};
use runcshim::client::delegate_client;
use runcshim::error::ClientError;
use slotgram::{parse, render};

#[test]
fn delegate_client_rejects_an_empty_delegate_path() {
    let err = delegate_client("").expect_err("empty delegate path must be rejected");
    assert!(matches!(err, ClientError::EmptyDelegatePath));
}

#[test]
fn run_round_trips_with_bundle_and_detach() {
    let mut run = Run::default();
    // `-d` is accepted on parse but the renderer always emits the canonical
    // `--detach` spelling, so the round trip normalizes short flags away.
    parse(&mut run, &["--bundle", "/bundles/foo", "-d", "my-container"]).expect("parse run");
    assert_eq!(run.bundle.as_deref(), Some("/bundles/foo"));
    assert!(run.detach);
    assert_eq!(run.container_id, "my-container");

    let tokens = render(&mut run).expect("render run");
    assert_eq!(tokens, vec!["run", "--bundle", "/bundles/foo", "--detach", "my-container"]);
}

#[test]
fn exec_with_short_tty_flag_does_not_leak_into_command() {
    let mut exec = Exec::default();
    parse(&mut exec, &["-t", "my-container", "--", "ls", "-t"]).expect("parse exec");
    assert!(exec.tty);
    assert_eq!(exec.container_id, "my-container");
    // the trailing `-t` belongs to the passthrough command, not exec's own flags
    assert_eq!(exec.command, "ls");
    assert_eq!(exec.args, vec!["-t".to_string()]);

    let tokens = render(&mut exec).expect("render exec");
    assert_eq!(tokens, vec!["exec", "--tty", "my-container", "--", "ls", "-t"]);
}

#[test]
fn exec_accepts_mixed_equals_and_space_flag_forms() {
    let mut exec = Exec::default();
    parse(&mut exec, &["--user=root", "--cwd", "/tmp", "my-container", "--", "pwd"]).expect("parse exec");
    assert_eq!(exec.user.as_deref(), Some("root"));
    assert_eq!(exec.cwd.as_deref(), Some("/tmp"));
    assert_eq!(exec.container_id, "my-container");
    assert_eq!(exec.command, "pwd");
    assert!(exec.args.is_empty());
}

#[test]
fn exec_splits_env_flags_and_separates_command_from_its_args() {
    let mut exec = Exec::default();
    parse(
        &mut exec,
        &["--tty", "--env", "FOO=1", "--env=BAR=2", "cid", "--", "/bin/sh", "-c", "echo"],
    )
    .expect("parse exec");
    assert!(exec.tty);
    assert_eq!(exec.env, vec!["FOO=1".to_string(), "BAR=2".to_string()]);
    assert_eq!(exec.container_id, "cid");
    assert_eq!(exec.command, "/bin/sh");
    assert_eq!(exec.args, vec!["-c".to_string(), "echo".to_string()]);
}

#[test]
fn update_renders_resources_after_the_container_id() {
    let mut update = Update::default();
    parse(&mut update, &["my-container", "-r", "-"]).expect("parse update");
    assert_eq!(update.container_id, "my-container");
    assert_eq!(update.resources.as_deref(), Some("-"));

    // `-r` is kept as `update`'s own canonical spelling on render (unlike
    // every other command's short aliases, which normalize to the long form).
    let tokens = render(&mut update).expect("render update");
    assert_eq!(tokens, vec!["update", "my-container", "-r", "-"]);
}

#[test]
fn kill_accepts_an_optional_signal() {
    let mut with_signal = Kill::default();
    parse(&mut with_signal, &["my-container", "SIGKILL"]).expect("parse kill with signal");
    assert_eq!(with_signal.container_id, "my-container");
    assert_eq!(with_signal.signal, vec!["SIGKILL".to_string()]);

    let mut without_signal = Kill::default();
    parse(&mut without_signal, &["my-container"]).expect("parse kill without signal");
    assert_eq!(without_signal.container_id, "my-container");
    assert!(without_signal.signal.is_empty());
}

#[test]
fn ps_passes_trailing_options_through_to_the_host_ps() {
    let mut ps = Ps::default();
    parse(&mut ps, &["my-container", "-ef", "--sort", "pid"]).expect("parse ps");
    assert_eq!(ps.container_id, "my-container");
    assert_eq!(ps.ps_args, vec!["-ef".to_string(), "--sort".to_string(), "pid".to_string()]);
}

#[test]
fn command_union_dispatches_run_from_full_argv() {
    let mut dispatched = CommandUnion::parse(&["--debug", "run", "--bundle", "/b", "c1"]).expect("dispatch");
    match &dispatched {
        CommandUnion::Run(r) => {
            assert!(r.global.debug);
            assert_eq!(r.bundle.as_deref(), Some("/b"));
            assert_eq!(r.container_id, "c1");
        }
        _ => panic!("expected Run variant"),
    }

    // The renderer normalizes to its own canonical flag placement (subcommand
    // token, then flags, then positional) regardless of the input's order.
    let tokens = dispatched.render().expect("render dispatched");
    assert_eq!(tokens, vec!["run", "--debug", "--bundle", "/b", "c1"]);
}
