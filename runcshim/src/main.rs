// Copyright (c) 2026 The Vino Authors. All rights reserved.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

use std::env;
use std::os::unix::process::CommandExt;
use std::process::{Command as StdCommand, Stdio};

use runcshim::catalog::CommandUnion;
use runcshim::client::{build_process, delegate_client};
use runcshim::error::ClientError;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    if let Err(err) = run() {
        tracing::error!(error = %err, "runcshim failed");
        std::process::exit(1);
    }
}

fn run() -> Result<(), ClientError> {
    let argv: Vec<String> = env::args().skip(1).collect();
    if argv.is_empty() {
        return Err(ClientError::NoArgs);
    }
    let tokens: Vec<&str> = argv.iter().map(String::as_str).collect();

    let mut union = CommandUnion::parse(&tokens)?;
    let client = delegate_client("runc")?;
    let descriptor = build_process(&client, &mut union)?;

    tracing::debug!(program = %descriptor.program, args = ?descriptor.args, "delegating");

    let mut cmd = StdCommand::new(&descriptor.program);
    cmd.args(&descriptor.args);
    for (key, value) in &descriptor.env {
        cmd.env(key, value);
    }
    if !descriptor.inherit_stdin {
        cmd.stdin(Stdio::null());
    }

    // `exec` replaces this process on success and never returns; reaching
    // this line means it failed.
    let source = cmd.exec();
    Err(ClientError::Exec { program: descriptor.program.clone(), source })
}
