// Copyright (c) 2026 The Vino Authors. All rights reserved.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! The Delegating Client: assembles the process description for a command
//! that will be handed off to an external delegate binary, by folding a
//! value-in/value-out chain of middleware over a [`ProcessDescriptor`].
//!
//! This stays generic on purpose -- nothing here knows what a delegate
//! binary is named, what flags it wants rewritten, or how it gets exec'd.
//! Those are catalog concerns; actually spawning the resulting descriptor is
//! left to the caller, which is free to use `std::process::Command`, `exec`,
//! or anything else appropriate to its platform.

use slotgram_shared::SlotError;

/// Everything needed to hand a command off to a delegate process.
#[derive(Debug, Clone)]
pub struct ProcessDescriptor {
    /// The delegate binary to invoke.
    pub program: String,
    /// The argument vector, not including `program` itself (argv\[0\]).
    pub args: Vec<String>,
    /// Extra environment variables to set, appended to the inherited
    /// environment.
    pub env: Vec<(String, String)>,
    /// Whether the delegate should inherit this process's stdin.
    pub inherit_stdin: bool,
    /// The subcommand name this descriptor was built for, so middleware can
    /// scope itself with [`only`].
    pub subcommand: &'static str,
}

impl ProcessDescriptor {
    pub fn new(program: impl Into<String>, subcommand: &'static str, args: Vec<String>) -> Self {
        ProcessDescriptor {
            program: program.into(),
            args,
            env: Vec::new(),
            inherit_stdin: false,
            subcommand,
        }
    }
}

/// A single step in a client's middleware chain: takes ownership of a
/// descriptor and returns the (possibly modified) descriptor to pass to the
/// next step, or the step after that if it errors out.
pub type Middleware = Box<dyn Fn(ProcessDescriptor) -> Result<ProcessDescriptor, SlotError>>;

/// Wrap `mw` so it only runs when the descriptor's subcommand is `name`,
/// passing the descriptor through unchanged otherwise.
pub fn only(name: &'static str, mw: impl Fn(ProcessDescriptor) -> Result<ProcessDescriptor, SlotError> + 'static) -> Middleware {
    Box::new(move |pd: ProcessDescriptor| if pd.subcommand == name { mw(pd) } else { Ok(pd) })
}

/// A middleware that marks the descriptor to inherit this process's stdin.
/// Typically scoped with [`only`] to the handful of subcommands (`run`,
/// `exec`, `create` with an attached console) that actually need it.
pub fn inherit_stdin() -> Middleware {
    Box::new(|mut pd: ProcessDescriptor| {
        pd.inherit_stdin = true;
        Ok(pd)
    })
}

/// A reusable client: a delegate binary plus an ordered middleware chain.
pub struct Client {
    delegate: String,
    middleware: Vec<Middleware>,
}

impl Client {
    /// Fails with [`SlotError::EmptyDelegatePath`] when `delegate` is empty,
    /// per the Delegating Client's `new_client` contract.
    pub fn new(delegate: impl Into<String>) -> Result<Self, SlotError> {
        let delegate = delegate.into();
        if delegate.is_empty() {
            return Err(SlotError::EmptyDelegatePath);
        }
        Ok(Client { delegate, middleware: Vec::new() })
    }

    /// Append one middleware step to the chain, in the order it should run.
    pub fn with(mut self, mw: Middleware) -> Self {
        self.middleware.push(mw);
        self
    }

    /// Build the descriptor for invoking this client's delegate with
    /// `subcommand`/`args`. Middleware registered with [`Client::with`] wraps
    /// like nested function calls: the last-registered step is innermost (it
    /// runs first, closest to the freshly built descriptor) and the
    /// first-registered step is outermost (it runs last and sees the result
    /// of every other step). With `[A, B, C]` registered in that order, the
    /// chain executed is `A(B(C(base)))` -- so execution order is `C`, `B`,
    /// then `A`, the reverse of registration order.
    pub fn build(&self, subcommand: &'static str, args: Vec<String>) -> Result<ProcessDescriptor, SlotError> {
        let mut pd = ProcessDescriptor::new(self.delegate.clone(), subcommand, args);
        for mw in self.middleware.iter().rev() {
            pd = mw(pd)?;
        }
        Ok(pd)
    }
}
