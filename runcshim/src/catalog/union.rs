// Copyright (c) 2026 The Vino Authors. All rights reserved.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! The full runc command surface as one sum type, wired up through
//! `slotgram::define_union!`.

use super::checkpoint::Checkpoint;
use super::create::Create;
use super::delete::Delete;
use super::events::Events;
use super::exec::Exec;
use super::features::Features;
use super::kill::Kill;
use super::list::List;
use super::pause::Pause;
use super::ps::Ps;
use super::restore::Restore;
use super::resume::Resume;
use super::run::Run;
use super::spec::Spec;
use super::start::Start;
use super::state::State;
use super::update::Update;

slotgram::define_union! {
    pub enum CommandUnion {
        Checkpoint(Checkpoint) => "checkpoint",
        Create(Create) => "create",
        Delete(Delete) => "delete",
        Events(Events) => "events",
        Exec(Exec) => "exec",
        Features(Features) => "features",
        Kill(Kill) => "kill",
        List(List) => "list",
        Pause(Pause) => "pause",
        Ps(Ps) => "ps",
        Restore(Restore) => "restore",
        Resume(Resume) => "resume",
        Run(Run) => "run",
        Spec(Spec) => "spec",
        Start(Start) => "start",
        State(State) => "state",
        Update(Update) => "update",
    }
}
