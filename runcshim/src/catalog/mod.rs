// Copyright (c) 2026 The Vino Authors. All rights reserved.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! The command catalog: one module per runc subcommand, each a `slotgram::Command`
//! grounded in the upstream runc CLI surface, plus the `CommandUnion` that
//! dispatches a raw argv into one of them.

pub mod common;

mod checkpoint;
mod create;
mod delete;
mod events;
mod exec;
mod features;
mod kill;
mod list;
mod pause;
mod ps;
mod restore;
mod resume;
mod run;
mod spec;
mod start;
mod state;
mod union;
mod update;

pub use checkpoint::Checkpoint;
pub use common::GlobalFlags;
pub use create::Create;
pub use delete::Delete;
pub use events::Events;
pub use exec::Exec;
pub use features::Features;
pub use kill::Kill;
pub use list::List;
pub use pause::Pause;
pub use ps::Ps;
pub use restore::Restore;
pub use resume::Resume;
pub use run::Run;
pub use spec::Spec;
pub use start::Start;
pub use state::State;
pub use union::CommandUnion;
pub use update::Update;
