// Copyright (c) 2026 The Vino Authors. All rights reserved.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

use once_cell::sync::Lazy;
use slotgram::{inherit_stdin, only, parse, render, validate_tags, Client, Command, FieldBinding, ScalarType, Slot, SlotError};

/// `Command::slots()` is documented as "logically pure; implementations may
/// memoize" (spec.md §4.1). This fixture exercises that allowance: the tree
/// is built once behind a `Lazy` and every call to `slots()` clones the
/// cached value instead of re-allocating the `Group`.
#[derive(Default)]
struct Cached {
    archive: bool,
    target: String,
}

static CACHED_SLOTS: Lazy<Slot> = Lazy::new(|| {
    Slot::group(vec![Slot::FlagGroup { name: "cached_flags" }], vec![Slot::Argument { name: "target" }])
});

impl Command for Cached {
    fn slots() -> Slot {
        CACHED_SLOTS.clone()
    }

    fn bindings(&mut self) -> Vec<FieldBinding<'_>> {
        vec![
            FieldBinding::flag("--archive", &["-a"], "cached_flags", ScalarType::Bool, &mut self.archive),
            FieldBinding::positional("target", ScalarType::Str, &mut self.target),
        ]
    }
}

#[derive(Default)]
struct Echo {
    verbose: bool,
    name: Option<String>,
    target: String,
}

impl Command for Echo {
    fn slots() -> Slot {
        Slot::group(vec![Slot::FlagGroup { name: "echo_flags" }], vec![Slot::Argument { name: "target" }])
    }

    fn bindings(&mut self) -> Vec<FieldBinding<'_>> {
        vec![
            FieldBinding::flag("--verbose", &["-v"], "echo_flags", ScalarType::Bool, &mut self.verbose),
            FieldBinding::flag("--name", &[], "echo_flags", ScalarType::OptStr, &mut self.name),
            FieldBinding::positional("target", ScalarType::Str, &mut self.target),
        ]
    }
}

#[derive(Default)]
struct CopyCmd {
    verbose: bool,
    paths: Vec<String>,
}

impl Command for CopyCmd {
    fn slots() -> Slot {
        Slot::group(
            vec![Slot::FlagGroup { name: "copy_flags" }],
            vec![Slot::Literal { value: "--" }, Slot::Arguments { name: "paths" }],
        )
    }

    fn bindings(&mut self) -> Vec<FieldBinding<'_>> {
        vec![
            FieldBinding::flag("-v", &[], "copy_flags", ScalarType::Bool, &mut self.verbose),
            FieldBinding::positional("paths", ScalarType::ListStr, &mut self.paths),
        ]
    }
}

#[derive(Default)]
struct Status {
    quiet: bool,
}

impl Command for Status {
    fn slots() -> Slot {
        Slot::group(vec![Slot::FlagGroup { name: "status_flags" }], vec![Slot::Subcommand { value: "status" }])
    }

    fn bindings(&mut self) -> Vec<FieldBinding<'_>> {
        vec![FieldBinding::flag("--quiet", &[], "status_flags", ScalarType::Bool, &mut self.quiet)]
    }
}

#[derive(Default)]
struct UpdateCmd {
    id: String,
    memory: Option<i64>,
}

impl Command for UpdateCmd {
    fn slots() -> Slot {
        Slot::group(
            vec![Slot::FlagGroup { name: "resources" }],
            vec![Slot::Subcommand { value: "update" }, Slot::Argument { name: "id" }],
        )
    }

    fn bindings(&mut self) -> Vec<FieldBinding<'_>> {
        vec![
            FieldBinding::positional("id", ScalarType::Str, &mut self.id),
            FieldBinding::flag("--memory", &[], "resources", ScalarType::OptI64, &mut self.memory),
        ]
    }
}

#[derive(Default)]
struct Broken {
    nodash: bool,
    dup: bool,
    orphan: bool,
    ghost: bool,
    missing_arg_field: String,
    str_flag: String,
    bool_enum: bool,
}

impl Command for Broken {
    fn slots() -> Slot {
        Slot::group(vec![Slot::FlagGroup { name: "g1" }], vec![Slot::Argument { name: "arg1" }])
    }

    fn bindings(&mut self) -> Vec<FieldBinding<'_>> {
        vec![
            FieldBinding::flag("nodash", &[], "g1", ScalarType::Bool, &mut self.nodash),
            FieldBinding::flag("--dup", &["--dup"], "g1", ScalarType::Bool, &mut self.dup),
            FieldBinding::flag("--orphan", &[], "", ScalarType::Bool, &mut self.orphan),
            FieldBinding::flag("--ghost", &[], "missing_group", ScalarType::Bool, &mut self.ghost),
            FieldBinding::positional("missing_arg", ScalarType::Str, &mut self.missing_arg_field),
            FieldBinding::flag_enum("--str-flag", &[], "g1", ScalarType::Str, &["a", "b"], &mut self.str_flag),
            FieldBinding::flag_enum("--bool-enum", &[], "g1", ScalarType::Bool, &["x"], &mut self.bool_enum),
        ]
    }
}

slotgram::define_union! {
    pub enum Dispatched {
        Status(Status) => "status",
        Update(UpdateCmd) => "update",
    }
}

#[test]
fn echo_round_trips_with_default_flag_placement() {
    let mut echo = Echo::default();
    parse(&mut echo, &["--verbose", "--name", "bob", "hello"]).expect("parse");
    assert!(echo.verbose);
    assert_eq!(echo.name.as_deref(), Some("bob"));
    assert_eq!(echo.target, "hello");

    let tokens = render(&mut echo).expect("render");
    assert_eq!(tokens, vec!["--verbose", "--name", "bob", "hello"]);
}

#[test]
fn literal_separator_blocks_further_ambient_flag_consumption() {
    let mut copy = CopyCmd::default();
    parse(&mut copy, &["-v", "--", "-v", "file.txt"]).expect("parse");
    assert!(copy.verbose);
    assert_eq!(copy.paths, vec!["-v".to_string(), "file.txt".to_string()]);

    let tokens = render(&mut copy).expect("render");
    assert_eq!(tokens, vec!["-v", "--", "-v", "file.txt"]);
}

#[test]
fn group_with_no_ordered_argument_falls_back_to_trailing_injection() {
    let mut status = Status { quiet: true };
    assert_eq!(render(&mut status).expect("render"), vec!["status", "--quiet"]);

    let mut quiet_status = Status::default();
    parse(&mut quiet_status, &["--quiet"]).expect("parse");
    assert!(quiet_status.quiet);

    let mut default_status = Status::default();
    assert_eq!(render(&mut default_status).expect("render"), vec!["status"]);
}

#[test]
fn update_uses_after_first_argument_placement() {
    let mut update = UpdateCmd { id: "abc123".to_string(), memory: Some(100) };
    let tokens = render(&mut update).expect("render");
    assert_eq!(tokens, vec!["update", "abc123", "--memory", "100"]);

    let mut parsed = UpdateCmd::default();
    parse(&mut parsed, &["abc123", "--memory", "100"]).expect("parse");
    assert_eq!(parsed.id, "abc123");
    assert_eq!(parsed.memory, Some(100));
}

#[test]
fn tag_validator_reports_every_violation_not_just_the_first() {
    let mut broken = Broken::default();
    let err = validate_tags(&mut broken).expect_err("expected tag errors");
    let SlotError::Tag(messages) = err else { panic!("expected SlotError::Tag") };

    assert_eq!(messages.len(), 6, "unexpected message set: {messages:#?}");
    assert!(messages.iter().any(|m| m.contains("nodash") && m.contains("'-'")));
    assert!(messages.iter().any(|m| m.contains("--dup") && m.contains("duplicates")));
    assert!(messages.iter().any(|m| m.contains("--orphan") && m.contains("no group name")));
    assert!(messages.iter().any(|m| m.contains("--ghost") && m.contains("missing_group")));
    assert!(messages.iter().any(|m| m.contains("missing_arg") && m.contains("not present")));
    assert!(messages.iter().any(|m| m.contains("--bool-enum") && m.contains("enum")));
}

#[test]
fn union_dispatch_finds_earliest_subcommand_token_and_round_trips() {
    let mut dispatched =
        Dispatched::parse(&["abc123", "update", "--memory", "100"]).expect("dispatch parse");
    match &dispatched {
        Dispatched::Update(u) => {
            assert_eq!(u.id, "abc123");
            assert_eq!(u.memory, Some(100));
        }
        Dispatched::Status(_) => panic!("expected Update variant"),
    }

    let tokens = dispatched.render().expect("dispatch render");
    assert_eq!(tokens, vec!["update", "abc123", "--memory", "100"]);
}

#[test]
fn union_dispatch_handles_subcommand_only_variants() {
    let mut dispatched = Dispatched::parse(&["status", "--quiet"]).expect("dispatch parse");
    match &dispatched {
        Dispatched::Status(s) => assert!(s.quiet),
        Dispatched::Update(_) => panic!("expected Status variant"),
    }

    assert_eq!(dispatched.render().expect("dispatch render"), vec!["status", "--quiet"]);
}

#[test]
fn client_middleware_chain_nests_in_registration_order() {
    // With [A, B, C] registered in that order the executed chain is
    // A(B(C(base))): C runs first (innermost), A runs last and sees
    // whatever B and C already did.
    let order = std::sync::Arc::new(std::sync::Mutex::new(Vec::new()));
    let mk = |label: &'static str, order: std::sync::Arc<std::sync::Mutex<Vec<&'static str>>>| {
        Box::new(move |pd: slotgram::ProcessDescriptor| {
            order.lock().unwrap().push(label);
            Ok(pd)
        }) as slotgram::Middleware
    };

    let client = Client::new("runc")
        .expect("non-empty delegate path")
        .with(mk("A", order.clone()))
        .with(mk("B", order.clone()))
        .with(mk("C", order.clone()));

    client.build("run", vec!["run".to_string()]).expect("build");
    assert_eq!(*order.lock().unwrap(), vec!["C", "B", "A"]);
}

#[test]
fn memoized_slots_are_shared_across_instances() {
    let mut first = Cached::default();
    parse(&mut first, &["--archive", "box"]).expect("parse");
    assert!(first.archive);
    assert_eq!(first.target, "box");
    assert_eq!(render(&mut first).expect("render"), vec!["--archive", "box"]);

    // A second, independent instance observes the same cached tree.
    let mut second = Cached::default();
    parse(&mut second, &["-a", "crate"]).expect("parse");
    assert!(second.archive);
    assert_eq!(second.target, "crate");
}

#[test]
fn client_new_rejects_an_empty_delegate_path() {
    let err = Client::new("").expect_err("empty delegate path must be rejected");
    assert_eq!(err, SlotError::EmptyDelegatePath);
}

#[test]
fn client_middleware_scopes_itself_with_only() {
    let client = Client::new("runc").expect("non-empty delegate path").with(only("run", inherit_stdin()));

    let run_pd = client.build("run", vec!["run".to_string(), "my-container".to_string()]).expect("build run");
    assert!(run_pd.inherit_stdin);
    assert_eq!(run_pd.program, "runc");

    let list_pd = client.build("list", vec!["list".to_string()]).expect("build list");
    assert!(!list_pd.inherit_stdin);
}
