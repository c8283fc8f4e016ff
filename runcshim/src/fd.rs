// Copyright (c) 2026 The Vino Authors. All rights reserved.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! File descriptor inheritance helpers for `run`/`exec`'s `--preserve-fds`:
//! enumerating which of the parent's open descriptors should survive into
//! the delegate, and sanity-checking a caller's claimed count against what
//! is actually open. The spawner enumerates open FDs >= 3 on the parent,
//! filtering those marked close-on-exec, any pipe or epoll FD, and the
//! enumeration directory's own FD; this lives outside the grammar engine
//! since it's pure OS-process plumbing, not CLI grammar.

use std::os::unix::io::RawFd;
use std::path::Path;

use nix::fcntl::{fcntl, FcntlArg, FdFlag};

/// Descriptors at or above this number are the ones a `--preserve-fds N`
/// claim (or an inheritance decision) ever concerns; 0-2 are always stdio.
pub const FIRST_INHERITABLE_FD: RawFd = 3;

/// Count open file descriptors numbered `first` or above, by walking
/// `/proc/self/fd`. Used to sanity-check a `--preserve-fds N` claim against
/// what the caller actually left open.
pub fn inherited_fd_count(first: RawFd) -> std::io::Result<usize> {
    Ok(enumerate(first)?.len())
}

/// Whether `fd` is currently a valid open descriptor.
pub fn fd_is_open(fd: RawFd) -> bool {
    fcntl(fd, FcntlArg::F_GETFD).is_ok()
}

/// Whether `fd` is marked close-on-exec (`FD_CLOEXEC`). A descriptor that is
/// already close-on-exec never reaches the delegate process regardless of
/// this module's decisions, so it is filtered out rather than counted as
/// inheritable.
fn is_close_on_exec(fd: RawFd) -> bool {
    match fcntl(fd, FcntlArg::F_GETFD) {
        Ok(bits) => FdFlag::from_bits_truncate(bits).contains(FdFlag::FD_CLOEXEC),
        Err(_) => false,
    }
}

/// Whether `/proc/self/fd/<fd>`'s symlink target names a pipe or an epoll
/// instance. Both are anonymous kernel objects the kernel represents as a
/// synthetic symlink target (`pipe:[12345]`, `anon_inode:[eventpoll]`)
/// rather than a real path; neither should ever be handed to a delegate
/// process, which has no way to make sense of either across an exec.
fn is_pipe_or_epoll(fd: RawFd) -> bool {
    let Ok(target) = std::fs::read_link(format!("/proc/self/fd/{fd}")) else { return false };
    let target = target.to_string_lossy();
    target.starts_with("pipe:") || target.contains("anon_inode:[eventpoll]")
}

/// Every descriptor numbered `first` or above that should be inherited by a
/// spawned delegate: currently open, not close-on-exec, not a pipe or epoll
/// instance, and not the directory handle this function itself opened to do
/// the enumeration (`read_dir` holds its own fd over `/proc/self/fd` while
/// iterating, which would otherwise show up as a false positive).
pub fn enumerate(first: RawFd) -> std::io::Result<Vec<RawFd>> {
    let dir = std::fs::File::open(Path::new("/proc/self/fd"))?;
    let self_fd = std::os::unix::io::AsRawFd::as_raw_fd(&dir);

    let mut out = Vec::new();
    for entry in std::fs::read_dir(Path::new("/proc/self/fd"))? {
        let entry = entry?;
        let Ok(fd) = entry.file_name().to_string_lossy().parse::<RawFd>() else { continue };
        if fd < first || fd == self_fd {
            continue;
        }
        if is_close_on_exec(fd) || is_pipe_or_epoll(fd) {
            continue;
        }
        out.push(fd);
    }
    out.sort_unstable();
    Ok(out)
}
