//! Host services: the opaque boundary between this crate and the outside
//! world.
//!
//! The spec treats process spawn/wait, file I/O, and directory changes as
//! "host services" — a collaborator this crate never implements against the
//! real OS itself. [`HostServices`] is that boundary; [`NullHost`] is the
//! always-available default that reports every operation unsupported, and
//! [`memory::InMemoryHost`] is a self-contained in-memory stand-in (adapted
//! from the teacher's `fs::InMemoryFs`) used by this crate's own tests so the
//! host-bridged commands have something real to exercise without touching
//! the filesystem or spawning processes.

/// Host-service operations the reference source's `9`-prefixed commands
/// delegate to. Every method returns `Err(code)` with a nonzero host error
/// code on failure; `builtins::host_bridge` turns that into
/// `"<cmdname>: ERROR <code>"`.
///
/// Path arguments are passed through verbatim. The reference source's
/// OS-9 lineage flags the last byte of a pathname (high bit set) before
/// handing it to the kernel; that convention is specific to a concrete
/// OS-9-backed adapter's wire format and is its responsibility to apply
/// and strip, not something this trait or `builtins::host_bridge`
/// imposes on every implementation (an in-memory or POSIX adapter has no
/// use for it).
pub trait HostServices {
    fn chain(&mut self, args: &[String]) -> Result<(), i32>;
    fn fork(&mut self, args: &[String]) -> Result<i32, i32>;
    fn wait(&mut self) -> Result<i32, i32>;
    fn sleep(&mut self, ticks: i64) -> Result<(), i32>;
    fn open(&mut self, path: &str, mode: i32) -> Result<i32, i32>;
    fn create(&mut self, path: &str, mode: i32) -> Result<i32, i32>;
    fn close(&mut self, fd: i32) -> Result<(), i32>;
    fn dup(&mut self, fd: i32) -> Result<i32, i32>;
    fn delete(&mut self, path: &str) -> Result<(), i32>;
    fn chgdir(&mut self, path: &str) -> Result<(), i32>;
    fn read(&mut self, fd: i32, n: usize) -> Result<Vec<u8>, i32>;
    fn readln(&mut self, fd: i32) -> Result<String, i32>;
    fn writln(&mut self, fd: i32, data: &str) -> Result<(), i32>;

    /// Request process termination with the given exit code. A concrete
    /// host adapter is expected to diverge (e.g. call `std::process::exit`)
    /// and never return; the `exit`/`9exit` built-ins only observe a
    /// returned value when the host chooses not to terminate, in which case
    /// they report success with an empty Result, matching the spec's "return
    /// value not observable" note.
    fn exit(&mut self, code: i32) -> Result<(), i32>;
}

/// Error code returned by [`NullHost`] for every operation: the service is
/// simply not wired up.
pub const UNSUPPORTED: i32 = -1;

/// Default host: reports every operation as unsupported. Used when an
/// embedder has not supplied a real adapter; keeps the interpreter usable
/// (arithmetic, strings, lists, control flow, procedures) without pulling in
/// any OS dependency.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullHost;

impl HostServices for NullHost {
    fn chain(&mut self, _args: &[String]) -> Result<(), i32> {
        Err(UNSUPPORTED)
    }
    fn fork(&mut self, _args: &[String]) -> Result<i32, i32> {
        Err(UNSUPPORTED)
    }
    fn wait(&mut self) -> Result<i32, i32> {
        Err(UNSUPPORTED)
    }
    fn sleep(&mut self, _ticks: i64) -> Result<(), i32> {
        Err(UNSUPPORTED)
    }
    fn open(&mut self, _path: &str, _mode: i32) -> Result<i32, i32> {
        Err(UNSUPPORTED)
    }
    fn create(&mut self, _path: &str, _mode: i32) -> Result<i32, i32> {
        Err(UNSUPPORTED)
    }
    fn close(&mut self, _fd: i32) -> Result<(), i32> {
        Err(UNSUPPORTED)
    }
    fn dup(&mut self, _fd: i32) -> Result<i32, i32> {
        Err(UNSUPPORTED)
    }
    fn delete(&mut self, _path: &str) -> Result<(), i32> {
        Err(UNSUPPORTED)
    }
    fn chgdir(&mut self, _path: &str) -> Result<(), i32> {
        Err(UNSUPPORTED)
    }
    fn read(&mut self, _fd: i32, _n: usize) -> Result<Vec<u8>, i32> {
        Err(UNSUPPORTED)
    }
    fn readln(&mut self, _fd: i32) -> Result<String, i32> {
        Err(UNSUPPORTED)
    }
    fn writln(&mut self, _fd: i32, _data: &str) -> Result<(), i32> {
        Err(UNSUPPORTED)
    }
    fn exit(&mut self, _code: i32) -> Result<(), i32> {
        Err(UNSUPPORTED)
    }
}

/// A self-contained in-memory host, for exercising the `9`-prefixed
/// commands without a real OS. Adapted from the teacher's
/// `fs::InMemoryFs`, stripped to plain synchronous `HashMap` storage since
/// this interpreter's execution model has no async boundary (see the
/// concurrency model: host I/O blocks the single cooperative thread).
pub mod memory {
    use super::HostServices;
    use std::collections::HashMap;

    #[derive(Debug, Default)]
    pub struct InMemoryHost {
        files: HashMap<String, Vec<u8>>,
        descriptors: HashMap<i32, String>,
        next_fd: i32,
        cwd: String,
        last_fork_args: Vec<String>,
    }

    impl InMemoryHost {
        pub fn new() -> Self {
            Self { next_fd: 3, cwd: "/".to_string(), ..Default::default() }
        }

        pub fn with_file(mut self, path: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
            self.files.insert(path.into(), content.into());
            self
        }

        pub fn cwd(&self) -> &str {
            &self.cwd
        }
    }

    impl HostServices for InMemoryHost {
        fn chain(&mut self, args: &[String]) -> Result<(), i32> {
            self.last_fork_args = args.to_vec();
            Ok(())
        }

        fn fork(&mut self, args: &[String]) -> Result<i32, i32> {
            self.last_fork_args = args.to_vec();
            Ok(1)
        }

        fn wait(&mut self) -> Result<i32, i32> {
            Ok(0)
        }

        fn sleep(&mut self, _ticks: i64) -> Result<(), i32> {
            Ok(())
        }

        fn open(&mut self, path: &str, _mode: i32) -> Result<i32, i32> {
            if !self.files.contains_key(path) {
                return Err(1);
            }
            let fd = self.next_fd;
            self.next_fd += 1;
            self.descriptors.insert(fd, path.to_string());
            Ok(fd)
        }

        fn create(&mut self, path: &str, _mode: i32) -> Result<i32, i32> {
            self.files.entry(path.to_string()).or_default();
            let fd = self.next_fd;
            self.next_fd += 1;
            self.descriptors.insert(fd, path.to_string());
            Ok(fd)
        }

        fn close(&mut self, fd: i32) -> Result<(), i32> {
            self.descriptors.remove(&fd).map(|_| ()).ok_or(1)
        }

        fn dup(&mut self, fd: i32) -> Result<i32, i32> {
            let path = self.descriptors.get(&fd).cloned().ok_or(1)?;
            let new_fd = self.next_fd;
            self.next_fd += 1;
            self.descriptors.insert(new_fd, path);
            Ok(new_fd)
        }

        fn delete(&mut self, path: &str) -> Result<(), i32> {
            self.files.remove(path).map(|_| ()).ok_or(1)
        }

        fn chgdir(&mut self, path: &str) -> Result<(), i32> {
            self.cwd = path.to_string();
            Ok(())
        }

        fn read(&mut self, fd: i32, n: usize) -> Result<Vec<u8>, i32> {
            let path = self.descriptors.get(&fd).ok_or(1)?;
            let content = self.files.get(path).ok_or(1)?;
            Ok(content.iter().take(n).copied().collect())
        }

        fn readln(&mut self, fd: i32) -> Result<String, i32> {
            let path = self.descriptors.get(&fd).ok_or(1)?;
            let content = self.files.get(path).ok_or(1)?;
            let line = content.split(|&b| b == b'\n').next().unwrap_or(&[]);
            Ok(String::from_utf8_lossy(line).into_owned())
        }

        fn writln(&mut self, fd: i32, data: &str) -> Result<(), i32> {
            let path = self.descriptors.get(&fd).ok_or(1)?.clone();
            let entry = self.files.entry(path).or_default();
            entry.extend_from_slice(data.as_bytes());
            entry.push(b'\n');
            Ok(())
        }

        fn exit(&mut self, _code: i32) -> Result<(), i32> {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_host_reports_every_operation_unsupported() {
        let mut host = NullHost;
        assert_eq!(host.sleep(10), Err(UNSUPPORTED));
        assert_eq!(host.open("/x", 0), Err(UNSUPPORTED));
    }

    #[test]
    fn in_memory_host_create_write_read() {
        let mut host = memory::InMemoryHost::new();
        let fd = host.create("/tmp/f", 0).unwrap();
        host.writln(fd, "hello").unwrap();
        let rfd = host.open("/tmp/f", 0).unwrap();
        let data = host.read(rfd, 16).unwrap();
        assert_eq!(String::from_utf8(data).unwrap(), "hello\n");
    }
}
