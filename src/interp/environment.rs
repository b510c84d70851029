//! Variable/array/command environment and call-frame stack.
//!
//! Chains in the reference source ("owner holds head; each node owns its
//! successor") are replaced with `indexmap::IndexMap`, per the source's own
//! design note that a port should prefer "contiguous ordered containers...
//! the chain form is not load-bearing, only case-insensitive linear search
//! is." `IndexMap` additionally preserves insertion order, which keeps
//! `info`'s output deterministic.

use indexmap::IndexMap;

use crate::host::{HostServices, NullHost};
use crate::interp::status::Status;

/// A single stored variable: original-case name plus its value. The map key
/// is the lowercased name; `name` retains original casing for display.
#[derive(Debug, Clone)]
struct Var {
    name: String,
    value: String,
}

fn ci_key(name: &str) -> String {
    name.to_ascii_lowercase()
}

/// One call frame's simple variables. The root frame (index 0) holds
/// globals and is never popped.
#[derive(Debug, Default)]
pub struct CallFrame {
    vars: IndexMap<String, Var>,
}

impl CallFrame {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(&ci_key(name)).map(|v| v.value.as_str())
    }

    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.vars.entry(ci_key(name)) {
            indexmap::map::Entry::Occupied(mut e) => e.get_mut().value = value,
            indexmap::map::Entry::Vacant(e) => {
                e.insert(Var { name: name.to_string(), value });
            }
        }
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.vars.values().map(|v| v.name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.values().map(|v| (v.name.as_str(), v.value.as_str()))
    }
}

/// A process-global array: `(name, key -> value)`. Arrays never belong to a
/// call frame and persist for the interpreter's lifetime.
#[derive(Debug, Default)]
pub struct Array {
    name: String,
    vars: IndexMap<String, Var>,
}

impl Array {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(&ci_key(key)).map(|v| v.value.as_str())
    }

    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        match self.vars.entry(ci_key(key)) {
            indexmap::map::Entry::Occupied(mut e) => e.get_mut().value = value,
            indexmap::map::Entry::Vacant(e) => {
                e.insert(Var { name: key.to_string(), value });
            }
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.vars.values().map(|v| v.name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.values().map(|v| (v.name.as_str(), v.value.as_str()))
    }
}

/// A built-in command's implementation: the interpreter plus its fully
/// substituted argument vector (`argv[0]` is the command name itself, as in
/// the reference source), returning the command's status.
pub type BuiltinFn = fn(&mut Interp, &[String]) -> Status;

/// What a registered command name actually is. Tagged at the type level so
/// "free private data only if the command is a user procedure" (the source's
/// ad-hoc runtime check, see design notes) is simply not representable any
/// other way.
pub enum CommandKind {
    Builtin(BuiltinFn),
    Proc { formals: String, body: String },
}

pub struct CommandEntry {
    pub name: String,
    pub kind: CommandKind,
}

/// Caps that exist purely to keep a runaway or adversarial script from
/// exhausting the host process; they do not change observable semantics for
/// well-behaved scripts. Scaled down from the teacher's
/// `interpreter::types::ExecutionLimits` to the one limit that applies to a
/// tree-walking, non-iterative evaluator: call depth.
#[derive(Debug, Clone, Copy)]
pub struct ExecutionLimits {
    pub max_recursion_depth: u32,
}

impl Default for ExecutionLimits {
    fn default() -> Self {
        Self { max_recursion_depth: 1000 }
    }
}

/// The interpreter: bundles what the reference source kept as four
/// process-wide globals (current call frame, command table, array table,
/// Result) into one value threaded explicitly through every command, per the
/// "global state re-architecture" design note.
pub struct Interp {
    frames: Vec<CallFrame>,
    arrays: IndexMap<String, Array>,
    commands: IndexMap<String, CommandEntry>,
    pub result: String,
    pub host: Box<dyn HostServices>,
    pub limits: ExecutionLimits,
    depth: u32,
}

impl Default for Interp {
    fn default() -> Self {
        Self::new(Box::new(NullHost))
    }
}

impl Interp {
    pub fn new(host: Box<dyn HostServices>) -> Self {
        let mut interp = Self {
            frames: vec![CallFrame::default()],
            arrays: IndexMap::new(),
            commands: IndexMap::new(),
            result: String::new(),
            host,
            limits: ExecutionLimits::default(),
            depth: 0,
        };
        crate::interp::builtins::register_core_commands(&mut interp);
        interp
    }

    // ---- Result slot ----

    pub fn set_result(&mut self, s: impl Into<String>) {
        self.result = s.into();
    }

    pub fn append_result(&mut self, s: &str) {
        self.result.push_str(s);
    }

    pub fn move_to_result(&mut self, s: String) {
        self.result = s;
    }

    pub fn set_result_bool(&mut self, b: bool) {
        self.result = if b { "1" } else { "0" }.to_string();
    }

    pub fn set_result_int(&mut self, n: i64) {
        self.result = n.to_string();
    }

    // ---- Variables (current frame only — no lexical/dynamic traversal) ----

    pub fn get_var(&self, name: &str) -> Option<&str> {
        self.current_frame().get(name)
    }

    pub fn set_var(&mut self, name: &str, value: impl Into<String>) {
        self.current_frame_mut().set(name, value);
    }

    fn current_frame(&self) -> &CallFrame {
        self.frames.last().expect("frame stack is never empty")
    }

    fn current_frame_mut(&mut self) -> &mut CallFrame {
        self.frames.last_mut().expect("frame stack is never empty")
    }

    pub fn frames(&self) -> &[CallFrame] {
        &self.frames
    }

    /// Push a new call frame, run `body`, then pop the frame unconditionally
    /// before returning the body's status — the frame is released "on all
    /// exit paths" without needing a `Drop` guard, since `body` returns its
    /// `Status` by value rather than unwinding through `?`.
    pub fn call_with_frame<F>(&mut self, body: F) -> Status
    where
        F: FnOnce(&mut Interp) -> Status,
    {
        if self.depth >= self.limits.max_recursion_depth {
            self.set_result("recursion limit exceeded");
            return Status::Err;
        }
        self.frames.push(CallFrame::default());
        self.depth += 1;
        let status = body(self);
        self.depth -= 1;
        self.frames.pop();
        status
    }

    // ---- Arrays (process-global, never frame-scoped) ----

    pub fn array_names(&self) -> impl Iterator<Item = &str> {
        self.arrays.values().map(|a| a.name.as_str())
    }

    pub fn get_array(&self, name: &str) -> Option<&Array> {
        self.arrays.get(&ci_key(name))
    }

    pub fn array_set(&mut self, array: &str, key: &str, value: impl Into<String>) {
        self.arrays
            .entry(ci_key(array))
            .or_insert_with(|| Array { name: array.to_string(), vars: IndexMap::new() })
            .set(key, value);
    }

    // ---- Commands ----

    pub fn get_command(&self, name: &str) -> Option<&CommandEntry> {
        self.commands.get(&ci_key(name))
    }

    pub fn register_command(&mut self, name: &str, kind: CommandKind) {
        self.commands
            .insert(ci_key(name), CommandEntry { name: name.to_string(), kind });
    }

    pub fn commands(&self) -> impl Iterator<Item = &CommandEntry> {
        self.commands.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variable_lookup_is_case_insensitive() {
        let mut interp = Interp::default();
        interp.set_var("Foo", "bar");
        assert_eq!(interp.get_var("foo"), Some("bar"));
        assert_eq!(interp.get_var("FOO"), Some("bar"));
    }

    #[test]
    fn frames_are_popped_on_every_exit_status() {
        let mut interp = Interp::default();
        for status in [Status::Ok, Status::Err, Status::Return, Status::Break, Status::Continue] {
            let before = interp.frames().len();
            let result = interp.call_with_frame(|i| {
                i.set_var("local", "x");
                status
            });
            assert_eq!(result, status);
            assert_eq!(interp.frames().len(), before);
        }
    }

    #[test]
    fn frame_variables_do_not_leak_to_parent() {
        let mut interp = Interp::default();
        interp.call_with_frame(|i| {
            i.set_var("inner", "1");
            Status::Ok
        });
        assert_eq!(interp.get_var("inner"), None);
    }

    #[test]
    fn arrays_persist_across_frames_and_are_distinct_from_variables() {
        let mut interp = Interp::default();
        interp.array_set("a", "x", "1");
        interp.call_with_frame(|i| {
            i.array_set("a", "y", "2");
            Status::Ok
        });
        let arr = interp.get_array("a").unwrap();
        assert_eq!(arr.get("x"), Some("1"));
        assert_eq!(arr.get("y"), Some("2"));
        assert_eq!(interp.get_var("x"), None);
    }
}
