//! Built-in command set, grouped by the kind of work each does. Every
//! submodule exposes a `register(&mut Interp)` that installs its commands;
//! [`register_core_commands`] is the single entry point `Interp::new` calls.

pub mod arithmetic;
pub mod arrays;
pub mod codec;
pub mod control_flow;
pub mod host_bridge;
pub mod introspection;
pub mod lists;
pub mod pattern;
pub mod procs;
pub mod strings;
pub mod variables;

use crate::interp::environment::Interp;

pub fn register_core_commands(interp: &mut Interp) {
    arithmetic::register(interp);
    strings::register(interp);
    pattern::register(interp);
    variables::register(interp);
    arrays::register(interp);
    control_flow::register(interp);
    procs::register(interp);
    lists::register(interp);
    codec::register(interp);
    introspection::register(interp);
    host_bridge::register(interp);
}
