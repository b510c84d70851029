//! `info`: dumps procedures, built-in command names, the call-frame stack,
//! and array contents to standard output for interactive debugging. Sets
//! Result to empty; there is nothing meaningful to return as a value.

use crate::interp::environment::{CommandKind, CommandKind::Builtin, Interp};
use crate::interp::status::Status;

pub fn register(interp: &mut Interp) {
    interp.register_command("info", Builtin(info));
}

fn info(interp: &mut Interp, argv: &[String]) -> Status {
    if argv.len() != 1 {
        interp.set_result("Wrong number of args for info");
        return Status::Err;
    }

    let mut out = String::new();
    for entry in interp.commands() {
        match &entry.kind {
            CommandKind::Proc { formals, body } => {
                out.push_str(&format!("proc {} {{{}}} {{{}}}\n", entry.name, formals, body));
            }
            CommandKind::Builtin(_) => {
                out.push_str(&format!("command {}\n", entry.name));
            }
        }
    }
    for (depth, frame) in interp.frames().iter().enumerate() {
        out.push_str(&format!("frame {}:\n", depth));
        for (name, value) in frame.iter() {
            out.push_str(&format!("  {} = {}\n", name, value));
        }
    }
    for name in interp.array_names() {
        let Some(arr) = interp.get_array(name) else { continue };
        out.push_str(&format!("array {}:\n", name));
        for (key, value) in arr.iter() {
            out.push_str(&format!("  {}({}) = {}\n", name, key, value));
        }
    }

    print!("{}", out);
    interp.set_result("");
    Status::Ok
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interp::evaluator::eval;

    #[test]
    fn info_clears_result_and_does_not_error() {
        let mut interp = Interp::default();
        eval(&mut interp, "proc f x {return $x}", "test");
        let argv: Vec<String> = vec!["info".to_string()];
        assert_eq!(info(&mut interp, &argv), Status::Ok);
        assert_eq!(interp.result, "");
    }

    #[test]
    fn info_rejects_arguments() {
        let mut interp = Interp::default();
        let argv: Vec<String> = ["info", "extra"].iter().map(|s| s.to_string()).collect();
        assert_eq!(info(&mut interp, &argv), Status::Err);
    }
}
