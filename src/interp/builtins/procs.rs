//! User-defined procedures: `proc name formals body`, and the dispatcher
//! that runs one when invoked by name.

use crate::interp::environment::{CommandKind, Interp};
use crate::interp::evaluator::eval;
use crate::interp::status::Status;
use crate::list::{format_list, parse_list};

pub fn register(interp: &mut Interp) {
    interp.register_command("proc", CommandKind::Builtin(proc_cmd));
}

fn proc_cmd(interp: &mut Interp, argv: &[String]) -> Status {
    if argv.len() != 4 {
        interp.set_result("Wrong number of args for proc");
        return Status::Err;
    }
    interp.register_command(
        &argv[1],
        CommandKind::Proc { formals: argv[2].clone(), body: argv[3].clone() },
    );
    interp.set_result("");
    Status::Ok
}

/// Bind `formals` against `argv[1..]` in a fresh call frame, then evaluate
/// `body`. A trailing formal named `args` collects all remaining actuals as
/// a list; `return` inside the body ends evaluation of the body normally
/// (converted to `Ok` here), while `Err`/`Break`/`Continue` propagate to the
/// caller unchanged.
pub fn call_proc(interp: &mut Interp, name: &str, formals: &str, body: &str, argv: &[String]) -> Status {
    let formal_names = parse_list(formals);
    let actuals = &argv[1..];

    let has_varargs = formal_names.last().is_some_and(|f| f == "args");
    let fixed_count = if has_varargs { formal_names.len() - 1 } else { formal_names.len() };

    let arity_ok = if has_varargs { actuals.len() >= fixed_count } else { actuals.len() == fixed_count };
    if !arity_ok {
        interp.set_result(format!("Wrong number of args for {}", name));
        return Status::Err;
    }

    let body = body.to_string();
    let name_owned = name.to_string();
    interp.call_with_frame(move |interp| {
        for (formal, actual) in formal_names.iter().take(fixed_count).zip(actuals) {
            interp.set_var(formal, actual.clone());
        }
        if has_varargs {
            interp.set_var("args", format_list(&actuals[fixed_count..]));
        }
        match eval(interp, &body, &name_owned) {
            Status::Return => Status::Ok,
            other => other,
        }
    })
}
