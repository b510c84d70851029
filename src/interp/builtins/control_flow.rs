//! Control-flow commands: `if`, `and`/`or`, `while`, `foreach`, the
//! non-local exits `break`/`continue`/`return`, and `catch`/`eval`.
//!
//! `and`/`or` are not named in the distilled command set but are present in
//! the reference implementation's core command table and cost nothing extra
//! to keep consistent with `if`'s truthiness rule.

use crate::interp::environment::{CommandKind::Builtin, Interp};
use crate::interp::evaluator::eval;
use crate::interp::status::{parse_loose_int, Status};
use crate::list::parse_list;

pub fn register(interp: &mut Interp) {
    interp.register_command("if", Builtin(if_cmd));
    interp.register_command("and", Builtin(and_cmd));
    interp.register_command("or", Builtin(or_cmd));
    interp.register_command("while", Builtin(while_cmd));
    interp.register_command("foreach", Builtin(foreach_cmd));
    interp.register_command("break", Builtin(break_cmd));
    interp.register_command("continue", Builtin(continue_cmd));
    interp.register_command("return", Builtin(return_cmd));
    interp.register_command("catch", Builtin(catch_cmd));
    interp.register_command("eval", Builtin(eval_cmd));
}

fn truthy(s: &str) -> bool {
    parse_loose_int(s) != 0
}

fn if_cmd(interp: &mut Interp, argv: &[String]) -> Status {
    if argv.len() != 3 && argv.len() != 5 {
        interp.set_result("Wrong number of args for if");
        return Status::Err;
    }
    let status = eval(interp, &argv[1], "cond of if");
    if status != Status::Ok {
        return status;
    }
    if truthy(&interp.result.clone()) {
        eval(interp, &argv[2], "if body")
    } else if argv.len() == 5 {
        eval(interp, &argv[4], "else body")
    } else {
        interp.set_result("");
        Status::Ok
    }
}

fn and_cmd(interp: &mut Interp, argv: &[String]) -> Status {
    for clause in &argv[1..] {
        let status = eval(interp, clause, "and");
        if status != Status::Ok {
            return status;
        }
        if !truthy(&interp.result.clone()) {
            interp.set_result_bool(false);
            return Status::Ok;
        }
    }
    interp.set_result_bool(true);
    Status::Ok
}

fn or_cmd(interp: &mut Interp, argv: &[String]) -> Status {
    for clause in &argv[1..] {
        let status = eval(interp, clause, "or");
        if status != Status::Ok {
            return status;
        }
        if truthy(&interp.result.clone()) {
            interp.set_result_bool(true);
            return Status::Ok;
        }
    }
    interp.set_result_bool(false);
    Status::Ok
}

fn while_cmd(interp: &mut Interp, argv: &[String]) -> Status {
    if argv.len() != 3 {
        interp.set_result("Wrong number of args for while");
        return Status::Err;
    }
    loop {
        let status = eval(interp, &argv[1], "cond of while");
        if status != Status::Ok {
            return status;
        }
        if !truthy(&interp.result.clone()) {
            interp.set_result("");
            return Status::Ok;
        }
        match eval(interp, &argv[2], "while body") {
            Status::Ok | Status::Continue => continue,
            Status::Break => {
                interp.set_result("");
                return Status::Ok;
            }
            other => return other,
        }
    }
}

fn foreach_cmd(interp: &mut Interp, argv: &[String]) -> Status {
    if argv.len() != 4 {
        interp.set_result("Wrong number of args for foreach");
        return Status::Err;
    }
    let varname = argv[1].clone();
    for elem in parse_list(&argv[2]) {
        interp.set_var(&varname, elem);
        match eval(interp, &argv[3], "foreach body") {
            Status::Ok | Status::Continue => continue,
            Status::Break => break,
            other => return other,
        }
    }
    interp.set_result("");
    Status::Ok
}

fn break_cmd(interp: &mut Interp, argv: &[String]) -> Status {
    if argv.len() != 1 {
        interp.set_result("Wrong number of args for break");
        return Status::Err;
    }
    Status::Break
}

fn continue_cmd(interp: &mut Interp, argv: &[String]) -> Status {
    if argv.len() != 1 {
        interp.set_result("Wrong number of args for continue");
        return Status::Err;
    }
    Status::Continue
}

fn return_cmd(interp: &mut Interp, argv: &[String]) -> Status {
    if argv.len() > 2 {
        interp.set_result("Wrong number of args for return");
        return Status::Err;
    }
    interp.set_result(argv.get(1).cloned().unwrap_or_default());
    Status::Return
}

/// `catch body [varname]`: always returns `Ok`; Result is the body's
/// numeric status code. If `varname` is given, it's bound to the body's
/// own Result (its value or error message).
fn catch_cmd(interp: &mut Interp, argv: &[String]) -> Status {
    if argv.len() != 2 && argv.len() != 3 {
        interp.set_result("Wrong number of args for catch");
        return Status::Err;
    }
    let status = eval(interp, &argv[1], "catch body");
    let body_result = interp.result.clone();
    if argv.len() == 3 {
        interp.set_var(&argv[2], body_result);
    }
    interp.set_result_int(status.code() as i64);
    Status::Ok
}

/// `eval args...`: joins its arguments with a single space and evaluates
/// the result as one script.
fn eval_cmd(interp: &mut Interp, argv: &[String]) -> Status {
    let joined = argv[1..].join(" ");
    eval(interp, &joined, "eval")
}
