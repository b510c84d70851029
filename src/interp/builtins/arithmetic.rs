//! Integer arithmetic, comparison, and bitwise operators.
//!
//! `+`/`*` fold over any number of operands (identity `0`/`1`); every other
//! operator here is strictly binary. Values are parsed with
//! [`parse_loose_int`], matching the source's lax `atoi`. All arithmetic
//! uses wrapping ops: the reference source's signed word-size semantics
//! wrap on overflow rather than trap, and a debug-build panic on valid
//! input (e.g. `+ 9223372036854775807 1`) would violate the no-panic
//! contract on otherwise-valid scripts.

use crate::interp::environment::{CommandKind::Builtin, Interp};
use crate::interp::status::{parse_loose_int, Status};

pub fn register(interp: &mut Interp) {
    interp.register_command("+", Builtin(add));
    interp.register_command("-", Builtin(sub));
    interp.register_command("*", Builtin(mul));
    interp.register_command("/", Builtin(div));
    interp.register_command("%", Builtin(rem));
    interp.register_command(">", Builtin(gt));
    interp.register_command(">=", Builtin(ge));
    interp.register_command("<", Builtin(lt));
    interp.register_command("<=", Builtin(le));
    interp.register_command("==", Builtin(num_eq));
    interp.register_command("!=", Builtin(num_ne));
    interp.register_command("bitand", Builtin(bitand));
    interp.register_command("bitor", Builtin(bitor));
    interp.register_command("bitxor", Builtin(bitxor));
}

fn wrong_args(interp: &mut Interp, name: &str) -> Status {
    interp.set_result(format!("Wrong number of args for {}", name));
    Status::Err
}

fn operands(argv: &[String]) -> impl Iterator<Item = i64> + '_ {
    argv[1..].iter().map(|s| parse_loose_int(s))
}

fn add(interp: &mut Interp, argv: &[String]) -> Status {
    interp.set_result_int(operands(argv).fold(0i64, |acc, x| acc.wrapping_add(x)));
    Status::Ok
}

fn mul(interp: &mut Interp, argv: &[String]) -> Status {
    interp.set_result_int(operands(argv).fold(1i64, |acc, x| acc.wrapping_mul(x)));
    Status::Ok
}

fn binary(interp: &mut Interp, argv: &[String], name: &str, f: impl Fn(i64, i64) -> i64) -> Status {
    if argv.len() != 3 {
        return wrong_args(interp, name);
    }
    let a = parse_loose_int(&argv[1]);
    let b = parse_loose_int(&argv[2]);
    interp.set_result_int(f(a, b));
    Status::Ok
}

fn sub(interp: &mut Interp, argv: &[String]) -> Status {
    binary(interp, argv, "-", |a, b| a.wrapping_sub(b))
}

fn div(interp: &mut Interp, argv: &[String]) -> Status {
    if argv.len() != 3 {
        return wrong_args(interp, "/");
    }
    let a = parse_loose_int(&argv[1]);
    let b = parse_loose_int(&argv[2]);
    if b == 0 {
        interp.set_result("division by zero");
        return Status::Err;
    }
    interp.set_result_int(a.wrapping_div(b));
    Status::Ok
}

fn rem(interp: &mut Interp, argv: &[String]) -> Status {
    if argv.len() != 3 {
        return wrong_args(interp, "%");
    }
    let a = parse_loose_int(&argv[1]);
    let b = parse_loose_int(&argv[2]);
    if b == 0 {
        interp.set_result("division by zero");
        return Status::Err;
    }
    interp.set_result_int(a.wrapping_rem(b));
    Status::Ok
}

fn cmp(interp: &mut Interp, argv: &[String], name: &str, f: impl Fn(i64, i64) -> bool) -> Status {
    if argv.len() != 3 {
        return wrong_args(interp, name);
    }
    let a = parse_loose_int(&argv[1]);
    let b = parse_loose_int(&argv[2]);
    interp.set_result_bool(f(a, b));
    Status::Ok
}

fn gt(interp: &mut Interp, argv: &[String]) -> Status {
    cmp(interp, argv, ">", |a, b| a > b)
}
fn ge(interp: &mut Interp, argv: &[String]) -> Status {
    cmp(interp, argv, ">=", |a, b| a >= b)
}
fn lt(interp: &mut Interp, argv: &[String]) -> Status {
    cmp(interp, argv, "<", |a, b| a < b)
}
fn le(interp: &mut Interp, argv: &[String]) -> Status {
    cmp(interp, argv, "<=", |a, b| a <= b)
}
fn num_eq(interp: &mut Interp, argv: &[String]) -> Status {
    cmp(interp, argv, "==", |a, b| a == b)
}
fn num_ne(interp: &mut Interp, argv: &[String]) -> Status {
    cmp(interp, argv, "!=", |a, b| a != b)
}

fn bitand(interp: &mut Interp, argv: &[String]) -> Status {
    binary(interp, argv, "bitand", |a, b| a & b)
}
fn bitor(interp: &mut Interp, argv: &[String]) -> Status {
    binary(interp, argv, "bitor", |a, b| a | b)
}
fn bitxor(interp: &mut Interp, argv: &[String]) -> Status {
    binary(interp, argv, "bitxor", |a, b| a ^ b)
}
