//! Drives the [`Lexer`](crate::parser::Lexer), performs substitution,
//! assembles each command's argument vector, and dispatches.

use crate::interp::environment::{CommandKind, Interp};
use crate::interp::status::Status;
use crate::parser::lexer::decode_escapes;
use crate::parser::{Lexer, TokenType};

/// Evaluate one script. `where_` is a short label folded into the Result
/// when evaluation ends in `Status::Err` (e.g. `"cond of if"`, `"[...]"`,
/// a procedure's own name on a body error).
pub fn eval(interp: &mut Interp, text: &str, where_: &str) -> Status {
    interp.set_result("");
    let mut lexer = Lexer::new(text);
    let mut argv: Vec<String> = Vec::new();
    let mut prev_type = TokenType::Eol;
    let mut retcode = Status::Ok;

    loop {
        let tok = lexer.next_token();
        if tok.kind == TokenType::Eof {
            break;
        }

        match tok.kind {
            TokenType::Var => match interp.get_var(&tok.text) {
                Some(v) => {
                    let v = v.to_string();
                    append_word(&mut argv, prev_type, v);
                    prev_type = tok.kind;
                }
                None => {
                    interp.set_result(format!("No such variable '{}'", tok.text));
                    retcode = Status::Err;
                    break;
                }
            },
            TokenType::Cmd => {
                let nested = eval(interp, &tok.text, "[...]");
                if nested != Status::Ok {
                    retcode = nested;
                    break;
                }
                let v = interp.result.clone();
                append_word(&mut argv, prev_type, v);
                prev_type = tok.kind;
            }
            TokenType::Esc => {
                let v = decode_escapes(&tok.text);
                append_word(&mut argv, prev_type, v);
                prev_type = tok.kind;
            }
            TokenType::Str => {
                append_word(&mut argv, prev_type, tok.text);
                prev_type = tok.kind;
            }
            TokenType::Sep => {
                prev_type = tok.kind;
            }
            TokenType::Eol => {
                if !argv.is_empty() {
                    let status = dispatch(interp, &mut argv);
                    if status != Status::Ok {
                        retcode = status;
                        break;
                    }
                }
                argv.clear();
                prev_type = tok.kind;
            }
            TokenType::Eof => unreachable!(),
        }
    }

    if retcode == Status::Err {
        interp.append_result("; in ");
        interp.append_result(where_);
    }
    retcode
}

/// Append a resolved token's text to `argv`: a new word if the previous
/// token was a separator/end-of-line (or this is the first word), otherwise
/// concatenated onto the previous word (interpolation).
fn append_word(argv: &mut Vec<String>, prev_type: TokenType, s: String) {
    if matches!(prev_type, TokenType::Sep | TokenType::Eol) {
        argv.push(s);
    } else if let Some(last) = argv.last_mut() {
        last.push_str(&s);
    } else {
        argv.push(s);
    }
}

fn dispatch(interp: &mut Interp, argv: &mut Vec<String>) -> Status {
    if interp.get_command(&argv[0]).is_none() {
        if !argv[0].eq_ignore_ascii_case("unknown") && interp.get_command("unknown").is_some() {
            argv.insert(0, "unknown".to_string());
        } else {
            interp.set_result(format!("No such command '{}'", argv[0]));
            return Status::Err;
        }
    }
    invoke(interp, argv)
}

fn invoke(interp: &mut Interp, argv: &[String]) -> Status {
    let name = argv[0].clone();
    match interp.get_command(&name) {
        Some(entry) => match &entry.kind {
            CommandKind::Builtin(f) => {
                let f = *f;
                f(interp, argv)
            }
            CommandKind::Proc { formals, body } => {
                let formals = formals.clone();
                let body = body.clone();
                crate::interp::builtins::procs::call_proc(interp, &name, &formals, &body, argv)
            }
        },
        None => {
            interp.set_result(format!("No such command '{}'", name));
            Status::Err
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interp::Interp;

    fn run(interp: &mut Interp, script: &str) -> Status {
        eval(interp, script, "test")
    }

    #[test]
    fn arithmetic_and_set_roundtrip() {
        let mut interp = Interp::default();
        assert_eq!(run(&mut interp, "set x 5"), Status::Ok);
        assert_eq!(interp.result, "5");
        assert_eq!(run(&mut interp, "+ $x 3"), Status::Ok);
        assert_eq!(interp.result, "8");
    }

    #[test]
    fn unknown_variable_is_an_error_decorated_with_where() {
        let mut interp = Interp::default();
        let status = run(&mut interp, "set y $nope");
        assert_eq!(status, Status::Err);
        assert!(interp.result.starts_with("No such variable 'nope'"));
        assert!(interp.result.ends_with("; in test"));
    }

    #[test]
    fn unknown_command_falls_back_to_unknown_handler() {
        let mut interp = Interp::default();
        run(&mut interp, "proc unknown args {list got $args}");
        let status = run(&mut interp, "frobnicate a b");
        assert_eq!(status, Status::Ok);
        assert_eq!(interp.result, "got {frobnicate a b}");
    }

    #[test]
    fn unknown_command_without_handler_is_an_error() {
        let mut interp = Interp::default();
        let status = run(&mut interp, "frobnicate");
        assert_eq!(status, Status::Err);
        assert!(interp.result.starts_with("No such command 'frobnicate'"));
    }

    #[test]
    fn nested_command_substitution_inlines_result() {
        let mut interp = Interp::default();
        run(&mut interp, "set total [+ 1 2]");
        assert_eq!(interp.result, "3");
    }

    #[test]
    fn recursive_fibonacci_procedure() {
        let mut interp = Interp::default();
        run(
            &mut interp,
            "proc fib x {if {< $x 2} {return $x}; + [fib [- $x 1]] [fib [- $x 2]]}",
        );
        let status = run(&mut interp, "fib 10");
        assert_eq!(status, Status::Ok);
        assert_eq!(interp.result, "55");
    }

    #[test]
    fn foreach_with_lappend_builds_a_list() {
        let mut interp = Interp::default();
        run(&mut interp, "set xs {}");
        run(
            &mut interp,
            "foreach i [list 1 2 3 4 5] {lappend xs [* $i $i]}",
        );
        run(&mut interp, "set xs");
        assert_eq!(interp.result, "1 4 9 16 25");
    }

    #[test]
    fn while_with_break() {
        let mut interp = Interp::default();
        run(&mut interp, "set i 0");
        run(&mut interp, "while {< $i 3} {set i [+ $i 1]; if {== $i 2} break}");
        run(&mut interp, "set i");
        assert_eq!(interp.result, "2");
    }
}
