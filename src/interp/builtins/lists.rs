//! List commands, built on the canonical codec in [`crate::list`].

use crate::interp::environment::{CommandKind::Builtin, Interp};
use crate::interp::status::{parse_loose_int, Status};
use crate::list::{format_list, parse_list};

pub fn register(interp: &mut Interp) {
    interp.register_command("list", Builtin(list));
    interp.register_command("lappend", Builtin(lappend));
    interp.register_command("llength", Builtin(llength));
    interp.register_command("lindex", Builtin(lindex));
    interp.register_command("lrange", Builtin(lrange));
    interp.register_command("split", Builtin(split));
    interp.register_command("join", Builtin(join));
}

fn wrong_args(interp: &mut Interp, name: &str) -> Status {
    interp.set_result(format!("Wrong number of args for {}", name));
    Status::Err
}

fn list(interp: &mut Interp, argv: &[String]) -> Status {
    interp.set_result(format_list(&argv[1..]));
    Status::Ok
}

fn lappend(interp: &mut Interp, argv: &[String]) -> Status {
    if argv.len() < 2 {
        return wrong_args(interp, "lappend");
    }
    let varname = &argv[1];
    let mut elems = interp.get_var(varname).map(parse_list).unwrap_or_default();
    elems.extend(argv[2..].iter().cloned());
    let rendered = format_list(&elems);
    interp.set_var(varname, rendered.clone());
    interp.set_result(rendered);
    Status::Ok
}

fn llength(interp: &mut Interp, argv: &[String]) -> Status {
    if argv.len() != 2 {
        return wrong_args(interp, "llength");
    }
    interp.set_result_int(parse_list(&argv[1]).len() as i64);
    Status::Ok
}

fn lindex(interp: &mut Interp, argv: &[String]) -> Status {
    if argv.len() != 3 {
        return wrong_args(interp, "lindex");
    }
    let elems = parse_list(&argv[1]);
    let i = parse_loose_int(&argv[2]);
    if i < 0 || i as usize >= elems.len() {
        interp.set_result("");
    } else {
        interp.set_result(elems[i as usize].clone());
    }
    Status::Ok
}

fn lrange(interp: &mut Interp, argv: &[String]) -> Status {
    if argv.len() != 4 {
        return wrong_args(interp, "lrange");
    }
    let elems = parse_list(&argv[1]);
    let len = elems.len() as i64;
    let a = parse_loose_int(&argv[2]).max(0);
    let b = parse_loose_int(&argv[3]).min(len - 1);
    if len == 0 || a > b {
        interp.set_result("");
        return Status::Ok;
    }
    interp.set_result(format_list(&elems[a as usize..=(b as usize)]));
    Status::Ok
}

/// `split string [delim]`: no delimiter splits on runs of whitespace and
/// drops empties; a one-byte delimiter splits on exact bytes and preserves
/// empty elements (including a trailing one when the input ends in the
/// delimiter).
fn split(interp: &mut Interp, argv: &[String]) -> Status {
    if argv.len() < 2 || argv.len() > 3 {
        return wrong_args(interp, "split");
    }
    let s = &argv[1];
    let elems: Vec<String> = match argv.get(2).and_then(|d| d.bytes().next()) {
        None => s.split_ascii_whitespace().map(|e| e.to_string()).collect(),
        Some(d) => s.split(d as char).map(|e| e.to_string()).collect(),
    };
    interp.set_result(format_list(&elems));
    Status::Ok
}

fn join(interp: &mut Interp, argv: &[String]) -> Status {
    if argv.len() < 2 || argv.len() > 3 {
        return wrong_args(interp, "join");
    }
    let elems = parse_list(&argv[1]);
    let delim = argv.get(2).cloned().unwrap_or_default();
    interp.set_result(elems.join(&delim));
    Status::Ok
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lappend_creates_and_extends_the_variable() {
        let mut interp = Interp::default();
        let argv: Vec<String> = ["lappend", "xs", "a", "b"].iter().map(|s| s.to_string()).collect();
        assert_eq!(lappend(&mut interp, &argv), Status::Ok);
        assert_eq!(interp.get_var("xs"), Some("a b"));
    }

    #[test]
    fn lindex_and_llength() {
        let mut interp = Interp::default();
        let argv: Vec<String> = ["lindex", "a b c", "1"].iter().map(|s| s.to_string()).collect();
        assert_eq!(lindex(&mut interp, &argv), Status::Ok);
        assert_eq!(interp.result, "b");
    }

    #[test]
    fn split_without_delim_drops_empties() {
        let mut interp = Interp::default();
        let argv: Vec<String> = ["split", "  a  b "].iter().map(|s| s.to_string()).collect();
        assert_eq!(split(&mut interp, &argv), Status::Ok);
        assert_eq!(interp.result, "a b");
    }

    #[test]
    fn split_with_delim_preserves_empties() {
        let mut interp = Interp::default();
        let argv: Vec<String> = ["split", "a,,b,", ","].iter().map(|s| s.to_string()).collect();
        assert_eq!(split(&mut interp, &argv), Status::Ok);
        assert_eq!(parse_list(&interp.result), vec!["a", "", "b", ""]);
    }

    #[test]
    fn join_with_no_delim_concatenates() {
        let mut interp = Interp::default();
        let argv: Vec<String> = ["join", "a b c"].iter().map(|s| s.to_string()).collect();
        assert_eq!(join(&mut interp, &argv), Status::Ok);
        assert_eq!(interp.result, "abc");
    }
}
