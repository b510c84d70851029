//! String commands: length/index/slice/case conversion, and the named
//! (non-symbolic) comparison operators in [`compare`].

use crate::interp::environment::{CommandKind::Builtin, Interp};
use crate::interp::status::{parse_loose_int, Status};

pub fn register(interp: &mut Interp) {
    interp.register_command("slength", Builtin(slength));
    interp.register_command("sindex", Builtin(sindex));
    interp.register_command("srange", Builtin(srange));
    interp.register_command("supper", Builtin(supper));
    interp.register_command("slower", Builtin(slower));
    compare::register(interp);
}

fn wrong_args(interp: &mut Interp, name: &str) -> Status {
    interp.set_result(format!("Wrong number of args for {}", name));
    Status::Err
}

fn slength(interp: &mut Interp, argv: &[String]) -> Status {
    if argv.len() != 2 {
        return wrong_args(interp, "slength");
    }
    interp.set_result_int(argv[1].len() as i64);
    Status::Ok
}

fn sindex(interp: &mut Interp, argv: &[String]) -> Status {
    if argv.len() != 3 {
        return wrong_args(interp, "sindex");
    }
    let bytes = argv[1].as_bytes();
    let i = parse_loose_int(&argv[2]);
    if i < 0 || i as usize >= bytes.len() {
        interp.set_result("");
    } else {
        interp.set_result((bytes[i as usize] as char).to_string());
    }
    Status::Ok
}

/// `srange s a b`: inclusive byte range, clamped to `[0, len-1]`. An empty
/// or fully out-of-range selection yields the empty string rather than an
/// error.
fn srange(interp: &mut Interp, argv: &[String]) -> Status {
    if argv.len() != 4 {
        return wrong_args(interp, "srange");
    }
    let bytes = argv[1].as_bytes();
    let len = bytes.len() as i64;
    let a = parse_loose_int(&argv[2]).max(0);
    let b = parse_loose_int(&argv[3]).min(len - 1);
    if len == 0 || a > b {
        interp.set_result("");
        return Status::Ok;
    }
    interp.set_result(String::from_utf8_lossy(&bytes[a as usize..=(b as usize)]).into_owned());
    Status::Ok
}

fn supper(interp: &mut Interp, argv: &[String]) -> Status {
    if argv.len() != 2 {
        return wrong_args(interp, "supper");
    }
    interp.set_result(argv[1].to_ascii_uppercase());
    Status::Ok
}

fn slower(interp: &mut Interp, argv: &[String]) -> Status {
    if argv.len() != 2 {
        return wrong_args(interp, "slower");
    }
    interp.set_result(argv[1].to_ascii_lowercase());
    Status::Ok
}

/// Case-insensitive lexicographic comparison operators: `eq ne lt le gt ge`.
pub mod compare {
    use super::*;
    use std::cmp::Ordering;

    pub fn register(interp: &mut Interp) {
        interp.register_command("eq", Builtin(eq));
        interp.register_command("ne", Builtin(ne));
        interp.register_command("lt", Builtin(lt));
        interp.register_command("le", Builtin(le));
        interp.register_command("gt", Builtin(gt));
        interp.register_command("ge", Builtin(ge));
    }

    fn cmp(interp: &mut Interp, argv: &[String], name: &str, f: impl Fn(Ordering) -> bool) -> Status {
        if argv.len() != 3 {
            return wrong_args(interp, name);
        }
        let ord = argv[1].to_ascii_lowercase().cmp(&argv[2].to_ascii_lowercase());
        interp.set_result_bool(f(ord));
        Status::Ok
    }

    fn eq(interp: &mut Interp, argv: &[String]) -> Status {
        cmp(interp, argv, "eq", |o| o == Ordering::Equal)
    }
    fn ne(interp: &mut Interp, argv: &[String]) -> Status {
        cmp(interp, argv, "ne", |o| o != Ordering::Equal)
    }
    fn lt(interp: &mut Interp, argv: &[String]) -> Status {
        cmp(interp, argv, "lt", |o| o == Ordering::Less)
    }
    fn le(interp: &mut Interp, argv: &[String]) -> Status {
        cmp(interp, argv, "le", |o| o != Ordering::Greater)
    }
    fn gt(interp: &mut Interp, argv: &[String]) -> Status {
        cmp(interp, argv, "gt", |o| o == Ordering::Greater)
    }
    fn ge(interp: &mut Interp, argv: &[String]) -> Status {
        cmp(interp, argv, "ge", |o| o != Ordering::Less)
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn eq_is_case_insensitive() {
            let mut interp = Interp::default();
            let argv: Vec<String> = ["eq", "Foo", "foo"].iter().map(|s| s.to_string()).collect();
            assert_eq!(eq(&mut interp, &argv), Status::Ok);
            assert_eq!(interp.result, "1");
        }

        #[test]
        fn lt_orders_lexicographically() {
            let mut interp = Interp::default();
            let argv: Vec<String> = ["lt", "abc", "abd"].iter().map(|s| s.to_string()).collect();
            assert_eq!(lt(&mut interp, &argv), Status::Ok);
            assert_eq!(interp.result, "1");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn srange_clamps_bounds() {
        let mut interp = Interp::default();
        let argv: Vec<String> = ["srange", "hello", "-3", "2"].iter().map(|s| s.to_string()).collect();
        assert_eq!(srange(&mut interp, &argv), Status::Ok);
        assert_eq!(interp.result, "hel");
    }

    #[test]
    fn srange_out_of_range_is_empty() {
        let mut interp = Interp::default();
        let argv: Vec<String> = ["srange", "hi", "5", "9"].iter().map(|s| s.to_string()).collect();
        assert_eq!(srange(&mut interp, &argv), Status::Ok);
        assert_eq!(interp.result, "");
    }

    #[test]
    fn supper_and_slower_are_independent_commands() {
        let mut interp = Interp::default();
        let argv: Vec<String> = ["supper", "abc"].iter().map(|s| s.to_string()).collect();
        assert_eq!(supper(&mut interp, &argv), Status::Ok);
        assert_eq!(interp.result, "ABC");

        let argv: Vec<String> = ["slower", "ABC"].iter().map(|s| s.to_string()).collect();
        assert_eq!(slower(&mut interp, &argv), Status::Ok);
        assert_eq!(interp.result, "abc");
    }

    #[test]
    fn sindex_out_of_bounds_is_empty() {
        let mut interp = Interp::default();
        let argv: Vec<String> = ["sindex", "ab", "9"].iter().map(|s| s.to_string()).collect();
        assert_eq!(sindex(&mut interp, &argv), Status::Ok);
        assert_eq!(interp.result, "");
    }
}
