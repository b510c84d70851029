//! Byte-level codec: `explode`/`implode` convert between a string and a
//! list of its byte values, as inverses of each other.

use crate::interp::environment::{CommandKind::Builtin, Interp};
use crate::interp::status::{parse_loose_int, Status};
use crate::list::{format_list, parse_list};

pub fn register(interp: &mut Interp) {
    interp.register_command("explode", Builtin(explode));
    interp.register_command("implode", Builtin(implode));
}

fn explode(interp: &mut Interp, argv: &[String]) -> Status {
    if argv.len() != 2 {
        interp.set_result("Wrong number of args for explode");
        return Status::Err;
    }
    let bytes: Vec<String> = argv[1].bytes().map(|b| b.to_string()).collect();
    interp.set_result(format_list(&bytes));
    Status::Ok
}

fn implode(interp: &mut Interp, argv: &[String]) -> Status {
    if argv.len() != 2 {
        interp.set_result("Wrong number of args for implode");
        return Status::Err;
    }
    let bytes: Vec<u8> = parse_list(&argv[1]).iter().map(|e| parse_loose_int(e) as u8).collect();
    interp.set_result(String::from_utf8_lossy(&bytes).into_owned());
    Status::Ok
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explode_and_implode_round_trip() {
        let mut interp = Interp::default();
        let argv: Vec<String> = ["explode", "AB"].iter().map(|s| s.to_string()).collect();
        assert_eq!(explode(&mut interp, &argv), Status::Ok);
        assert_eq!(interp.result, "65 66");

        let argv: Vec<String> = vec!["implode".to_string(), interp.result.clone()];
        assert_eq!(implode(&mut interp, &argv), Status::Ok);
        assert_eq!(interp.result, "AB");
    }
}
