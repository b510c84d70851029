//! The `array` command: one name handles listing, key enumeration, read,
//! and write, dispatched purely on argument count (mirroring the reference
//! source's single-entry-point design for arrays).

use crate::interp::environment::{CommandKind::Builtin, Interp};
use crate::interp::status::Status;
use crate::list::format_list;

pub fn register(interp: &mut Interp) {
    interp.register_command("array", Builtin(array));
}

fn array(interp: &mut Interp, argv: &[String]) -> Status {
    match argv.len() {
        1 => {
            let names: Vec<String> = interp.array_names().map(|s| s.to_string()).collect();
            interp.set_result(format_list(&names));
            Status::Ok
        }
        2 => {
            let keys: Vec<String> = interp
                .get_array(&argv[1])
                .map(|a| a.keys().map(|k| k.to_string()).collect())
                .unwrap_or_default();
            interp.set_result(format_list(&keys));
            Status::Ok
        }
        3 => match interp.get_array(&argv[1]).and_then(|a| a.get(&argv[2])) {
            Some(v) => {
                interp.set_result(v.to_string());
                Status::Ok
            }
            None => {
                interp.set_result("not found");
                Status::Err
            }
        },
        4 => {
            interp.array_set(&argv[1], &argv[2], argv[3].clone());
            interp.set_result(argv[3].clone());
            Status::Ok
        }
        _ => {
            interp.set_result("Wrong number of args for array");
            Status::Err
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_then_read_a_key() {
        let mut interp = Interp::default();
        let write: Vec<String> = ["array", "a", "x", "1"].iter().map(|s| s.to_string()).collect();
        assert_eq!(array(&mut interp, &write), Status::Ok);

        let read: Vec<String> = ["array", "a", "x"].iter().map(|s| s.to_string()).collect();
        assert_eq!(array(&mut interp, &read), Status::Ok);
        assert_eq!(interp.result, "1");
    }

    #[test]
    fn missing_key_is_not_found() {
        let mut interp = Interp::default();
        let read: Vec<String> = ["array", "a", "x"].iter().map(|s| s.to_string()).collect();
        assert_eq!(array(&mut interp, &read), Status::Err);
        assert_eq!(interp.result, "not found");
    }

    #[test]
    fn listing_array_names_and_keys() {
        let mut interp = Interp::default();
        interp.array_set("a", "k1", "v1");
        interp.array_set("a", "k2", "v2");
        let names: Vec<String> = ["array"].iter().map(|s| s.to_string()).collect();
        assert_eq!(array(&mut interp, &names), Status::Ok);
        assert_eq!(interp.result, "a");

        let keys: Vec<String> = ["array", "a"].iter().map(|s| s.to_string()).collect();
        assert_eq!(array(&mut interp, &keys), Status::Ok);
        assert_eq!(interp.result, "k1 k2");
    }
}
