//! The `set` command: one-arg read, two-arg write.

use crate::interp::environment::{CommandKind::Builtin, Interp};
use crate::interp::status::Status;

pub fn register(interp: &mut Interp) {
    interp.register_command("set", Builtin(set));
}

fn set(interp: &mut Interp, argv: &[String]) -> Status {
    match argv.len() {
        2 => match interp.get_var(&argv[1]) {
            Some(v) => {
                interp.set_result(v.to_string());
                Status::Ok
            }
            None => {
                interp.set_result(format!("no such var: {}", argv[1]));
                Status::Err
            }
        },
        3 => {
            interp.set_var(&argv[1], argv[2].clone());
            interp.set_result(argv[2].clone());
            Status::Ok
        }
        _ => {
            interp.set_result("Wrong number of args for set");
            Status::Err
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_then_reads_back() {
        let mut interp = Interp::default();
        let write: Vec<String> = ["set", "x", "5"].iter().map(|s| s.to_string()).collect();
        assert_eq!(set(&mut interp, &write), Status::Ok);
        assert_eq!(interp.result, "5");

        let read: Vec<String> = ["set", "x"].iter().map(|s| s.to_string()).collect();
        assert_eq!(set(&mut interp, &read), Status::Ok);
        assert_eq!(interp.result, "5");
    }

    #[test]
    fn reading_an_absent_variable_is_an_error() {
        let mut interp = Interp::default();
        let read: Vec<String> = ["set", "nope"].iter().map(|s| s.to_string()).collect();
        assert_eq!(set(&mut interp, &read), Status::Err);
        assert_eq!(interp.result, "no such var: nope");
    }
}
