//! Thin forwarding layer onto [`crate::host::HostServices`]: process
//! spawn/wait/sleep, file operations, and process exit. Every operation
//! here is an external-collaborator concern — this module only translates
//! argument vectors into trait calls and trait errors into `Status::Err`.

use crate::interp::environment::{CommandKind::Builtin, Interp};
use crate::interp::status::{parse_loose_int, Status};
use crate::list::format_list;

pub fn register(interp: &mut Interp) {
    interp.register_command("exit", Builtin(exit_cmd));
    interp.register_command("9exit", Builtin(exit_cmd));
    interp.register_command("9chain", Builtin(chain_cmd));
    interp.register_command("9fork", Builtin(fork_cmd));
    interp.register_command("9wait", Builtin(wait_cmd));
    interp.register_command("9dup", Builtin(dup_cmd));
    interp.register_command("9close", Builtin(close_cmd));
    interp.register_command("9sleep", Builtin(sleep_cmd));
    interp.register_command("9chgdir", Builtin(chgdir_cmd));
    interp.register_command("9open", Builtin(open_cmd));
    interp.register_command("9create", Builtin(create_cmd));
    interp.register_command("9delete", Builtin(delete_cmd));
    interp.register_command("9read", Builtin(read_cmd));
}

fn host_err(interp: &mut Interp, cmdname: &str, code: i32) -> Status {
    interp.set_result(format!("{}: ERROR {}", cmdname, code));
    Status::Err
}

fn exit_cmd(interp: &mut Interp, argv: &[String]) -> Status {
    let code = argv.get(1).map(|s| parse_loose_int(s) as i32).unwrap_or(0);
    let cmdname = argv[0].clone();
    match interp.host.exit(code) {
        Ok(()) => {
            interp.set_result("");
            Status::Ok
        }
        Err(e) => host_err(interp, &cmdname, e),
    }
}

fn chain_cmd(interp: &mut Interp, argv: &[String]) -> Status {
    match interp.host.chain(&argv[1..]) {
        Ok(()) => {
            interp.set_result("");
            Status::Ok
        }
        Err(e) => host_err(interp, "9chain", e),
    }
}

fn fork_cmd(interp: &mut Interp, argv: &[String]) -> Status {
    match interp.host.fork(&argv[1..]) {
        Ok(pid) => {
            interp.set_result_int(pid as i64);
            Status::Ok
        }
        Err(e) => host_err(interp, "9fork", e),
    }
}

fn wait_cmd(interp: &mut Interp, _argv: &[String]) -> Status {
    match interp.host.wait() {
        Ok(code) => {
            interp.set_result_int(code as i64);
            Status::Ok
        }
        Err(e) => host_err(interp, "9wait", e),
    }
}

fn dup_cmd(interp: &mut Interp, argv: &[String]) -> Status {
    if argv.len() != 2 {
        interp.set_result("Wrong number of args for 9dup");
        return Status::Err;
    }
    let fd = parse_loose_int(&argv[1]) as i32;
    match interp.host.dup(fd) {
        Ok(newfd) => {
            interp.set_result_int(newfd as i64);
            Status::Ok
        }
        Err(e) => host_err(interp, "9dup", e),
    }
}

fn close_cmd(interp: &mut Interp, argv: &[String]) -> Status {
    if argv.len() != 2 {
        interp.set_result("Wrong number of args for 9close");
        return Status::Err;
    }
    let fd = parse_loose_int(&argv[1]) as i32;
    match interp.host.close(fd) {
        Ok(()) => {
            interp.set_result("");
            Status::Ok
        }
        Err(e) => host_err(interp, "9close", e),
    }
}

fn sleep_cmd(interp: &mut Interp, argv: &[String]) -> Status {
    if argv.len() != 2 {
        interp.set_result("Wrong number of args for 9sleep");
        return Status::Err;
    }
    let ticks = parse_loose_int(&argv[1]);
    match interp.host.sleep(ticks) {
        Ok(()) => {
            interp.set_result("");
            Status::Ok
        }
        Err(e) => host_err(interp, "9sleep", e),
    }
}

fn chgdir_cmd(interp: &mut Interp, argv: &[String]) -> Status {
    if argv.len() != 2 {
        interp.set_result("Wrong number of args for 9chgdir");
        return Status::Err;
    }
    match interp.host.chgdir(&argv[1]) {
        Ok(()) => {
            interp.set_result("");
            Status::Ok
        }
        Err(e) => host_err(interp, "9chgdir", e),
    }
}

fn open_cmd(interp: &mut Interp, argv: &[String]) -> Status {
    if argv.len() != 3 {
        interp.set_result("Wrong number of args for 9open");
        return Status::Err;
    }
    let mode = parse_loose_int(&argv[2]) as i32;
    match interp.host.open(&argv[1], mode) {
        Ok(fd) => {
            interp.set_result_int(fd as i64);
            Status::Ok
        }
        Err(e) => host_err(interp, "9open", e),
    }
}

fn create_cmd(interp: &mut Interp, argv: &[String]) -> Status {
    if argv.len() != 3 {
        interp.set_result("Wrong number of args for 9create");
        return Status::Err;
    }
    let mode = parse_loose_int(&argv[2]) as i32;
    match interp.host.create(&argv[1], mode) {
        Ok(fd) => {
            interp.set_result_int(fd as i64);
            Status::Ok
        }
        Err(e) => host_err(interp, "9create", e),
    }
}

fn delete_cmd(interp: &mut Interp, argv: &[String]) -> Status {
    if argv.len() != 2 {
        interp.set_result("Wrong number of args for 9delete");
        return Status::Err;
    }
    match interp.host.delete(&argv[1]) {
        Ok(()) => {
            interp.set_result("");
            Status::Ok
        }
        Err(e) => host_err(interp, "9delete", e),
    }
}

fn read_cmd(interp: &mut Interp, argv: &[String]) -> Status {
    if argv.len() != 3 {
        interp.set_result("Wrong number of args for 9read");
        return Status::Err;
    }
    let fd = parse_loose_int(&argv[1]) as i32;
    let n = parse_loose_int(&argv[2]).max(0) as usize;
    match interp.host.read(fd, n) {
        Ok(bytes) => {
            let elems: Vec<String> = bytes.iter().map(|b| b.to_string()).collect();
            interp.set_result(format_list(&elems));
            Status::Ok
        }
        Err(e) => host_err(interp, "9read", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::memory::InMemoryHost;

    fn interp_with_memory_host() -> Interp {
        Interp::new(Box::new(InMemoryHost::new().with_file("/f", b"hi".to_vec())))
    }

    #[test]
    fn create_write_and_read_through_the_host_bridge() {
        let mut interp = interp_with_memory_host();
        let argv: Vec<String> = ["9create", "/g", "0"].iter().map(|s| s.to_string()).collect();
        assert_eq!(create_cmd(&mut interp, &argv), Status::Ok);
        assert_eq!(interp.result, "3");
    }

    #[test]
    fn null_host_reports_a_formatted_error() {
        let mut interp = Interp::default();
        let argv: Vec<String> = ["9open", "/nope", "0"].iter().map(|s| s.to_string()).collect();
        assert_eq!(open_cmd(&mut interp, &argv), Status::Err);
        assert_eq!(interp.result, "9open: ERROR -1");
    }

    #[test]
    fn exit_with_a_supporting_host_succeeds_quietly() {
        let mut interp = interp_with_memory_host();
        let argv: Vec<String> = ["exit", "0"].iter().map(|s| s.to_string()).collect();
        assert_eq!(exit_cmd(&mut interp, &argv), Status::Ok);
    }
}
