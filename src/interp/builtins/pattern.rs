//! Pattern matching: `smatch` (shell-style glob) and `regexp` (basic regular
//! expressions via `regex-lite`). Both are case-insensitive, matching this
//! dialect's case-insensitive treatment of names elsewhere.

use crate::interp::environment::{CommandKind::Builtin, Interp};
use crate::interp::status::Status;

pub fn register(interp: &mut Interp) {
    interp.register_command("smatch", Builtin(smatch));
    interp.register_command("regexp", Builtin(regexp));
}

fn smatch(interp: &mut Interp, argv: &[String]) -> Status {
    if argv.len() != 3 {
        interp.set_result("Wrong number of args for smatch");
        return Status::Err;
    }
    interp.set_result_bool(glob_match(&argv[1], &argv[2]));
    Status::Ok
}

fn regexp(interp: &mut Interp, argv: &[String]) -> Status {
    if argv.len() != 3 {
        interp.set_result("Wrong number of args for regexp");
        return Status::Err;
    }
    match regex_lite::Regex::new(&format!("(?i){}", argv[1])) {
        Ok(re) => {
            interp.set_result_bool(re.is_match(&argv[2]));
            Status::Ok
        }
        Err(e) => {
            interp.set_result(format!("invalid pattern: {}", e));
            Status::Err
        }
    }
}

/// `*` matches any run (including empty), `?` matches exactly one byte,
/// `[...]` matches a character class (`!`/`^` negates; `a-z` ranges),
/// anything else matches itself case-insensitively.
pub fn glob_match(pattern: &str, text: &str) -> bool {
    glob_bytes(pattern.as_bytes(), text.as_bytes())
}

fn glob_bytes(pat: &[u8], s: &[u8]) -> bool {
    match (pat.first(), s.first()) {
        (None, None) => true,
        (Some(b'*'), _) => {
            glob_bytes(&pat[1..], s) || (!s.is_empty() && glob_bytes(pat, &s[1..]))
        }
        (Some(b'?'), Some(_)) => glob_bytes(&pat[1..], &s[1..]),
        (Some(b'['), Some(&c)) => match match_class(&pat[1..], c) {
            Some((true, rest)) => glob_bytes(rest, &s[1..]),
            _ => false,
        },
        (Some(&pc), Some(&sc)) => {
            pc.to_ascii_lowercase() == sc.to_ascii_lowercase() && glob_bytes(&pat[1..], &s[1..])
        }
        _ => false,
    }
}

/// Scan a `[...]` class starting just past the `[`. Returns whether `c`
/// matched and the remainder of the pattern past the closing `]`, or `None`
/// if the class is unterminated (treated as a non-match, same as the
/// reference glob's behavior on malformed patterns).
fn match_class(pat: &[u8], c: u8) -> Option<(bool, &[u8])> {
    let mut i = 0;
    let negate = matches!(pat.first(), Some(b'!') | Some(b'^'));
    if negate {
        i += 1;
    }
    let mut matched = false;
    while i < pat.len() && pat[i] != b']' {
        if i + 2 < pat.len() && pat[i + 1] == b'-' && pat[i + 2] != b']' {
            let (lo, hi) = (pat[i].to_ascii_lowercase(), pat[i + 2].to_ascii_lowercase());
            let cl = c.to_ascii_lowercase();
            if (lo..=hi).contains(&cl) {
                matched = true;
            }
            i += 3;
        } else {
            if pat[i].to_ascii_lowercase() == c.to_ascii_lowercase() {
                matched = true;
            }
            i += 1;
        }
    }
    if i >= pat.len() {
        return None;
    }
    Some((matched != negate, &pat[i + 1..]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn star_matches_any_run() {
        assert!(glob_match("a*c", "abbbc"));
        assert!(glob_match("a*c", "ac"));
        assert!(!glob_match("a*c", "abx"));
    }

    #[test]
    fn question_matches_one_byte() {
        assert!(glob_match("a?c", "abc"));
        assert!(!glob_match("a?c", "ac"));
    }

    #[test]
    fn bracket_class_supports_ranges_and_negation() {
        assert!(glob_match("[a-c]x", "bx"));
        assert!(!glob_match("[!a-c]x", "bx"));
        assert!(glob_match("[!a-c]x", "zx"));
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert!(glob_match("ABC", "abc"));
    }

    #[test]
    fn regexp_command_reports_basic_matches() {
        let mut interp = Interp::default();
        let argv: Vec<String> = ["regexp", "^[0-9]+$", "42"].iter().map(|s| s.to_string()).collect();
        assert_eq!(regexp(&mut interp, &argv), Status::Ok);
        assert_eq!(interp.result, "1");
    }
}
