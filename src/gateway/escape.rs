// src/gateway/escape.rs

//! POSIX shell quoting for subprocess arguments.
//!
//! Every argument handed to the external script goes through [`quote`], so
//! embedded spaces, quotes, `$`, backticks or `;` are passed to the script
//! as data rather than interpreted by the shell.

/// Quote a single argument for safe use on a `sh -c` command line.
///
/// The empty string quotes to `''` so the argument keeps its position.
/// Values made entirely of safe characters are returned as-is; everything
/// else is wrapped in single quotes, with embedded single quotes rewritten
/// as `'"'"'` (close quote, double-quoted quote, reopen quote).
pub fn quote(s: &str) -> String {
    if s.is_empty() {
        return "''".to_string();
    }

    if s.bytes().all(|b| {
        matches!(b,
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' |
            b'_' | b'-' | b'.' | b'/' | b':' | b'@' | b'%'
        )
    }) {
        return s.to_string();
    }

    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for ch in s.chars() {
        if ch == '\'' {
            out.push_str("'\"'\"'");
        } else {
            out.push(ch);
        }
    }
    out.push('\'');
    out
}

/// Build the full command line: the program path followed by each argument
/// quoted independently, separated by single spaces.
///
/// The program path itself is quoted too, so script paths with spaces work.
pub fn join_command<I, S>(program: &str, args: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut cmd = quote(program);
    for arg in args {
        cmd.push(' ');
        cmd.push_str(&quote(arg.as_ref()));
    }
    cmd
}
