//! Request dispatch.

use crate::input::Request;
use crate::outcome::Outcome;
use crate::shell::{SplitError, escape, join, split};

/// Run a request against the shell word functions.
pub fn run(request: &Request) -> Outcome {
    match request {
        Request::Split { line } => match split(line) {
            Ok(words) => Outcome::Words(words),
            Err(SplitError::UnmatchedQuote { line }) => Outcome::reject("unmatched quote", line),
        },
        Request::Escape { value } => Outcome::Line(escape(value)),
        Request::Join { words } => Outcome::Line(join(words)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_split() {
        let req = Request::Split {
            line: "a 'b c'".to_string(),
        };
        assert_eq!(
            run(&req),
            Outcome::Words(vec!["a".to_string(), "b c".to_string()])
        );
    }

    #[test]
    fn test_run_split_rejected() {
        let req = Request::Split {
            line: "echo \"oops".to_string(),
        };
        let outcome = run(&req);
        let info = outcome.reject_info().unwrap();
        assert_eq!(info.reason, "unmatched quote");
        assert_eq!(info.input, "echo \"oops");
    }

    #[test]
    fn test_run_escape() {
        let req = Request::Escape {
            value: String::new(),
        };
        assert_eq!(run(&req), Outcome::Line("''".to_string()));
    }

    #[test]
    fn test_run_join() {
        let req = Request::Join {
            words: vec!["a b".to_string(), "c".to_string()],
        };
        assert_eq!(run(&req), Outcome::Line(r"a\ b c".to_string()));
    }
}
