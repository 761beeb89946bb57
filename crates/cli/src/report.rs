use std::io::Write;

use anyhow::Context;
use mini_fib_sequence::{fibonacci, range, RangeSpec};
use tracing::debug;

/// Writes `fib(i) = F(i)` for every `i` in `range(count)`, one line each.
pub fn run<W: Write>(out: &mut W, count: i64) -> anyhow::Result<()> {
    let indices = range(RangeSpec::to(count))?;

    for i in indices {
        let value = fibonacci(i);
        debug!(index = i, value, "computed");
        writeln!(out, "fib({i}) = {value}").context("failed to write result line")?;
    }

    Ok(())
}


#[cfg(test)]
mod tests {
    use super::*;

    fn render(count: i64) -> String {
        let mut buf = Vec::new();
        run(&mut buf, count).expect("run should succeed");
        String::from_utf8(buf).expect("output is utf-8")
    }

    #[test]
    fn default_count_prints_first_ten() {
        let expected = "\
fib(0) = 0
fib(1) = 1
fib(2) = 1
fib(3) = 2
fib(4) = 3
fib(5) = 5
fib(6) = 8
fib(7) = 13
fib(8) = 21
fib(9) = 34
";
        assert_eq!(render(10), expected);
    }

    #[test]
    fn zero_count_prints_nothing() {
        assert_eq!(render(0), "");
    }

    #[test]
    fn every_line_ends_with_single_newline() {
        let out = render(10);
        assert_eq!(out.lines().count(), 10);
        assert!(out.ends_with("34\n") && !out.ends_with("\n\n"));
    }
}
