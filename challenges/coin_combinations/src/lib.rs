use std::collections::VecDeque;
use std::fmt::Display;
use std::io::{BufRead, Write};
use std::str::FromStr;

pub mod dynamic_programming;
pub mod error;

pub use error::{CaseError, InputError};

/// All counts are reported modulo this prime.
pub const MOD: u32 = 1_000_000_007;

/// Whitespace-token input reader for competitive programming.
///
/// Line breaks carry no meaning: a test case may spread its tokens over
/// several lines or share a line with the next one.
pub struct Scanner {
    reader: Box<dyn BufRead>,
    tokens: VecDeque<String>,
}

impl Scanner {
    pub fn new(reader: impl BufRead + 'static) -> Self {
        Self {
            reader: Box::new(reader),
            tokens: VecDeque::new(),
        }
    }

    fn next_token(&mut self) -> Result<String, InputError> {
        while self.tokens.is_empty() {
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Err(InputError::UnexpectedEof);
            }
            self.tokens
                .extend(line.split_whitespace().map(str::to_string));
        }
        self.tokens.pop_front().ok_or(InputError::UnexpectedEof)
    }

    /// Parse the next token.
    pub fn parse<T>(&mut self) -> Result<T, InputError>
    where
        T: FromStr,
        T::Err: Display,
    {
        let token = self.next_token()?;
        token.parse().map_err(|e: T::Err| InputError::Malformed {
            reason: e.to_string(),
            token,
        })
    }

    /// Parse exactly `n` tokens, crossing line breaks as needed.
    pub fn parse_n<T>(&mut self, n: usize) -> Result<Vec<T>, InputError>
    where
        T: FromStr,
        T::Err: Display,
    {
        (0..n).map(|_| self.parse()).collect()
    }
}

/// Output writer for competitive programming (writes to memory buffer)
pub struct Writer(Vec<u8>);

impl Writer {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn println<T: Display>(&mut self, value: T) {
        // writes into a Vec<u8> cannot fail
        let _ = writeln!(self.0, "{}", value);
    }

    /// Copy everything written so far into `sink`.
    pub fn write_to(&self, sink: &mut impl Write) -> std::io::Result<()> {
        sink.write_all(&self.0)?;
        sink.flush()
    }

    pub(crate) fn into_string(self) -> Result<String, std::string::FromUtf8Error> {
        String::from_utf8(self.0)
    }
}

impl Default for Writer {
    fn default() -> Self {
        Self::new()
    }
}

/// Utilities for running and verifying `N.in` / `N.out` case files.
pub mod testing {
    use super::*;
    use std::fs;
    use std::io::Cursor;
    use std::path::Path;
    use std::time::{Duration, Instant};

    /// Expected and actual output of one case, both trimmed.
    pub struct CaseRun {
        pub expected: String,
        pub actual: String,
        pub duration: Duration,
    }

    impl CaseRun {
        pub fn passed(&self) -> bool {
            self.actual == self.expected
        }
    }

    /// Tally of a `run_all_tests` pass.
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
    pub struct Report {
        pub passed: usize,
        pub failed: usize,
        pub total: Duration,
    }

    impl Report {
        pub fn is_success(&self) -> bool {
            self.failed == 0 && self.passed > 0
        }
    }

    /// Discover all case numbers in `dir`, sorted ascending.
    pub fn discover_tests(dir: &Path) -> Vec<usize> {
        let mut test_numbers: Vec<usize> = fs::read_dir(dir)
            .into_iter()
            .flatten()
            .flatten()
            .filter_map(|entry| {
                let file_name = entry.file_name();
                let num_str = file_name.to_str()?.strip_suffix(".in")?;
                num_str.parse().ok()
            })
            .collect();

        test_numbers.sort_unstable();
        test_numbers
    }

    /// Run a single case and return its expected and actual output.
    pub fn run_test_case<F>(dir: &Path, test_num: usize, solve_fn: F) -> Result<CaseRun, CaseError>
    where
        F: FnOnce(&mut Scanner, &mut Writer) -> Result<(), InputError>,
    {
        let read = |path: std::path::PathBuf| {
            fs::read_to_string(&path).map_err(|source| CaseError::Read { path, source })
        };
        let input = read(dir.join(format!("{}.in", test_num)))?;
        let expected = read(dir.join(format!("{}.out", test_num)))?;

        let mut scanner = Scanner::new(Cursor::new(input));
        let mut writer = Writer::new();

        let start = Instant::now();
        solve_fn(&mut scanner, &mut writer)?;
        let duration = start.elapsed();

        let actual = writer.into_string()?;

        Ok(CaseRun {
            expected: expected.trim().to_string(),
            actual: actual.trim().to_string(),
            duration,
        })
    }

    /// Assert that every case in `dir` passes.
    pub fn verify_all_tests<F>(dir: &Path, solve_fn: F)
    where
        F: Fn(&mut Scanner, &mut Writer) -> Result<(), InputError>,
    {
        let test_cases = discover_tests(dir);
        assert!(
            !test_cases.is_empty(),
            "No test cases found in {}",
            dir.display()
        );

        for test_num in test_cases {
            match run_test_case(dir, test_num, &solve_fn) {
                Ok(run) => assert_eq!(
                    run.actual,
                    run.expected,
                    "Test case {} failed (took {:.2}s)\nExpected:\n{}\nActual:\n{}",
                    test_num,
                    run.duration.as_secs_f64(),
                    run.expected,
                    run.actual
                ),
                Err(e) => panic!("Test case {} error: {}", test_num, e),
            }
        }
    }

    /// Run all cases in `dir` and print a line per case (for CLI usage).
    pub fn run_all_tests<F>(dir: &Path, solve_fn: F) -> Report
    where
        F: Fn(&mut Scanner, &mut Writer) -> Result<(), InputError>,
    {
        let mut report = Report::default();
        let test_cases = discover_tests(dir);
        if test_cases.is_empty() {
            println!("No test cases found in {}", dir.display());
            return report;
        }

        println!(
            "Running {} test cases in {}...",
            test_cases.len(),
            dir.display()
        );

        for test_num in &test_cases {
            match run_test_case(dir, *test_num, &solve_fn) {
                Ok(run) => {
                    report.total += run.duration;
                    let secs = run.duration.as_secs_f64();
                    if run.passed() {
                        println!("✓ Test case {}: PASSED ({:.2}s)", test_num, secs);
                        report.passed += 1;
                    } else {
                        println!("✗ Test case {}: FAILED ({:.2}s)", test_num, secs);
                        println!("  Expected: {}", run.expected);
                        println!("  Actual:   {}", run.actual);
                        report.failed += 1;
                    }
                }
                Err(e) => {
                    println!("✗ Test case {}: ERROR - {}", test_num, e);
                    report.failed += 1;
                }
            }
        }

        println!(
            "\nResults: {} passed, {} failed",
            report.passed, report.failed
        );
        println!("Total time: {:.2}s", report.total.as_secs_f64());
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn scanner(input: &str) -> Scanner {
        Scanner::new(Cursor::new(input.to_string()))
    }

    #[test]
    fn test_tokens_cross_lines() {
        let mut input = scanner("3 10\n1\n 2   3\n");
        assert_eq!(input.parse::<usize>().unwrap(), 3);
        assert_eq!(input.parse::<usize>().unwrap(), 10);
        assert_eq!(input.parse_n::<usize>(3).unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_blank_lines_skipped() {
        let mut input = scanner("\n\n  \n7\n");
        assert_eq!(input.parse::<u32>().unwrap(), 7);
    }

    #[test]
    fn test_eof() {
        let mut input = scanner("1 2");
        assert!(input.parse_n::<usize>(3).is_err());
        assert!(matches!(
            input.parse::<usize>(),
            Err(InputError::UnexpectedEof)
        ));
    }

    #[test]
    fn test_negative_is_malformed() {
        let mut input = scanner("-4");
        match input.parse::<usize>() {
            Err(InputError::Malformed { token, .. }) => assert_eq!(token, "-4"),
            other => panic!("expected malformed token, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_writer() {
        let mut out = Writer::new();
        out.println(1);
        out.println("two");
        let mut sink = Vec::new();
        out.write_to(&mut sink).unwrap();
        assert_eq!(sink, b"1\ntwo\n");
        assert_eq!(out.into_string().unwrap(), "1\ntwo\n");
    }
}
