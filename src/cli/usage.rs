use std::ffi::OsStr;

pub const USAGE: &str = "make-prefetch [options] <file>

Create a prefetch statement for IBM Endpoint Manager ActionScript

Options:
  -a, --algorithm ALGORITHM    Hash algorithm to use (all, sha1, sha256)
                               default: all
  -o, --output OUTPUT          Output format (prefetch, davis, value)
                               default: prefetch
  -h, --help                   Print this help message and exit

Examples:
  Create a 9.1 style prefetch statement

    make-prefetch hello.txt

  Create a 9.0 style prefetch statement

    make-prefetch --algorithm sha1 hello.txt

  Create a 7.2 style prefetch statement

    make-prefetch --algorithm sha1 --output davis hello.txt
";

/// Returns true when any argument after the program name is `-h` or `--help`.
///
/// Help is honoured before clap sees the arguments, so it wins over missing
/// or invalid values anywhere on the command line.
pub fn requests_help<S: AsRef<OsStr>>(args: &[S]) -> bool {
    args.iter()
        .skip(1)
        .any(|arg| matches!(arg.as_ref().to_str(), Some("-h" | "--help")))
}
