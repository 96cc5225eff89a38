#![forbid(unsafe_code)]

fn main() -> std::process::ExitCode {
    let code = make_prefetch::run();
    std::process::ExitCode::from(code)
}
