fn main() -> std::process::ExitCode {
    designer_lib::run()
}
