use std::process::ExitCode;

use kafka_partitioner::cli;

fn main() -> ExitCode {
    let mut stdout = std::io::stdout().lock();
    let mut stderr = std::io::stderr().lock();

    let args = match cli::parse(std::env::args_os(), &mut stdout, &mut stderr) {
        Ok(args) => args,
        Err(code) => return ExitCode::from(code),
    };
    args.init_logging();

    ExitCode::from(cli::execute(&args, &mut stdout, &mut stderr))
}
