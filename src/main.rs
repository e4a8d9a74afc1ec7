use filename_validation::EXIT_SUCCESS;
use filename_validation::cli::{Cli, Invocation, version_line};
use filename_validation::commands::run_check;

fn main() {
    let cli = match Cli::parse_invocation() {
        Ok(Invocation::Run(cli)) => cli,
        Ok(Invocation::Version) => {
            println!("{}", version_line());
            std::process::exit(EXIT_SUCCESS);
        }
        Err(e) => e.exit(),
    };

    std::process::exit(run_check(&cli));
}
