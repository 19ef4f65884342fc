use dbms::cli::run_cli;
use dbms::common::exception::DBError;

fn main() -> Result<(), DBError> {
    run_cli()
}
