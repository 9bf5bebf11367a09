use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    smartcode::cli::run_convert(std::env::args().skip(1))
}
