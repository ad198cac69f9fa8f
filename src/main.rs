use anyhow::Result;
use csdl_requirements::cli;

fn main() -> Result<()> {
    cli::run()
}
