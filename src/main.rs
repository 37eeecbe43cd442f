use anyhow::Result;

fn main() -> Result<()> {
    env_logger::init();
    let args = donation_ledger::args::parse();
    donation_ledger::cli::main(args)
}
