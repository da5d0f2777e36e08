use anyhow::Result;

fn main() -> Result<()> {
    messenger2md::cli::run()
}
