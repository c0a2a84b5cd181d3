use anyhow::Result;

mod app;
mod logging;

fn main() -> Result<()> {
    let args = flatsort::cli::parse();
    app::run(args)
}
