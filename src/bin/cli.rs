// src/bin/cli.rs
use color_eyre::eyre::eyre;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    zip_scrape::cli::run().map_err(|e| {
        zip_scrape::loge!("{e}");
        eyre!("{e}")
    })
}
