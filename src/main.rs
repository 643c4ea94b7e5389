use argparse::set_configs;
use gridshow::gridshow;

mod argparse;
mod gridshow;
mod utils;

fn main() -> anyhow::Result<()> {
    let config = set_configs()?;

    gridshow(config)
}
