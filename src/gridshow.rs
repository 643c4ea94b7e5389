use std::io::{self, Write};

use fixgrid::{aux::he::ErrorExplained, FixedGrid, OrExplain};

use crate::{
    argparse::{FillMode, RunConfig},
    utils::logging::init_logger,
};

// number of cells in the demo grid
pub(crate) const DEMO_CAPACITY: usize = 24;

type DemoGrid = FixedGrid<usize, DEMO_CAPACITY>;

pub(crate) fn gridshow(config: RunConfig) -> anyhow::Result<()> {
    init_logger(config.log_level())?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&config, &mut out)?;

    log::info!("done");
    Ok(())
}

pub(crate) fn run<W: Write>(config: &RunConfig, out: &mut W) -> anyhow::Result<()> {
    log::debug!(
        ">> Building a {} cell grid with width {}...",
        DEMO_CAPACITY,
        config.width
    );
    let mut grid = build_grid(config)?;
    print_grid(&grid, out)?;

    if let Some((width, height)) = config.reshape {
        log::debug!(">> Reshaping to {}x{}...", width, height);
        grid.reshape(width, height).or_exp()?;

        writeln!(out)?;
        print_grid(&grid, out)?;
    }

    if let Some((x, y)) = config.lookup {
        let value = grid.at_xy(x, y).or_exp()?;
        writeln!(out, "\n({}, {}) = {}", x, y, value)?;
    }

    Ok(())
}

fn build_grid(config: &RunConfig) -> Result<DemoGrid, ErrorExplained> {
    let width = config.width;

    match config.fill {
        FillMode::Index => DemoGrid::from_fn(width, |p| p.y * width + p.x).or_exp(),
        FillMode::Zero => DemoGrid::new(width).or_exp(),
    }
}

fn print_grid<W: Write>(grid: &DemoGrid, out: &mut W) -> io::Result<()> {
    let cell_width = (DEMO_CAPACITY - 1).to_string().len();

    writeln!(out, "# {}x{}", grid.width(), grid.height())?;
    writeln!(out, "{:>1$}", grid, cell_width)
}

#[cfg(test)]
mod test {
    use fixgrid::GridError;

    use super::*;

    fn config(width: usize) -> RunConfig {
        RunConfig {
            width,
            reshape: None,
            lookup: None,
            fill: FillMode::Index,
            verbose: false,
        }
    }

    fn output(config: &RunConfig) -> anyhow::Result<String> {
        let mut buf = Vec::new();
        run(config, &mut buf)?;
        Ok(String::from_utf8(buf)?)
    }

    #[test]
    fn prints_numbered_grid() {
        let out = output(&config(8)).unwrap();

        assert!(out.starts_with("# 8x3\n"));
        assert!(out.contains(" 0  1  2  3  4  5  6  7\n"));
        assert!(out.contains("16 17 18 19 20 21 22 23\n"));
    }

    #[test]
    fn reshape_and_lookup() {
        let mut c = config(8);
        c.reshape = Some((6, 4));
        c.lookup = Some((1, 2));

        let out = output(&c).unwrap();

        assert!(out.contains("# 6x4\n"));
        assert!(out.ends_with("(1, 2) = 13\n"));
    }

    #[test]
    fn zero_fill() {
        let mut c = config(24);
        c.fill = FillMode::Zero;

        let out = output(&c).unwrap();
        assert_eq!(format!("# 24x1\n{}\n", vec![" 0"; 24].join(" ")), out);
    }

    #[test]
    fn bad_width() {
        let err = output(&config(5)).unwrap_err();
        let grid_err = err
            .downcast_ref::<ErrorExplained>()
            .and_then(|e| std::error::Error::source(e))
            .and_then(|e| e.downcast_ref::<GridError>());

        assert_eq!(
            Some(&GridError::InvalidConfiguration {
                capacity: DEMO_CAPACITY,
                width: 5,
                height: None
            }),
            grid_err
        );
    }

    #[test]
    fn bad_reshape_and_lookup() {
        let mut c = config(4);
        c.reshape = Some((5, 5));
        assert!(output(&c).unwrap_err().to_string().starts_with("invalid size 5x5"));

        let mut c = config(4);
        c.lookup = Some((4, 0));
        assert!(output(&c)
            .unwrap_err()
            .to_string()
            .starts_with("position (4, 0) is out of range"));
    }
}
