use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use fractal_viewer::{EngineConfig, FractalSession, write_bmp};

/// Render one fractal frame to a 32-bit bitmap.
#[derive(Debug, Parser)]
#[command(name = "fractal_viewer")]
struct Args {
    /// JSON engine config; defaults apply to every field it omits
    config: Option<PathBuf>,

    /// Bitmap to write
    #[arg(default_value = "output/fractal.bmp")]
    output: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    };

    let pool = Arc::new(config.build_worker_pool()?);
    log::info!("rendering with {} workers", pool.workers());

    let mut session = FractalSession::new(config.build_controller()?, pool);

    if let Some(frame) = session.render_if_dirty()? {
        if let Some(parent) = args.output.parent() {
            std::fs::create_dir_all(parent)?;
        }
        write_bmp(&frame.pixels, &args.output)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn no_arguments_render_the_default_config() {
        let args = Args::try_parse_from(["fractal_viewer"]).unwrap();

        assert_eq!(args.config, None);
        assert_eq!(args.output, PathBuf::from("output/fractal.bmp"));
    }

    #[test]
    fn config_and_output_are_positional() {
        let args = Args::try_parse_from(["fractal_viewer", "view.json", "out.bmp"]).unwrap();

        assert_eq!(args.config, Some(PathBuf::from("view.json")));
        assert_eq!(args.output, PathBuf::from("out.bmp"));
    }

    #[test]
    fn extra_arguments_are_rejected() {
        let err = Args::try_parse_from(["fractal_viewer", "a.json", "b.bmp", "c"]).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn help_is_reported_not_parsed() {
        let err = Args::try_parse_from(["fractal_viewer", "--help"]).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    }
}
