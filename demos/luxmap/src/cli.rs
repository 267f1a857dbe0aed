//! Command-line arguments and configuration resolution.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use map_core::{MapConfig, Point};

/// Load a road map, fit it to a drawing area, and route between two nodes.
///
/// Endpoints come either from node ids (`--from/--to`) or from two picked
/// points in laid-out coordinates (`--pick X,Y --pick X,Y`), which snap to
/// the nearest node within the snap radius.
#[derive(Parser, Debug)]
#[command(name = "luxmap", version)]
pub struct Cli {
    /// XML map document.
    #[arg(long)]
    pub map: PathBuf,

    /// JSON file with `MapConfig` fields; flags below override it.
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(long)]
    pub width: Option<u32>,

    #[arg(long)]
    pub height: Option<u32>,

    #[arg(long)]
    pub margin: Option<u32>,

    /// Clockwise quarter turns applied after scaling.
    #[arg(long)]
    pub quarter_turns: Option<u8>,

    #[arg(long)]
    pub snap_radius: Option<f64>,

    /// Start node id.
    #[arg(long, requires = "to", allow_negative_numbers = true)]
    pub from: Option<i32>,

    /// End node id.
    #[arg(long, requires = "from", allow_negative_numbers = true)]
    pub to: Option<i32>,

    /// Picked point `X,Y`; give it twice.
    #[arg(long, value_parser = parse_point, allow_hyphen_values = true, conflicts_with_all = ["from", "to"])]
    pub pick: Vec<Point>,

    /// Directory to write nodes.csv / edges.csv / route.csv into.
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Print the result as JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Defaults, then the JSON config file, then explicit flags.
    pub fn resolve_config(&self) -> Result<MapConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("reading config {}", path.display()))?;
                serde_json::from_str(&text)
                    .with_context(|| format!("parsing config {}", path.display()))?
            }
            None => MapConfig::default(),
        };

        if let Some(v) = self.width {
            config.width = v;
        }
        if let Some(v) = self.height {
            config.height = v;
        }
        if let Some(v) = self.margin {
            config.margin = v;
        }
        if let Some(v) = self.quarter_turns {
            config.quarter_turns = v;
        }
        if let Some(v) = self.snap_radius {
            config.snap_radius = v;
        }

        config.validate()?;
        Ok(config)
    }
}

/// Parse `X,Y` into a [`Point`].
pub fn parse_point(s: &str) -> Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got {s:?}"))?;
    let coord = |v: &str| {
        v.trim()
            .parse::<i32>()
            .map_err(|e| format!("bad coordinate {v:?}: {e}"))
    };
    Ok(Point::new(coord(x)?, coord(y)?))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use clap::Parser;

    use super::{Cli, parse_point};
    use map_core::Point;

    #[test]
    fn point_parsing() {
        assert_eq!(parse_point("12,-4"), Ok(Point::new(12, -4)));
        assert_eq!(parse_point(" 3 , 5 "), Ok(Point::new(3, 5)));
        assert!(parse_point("12").is_err());
        assert!(parse_point("a,b").is_err());
    }

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::parse_from(["luxmap", "--map", "m.xml", "--width", "400", "--margin", "10"]);
        let cfg = cli.resolve_config().unwrap();
        assert_eq!(cfg.width, 400);
        assert_eq!(cfg.margin, 10);
        assert_eq!(cfg.height, 720);
    }

    #[test]
    fn config_file_then_flags() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"width": 300, "height": 300, "quarter_turns": 2}}"#).unwrap();
        let path = file.path().to_str().unwrap().to_owned();

        let cli = Cli::parse_from(["luxmap", "--map", "m.xml", "--config", &path, "--height", "500"]);
        let cfg = cli.resolve_config().unwrap();
        assert_eq!(cfg.width, 300);
        assert_eq!(cfg.height, 500);
        assert_eq!(cfg.quarter_turns, 2);
        assert_eq!(cfg.margin, 50);
    }

    #[test]
    fn invalid_config_rejected() {
        let cli = Cli::parse_from(["luxmap", "--map", "m.xml", "--width", "60"]);
        assert!(cli.resolve_config().is_err());
    }

    #[test]
    fn endpoints_by_id_or_pick() {
        let cli = Cli::parse_from(["luxmap", "--map", "m.xml", "--from", "-3", "--to", "7"]);
        assert_eq!((cli.from, cli.to), (Some(-3), Some(7)));

        let cli = Cli::parse_from(["luxmap", "--map", "m.xml", "--pick", "1,2", "--pick", "3,4"]);
        assert_eq!(cli.pick, vec![Point::new(1, 2), Point::new(3, 4)]);

        assert!(Cli::try_parse_from(["luxmap", "--map", "m.xml", "--from", "1"]).is_err());
        assert!(
            Cli::try_parse_from(["luxmap", "--map", "m.xml", "--from", "1", "--to", "2", "--pick", "1,1"])
                .is_err()
        );
    }
}
