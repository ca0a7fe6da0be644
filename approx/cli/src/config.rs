use {
    approx_diagram::DiagramStyle,
    serde::{Deserialize, Serialize},
};

#[derive(Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub log_level: String,
    pub json: bool,
    pub diagram: DiagramStyle,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json: false,
            diagram: DiagramStyle::default(),
        }
    }
}

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use {super::*, config_parser::parse_config, std::fs};

    #[test]
    fn parses_partial_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.toml");

        fs::write(
            &path,
            "json = true\n\n[diagram]\ngrid_spacing = 40\nmarker_color = [0, 0, 255]\n",
        )
        .unwrap();

        let cfg: Config = parse_config(&path).unwrap();

        assert!(cfg.json);
        assert_eq!(cfg.diagram.grid_spacing, 40);
        assert_eq!(cfg.diagram.marker_color, approx_diagram::Rgb(0, 0, 255));
        assert_eq!(cfg.diagram.marker_offset, 100);
    }

    #[test]
    fn missing_config_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();

        let cfg: Config = parse_config(dir.path().join("app.toml")).unwrap();

        assert_eq!(cfg.diagram, DiagramStyle::default());
    }
}
