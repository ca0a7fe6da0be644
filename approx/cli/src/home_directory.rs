use {anyhow::anyhow, std::path::PathBuf};

const DEFAULT_DIR_NAME: &str = ".approx";

/// Where the CLI looks for its files.
pub struct HomeDirectory {
    home: PathBuf,
}

impl HomeDirectory {
    pub fn new(home: PathBuf) -> Self {
        Self { home }
    }

    /// Use the given directory, or `~/.approx` if none is given.
    pub fn new_or_default(dir: Option<PathBuf>) -> anyhow::Result<Self> {
        if let Some(dir) = dir {
            return Ok(Self::new(dir));
        }

        let user_home = home::home_dir().ok_or_else(|| anyhow!("failed to find home directory"))?;

        Ok(Self::new(user_home.join(DEFAULT_DIR_NAME)))
    }

    pub fn config_file(&self) -> PathBuf {
        self.home.join("app.toml")
    }
}

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_home_is_used_as_is() {
        let dir = HomeDirectory::new_or_default(Some(PathBuf::from("/tmp/approx"))).unwrap();

        assert_eq!(dir.config_file(), PathBuf::from("/tmp/approx/app.toml"));
    }
}
