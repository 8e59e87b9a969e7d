use std::path::PathBuf;

use crate::category::category_file_name;

/// Default output directory
pub const DEFAULT_OUTPUT_DIR: &str = "auth_tags";

/// Master file listing every tagged line
pub const MASTER_FILE: &str = "tagged_auth.txt";

/// Options for a single tagging run
#[derive(Debug, Clone)]
pub struct TaggerOptions {
    /// Newline-delimited input file
    pub input: PathBuf,

    /// Output directory (created if missing)
    pub output_dir: PathBuf,

    /// Master file name inside the output directory
    pub master_file: String,
}

impl Default for TaggerOptions {
    fn default() -> Self {
        Self {
            input: PathBuf::new(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            master_file: MASTER_FILE.to_string(),
        }
    }
}

impl TaggerOptions {
    pub fn new(input: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output_dir: output_dir.into(),
            ..Self::default()
        }
    }

    /// Get master file path
    pub fn master_path(&self) -> PathBuf {
        self.output_dir.join(&self.master_file)
    }

    /// Get the per-category file path (`<output>/<category lowercase>.txt`)
    pub fn category_path(&self, category: &str) -> PathBuf {
        self.output_dir.join(category_file_name(category))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = TaggerOptions::default();
        assert_eq!(options.output_dir, PathBuf::from("auth_tags"));
        assert_eq!(options.master_path(), PathBuf::from("auth_tags/tagged_auth.txt"));
    }

    #[test]
    fn test_category_path_lowercases() {
        let options = TaggerOptions::new("urls.txt", "out");
        assert_eq!(options.category_path("LOGIN"), PathBuf::from("out/login.txt"));
        assert_eq!(options.input, PathBuf::from("urls.txt"));
        assert_eq!(options.master_file, MASTER_FILE);
    }
}
