//! Tagger
//!
//! Reads a newline-delimited URL list, classifies every line and fans the
//! raw lines out into per-category files plus a master tagged list.

use std::collections::HashMap;
use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info, trace};

use crate::category::CategoryClassifier;
use crate::config::TaggerOptions;
use crate::error::{Result, TaggerError};
use crate::summary::Summary;

/// Append-mode writers for category files, opened on first use
struct CategoryWriters<'a> {
    options: &'a TaggerOptions,
    writers: HashMap<String, (PathBuf, BufWriter<File>)>,
}

impl<'a> CategoryWriters<'a> {
    fn new(options: &'a TaggerOptions) -> Self {
        Self {
            options,
            writers: HashMap::new(),
        }
    }

    fn append(&mut self, category: &str, raw_line: &[u8]) -> Result<()> {
        if !self.writers.contains_key(category) {
            let path = self.options.category_path(category);
            debug!(category, path = %path.display(), "opening category file");
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .map_err(|source| TaggerError::OutputWrite {
                    path: path.clone(),
                    source,
                })?;
            self.writers
                .insert(category.to_string(), (path, BufWriter::new(file)));
        }

        if let Some((path, writer)) = self.writers.get_mut(category) {
            writer
                .write_all(raw_line)
                .map_err(|source| TaggerError::OutputWrite {
                    path: path.clone(),
                    source,
                })?;
        }
        Ok(())
    }

    fn finish(self) -> Result<()> {
        for (_, (path, mut writer)) in self.writers {
            writer
                .flush()
                .map_err(|source| TaggerError::OutputWrite { path, source })?;
        }
        Ok(())
    }
}

/// Classifies input lines and writes the tagged output files
pub struct Tagger {
    classifier: CategoryClassifier,
}

impl Tagger {
    pub fn new(classifier: CategoryClassifier) -> Self {
        Self { classifier }
    }

    /// Tagger over the builtin category table
    pub fn builtin() -> Result<Self> {
        Ok(Self::new(CategoryClassifier::builtin()?))
    }

    /// Run one pass over `options.input`
    ///
    /// Category files are appended to, the master file is overwritten.
    /// Nothing is rolled back on failure.
    pub fn process(&self, options: &TaggerOptions) -> Result<Summary> {
        let reader = open_input(&options.input)?;

        fs::create_dir_all(&options.output_dir).map_err(|source| TaggerError::OutputDir {
            path: options.output_dir.clone(),
            source,
        })?;

        info!(
            input = %options.input.display(),
            output = %options.output_dir.display(),
            "tagging started"
        );

        let mut writers = CategoryWriters::new(options);
        let mut summary = Summary::new();
        let mut tagged_lines = Vec::new();

        for raw_line in RawLines::new(reader) {
            let raw_line = raw_line.map_err(|source| TaggerError::InputRead {
                path: options.input.clone(),
                source,
            })?;

            let tagged = self.classifier.tag(&raw_line);
            trace!(category = %tagged.category, line = %tagged.stripped, "tagged");

            tagged_lines.push(tagged.display());
            summary.record(&tagged.category);
            writers.append(&tagged.category, &tagged.line)?;
        }

        writers.finish()?;
        write_master(&options.master_path(), &tagged_lines)?;

        info!(lines = summary.total(), "tagging finished");
        Ok(summary)
    }
}

/// Run the builtin tagger with default options for `input` and `output_dir`
pub fn process(input: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Result<Summary> {
    Tagger::builtin()?.process(&TaggerOptions::new(input, output_dir))
}

fn open_input(path: &Path) -> Result<BufReader<File>> {
    if !path.exists() {
        return Err(TaggerError::InputNotFound {
            path: path.to_path_buf(),
        });
    }
    if !path.is_file() {
        return Err(TaggerError::InputNotAFile {
            path: path.to_path_buf(),
        });
    }

    let file = File::open(path).map_err(|source| TaggerError::InputRead {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

fn write_master(path: &Path, tagged_lines: &[String]) -> Result<()> {
    let mut content = String::new();
    for line in tagged_lines {
        content.push_str(line);
        content.push('\n');
    }

    fs::write(path, content).map_err(|source| TaggerError::OutputWrite {
        path: path.to_path_buf(),
        source,
    })
}

/// Lines as raw bytes, terminator included
struct RawLines<R> {
    reader: R,
}

impl<R: BufRead> RawLines<R> {
    fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> Iterator for RawLines<R> {
    type Item = std::io::Result<Vec<u8>>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut buf = Vec::new();
        match self.reader.read_until(b'\n', &mut buf) {
            Ok(0) => None,
            Ok(_) => Some(Ok(buf)),
            Err(e) => Some(Err(e)),
        }
    }
}
