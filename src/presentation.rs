// src/presentation.rs
use crate::error::Result;
use crate::options::OutputFormat;
use pack_filter_engine::RunResult;
use pack_filter_shared_kernel::{rooted_relative, to_slash};
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Serialize)]
struct Report<'a> {
    dir: String,
    ignored_output_dirs: Vec<String>,
    kept: &'a [String],
}

/// Kept paths relative to the source directory, `/`-separated.
pub fn kept_relative(result: &RunResult) -> Vec<String> {
    result
        .kept
        .iter()
        .map(|path| {
            rooted_relative(&result.source_dir, path)
                .trim_start_matches('/')
                .to_string()
        })
        .collect()
}

pub fn write_results<W: Write>(out: &mut W, result: &RunResult, format: OutputFormat) -> Result<()> {
    let kept = kept_relative(result);
    match format {
        OutputFormat::Plain => {
            for path in &kept {
                writeln!(out, "{path}")?;
            }
        }
        OutputFormat::Json => {
            let report = Report {
                dir: to_slash(&result.source_dir),
                ignored_output_dirs: result.ignored_output_dirs.iter().map(|p| to_slash(p)).collect(),
                kept: &kept,
            };
            serde_json::to_writer_pretty(&mut *out, &report)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn sample() -> RunResult {
        RunResult {
            source_dir: PathBuf::from("/src"),
            kept: vec![PathBuf::from("/src/a/b.txt"), PathBuf::from("/src/index.js")],
            ignored_output_dirs: vec![PathBuf::from("/tmp/build")],
        }
    }

    #[test]
    fn plain_lists_relative_paths() {
        let mut buf = Vec::new();
        write_results(&mut buf, &sample(), OutputFormat::Plain).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "a/b.txt\nindex.js\n");
    }

    #[test]
    fn json_report_has_all_sections() {
        let mut buf = Vec::new();
        write_results(&mut buf, &sample(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["dir"], "/src");
        assert_eq!(value["ignored_output_dirs"][0], "/tmp/build");
        assert_eq!(value["kept"][1], "index.js");
    }
}
