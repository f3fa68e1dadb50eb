use std::{
    fs::File,
    io::{self, BufWriter, Write as _},
    path::Path,
};

use anyhow::Context as _;

/// Reads and deserializes a JSON file; `file_kind` names the file's role in
/// error messages.
pub(crate) fn read_json_file<T, P>(file_kind: &str, path: P) -> anyhow::Result<T>
where
    T: serde::de::DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("failed to open {} file: {}", file_kind, path.display()))?;

    let reader = io::BufReader::new(file);
    let value = serde_json::from_reader(reader)
        .with_context(|| format!("failed to parse {} JSON file: {}", file_kind, path.display()))?;
    Ok(value)
}

/// Writes `value` as pretty-printed JSON to `path`, or to stdout when no
/// path is given.
pub(crate) fn write_json<T>(value: &T, path: Option<&Path>) -> anyhow::Result<()>
where
    T: serde::Serialize,
{
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create output file: {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            serde_json::to_writer_pretty(&mut writer, value)
                .with_context(|| format!("failed to write JSON to {}", path.display()))?;
            writeln!(writer)?;
            writer
                .flush()
                .with_context(|| format!("failed to flush output to {}", path.display()))?;
        }
        None => {
            let mut writer = io::stdout().lock();
            serde_json::to_writer_pretty(&mut writer, value)
                .context("failed to write JSON to stdout")?;
            writeln!(writer)?;
        }
    }
    Ok(())
}
