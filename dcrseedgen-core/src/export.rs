use crate::error::{Result, SeedgenError};
use crate::types::KeyPair;
use chrono::Local;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

pub const CSV_HEADER: [&str; 2] = ["Address", "Private Key"];
pub const EXPORT_FILE_PREFIX: &str = "dcrseedgen_address_";

/// Writes the header and one row per pair.
pub fn write_key_pairs<W, R, A, K>(writer: W, pairs: R) -> Result<()>
where
    W: Write,
    R: IntoIterator<Item = (A, K)>,
    A: AsRef<str>,
    K: AsRef<str>,
{
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(CSV_HEADER)?;
    for (address, private_key) in pairs {
        csv.write_record([address.as_ref(), private_key.as_ref()])?;
    }
    csv.flush()?;
    Ok(())
}

pub fn export_file_name() -> String {
    format!(
        "{}{}.csv",
        EXPORT_FILE_PREFIX,
        Local::now().format("%Y%m%d-%H%M%S")
    )
}

/// Writes `pairs` to a new timestamped CSV file inside `dir` and returns its
/// absolute path. The file only appears once it is completely written.
pub fn export_rows<R, A, K>(pairs: R, dir: &Path) -> Result<PathBuf>
where
    R: IntoIterator<Item = (A, K)>,
    A: AsRef<str>,
    K: AsRef<str>,
{
    std::fs::create_dir_all(dir)?;
    let dir = dir.canonicalize()?;

    let mut tmp = NamedTempFile::new_in(&dir)?;
    write_key_pairs(tmp.as_file_mut(), pairs)?;
    tmp.as_file().sync_all()?;

    let path = unique_path(&dir, &export_file_name());
    tmp.persist_noclobber(&path)
        .map_err(|e| SeedgenError::Io(e.error))?;

    tracing::info!("Exported key pairs to {}", path.display());
    Ok(path)
}

pub fn export_key_pairs(pairs: &[KeyPair], dir: &Path) -> Result<PathBuf> {
    export_rows(
        pairs.iter().map(|p| (&p.address, &p.private_key)),
        dir,
    )
}

// two exports in the same second must not overwrite each other
fn unique_path(dir: &Path, file_name: &str) -> PathBuf {
    let candidate = dir.join(file_name);
    if !candidate.exists() {
        return candidate;
    }

    let stem = file_name.trim_end_matches(".csv");
    (1..)
        .map(|n| dir.join(format!("{}-{}.csv", stem, n)))
        .find(|p| !p.exists())
        .unwrap_or(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entropy::OsEntropy;
    use crate::keys::generate_key_pairs;
    use crate::network::Network;
    use tempfile::tempdir;

    #[test]
    fn test_write_two_rows() {
        let mut out = Vec::new();
        write_key_pairs(&mut out, [("addrA", "keyA"), ("addrB", "keyB")]).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Address,Private Key\naddrA,keyA\naddrB,keyB\n"
        );
    }

    #[test]
    fn test_write_quotes_fields() {
        let mut out = Vec::new();
        write_key_pairs(&mut out, [("a,b", "say \"hi\"")]).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Address,Private Key\n\"a,b\",\"say \"\"hi\"\"\"\n"
        );
    }

    #[test]
    fn test_export_key_pairs_to_file() {
        let dir = tempdir().unwrap();
        let pairs = generate_key_pairs(Network::Testnet3, 5, &mut OsEntropy).unwrap();

        let path = export_key_pairs(&pairs, dir.path()).unwrap();
        assert!(path.is_absolute());
        assert!(path
            .file_name()
            .unwrap()
            .to_string_lossy()
            .starts_with(EXPORT_FILE_PREFIX));

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "Address,Private Key");
        for (line, pair) in lines[1..].iter().zip(&pairs) {
            assert_eq!(*line, format!("{},{}", pair.address, pair.private_key));
        }

        // no temporary files left behind
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_repeated_exports_keep_both_files() {
        let dir = tempdir().unwrap();
        let rows = [("addrA", "keyA")];

        let first = export_rows(rows, dir.path()).unwrap();
        let second = export_rows(rows, dir.path()).unwrap();

        assert_ne!(first, second);
        assert!(first.exists() && second.exists());
    }

    #[test]
    fn test_export_creates_missing_directory() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("exports").join("today");

        let path = export_rows([("addrA", "keyA")], &nested).unwrap();
        assert!(path.starts_with(nested.canonicalize().unwrap()));
    }

    #[test]
    fn test_export_into_file_path_fails() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("not-a-dir");
        std::fs::write(&file, b"x").unwrap();

        let result = export_rows([("addrA", "keyA")], &file);
        assert!(matches!(result, Err(SeedgenError::Io(_))));
    }
}
