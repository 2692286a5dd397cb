use crate::error::{KitError, Result};
use itertools::Itertools;
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Regular files directly inside `dir`, sorted by name. Subdirectories are ignored.
fn list_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(KitError::io(dir))? {
        let path = entry.map_err(KitError::io(dir))?.path();
        if path.is_file() {
            files.push(path);
        }
    }
    Ok(files
        .into_iter()
        .sorted_by(|a, b| a.file_name().cmp(&b.file_name()))
        .collect_vec())
}

/// Zips every file in `dir` into `archive`, flat, each under its base name.
///
/// Returns the entry names in the order they were written. If `archive` lives inside
/// `dir` it is not added to itself.
pub fn package_dir(dir: &Path, archive: &Path) -> Result<Vec<String>> {
    let file = File::create(archive).map_err(KitError::io(archive))?;
    let archive_real = fs::canonicalize(archive).map_err(KitError::io(archive))?;
    let mut zip = ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    let mut names = Vec::new();
    for path in list_files(dir)? {
        if fs::canonicalize(&path).map_err(KitError::io(&path))? == archive_real {
            continue;
        }
        let name = match path.file_name() {
            Some(name) => name.to_string_lossy().into_owned(),
            None => continue,
        };
        zip.start_file(name.as_str(), options)
            .map_err(KitError::archive(archive))?;
        let mut input = File::open(&path).map_err(KitError::io(&path))?;
        io::copy(&mut input, &mut zip).map_err(KitError::io(&path))?;
        log::debug!("packed {}", name);
        names.push(name);
    }
    zip.finish().map_err(KitError::archive(archive))?;
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;
    use zip::ZipArchive;

    #[test]
    fn test_flat_and_sorted() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("kit");
        fs::create_dir(&out).unwrap();
        fs::write(out.join("b.txt"), b"bravo").unwrap();
        fs::write(out.join("a.txt"), b"alpha").unwrap();
        fs::create_dir(out.join("nested")).unwrap();
        fs::write(out.join("nested").join("c.txt"), b"charlie").unwrap();

        let archive = dir.path().join("kit.zip");
        let names = package_dir(&out, &archive).unwrap();
        assert_eq!(names, vec!["a.txt", "b.txt"]);

        let mut zip = ZipArchive::new(File::open(&archive).unwrap()).unwrap();
        assert_eq!(zip.len(), 2);
        let mut body = String::new();
        zip.by_name("b.txt").unwrap().read_to_string(&mut body).unwrap();
        assert_eq!(body, "bravo");
    }

    #[test]
    fn test_skips_itself() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("README.txt"), b"hello").unwrap();
        let archive = dir.path().join("kit.zip");
        let names = package_dir(dir.path(), &archive).unwrap();
        assert_eq!(names, vec!["README.txt"]);
    }

    #[test]
    fn test_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let err = package_dir(&dir.path().join("absent"), &dir.path().join("kit.zip"))
            .unwrap_err();
        assert!(matches!(err, KitError::Io { .. }));
    }
}
