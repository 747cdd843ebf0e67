use base::record::AdmissionRecord;
use std::ffi::OsStr;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

type Records = Vec<Option<AdmissionRecord>>;

fn invalid_data(e: serde_json::Error) -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::InvalidData, e)
}

fn read_json(path: &Path) -> std::io::Result<Records> {
    let file = File::open(path)?;
    serde_json::from_reader(BufReader::new(file)).map_err(invalid_data)
}

fn read_json_lines(path: &Path) -> std::io::Result<Records> {
    let file = File::open(path)?;
    let mut records = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        records.push(serde_json::from_str(&line).map_err(invalid_data)?);
    }
    Ok(records)
}

/// Reads admission records. A `null` entry stands for an absent record and is
/// kept as `None`.
pub fn read_records(path: &Path) -> std::io::Result<Records> {
    match path.extension().and_then(OsStr::to_str) {
        Some("json") => read_json(path),
        Some("jsonl") => read_json_lines(path),
        _ => Err(std::io::ErrorKind::Unsupported.into()),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::Rng;
    use std::path::PathBuf;

    fn scratch(extension: &str, content: &str) -> PathBuf {
        let id = rand::thread_rng().gen::<u64>();
        let path = std::env::temp_dir().join(format!("admissions-{id:016x}.{extension}"));
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_json() {
        let path = scratch(
            "json",
            r#"[{"case_id":"A","age":40,"gender":"F","triage":"Red","arrival":1},null]"#,
        );
        let records = read_records(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].as_ref().unwrap().case_id, "A");
        assert!(records[1].is_none());
    }

    #[test]
    fn test_json_lines() {
        let path = scratch(
            "jsonl",
            "{\"case_id\":\"B\",\"age\":9,\"gender\":\"X\",\"triage\":\"Green\",\"arrival\":2}\n\nnull\n",
        );
        let records = read_records(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].as_ref().unwrap().age, 9);
        assert!(records[1].is_none());
    }

    #[test]
    fn test_unsupported() {
        let err = read_records(Path::new("records.csv")).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::Unsupported);
        let path = scratch("json", "[{\"case_id\":\"C\"}]");
        let err = read_records(&path).unwrap_err();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
    }
}
