#![allow(dead_code)]

use std::env::temp_dir;
use std::fs::{self, File};
use std::io::{Cursor, Write};
use std::path::PathBuf;

use rs_banner_generator::Console;

fn unique(name: &str) -> PathBuf {
    let mut path = temp_dir();
    path.push(format!("rs_banner_generator_{}_{}", std::process::id(), name));
    path
}

pub struct TempFile {
    pub path: PathBuf,
}

impl TempFile {
    pub fn new(filename: &str, content: &str) -> Self {
        let path = unique(filename);

        let mut file = File::create(&path).expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write to temp file");

        TempFile { path }
    }
}

impl Drop for TempFile {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}

/// A path nothing has been written to yet; removed on drop if something was.
pub struct TempPath {
    pub path: PathBuf,
}

impl TempPath {
    pub fn new(filename: &str) -> Self {
        let path = unique(filename);
        let _ = fs::remove_file(&path);
        TempPath { path }
    }

    pub fn as_str(&self) -> &str {
        self.path.to_str().expect("temp path is not valid UTF-8")
    }
}

impl Drop for TempPath {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}

pub struct TempDir {
    pub path: PathBuf,
}

impl TempDir {
    pub fn new(name: &str) -> Self {
        let path = unique(name);
        let _ = fs::remove_dir_all(&path);
        fs::create_dir_all(&path).expect("Failed to create temp dir");
        TempDir { path }
    }

    pub fn touch(&self, filename: &str, content: &str) -> PathBuf {
        let path = self.path.join(filename);
        fs::write(&path, content).expect("Failed to write file in temp dir");
        path
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

/// Console fed from `input` lines, writing into memory.
pub fn console(lines: &[&str]) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
    let mut input = lines.join("\n");
    input.push('\n');
    Console::new(Cursor::new(input.into_bytes()), Vec::new())
}

pub fn output(console: Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
    String::from_utf8(console.into_output()).expect("console output is not UTF-8")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tempfile_creation() {
        let temp = TempFile::new("test.txt", "Hello, world!");
        assert_eq!(fs::read_to_string(&temp.path).unwrap(), "Hello, world!");
    }
}
