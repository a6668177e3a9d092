//
//  bitbucket-cloud-client
//  tests/headers.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

use std::fs;
use std::path::{Path, PathBuf};

fn rust_files(dir: &Path, out: &mut Vec<PathBuf>) {
    for entry in fs::read_dir(dir).unwrap() {
        let path = entry.unwrap().path();
        if path.is_dir() {
            rust_files(&path, out);
        } else if path.extension().is_some_and(|ext| ext == "rs") {
            out.push(path);
        }
    }
}

#[test]
fn test_every_source_file_carries_the_same_header() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR"));
    let mut files = Vec::new();
    rust_files(&root.join("src"), &mut files);
    rust_files(&root.join("tests"), &mut files);
    assert!(!files.is_empty());

    for file in files {
        let text = fs::read_to_string(&file).unwrap();
        let header: Vec<&str> = text.lines().take(7).collect();
        assert_eq!(header[1], "//  bitbucket-cloud-client", "{}", file.display());
        assert_eq!(
            header[4], "//  Created by Ngonidzashe Mangudya on 2026/10/19.",
            "{}",
            file.display()
        );
        assert_eq!(
            header[5], "//  Copyright (c) 2026 IAMNGONI. All rights reserved.",
            "{}",
            file.display()
        );
    }
}
