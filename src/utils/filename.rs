//! Export file naming

use std::collections::HashMap;

/// Base name every export artifact starts with
pub const FILE_BASE_NAME: &str = "cartokit";

/// Default file name for image exports
pub const DEFAULT_IMAGE_FILE: &str = "cartokit.png";

/// Default file name for config exports
pub const DEFAULT_CONFIG_FILE: &str = "cartokit.json";

/// Default file name for standalone document exports
pub const DEFAULT_DOCUMENT_FILE: &str = "cartokit.html";

/// Build the deterministic file name for a dataset export
///
/// # Arguments
/// * `label` - The dataset's label
/// * `extension` - File extension of the export format
pub fn data_file_name(label: &str, extension: &str) -> String {
    format!("{}_{}.{}", FILE_BASE_NAME, sanitize_label(label), extension)
}

/// Replace characters that cannot appear in a file name
fn sanitize_label(label: &str) -> String {
    let cleaned: String = label
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' => '-',
            c if c.is_control() => '-',
            c => c,
        })
        .collect();

    if cleaned.is_empty() {
        "dataset".to_string()
    } else {
        cleaned
    }
}

/// Hands out unique file names within one aggregate export
///
/// The first payload with a given name keeps it; later payloads with the
/// same name get a numeric suffix before the extension
/// (`cartokit_trips.csv`, `cartokit_trips-1.csv`, ...).
#[derive(Debug, Default)]
pub struct FileNameAllocator {
    seen: HashMap<String, usize>,
}

impl FileNameAllocator {
    pub fn new() -> Self {
        FileNameAllocator::default()
    }

    /// Allocate a unique variant of the requested file name
    pub fn allocate(&mut self, file_name: &str) -> String {
        let count = self.seen.entry(file_name.to_string()).or_insert(0);
        *count += 1;

        if *count == 1 {
            return file_name.to_string();
        }

        match file_name.rsplit_once('.') {
            Some((stem, extension)) => format!("{}-{}.{}", stem, *count - 1, extension),
            None => format!("{}-{}", file_name, *count - 1),
        }
    }
}
