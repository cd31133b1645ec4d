//! Fixture builders for submission tests.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// A well-formed four-line header for `author`'s assignment/file.
pub(crate) fn header(author: &str, assignment: &str, file_number: &str) -> String {
    format!(
        "# {author}, John\n# 1001-234-567\n# 2024-09-01\n# Assignment-{assignment}-{file_number}\n"
    )
}

/// Write `Author-AA-FF.txt` with a matching header into `dir`.
pub(crate) fn write_document(
    dir: &Path,
    author: &str,
    assignment: &str,
    file_number: &str,
) -> PathBuf {
    let path = dir.join(format!("{author}-{assignment}-{file_number}.txt"));
    std::fs::write(&path, header(author, assignment, file_number) + "\nBody.\n").unwrap();
    path
}

/// Write an arbitrary file into `dir`.
pub(crate) fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

/// Create an empty folder `name` inside `parent`.
pub(crate) fn make_folder(parent: &Path, name: &str) -> PathBuf {
    let path = parent.join(name);
    std::fs::create_dir_all(&path).unwrap();
    path
}

/// Zip `entries` into `dest`, storing each file under its relative path.
///
/// Paths ending in `/` become directory entries.
pub(crate) fn write_zip(dest: &Path, entries: &[(&str, &str)]) -> PathBuf {
    let file = File::create(dest).unwrap();
    let mut zip = ZipWriter::new(file);
    let options = SimpleFileOptions::default();

    for (name, contents) in entries {
        if name.ends_with('/') {
            zip.add_directory(*name, options).unwrap();
        } else {
            zip.start_file(*name, options).unwrap();
            zip.write_all(contents.as_bytes()).unwrap();
        }
    }

    zip.finish().unwrap();
    dest.to_path_buf()
}

/// Zip an existing folder so that it is the archive's single top-level entry.
pub(crate) fn zip_folder(folder: &Path, dest: &Path) -> PathBuf {
    let folder_name = folder.file_name().unwrap().to_string_lossy().into_owned();
    let mut entries = vec![(format!("{folder_name}/"), String::new())];
    for entry in std::fs::read_dir(folder).unwrap() {
        let path = entry.unwrap().path();
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        entries.push((
            format!("{folder_name}/{name}"),
            std::fs::read_to_string(&path).unwrap(),
        ));
    }

    let borrowed: Vec<(&str, &str)> = entries
        .iter()
        .map(|(name, contents)| (name.as_str(), contents.as_str()))
        .collect();
    write_zip(dest, &borrowed)
}

/// Write a `.docx` with one paragraph per entry of `paragraphs`.
pub(crate) fn write_docx(dir: &Path, name: &str, paragraphs: &[&str]) -> PathBuf {
    use docx_rs::{Docx, Paragraph, Run};

    let path = dir.join(name);
    let mut docx = Docx::new();
    for text in paragraphs {
        docx = docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(*text)));
    }
    let file = File::create(&path).unwrap();
    docx.build().pack(file).unwrap();
    path
}

/// Write a minimal PDF: one page per entry of `pages`, one text line per
/// string, set in Helvetica.
pub(crate) fn write_pdf(dir: &Path, name: &str, pages: &[&[&str]]) -> PathBuf {
    let page_count = pages.len();
    let kids: Vec<String> = (0..page_count)
        .map(|i| format!("{} 0 R", 4 + 2 * i))
        .collect();

    let mut objects = vec![
        "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
        format!(
            "<< /Type /Pages /Kids [{}] /Count {} >>",
            kids.join(" "),
            page_count
        ),
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>".to_string(),
    ];

    for (i, lines) in pages.iter().enumerate() {
        let mut content = String::from("BT\n/F1 12 Tf\n72 720 Td\n");
        for (n, line) in lines.iter().enumerate() {
            if n > 0 {
                content.push_str("0 -24 Td\n");
            }
            let escaped = line
                .replace('\\', "\\\\")
                .replace('(', "\\(")
                .replace(')', "\\)");
            content.push_str(&format!("({escaped}) Tj\n"));
        }
        content.push_str("ET");

        objects.push(format!(
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] \
             /Resources << /Font << /F1 3 0 R >> >> /Contents {} 0 R >>",
            5 + 2 * i
        ));
        objects.push(format!(
            "<< /Length {} >>\nstream\n{content}\nendstream",
            content.len()
        ));
    }

    let mut pdf = String::from("%PDF-1.4\n");
    let mut offsets = Vec::with_capacity(objects.len());
    for (i, body) in objects.iter().enumerate() {
        offsets.push(pdf.len());
        pdf.push_str(&format!("{} 0 obj\n{body}\nendobj\n", i + 1));
    }

    let xref_offset = pdf.len();
    pdf.push_str(&format!("xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1));
    for offset in offsets {
        pdf.push_str(&format!("{offset:010} 00000 n \n"));
    }
    pdf.push_str(&format!(
        "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref_offset}\n%%EOF\n",
        objects.len() + 1
    ));

    write_file(dir, name, &pdf)
}

/// Zip a single symlink entry `link` pointing at `target`.
#[cfg(unix)]
pub(crate) fn write_zip_symlink(dest: &Path, link: &str, target: &Path) -> PathBuf {
    let file = File::create(dest).unwrap();
    let mut zip = ZipWriter::new(file);
    zip.add_symlink(link, target.to_string_lossy(), SimpleFileOptions::default())
        .unwrap();
    zip.finish().unwrap();
    dest.to_path_buf()
}
