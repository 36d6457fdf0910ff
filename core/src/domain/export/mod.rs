pub mod pdf;
pub mod spreadsheet;

/// A rendered export, ready to be handed to the transport layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub filename: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

pub const PDF_CONTENT_TYPE: &str = "application/pdf";
pub const SPREADSHEET_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Builds a download filename from the recipe name. Characters that are
/// unsafe in filenames or Content-Disposition headers are replaced.
pub fn export_filename(name: &str, extension: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '-',
            c if c.is_control() => '-',
            c => c,
        })
        .collect();

    let cleaned = cleaned.trim().trim_matches('.').trim();
    if cleaned.is_empty() {
        format!("recipe.{extension}")
    } else {
        format!("{cleaned}.{extension}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filename_keeps_plain_names() {
        assert_eq!(export_filename("Quinoa salad", "pdf"), "Quinoa salad.pdf");
    }

    #[test]
    fn filename_replaces_unsafe_characters() {
        assert_eq!(
            export_filename("soup: v2/final", "xlsx"),
            "soup- v2-final.xlsx"
        );
    }

    #[test]
    fn filename_falls_back_when_nothing_survives() {
        assert_eq!(export_filename("...", "pdf"), "recipe.pdf");
        assert_eq!(export_filename("  ", "xlsx"), "recipe.xlsx");
    }
}
