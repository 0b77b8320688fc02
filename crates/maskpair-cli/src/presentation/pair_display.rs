//! Image pair display utilities for CLI output.

use maskpair_core::ImagePair;

use super::tables::{format_optional, truncate_string};

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Column header for pair tables, matching `format_pair_row`.
pub fn pair_table_header() -> String {
    format!(
        "{:<5} {:<24} {:<24} {:<10} {:<11} {:<19}",
        "ID", "Original", "Mask", "Size", "Dimensions", "Uploaded"
    )
}

/// One table row for a pair.
pub fn format_pair_row(pair: &ImagePair) -> String {
    format!(
        "{:<5} {:<24} {:<24} {:<10} {:<11} {:<19}",
        pair.id,
        truncate_string(&pair.original_filename, 23),
        truncate_string(&pair.mask_filename, 23),
        format_optional(pair.file_size, "--"),
        format_dimensions(pair),
        pair.upload_date.format(DATE_FORMAT),
    )
}

fn format_dimensions(pair: &ImagePair) -> String {
    match (pair.image_width, pair.image_height) {
        (None, None) => "--".to_string(),
        (w, h) => format!("{}x{}", format_optional(w, "?"), format_optional(h, "?")),
    }
}

/// Print every field of a pair.
pub fn display_pair(pair: &ImagePair) {
    println!("ID:              {}", pair.id);
    println!("Original:        {}", pair.original_filename);
    println!("Original path:   {}", pair.original_path);
    println!("Mask:            {}", pair.mask_filename);
    println!("Mask path:       {}", pair.mask_path);
    println!("Uploaded:        {}", pair.upload_date.format(DATE_FORMAT));
    println!(
        "File size:       {}",
        pair.file_size.map_or_else(|| "--".to_string(), |b| format!("{b} bytes"))
    );
    println!("Dimensions:      {}", format_dimensions(pair));
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn pair() -> ImagePair {
        ImagePair {
            id: 12,
            original_filename: "a.png".to_string(),
            original_path: "/imgs/a.png".to_string(),
            mask_filename: "a_mask.png".to_string(),
            mask_path: "/imgs/a_mask.png".to_string(),
            upload_date: Utc.with_ymd_and_hms(2024, 3, 5, 14, 7, 9).unwrap(),
            file_size: Some(2048),
            image_width: Some(100),
            image_height: None,
        }
    }

    #[test]
    fn test_row_contains_formatted_fields() {
        let row = format_pair_row(&pair());
        assert!(row.starts_with("12"));
        assert!(row.contains("a_mask.png"));
        assert!(row.contains("2048"));
        assert!(row.contains("100x?"));
        assert!(row.contains("2024-03-05 14:07:09"));
    }

    #[test]
    fn test_missing_dimensions_render_as_dashes() {
        let mut p = pair();
        p.image_width = None;
        assert_eq!(format_dimensions(&p), "--");
    }

    #[test]
    fn test_header_and_row_align() {
        let header = pair_table_header();
        let row = format_pair_row(&pair());
        assert_eq!(header.find("Mask"), row.find("a_mask.png"));
    }
}
