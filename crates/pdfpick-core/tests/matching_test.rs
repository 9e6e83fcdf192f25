use pdfpick_core::matching::{decode_url, find_selected, urls_match};
use pdfpick_core::record::NormalizedFile;

fn file_with_url(id: &str, url: &str) -> NormalizedFile {
    NormalizedFile {
        id: id.to_owned(),
        name: format!("{id}.pdf"),
        url: url.to_owned(),
        size: 1,
        path: String::new(),
        created_at: String::new(),
    }
}

#[test]
fn decodes_percent_escapes() {
    assert_eq!(decode_url("https://x/a%20b.pdf"), "https://x/a b.pdf");
}

#[test]
fn encoded_field_matches_decoded_file_url() {
    assert!(urls_match("https://x/a%20b.pdf", "https://x/a b.pdf"));
}

#[test]
fn decoded_field_matches_encoded_file_url() {
    assert!(urls_match("https://x/a b.pdf", "https://x/a%20b.pdf"));
}

#[test]
fn differently_encoded_urls_match_after_decoding() {
    assert!(urls_match("https://x/a%20b%2Bc.pdf", "https://x/a b%2Bc.pdf"));
}

#[test]
fn unrelated_urls_do_not_match() {
    assert!(!urls_match("https://x/a.pdf", "https://x/b.pdf"));
}

#[test]
fn find_selected_returns_first_match() {
    let files = vec![
        file_with_url("1", "https://x/other.pdf"),
        file_with_url("2", "https://x/a b.pdf"),
        file_with_url("3", "https://x/a%20b.pdf"),
    ];
    let hit = find_selected(&files, "https://x/a%20b.pdf").unwrap();
    assert_eq!(hit.id, "2");
}

#[test]
fn empty_field_value_selects_nothing() {
    let files = vec![file_with_url("1", "")];
    assert!(find_selected(&files, "").is_none());
}
