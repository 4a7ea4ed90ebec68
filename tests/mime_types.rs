//! Behavioural tests for MIME inference and rendering.
#![expect(
    clippy::expect_used,
    reason = "tests panic to surface malformed fixtures"
)]

use rstest::rstest;
use sundry::{CharSet, MimeType, add_char_set, infer_mime_type};

#[rstest]
#[case("picture.png", Some(MimeType::Png))]
#[case("photo.JPG", Some(MimeType::Jpeg))]
#[case("photo.jpeg", Some(MimeType::Jpeg))]
#[case("notes.txt", Some(MimeType::Text))]
#[case("track.gpx", Some(MimeType::Gpx))]
#[case("page.htm", Some(MimeType::Html))]
#[case("feed.atom", Some(MimeType::Atom))]
#[case("data.json", Some(MimeType::Json))]
#[case("archive.rar", None)]
#[case("README", None)]
fn infers_mime_type_from_extension(#[case] name: &str, #[case] expected: Option<MimeType>) {
    assert_eq!(infer_mime_type(name), expected);
}

#[test]
fn renders_content_type_with_charset() {
    assert_eq!(MimeType::Svg.to_string(), "image/svg+xml");
    assert_eq!(
        add_char_set(MimeType::Json, CharSet::default()),
        "application/json; charset=utf-8"
    );
    assert_eq!(
        add_char_set(MimeType::Text, CharSet::Ascii),
        "text/plain; charset=us-ascii"
    );
}

#[test]
fn survives_serde_round_trip() {
    let encoded = serde_json::to_string(&MimeType::Gif).expect("serializes");
    let decoded: MimeType = serde_json::from_str(&encoded).expect("deserializes");
    assert_eq!(decoded, MimeType::Gif);
}
