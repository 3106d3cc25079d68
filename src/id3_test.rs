use crate::id3::*;
use crate::separators::Separators;
use crate::testing;

fn commas() -> Separators {
    Separators::new(",")
}

#[test]
fn test_parse_id3v1_genre_names() {
    testing::init();
    assert_eq!(parse_id3_genre_names(&["17"], &commas()), vec!["Rock"]);
    assert_eq!(parse_id3_genre_names(&["CR"], &commas()), vec!["Cover"]);
    assert_eq!(parse_id3_genre_names(&["RX"], &commas()), vec!["Remix"]);
}

#[test]
fn test_parse_id3v2_genre_names() {
    testing::init();
    assert_eq!(parse_id3_genre_names(&["(17)(13)Custom"], &commas()), vec!["Rock", "Pop", "Custom"]);
    assert_eq!(parse_id3_genre_names(&["(17)"], &commas()), vec!["Rock"]);
    assert_eq!(parse_id3_genre_names(&["(RX)(CR)"], &commas()), vec!["Remix", "Cover"]);
    assert_eq!(parse_id3_genre_names(&["(17)Rock"], &commas()), vec!["Rock"]);
    assert_eq!(parse_id3_genre_names(&["(17)(17)(13)(17)"], &commas()), vec!["Rock", "Pop"]);
}

#[test]
fn test_parse_id3v2_genre_names_unknown_codes() {
    testing::init();
    // Codes outside of the table are dropped rather than kept as text.
    assert_eq!(parse_id3_genre_names(&["(255)(13)"], &commas()), vec!["Pop"]);
    assert_eq!(parse_id3_genre_names(&["(255)"], &commas()), Vec::<String>::new());
}

#[test]
fn test_parse_id3v2_genre_names_escaped_paren() {
    testing::init();
    assert_eq!(parse_id3_genre_names(&["((Foo) Bar"], &commas()), vec!["(Foo) Bar"]);
    assert_eq!(parse_id3_genre_names(&["(17)((Foo)"], &commas()), vec!["Rock", "(Foo)"]);
}

#[test]
fn test_parse_id3_genre_names_free_text() {
    testing::init();
    assert_eq!(parse_id3_genre_names(&["Rock, Jazz"], &commas()), vec!["Rock", "Jazz"]);
    assert_eq!(parse_id3_genre_names(&[r"Rock\, Jazz"], &commas()), vec!["Rock, Jazz"]);
    assert_eq!(parse_id3_genre_names(&["Rock, Jazz"], &Separators::none()), vec!["Rock, Jazz"]);
    // Not a composite value: the parentheses don't hold a code.
    assert_eq!(parse_id3_genre_names(&["(Live),Jazz"], &commas()), vec!["(Live)", "Jazz"]);
}

#[test]
fn test_parse_id3_genre_names_composite_text_not_split() {
    testing::init();
    // Text following codes is taken whole, separators and all.
    assert_eq!(parse_id3_genre_names(&["(17)Indie,Jazz"], &commas()), vec!["Rock", "Indie,Jazz"]);
}

#[test]
fn test_parse_id3_genre_names_multiline_falls_back() {
    testing::init();
    assert_eq!(parse_id3_genre_names(&["(17)\nJazz"], &Separators::new("\n")), vec!["(17)", "Jazz"]);
}

#[test]
fn test_parse_id3_genre_names_already_split() {
    testing::init();
    assert_eq!(
        parse_id3_genre_names(&["17", "Synthwave", "CR", "(13)", "17"], &commas()),
        vec!["Rock", "Synthwave", "Cover", "(13)", "Rock"]
    );
    assert_eq!(parse_id3_genre_names(&["Rock,Pop", "Jazz"], &commas()), vec!["Rock,Pop", "Jazz"]);
}

#[test]
fn test_parse_id3_genre_names_empty() {
    testing::init();
    assert_eq!(parse_id3_genre_names(&[""], &commas()), Vec::<String>::new());
    assert_eq!(parse_id3_genre_names::<&str>(&[], &commas()), Vec::<String>::new());
}

#[test]
fn test_parse_id3v2_genre_names_trims_text() {
    testing::init();
    assert_eq!(parse_id3_genre_names(&["(17) Jazz"], &commas()), vec!["Rock", "Jazz"]);
    assert_eq!(parse_id3_genre_names(&["(17) "], &commas()), vec!["Rock"]);
    assert_eq!(parse_id3_genre_names(&["(17)Rock "], &commas()), vec!["Rock"]);
    // Plain text still goes through splitting untouched when there is nothing to split on.
    assert_eq!(parse_id3_genre_names(&[" Jazz "], &Separators::none()), vec![" Jazz "]);
}
