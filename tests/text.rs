use harf::text::{
    count_base_characters, keep_only_alphabetic, remove_diacritics, remove_elongation, reverse,
};
use harf::translit::encode_text;
use harf::{shape_text, shape_text_with, ShapingFlags};

#[test]
fn count_without_diacritics() {
    assert_eq!(count_base_characters("\u{0646}\u{064E}\u{0635}\u{064C}"), 2);
}

#[test]
fn elongation() {
    assert_eq!(remove_elongation("نـــص"), "نص");
}

#[test]
fn strip_then_shape() {
    let vowelled = "\u{0646}\u{064E}\u{0635}\u{064C} \u{0639}\u{064E}\u{0631}\u{0628}\u{0650}\u{064A}";
    assert_eq!(
        shape_text(&remove_diacritics(vowelled)),
        remove_diacritics(&shape_text_with(vowelled, ShapingFlags::SKIP_TRANSPARENT))
    );
}

#[test]
fn filter_before_transliterating() {
    let mixed = "abc بيت 123";
    assert!(encode_text(mixed).is_err());
    assert_eq!(encode_text(&keep_only_alphabetic(mixed)).unwrap(), "byt");
}

#[test]
fn reverse_shaped_for_left_to_right_display() {
    let shaped = shape_text("بيت");
    assert_eq!(reverse(&shaped), "\u{FE96}\u{FEF4}\u{FE91}");
    assert_eq!(reverse(&reverse(&shaped)), shaped);
}
