//! Card filtering end to end, through the fuzzy index.

use cardsift_core::{
    ActivationError, Card, FilterConfig, FilterHandle, IndexFactory, ProjectId, TextInput, activate,
};
use cardsift_search::FuzzyIndexFactory;
use serde_json::{Value, json};

fn make_id(s: &str) -> ProjectId {
    ProjectId::try_new(s.to_string()).unwrap()
}

fn alpha_beta() -> Value {
    json!([
        {"id": "a", "name": "alpha", "description": "", "maintainer": {"name": ""}},
        {"id": "b", "name": "beta", "description": "", "maintainer": {"name": ""}},
    ])
}

struct Page {
    input: TextInput,
    cards: Vec<Card>,
}

impl Page {
    fn new(ids: &[&str]) -> (Self, Vec<(ProjectId, Card)>) {
        let cards: Vec<Card> = ids.iter().map(|_| Card::with_classes(["card"])).collect();
        let tracked = ids
            .iter()
            .zip(&cards)
            .map(|(id, card)| (make_id(id), card.clone()))
            .collect();
        (
            Self {
                input: TextInput::new(),
                cards,
            },
            tracked,
        )
    }

    fn hidden(&self) -> Vec<bool> {
        self.cards.iter().map(|c| c.has_class("d-none")).collect()
    }
}

fn activate_page(dataset: &Value, ids: &[&str]) -> (Page, FilterHandle<Card>) {
    let (mut page, tracked) = Page::new(ids);
    let handle = activate(
        Some(dataset),
        Some(&FuzzyIndexFactory),
        &FilterConfig::default(),
        &mut page.input,
        tracked,
    )
    .unwrap();
    (page, handle)
}

#[test]
fn test_malformed_inputs_never_activate() {
    let factory: &dyn IndexFactory = &FuzzyIndexFactory;
    let cases: Vec<(Option<Value>, Option<&dyn IndexFactory>)> = vec![
        (Some(json!([])), Some(factory)),
        (Some(json!({"id": "a"})), Some(factory)),
        (Some(json!("alpha")), Some(factory)),
        (None, Some(factory)),
        (Some(alpha_beta()), None),
    ];

    for (dataset, factory) in cases {
        let (mut page, tracked) = Page::new(&["a", "b"]);

        let result = activate(
            dataset.as_ref(),
            factory,
            &FilterConfig::default(),
            &mut page.input,
            tracked,
        );

        assert!(result.is_err());
        page.input.set_value("alpha");
        assert_eq!(page.input.listener_count(), 0);
        assert!(page.cards.iter().all(|c| c.mutations() == 0));
    }
}

#[test]
fn test_missing_matcher_is_reported() {
    let (mut page, tracked) = Page::new(&["a", "b"]);

    let result = activate(
        Some(&alpha_beta()),
        None,
        &FilterConfig::default(),
        &mut page.input,
        tracked,
    );

    assert!(matches!(result, Err(ActivationError::MissingMatcher)));
}

#[test]
fn test_empty_query_shows_all() {
    let (mut page, _handle) = activate_page(&alpha_beta(), &["a", "b"]);
    page.input.set_value("zzzz");
    assert_eq!(page.hidden(), [true, true]);

    page.input.set_value("");

    assert_eq!(page.hidden(), [false, false]);
}

#[test]
fn test_exact_name_match() {
    let (mut page, handle) = activate_page(&alpha_beta(), &["a", "b"]);

    page.input.set_value("alpha");

    assert_eq!(handle.visible_ids(), vec![make_id("a")]);
    assert_eq!(page.hidden(), [false, true]);
}

#[test]
fn test_typo_tolerance() {
    let (mut page, _handle) = activate_page(&alpha_beta(), &["a", "b"]);

    page.input.set_value("alpah");

    assert_eq!(page.hidden(), [false, true]);
}

#[test]
fn test_single_character_hides_everything() {
    let (mut page, handle) = activate_page(&alpha_beta(), &["a", "b"]);

    page.input.type_text("a");

    assert_eq!(page.hidden(), [true, true]);
    assert!(handle.visible_ids().is_empty());
}

#[test]
fn test_requery_leaves_no_residue() {
    let (mut page, handle) = activate_page(&alpha_beta(), &["a", "b"]);

    page.input.set_value("alpha");
    page.input.set_value("beta");

    assert_eq!(page.hidden(), [true, false]);
    assert_eq!(handle.visible_ids(), vec![make_id("b")]);
}

#[test]
fn test_maintainer_only_match() {
    let dataset = json!([
        {"id": "a", "name": "alpha", "description": "", "maintainer": {"name": ""}},
        {"id": "j", "name": "jekyll", "description": "blog-aware static sites", "maintainer": {"name": "Parker Moore"}},
    ]);
    let (mut page, handle) = activate_page(&dataset, &["a", "j"]);

    page.input.set_value("parker");

    assert_eq!(handle.visible_ids(), vec![make_id("j")]);
    assert_eq!(page.hidden(), [true, false]);
}

#[test]
fn test_null_fields_activate_and_never_match() {
    let dataset = json!([
        {"id": "a", "name": "alpha", "description": null, "maintainer": {"name": null}},
        {"id": "n", "name": "null", "description": "", "maintainer": {"name": ""}},
    ]);
    let (mut page, handle) = activate_page(&dataset, &["a", "n"]);
    assert_eq!(page.input.listener_count(), 1);

    page.input.set_value("null");
    assert_eq!(handle.visible_ids(), vec![make_id("n")]);

    page.input.set_value("alpha");
    assert_eq!(page.hidden(), [false, true]);
}

#[test]
fn test_typing_narrows_then_backspace_widens() {
    let dataset = json!([
        {"id": "hugo", "name": "Hugo", "description": "static site generator"},
        {"id": "hugin", "name": "Hugin", "description": "image stitching"},
        {"id": "zola", "name": "Zola", "description": "static site engine"},
    ]);
    let (mut page, handle) = activate_page(&dataset, &["hugo", "hugin", "zola"]);

    page.input.type_text("hug");
    assert_eq!(page.hidden(), [false, false, true]);

    page.input.type_text("in");
    assert_eq!(handle.visible_ids(), vec![make_id("hugin")]);

    page.input.backspace();
    page.input.backspace();
    assert_eq!(page.input.value(), "hug");
    assert_eq!(page.hidden(), [false, false, true]);
}
