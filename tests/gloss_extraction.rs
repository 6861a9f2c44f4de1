use toagloss::extract_gloss;

fn gloss(body: &str) -> Option<String> {
    extract_gloss(body, "toa")
}

#[test]
fn copula_definitions() {
    assert_eq!(gloss("▯ is a dog."), Some("dog".into()));
    assert_eq!(gloss("▯ is an apple."), Some("apple".into()));
    assert_eq!(gloss("▯ is the sky."), Some("sky".into()));
    assert_eq!(gloss("▯ are shoes."), Some("shoes".into()));
    assert_eq!(gloss("▯ is a small bird."), Some("small bird".into()));
}

#[test]
fn quoted_phrase_definitions() {
    assert_eq!(gloss("‘cat’; ▯ is a cat."), Some("cat".into()));
    assert_eq!(gloss("\"already\"; ▯ has happened by now."), Some("already".into()));
    assert_eq!(gloss("’so that it be.’; optative marker"), Some("so that it be.".into()));
}

#[test]
fn verb_definitions() {
    assert_eq!(gloss("▯ sleeps."), Some("sleeps".into()));
    assert_eq!(gloss("▯ loves ▯."), Some("loves".into()));
    assert_eq!(gloss("▯ gives ▯ to ▯."), Some("gives".into()));
}

#[test]
fn connector_tails_vanish() {
    assert_eq!(gloss("▯ is the king of ▯."), Some("king".into()));
    assert_eq!(gloss("▯ is a gift from ▯."), Some("gift".into()));
    assert_eq!(gloss("▯ are the leaves of ▯."), Some("leaves".into()));
}

#[test]
fn single_space_slot_tail_keeps_the_copula() {
    // ` ▯` with one leading space falls through to the bare template,
    // which captures everything before the slot.
    assert_eq!(gloss("▯ are the leaves ▯"), Some("are the leaves".into()));
}

#[test]
fn collapsed_slots_then_bare_template() {
    assert_eq!(gloss("▯ is between ▯ and ▯."), Some("is between".into()));
}

#[test]
fn alternatives_and_annotations() {
    assert_eq!(gloss("▯ is red/scarlet."), Some("red".into()));
    assert_eq!(gloss("▯ is a fish (of any kind)."), Some("fish".into()));
    assert_eq!(gloss("▯ is a (strong) wind of ▯."), Some("strong wind".into()));
}

#[test]
fn unmatched_bodies_yield_nothing() {
    assert_eq!(gloss("Toaq is fun."), None);
    assert_eq!(gloss("interjection expressing surprise"), None);
    assert_eq!(gloss("▯ and ▯ go beautifully together; ▯ nicely suits ▯."), None);
    assert_eq!(gloss(""), None);
}

#[test]
fn extractor_does_not_bound_length() {
    // Length limits live in the output layer.
    let long = gloss("▯ is a particularly elaborate ceremonial headdress.");
    assert_eq!(
        long,
        Some("particularly elaborate ceremonial headdress".into())
    );
}
