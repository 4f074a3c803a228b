use tuidom::{Element, Tag};

fn sequence(id: &str) -> u64 {
    id.rsplit('-').next().and_then(|n| n.parse().ok()).unwrap()
}

// ============================================================================
// Generated ids
// ============================================================================

// Kept alone in its own test binary so the global id counter is not shared
// with other tests.
#[test]
fn test_constructors_take_one_id_each() {
    let elements = [
        Element::new(Tag::Cell),
        Element::text("x"),
        Element::col(),
        Element::row(),
        Element::box_(),
        Element::default(),
    ];

    let prefixes: Vec<&str> = elements
        .iter()
        .map(|el| el.id.rsplit_once('-').map(|(prefix, _)| prefix).unwrap())
        .collect();
    assert_eq!(prefixes, vec!["td", "text", "col", "row", "div", "el"]);

    let first = sequence(&elements[0].id);
    for (offset, el) in elements.iter().enumerate() {
        assert_eq!(sequence(&el.id), first + offset as u64, "{}", el.id);
    }
}
