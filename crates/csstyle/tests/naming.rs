//! End-to-end tests for the naming convention.
//!
//! Each stylesheet is compiled, rendered to CSS text, and read back with
//! `cssel::StyleReader`, so every score below is recomputed from the output
//! rather than taken from the synthesizer.

use cssel::{ReadRule, StyleReader};
use csstyle::{
    Declaration, Stylesheet, SymbolTable, Synthesizer, component, location, option, part, raw,
    render, sibling, tweak,
};

fn read(sheet: Stylesheet) -> Vec<ReadRule> {
    let rules = sheet.compile(&SymbolTable::default()).unwrap();
    StyleReader::new(render(&rules)).selectors().unwrap()
}

fn assert_rule(rule: &ReadRule, value: &str, score: &str) {
    assert_eq!(rule.value, value);
    assert_eq!(rule.score.to_string(), score, "score of `{value}`");
}

// ============================================================================
// COMPONENT
// ============================================================================

#[test]
fn test_component_creates_a_class() {
    let selectors = read(
        Stylesheet::new()
            .declare(component(["c1"]).body("top: 0;"))
            .declare(component(["c1", "c2"]).body("top: 0;")),
    );

    assert_rule(&selectors[0], ".c1", "0,0,1,0");
    assert_rule(&selectors[1], ".c1, .c2", "0,0,1,0");
}

// ============================================================================
// OPTION
// ============================================================================

#[test]
fn test_option_appends_to_its_block() {
    let selectors = read(
        Stylesheet::new()
            .declare(component(["c1"]).child(option(["o1"]).body("top: 0;")))
            .declare(component(["c1"]).child(option(["o1", "o2"]).body("top: 0;")))
            .declare(component(["c1", "c2"]).child(option(["o1"]).body("top: 0;")))
            .declare(component(["c1", "c2"]).child(option(["o1", "o2"]).body("top: 0;")))
            .declare(tweak(["t1"]).child(option(["o1"]).body("top: 0;")))
            .declare(location(["l1"]).child(option(["o1"]).body("top: 0;"))),
    );

    assert_rule(&selectors[0], r"html .c1.\--o1", "0,0,2,1");
    assert_rule(&selectors[1], r"html .c1.\--o1, html .c1.\--o2", "0,0,2,1");
    assert_rule(&selectors[2], r"html .c1.\--o1, html .c2.\--o1", "0,0,2,1");
    assert_rule(
        &selectors[3],
        r"html .c1.\--o1, html .c1.\--o2, html .c2.\--o1, html .c2.\--o2",
        "0,0,2,1",
    );
    assert_rule(&selectors[4], r"html#app .\+t1.\--o1", "0,1,2,1");
    assert_rule(&selectors[5], r"html .\@l1.\--o1", "0,0,2,1");
}

// ============================================================================
// PART
// ============================================================================

#[test]
fn test_part_replaces_its_block_class() {
    let selectors = read(
        Stylesheet::new()
            .declare(component(["c1"]).child(part(["p1"]).body("top: 0;")))
            .declare(component(["c1"]).child(part(["p1", "p2"]).body("top: 0;")))
            .declare(component(["c1", "c2"]).child(part(["p1"]).body("top: 0;")))
            .declare(component(["c1", "c2"]).child(part(["p1", "p2"]).body("top: 0;")))
            .declare(tweak(["t1"]).child(part(["p1"]).body("top: 0;"))),
    );

    assert_rule(&selectors[0], r".c1\.p1", "0,0,1,0");
    assert_rule(&selectors[1], r".c1\.p1, .c1\.p2", "0,0,1,0");
    assert_rule(&selectors[2], r".c1\.p1, .c2\.p1", "0,0,1,0");
    assert_rule(
        &selectors[3],
        r".c1\.p1, .c1\.p2, .c2\.p1, .c2\.p2",
        "0,0,1,0",
    );
    assert_rule(&selectors[4], r"#app .\+t1\.p1", "0,1,1,0");
}

// ============================================================================
// TWEAK AND LOCATION
// ============================================================================

fn complex_component() -> Declaration {
    component(["c1", "c2"]).child(part(["p1"]).child(option(["o1"]).body("top: 0;")))
}

#[test]
fn test_tweak_scopes_under_root_id() {
    let selectors = read(
        Stylesheet::new()
            .declare(tweak(["t1"]).body("top: 0;"))
            .declare(tweak(["t1", "t2"]).body("top: 0;"))
            .declare(tweak(["t1"]).child(complex_component())),
    );

    assert_rule(&selectors[0], r"#app .\+t1", "0,1,1,0");
    assert_rule(&selectors[1], r"#app .\+t1, #app .\+t2", "0,1,1,0");
    assert_rule(
        &selectors[2],
        r"html#app .\+t1 .c1\.p1.\--o1, html#app .\+t1 .c2\.p1.\--o1",
        "0,1,3,1",
    );
}

#[test]
fn test_location_has_no_root_id() {
    let selectors = read(
        Stylesheet::new()
            .declare(location(["l1"]).body("top: 0;"))
            .declare(location(["l1", "l2"]).body("top: 0;"))
            .declare(location(["l1"]).child(complex_component())),
    );

    assert_rule(&selectors[0], r".\@l1", "0,0,1,0");
    assert_rule(&selectors[1], r".\@l1, .\@l2", "0,0,1,0");
    assert_rule(
        &selectors[2],
        r"html .\@l1 .c1\.p1.\--o1, html .\@l1 .c2\.p1.\--o1",
        "0,0,3,1",
    );
}

// ============================================================================
// NESTING
// ============================================================================

#[test]
fn test_nesting() {
    let selectors = read(
        Stylesheet::new()
            .declare(component(["c1"]).child(part(["p1"]).child(part(["ps1"]).body("top: 0;"))))
            .declare(component(["c1"]).child(
                part(["p1"]).child(part(["ps1"]).child(option(["o1"]).body("top: 0;"))),
            ))
            .declare(component(["c1"]).child(option(["o1"]).child(part(["p1"]).body("top: 0;"))))
            .declare(component(["c1"]).child(
                part(["p1"]).child(option(["o1"]).child(part(["ps1"]).body("top: 0;"))),
            ))
            .declare(component(["c1"]).child(component(["c2", "c3"]).body("top: 0;")))
            .declare(component(["c1"]).child(part(["p1"]).child(component(["c2"]).body("top: 0;"))))
            .declare(component(["c1"]).child(tweak(["t1"]).body("top: 0;")))
            .declare(location(["l1"]).child(component(["c1"]).body("top: 0;")))
            .declare(component(["c1"]).child(option(["o1"]).child(sibling().body("top: 0;")))),
    );

    assert_rule(&selectors[0], r".c1\.p1\.ps1", "0,0,1,0");
    assert_rule(&selectors[1], r"html .c1\.p1\.ps1.\--o1", "0,0,2,1");
    assert_rule(&selectors[2], r"html .c1.\--o1 .c1\.p1", "0,0,3,1");
    assert_rule(&selectors[3], r"html .c1\.p1.\--o1 .c1\.p1\.ps1", "0,0,3,1");
    assert_rule(&selectors[4], ".c1 .c2, .c1 .c3", "0,0,2,0");
    assert_rule(&selectors[5], r".c1\.p1 .c2", "0,0,2,0");
    assert_rule(&selectors[6], r"#app .c1 .\+t1", "0,1,2,0");
    assert_rule(&selectors[7], r".\@l1 .c1", "0,0,2,0");
    assert_rule(&selectors[8], r"html .c1.\--o1 + .c1.\--o1", "0,0,4,1");
}

#[test]
fn test_nesting_raw_selectors() {
    let selectors = read(
        Stylesheet::new()
            .declare(component(["c1"]).child(raw("&:hover").body("top: 0;")))
            .declare(component(["c1"]).child(option(["o1"]).child(raw("&.class").body("top: 0;"))))
            .declare(component(["c1"]).child(option(["o1"]).child(raw(".class").body("top: 0;"))))
            .declare(component(["c1"]).child(
                part(["p1"]).child(option(["o1"]).child(raw("&.class").body("top: 0;"))),
            )),
    );

    assert_rule(&selectors[0], ".c1:hover", "0,0,2,0");
    assert_rule(&selectors[1], r".c1.\--o1.class", "0,0,3,0");
    assert_rule(&selectors[2], r".c1.\--o1 .class", "0,0,3,0");
    assert_rule(&selectors[3], r".c1\.p1.\--o1.class", "0,0,3,0");
}

#[test]
fn test_nesting_raw_suffixes_and_functions() {
    let selectors = read(
        Stylesheet::new()
            .declare(component(["c1"]).child(raw("&-x").body("top: 0;")))
            .declare(component(["c1"]).child(raw("&:nth-child(2)").body("top: 0;")))
            .declare(component(["c1"]).child(raw("&:not(.x)").body("top: 0;"))),
    );

    assert_rule(&selectors[0], ".c1-x", "0,0,1,0");
    assert_rule(&selectors[1], ".c1:nth-child(2)", "0,0,2,0");
    assert_rule(&selectors[2], ".c1:not(.x)", "0,0,2,0");
}

// ============================================================================
// SCORING
// ============================================================================

#[test]
fn test_structural_scores_match_parsed_scores() {
    let trees = [
        tweak(["t1"]).child(complex_component()),
        location(["l1"]).child(complex_component()),
        component(["c1"]).child(option(["o1"]).child(sibling().body("top: 0;"))),
        component(["c1"]).child(raw("& > .x:hover::before").body("top: 0;")),
        component(["c1"]).child(tweak(["t1"]).child(raw("&[data-x=y]").body("top: 0;"))),
        component(["c1"]).child(raw("&-x").body("top: 0;")),
        component(["c1"]).child(option(["o1"]).child(raw("&__label.y").body("top: 0;"))),
        component(["c1"]).child(raw("&:nth-child(2n + 1)").body("top: 0;")),
        component(["c1"]).child(raw("&:not(.x, #y) > li").body("top: 0;")),
        component(["c1"]).child(raw("&:is(.a .b, div):where(#z)").body("top: 0;")),
        component(["c1"]).child(raw("&:has(span)::after").body("top: 0;")),
    ];

    let synthesizer = Synthesizer::default();
    for tree in &trees {
        for rule in synthesizer.synthesize(tree).unwrap() {
            for result in rule.selectors() {
                let parsed = cssel::calculate(result.text()).unwrap();
                assert_eq!(parsed, vec![result.specificity()], "`{}`", result.text());
            }
        }
    }
}

#[test]
fn test_every_selector_in_a_group_shares_one_score() {
    let rules = Synthesizer::default()
        .synthesize(&tweak(["t1", "t2"]).child(complex_component()))
        .unwrap();
    let scores = rules[0].specificities();
    assert_eq!(scores.len(), 4);
    assert!(scores.iter().all(|s| *s == scores[0]));
}

#[test]
fn test_concurrent_passes_are_independent() {
    let sheet = Stylesheet::new()
        .declare(tweak(["t1"]).child(complex_component()))
        .declare(component(["c1"]).child(raw("&:hover").body("top: 0;")));
    let expected = render(&sheet.compile(&SymbolTable::default()).unwrap());

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| render(&sheet.compile(&SymbolTable::default()).unwrap())))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
