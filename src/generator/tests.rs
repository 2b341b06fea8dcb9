use super::*;
use crate::settings::{LandingSettings, SettingsError};

fn enabled(categories: &str, tags: &str) -> LandingSettings {
    LandingSettings::default()
        .with_enabled(true)
        .with_categories(categories)
        .with_tags(tags)
}

fn simple_group() -> StyleGroup {
    StyleGroup::new("landing")
        .rule(StyleRule::new("&").declare("background", "#fff"))
        .rule(StyleRule::new("#topic-title").declare("display", "none"))
}

// ========================================================================
// Binding Generation Tests
// ========================================================================

#[test]
fn test_category_bindings_share_group() {
    let generation = generate(&enabled("news,updates", "")).unwrap();

    let names: Vec<&str> = generation
        .bindings
        .iter()
        .map(|b| b.class_name.as_str())
        .collect();
    assert_eq!(names, vec!["category-news", "category-updates"]);
    assert!(generation.bindings.iter().all(|b| b.group == DEFAULT_GROUP_NAME));
    assert_eq!(generation.count(BindingSource::Category), 2);
    assert_eq!(generation.count(BindingSource::Tag), 0);
}

#[test]
fn test_empty_settings_produce_no_bindings() {
    let generation = generate(&enabled("", "")).unwrap();
    assert!(generation.bindings.is_empty());
    assert!(generation.group.is_some());
}

#[test]
fn test_categories_before_tags() {
    let generation = generate(&enabled("news", "launch|promo")).unwrap();

    let names: Vec<&str> = generation
        .bindings
        .iter()
        .map(|b| b.class_name.as_str())
        .collect();
    assert_eq!(names, vec!["category-news", "tag-launch", "tag-promo"]);
    assert_eq!(generation.bindings[1].source, BindingSource::Tag);
    assert_eq!(generation.bindings[1].token, "launch");
}

#[test]
fn test_duplicate_tokens_yield_duplicate_bindings() {
    let generation = generate(&enabled("news,news", "")).unwrap();
    assert_eq!(generation.bindings.len(), 2);
    assert_eq!(generation.bindings[0], generation.bindings[1]);
}

#[test]
fn test_interior_empty_token_yields_bare_prefix() {
    let generation = generate(&enabled("a,,b", "")).unwrap();
    assert_eq!(generation.bindings[1].class_name, "category-");
}

#[test]
fn test_disabled_does_nothing() {
    let settings = enabled("news,updates", "launch").with_enabled(false);
    let generation = generate(&settings).unwrap();

    assert!(generation.bindings.is_empty());
    assert!(generation.group.is_none());
    assert_eq!(generation.render(RenderMode::Grouped), "");
}

#[test]
fn test_disabled_skips_type_check() {
    let settings = LandingSettings::from_json_str(r#"{ "landing_page_categories": 5 }"#).unwrap();
    assert!(generate(&settings).is_ok());
}

#[test]
fn test_wrong_type_aborts_generation() {
    let settings =
        LandingSettings::from_json_str(r#"{ "landing_page_enabled": true, "landing_page_tags": [] }"#)
            .unwrap();

    let err = generate(&settings).unwrap_err();
    assert!(matches!(err, SettingsError::Tokenize { setting: "landing_page_tags", .. }));
}

#[test]
fn test_generate_bindings_prefixes() {
    let bindings = generate_bindings(BindingSource::Tag, &["faq"], "landing");
    assert_eq!(bindings[0].class_name, "tag-faq");
    assert_eq!(bindings[0].selector(), ".tag-faq");
}

// ========================================================================
// Rule Resolution Tests
// ========================================================================

#[test]
fn test_resolve_self_and_descendant() {
    assert_eq!(StyleRule::new("&").resolve(".a"), vec![".a"]);
    assert_eq!(StyleRule::new("&.b").resolve(".a"), vec![".a.b"]);
    assert_eq!(StyleRule::new(".x").resolve(".a"), vec![".a .x"]);
}

#[test]
fn test_resolve_selector_list() {
    let rule = StyleRule::new(".x, & > .y");
    assert_eq!(rule.resolve(".a"), vec![".a .x", ".a > .y"]);
}

#[test]
fn test_resolve_keeps_commas_inside_pseudo_class() {
    let rule = StyleRule::new(".post:not(.a, .b)");
    assert_eq!(rule.resolve(".category-news"), vec![".category-news .post:not(.a, .b)"]);

    let rule = StyleRule::new(":is(.x, .y) .z, &:hover");
    assert_eq!(
        rule.resolve(".a"),
        vec![".a :is(.x, .y) .z", ".a:hover"]
    );
}

#[test]
fn test_resolve_keeps_commas_inside_attribute_values() {
    let rule = StyleRule::new(r#"[title="a,b"], [data-x='c,d']"#);
    assert_eq!(
        rule.resolve(".category-news"),
        vec![
            r#".category-news [title="a,b"]"#,
            ".category-news [data-x='c,d']",
        ]
    );
}

#[test]
fn test_split_selector_list_escaped_quote() {
    assert_eq!(
        split_selector_list(r#"[title="a\",b"], .c"#),
        vec![r#"[title="a\",b"]"#, " .c"]
    );
}

#[test]
fn test_blank_selector_rule_is_not_counted() {
    let group = StyleGroup::new("g").rule(StyleRule::new("  ").declare("color", "red"));
    assert_eq!(group.rule_count(), 0);

    let bindings = generate_bindings(BindingSource::Category, &["news"], &group.name);
    assert_eq!(render(&bindings, &group, RenderMode::Grouped), "");
}

// ========================================================================
// Rendering Tests
// ========================================================================

#[test]
fn test_render_extend() {
    let group = simple_group();
    let bindings = generate_bindings(BindingSource::Category, &["news", "updates"], &group.name);

    let css = render(&bindings, &group, RenderMode::Extend);
    let expected = "\
%landing {
  background: #fff;
  #topic-title {
    display: none;
  }
}

.category-news {
  @extend %landing;
}

.category-updates {
  @extend %landing;
}
";
    assert_eq!(css, expected);
}

#[test]
fn test_render_grouped() {
    let group = simple_group();
    let bindings = generate_bindings(BindingSource::Category, &["news", "updates"], &group.name);

    let css = render(&bindings, &group, RenderMode::Grouped);
    let expected = "\
.category-news,
.category-updates {
  background: #fff;
}

.category-news #topic-title,
.category-updates #topic-title {
  display: none;
}
";
    assert_eq!(css, expected);
    assert_eq!(css.matches("display: none").count(), 1);
}

#[test]
fn test_render_inline_duplicates_rules() {
    let group = simple_group();
    let bindings = generate_bindings(BindingSource::Tag, &["a", "b", "c"], &group.name);

    let css = render(&bindings, &group, RenderMode::Inline);
    assert_eq!(css.matches("display: none").count(), 3);
    assert!(css.contains(".tag-b #topic-title {\n  display: none;\n}\n"));
}

#[test]
fn test_render_no_bindings_is_empty() {
    for mode in [RenderMode::Extend, RenderMode::Grouped, RenderMode::Inline] {
        assert_eq!(render(&[], &simple_group(), mode), "");
    }
}

#[test]
fn test_render_escapes_class_names() {
    let group = simple_group();
    let bindings = generate_bindings(BindingSource::Category, &["v1.2", " spaced"], &group.name);

    let css = render(&bindings, &group, RenderMode::Grouped);
    assert!(css.contains(".category-v1\\.2,\n.category-\\ spaced {"));
}

#[test]
fn test_render_modes_agree_on_selector_lists() {
    let group = StyleGroup::new("g")
        .rule(StyleRule::new(".post:not(.a, .b)").declare("display", "none"));
    let bindings = generate_bindings(BindingSource::Category, &["news", "updates"], &group.name);

    let grouped = render(&bindings, &group, RenderMode::Grouped);
    assert_eq!(
        grouped,
        ".category-news .post:not(.a, .b),\n.category-updates .post:not(.a, .b) {\n  display: none;\n}\n"
    );

    let inline = render(&bindings, &group, RenderMode::Inline);
    assert!(inline.contains(".category-updates .post:not(.a, .b) {\n"));

    let scss = render(&bindings, &group, RenderMode::Extend);
    assert!(scss.contains("  .post:not(.a, .b) {\n"));
}

#[test]
fn test_render_skips_rules_without_declarations() {
    let group = simple_group().rule(StyleRule::new(".empty"));
    let bindings = generate_bindings(BindingSource::Category, &["news"], &group.name);

    for mode in [RenderMode::Extend, RenderMode::Grouped, RenderMode::Inline] {
        assert!(!render(&bindings, &group, mode).contains(".empty"));
    }
}

#[test]
fn test_default_group_renders() {
    let generation = generate(&enabled("news", "")).unwrap();
    let scss = generation.render(RenderMode::Extend);

    assert!(scss.starts_with("%landing-page {"));
    assert!(scss.contains(".category-news {\n  @extend %landing-page;\n}"));
}

#[test]
fn test_render_mode_parsing() {
    assert_eq!("extend".parse::<RenderMode>(), Ok(RenderMode::Extend));
    assert_eq!("SCSS".parse::<RenderMode>(), Ok(RenderMode::Extend));
    assert_eq!("grouped".parse::<RenderMode>(), Ok(RenderMode::Grouped));
    assert_eq!("inline".parse::<RenderMode>(), Ok(RenderMode::Inline));
    assert!("flat".parse::<RenderMode>().is_err());
    assert_eq!(RenderMode::Grouped.to_string(), "grouped");
}
