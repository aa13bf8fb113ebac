//! Dialog flow and filter laws

use proptest::prelude::*;
use site_builder::catalog::{filter_by_query, normalize_query};
use site_builder::prelude::*;

#[derive(Default)]
struct PageBuilder {
    sections: Vec<(String, Option<String>)>,
    navbar: Option<NavbarData>,
    footer: Option<FooterStyle>,
}

impl SelectionHandler for PageBuilder {
    type Error = SiteBuilderError;

    fn on_component_click(
        &mut self,
        component_id: &str,
        template_id: Option<&str>,
    ) -> Result<(), Self::Error> {
        self.sections
            .push((component_id.to_string(), template_id.map(str::to_string)));
        Ok(())
    }

    fn on_navbar_select(&mut self, data: NavbarData) -> Result<(), Self::Error> {
        self.navbar = Some(data);
        Ok(())
    }

    fn on_footer_select(&mut self, style: FooterStyle) -> Result<(), Self::Error> {
        self.footer = Some(style);
        Ok(())
    }
}

fn website_types() -> impl Strategy<Value = WebsiteType> {
    prop_oneof![
        Just(WebsiteType::Ecommerce),
        Just(WebsiteType::Service),
        "[a-z]{1,10}".prop_map(WebsiteType::from),
    ]
}

fn queries() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("  HERO ".to_string()),
        Just("form".to_string()),
        Just("nav".to_string()),
        "[a-zA-Z -]{0,12}",
    ]
}

#[test]
fn test_build_a_page() {
    let catalog = Catalog::builtin();
    let mut dialog = AddSectionDialog::new(catalog, WebsiteType::Ecommerce);
    let mut builder = PageBuilder::default();

    dialog.open_with_category("navbar-sections").unwrap();
    dialog
        .select_template("navbar-sections", "navbar-5", &mut builder)
        .unwrap();

    dialog.open();
    dialog.set_query("hero").unwrap();
    let featured = dialog.templates().unwrap();
    assert_eq!(featured.len(), 1);
    let hero = featured[0];
    dialog
        .select_template(hero.component_id(), hero.template_id(), &mut builder)
        .unwrap();

    dialog.open();
    dialog.select_category("footer-sections").unwrap();
    dialog
        .select_template("footer-sections", "footer-3", &mut builder)
        .unwrap();

    let navbar = builder.navbar.unwrap();
    let buttons: Vec<&str> = navbar.buttons.iter().map(|b| b.text.as_str()).collect();
    assert_eq!(buttons, vec!["Sign in", "Create account"]);
    assert_eq!(
        builder.sections,
        vec![("hero-sections".to_string(), Some("hero-1".to_string()))]
    );
    assert_eq!(builder.footer.map(FooterStyle::as_str), Some("style-3"));
    assert!(!dialog.is_open());
}

#[test]
fn test_every_visible_template_can_be_selected() {
    let catalog = Catalog::builtin();
    for website_type in [WebsiteType::Ecommerce, WebsiteType::Service] {
        let selector = TemplateSelector::new(catalog, &website_type);
        for category in catalog.visible_categories(&website_type) {
            for entry in selector.category(category.id) {
                let selection = resolve_selection(
                    catalog,
                    &website_type,
                    entry.component_id(),
                    entry.template_id(),
                );
                assert!(selection.is_ok(), "{} rejected", entry.template_id());
            }
        }
    }
}

#[test]
fn test_featured_entries_are_visible_and_featured() {
    let catalog = Catalog::builtin();
    for website_type in [
        WebsiteType::Ecommerce,
        WebsiteType::Service,
        WebsiteType::from("portfolio"),
    ] {
        let featured = site_builder::catalog::featured_template_ids(&website_type);
        for entry in TemplateSelector::new(catalog, &website_type).featured("") {
            assert!(featured.contains(&entry.template_id()));
            assert!(site_builder::catalog::is_visible(
                entry.component,
                entry.template,
                &website_type
            ));
        }
    }
}

proptest! {
    #[test]
    fn prop_search_is_idempotent(website_type in website_types(), query in queries()) {
        let visible = Catalog::builtin().visible_categories(&website_type);
        let once = filter_by_query(&visible, &query);
        let twice = filter_by_query(&once, &query);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_search_is_an_ordered_subset(website_type in website_types(), query in queries()) {
        let catalog = Catalog::builtin();
        let visible = catalog.visible_categories(&website_type);
        let found = catalog.search(&website_type, &query);

        let mut remaining = visible.iter();
        for category in &found {
            prop_assert!(remaining.any(|candidate| candidate.id == category.id));
        }
    }

    #[test]
    fn prop_search_returns_exactly_the_matching_categories(
        website_type in website_types(),
        query in queries(),
    ) {
        let needle = query.trim().to_lowercase();
        prop_assume!(!needle.is_empty());

        let catalog = Catalog::builtin();
        let found = catalog.search(&website_type, &query);
        let matches = |category: &ComponentCategory| {
            let mut terms = vec![category.label, category.id];
            terms.extend(category.keywords.iter().copied());
            terms.join(" ").to_lowercase().contains(&needle)
        };

        for category in &found {
            prop_assert!(matches(*category), "{} does not match {:?}", category.id, needle);
        }
        for category in catalog.visible_categories(&website_type) {
            prop_assert_eq!(
                matches(category),
                found.iter().any(|candidate| candidate.id == category.id),
                "{} with {:?}",
                category.id,
                needle
            );
        }
    }

    #[test]
    fn prop_whitespace_query_is_identity(website_type in website_types(), spaces in " {0,5}") {
        let catalog = Catalog::builtin();
        prop_assert_eq!(
            catalog.search(&website_type, &spaces),
            catalog.visible_categories(&website_type)
        );
    }

    #[test]
    fn prop_query_is_case_and_padding_insensitive(query in "[a-z]{1,6}") {
        let catalog = Catalog::builtin();
        let padded = format!("  {}  ", query.to_uppercase());
        prop_assert_eq!(normalize_query(&padded), query.clone());
        prop_assert_eq!(
            catalog.search(&WebsiteType::Ecommerce, &padded),
            catalog.search(&WebsiteType::Ecommerce, &query)
        );
    }

    #[test]
    fn prop_back_restores_browsing_state(
        website_type in website_types(),
        query in queries(),
        index in 0usize..32,
    ) {
        let catalog = Catalog::builtin();
        let visible = catalog.visible_categories(&website_type);
        prop_assume!(!visible.is_empty());
        let category = visible[index % visible.len()];

        let mut dialog = AddSectionDialog::new(catalog, website_type);
        dialog.open();
        dialog.set_query(&query).unwrap();
        let before = dialog.state().clone();
        let grid_before = dialog.templates().unwrap();

        dialog.select_category(category.id).unwrap();
        dialog.back().unwrap();

        prop_assert_eq!(dialog.state(), &before);
        prop_assert_eq!(dialog.templates().unwrap(), grid_before);
    }

    #[test]
    fn prop_category_grid_ignores_query(query in queries(), index in 0usize..32) {
        let catalog = Catalog::builtin();
        let website_type = WebsiteType::Ecommerce;
        let visible = catalog.visible_categories(&website_type);
        let category = visible[index % visible.len()];
        let selector = TemplateSelector::new(catalog, &website_type);

        prop_assert_eq!(
            selector.current(Some(category.id), &query),
            selector.current(Some(category.id), "")
        );
    }
}
