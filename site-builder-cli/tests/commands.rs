//! Integration tests for the CLI commands

use site_builder_cli::{CategoriesCommand, SelectCommand, ServeCommand, TemplatesCommand};

fn categories(website_type: &str, query: &str, json: bool) -> CategoriesCommand {
    CategoriesCommand {
        website_type: website_type.to_string(),
        query: query.to_string(),
        json,
    }
}

fn templates(website_type: &str, category: Option<&str>, query: &str) -> TemplatesCommand {
    TemplatesCommand {
        website_type: website_type.to_string(),
        category: category.map(str::to_string),
        query: query.to_string(),
        json: false,
    }
}

#[test]
fn test_categories_table() {
    let out = categories("service", "", false).render().unwrap();
    assert!(out.contains("navbar-sections"));
    assert!(out.contains("services-sections"));
    assert!(!out.contains("products-sections"));
}

#[test]
fn test_categories_json_search() {
    let out = categories("ecommerce", "video", true).render().unwrap();
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    let ids: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|category| category["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["youtube-sections"]);
    assert_eq!(json[0]["type"], "section");
}

#[test]
fn test_templates_featured() {
    let out = templates("ecommerce", None, "hero").render().unwrap();
    assert!(out.contains("Featured templates"));
    assert!(out.contains("hero-1"));
    assert!(!out.contains("hero-2 "));
}

#[test]
fn test_templates_category() {
    let out = templates("service", Some("navbar-sections"), "ignored").render().unwrap();
    assert!(out.contains("navbar-8"));
    assert!(out.contains("navbar-9"));
    assert!(!out.contains("navbar-1 "));
}

#[test]
fn test_templates_rejects_hidden_category() {
    let err = templates("service", Some("categories-sections"), "")
        .render()
        .unwrap_err();
    assert!(err.to_string().contains("not available"));
    assert!(templates("ecommerce", Some("nope"), "").render().is_err());
}

#[test]
fn test_select_footer() {
    let cmd = SelectCommand {
        component_id: "footer-sections".to_string(),
        template_id: "footer-3".to_string(),
        website_type: "ecommerce".to_string(),
    };
    let json: serde_json::Value = serde_json::from_str(&cmd.render().unwrap()).unwrap();
    assert_eq!(json["kind"], "footer");
    assert_eq!(json["footerData"]["style"], "style-3");
}

#[test]
fn test_select_rejects_mismatch() {
    let cmd = SelectCommand {
        component_id: "hero-sections".to_string(),
        template_id: "about-1".to_string(),
        website_type: "ecommerce".to_string(),
    };
    let err = cmd.render().unwrap_err();
    assert!(format!("{err:#}").contains("does not belong"));
}

#[test]
fn test_serve_port_override() {
    let cmd = ServeCommand {
        config: Some("/nonexistent/site-builder.toml".into()),
        service: "site-builder-test".to_string(),
        port: Some(4567),
    };
    let config = cmd.load_config().unwrap();
    assert_eq!(config.server.port, 4567);
}
