// Host-side tests for the portfolio content model.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod content {
    include!("../src/core/content.rs");
}

use content::*;

#[test]
fn section_ids_round_trip_through_dom_names() {
    for id in SectionId::ALL {
        assert_eq!(id.as_str().parse::<SectionId>(), Ok(id));
        assert_eq!(id.to_string(), id.as_str());
    }
}

#[test]
fn sections_are_in_document_order() {
    let names: Vec<_> = SectionId::ALL.iter().map(|s| s.as_str()).collect();
    assert_eq!(names, ["home", "about", "experience", "projects", "contact"]);
}

#[test]
fn unknown_section_is_rejected() {
    let err = "Projects".parse::<SectionId>().unwrap_err();
    assert_eq!(err, UnknownSection("Projects".to_string()));
    assert_eq!(err.to_string(), "unknown section id: \"Projects\"");
    assert!("".parse::<SectionId>().is_err());
}

#[test]
fn featured_projects_keep_declared_order() {
    let slugs: Vec<_> = featured_projects().map(|p| p.slug).collect();
    assert_eq!(slugs, ["spotify-global-map", "3pointcafe"]);
    assert_eq!(projects().len(), 2);
}

#[test]
fn closed_source_project_has_no_source_link() {
    let cafe = projects().iter().find(|p| p.slug == "3pointcafe").unwrap();
    assert!(cafe.source_url.is_none());
    assert!(cafe.live_url.is_some());
    assert_eq!(cafe.images.len(), 6);

    let map = projects().iter().find(|p| p.slug == "spotify-global-map").unwrap();
    assert!(map.source_url.is_some());
    assert!(map.images.is_empty());
}

#[test]
fn skills_group_by_first_appearance() {
    let groups = skills_by_category();
    let categories: Vec<_> = groups.iter().map(|(c, _)| *c).collect();
    assert_eq!(categories[0], "Backend");
    assert_eq!(categories[1], "Language");

    let total: usize = groups.iter().map(|(_, s)| s.len()).sum();
    assert_eq!(total, skills().len());

    let languages = &groups.iter().find(|(c, _)| *c == "Language").unwrap().1;
    let names: Vec<_> = languages.iter().map(|s| s.name).collect();
    assert_eq!(names, ["TypeScript", "Golang"]);

    // no category listed twice
    for (i, a) in categories.iter().enumerate() {
        assert!(!categories[i + 1..].contains(a));
    }
}

#[test]
fn project_detail_lookup() {
    let detail = project_detail("3pointcafe").unwrap();
    assert_eq!(detail.key_features.len(), 6);
    assert_eq!(detail.tech_stack.len(), 10);
    assert_eq!(detail.images.len(), 9);
    assert!(project_detail("spotify-global-map").is_none());
    assert!(project_detail("").is_none());
}

#[test]
fn every_detail_belongs_to_a_project() {
    let snap = snapshot();
    for d in snap.details {
        assert!(projects().iter().any(|p| p.slug == d.slug), "{}", d.slug);
    }
}

#[test]
fn experience_has_highlights() {
    let exp = &experiences()[0];
    assert_eq!(exp.company, "Telkomsel");
    assert_eq!(exp.highlights.len(), 5);
}

#[test]
fn contact_email_is_a_mailto_link() {
    assert!(social_links().email.starts_with("mailto:"));
    assert!(social_links().github.starts_with("https://"));
}

#[test]
fn snapshot_serializes_for_page_scripts() {
    let json = serde_json::to_value(snapshot()).unwrap();
    assert_eq!(json["sections"][0], "home");
    assert_eq!(json["sections"][4], "contact");
    assert_eq!(json["projects"][1]["source_url"], serde_json::Value::Null);
    assert_eq!(json["projects"][0]["featured"], true);
    assert_eq!(json["social"]["email"], "mailto:rizkyriady16@gmail.com");
    assert_eq!(json["skills"].as_array().unwrap().len(), skills().len());
}
