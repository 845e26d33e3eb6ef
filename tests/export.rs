use cfa_guide::config::SiteConfig;
use cfa_guide::content::CHECKLIST;
use cfa_guide::export::export_site;
use cfa_guide::model::ModelVariant;
use scraper::{Html, Selector};

fn sel(s: &str) -> Selector {
    Selector::parse(s).unwrap()
}

#[test]
fn export_writes_every_file() {
    let dir = tempfile::tempdir().unwrap();
    let report = export_site(dir.path(), &SiteConfig::standard().unwrap()).unwrap();

    assert_eq!(report.files.len(), 5);
    for rel in [
        "index.html",
        "assets/hero.svg",
        "models/correlated.svg",
        "models/bifactor.svg",
        "models/second-order.svg",
    ] {
        let path = dir.path().join(rel);
        assert!(path.is_file(), "{rel} missing");
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
    }
}

#[test]
fn index_honours_base_path_and_lists_six_steps() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = SiteConfig::standard().unwrap().with_base_path("guides/cfa").unwrap();
    export_site(dir.path(), &cfg).unwrap();

    let html = std::fs::read_to_string(dir.path().join("index.html")).unwrap();
    let doc = Html::parse_document(&html);

    let base: Vec<_> = doc.select(&sel("base")).collect();
    assert_eq!(base.len(), 1);
    assert_eq!(base[0].value().attr("href"), Some("/guides/cfa/"));

    let steps: Vec<String> = doc
        .select(&sel("li.cfa-step"))
        .filter_map(|li| li.value().attr("data-step").map(str::to_string))
        .collect();
    assert_eq!(steps, vec!["1", "2", "3", "4", "5", "6"]);

    let titles: Vec<String> = doc
        .select(&sel("li.cfa-step h3"))
        .map(|h| h.text().collect::<String>())
        .collect();
    for (title, step) in titles.iter().zip(CHECKLIST.iter()) {
        assert!(title.contains(step.title), "{title} vs {}", step.title);
    }

    for step in doc.select(&sel("li.cfa-step")) {
        let lists: Vec<_> = step.select(&sel("div.columns > div > ul")).collect();
        assert_eq!(lists.len(), 3);
        assert!(lists.iter().all(|ul| ul.select(&sel("li")).count() > 0));
    }
}

#[test]
fn exactly_one_variant_is_active() {
    let dir = tempfile::tempdir().unwrap();
    export_site(dir.path(), &SiteConfig::standard().unwrap()).unwrap();

    let html = std::fs::read_to_string(dir.path().join("index.html")).unwrap();
    let doc = Html::parse_document(&html);
    let checked: Vec<_> = doc.select(&sel("input[name=cfa-model][checked]")).collect();
    assert_eq!(checked.len(), 1);
    assert_eq!(checked[0].value().attr("value"), Some("correlated"));

    for v in ModelVariant::ALL {
        let svg = std::fs::read_to_string(dir.path().join(format!("models/{}.svg", v.slug()))).unwrap();
        assert_eq!(svg.matches("class=\"cfa-overlay ").count(), 1, "{v}");
        assert!(svg.contains(&format!("cfa-overlay cfa-{}", v.slug())));
    }
}

#[test]
fn export_into_a_file_path_fails_with_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, b"not a directory").unwrap();

    let err = export_site(&blocker, &SiteConfig::standard().unwrap()).unwrap_err();
    assert!(matches!(err, cfa_guide::error::GuideError::Io { .. }), "{err}");
}
