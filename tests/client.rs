// tests/client.rs
use std::cell::RefCell;
use std::fs;
use std::path::PathBuf;

use gh_trending::{ClientOptions, Fetcher, SelectorTable, Since, Trending, TrendingError};
use url::Url;

/// Serves captured pages by path and remembers every requested URL.
struct FixtureFetcher {
    repositories: String,
    developers: String,
    requested: RefCell<Vec<String>>,
}

impl FixtureFetcher {
    fn new(repositories: &str, developers: &str) -> Self {
        Self {
            repositories: fixture(repositories),
            developers: fixture(developers),
            requested: RefCell::new(Vec::new()),
        }
    }

    fn requested(&self) -> Vec<String> {
        self.requested.borrow().clone()
    }
}

impl Fetcher for FixtureFetcher {
    fn fetch(&self, url: &Url) -> gh_trending::Result<String> {
        self.requested.borrow_mut().push(url.as_str().to_string());
        if url.path().ends_with("/developers") {
            Ok(self.developers.clone())
        } else {
            Ok(self.repositories.clone())
        }
    }
}

/// Always fails the way a dead host would.
struct Unreachable;

impl Fetcher for Unreachable {
    fn fetch(&self, url: &Url) -> gh_trending::Result<String> {
        Err(TrendingError::Status { url: url.as_str().to_string(), status: 503 })
    }
}

fn fixture(name: &str) -> String {
    let mut p = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    p.push("tests/fixtures");
    p.push(name);
    fs::read_to_string(&p).unwrap_or_else(|e| panic!("read {}: {e}", p.display()))
}

fn current() -> FixtureFetcher {
    FixtureFetcher::new("github.com_trending.html", "github.com_trending_developers.html")
}

fn legacy() -> FixtureFetcher {
    FixtureFetcher::new("legacy_trending.html", "legacy_trending_developers.html")
}

fn client(fetcher: &FixtureFetcher) -> Trending<&FixtureFetcher> {
    Trending::with_fetcher(ClientOptions::default(), fetcher)
}

#[test]
fn projects_request_and_fields() {
    let f = current();
    let projects = client(&f).projects(Some(Since::Daily), Some("go")).unwrap();
    assert_eq!(f.requested(), vec!["https://github.com/trending?since=daily&l=go"]);

    assert_eq!(projects.len(), 3);
    let p = &projects[0];
    assert_eq!(p.name, "campoy/go-tooling-workshop");
    assert_eq!(p.owner, "campoy");
    assert_eq!(p.repository_name, "go-tooling-workshop");
    assert_eq!(p.language, "Go");
    assert_eq!(p.stars, 1472);
    assert_eq!(p.url.as_ref().map(Url::as_str), Some("https://github.com/campoy/go-tooling-workshop"));
    assert_eq!(
        p.contributor_url.as_ref().map(Url::as_str),
        Some("https://github.com/campoy/go-tooling-workshop/graphs/contributors")
    );
    let logins: Vec<_> = p.contributors.iter().map(|d| d.display_name.as_str()).collect();
    assert_eq!(logins, ["campoy", "francesc"]);
    assert_eq!(p.contributors[0].id, 2237452);
    assert_eq!(p.contributors[0].url.as_ref().map(Url::as_str), Some("https://github.com/campoy"));
}

#[test]
fn project_names_always_split() {
    let f = current();
    for p in client(&f).projects(None, None).unwrap() {
        assert_eq!(p.name, format!("{}/{}", p.owner, p.repository_name));
        assert!(!p.owner.is_empty() && !p.repository_name.is_empty());
    }
}

#[test]
fn missing_project_fields_degrade_to_defaults() {
    let f = current();
    let projects = client(&f).projects(None, None).unwrap();
    assert_eq!(f.requested(), vec!["https://github.com/trending"]);

    let bare = &projects[2];
    assert_eq!(bare.name, "someone/awesome-list");
    assert_eq!(bare.description, "");
    assert_eq!(bare.language, "");
    assert_eq!(bare.stars, 57);
    assert!(bare.contributor_url.is_none());
    assert!(bare.contributors.is_empty());
}

#[test]
fn developers_request_and_fields() {
    let f = current();
    let devs = client(&f).developers(Some(Since::Weekly), Some("go")).unwrap();
    assert_eq!(f.requested(), vec!["https://github.com/trending/developers?since=weekly&l=go"]);

    assert_eq!(devs.len(), 3);
    assert_eq!(devs[0].display_name, "torvalds");
    assert_eq!(devs[0].full_name, "Linus Torvalds");
    assert_eq!(devs[0].id, 1024025);
    assert_eq!(devs[0].url.as_ref().map(Url::as_str), Some("https://github.com/torvalds"));
    assert_eq!(
        devs[0].avatar.as_ref().map(Url::as_str),
        Some("https://avatars.githubusercontent.com/u/1024025?v=4")
    );
    assert_eq!(devs[1].display_name, "dtolnay");

    // No avatar and no display name: the heading anchor is the login
    let ghost = &devs[2];
    assert_eq!(ghost.display_name, "ghost");
    assert_eq!(ghost.full_name, "");
    assert_eq!(ghost.id, 0);
    assert_eq!(ghost.url.as_ref().map(Url::as_str), Some("https://github.com/ghost"));
    assert!(ghost.avatar.is_none());
}

#[test]
fn languages_catalog_and_shortlist() {
    let f = current();
    let trend = client(&f);

    let all = trend.languages().unwrap();
    let names: Vec<_> = all.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(
        names,
        ["All languages", "HTML", "C++", "Go", "Rust", "Web Ontology Language", "Unknown languages"]
    );
    assert_eq!(all[0].url_name, "");
    assert_eq!(all[1].url_name, "html");
    assert_eq!(all[1].url.as_ref().map(Url::as_str), Some("https://github.com/trending/html?since=daily"));
    assert_eq!(all[2].url_name, "c++");
    assert_eq!(all[5].url_name, "web-ontology-language");
    assert_eq!(all[6].url_name, "unknown");

    let short = trend.trending_languages().unwrap();
    let tokens: Vec<_> = short.iter().map(|l| l.url_name.as_str()).collect();
    assert_eq!(tokens, ["rust", "go", "python"]);

    // Both menus come from the unfiltered page
    assert_eq!(f.requested(), vec!["https://github.com/trending", "https://github.com/trending"]);
}

#[test]
fn legacy_layout_pages() {
    let f = legacy();
    let trend = client(&f).selectors(SelectorTable::LEGACY);

    let projects = trend.projects(Some(Since::Daily), Some("go")).unwrap();
    // "broken" has no owner/repo split
    assert_eq!(projects.len(), 3);
    assert_eq!(projects[0].name, "campoy/go-tooling-workshop");
    assert_eq!(projects[0].language, "Go");
    assert_eq!(projects[0].stars, 1472);
    assert_eq!(projects[0].contributors.len(), 2);
    assert_eq!(projects[1].name, "golang/go");
    assert_eq!(projects[1].stars, 2552);
    assert_eq!(projects[1].contributors[0].id, 104030);
    assert_eq!(projects[2].name, "google/deepdream");
    assert_eq!(projects[2].language, "");
    assert_eq!(projects[2].stars, 105);

    let devs = trend.developers(Some(Since::Daily), None).unwrap();
    assert_eq!(devs.len(), 2);
    assert_eq!((devs[0].id, devs[0].display_name.as_str()), (94096, "cloudson"));
    assert_eq!(devs[0].full_name, "Claudson Oliveira");
    assert_eq!(
        devs[0].avatar.as_ref().map(Url::as_str),
        Some("https://avatars0.githubusercontent.com/u/94096?v=3")
    );
    assert_eq!((devs[1].id, devs[1].full_name.as_str()), (14985020, "ZEIT"));
}

#[test]
fn layout_mismatch_is_empty_not_error() {
    let f = legacy();
    let trend = client(&f);
    assert!(trend.projects(None, None).unwrap().is_empty());
    assert!(trend.developers(None, None).unwrap().is_empty());
    assert!(trend.languages().unwrap().is_empty());
}

#[test]
fn repeated_calls_are_identical() {
    let f = current();
    let trend = client(&f);
    let first = trend.projects(Some(Since::Monthly), None).unwrap();
    let second = trend.projects(Some(Since::Monthly), None).unwrap();
    assert_eq!(first, second);
    assert_eq!(f.requested()[0], f.requested()[1]);
}

#[test]
fn custom_origin_flows_into_targets_and_links() {
    let f = current();
    let options = ClientOptions::default().with_base_url("https://ghe.example.com/").unwrap();
    let trend = Trending::with_fetcher(options, &f);

    let projects = trend.projects(None, Some("rust")).unwrap();
    assert_eq!(f.requested(), vec!["https://ghe.example.com/trending?l=rust"]);
    assert_eq!(
        projects[1].url.as_ref().map(Url::as_str),
        Some("https://ghe.example.com/rust-lang/rust")
    );
    // Already absolute on the page: left alone
    assert_eq!(
        projects[1].contributors[0].avatar.as_ref().map(Url::as_str),
        Some("https://avatars.githubusercontent.com/u/5430905?s=40&v=4")
    );
}

#[test]
fn fetch_failure_propagates() {
    let trend = Trending::with_fetcher(ClientOptions::default(), Unreachable);
    match trend.projects(Some(Since::Daily), None) {
        Err(TrendingError::Status { url, status }) => {
            assert_eq!(status, 503);
            assert_eq!(url, "https://github.com/trending?since=daily");
        }
        other => panic!("expected status error, got {other:?}"),
    }
    assert!(trend.developers(None, None).is_err());
    assert!(trend.languages().is_err());
}
