//! Integration tests for the scrape pipeline
//!
//! These tests use wiremock to serve a chart page and its detail pages and
//! drive both the library entry point and the compiled binary end-to-end.

use chart_scraper::config::Config;
use chart_scraper::scrape::scrape_chart;
use chart_scraper::ScrapeError;
use std::time::Duration;
use tokio::process::Command;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TITLES: [&str; 5] = [
    "The Shawshank Redemption",
    "The Godfather",
    "The Dark Knight",
    "12 Angry Men",
    "Schindler's List",
];

/// Builds a chart page linking to `/title/tt{i}/` for each title
fn chart_page(titles: &[&str]) -> String {
    let rows: String = titles
        .iter()
        .enumerate()
        .map(|(i, title)| {
            format!(
                r#"<tr><td class="titleColumn">{}. <a href="/title/tt{}/">{}</a></td></tr>"#,
                i + 1,
                i,
                title
            )
        })
        .collect();

    format!(
        r#"<html><head><title>Top Rated</title></head><body><table><tbody>{}</tbody></table></body></html>"#,
        rows
    )
}

/// Builds a detail page in the classic title layout
fn detail_page(title: &str, year: i64, rating: &str) -> String {
    format!(
        r#"<html><body>
        <div class="title_block">
            <div class="ratingValue"><strong><span>{rating}</span></strong></div>
            <div class="title_wrapper">
                <h1>{title}&nbsp;<span id="titleYear">(<a href="/year/{year}/">{year}</a>)</span></h1>
                <div class="subtext">
                    <time datetime="PT142M">2h 22min</time>
                    <a href="/genre/drama">Drama</a>,
                    <a href="/genre/crime">Crime</a>
                    <a href="/releaseinfo">14 October 1994 (USA)</a>
                </div>
            </div>
        </div>
        <div class="plot_summary"><div class="summary_text">  Summary of {title}.  </div></div>
        </body></html>"#
    )
}

/// Mounts the chart page and every detail page; later titles respond faster
async fn mount_chart(server: &MockServer, titles: &[&str]) {
    mount_chart_with_failures(server, titles, &[]).await;
}

/// Like `mount_chart`, but the detail pages at `failing` answer 500
async fn mount_chart_with_failures(server: &MockServer, titles: &[&str], failing: &[usize]) {
    Mock::given(method("GET"))
        .and(path("/chart/top"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(chart_page(titles))
                .insert_header("content-type", "text/html"),
        )
        .mount(server)
        .await;

    for (i, title) in titles.iter().enumerate() {
        let delay = Duration::from_millis(((titles.len() - i) * 40) as u64);
        let response = if failing.contains(&i) {
            ResponseTemplate::new(500)
        } else {
            ResponseTemplate::new(200)
                .set_body_string(detail_page(title, 1990 + i as i64, &format!("9.{}", i)))
                .insert_header("content-type", "text/html")
        };

        Mock::given(method("GET"))
            .and(path(format!("/title/tt{}/", i)))
            .respond_with(response.set_delay(delay))
            .mount(server)
            .await;
    }
}

fn chart_url(server: &MockServer) -> String {
    format!("{}/chart/top", server.uri())
}

#[tokio::test]
async fn test_scrape_first_three_in_chart_order() {
    let server = MockServer::start().await;
    mount_chart(&server, &TITLES).await;

    let records = scrape_chart(&Config::default(), &chart_url(&server), 3)
        .await
        .expect("Scrape failed");

    let titles: Vec<&str> = records.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, &TITLES[..3]);

    for (i, record) in records.iter().enumerate() {
        assert_eq!(record.release_year, 1990 + i as i64);
        assert_eq!(record.rating, format!("9.{}", i).parse::<f64>().unwrap());
        assert_eq!(record.summary, format!("Summary of {}.", TITLES[i]));
        assert_eq!(record.duration, "2h 22min");
        assert_eq!(record.genre, "Drama, Crime");
    }

    // Only the work set was fetched: the chart page plus three detail pages
    let requests = server.received_requests().await.expect("Recording disabled");
    assert_eq!(requests.len(), 4);
}

#[tokio::test]
async fn test_limit_beyond_chart_processes_everything() {
    let server = MockServer::start().await;
    mount_chart(&server, &TITLES).await;

    let records = scrape_chart(&Config::default(), &chart_url(&server), 50)
        .await
        .expect("Scrape failed");

    assert_eq!(records.len(), TITLES.len());
    assert_eq!(records[4].title, "Schindler's List");
}

#[tokio::test]
async fn test_failed_detail_page_is_omitted() {
    let server = MockServer::start().await;

    mount_chart_with_failures(&server, &TITLES, &[1]).await;

    let records = scrape_chart(&Config::default(), &chart_url(&server), 3)
        .await
        .expect("Scrape failed");

    let titles: Vec<&str> = records.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["The Shawshank Redemption", "The Dark Knight"]);
    assert_eq!(records[1].release_year, 1992);
}

#[tokio::test]
async fn test_timed_out_detail_page_is_omitted() {
    let server = MockServer::start().await;
    let titles = ["Metropolis", "Nosferatu", "Sunrise"];

    Mock::given(method("GET"))
        .and(path("/chart/top"))
        .respond_with(ResponseTemplate::new(200).set_body_string(chart_page(&titles)))
        .mount(&server)
        .await;

    for (i, title) in titles.iter().enumerate() {
        // The middle page answers well after the client gives up
        let delay = if i == 1 {
            Duration::from_secs(3)
        } else {
            Duration::ZERO
        };
        Mock::given(method("GET"))
            .and(path(format!("/title/tt{}/", i)))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(detail_page(title, 1920 + i as i64, "8.1"))
                    .set_delay(delay),
            )
            .mount(&server)
            .await;
    }

    let mut config = Config::default();
    config.fetcher.timeout_secs = 1;
    config.fetcher.connect_timeout_secs = 1;

    let records = scrape_chart(&config, &chart_url(&server), 3)
        .await
        .expect("Scrape failed");

    let names: Vec<&str> = records.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(names, vec!["Metropolis", "Sunrise"]);
    assert_eq!(records[0].release_year, 1920);
    assert_eq!(records[1].release_year, 1922);
}

#[tokio::test]
async fn test_duplicate_titles_survive() {
    let server = MockServer::start().await;
    mount_chart(&server, &["Solaris", "Solaris", "Stalker"]).await;

    let records = scrape_chart(&Config::default(), &chart_url(&server), 3)
        .await
        .expect("Scrape failed");

    assert_eq!(records.len(), 3);
    assert_eq!(records[0].release_year, 1990);
    assert_eq!(records[1].release_year, 1991);
    assert_eq!(records[2].title, "Stalker");
}

#[tokio::test]
async fn test_chart_fetch_failure_is_fatal() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/chart/top"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let result = scrape_chart(&Config::default(), &chart_url(&server), 3).await;
    assert!(matches!(
        result,
        Err(ScrapeError::Status { status: 404, .. })
    ));
}

#[tokio::test]
async fn test_concurrency_cap_keeps_order() {
    let server = MockServer::start().await;
    mount_chart(&server, &TITLES).await;

    let mut config = Config::default();
    config.fetcher.max_concurrent_fetches = 2;

    let records = scrape_chart(&config, &chart_url(&server), 5)
        .await
        .expect("Scrape failed");

    let titles: Vec<&str> = records.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, &TITLES[..]);
}

async fn run_binary(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_chart-scraper"))
        .args(args)
        .output()
        .await
        .expect("Failed to run binary")
}

#[tokio::test]
async fn test_binary_prints_json_line() {
    let server = MockServer::start().await;
    mount_chart(&server, &TITLES).await;

    let url = chart_url(&server);
    let output = run_binary(&[url.as_str(), "2", "-q"]).await;
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 1);

    let parsed: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    let records = parsed.as_array().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["title"], "The Shawshank Redemption");
    assert_eq!(records[0]["movie_release_year"], 1990);
    assert_eq!(records[1]["imdb_rating"], 9.1);
    assert_eq!(records[1]["genre"], "Drama, Crime");
}

#[tokio::test]
async fn test_binary_zero_items_exits_with_failure() {
    let server = MockServer::start().await;
    mount_chart(&server, &TITLES).await;

    let url = chart_url(&server);
    let output = run_binary(&[url.as_str(), "0"]).await;
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}

#[tokio::test]
async fn test_binary_argument_errors_exit_with_failure() {
    assert_eq!(run_binary(&[]).await.status.code(), Some(1));
    assert_eq!(
        run_binary(&["https://example.com/chart"]).await.status.code(),
        Some(1)
    );
    assert_eq!(
        run_binary(&["https://example.com/chart", "-3"]).await.status.code(),
        Some(1)
    );
    assert_eq!(
        run_binary(&["https://example.com/chart", "many"]).await.status.code(),
        Some(1)
    );
}

#[tokio::test]
async fn test_binary_help_exits_cleanly() {
    assert_eq!(run_binary(&["--help"]).await.status.code(), Some(0));
}
