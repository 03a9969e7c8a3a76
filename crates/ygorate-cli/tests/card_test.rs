mod common;

use common::TestFixture;
use predicates::prelude::*;

// Remote details come from an unroutable endpoint in these tests; the
// command still shows local data and only warns about the fetch.

#[test]
fn card_shows_local_data_and_inline_review() {
    let fixture = TestFixture::new();
    fixture.seed_sample_packs();

    fixture
        .command()
        .args(["card", "40640057"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Kuriboh"))
        .stdout(predicate::str::contains("Metal Raiders"))
        .stdout(predicate::str::contains("Surprisingly useful chump blocker."));
}

#[test]
fn card_reads_the_external_review_file() {
    let fixture = TestFixture::new();
    fixture.seed_sample_packs();

    fixture
        .command()
        .args(["card", "78984772"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Tri-Horned Dragon"))
        .stdout(predicate::str::contains("Big stats, no protection."));
}

#[test]
fn an_unknown_id_redirects_to_the_first_card_of_the_pool() {
    let fixture = TestFixture::new();
    fixture.seed_sample_packs();

    fixture
        .command()
        .args(["card", "999", "--pack", "Metal Raiders"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Summoned Skull"))
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn an_empty_pool_reports_no_cards() {
    let fixture = TestFixture::new();
    fixture.seed_sample_packs();

    fixture
        .command()
        .args(["card", "40640057", "--pack", "Pharaoh's Servant"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No cards in Pharaoh's Servant"));
}

#[test]
fn card_json_reports_the_fetch_error_per_card() {
    let fixture = TestFixture::new();
    fixture.seed_sample_packs();

    let output = fixture
        .command()
        .args(["--format", "json", "card", "40640057"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let out: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(out["card"]["name"], "Kuriboh");
    assert_eq!(out["review"], "Surprisingly useful chump blocker.");
    assert!(out["detail"].is_null());
    assert!(out["error"].is_string());
}
