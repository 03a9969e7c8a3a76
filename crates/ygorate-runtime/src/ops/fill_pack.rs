use crate::ops::write_pack_file;
use crate::{Error, Result};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use ygorate_client::CardApi;
use ygorate_engine::load_pack_file;
use ygorate_types::{CardRecord, PackFile};

pub struct FillPackOptions {
    /// Pack directory under the data root, e.g. `LegendBEWD`.
    pub folder: String,
    /// Display name; required to initialize a new pack file, otherwise the
    /// stored name is used (and rewritten when an explicit name differs).
    pub pack_name: Option<String>,
    pub default_rating: f32,
    pub default_review_text: String,
    pub dry_run: bool,
}

#[derive(Debug)]
pub struct FillPackReport {
    pub path: PathBuf,
    pub pack: String,
    pub existing: usize,
    pub fetched: usize,
    pub added: usize,
    pub wrote: bool,
}

/// Add every card of the pack's cardset that the local file does not have
/// yet, matched by passcode or case-insensitive name. Additions get the
/// default rating/review text and the card list is kept alphabetical.
pub async fn fill_pack(
    data_root: &Path,
    api: &CardApi,
    options: &FillPackOptions,
) -> Result<FillPackReport> {
    let path = data_root.join(&options.folder).join("cards.json");

    let mut renamed = false;
    let mut file = if path.exists() {
        let mut file = load_pack_file(&path)?;
        if let Some(name) = &options.pack_name {
            // Keep the stored display name in sync with an explicit one.
            if &file.pack != name {
                file.pack = name.clone();
                renamed = true;
            }
        }
        file
    } else {
        let Some(name) = &options.pack_name else {
            return Err(Error::InvalidOperation(format!(
                "{} not found; provide --pack-name to initialize",
                path.display()
            )));
        };
        PackFile {
            pack: name.clone(),
            cards: Vec::new(),
        }
    };

    let existing = file.cards.len();
    let fetched = api.fetch_cardset(&file.pack).await?;

    let known_names: HashSet<String> = file
        .cards
        .iter()
        .map(|c| c.name.to_lowercase())
        .collect();
    let known_ids: HashSet<u64> = file.cards.iter().filter_map(|c| c.id).collect();

    let mut added = 0;
    for card in &fetched {
        if known_ids.contains(&card.id) || known_names.contains(&card.name.to_lowercase()) {
            continue;
        }
        file.cards.push(CardRecord {
            id: Some(card.id),
            name: card.name.clone(),
            rating: options.default_rating,
            review_text: Some(options.default_review_text.clone()),
            review: None,
            review_file: None,
            pack: None,
        });
        added += 1;
    }

    // Keep alphabetical by name for consistency
    file.cards.sort_by_key(|c| c.name.to_lowercase());

    let wrote = !options.dry_run && (added > 0 || renamed || !path.exists());
    if wrote {
        write_pack_file(&path, &file)?;
    }

    Ok(FillPackReport {
        path,
        pack: file.pack,
        existing,
        fetched: fetched.len(),
        added,
        wrote,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path as url_path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn cardset_body() -> serde_json::Value {
        json!({
            "data": [
                { "id": 89631139, "name": "Blue-Eyes White Dragon", "type": "Normal Monster", "race": "Dragon", "desc": "..." },
                { "id": 46986414, "name": "Dark Magician", "type": "Normal Monster", "race": "Spellcaster", "desc": "..." }
            ]
        })
    }

    async fn mock_api(server: &MockServer, pack: &str) -> CardApi {
        Mock::given(method("GET"))
            .and(url_path("/cardinfo.php"))
            .and(query_param("cardset", pack))
            .respond_with(ResponseTemplate::new(200).set_body_json(cardset_body()))
            .mount(server)
            .await;
        CardApi::with_base_url(server.uri()).unwrap()
    }

    #[tokio::test]
    async fn adds_missing_cards_and_sorts_alphabetically() {
        let server = MockServer::start().await;
        let api = mock_api(&server, "Legend of Blue Eyes White Dragon").await;

        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("LegendBEWD");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(
            dir.join("cards.json"),
            r#"{ "pack": "Legend of Blue Eyes White Dragon", "cards": [
                { "id": 46986414, "name": "Dark Magician", "rating": 9 }
            ] }"#,
        )
        .unwrap();

        let report = fill_pack(
            tmp.path(),
            &api,
            &FillPackOptions {
                folder: "LegendBEWD".to_string(),
                pack_name: None,
                default_rating: 0.0,
                default_review_text: "TBD".to_string(),
                dry_run: false,
            },
        )
        .await
        .unwrap();

        assert_eq!(report.added, 1);
        assert!(report.wrote);

        let written = load_pack_file(&report.path).unwrap();
        assert_eq!(written.cards.len(), 2);
        assert_eq!(written.cards[0].name, "Blue-Eyes White Dragon");
        assert_eq!(written.cards[0].rating, 0.0);
        assert_eq!(written.cards[0].review_text.as_deref(), Some("TBD"));
        assert_eq!(written.cards[1].name, "Dark Magician");
    }

    #[tokio::test]
    async fn dry_run_reports_without_writing() {
        let server = MockServer::start().await;
        let api = mock_api(&server, "Legend of Blue Eyes White Dragon").await;

        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("LegendBEWD");
        std::fs::create_dir_all(&dir).unwrap();
        let original = r#"{ "pack": "Legend of Blue Eyes White Dragon", "cards": [] }"#;
        std::fs::write(dir.join("cards.json"), original).unwrap();

        let report = fill_pack(
            tmp.path(),
            &api,
            &FillPackOptions {
                folder: "LegendBEWD".to_string(),
                pack_name: None,
                default_rating: 0.0,
                default_review_text: String::new(),
                dry_run: true,
            },
        )
        .await
        .unwrap();

        assert_eq!(report.added, 2);
        assert!(!report.wrote);
        let on_disk = std::fs::read_to_string(dir.join("cards.json")).unwrap();
        assert_eq!(on_disk, original);
    }

    #[tokio::test]
    async fn initializing_a_new_pack_requires_a_name() {
        let server = MockServer::start().await;
        let api = CardApi::with_base_url(server.uri()).unwrap();
        let tmp = tempfile::tempdir().unwrap();

        let err = fill_pack(
            tmp.path(),
            &api,
            &FillPackOptions {
                folder: "Fresh".to_string(),
                pack_name: None,
                default_rating: 0.0,
                default_review_text: String::new(),
                dry_run: false,
            },
        )
        .await
        .unwrap_err();

        match err {
            Error::InvalidOperation(msg) => assert!(msg.contains("--pack-name")),
            other => panic!("expected InvalidOperation, got {other}"),
        }
    }

    #[tokio::test]
    async fn matches_existing_cards_by_name_case_insensitively() {
        let server = MockServer::start().await;
        let api = mock_api(&server, "Legend of Blue Eyes White Dragon").await;

        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("LegendBEWD");
        std::fs::create_dir_all(&dir).unwrap();
        // No ids locally; names differ only by case.
        std::fs::write(
            dir.join("cards.json"),
            r#"{ "pack": "Legend of Blue Eyes White Dragon", "cards": [
                { "name": "blue-eyes white dragon", "rating": 10 },
                { "name": "DARK MAGICIAN", "rating": 9 }
            ] }"#,
        )
        .unwrap();

        let report = fill_pack(
            tmp.path(),
            &api,
            &FillPackOptions {
                folder: "LegendBEWD".to_string(),
                pack_name: None,
                default_rating: 0.0,
                default_review_text: String::new(),
                dry_run: false,
            },
        )
        .await
        .unwrap();

        assert_eq!(report.added, 0);
        assert!(!report.wrote);
    }
}
