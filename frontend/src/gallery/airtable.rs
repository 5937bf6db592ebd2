use std::collections::HashSet;

use gloo_net::http::Request;
use log::{info, warn};
use serde::Deserialize;
use thiserror::Error;

use crate::config::{AirtableConfig, ConfigError};
use crate::gallery::model::{KitchenStyle, Project, Room};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Could not reach the project database: {0}")]
    Network(String),
    #[error("The project database answered with status {0}")]
    Status(u16),
    #[error("Unexpected response from the project database: {0}")]
    Decode(String),
}

#[derive(Deserialize, Debug)]
struct RecordPage {
    #[serde(default)]
    records: Vec<Record>,
    offset: Option<String>,
}

#[derive(Deserialize, Debug)]
struct Record {
    id: String,
    #[serde(default)]
    fields: RecordFields,
}

#[derive(Deserialize, Debug, Default)]
struct RecordFields {
    #[serde(rename = "Title")]
    title: Option<String>,
    #[serde(rename = "Room")]
    room: Option<String>,
    #[serde(rename = "Style")]
    style: Option<String>,
    #[serde(rename = "Cloudinary URL")]
    image_url: Option<String>,
}

impl Record {
    fn into_project(self) -> Option<Project> {
        let RecordFields { title, room, style, image_url } = self.fields;
        let image_url = image_url.filter(|url| !url.trim().is_empty());
        let Some(image_url) = image_url else {
            warn!("Skipping record {} without an image", self.id);
            return None;
        };

        Some(Project::new(
            self.id,
            title.unwrap_or_default(),
            room.as_deref().and_then(Room::parse),
            style.as_deref().and_then(KitchenStyle::parse),
            image_url,
        ))
    }
}

struct Page {
    projects: Vec<Project>,
    offset: Option<String>,
}

fn decode_page(body: &str) -> Result<Page, FetchError> {
    let page: RecordPage =
        serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))?;
    Ok(Page {
        projects: page.records.into_iter().filter_map(Record::into_project).collect(),
        offset: page.offset,
    })
}

/// Appends `page` to `projects`, dropping ids that were already seen.
fn merge_unique(projects: &mut Vec<Project>, seen: &mut HashSet<String>, page: Vec<Project>) {
    for project in page {
        if seen.insert(project.id.clone()) {
            projects.push(project);
        } else {
            warn!("Duplicate record {} ignored", project.id);
        }
    }
}

/// Reads every row of the portfolio table, following Airtable's `offset`
/// cursor until the last page. Rows keep the order Airtable returns them in.
pub async fn fetch_all(config: &AirtableConfig) -> Result<Vec<Project>, FetchError> {
    let mut projects = Vec::new();
    let mut seen = HashSet::new();
    let mut offset: Option<String> = None;

    loop {
        let response = Request::get(&config.records_url(offset.as_deref()))
            .header("Authorization", &format!("Bearer {}", config.api_key))
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(FetchError::Status(response.status()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        let page = decode_page(&body)?;
        merge_unique(&mut projects, &mut seen, page.projects);

        match page.offset {
            Some(next) => offset = Some(next),
            None => break,
        }
    }

    info!("Fetched {} projects", projects.len());
    Ok(projects)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"{
        "records": [
            {
                "id": "recKitchen1",
                "createdTime": "2024-11-02T10:00:00.000Z",
                "fields": {
                    "Title": "Marble Island",
                    "Room": "Kitchen",
                    "Style": "Art Deco",
                    "Cloudinary URL": "https://res.cloudinary.com/demo/kitchen1.avif"
                }
            },
            {
                "id": "recLiving1",
                "createdTime": "2024-11-02T10:00:00.000Z",
                "fields": {
                    "Title": "Velvet Lounge",
                    "Room": "Living",
                    "Style": "Modern",
                    "Cloudinary URL": "https://res.cloudinary.com/demo/living1.avif"
                }
            },
            {
                "id": "recNoImage",
                "createdTime": "2024-11-02T10:00:00.000Z",
                "fields": { "Title": "Draft", "Room": "Bath" }
            },
            {
                "id": "recOffice",
                "createdTime": "2024-11-02T10:00:00.000Z",
                "fields": {
                    "Room": "Office",
                    "Cloudinary URL": "https://res.cloudinary.com/demo/office.avif"
                }
            }
        ],
        "offset": "itrNext/recOffice"
    }"#;

    #[test]
    fn decodes_records_and_cursor() {
        let page = decode_page(PAGE).unwrap();
        assert_eq!(page.offset.as_deref(), Some("itrNext/recOffice"));

        let ids: Vec<_> = page.projects.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["recKitchen1", "recLiving1", "recOffice"]);

        let kitchen = &page.projects[0];
        assert_eq!(kitchen.title, "Marble Island");
        assert_eq!(kitchen.room, Some(Room::Kitchen));
        assert_eq!(kitchen.style, Some(KitchenStyle::ArtDeco));
        assert_eq!(kitchen.image_url, "https://res.cloudinary.com/demo/kitchen1.avif");
    }

    #[test]
    fn optional_fields_mean_no_constraint() {
        let page = decode_page(PAGE).unwrap();
        let living = &page.projects[1];
        assert_eq!(living.style, None);

        let office = &page.projects[2];
        assert_eq!(office.room, None);
        assert_eq!(office.title, "");
    }

    #[test]
    fn last_page_has_no_offset() {
        let page = decode_page(r#"{"records": []}"#).unwrap();
        assert!(page.projects.is_empty());
        assert!(page.offset.is_none());
    }

    #[test]
    fn malformed_body_is_a_decode_error() {
        let err = decode_page("<html>rate limited</html>").err().unwrap();
        assert!(matches!(err, FetchError::Decode(_)));
        assert!(err.to_string().starts_with("Unexpected response from the project database"));
    }

    #[test]
    fn duplicate_ids_across_pages_are_dropped() {
        let first = decode_page(PAGE).unwrap().projects;
        let second = decode_page(PAGE).unwrap().projects;
        let mut projects = Vec::new();
        let mut seen = HashSet::new();
        merge_unique(&mut projects, &mut seen, first);
        merge_unique(&mut projects, &mut seen, second);
        assert_eq!(projects.len(), 3);
    }

    #[test]
    fn config_errors_keep_their_message() {
        let err: FetchError = ConfigError::Missing("AIRTABLE_BASE_ID").into();
        assert_eq!(err.to_string(), "AIRTABLE_BASE_ID was not set when the site was built");
    }
}
