use serde::{Deserialize, Serialize};

use crate::models::TodoItem;
use crate::timeframe::Timeframe;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub href: String,
    pub rel: String,
    pub method: String,
}

impl Link {
    pub fn new(href: impl Into<String>, rel: &str, method: &str) -> Self {
        Self {
            href: href.into(),
            rel: rel.to_string(),
            method: method.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodoItemResponse {
    pub item: TodoItem,
    #[serde(rename = "_links")]
    pub links: Vec<Link>,
}

impl TodoItemResponse {
    pub fn new(item: TodoItem) -> Self {
        let links = item_links(item.id);
        Self { item, links }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodoItemCollectionResponse {
    #[serde(rename = "results")]
    pub items: Vec<TodoItem>,
    #[serde(rename = "_links")]
    pub links: Vec<Link>,
}

impl TodoItemCollectionResponse {
    pub fn new(items: Vec<TodoItem>) -> Self {
        Self {
            items,
            links: collection_links(),
        }
    }
}

pub fn item_links(id: i64) -> Vec<Link> {
    let href = format!("/todos/{id}");
    vec![
        Link::new(href.clone(), "self", "GET"),
        Link::new(href.clone(), "update", "PATCH"),
        Link::new(href, "delete", "DELETE"),
        Link::new(format!("/todos/{id}/complete"), "complete", "POST"),
        // Advertised as PATCH although the route only answers POST.
        Link::new(format!("/todos/{id}/completion"), "set-completion", "PATCH"),
    ]
}

pub fn collection_links() -> Vec<Link> {
    let mut links = vec![Link::new("/todos", "create", "POST")];
    links.extend(
        Timeframe::ALL
            .iter()
            .map(|timeframe| Link::new(format!("/todos/{}", timeframe.alias()), "next", "GET")),
    );
    links
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn item(id: i64) -> TodoItem {
        let now = Utc::now();
        TodoItem {
            id,
            title: "Test Todo".to_string(),
            description: String::new(),
            completion_percentage: 0,
            created_at: now,
            expire_at: now + Duration::days(7),
        }
    }

    #[test]
    fn item_links_are_derived_from_the_id() {
        let response = TodoItemResponse::new(item(42));
        let rendered: Vec<(&str, &str, &str)> = response
            .links
            .iter()
            .map(|l| (l.href.as_str(), l.rel.as_str(), l.method.as_str()))
            .collect();

        assert_eq!(
            rendered,
            vec![
                ("/todos/42", "self", "GET"),
                ("/todos/42", "update", "PATCH"),
                ("/todos/42", "delete", "DELETE"),
                ("/todos/42/complete", "complete", "POST"),
                ("/todos/42/completion", "set-completion", "PATCH"),
            ]
        );
    }

    #[test]
    fn collection_links_are_static() {
        let empty = TodoItemCollectionResponse::new(Vec::new());
        let full = TodoItemCollectionResponse::new(vec![item(1), item(2)]);
        assert_eq!(empty.links, full.links);

        let hrefs: Vec<&str> = empty.links.iter().map(|l| l.href.as_str()).collect();
        assert_eq!(
            hrefs,
            vec!["/todos", "/todos/today", "/todos/tomorrow", "/todos/thisweek"]
        );
        assert_eq!(empty.links[0].rel, "create");
        assert!(empty.links[1..].iter().all(|l| l.rel == "next" && l.method == "GET"));
    }

    #[test]
    fn envelopes_use_wire_names() {
        let json = serde_json::to_value(TodoItemResponse::new(item(7))).unwrap();
        assert_eq!(json["item"]["id"], 7);
        assert_eq!(json["_links"].as_array().unwrap().len(), 5);

        let json = serde_json::to_value(TodoItemCollectionResponse::new(vec![item(7)])).unwrap();
        assert_eq!(json["results"].as_array().unwrap().len(), 1);
        assert_eq!(json["_links"].as_array().unwrap().len(), 4);
    }
}
