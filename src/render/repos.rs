use crate::types::RepositorySummary;

pub const CARDS_PER_ROW: usize = 2;
pub const DESCRIPTION_WORD_LIMIT: usize = 25;
pub const ELLIPSIS: &str = "...";
pub const NO_DESCRIPTION: &str = "No description available";
pub const MAX_TOPIC_TAGS: usize = 5;
pub const OVERFLOW_TAG: &str = "+";

/// First 25 words of the description followed by an ellipsis.
///
/// The ellipsis is appended even when nothing was cut.
pub fn short_description(description: Option<&str>) -> String {
    match description.map(str::trim).filter(|d| !d.is_empty()) {
        Some(text) => {
            let words: Vec<&str> = text.split_whitespace().take(DESCRIPTION_WORD_LIMIT).collect();
            format!("{}{}", words.join(" "), ELLIPSIS)
        }
        None => NO_DESCRIPTION.to_string(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TopicTag {
    Topic(String),
    /// Stands in for every topic past the fifth.
    Overflow,
}

impl TopicTag {
    pub fn label(&self) -> &str {
        match self {
            TopicTag::Topic(topic) => topic,
            TopicTag::Overflow => OVERFLOW_TAG,
        }
    }
}

pub fn topic_tags(topics: &[String]) -> Vec<TopicTag> {
    let mut tags: Vec<TopicTag> = topics
        .iter()
        .take(MAX_TOPIC_TAGS)
        .map(|t| TopicTag::Topic(t.clone()))
        .collect();
    if topics.len() > MAX_TOPIC_TAGS {
        tags.push(TopicTag::Overflow);
    }
    tags
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoCard {
    pub name: String,
    pub description: String,
    pub tags: Vec<TopicTag>,
    pub created: Option<String>,
}

impl From<&RepositorySummary> for RepoCard {
    fn from(repo: &RepositorySummary) -> Self {
        RepoCard {
            name: repo.name.clone(),
            description: short_description(repo.description.as_deref()),
            tags: topic_tags(&repo.topics),
            created: repo.created_at.map(|at| at.format("%Y-%m-%d").to_string()),
        }
    }
}

/// Cards laid out two per row; the last row holds one card on odd pages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepoGrid {
    pub rows: Vec<Vec<RepoCard>>,
}

impl RepoGrid {
    pub fn build(repos: &[RepositorySummary]) -> Self {
        let rows = repos
            .chunks(CARDS_PER_ROW)
            .map(|row| row.iter().map(RepoCard::from).collect())
            .collect();
        RepoGrid { rows }
    }

    pub fn cards(&self) -> impl Iterator<Item = &RepoCard> {
        self.rows.iter().flatten()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
