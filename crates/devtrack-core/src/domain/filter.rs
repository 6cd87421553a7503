use super::Post;

/// Category value meaning "no category filter".
const ALL_CATEGORIES: &str = "All";

/// Optional narrowing of a post listing.
#[derive(Debug, Clone, Default)]
pub struct PostFilter {
    /// Exact category match. `All` or blank disables the filter.
    pub category: Option<String>,
    /// Case-insensitive substring of title or content.
    pub search: Option<String>,
}

impl PostFilter {
    pub fn new(category: Option<String>, search: Option<String>) -> Self {
        let category = category
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty() && c != ALL_CATEGORIES);
        let search = search
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty());

        Self { category, search }
    }

    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.search.is_none()
    }

    pub fn matches(&self, post: &Post) -> bool {
        if let Some(category) = &self.category {
            if &post.category != category {
                return false;
            }
        }

        match &self.search {
            Some(term) => {
                post.title.to_lowercase().contains(term)
                    || post.content.to_lowercase().contains(term)
            }
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn post(title: &str, content: &str, category: &str) -> Post {
        Post {
            id: "1".to_string(),
            title: title.to_string(),
            content: content.to_string(),
            image_url: None,
            category: category.to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_all_category_disables_filter() {
        let filter = PostFilter::new(Some("All".to_string()), None);
        assert!(filter.is_empty());
        assert!(filter.matches(&post("a", "b", "DevOps")));
    }

    #[test]
    fn test_category_is_exact() {
        let filter = PostFilter::new(Some("Backend".to_string()), None);
        assert!(filter.matches(&post("a", "b", "Backend")));
        assert!(!filter.matches(&post("a", "b", "backend")));
    }

    #[test]
    fn test_search_checks_title_and_content_case_insensitively() {
        let filter = PostFilter::new(None, Some("Docker".to_string()));
        assert!(filter.matches(&post("Learning docker", "", "DevOps")));
        assert!(filter.matches(&post("Week 3", "Wrote a DOCKERFILE", "DevOps")));
        assert!(!filter.matches(&post("Week 3", "Wrote tests", "DevOps")));
    }
}
