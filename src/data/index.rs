//! Grouped views over the article records.
//!
//! Every index keeps the newest-first order of [`SiteData::articles`]
//! inside each group.

use super::types::{ArticleRef, CategoryData, GroupIndex, WriterData};
use crate::{
    directory::{CategoryTable, WriterDirectory},
    listing::{filter_by_author, filter_by_category, sort_by_date},
    record::DocumentRecord,
};

/// Site-wide article data, built once per export.
#[derive(Debug, Default)]
pub struct SiteData {
    records: Vec<DocumentRecord>,
}

impl SiteData {
    /// Take ownership of `records`, ordering them newest first.
    pub fn new(records: Vec<DocumentRecord>) -> Self {
        Self {
            records: sort_by_date(records),
        }
    }

    /// All records, newest first.
    pub fn articles(&self) -> &[DocumentRecord] {
        &self.records
    }

    /// Build the tags index: tag as written to the articles carrying it.
    pub fn tags_index(&self) -> GroupIndex {
        let mut tags = GroupIndex::new();
        for record in &self.records {
            for tag in &record.tags {
                tags.entry(tag.clone()).or_default().push(record.into());
            }
        }
        tags
    }

    /// Build the teams index, keyed by lowercase team name.
    ///
    /// An article naming the same team twice in different case is listed once.
    pub fn teams_index(&self) -> GroupIndex {
        let mut teams = GroupIndex::new();
        for record in &self.records {
            let mut seen: Vec<String> = Vec::with_capacity(record.teams.len());
            for team in record.teams.iter().map(|t| t.to_lowercase()) {
                if seen.contains(&team) {
                    continue;
                }
                teams.entry(team.clone()).or_default().push(record.into());
                seen.push(team);
            }
        }
        teams
    }

    /// Every configured category with its articles, in table order.
    ///
    /// Categories without articles are kept; records naming an unknown
    /// category are not listed anywhere.
    pub fn categories<'a>(&self, table: CategoryTable<'a>) -> Vec<CategoryData<'a>> {
        table
            .iter()
            .map(|category| CategoryData {
                category,
                articles: filter_by_category(&self.records, &category.slug)
                    .into_iter()
                    .map(ArticleRef::from)
                    .collect(),
            })
            .collect()
    }

    /// Every writer, by name, with the slugs of their articles.
    pub fn writers<'a>(&self, directory: WriterDirectory<'a>) -> Vec<WriterData<'a>> {
        directory
            .sorted()
            .into_iter()
            .map(|writer| WriterData {
                writer,
                articles: filter_by_author(&self.records, &writer.slug)
                    .into_iter()
                    .map(|r| r.slug.clone())
                    .collect(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::{Category, Writer};

    fn rec(slug: &str, date: &str) -> DocumentRecord {
        DocumentRecord {
            slug: slug.into(),
            title: slug.to_uppercase(),
            date: date.into(),
            author: String::new(),
            read_minutes: 0,
            cover_image: None,
            excerpt: None,
            teams: Vec::new(),
            tags: Vec::new(),
            category: None,
            match_id: None,
            view_count: None,
        }
    }

    fn slugs(refs: &[ArticleRef]) -> Vec<&str> {
        refs.iter().map(|r| r.slug.as_str()).collect()
    }

    #[test]
    fn test_articles_newest_first() {
        let data = SiteData::new(vec![rec("old", "2023-01-01"), rec("new", "2024-01-01")]);
        let order: Vec<_> = data.articles().iter().map(|r| r.slug.as_str()).collect();
        assert_eq!(order, ["new", "old"]);
    }

    #[test]
    fn test_tags_index() {
        let mut a = rec("a", "2024-01-10");
        a.tags = vec!["report".into()];
        let mut b = rec("b", "2024-01-20");
        b.tags = vec!["report".into(), "column".into()];

        let tags = SiteData::new(vec![a, b]).tags_index();
        assert_eq!(tags.len(), 2);
        assert_eq!(slugs(&tags["report"]), ["b", "a"]);
        assert_eq!(slugs(&tags["column"]), ["b"]);
    }

    #[test]
    fn test_teams_index_lowercase_keys() {
        let mut a = rec("a", "2024-01-10");
        a.teams = vec!["Teikyo".into(), "teikyo".into(), "Meiji".into()];
        let mut b = rec("b", "2024-01-20");
        b.teams = vec!["TEIKYO".into()];

        let teams = SiteData::new(vec![a, b]).teams_index();
        let keys: Vec<_> = teams.keys().map(String::as_str).collect();
        assert_eq!(keys, ["meiji", "teikyo"]);
        assert_eq!(slugs(&teams["teikyo"]), ["b", "a"]);
    }

    #[test]
    fn test_categories_keep_table_order_and_empty_entries() {
        let table = [
            Category {
                slug: "sevens".into(),
                label: "セブンズ".into(),
            },
            Category {
                slug: "other".into(),
                label: "その他".into(),
            },
        ];
        let mut a = rec("a", "2024-01-01");
        a.category = Some("other".into());
        let mut b = rec("b", "2024-01-01");
        b.category = Some("unknown".into());

        let data = SiteData::new(vec![a, b]);
        let categories = data.categories(CategoryTable::new(&table));
        assert_eq!(categories.len(), 2);
        assert!(categories[0].articles.is_empty());
        assert_eq!(slugs(&categories[1].articles), ["a"]);
    }

    #[test]
    fn test_writers_with_article_slugs() {
        let writers = [
            Writer {
                slug: "yamamoto".into(),
                name: "Yamamoto".into(),
                bio: None,
                avatar: None,
                links: Vec::new(),
            },
            Writer {
                slug: "imamoto".into(),
                name: "Imamoto".into(),
                bio: None,
                avatar: None,
                links: Vec::new(),
            },
        ];
        let mut a = rec("a", "2024-01-01");
        a.author = "IMAMOTO".into();
        let mut b = rec("b", "2024-02-01");
        b.author = "imamoto".into();

        let data = SiteData::new(vec![a, b, rec("c", "")]);
        let entries = data.writers(WriterDirectory::new(&writers));
        assert_eq!(entries[0].writer.slug, "imamoto");
        assert_eq!(entries[0].articles, ["b", "a"]);
        assert!(entries[1].articles.is_empty());

        let json = serde_json::to_value(&entries[0]).unwrap();
        assert_eq!(json["name"], "Imamoto");
        assert_eq!(json["articles"][0], "b");
    }
}
