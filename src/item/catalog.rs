use crate::item::{Publication, PublicationId, PublicationType};
use std::collections::BTreeMap;

/// 모든 간행물을 아이디로 보관하는 저장소
///
/// 도서관의 도서 목록과 서가의 분류 색인은 모두 이 저장소의 아이디만을 가지고 있으며
/// 실제 간행물 데이터는 이곳에만 존재한다.
#[derive(Debug, Default)]
pub struct Catalog {
    publications: BTreeMap<PublicationId, Publication>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// 간행물을 저장소에 넣는다. 같은 아이디의 간행물이 있을 경우 기존 간행물을 반환한다.
    pub fn insert(&mut self, publication: Publication) -> Option<Publication> {
        self.publications.insert(publication.id(), publication)
    }

    pub fn get(&self, id: PublicationId) -> Option<&Publication> {
        self.publications.get(&id)
    }

    pub fn get_mut(&mut self, id: PublicationId) -> Option<&mut Publication> {
        self.publications.get_mut(&id)
    }

    pub fn contains(&self, id: PublicationId) -> bool {
        self.publications.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.publications.len()
    }

    pub fn is_empty(&self) -> bool {
        self.publications.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Publication> {
        self.publications.values()
    }

    pub fn of_type(&self, publication_type: PublicationType) -> impl Iterator<Item = &Publication> {
        self.iter().filter(move |p| p.publication_type() == publication_type)
    }

    /// 아이디 목록을 순서대로 간행물로 변환한다. 저장소에 없는 아이디는 건너 뛴다.
    pub fn resolve<'i, I>(&self, ids: I) -> Vec<&Publication>
    where
        I: IntoIterator<Item = &'i PublicationId>,
    {
        ids.into_iter()
            .filter_map(|id| self.publications.get(id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::Author;

    fn book(id: PublicationId, title: &str) -> Publication {
        Publication::book()
            .id(id)
            .title(title)
            .author(Author::new("Author", "One"))
            .copies(1, 1)
            .build()
            .unwrap()
    }

    #[test]
    fn insert_and_get() {
        let mut catalog = Catalog::new();
        assert!(catalog.insert(book(1, "First")).is_none());

        assert_eq!(catalog.get(1).map(|p| p.title()), Some("First"));
        assert!(catalog.get(2).is_none());
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn resolve_keeps_order_and_skips_unknown() {
        let mut catalog = Catalog::new();
        catalog.insert(book(1, "First"));
        catalog.insert(book(2, "Second"));

        let ids = vec![2, 9, 1];
        let titles: Vec<&str> = catalog.resolve(&ids).into_iter().map(|p| p.title()).collect();
        assert_eq!(titles, vec!["Second", "First"]);
    }

    #[test]
    fn of_type_filters_by_kind() {
        let mut catalog = Catalog::new();
        catalog.insert(book(1, "First"));
        catalog.insert(Publication::magazine().id(2).title("Weekly").build().unwrap());

        assert_eq!(catalog.of_type(PublicationType::Book).count(), 1);
        assert_eq!(catalog.of_type(PublicationType::Magazine).count(), 1);
    }
}
