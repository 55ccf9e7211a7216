use crate::error::LibraryError;
use crate::item::catalog::Catalog;
use crate::item::{Publication, PublicationKind};
use crate::shelf::{type_mismatch, Placement, Shelf, ShelfIndex, ShelfKind};
use std::cmp::Ordering;

/// 도서 서가
///
/// 도서를 저자의 전체 이름으로 묶고, 같은 저자의 도서는 제목 순으로 정렬해 보관한다.
#[derive(Debug)]
pub struct BookShelf {
    placement: Placement,
    index: ShelfIndex,
}

impl BookShelf {
    pub fn new(placement: Placement) -> Self {
        Self {
            placement,
            index: ShelfIndex::new(),
        }
    }

    /// 저자의 도서를 제목 순으로 반환한다.
    pub fn books_by_author<'c>(&self, catalog: &'c Catalog, author_name: &str) -> Vec<&'c Publication> {
        catalog.resolve(self.index.group(author_name))
    }

    pub fn available_books_by_author<'c>(&self, catalog: &'c Catalog, author_name: &str) -> Vec<&'c Publication> {
        self.books_by_author(catalog, author_name)
            .into_iter()
            .filter(|b| b.copies().is_available())
            .collect()
    }

    pub fn available_books<'c>(&self, catalog: &'c Catalog) -> Vec<&'c Publication> {
        catalog.resolve(self.index.ids())
            .into_iter()
            .filter(|b| b.copies().is_available())
            .collect()
    }
}

impl Shelf for BookShelf {
    fn kind(&self) -> ShelfKind {
        ShelfKind::Book
    }

    fn placement(&self) -> &Placement {
        &self.placement
    }

    fn index(&self) -> &ShelfIndex {
        &self.index
    }

    fn index_mut(&mut self) -> &mut ShelfIndex {
        &mut self.index
    }

    fn group_key(&self, publication: &Publication) -> Result<String, LibraryError> {
        match publication.kind() {
            PublicationKind::Book { author, .. } => Ok(author.full_name()),
            PublicationKind::Magazine { .. } => Err(type_mismatch(self.kind(), publication)),
        }
    }

    fn ordering(&self) -> fn(&Publication, &Publication) -> Ordering {
        |a, b| a.title().cmp(b.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{Author, PublicationId, PublicationType};

    fn catalog() -> Catalog {
        let mut catalog = Catalog::new();
        let books = [
            (1, "Zen", "Rob", "Pike", 1),
            (2, "Alpha", "Rob", "Pike", 0),
            (3, "Middle", "Ken", "Thompson", 2),
        ];
        for (id, title, first, last, available) in books {
            catalog.insert(
                Publication::book()
                    .id(id)
                    .title(title)
                    .author(Author::new(first, last))
                    .copies(2, available)
                    .build()
                    .unwrap(),
            );
        }
        catalog.insert(Publication::magazine().id(10).title("Weekly").copies(1, 1).build().unwrap());
        catalog
    }

    fn shelf_with_books(catalog: &Catalog) -> BookShelf {
        let mut shelf = BookShelf::new(Placement::new(100, 1));
        for id in [1, 2, 3] {
            shelf.add_publication(catalog, id).unwrap();
        }
        shelf
    }

    fn titles(books: Vec<&Publication>) -> Vec<&str> {
        books.into_iter().map(|b| b.title()).collect()
    }

    #[test]
    fn add_groups_by_author_sorted_by_title() {
        let catalog = catalog();
        let shelf = shelf_with_books(&catalog);

        assert_eq!(shelf.index().keys().collect::<Vec<_>>(), vec!["Ken Thompson", "Rob Pike"]);
        assert_eq!(titles(shelf.books_by_author(&catalog, "Rob Pike")), vec!["Alpha", "Zen"]);
        assert_eq!(shelf.len(), 3);
    }

    #[test]
    fn add_rejects_magazine() {
        let catalog = catalog();
        let mut shelf = BookShelf::new(Placement::new(100, 1));

        let result = shelf.add_publication(&catalog, 10);

        assert_eq!(
            result,
            Err(LibraryError::TypeMismatch { expected: PublicationType::Book, found: PublicationType::Magazine })
        );
        assert!(shelf.is_empty());
    }

    #[test]
    fn add_ignores_capacity() {
        let catalog = catalog();
        let mut shelf = BookShelf::new(Placement::new(1, 1));

        shelf.add_publication(&catalog, 1).unwrap();
        shelf.add_publication(&catalog, 2).unwrap();

        assert_eq!(shelf.len(), 2);
    }

    #[test]
    fn borrow_decrements_available() {
        let mut catalog = catalog();
        let shelf = shelf_with_books(&catalog);

        let borrowed = shelf.borrow_publication(&mut catalog, 3).unwrap();
        assert_eq!(borrowed.id(), 3);

        assert_eq!(catalog.get(3).unwrap().copies().available(), 1);
    }

    #[test]
    fn borrow_without_available_copies_fails() {
        let mut catalog = catalog();
        let shelf = shelf_with_books(&catalog);

        assert_eq!(shelf.borrow_publication(&mut catalog, 2).err(), Some(LibraryError::NotFoundOrUnavailable(2)));
        assert_eq!(shelf.borrow_publication(&mut catalog, 99).err(), Some(LibraryError::NotFoundOrUnavailable(99)));
        assert_eq!(catalog.get(2).unwrap().copies().available(), 0);
    }

    #[test]
    fn return_increments_available() {
        let mut catalog = catalog();
        let shelf = shelf_with_books(&catalog);

        shelf.return_publication(&mut catalog, 2).unwrap();

        assert_eq!(catalog.get(2).unwrap().copies().available(), 1);
    }

    #[test]
    fn return_checks_type_then_membership() {
        let mut catalog = catalog();
        let shelf = BookShelf::new(Placement::new(100, 1));

        assert_eq!(
            shelf.return_publication(&mut catalog, 10),
            Err(LibraryError::TypeMismatch { expected: PublicationType::Book, found: PublicationType::Magazine })
        );
        assert_eq!(shelf.return_publication(&mut catalog, 1), Err(LibraryError::PublicationNotFound(1)));
    }

    #[test]
    fn return_never_exceeds_total() {
        let mut catalog = catalog();
        let shelf = shelf_with_books(&catalog);
        shelf.return_publication(&mut catalog, 1).unwrap();

        assert_eq!(shelf.return_publication(&mut catalog, 1), Err(LibraryError::NothingToReturn(1)));
        assert_eq!(catalog.get(1).unwrap().copies().available(), 2);
    }

    #[test]
    fn add_exemplar_only_touches_target() {
        let mut catalog = catalog();
        let shelf = shelf_with_books(&catalog);

        shelf.add_exemplar(&mut catalog, 1).unwrap();

        let copies = catalog.get(1).unwrap().copies();
        assert_eq!((copies.total(), copies.available()), (3, 2));
        let other = catalog.get(2).unwrap().copies();
        assert_eq!((other.total(), other.available()), (2, 0));
        assert_eq!(shelf.add_exemplar(&mut catalog, 99), Err(LibraryError::PublicationNotFound(99)));
    }

    #[test]
    fn remove_drops_book_from_every_group() {
        let catalog = catalog();
        let mut shelf = shelf_with_books(&catalog);

        shelf.remove_publication(2);
        shelf.remove_publication(42);

        assert!(!shelf.contains(2));
        assert_eq!(titles(shelf.books_by_author(&catalog, "Rob Pike")), vec!["Zen"]);
        assert!(catalog.contains(2));
    }

    #[test]
    fn available_queries_skip_borrowed_out_books() {
        let catalog = catalog();
        let shelf = shelf_with_books(&catalog);

        assert_eq!(titles(shelf.available_books_by_author(&catalog, "Rob Pike")), vec!["Zen"]);
        let ids: Vec<PublicationId> = shelf.available_books(&catalog).iter().map(|b| b.id()).collect();
        assert_eq!(ids, vec![3, 1]);
    }
}
