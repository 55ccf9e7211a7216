use crate::error::LibraryError;
use crate::item::catalog::Catalog;
use crate::item::{Publication, PublicationKind};
use crate::shelf::{type_mismatch, Placement, Shelf, ShelfIndex, ShelfKind};
use std::cmp::Ordering;

/// 잡지 서가
///
/// 잡지를 제목으로 묶고, 같은 제목의 잡지는 (발행 연도, 호수) 순으로 정렬해 보관한다.
#[derive(Debug)]
pub struct MagazineShelf {
    placement: Placement,
    index: ShelfIndex,
}

impl MagazineShelf {
    pub fn new(placement: Placement) -> Self {
        Self {
            placement,
            index: ShelfIndex::new(),
        }
    }

    pub fn magazines_with_title<'c>(&self, catalog: &'c Catalog, title: &str) -> Vec<&'c Publication> {
        catalog.resolve(self.index.group(title))
    }

    pub fn available_magazines_with_title_and_year<'c>(
        &self,
        catalog: &'c Catalog,
        title: &str,
        year: i32,
    ) -> Vec<&'c Publication> {
        self.magazines_with_title(catalog, title)
            .into_iter()
            .filter(|m| m.year_of_publication() == year && m.copies().is_available())
            .collect()
    }
}

impl Shelf for MagazineShelf {
    fn kind(&self) -> ShelfKind {
        ShelfKind::Magazine
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
            PublicationKind::Magazine { .. } => Ok(publication.title().to_owned()),
            PublicationKind::Book { .. } => Err(type_mismatch(self.kind(), publication)),
        }
    }

    fn ordering(&self) -> fn(&Publication, &Publication) -> Ordering {
        |a, b| (a.year_of_publication(), issue_number(a)).cmp(&(b.year_of_publication(), issue_number(b)))
    }
}

fn issue_number(publication: &Publication) -> u32 {
    match publication.kind() {
        PublicationKind::Magazine { issue_number } => *issue_number,
        PublicationKind::Book { .. } => 0,
    }
}
