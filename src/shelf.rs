pub mod book;
pub mod magazine;

use crate::error::LibraryError;
use crate::item::catalog::Catalog;
use crate::item::{Publication, PublicationId, PublicationType};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use std::fmt::{Display, Formatter};
use tracing::{debug, warn};

/// 서가 종류
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShelfKind {
    Book,
    Magazine,
}

impl ShelfKind {
    /// 서가에 꽂을 수 있는 간행물 종류
    pub fn accepts(&self) -> PublicationType {
        match self {
            ShelfKind::Book => PublicationType::Book,
            ShelfKind::Magazine => PublicationType::Magazine,
        }
    }
}

impl Display for ShelfKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ShelfKind::Book => write!(f, "BOOK_SHELF"),
            ShelfKind::Magazine => write!(f, "MAGAZINE_SHELF"),
        }
    }
}

/// 서가의 위치와 최대 수용량
///
/// 수용량은 참고용 정보로 추가 시 수용량을 넘어서더라도 거부하지 않는다.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    capacity: u32,
    floor: i32,
}

impl Placement {
    pub fn new(capacity: u32, floor: i32) -> Self {
        Self { capacity, floor }
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn floor(&self) -> i32 {
        self.floor
    }
}

/// 그룹 키(저자, 제목 등)별로 간행물 아이디를 정렬된 상태로 보관하는 색인
#[derive(Debug, Clone, Default)]
pub struct ShelfIndex {
    groups: BTreeMap<String, Vec<PublicationId>>,
}

impl ShelfIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// 아이디를 그룹에 추가하고 그룹 전체를 `order` 순으로 다시 정렬한다.
    pub fn insert<F>(&mut self, catalog: &Catalog, key: String, id: PublicationId, order: F)
    where
        F: Fn(&Publication, &Publication) -> Ordering,
    {
        let group = self.groups.entry(key).or_default();
        group.push(id);
        group.sort_by(|a, b| match (catalog.get(*a), catalog.get(*b)) {
            (Some(a), Some(b)) => order(a, b),
            _ => Ordering::Equal,
        });
    }

    /// 모든 그룹에서 아이디를 제거한다. 비게 된 그룹은 삭제된다.
    pub fn remove(&mut self, id: PublicationId) {
        for group in self.groups.values_mut() {
            group.retain(|i| *i != id);
        }
        self.groups.retain(|_, group| !group.is_empty());
    }

    pub fn group(&self, key: &str) -> &[PublicationId] {
        self.groups.get(key).map(|g| g.as_slice()).unwrap_or(&[])
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(|k| k.as_str())
    }

    /// 그룹 키 순서대로 모든 아이디를 순회한다.
    pub fn ids(&self) -> impl Iterator<Item = &PublicationId> {
        self.groups.values().flatten()
    }

    pub fn contains(&self, id: PublicationId) -> bool {
        self.ids().any(|i| *i == id)
    }

    pub fn len(&self) -> usize {
        self.groups.values().map(|g| g.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// 서가 트레이트
///
/// 서가는 간행물 자체를 가지지 않고 [`Catalog`]의 아이디만을 분류해 보관한다.
/// 부수를 변경하는 연산은 모두 전달 받은 [`Catalog`]의 간행물을 직접 수정한다.
pub trait Shelf: fmt::Debug {
    fn kind(&self) -> ShelfKind;

    fn placement(&self) -> &Placement;

    fn index(&self) -> &ShelfIndex;

    fn index_mut(&mut self) -> &mut ShelfIndex;

    /// 간행물이 분류될 그룹 키를 반환한다.
    /// 서가가 받을 수 없는 종류의 간행물일 경우 [`LibraryError::TypeMismatch`]
    fn group_key(&self, publication: &Publication) -> Result<String, LibraryError>;

    /// 그룹 내 정렬 기준
    fn ordering(&self) -> fn(&Publication, &Publication) -> Ordering;

    fn len(&self) -> usize {
        self.index().len()
    }

    fn is_empty(&self) -> bool {
        self.index().is_empty()
    }

    fn contains(&self, id: PublicationId) -> bool {
        self.index().contains(id)
    }

    fn add_publication(&mut self, catalog: &Catalog, id: PublicationId) -> Result<(), LibraryError> {
        let publication = catalog.get(id).ok_or(LibraryError::PublicationNotFound(id))?;
        let key = self.group_key(publication)?;
        let order = self.ordering();

        self.index_mut().insert(catalog, key, id, order);
        debug!("{} 서가에 간행물({})이 추가 되었습니다.", self.kind(), id);

        let capacity = self.placement().capacity() as usize;
        if self.len() > capacity {
            warn!(
                "{} 서가({}층)의 수용량({})을 넘어섰습니다. 현재 {}권",
                self.kind(),
                self.placement().floor(),
                capacity,
                self.len()
            );
        }
        Ok(())
    }

    fn remove_publication(&mut self, id: PublicationId) {
        self.index_mut().remove(id);
    }

    /// 서가에 있는 간행물 중 대여 가능한 부수가 있으면 한 부를 차감하고 해당 간행물을 반환한다.
    fn borrow_publication<'c>(
        &self,
        catalog: &'c mut Catalog,
        id: PublicationId,
    ) -> Result<&'c Publication, LibraryError> {
        if !self.contains(id) {
            return Err(LibraryError::NotFoundOrUnavailable(id));
        }

        let publication = catalog.get_mut(id).ok_or(LibraryError::NotFoundOrUnavailable(id))?;
        if !publication.copies_mut().take() {
            return Err(LibraryError::NotFoundOrUnavailable(id));
        }
        Ok(&*publication)
    }

    fn return_publication(&self, catalog: &mut Catalog, id: PublicationId) -> Result<(), LibraryError> {
        let publication = catalog.get_mut(id).ok_or(LibraryError::PublicationNotFound(id))?;
        // 종류 확인
        self.group_key(publication)?;

        if !self.contains(id) {
            return Err(LibraryError::PublicationNotFound(id));
        }
        if !publication.copies_mut().restore() {
            return Err(LibraryError::NothingToReturn(id));
        }
        Ok(())
    }

    fn add_exemplar(&self, catalog: &mut Catalog, id: PublicationId) -> Result<(), LibraryError> {
        if !self.contains(id) {
            return Err(LibraryError::PublicationNotFound(id));
        }

        let publication = catalog.get_mut(id).ok_or(LibraryError::PublicationNotFound(id))?;
        publication.copies_mut().add_exemplar();
        Ok(())
    }
}

/// 종류에 맞는 빈 서가를 생성한다.
pub fn new_shelf(kind: ShelfKind, placement: Placement) -> Box<dyn Shelf> {
    match kind {
        ShelfKind::Book => Box::new(book::BookShelf::new(placement)),
        ShelfKind::Magazine => Box::new(magazine::MagazineShelf::new(placement)),
    }
}

fn type_mismatch(kind: ShelfKind, publication: &Publication) -> LibraryError {
    LibraryError::TypeMismatch {
        expected: kind.accepts(),
        found: publication.publication_type(),
    }
}
