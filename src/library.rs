use crate::config::library::LibraryConfig;
use crate::customer::{Customer, CustomerId};
use crate::error::LibraryError;
use crate::history::{ReturnRecord, Stack};
use crate::item::catalog::Catalog;
use crate::item::{Author, BookBuilder, MagazineBuilder, Publication, PublicationId, PublicationType};
use crate::shelf::{new_shelf, Placement, Shelf, ShelfKind};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// 일괄 생성 시 도서 서가가 없을 경우 새로 만들 서가의 위치
const GENERATED_SHELF_CAPACITY: u32 = 100;
const GENERATED_SHELF_FLOOR: i32 = 1;

/// 일괄 생성 되는 도서의 보유 부수
const GENERATED_COPIES: u32 = 5;

/// 반납 처리 방식
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReturnPolicy {
    /// 반납 기록만 남기고 대여 가능 부수는 복구하지 않는다.
    #[default]
    HistoryOnly,

    /// 반납 기록을 남기고 대여 가능 부수를 1 증가 시킨다.
    RestoreAvailability,
}

/// [`Library::generate`]로 생성된 고객과 도서의 아이디
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Generated {
    pub customers: Vec<CustomerId>,
    pub books: Vec<PublicationId>,
}

/// 도서관
///
/// 고객, 간행물 저장소, 서가, 반납 기록을 모두 소유한다.
/// 도서/잡지 목록과 서가의 색인은 모두 [`Catalog`]에 대한 아이디 목록이다.
#[derive(Debug)]
pub struct Library {
    catalog: Catalog,
    customers: Vec<Customer>,
    books: Vec<PublicationId>,
    magazines: Vec<PublicationId>,
    shelves: Vec<Box<dyn Shelf>>,
    returned: Stack<ReturnRecord>,
    return_policy: ReturnPolicy,

    next_customer_id: CustomerId,
    next_publication_id: PublicationId,
}

impl Default for Library {
    fn default() -> Self {
        Self::new(ReturnPolicy::default())
    }
}

impl Library {
    pub fn new(return_policy: ReturnPolicy) -> Self {
        Self {
            catalog: Catalog::new(),
            customers: Vec::new(),
            books: Vec::new(),
            magazines: Vec::new(),
            shelves: Vec::new(),
            returned: Stack::new(),
            return_policy,
            next_customer_id: 1,
            next_publication_id: 1,
        }
    }

    /// 설정에 등록된 서가들을 가진 도서관을 생성한다.
    pub fn from_config(config: &LibraryConfig) -> Self {
        let mut library = Self::new(config.return_policy());
        for shelf in config.shelves() {
            library.add_shelf(new_shelf(shelf.kind(), shelf.placement()));
        }
        library
    }

    pub fn return_policy(&self) -> ReturnPolicy {
        self.return_policy
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn shelves(&self) -> &[Box<dyn Shelf>] {
        &self.shelves
    }

    pub fn add_shelf(&mut self, shelf: Box<dyn Shelf>) {
        debug!("{} 서가가 {}층에 추가 되었습니다.", shelf.kind(), shelf.placement().floor());
        self.shelves.push(shelf);
    }

    pub fn add_customer(&mut self, first_name: &str, last_name: &str) -> CustomerId {
        let id = self.next_customer_id;
        self.next_customer_id += 1;

        self.customers.push(Customer::new(id, first_name, last_name));
        debug!("고객({})이 등록 되었습니다.", id);
        id
    }

    /// 도서를 등록하고 첫번째 도서 서가에 꽂는다.
    /// 도서 서가가 없을 경우 서가 등록은 건너 뛴다.
    pub fn add_book(&mut self, book: BookBuilder) -> Result<PublicationId, LibraryError> {
        let book = book.id(self.next_publication_id).build()?;
        let id = self.register(book, ShelfKind::Book)?;
        self.books.push(id);
        Ok(id)
    }

    /// 잡지를 등록하고 첫번째 잡지 서가에 꽂는다.
    /// 잡지 서가가 없을 경우 서가 등록은 건너 뛴다.
    pub fn add_magazine(&mut self, magazine: MagazineBuilder) -> Result<PublicationId, LibraryError> {
        let magazine = magazine.id(self.next_publication_id).build()?;
        let id = self.register(magazine, ShelfKind::Magazine)?;
        self.magazines.push(id);
        Ok(id)
    }

    fn register(&mut self, publication: Publication, kind: ShelfKind) -> Result<PublicationId, LibraryError> {
        let id = publication.id();
        self.next_publication_id += 1;
        self.catalog.insert(publication);

        match self.shelves.iter_mut().find(|s| s.kind() == kind) {
            Some(shelf) => shelf.add_publication(&self.catalog, id)?,
            None => warn!("{} 서가가 없어 간행물({})을 서가에 등록하지 않았습니다.", kind, id),
        }
        Ok(id)
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn books(&self) -> Vec<&Publication> {
        self.catalog.resolve(&self.books)
    }

    pub fn magazines(&self) -> Vec<&Publication> {
        self.catalog.resolve(&self.magazines)
    }

    pub fn find_customer(&self, id: CustomerId) -> Option<&Customer> {
        self.customers.iter().find(|c| c.id() == id)
    }

    pub fn find_book(&self, id: PublicationId) -> Option<&Publication> {
        self.find_in(&self.books, id)
    }

    pub fn find_magazine(&self, id: PublicationId) -> Option<&Publication> {
        self.find_in(&self.magazines, id)
    }

    fn find_in(&self, ids: &[PublicationId], id: PublicationId) -> Option<&Publication> {
        ids.iter()
            .find(|i| **i == id)
            .and_then(|i| self.catalog.get(*i))
    }

    pub fn borrow_book(&mut self, customer_id: CustomerId, book_id: PublicationId) -> Result<(), LibraryError> {
        self.lend(customer_id, book_id, PublicationType::Book)
    }

    pub fn borrow_magazine(&mut self, customer_id: CustomerId, magazine_id: PublicationId) -> Result<(), LibraryError> {
        self.lend(customer_id, magazine_id, PublicationType::Magazine)
    }

    pub fn return_book(&mut self, customer_id: CustomerId, book_id: PublicationId) -> Result<(), LibraryError> {
        self.take_back(customer_id, book_id, PublicationType::Book)
    }

    pub fn return_magazine(&mut self, customer_id: CustomerId, magazine_id: PublicationId) -> Result<(), LibraryError> {
        self.take_back(customer_id, magazine_id, PublicationType::Magazine)
    }

    /// 도서관 목록에서 간행물을 찾아 대여 처리 한다. 서가는 거치지 않는다.
    ///
    /// 고객, 간행물, 대여 가능 부수, 중복 제목을 모두 확인한 뒤에만 상태를 변경한다.
    fn lend(
        &mut self,
        customer_id: CustomerId,
        id: PublicationId,
        publication_type: PublicationType,
    ) -> Result<(), LibraryError> {
        let customer_index = self.customer_index(customer_id)?;
        self.check_listed(id, publication_type)?;

        let publication = self.catalog.get_mut(id).ok_or(not_found(id, publication_type))?;
        if !publication.copies().is_available() {
            return Err(LibraryError::NoCopiesAvailable(id));
        }

        self.customers[customer_index].borrow_publication(publication)?;
        let taken = publication.copies_mut().take();
        debug_assert!(taken, "대여 가능 부수 확인 후 차감에 실패 했습니다.");

        debug!(
            "고객({})이 간행물({})을 대여 했습니다. 남은 부수: {}",
            customer_id,
            id,
            publication.copies().available()
        );
        Ok(())
    }

    /// 고객의 대여 목록에서 간행물을 제거하고 반납 기록에 추가한다.
    ///
    /// [`ReturnPolicy::RestoreAvailability`]일 경우
    /// 간행물이 꽂혀있는 서가를 통해 대여 가능 부수도 복구한다.
    fn take_back(
        &mut self,
        customer_id: CustomerId,
        id: PublicationId,
        publication_type: PublicationType,
    ) -> Result<(), LibraryError> {
        let customer_index = self.customer_index(customer_id)?;
        self.check_listed(id, publication_type)?;

        if !self.customers[customer_index].holds(id) {
            return Err(LibraryError::LoanNotFound { customer_id, publication_id: id });
        }

        if self.return_policy == ReturnPolicy::RestoreAvailability {
            self.restore_availability(id)?;
        }

        self.customers[customer_index].return_publication(id)?;
        self.returned.push(ReturnRecord::new(id, customer_id));

        debug!("고객({})이 간행물({})을 반납 했습니다.", customer_id, id);
        Ok(())
    }

    fn restore_availability(&mut self, id: PublicationId) -> Result<(), LibraryError> {
        if let Some(shelf) = self.shelves.iter().find(|s| s.contains(id)) {
            return shelf.return_publication(&mut self.catalog, id);
        }

        let publication = self.catalog.get_mut(id).ok_or(LibraryError::PublicationNotFound(id))?;
        if !publication.copies_mut().restore() {
            return Err(LibraryError::NothingToReturn(id));
        }
        Ok(())
    }

    /// 간행물의 부수를 하나 늘린다.
    /// 간행물이 꽂혀있는 서가가 있다면 해당 서가를 통해 처리한다.
    pub fn add_exemplar(&mut self, id: PublicationId) -> Result<(), LibraryError> {
        if let Some(shelf) = self.shelves.iter().find(|s| s.contains(id)) {
            return shelf.add_exemplar(&mut self.catalog, id);
        }

        let publication = self.catalog.get_mut(id).ok_or(LibraryError::PublicationNotFound(id))?;
        publication.copies_mut().add_exemplar();
        Ok(())
    }

    /// 모든 서가에서 간행물을 뺀다. 도서관 목록에는 그대로 남는다.
    pub fn remove_from_shelves(&mut self, id: PublicationId) {
        for shelf in self.shelves.iter_mut() {
            shelf.remove_publication(id);
        }
    }

    /// 저자의 도서를 첫번째 도서 서가에서 제목 순으로 찾는다.
    pub fn books_by_author(&self, author: &Author) -> Vec<&Publication> {
        self.shelves.iter()
            .find(|s| s.kind() == ShelfKind::Book)
            .map(|s| self.catalog.resolve(s.index().group(&author.full_name())))
            .unwrap_or_default()
    }

    /// 가장 최근에 반납된 간행물부터 반환한다.
    pub fn returned_books(&self) -> Vec<&Publication> {
        self.returned.iter_from_top()
            .filter_map(|r| self.catalog.get(r.publication_id()))
            .collect()
    }

    /// 가장 최근 반납 기록부터 순회한다.
    pub fn return_history(&self) -> impl Iterator<Item = &ReturnRecord> {
        self.returned.iter_from_top()
    }

    /// 고객별로 대여 중인 간행물을 (고객, 간행물) 쌍으로 반환한다.
    pub fn borrowed_books(&self) -> Vec<(&Customer, &Publication)> {
        self.customers.iter()
            .flat_map(|c| {
                c.borrowed().iter()
                    .filter_map(move |l| self.catalog.get(l.publication_id()).map(|p| (c, p)))
            })
            .collect()
    }

    /// 고객과 도서를 `count`개씩 생성한다.
    ///
    /// 도서 서가가 없으면 먼저 하나 만들고, 아이디는 현재 번호부터 이어서 부여한다.
    pub fn generate(&mut self, count: usize) -> Result<Generated, LibraryError> {
        if !self.shelves.iter().any(|s| s.kind() == ShelfKind::Book) {
            self.add_shelf(new_shelf(ShelfKind::Book, Placement::new(GENERATED_SHELF_CAPACITY, GENERATED_SHELF_FLOOR)));
        }

        let mut generated = Generated::default();
        for _ in 0..count {
            let i = self.next_customer_id;
            generated.customers.push(self.add_customer(&format!("Customer{}", i), &format!("LastName{}", i)));
        }

        for _ in 0..count {
            let i = self.next_publication_id;
            let book = Publication::book()
                .title(&format!("Book{}", i))
                .author(Author::new("Author", &i.to_string()))
                .year(2000 + i as i32)
                .page_count(200 + i as u32)
                .copies(GENERATED_COPIES, GENERATED_COPIES);
            generated.books.push(self.add_book(book)?);
        }

        info!("고객 {}명, 도서 {}권이 생성 되었습니다.", generated.customers.len(), generated.books.len());
        Ok(generated)
    }

    fn customer_index(&self, id: CustomerId) -> Result<usize, LibraryError> {
        self.customers.iter()
            .position(|c| c.id() == id)
            .ok_or(LibraryError::CustomerNotFound(id))
    }

    fn check_listed(&self, id: PublicationId, publication_type: PublicationType) -> Result<(), LibraryError> {
        let listed = match publication_type {
            PublicationType::Book => self.find_book(id),
            PublicationType::Magazine => self.find_magazine(id),
        };
        listed.map(|_| ()).ok_or(not_found(id, publication_type))
    }
}

fn not_found(id: PublicationId, publication_type: PublicationType) -> LibraryError {
    match publication_type {
        PublicationType::Book => LibraryError::BookNotFound(id),
        PublicationType::Magazine => LibraryError::MagazineNotFound(id),
    }
}
