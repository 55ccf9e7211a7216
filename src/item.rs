pub mod catalog;

use serde::Serialize;
use std::fmt;
use std::fmt::{Display, Formatter};

pub type PublicationId = u64;

/// Item 모듈에서 사용할 에러 열거
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemError {
    /// 필수 데이터가 입력 되지 않음
    RequireArgumentMissing(String),

    /// 대여 가능 부수가 전체 부수보다 큼
    InvalidCopies { total: u32, available: u32 },
}

impl Display for ItemError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ItemError::RequireArgumentMissing(name) => write!(f, "Missing required argument: {}", name),
            ItemError::InvalidCopies { total, available } => {
                write!(f, "Available copies ({}) cannot exceed total copies ({})", available, total)
            }
        }
    }
}

impl std::error::Error for ItemError {}

/// 저자
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize)]
pub struct Author {
    first_name: String,
    last_name: String,
}

impl Author {
    pub fn new(first_name: &str, last_name: &str) -> Self {
        Self {
            first_name: first_name.to_owned(),
            last_name: last_name.to_owned(),
        }
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// 이름과 성을 공백 하나로 이어 붙인 전체 이름을 반환한다.
    ///
    /// # Example
    /// ```
    /// use library_catalog::item::Author;
    ///
    /// let author = Author::new("Rob", "Pike");
    /// assert_eq!(author.full_name(), "Rob Pike");
    /// ```
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl Display for Author {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first_name, self.last_name)
    }
}

/// 간행물의 종류
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize)]
pub enum PublicationType {
    Book,
    Magazine,
}

impl Display for PublicationType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            PublicationType::Book => write!(f, "BOOK"),
            PublicationType::Magazine => write!(f, "MAGAZINE"),
        }
    }
}

/// 간행물의 보유 부수
///
/// 대여 가능 부수는 항상 `0 <= available <= total` 을 만족하며
/// 이 조건을 깨뜨리는 변경은 모두 `false` 를 반환하고 값을 바꾸지 않는다.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
pub struct Copies {
    total: u32,
    available: u32,
}

impl Copies {
    pub fn new(total: u32, available: u32) -> Result<Self, ItemError> {
        if available > total {
            return Err(ItemError::InvalidCopies { total, available });
        }
        Ok(Self { total, available })
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn available(&self) -> u32 {
        self.available
    }

    pub fn is_available(&self) -> bool {
        self.available > 0
    }

    /// 한 부를 대여 처리 한다. 대여 가능한 부수가 없으면 `false`
    pub fn take(&mut self) -> bool {
        if self.available == 0 {
            return false;
        }
        self.available -= 1;
        true
    }

    /// 대여 된 한 부를 반납 처리 한다. 대여 중인 부수가 없으면 `false`
    pub fn restore(&mut self) -> bool {
        if self.available >= self.total {
            return false;
        }
        self.available += 1;
        true
    }

    /// 새 부수를 추가 한다. 전체 부수와 대여 가능 부수가 모두 1 증가 한다.
    pub fn add_exemplar(&mut self) {
        self.total += 1;
        self.available += 1;
    }
}

/// 간행물 종류별 고유 정보
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub enum PublicationKind {
    Book { author: Author, page_count: u32 },
    Magazine { issue_number: u32 },
}

/// 간행물 (도서, 잡지)
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct Publication {
    id: PublicationId,
    title: String,
    year_of_publication: i32,
    copies: Copies,
    kind: PublicationKind,
}

impl Publication {
    pub fn book() -> BookBuilder {
        BookBuilder::new()
    }

    pub fn magazine() -> MagazineBuilder {
        MagazineBuilder::new()
    }

    pub fn id(&self) -> PublicationId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn year_of_publication(&self) -> i32 {
        self.year_of_publication
    }

    pub fn copies(&self) -> &Copies {
        &self.copies
    }

    pub fn copies_mut(&mut self) -> &mut Copies {
        &mut self.copies
    }

    pub fn kind(&self) -> &PublicationKind {
        &self.kind
    }

    pub fn publication_type(&self) -> PublicationType {
        match self.kind {
            PublicationKind::Book { .. } => PublicationType::Book,
            PublicationKind::Magazine { .. } => PublicationType::Magazine,
        }
    }

    /// 도서일 경우 저자를 반환한다.
    pub fn author(&self) -> Option<&Author> {
        match &self.kind {
            PublicationKind::Book { author, .. } => Some(author),
            PublicationKind::Magazine { .. } => None,
        }
    }
}

/// 도서 빌더
///
/// # Example
/// ```
/// use library_catalog::item::{Author, Publication};
///
/// let book = Publication::book()
///     .title("Go")
///     .author(Author::new("Rob", "Pike"))
///     .year(2020)
///     .page_count(300)
///     .copies(2, 2)
///     .build()
///     .unwrap();
///
/// assert_eq!(book.title(), "Go");
/// assert_eq!(book.copies().available(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct BookBuilder {
    id: Option<PublicationId>,
    title: Option<String>,
    author: Option<Author>,
    year: i32,
    page_count: u32,
    total_copies: u32,
    available_copies: u32,
}

impl BookBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: PublicationId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn title(mut self, title: &str) -> Self {
        self.title = Some(title.to_owned());
        self
    }

    pub fn author(mut self, author: Author) -> Self {
        self.author = Some(author);
        self
    }

    pub fn year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    pub fn page_count(mut self, page_count: u32) -> Self {
        self.page_count = page_count;
        self
    }

    pub fn copies(mut self, total: u32, available: u32) -> Self {
        self.total_copies = total;
        self.available_copies = available;
        self
    }

    pub fn build(self) -> Result<Publication, ItemError> {
        let title = self.title.ok_or(ItemError::RequireArgumentMissing("title".to_owned()))?;
        let author = self.author.ok_or(ItemError::RequireArgumentMissing("author".to_owned()))?;
        let copies = Copies::new(self.total_copies, self.available_copies)?;

        Ok(Publication {
            id: self.id.unwrap_or(0),
            title,
            year_of_publication: self.year,
            copies,
            kind: PublicationKind::Book { author, page_count: self.page_count },
        })
    }
}

/// 잡지 빌더
#[derive(Debug, Clone, Default)]
pub struct MagazineBuilder {
    id: Option<PublicationId>,
    title: Option<String>,
    year: i32,
    issue_number: u32,
    total_copies: u32,
    available_copies: u32,
}

impl MagazineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: PublicationId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn title(mut self, title: &str) -> Self {
        self.title = Some(title.to_owned());
        self
    }

    pub fn year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    pub fn issue_number(mut self, issue_number: u32) -> Self {
        self.issue_number = issue_number;
        self
    }

    pub fn copies(mut self, total: u32, available: u32) -> Self {
        self.total_copies = total;
        self.available_copies = available;
        self
    }

    pub fn build(self) -> Result<Publication, ItemError> {
        let title = self.title.ok_or(ItemError::RequireArgumentMissing("title".to_owned()))?;
        let copies = Copies::new(self.total_copies, self.available_copies)?;

        Ok(Publication {
            id: self.id.unwrap_or(0),
            title,
            year_of_publication: self.year,
            copies,
            kind: PublicationKind::Magazine { issue_number: self.issue_number },
        })
    }
}
