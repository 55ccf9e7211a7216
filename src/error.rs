use crate::customer::CustomerId;
use crate::item::{ItemError, PublicationId, PublicationType};
use std::fmt;
use std::fmt::{Display, Formatter};

/// 도서관 연산 중 발생하는 에러 열거
///
/// 모든 에러는 상태를 변경하기 전에 발생하며 호출자에게 그대로 전달 된다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LibraryError {
    /// 등록되지 않은 고객
    CustomerNotFound(CustomerId),

    /// 등록되지 않은 도서
    BookNotFound(PublicationId),

    /// 등록되지 않은 잡지
    MagazineNotFound(PublicationId),

    /// 서가 혹은 저장소에 없는 간행물
    PublicationNotFound(PublicationId),

    /// 고객이 대여하지 않은 간행물을 반납하려 함
    LoanNotFound { customer_id: CustomerId, publication_id: PublicationId },

    /// 서가에 없거나 대여 가능한 부수가 없음
    NotFoundOrUnavailable(PublicationId),

    /// 서가가 받을 수 없는 종류의 간행물
    TypeMismatch { expected: PublicationType, found: PublicationType },

    /// 고객이 이미 같은 제목의 간행물을 대여 중
    DuplicateTitle(String),

    /// 대여 가능한 부수가 없음
    NoCopiesAvailable(PublicationId),

    /// 모든 부수가 이미 서가에 있어 반납 처리 할 수 없음
    NothingToReturn(PublicationId),

    /// 비어 있는 스택에서 꺼내려 함
    EmptyContainer,

    /// 간행물 생성 실패
    InvalidItem(ItemError),
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::CustomerNotFound(id) => write!(f, "Customer not found: {}", id),
            LibraryError::BookNotFound(id) => write!(f, "Book not found: {}", id),
            LibraryError::MagazineNotFound(id) => write!(f, "Magazine not found: {}", id),
            LibraryError::PublicationNotFound(id) => write!(f, "Publication not found: {}", id),
            LibraryError::LoanNotFound { customer_id, publication_id } => write!(
                f,
                "Publication {} not found in borrowed list of customer {}",
                publication_id, customer_id
            ),
            LibraryError::NotFoundOrUnavailable(id) => write!(f, "Publication {} not found or not available", id),
            LibraryError::TypeMismatch { expected, found } => {
                write!(f, "Shelf accepts {} only, got {}", expected, found)
            }
            LibraryError::DuplicateTitle(title) => {
                write!(f, "Customer already has a publication with this title: {}", title)
            }
            LibraryError::NoCopiesAvailable(id) => write!(f, "No available copies of publication {}", id),
            LibraryError::NothingToReturn(id) => write!(f, "All copies of publication {} are already available", id),
            LibraryError::EmptyContainer => write!(f, "Stack is empty"),
            LibraryError::InvalidItem(e) => write!(f, "Invalid publication, {}", e),
        }
    }
}

impl std::error::Error for LibraryError {}

impl From<ItemError> for LibraryError {
    fn from(e: ItemError) -> Self {
        LibraryError::InvalidItem(e)
    }
}
