use crate::customer::CustomerId;
use crate::error::LibraryError;
use crate::item::PublicationId;
use serde::Serialize;

/// 후입선출 스택
#[derive(Debug, Clone)]
pub struct Stack<T> {
    data: Vec<T>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self { data: Vec::new() }
    }
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, item: T) {
        self.data.push(item);
    }

    pub fn pop(&mut self) -> Result<T, LibraryError> {
        self.data.pop().ok_or(LibraryError::EmptyContainer)
    }

    pub fn top(&self) -> Result<&T, LibraryError> {
        self.data.last().ok_or(LibraryError::EmptyContainer)
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// 가장 최근에 넣은 요소부터 순회한다. 스택은 변경되지 않는다.
    pub fn iter_from_top(&self) -> impl Iterator<Item = &T> {
        self.data.iter().rev()
    }
}

/// 반납 기록
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct ReturnRecord {
    publication_id: PublicationId,
    customer_id: CustomerId,
    returned_at: chrono::NaiveDateTime,
}

impl ReturnRecord {
    pub fn new(publication_id: PublicationId, customer_id: CustomerId) -> Self {
        Self {
            publication_id,
            customer_id,
            returned_at: chrono::Local::now().naive_local(),
        }
    }

    pub fn publication_id(&self) -> PublicationId {
        self.publication_id
    }

    pub fn customer_id(&self) -> CustomerId {
        self.customer_id
    }

    pub fn returned_at(&self) -> chrono::NaiveDateTime {
        self.returned_at
    }
}
