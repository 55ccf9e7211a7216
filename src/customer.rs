use crate::error::LibraryError;
use crate::item::{Publication, PublicationId};
use serde::Serialize;

pub type CustomerId = u64;

/// 고객이 대여 중인 간행물
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct Loan {
    publication_id: PublicationId,
    title: String,
    borrowed_at: chrono::NaiveDateTime,
}

impl Loan {
    pub fn publication_id(&self) -> PublicationId {
        self.publication_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn borrowed_at(&self) -> chrono::NaiveDateTime {
        self.borrowed_at
    }
}

/// 고객
///
/// 같은 제목의 간행물은 한 번에 하나만 대여할 수 있다.
#[derive(Debug, Clone, Serialize)]
pub struct Customer {
    id: CustomerId,
    first_name: String,
    last_name: String,
    borrowed: Vec<Loan>,
}

impl Customer {
    pub fn new(id: CustomerId, first_name: &str, last_name: &str) -> Self {
        Self {
            id,
            first_name: first_name.to_owned(),
            last_name: last_name.to_owned(),
            borrowed: Vec::new(),
        }
    }

    pub fn id(&self) -> CustomerId {
        self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn borrowed(&self) -> &[Loan] {
        &self.borrowed
    }

    pub fn holds(&self, publication_id: PublicationId) -> bool {
        self.borrowed.iter().any(|l| l.publication_id == publication_id)
    }

    pub fn holds_title(&self, title: &str) -> bool {
        self.borrowed.iter().any(|l| l.title == title)
    }

    /// 대여 목록에 간행물을 추가한다.
    /// 부수 차감은 하지 않음으로 호출하는 쪽에서 처리해야 한다.
    pub fn borrow_publication(&mut self, publication: &Publication) -> Result<(), LibraryError> {
        if self.holds_title(publication.title()) {
            return Err(LibraryError::DuplicateTitle(publication.title().to_owned()));
        }

        self.borrowed.push(Loan {
            publication_id: publication.id(),
            title: publication.title().to_owned(),
            borrowed_at: chrono::Local::now().naive_local(),
        });
        Ok(())
    }

    /// 대여 목록에서 간행물을 제거하고 제거된 대여 정보를 반환한다.
    pub fn return_publication(&mut self, publication_id: PublicationId) -> Result<Loan, LibraryError> {
        let position = self.borrowed.iter()
            .position(|l| l.publication_id == publication_id)
            .ok_or(LibraryError::LoanNotFound { customer_id: self.id, publication_id })?;

        Ok(self.borrowed.remove(position))
    }
}
