use crate::library::ReturnPolicy;
use crate::shelf::{Placement, ShelfKind};
use serde::Deserialize;

/// 도서관 초기 설정
#[derive(Debug, Default, Deserialize)]
pub struct LibraryConfig {
    /// 반납 시 대여 가능 부수 복구 여부
    /// 설정하지 않을시 기본값은 [`ReturnPolicy::HistoryOnly`]
    #[serde(default)]
    return_policy: ReturnPolicy,

    /// 도서관 생성 시 함께 만들 서가 목록
    #[serde(default)]
    shelves: Vec<ShelfConfig>,
}

impl LibraryConfig {
    pub fn new(return_policy: ReturnPolicy, shelves: Vec<ShelfConfig>) -> Self {
        Self { return_policy, shelves }
    }

    pub fn return_policy(&self) -> ReturnPolicy {
        self.return_policy
    }

    pub fn shelves(&self) -> &[ShelfConfig] {
        &self.shelves
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ShelfConfig {
    kind: ShelfKind,
    capacity: u32,
    floor: i32,
}

impl ShelfConfig {
    pub fn new(kind: ShelfKind, capacity: u32, floor: i32) -> Self {
        Self { kind, capacity, floor }
    }

    pub fn kind(&self) -> ShelfKind {
        self.kind
    }

    pub fn placement(&self) -> Placement {
        Placement::new(self.capacity, self.floor)
    }
}
