use library_catalog::config::library::{LibraryConfig, ShelfConfig};
use library_catalog::item::{Author, BookBuilder, Publication};
use library_catalog::shelf::ShelfKind;
use library_catalog::{Library, LibraryError, ReturnPolicy};

fn go_book() -> BookBuilder {
    Publication::book()
        .title("Go")
        .author(Author::new("Rob", "Pike"))
        .year(2020)
        .page_count(300)
        .copies(2, 2)
}

fn available(library: &Library, id: u64) -> u32 {
    library.find_book(id).unwrap().copies().available()
}

/// 고객 두 명이 "Go"를 한 부씩 빌려 간 상태의 도서관
fn lent_out_library(policy: ReturnPolicy) -> Library {
    let mut library = Library::from_config(&LibraryConfig::new(policy, vec![ShelfConfig::new(ShelfKind::Book, 100, 1)]));
    assert_eq!(library.add_customer("Ann", "Lee"), 1);
    assert_eq!(library.add_book(go_book()).unwrap(), 1);

    library.borrow_book(1, 1).unwrap();
    assert_eq!(available(&library, 1), 1);

    assert_eq!(library.borrow_book(1, 1), Err(LibraryError::DuplicateTitle("Go".to_owned())));
    assert_eq!(available(&library, 1), 1);

    assert_eq!(library.add_customer("Bob", "Kim"), 2);
    library.borrow_book(2, 1).unwrap();
    assert_eq!(available(&library, 1), 0);

    assert_eq!(library.borrow_book(3, 1), Err(LibraryError::CustomerNotFound(3)));
    library
}

#[test]
fn borrow_scenario() {
    let library = lent_out_library(ReturnPolicy::HistoryOnly);

    let borrowed: Vec<(u64, u64)> = library.borrowed_books()
        .into_iter()
        .map(|(c, b)| (c.id(), b.id()))
        .collect();
    assert_eq!(borrowed, vec![(1, 1), (2, 1)]);
}

#[test]
fn borrow_when_no_copies_left_changes_nothing() {
    let mut library = lent_out_library(ReturnPolicy::HistoryOnly);
    library.add_customer("Cid", "Park");

    assert_eq!(library.borrow_book(3, 1), Err(LibraryError::NoCopiesAvailable(1)));
    assert_eq!(available(&library, 1), 0);
    assert!(library.find_customer(3).unwrap().borrowed().is_empty());
}

#[test]
fn return_keeps_availability_by_default() {
    let mut library = lent_out_library(ReturnPolicy::HistoryOnly);

    library.return_book(1, 1).unwrap();

    assert!(library.find_customer(1).unwrap().borrowed().is_empty());
    let returned: Vec<u64> = library.returned_books().iter().map(|b| b.id()).collect();
    assert_eq!(returned, vec![1]);
    assert_eq!(available(&library, 1), 0);
}

#[test]
fn return_restores_availability_when_configured() {
    let mut library = lent_out_library(ReturnPolicy::RestoreAvailability);

    library.return_book(1, 1).unwrap();
    library.return_book(2, 1).unwrap();

    assert_eq!(available(&library, 1), 2);
    let book = library.find_book(1).unwrap();
    assert!(book.copies().available() <= book.copies().total());
}

#[test]
fn returned_books_are_most_recent_first_and_repeatable() {
    let mut library = Library::default();
    let customer = library.add_customer("Ann", "Lee");
    let first = library.add_book(go_book()).unwrap();
    let second = library.add_book(go_book().title("Rust")).unwrap();
    library.borrow_book(customer, first).unwrap();
    library.borrow_book(customer, second).unwrap();

    library.return_book(customer, first).unwrap();
    library.return_book(customer, second).unwrap();

    let ids = |library: &Library| -> Vec<u64> { library.returned_books().iter().map(|b| b.id()).collect() };
    assert_eq!(ids(&library), vec![second, first]);
    assert_eq!(ids(&library), vec![second, first]);

    let customers: Vec<u64> = library.return_history().map(|r| r.customer_id()).collect();
    assert_eq!(customers, vec![customer, customer]);
}

#[test]
fn return_unknown_customer_or_book_fails() {
    let mut library = lent_out_library(ReturnPolicy::HistoryOnly);

    assert_eq!(library.return_book(9, 1), Err(LibraryError::CustomerNotFound(9)));
    assert_eq!(library.return_book(1, 9), Err(LibraryError::BookNotFound(9)));
    assert!(library.returned_books().is_empty());
}

#[test]
fn add_exemplar_touches_only_target() {
    let mut library = lent_out_library(ReturnPolicy::HistoryOnly);
    let other = library.add_book(go_book().title("Rust")).unwrap();

    library.add_exemplar(1).unwrap();

    let book = library.find_book(1).unwrap();
    assert_eq!((book.copies().total(), book.copies().available()), (3, 1));
    let untouched = library.find_book(other).unwrap();
    assert_eq!((untouched.copies().total(), untouched.copies().available()), (2, 2));
}

#[test]
fn generated_books_are_borrowable() {
    let mut library = Library::default();
    let generated = library.generate(3).unwrap();

    for (customer, book) in generated.customers.iter().zip(generated.books.iter()) {
        library.borrow_book(*customer, *book).unwrap();
    }

    assert_eq!(library.borrowed_books().len(), 3);
    assert!(library.books().iter().all(|b| b.copies().available() == 4));
}
