use library_catalog::customer::Customer;
use library_catalog::item::{Author, Publication};
use library_catalog::Library;
use serde::Serialize;
use std::io;
use std::io::{BufRead, Write};
use std::str::FromStr;
use tracing::debug;

const MENU: &str = "
Library Management System
1. Create a customer
2. Show list of customers
3. Create a book
4. Show list of books
5. Borrow a book
6. Return a book
7. Show returned books
8. Show borrowed books
9. Create objects for Customers and Books automatically
10. Exit
Enter your choice: ";

/// 메뉴에서 한 번에 생성할 수 있는 고객/도서의 최대 개수
const MAX_GENERATE_COUNT: usize = 10_000;

/// 입력을 끝까지 읽었거나 사용자가 종료를 선택함
struct Closed;

/// 텍스트 메뉴
///
/// 각 연산의 에러는 출력 후 다시 메뉴로 돌아가며, 입력이 끝나면(EOF) 종료한다.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn run(&mut self, library: &mut Library) -> io::Result<()> {
        loop {
            write!(self.output, "{}", MENU)?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                return Ok(());
            };
            let result = match line.trim() {
                "1" => self.create_customer(library),
                "2" => self.list_customers(library),
                "3" => self.create_book(library),
                "4" => self.list_books(library),
                "5" => self.borrow_book(library),
                "6" => self.return_book(library),
                "7" => self.list_returned_books(library),
                "8" => self.list_borrowed_books(library),
                "9" => self.generate(library),
                "10" => {
                    writeln!(self.output, "Thank you for using the Library Management System.")?;
                    return Ok(());
                }
                _ => {
                    writeln!(self.output, "Invalid choice. Please try again.")?;
                    Ok(Ok(()))
                }
            };

            match result? {
                Ok(()) => {}
                Err(Closed) => return Ok(()),
            }
        }
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_owned()))
    }

    fn prompt(&mut self, message: &str) -> io::Result<Result<String, Closed>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;
        Ok(self.read_line()?.map(|l| l.trim().to_owned()).ok_or(Closed))
    }

    /// 숫자를 입력 받는다. 숫자가 아니면 다시 묻는다.
    fn prompt_number<T: FromStr>(&mut self, message: &str) -> io::Result<Result<T, Closed>> {
        loop {
            let value = match self.prompt(message)? {
                Ok(value) => value,
                Err(closed) => return Ok(Err(closed)),
            };
            match value.parse::<T>() {
                Ok(number) => return Ok(Ok(number)),
                Err(_) => writeln!(self.output, "Invalid number: {}", value)?,
            }
        }
    }

    fn report<E: std::fmt::Display>(&mut self, result: Result<(), E>, success: &str) -> io::Result<()> {
        match result {
            Ok(()) => writeln!(self.output, "{}", success),
            Err(e) => {
                debug!("{}", e);
                writeln!(self.output, "Error: {}", e)
            }
        }
    }

    fn create_customer(&mut self, library: &mut Library) -> io::Result<Result<(), Closed>> {
        let Ok(first_name) = self.prompt("Enter customer's first name: ")? else { return Ok(Err(Closed)) };
        let Ok(last_name) = self.prompt("Enter customer's last name: ")? else { return Ok(Err(Closed)) };

        library.add_customer(&first_name, &last_name);
        writeln!(self.output, "Customer created successfully.")?;
        Ok(Ok(()))
    }

    fn list_customers(&mut self, library: &Library) -> io::Result<Result<(), Closed>> {
        writeln!(self.output, "List of customers:")?;
        for customer in library.customers() {
            writeln!(self.output, "ID: {}, Name: {}", customer.id(), customer.full_name())?;
        }
        Ok(Ok(()))
    }

    fn create_book(&mut self, library: &mut Library) -> io::Result<Result<(), Closed>> {
        let Ok(title) = self.prompt("Enter book title: ")? else { return Ok(Err(Closed)) };
        let Ok(first_name) = self.prompt("Enter author's first name: ")? else { return Ok(Err(Closed)) };
        let Ok(last_name) = self.prompt("Enter author's last name: ")? else { return Ok(Err(Closed)) };
        let Ok(year) = self.prompt_number::<i32>("Enter publication year: ")? else { return Ok(Err(Closed)) };
        let Ok(pages) = self.prompt_number::<u32>("Enter number of pages: ")? else { return Ok(Err(Closed)) };
        let Ok(total) = self.prompt_number::<u32>("Enter total copies: ")? else { return Ok(Err(Closed)) };
        let Ok(available) = self.prompt_number::<u32>("Enter available copies: ")? else { return Ok(Err(Closed)) };

        let book = Publication::book()
            .title(&title)
            .author(Author::new(&first_name, &last_name))
            .year(year)
            .page_count(pages)
            .copies(total, available);
        let result = library.add_book(book).map(|_| ());
        self.report(result, "Book added successfully.")?;
        Ok(Ok(()))
    }

    fn list_books(&mut self, library: &Library) -> io::Result<Result<(), Closed>> {
        writeln!(self.output, "List of books:")?;
        for book in library.books() {
            let author = book.author().map(|a| a.full_name()).unwrap_or_default();
            writeln!(
                self.output,
                "ID: {}, Title: {}, Author: {}, Available: {}/{}",
                book.id(),
                book.title(),
                author,
                book.copies().available(),
                book.copies().total()
            )?;
        }
        Ok(Ok(()))
    }

    fn borrow_book(&mut self, library: &mut Library) -> io::Result<Result<(), Closed>> {
        let Ok(customer_id) = self.prompt_number::<u64>("Enter customer ID: ")? else { return Ok(Err(Closed)) };
        let Ok(book_id) = self.prompt_number::<u64>("Enter book ID: ")? else { return Ok(Err(Closed)) };

        let result = library.borrow_book(customer_id, book_id);
        self.report(result, "Book borrowed successfully.")?;
        Ok(Ok(()))
    }

    fn return_book(&mut self, library: &mut Library) -> io::Result<Result<(), Closed>> {
        let Ok(customer_id) = self.prompt_number::<u64>("Enter customer ID: ")? else { return Ok(Err(Closed)) };
        let Ok(book_id) = self.prompt_number::<u64>("Enter book ID: ")? else { return Ok(Err(Closed)) };

        let result = library.return_book(customer_id, book_id);
        self.report(result, "Book returned successfully.")?;
        Ok(Ok(()))
    }

    fn list_returned_books(&mut self, library: &Library) -> io::Result<Result<(), Closed>> {
        writeln!(self.output, "Returned books:")?;
        for book in library.returned_books() {
            writeln!(self.output, "ID: {}, Title: {}", book.id(), book.title())?;
        }
        Ok(Ok(()))
    }

    fn list_borrowed_books(&mut self, library: &Library) -> io::Result<Result<(), Closed>> {
        writeln!(self.output, "Borrowed books:")?;
        for (customer, book) in library.borrowed_books() {
            writeln!(
                self.output,
                "Customer: {}, Book ID: {}, Title: {}",
                customer.full_name(),
                book.id(),
                book.title()
            )?;
        }
        Ok(Ok(()))
    }

    fn generate(&mut self, library: &mut Library) -> io::Result<Result<(), Closed>> {
        let count = loop {
            let Ok(count) = self.prompt_number::<usize>("Enter Number of Objects: ")? else { return Ok(Err(Closed)) };
            if count <= MAX_GENERATE_COUNT {
                break count;
            }
            writeln!(self.output, "Number of objects must be at most {}.", MAX_GENERATE_COUNT)?;
        };

        let result = library.generate(count).map(|_| ());
        self.report(result, "Sample data created successfully.")?;
        Ok(Ok(()))
    }
}

#[derive(Serialize)]
struct Snapshot<'a> {
    customers: &'a [Customer],
    books: Vec<&'a Publication>,
}

/// 고객과 도서 목록을 출력한다.
pub fn write_snapshot<W: Write>(library: &Library, json: bool, output: &mut W) -> io::Result<()> {
    if json {
        let snapshot = Snapshot {
            customers: library.customers(),
            books: library.books(),
        };
        serde_json::to_writer_pretty(&mut *output, &snapshot)?;
        return writeln!(output);
    }

    for customer in library.customers() {
        writeln!(output, "ID: {}, Name: {}", customer.id(), customer.full_name())?;
    }
    for book in library.books() {
        let author = book.author().map(|a| a.full_name()).unwrap_or_default();
        writeln!(
            output,
            "ID: {}, Title: {}, Author: {}, Available: {}/{}",
            book.id(),
            book.title(),
            author,
            book.copies().available(),
            book.copies().total()
        )?;
    }
    Ok(())
}
