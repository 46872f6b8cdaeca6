//! Table rows derived from view state

use crate::book::{BookId, ViewState};
use crate::currency::{format_price, CurrencyFormat};

/// Display strings for one row of the book table
#[derive(Debug, Clone, PartialEq)]
pub struct BookRow {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub year: String,
    pub price: String,
}

/// One row per book, in view order. No side effects.
pub fn book_rows(state: &ViewState, currency: &CurrencyFormat) -> Vec<BookRow> {
    state
        .books()
        .iter()
        .map(|book| BookRow {
            id: book.id,
            title: book.title.clone(),
            author: book.author.clone(),
            isbn: book.isbn.clone(),
            year: book.year.to_string(),
            price: format_price(book.price, currency),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::book::test_book;

    #[test]
    fn test_rows_follow_state_order() {
        let mut unpriced = test_book(9, "Unpriced");
        unpriced.price = None;
        let mut pricey = test_book(4, "Pricey");
        pricey.price = Some(1234.5);

        let state = ViewState::from_books(vec![pricey, unpriced]);
        let rows = book_rows(&state, &CurrencyFormat::default());

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].id, BookId(4));
        assert_eq!(rows[0].price, "฿1,234.50");
        assert_eq!(rows[0].year, "2020");
        assert_eq!(rows[1].title, "Unpriced");
        assert_eq!(rows[1].price, "-");
    }

    #[test]
    fn test_empty_state_has_no_rows() {
        assert!(book_rows(&ViewState::empty(), &CurrencyFormat::default()).is_empty());
    }
}
