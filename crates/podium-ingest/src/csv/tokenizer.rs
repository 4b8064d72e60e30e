//! Quote-aware splitting of delimited text into rows of cells.
//!
//! Rules:
//! - a cell whose first character is `"` is quoted; inside it `""` is a
//!   literal quote and a lone `"` closes the quote
//! - outside quotes `,` ends a cell and `\n`, `\r\n` or a bare `\r` ends a row
//! - rows made only of empty or whitespace cells are dropped
//! - an unterminated quote runs to end of input and becomes part of the
//!   final cell
//!
//! Rows may have different widths. Cells are returned untrimmed.

use std::iter::Peekable;
use std::str::Chars;

/// One row of cells and the line it starts on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvRow {
    /// 1-based physical line on which the row begins.
    pub line: usize,
    pub cells: Vec<String>,
}

impl CsvRow {
    /// Cell at `index`, trimmed. Missing cells read as empty.
    pub fn cell(&self, index: usize) -> &str {
        self.cells.get(index).map_or("", |c| c.trim())
    }

    fn is_blank(&self) -> bool {
        self.cells.iter().all(|c| c.trim().is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CellState {
    /// Nothing consumed for the current cell yet.
    Start,
    Unquoted,
    Quoted,
    /// Closing quote seen; trailing characters are kept literally.
    AfterQuote,
}

struct Tokenizer<'a> {
    chars: Peekable<Chars<'a>>,
    line: usize,
    row_line: usize,
    state: CellState,
    cell: String,
    cells: Vec<String>,
    rows: Vec<CsvRow>,
}

impl<'a> Tokenizer<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            chars: text.chars().peekable(),
            line: 1,
            row_line: 1,
            state: CellState::Start,
            cell: String::new(),
            cells: Vec::new(),
            rows: Vec::new(),
        }
    }

    fn run(mut self) -> Vec<CsvRow> {
        while let Some(c) = self.chars.next() {
            if self.state == CellState::Quoted {
                self.quoted(c);
            } else {
                self.unquoted(c);
            }
        }

        // Final row without a terminator, or an unterminated quote.
        if self.state != CellState::Start || !self.cells.is_empty() {
            self.end_row();
        }
        self.rows
    }

    fn quoted(&mut self, c: char) {
        match c {
            '"' if self.chars.peek() == Some(&'"') => {
                self.chars.next();
                self.cell.push('"');
            }
            '"' => self.state = CellState::AfterQuote,
            '\n' => {
                self.line += 1;
                self.cell.push(c);
            }
            '\r' => {
                // \r\n is counted once, at the \n
                if self.chars.peek() != Some(&'\n') {
                    self.line += 1;
                }
                self.cell.push(c);
            }
            _ => self.cell.push(c),
        }
    }

    fn unquoted(&mut self, c: char) {
        match c {
            '"' if self.state == CellState::Start => self.state = CellState::Quoted,
            ',' => self.end_cell(),
            '\n' => self.end_line(),
            '\r' => {
                if self.chars.peek() == Some(&'\n') {
                    self.chars.next();
                }
                self.end_line();
            }
            _ => {
                if self.state == CellState::Start {
                    self.state = CellState::Unquoted;
                }
                self.cell.push(c);
            }
        }
    }

    fn end_cell(&mut self) {
        self.cells.push(std::mem::take(&mut self.cell));
        self.state = CellState::Start;
    }

    fn end_line(&mut self) {
        self.end_row();
        self.line += 1;
        self.row_line = self.line;
    }

    fn end_row(&mut self) {
        self.end_cell();
        let row = CsvRow {
            line: self.row_line,
            cells: std::mem::take(&mut self.cells),
        };
        if !row.is_blank() {
            self.rows.push(row);
        }
    }
}

/// Split `text` into rows of cells in a single pass.
///
/// Never fails: malformed quoting is recovered from rather than reported.
pub fn tokenize(text: &str) -> Vec<CsvRow> {
    let rows = Tokenizer::new(text).run();
    tracing::trace!(rows = rows.len(), bytes = text.len(), "tokenized input");
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(text: &str) -> Vec<Vec<String>> {
        tokenize(text).into_iter().map(|row| row.cells).collect()
    }

    #[test]
    fn test_tokenize_simple() {
        assert_eq!(cells("a,b,c\n1,2,3\n"), vec![vec!["a", "b", "c"], vec!["1", "2", "3"]]);
    }

    #[test]
    fn test_tokenize_final_row_without_terminator() {
        assert_eq!(cells("a,b\n1,2"), vec![vec!["a", "b"], vec!["1", "2"]]);
    }

    #[test]
    fn test_tokenize_trailing_empty_cell() {
        assert_eq!(cells("a,\n"), vec![vec!["a", ""]]);
        assert_eq!(cells("a,"), vec![vec!["a", ""]]);
    }

    #[test]
    fn test_tokenize_quoted_comma_and_newline() {
        assert_eq!(
            cells("\"hello, world\",\"two\nlines\"\nx,y"),
            vec![vec!["hello, world", "two\nlines"], vec!["x", "y"]]
        );
    }

    #[test]
    fn test_tokenize_escaped_quotes() {
        assert_eq!(
            cells("\"he said \"\"hi\"\"\",b"),
            vec![vec!["he said \"hi\"", "b"]]
        );
    }

    #[test]
    fn test_tokenize_quote_inside_unquoted_cell_is_literal() {
        assert_eq!(cells("5'11\",b"), vec![vec!["5'11\"", "b"]]);
    }

    #[test]
    fn test_tokenize_text_after_closing_quote_is_kept() {
        assert_eq!(cells("\"ab\"c,d"), vec![vec!["abc", "d"]]);
    }

    #[test]
    fn test_tokenize_crlf_and_bare_cr() {
        assert_eq!(
            cells("a,b\r\n1,2\r3,4"),
            vec![vec!["a", "b"], vec!["1", "2"], vec!["3", "4"]]
        );
    }

    #[test]
    fn test_tokenize_drops_blank_rows() {
        assert_eq!(
            cells("a,b\n\n  ,  \n1,2\n\n"),
            vec![vec!["a", "b"], vec!["1", "2"]]
        );
    }

    #[test]
    fn test_tokenize_unterminated_quote_runs_to_end() {
        assert_eq!(
            cells("a,b\n\"open,cell\nstill open"),
            vec![vec!["a", "b"], vec!["open,cell\nstill open"]]
        );
    }

    #[test]
    fn test_tokenize_ragged_rows() {
        assert_eq!(cells("a,b,c\n1\n"), vec![vec!["a", "b", "c"], vec!["1"]]);
    }

    #[test]
    fn test_tokenize_empty_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("\n\r\n").is_empty());
    }

    #[test]
    fn test_row_lines_track_physical_lines() {
        let rows = tokenize("h1,h2\n\n\"multi\nline\",x\r\nlast,row");
        let lines: Vec<usize> = rows.iter().map(|r| r.line).collect();
        assert_eq!(lines, vec![1, 3, 5]);
    }

    #[test]
    fn test_quoted_crlf_counts_as_one_line() {
        let rows = tokenize("h\r\n\"a\r\nb\",c\r\n\"d\re\",f\r\nlast");
        let lines: Vec<usize> = rows.iter().map(|r| r.line).collect();
        assert_eq!(lines, vec![1, 2, 4, 6]);
        assert_eq!(rows[1].cells, vec!["a\r\nb", "c"]);
        assert_eq!(rows[2].cells, vec!["d\re", "f"]);
    }

    #[test]
    fn test_cell_accessor_trims_and_defaults() {
        let row = CsvRow {
            line: 1,
            cells: vec!["  a ".to_string()],
        };
        assert_eq!(row.cell(0), "a");
        assert_eq!(row.cell(3), "");
    }
}
