//! Lexical scanning of path data.
//!
//! The scanner owns the read cursor. It knows how to read numbers and arc
//! flags and how to step over whitespace and comma delimiters, but nothing
//! about commands.

use crate::error::PathError;

/// Smallest exponent accepted in a number literal.
const MIN_EXPONENT: i32 = -37;
/// Largest exponent accepted in a number literal.
const MAX_EXPONENT: i32 = 38;

/// A forward-only cursor over path data.
#[derive(Debug)]
pub struct Scanner<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Scanner<'a> {
    /// Creates a scanner positioned at the start of `data`.
    pub fn new(data: &'a str) -> Self {
        Self {
            data: data.as_bytes(),
            pos: 0,
        }
    }

    /// Returns the byte offset of the cursor.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Returns true if every byte has been consumed.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.data.len()
    }

    /// Returns the byte under the cursor without consuming it.
    #[inline]
    pub fn peek(&self) -> Option<u8> {
        self.peek_at(0)
    }

    #[inline]
    fn peek_at(&self, ahead: usize) -> Option<u8> {
        self.data.get(self.pos + ahead).copied()
    }

    #[inline]
    fn peek_digit(&self) -> Option<u8> {
        self.peek().filter(u8::is_ascii_digit).map(|b| b - b'0')
    }

    #[inline]
    pub(crate) fn advance(&mut self) {
        self.pos += 1;
    }

    fn end_of_input(&self) -> PathError {
        PathError::UnexpectedEndOfInput {
            offset: self.data.len(),
        }
    }

    /// Returns true if the byte under the cursor can start a number.
    pub fn at_number_start(&self) -> bool {
        matches!(self.peek(), Some(b'0'..=b'9' | b'+' | b'-' | b'.'))
    }

    /// Skips whitespace.
    pub fn skip_spaces(&mut self) {
        while matches!(self.peek(), Some(b' ' | b'\t' | b'\n' | b'\r')) {
            self.advance();
        }
    }

    /// Skips whitespace, at most one comma, then whitespace again.
    pub fn skip_spaces_or_delimiter(&mut self) {
        self.skip_spaces();
        if self.peek() == Some(b',') {
            self.advance();
            self.skip_spaces();
        }
    }

    /// Reads a number and the delimiter that follows it.
    ///
    /// Digits are accumulated one at a time: the integer part as
    /// `value * 10 + digit`, the fraction with a weight that shrinks by a
    /// factor of ten per digit. Results are therefore reproducible bit for bit
    /// but can differ in the last place from [`str::parse`].
    ///
    /// An `e` or `E` followed by `x` or `m` is not read as an exponent.
    ///
    /// # Errors
    ///
    /// - [`PathError::UnexpectedEndOfInput`] if the cursor is already exhausted
    /// - [`PathError::MalformedNumber`] if a required digit is missing
    /// - [`PathError::ExponentOutOfRange`] if the exponent is outside `[-37, 38]`
    /// - [`PathError::NumericOverflow`] if the value does not fit in a double
    ///
    /// # Example
    ///
    /// ```
    /// use pathdata::path::Scanner;
    ///
    /// let mut scanner = Scanner::new("-1.5e2, 3");
    /// assert_eq!(scanner.parse_number(), Ok(-150.0));
    /// assert_eq!(scanner.parse_number(), Ok(3.0));
    /// assert!(scanner.is_at_end());
    /// ```
    pub fn parse_number(&mut self) -> Result<f64, PathError> {
        let start = self.pos;
        if self.is_at_end() {
            return Err(self.end_of_input());
        }
        let malformed = PathError::MalformedNumber { offset: start };

        let mut sign = 1.0;
        match self.peek() {
            Some(b'+') => self.advance(),
            Some(b'-') => {
                self.advance();
                sign = -1.0;
            }
            _ => {}
        }

        if !matches!(self.peek(), Some(b'0'..=b'9' | b'.')) {
            return Err(malformed);
        }

        let mut value = 0.0f64;
        while let Some(digit) = self.peek_digit() {
            value = value * 10.0 + f64::from(digit);
            self.advance();
        }

        if self.peek() == Some(b'.') {
            self.advance();
            if self.peek_digit().is_none() {
                return Err(malformed);
            }
            let mut weight = 1.0f64;
            while let Some(digit) = self.peek_digit() {
                weight *= 0.1;
                value += f64::from(digit) * weight;
                self.advance();
            }
        }

        if !value.is_finite() {
            return Err(PathError::NumericOverflow { offset: start });
        }

        // "ex" and "em" would be units, not exponents.
        if matches!(self.peek(), Some(b'e' | b'E')) && !matches!(self.peek_at(1), Some(b'x' | b'm'))
        {
            self.advance();
            let mut exponent_sign = 1;
            match self.peek() {
                Some(b'+') => self.advance(),
                Some(b'-') => {
                    self.advance();
                    exponent_sign = -1;
                }
                _ => {}
            }

            if self.peek_digit().is_none() {
                return Err(malformed);
            }
            let mut exponent: i32 = 0;
            while let Some(digit) = self.peek_digit() {
                exponent = exponent
                    .saturating_mul(10)
                    .saturating_add(i32::from(digit));
                self.advance();
            }

            let exponent = exponent_sign * exponent;
            if !(MIN_EXPONENT..=MAX_EXPONENT).contains(&exponent) {
                return Err(PathError::ExponentOutOfRange { offset: start });
            }
            value *= 10f64.powi(exponent);
            if !value.is_finite() {
                return Err(PathError::NumericOverflow { offset: start });
            }
        }

        self.skip_spaces_or_delimiter();
        Ok(sign * value)
    }

    /// Reads a single-character arc flag and the delimiter that follows it.
    ///
    /// Only the literal characters `0` and `1` are accepted, so flags may be
    /// packed against the next number (`11 20,0` is two flags then `20,0`).
    pub fn parse_arc_flag(&mut self) -> Result<bool, PathError> {
        let flag = match self.peek() {
            None => return Err(self.end_of_input()),
            Some(b'0') => false,
            Some(b'1') => true,
            Some(_) => {
                return Err(PathError::InvalidArcFlag { offset: self.pos });
            }
        };
        self.advance();
        self.skip_spaces_or_delimiter();
        Ok(flag)
    }
}
