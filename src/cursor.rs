//! Pointer-based cursor for single-pass byte scanning.
//!
//! Uses raw pointers internally for scanning speed, wrapped in a safe API
//! with bounds checking on every move. `seek` allows the bounded rewinds
//! an abandoned inline span needs.

use crate::limits::TAB_WIDTH;

/// A cursor for byte-by-byte scanning over the input document.
///
/// # Example
/// ```
/// use tagmark::cursor::Cursor;
///
/// let mut cursor = Cursor::new(b"***bold");
/// assert_eq!(cursor.count_run(b'*'), 3);
/// assert_eq!(cursor.peek(), Some(b'b'));
/// ```
#[derive(Clone, Copy)]
pub struct Cursor<'a> {
    ptr: *const u8,
    end: *const u8,
    base: *const u8,
    _marker: std::marker::PhantomData<&'a [u8]>,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor over a byte slice.
    #[inline]
    pub fn new(input: &'a [u8]) -> Self {
        let ptr = input.as_ptr();
        let end = unsafe { ptr.add(input.len()) };
        Self {
            ptr,
            end,
            base: ptr,
            _marker: std::marker::PhantomData,
        }
    }

    /// Current offset from the start of input.
    #[inline]
    pub fn offset(&self) -> usize {
        // SAFETY: ptr >= base by construction
        unsafe { self.ptr.offset_from(self.base) as usize }
    }

    /// Total length of the underlying input.
    #[inline]
    pub fn len(&self) -> usize {
        // SAFETY: end >= base by construction
        unsafe { self.end.offset_from(self.base) as usize }
    }

    /// Number of bytes remaining.
    #[inline]
    pub fn remaining(&self) -> usize {
        // SAFETY: end >= ptr by construction
        unsafe { self.end.offset_from(self.ptr) as usize }
    }

    /// Check if cursor is at end of input.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.ptr >= self.end
    }

    /// Peek the current byte without advancing.
    #[inline]
    pub fn peek(&self) -> Option<u8> {
        if self.is_eof() {
            None
        } else {
            // SAFETY: not at EOF
            Some(unsafe { *self.ptr })
        }
    }

    /// Peek at byte n positions ahead.
    #[inline]
    pub fn peek_ahead(&self, n: usize) -> Option<u8> {
        if n >= self.remaining() {
            None
        } else {
            // SAFETY: n < remaining
            Some(unsafe { *self.ptr.add(n) })
        }
    }

    /// Check if the cursor sits on a newline or at end of input.
    #[inline]
    pub fn at_line_end(&self) -> bool {
        matches!(self.peek(), None | Some(b'\n'))
    }

    /// Advance by n bytes, stopping at end of input.
    #[inline]
    pub fn advance(&mut self, n: usize) {
        let n = n.min(self.remaining());
        // SAFETY: n <= remaining
        self.ptr = unsafe { self.ptr.add(n) };
    }

    /// Advance by 1 byte. No-op at end of input.
    #[inline]
    pub fn bump(&mut self) {
        if !self.is_eof() {
            self.ptr = unsafe { self.ptr.add(1) };
        }
    }

    /// Move to an absolute offset, clamped to the input length.
    #[inline]
    pub fn seek(&mut self, offset: usize) {
        let offset = offset.min(self.len());
        // SAFETY: offset <= len
        self.ptr = unsafe { self.base.add(offset) };
    }

    /// Check if current position matches a byte.
    #[inline]
    pub fn at(&self, b: u8) -> bool {
        self.peek() == Some(b)
    }

    /// Skip while predicate is true.
    #[inline]
    pub fn skip_while<F>(&mut self, mut predicate: F) -> usize
    where
        F: FnMut(u8) -> bool,
    {
        let start = self.offset();
        while let Some(b) = self.peek() {
            if !predicate(b) {
                break;
            }
            self.bump();
        }
        self.offset() - start
    }

    /// Skip whitespace (space and tab).
    #[inline]
    pub fn skip_whitespace(&mut self) -> usize {
        self.skip_while(|b| b == b' ' || b == b'\t')
    }

    /// Advance past consecutive occurrences of `b`, returning how many were consumed.
    #[inline]
    pub fn count_run(&mut self, b: u8) -> usize {
        self.skip_while(|c| c == b)
    }

    /// Length of the run of `b` at the cursor, without consuming it.
    #[inline]
    pub fn run_len(&self, b: u8) -> usize {
        self.remaining_slice().iter().take_while(|&&c| c == b).count()
    }

    /// Advance past spaces and tabs, returning the indentation in columns.
    ///
    /// A space counts one column, a tab counts [`TAB_WIDTH`] columns.
    #[inline]
    pub fn measure_indentation(&mut self) -> usize {
        let mut columns = 0;
        while let Some(b) = self.peek() {
            match b {
                b' ' => columns += 1,
                b'\t' => columns += TAB_WIDTH,
                _ => break,
            }
            self.bump();
        }
        columns
    }

    /// Check for an ordered list marker: one or more digits followed by `.`.
    ///
    /// Lookahead only; the cursor does not move.
    #[inline]
    pub fn at_ordered_marker(&self) -> bool {
        let rest = self.remaining_slice();
        let digits = rest.iter().take_while(|b| b.is_ascii_digit()).count();
        digits > 0 && rest.get(digits) == Some(&b'.')
    }

    /// Check for a bullet marker: `-`, `+` or `*` followed by whitespace or line end.
    ///
    /// Lookahead only; the cursor does not move.
    #[inline]
    pub fn at_bullet_marker(&self) -> bool {
        matches!(self.peek(), Some(b'-' | b'+' | b'*'))
            && matches!(self.peek_ahead(1), None | Some(b' ' | b'\t' | b'\n'))
    }

    /// Advance to the next run of exactly `len` `marker` bytes starting before `limit`.
    ///
    /// On success the cursor sits after the run and the run's start offset is
    /// returned. Runs of any other length are skipped over. On failure the
    /// cursor is left at `limit`.
    pub fn seek_run(&mut self, marker: u8, len: usize, limit: usize) -> Option<usize> {
        let limit = limit.min(self.len());
        while self.offset() < limit {
            let window = limit - self.offset();
            let Some(pos) = memchr::memchr(marker, &self.remaining_slice()[..window]) else {
                break;
            };
            self.advance(pos);
            let start = self.offset();
            if self.count_run(marker) == len {
                return Some(start);
            }
        }
        self.seek(limit);
        None
    }

    /// Get the remaining bytes as a slice.
    #[inline]
    pub fn remaining_slice(&self) -> &'a [u8] {
        // SAFETY: ptr and end are valid pointers from the same allocation
        unsafe { std::slice::from_raw_parts(self.ptr, self.remaining()) }
    }

    /// Find the next occurrence of a byte using memchr.
    #[inline]
    pub fn find(&self, needle: u8) -> Option<usize> {
        memchr::memchr(needle, self.remaining_slice())
    }

    /// Find the next occurrence of either byte using memchr.
    #[inline]
    pub fn find2(&self, a: u8, b: u8) -> Option<usize> {
        memchr::memchr2(a, b, self.remaining_slice())
    }

    /// Absolute offset of the end of the current line (the `\n` or end of input).
    #[inline]
    pub fn line_end(&self) -> usize {
        match self.find(b'\n') {
            Some(pos) => self.offset() + pos,
            None => self.len(),
        }
    }
}

impl std::fmt::Debug for Cursor<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cursor")
            .field("offset", &self.offset())
            .field("remaining", &self.remaining())
            .finish()
    }
}
