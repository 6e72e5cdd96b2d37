//! Pooled, growable character storage for in-place line editing.
//!
//! A [`CharBuffer`] is a mutable, linear character store — a growable array,
//! not a text builder. It performs no Unicode validation and leaves
//! surrogate-pair integrity to the caller. Storage is leased from a
//! thread-local pool on acquisition and returned on drop, so every exit path
//! (including unwinds) releases the lease. Use-after-release is impossible by
//! construction: releasing *is* dropping, and ownership ends there.
//!
//! Buffers are not thread-safe and must not be shared across concurrent
//! callers; each processing operation acquires its own.

use std::cell::RefCell;

use crate::error::{Error, Result};

const MIN_CAPACITY: usize = 64;
const MAX_POOLED: usize = 8;

thread_local! {
    static POOL: RefCell<Vec<Vec<char>>> = const { RefCell::new(Vec::new()) };
}

/// A pooled, growable, mutable character buffer.
///
/// Acquire with [`CharBuffer::acquire`], edit in place, materialize with
/// [`CharBuffer::to_owned_string`] or [`CharBuffer::substring`]. The backing
/// storage returns to the thread-local pool when the buffer drops.
///
/// # Examples
///
/// ```rust
/// use nini::CharBuffer;
///
/// let mut buf = CharBuffer::acquire();
/// buf.push_str("hello world");
/// buf.replace(' ', '_');
/// assert_eq!(buf.to_owned_string(), "hello_world");
/// ```
#[derive(Debug)]
pub struct CharBuffer {
    chars: Vec<char>,
}

impl CharBuffer {
    /// Leases a buffer from the thread-local pool, or allocates a fresh one.
    #[must_use]
    pub fn acquire() -> Self {
        let chars = POOL
            .with(|pool| pool.borrow_mut().pop())
            .unwrap_or_else(|| Vec::with_capacity(MIN_CAPACITY));
        CharBuffer { chars }
    }

    /// Leases a buffer and fills it with the characters of `text`.
    #[must_use]
    pub fn from_str(text: &str) -> Self {
        let mut buf = Self::acquire();
        buf.push_str(text);
        buf
    }

    /// Logical length in characters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Whether the buffer holds no characters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Physical capacity in characters.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.chars.capacity()
    }

    /// The character at `index`, or `None` past the logical length.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<char> {
        self.chars.get(index).copied()
    }

    /// Overwrites the character at `index`.
    pub fn set(&mut self, index: usize, ch: char) -> Result<()> {
        let used = self.chars.len();
        match self.chars.get_mut(index) {
            Some(slot) => {
                *slot = ch;
                Ok(())
            }
            None => Err(Error::range(index, 1, used)),
        }
    }

    /// Appends one character.
    pub fn push(&mut self, ch: char) {
        self.grow_to(self.chars.len() + 1);
        self.chars.push(ch);
    }

    /// Appends `count` copies of `ch`.
    pub fn push_repeat(&mut self, ch: char, count: usize) {
        self.grow_to(self.chars.len() + count);
        for _ in 0..count {
            self.chars.push(ch);
        }
    }

    /// Appends every character of `text`.
    pub fn push_str(&mut self, text: &str) {
        self.grow_to(self.chars.len() + text.chars().count());
        self.chars.extend(text.chars());
    }

    /// Appends a character slice.
    pub fn push_slice(&mut self, slice: &[char]) {
        self.grow_to(self.chars.len() + slice.len());
        self.chars.extend_from_slice(slice);
    }

    /// Inserts one character at `index`, shifting the tail right.
    pub fn insert(&mut self, index: usize, ch: char) -> Result<()> {
        if index > self.chars.len() {
            return Err(Error::range(index, 0, self.chars.len()));
        }
        self.grow_to(self.chars.len() + 1);
        self.chars.insert(index, ch);
        Ok(())
    }

    /// Inserts every character of `text` at `index`.
    pub fn insert_str(&mut self, index: usize, text: &str) -> Result<()> {
        if index > self.chars.len() {
            return Err(Error::range(index, 0, self.chars.len()));
        }
        let incoming: Vec<char> = text.chars().collect();
        self.grow_to(self.chars.len() + incoming.len());
        self.chars.splice(index..index, incoming);
        Ok(())
    }

    /// Removes and returns the character at `index`.
    pub fn remove(&mut self, index: usize) -> Result<char> {
        if index >= self.chars.len() {
            return Err(Error::range(index, 1, self.chars.len()));
        }
        Ok(self.chars.remove(index))
    }

    /// Removes `len` characters starting at `start`.
    pub fn remove_range(&mut self, start: usize, len: usize) -> Result<()> {
        self.check_range(start, len)?;
        self.chars.drain(start..start + len);
        Ok(())
    }

    /// Index of the first occurrence of `ch`, if any.
    #[must_use]
    pub fn index_of(&self, ch: char) -> Option<usize> {
        self.chars.iter().position(|&c| c == ch)
    }

    /// Index of the first occurrence of any character in `set`, if any.
    #[must_use]
    pub fn index_of_any(&self, set: &[char]) -> Option<usize> {
        self.chars.iter().position(|c| set.contains(c))
    }

    /// Index of the last occurrence of `ch`, if any.
    #[must_use]
    pub fn last_index_of(&self, ch: char) -> Option<usize> {
        self.chars.iter().rposition(|&c| c == ch)
    }

    /// Index of the last occurrence of any character in `set`, if any.
    #[must_use]
    pub fn last_index_of_any(&self, set: &[char]) -> Option<usize> {
        self.chars.iter().rposition(|c| set.contains(c))
    }

    /// Whether the buffer contains `ch`.
    #[must_use]
    pub fn contains(&self, ch: char) -> bool {
        self.index_of(ch).is_some()
    }

    /// Replaces every occurrence of `from` with `to`, returning the count.
    pub fn replace(&mut self, from: char, to: char) -> usize {
        let mut count = 0;
        for c in &mut self.chars {
            if *c == from {
                *c = to;
                count += 1;
            }
        }
        count
    }

    /// Replaces every occurrence of any character in `set` with `to`,
    /// returning the count.
    pub fn replace_any(&mut self, set: &[char], to: char) -> usize {
        let mut count = 0;
        for c in &mut self.chars {
            if set.contains(c) {
                *c = to;
                count += 1;
            }
        }
        count
    }

    /// Copies `dst.len()` characters starting at `start` into `dst`.
    pub fn copy_to(&self, start: usize, dst: &mut [char]) -> Result<()> {
        self.check_range(start, dst.len())?;
        dst.copy_from_slice(&self.chars[start..start + dst.len()]);
        Ok(())
    }

    /// A view of the logically-used characters.
    ///
    /// The slice is valid only until the next mutating call; the borrow
    /// checker enforces this.
    #[must_use]
    pub fn as_slice(&self) -> &[char] {
        &self.chars
    }

    /// Materializes the whole buffer as an owned string.
    #[must_use]
    pub fn to_owned_string(&self) -> String {
        self.chars.iter().collect()
    }

    /// Materializes `len` characters starting at `start` as an owned string.
    pub fn substring(&self, start: usize, len: usize) -> Result<String> {
        self.check_range(start, len)?;
        Ok(self.chars[start..start + len].iter().collect())
    }

    /// Empties the buffer without releasing its storage.
    pub fn clear(&mut self) {
        self.chars.clear();
    }

    fn check_range(&self, start: usize, len: usize) -> Result<()> {
        let used = self.chars.len();
        let end = start
            .checked_add(len)
            .ok_or_else(|| Error::range(start, len, used))?;
        if start > used || end > used {
            return Err(Error::range(start, len, used));
        }
        Ok(())
    }

    /// Ensures capacity for `needed` characters: doubling growth with an
    /// exact-fit fallback when doubling overflows or falls short.
    fn grow_to(&mut self, needed: usize) {
        let cap = self.chars.capacity();
        if needed <= cap {
            return;
        }
        let target = match cap.max(MIN_CAPACITY).checked_mul(2) {
            Some(doubled) if doubled >= needed => doubled,
            _ => needed,
        };
        self.chars.reserve_exact(target - self.chars.len());
    }
}

impl Drop for CharBuffer {
    fn drop(&mut self) {
        let mut storage = std::mem::take(&mut self.chars);
        storage.clear();
        POOL.with(|pool| {
            let mut pool = pool.borrow_mut();
            if pool.len() < MAX_POOLED {
                pool.push(storage);
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_and_materialize() {
        let mut buf = CharBuffer::acquire();
        buf.push('a');
        buf.push_repeat('b', 3);
        buf.push_str("cd");
        assert_eq!(buf.to_owned_string(), "abbbcd");
        assert_eq!(buf.len(), 6);
    }

    #[test]
    fn insert_and_remove() {
        let mut buf = CharBuffer::from_str("ace");
        buf.insert(1, 'b').unwrap();
        buf.insert_str(3, "d").unwrap();
        assert_eq!(buf.to_owned_string(), "abcde");
        assert_eq!(buf.remove(0).unwrap(), 'a');
        buf.remove_range(1, 2).unwrap();
        assert_eq!(buf.to_owned_string(), "be");
    }

    #[test]
    fn search_operations() {
        let buf = CharBuffer::from_str("a b\tc b");
        assert_eq!(buf.index_of('b'), Some(2));
        assert_eq!(buf.last_index_of('b'), Some(6));
        assert_eq!(buf.index_of_any(&[' ', '\t']), Some(1));
        assert_eq!(buf.last_index_of_any(&[' ', '\t']), Some(5));
        assert!(buf.contains('\t'));
        assert!(!buf.contains('z'));
    }

    #[test]
    fn replace_counts_occurrences() {
        let mut buf = CharBuffer::from_str("a\tb c");
        assert_eq!(buf.replace_any(&[' ', '\t'], '_'), 2);
        assert_eq!(buf.to_owned_string(), "a_b_c");
        assert_eq!(buf.replace('_', '-'), 2);
    }

    #[test]
    fn range_violations_rejected() {
        let mut buf = CharBuffer::from_str("abc");
        assert!(matches!(buf.substring(1, 3), Err(Error::Range { .. })));
        assert!(matches!(buf.remove_range(4, 0), Err(Error::Range { .. })));
        assert!(matches!(buf.set(3, 'x'), Err(Error::Range { .. })));
        assert!(buf.substring(1, 2).is_ok());
        assert_eq!(buf.substring(3, 0).unwrap(), "");
    }

    #[test]
    fn copy_out() {
        let buf = CharBuffer::from_str("abcdef");
        let mut dst = ['\0'; 3];
        buf.copy_to(2, &mut dst).unwrap();
        assert_eq!(dst, ['c', 'd', 'e']);
        let mut too_far = ['\0'; 3];
        assert!(buf.copy_to(4, &mut too_far).is_err());
    }

    #[test]
    fn growth_preserves_content() {
        let mut buf = CharBuffer::acquire();
        let long: String = std::iter::repeat('x').take(1000).collect();
        buf.push_str(&long);
        assert_eq!(buf.len(), 1000);
        assert_eq!(buf.to_owned_string(), long);
    }

    #[test]
    fn storage_recycles_through_pool() {
        let capacity = {
            let mut buf = CharBuffer::acquire();
            buf.push_str(&"y".repeat(500));
            buf.capacity()
        };
        let recycled = CharBuffer::acquire();
        assert!(recycled.capacity() >= capacity.min(MIN_CAPACITY));
        assert!(recycled.is_empty());
    }
}
