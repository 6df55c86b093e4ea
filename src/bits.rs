use crate::error::{Error, Result};

pub type Word = u64;
pub const WORD_BITS: usize = Word::BITS as usize;

pub fn count_set_bits(word: Word) -> usize {
    word.count_ones() as usize
}

/// Set bits of `word` in `[start, end)`. Bounds past `WORD_BITS` are errors.
pub fn count_set_bits_range(word: Word, start: usize, end: usize) -> Result<usize> {
    check_bound(start, WORD_BITS)?;
    check_bound(end, WORD_BITS)?;
    if start >= end {
        return Ok(0);
    }
    let width = end - start;
    let mask = if width == WORD_BITS {
        Word::MAX
    } else {
        ((1 as Word) << width) - 1
    };
    Ok(count_set_bits((word >> start) & mask))
}

pub fn count_set_bits_span(words: &[Word], start: usize, end: usize) -> Result<usize> {
    let total = words.len() * WORD_BITS;
    check_bound(start, total)?;
    check_bound(end, total)?;
    if start >= end {
        return Ok(0);
    }
    let first = start / WORD_BITS;
    let last = (end - 1) / WORD_BITS;
    let head = start % WORD_BITS;
    // `end` is exclusive, so a range ending on a word boundary takes the whole last word.
    let tail = end - last * WORD_BITS;
    if first == last {
        return count_set_bits_range(words[first], head, tail);
    }
    let mut res = count_set_bits_range(words[first], head, WORD_BITS)?;
    res += words[first + 1..last]
        .iter()
        .map(|w| count_set_bits(*w))
        .sum::<usize>();
    res += count_set_bits_range(words[last], 0, tail)?;
    Ok(res)
}

// Range ends may sit on `bound` itself.
fn check_bound(bit: usize, bound: usize) -> Result<()> {
    if bit <= bound {
        Ok(())
    } else {
        Err(Error::IndexOutOfRange { index: bit, bound })
    }
}
