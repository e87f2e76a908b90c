use crate::Blocklist;
use itertools::Itertools;
use std::iter;

/// Masker replaces blocklisted phrases in tokenized sentences with runs of a
/// mask character and counts how many occurrences it masked.
///
/// The blocklist is injected once at construction and never reloaded.
/// Sentences with no match pass through unchanged; for matched sentences only
/// the final rebuilt state is kept.
///
/// Matches are located on the whitespace-joined text form of a sentence, and
/// the match offset is mapped back to a token index by counting the words in
/// the text ahead of it. When a phrase begins mid-token, or at the very start
/// of the sentence, that mapping can land past the true span; the occurrence
/// is still counted, whatever the mapping selected is masked, and the pass
/// stops as soon as it stops making progress.
pub struct Masker {
    blocklist: Blocklist,
    mask_char: char,
}

/// The outcome of masking a batch of sentences.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Masked {
    /// Sentences in input order; clean sentences are passed through unchanged.
    pub sentences: Vec<Vec<String>>,
    /// Total masked occurrences across all sentences, one per occurrence
    /// rather than one per masked token.
    pub occurrences: usize,
}

impl Masked {
    /// Returns `true` if no phrase matched anywhere in the batch.
    pub fn is_clean(&self) -> bool {
        self.occurrences == 0
    }
}

impl Masker {
    /// Allocates a `Masker` over the given blocklist.
    pub fn new(blocklist: Blocklist) -> Self {
        Self {
            blocklist,
            mask_char: '#',
        }
    }

    /// Sets the character used to mask matched tokens.
    ///
    /// The default is `'#'`.
    pub fn with_mask_char(&mut self, mask_char: char) -> &mut Self {
        self.mask_char = mask_char;
        self
    }

    /// Masks a batch of tokenized sentences, returning the rebuilt sentences
    /// and the total occurrence count. Empty input yields an empty result and
    /// a zero count.
    pub fn mask<S: AsRef<str>>(&self, sentences: &[Vec<S>]) -> Masked {
        let mut occurrences = 0;
        let sentences = sentences
            .iter()
            .map(|sentence| {
                let (masked, count) = self.mask_tokens(sentence);
                occurrences += count;
                masked
            })
            .collect();
        Masked {
            sentences,
            occurrences,
        }
    }

    /// Masks a single tokenized sentence, returning the rebuilt tokens and
    /// the number of masked occurrences.
    pub fn mask_tokens<S: AsRef<str>>(&self, tokens: &[S]) -> (Vec<String>, usize) {
        let mut sentence: Vec<String> =
            tokens.iter().map(|token| token.as_ref().to_owned()).collect();
        let mut occurrences = 0;
        let mut text = sentence.iter().join(" ");

        for phrase in self.blocklist.iter() {
            if phrase.is_empty() {
                // A degenerate empty phrase would match at every offset.
                continue;
            }
            let span_len = phrase.split(' ').count();
            while let Some(offset) = text.find(phrase) {
                occurrences += 1;
                let first = leading_words(&text, offset).min(sentence.len());
                let last = (first + span_len).min(sentence.len());

                let mut progressed = false;
                for token in &mut sentence[first..last] {
                    let masked: String =
                        iter::repeat(self.mask_char).take(token.chars().count()).collect();
                    if *token != masked {
                        *token = masked;
                        progressed = true;
                    }
                }
                if !progressed {
                    // The mapped span lies outside the sentence or is already
                    // fully masked; rescanning would find this occurrence
                    // forever.
                    break;
                }
                text = sentence.iter().join(" ");
            }
        }

        (sentence, occurrences)
    }
}

impl Default for Masker {
    /// A masker over the bundled blocklist.
    fn default() -> Self {
        Self::new(Blocklist::bundled().clone())
    }
}

/// Maps a byte offset in the joined text form back to a token index by
/// counting space-separated words in the prefix that ends one character
/// before the offset (the separator, when the match is token-aligned).
///
/// An offset of zero wraps around: the count then runs over the whole text
/// minus its final character, so a sentence-initial match maps past the last
/// token. Callers clamp the resulting span and treat an empty one as a no-op.
fn leading_words(text: &str, offset: usize) -> usize {
    let head = if offset == 0 { text } else { &text[..offset] };
    let front = match head.chars().next_back() {
        Some(last) => &head[..head.len() - last.len_utf8()],
        None => head,
    };
    front.split(' ').count()
}

#[cfg(test)]
mod test {
    use super::leading_words;

    #[test]
    fn token_aligned_offsets() {
        // "that damn cat": the match at offset 5 is preceded by one word.
        assert_eq!(leading_words("that damn cat", 5), 1);
        assert_eq!(leading_words("a damn cat", 2), 1);
        assert_eq!(leading_words("a b damn", 4), 2);
    }

    #[test]
    fn offset_zero_wraps() {
        // The prefix becomes the whole text minus its last character.
        assert_eq!(leading_words("damn cat", 0), 2);
        assert_eq!(leading_words("damn", 0), 1);
    }

    #[test]
    fn mid_token_offsets_count_the_split_word() {
        // "hell" inside "shell": the cut lands inside the first token and the
        // trailing fragment of the prefix counts as a word of its own.
        assert_eq!(leading_words("a shell", 3), 2);
    }
}
