//! ルール判定の基本：どのランク同士なら重ねられるか。

use crate::components::card::{Rank, ALL_RANKS};

/// `a` can be played on `b` (or the other way round) when the ranks are
/// neighbours. Ranks wrap, so King and Ace match.
pub fn can_match(a: Rank, b: Rank) -> bool {
    let diff = a.index().abs_diff(b.index());
    diff == 1 || diff == ALL_RANKS.len() - 1
}

/// The two ranks that can be played on `rank`, lower neighbour first.
pub fn matching_ranks(rank: Rank) -> [Rank; 2] {
    let len = ALL_RANKS.len();
    [
        Rank::from_index_wrapping(rank.index() + len - 1),
        Rank::from_index_wrapping(rank.index() + 1),
    ]
}
