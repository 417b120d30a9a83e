//! Session state machine.

use log::debug;
use rand::Rng;

use crate::core::{evaluate, seed_from_string, Card, CardOptions, CardRng, MarkSet};
use crate::leaderboard::Leaderboard;
use crate::pool::PhrasePool;

/// Verdict of a bingo call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BingoCall {
    /// The current marks satisfy the active pattern.
    Valid,
    /// They don't; nothing was credited.
    Invalid,
}

/// One play-through: a seeded card, the player's marks, and the running
/// leaderboard.
///
/// The session owns the causal ordering the core relies on: whenever the
/// seed, options, or pool change, the card is recomposed and the marks
/// cleared before anything else looks at them. Stale marks are never
/// evaluated against a new card's geometry.
#[derive(Clone, Debug)]
pub struct GameSession {
    pool: PhrasePool,
    options: CardOptions,
    seed: String,
    card: Card,
    marks: MarkSet,
    leaderboard: Leaderboard,
}

impl GameSession {
    /// Start a session with a fresh card.
    ///
    /// Seed precedence: the pinned `options.seed` when non-blank, otherwise
    /// a freshly minted random numeric string.
    #[must_use]
    pub fn new(pool: PhrasePool, options: CardOptions) -> Self {
        Self::with_link_seed(pool, options, None)
    }

    /// Start a session, preferring a seed carried in from a shared link.
    ///
    /// A link seed outranks the pinned option seed so a scanned card opens
    /// identical to the one that was shared.
    #[must_use]
    pub fn with_link_seed(
        pool: PhrasePool,
        options: CardOptions,
        link_seed: Option<&str>,
    ) -> Self {
        let seed = link_seed
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .or_else(|| pinned_seed(&options))
            .unwrap_or_else(mint_seed);
        let card = compose_card(&pool, &options, &seed);

        Self {
            pool,
            options,
            seed,
            card,
            marks: MarkSet::new(),
            leaderboard: Leaderboard::new(),
        }
    }

    /// The seed the current card was composed from. Hand this string (with
    /// the options record) to whatever shares or QR-encodes the card; the
    /// same pair reproduces the card bit for bit.
    #[must_use]
    pub fn seed(&self) -> &str {
        &self.seed
    }

    /// Current options snapshot.
    #[must_use]
    pub fn options(&self) -> &CardOptions {
        &self.options
    }

    /// The composed card.
    #[must_use]
    pub fn card(&self) -> &Card {
        &self.card
    }

    /// The player's marks.
    #[must_use]
    pub fn marks(&self) -> &MarkSet {
        &self.marks
    }

    /// The phrase pool in use.
    #[must_use]
    pub fn pool(&self) -> &PhrasePool {
        &self.pool
    }

    /// The running leaderboard.
    #[must_use]
    pub fn leaderboard(&self) -> &Leaderboard {
        &self.leaderboard
    }

    /// Mutable access for roster edits (add/remove/adjust/reset).
    pub fn leaderboard_mut(&mut self) -> &mut Leaderboard {
        &mut self.leaderboard
    }

    /// Replace the leaderboard wholesale (import path).
    pub fn set_leaderboard(&mut self, board: Leaderboard) {
        self.leaderboard = board;
    }

    /// Index of the FREE cell under the current options, if enabled.
    #[must_use]
    pub fn free_index(&self) -> Option<usize> {
        self.options.free_index()
    }

    /// Deal a new card: re-mint the seed (unless one is pinned in the
    /// options), recompose, clear marks.
    pub fn regenerate(&mut self) {
        self.seed = pinned_seed(&self.options).unwrap_or_else(mint_seed);
        self.recompose();
    }

    /// Swap in new options and deal accordingly.
    pub fn set_options(&mut self, options: CardOptions) {
        self.options = options;
        self.regenerate();
    }

    /// Swap in an edited pool and recompose the current seed against it.
    pub fn set_pool(&mut self, pool: PhrasePool) {
        self.pool = pool;
        self.recompose();
    }

    /// Flip a cell's mark. The FREE cell and out-of-range indices are
    /// ignored.
    pub fn toggle_mark(&mut self, index: usize) {
        if Some(index) == self.free_index() || index >= self.options.size.cells() {
            return;
        }
        self.marks.toggle(index);
    }

    /// Wipe the marks, keeping the card.
    pub fn clear_marks(&mut self) {
        self.marks.clear();
    }

    /// Whether the current marks satisfy the active pattern.
    #[must_use]
    pub fn has_bingo(&self) -> bool {
        evaluate(
            &self.marks,
            self.options.size,
            self.options.pattern,
            self.free_index(),
        )
    }

    /// Adjudicate a bingo call. On a valid call a non-blank `caller` is
    /// credited on the leaderboard; an invalid call changes nothing.
    pub fn call_bingo(&mut self, caller: &str) -> BingoCall {
        if !self.has_bingo() {
            return BingoCall::Invalid;
        }
        let name = caller.trim();
        if !name.is_empty() {
            self.leaderboard.record_win(name);
        }
        BingoCall::Valid
    }

    fn recompose(&mut self) {
        self.card = compose_card(&self.pool, &self.options, &self.seed);
        self.marks.clear();
        debug!(
            "composed {} card from seed {:?} ({} cells)",
            self.options.size,
            self.seed,
            self.card.len()
        );
    }
}

fn compose_card(pool: &PhrasePool, options: &CardOptions, seed: &str) -> Card {
    let mut rng = CardRng::new(seed_from_string(seed));
    Card::compose(pool.phrases(), options.size, options.free, &mut rng)
}

fn pinned_seed(options: &CardOptions) -> Option<String> {
    let pinned = options.seed.trim();
    (!pinned.is_empty()).then(|| pinned.to_string())
}

/// Mint a random numeric seed string, the shape players are used to typing
/// and reading off a shared link.
fn mint_seed() -> String {
    rand::thread_rng().gen_range(0..1_000_000_000u32).to_string()
}
