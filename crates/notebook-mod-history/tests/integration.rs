// Integration tests for the history engine.
//
// These drive `History` through its public API only, the way a command
// dispatcher would: run each command through `execute`, then undo/redo.

use notebook_mod_history::{History, HistoryConfig, HistoryDocument, HistoryError};
use proptest::prelude::*;

#[derive(Debug, Clone, Default, PartialEq)]
struct Board {
    cards: Vec<(char, u8)>,
    reversed: bool,
}

#[derive(Debug, thiserror::Error)]
#[error("card {0} appears twice")]
struct DuplicateCard(char);

impl HistoryDocument for Board {
    type Item = (char, u8);
    type Sort = bool;
    type Error = DuplicateCard;

    fn items(&self) -> &[(char, u8)] {
        &self.cards
    }

    fn replace_items(&mut self, items: Vec<(char, u8)>) -> Result<(), DuplicateCard> {
        for (i, a) in items.iter().enumerate() {
            if items[i + 1..].iter().any(|b| b.0 == a.0) {
                return Err(DuplicateCard(a.0));
            }
        }
        self.cards = items;
        Ok(())
    }

    fn sort_condition(&self) -> bool {
        self.reversed
    }

    fn set_sort_condition(&mut self, sort: bool) {
        self.reversed = sort;
    }

    fn items_have_same_state(a: &(char, u8), b: &(char, u8)) -> bool {
        a == b
    }
}

/// A mutation the tests can replay against a `Board`.
#[derive(Debug, Clone)]
enum Edit {
    Insert(char, u8),
    Remove(char),
    Bump(char),
    Flip,
    Noop,
}

impl Edit {
    fn label(&self) -> String {
        format!("{self:?}")
    }

    fn apply(&self, board: &mut Board) {
        match *self {
            Edit::Insert(key, value) => {
                if !board.cards.iter().any(|c| c.0 == key) {
                    board.cards.push((key, value));
                }
            }
            Edit::Remove(key) => board.cards.retain(|c| c.0 != key),
            Edit::Bump(key) => {
                if let Some(card) = board.cards.iter_mut().find(|c| c.0 == key) {
                    card.1 = card.1.wrapping_add(1);
                }
            }
            Edit::Flip => board.reversed = !board.reversed,
            Edit::Noop => {}
        }
    }
}

fn arb_edit() -> impl Strategy<Value = Edit> {
    let key = prop::sample::select(vec!['a', 'b', 'c', 'd']);
    prop_oneof![
        (key.clone(), any::<u8>()).prop_map(|(k, v)| Edit::Insert(k, v)),
        key.clone().prop_map(Edit::Remove),
        key.prop_map(Edit::Bump),
        Just(Edit::Flip),
        Just(Edit::Noop),
    ]
}

/// One step of a session driven from outside.
#[derive(Debug, Clone)]
enum Step {
    Command(Edit),
    Undo,
    Redo,
}

fn arb_step() -> impl Strategy<Value = Step> {
    prop_oneof![
        3 => arb_edit().prop_map(Step::Command),
        1 => Just(Step::Undo),
        1 => Just(Step::Redo),
    ]
}

fn run(history: &mut History<Board>, edit: &Edit) {
    history.execute(edit.label(), |board| edit.apply(board));
}

// ── Scenarios ──────────────────────────────────────────────────────────

#[test]
fn test_undo_redo_walkthrough() {
    let mut history = History::<Board>::default();
    let s0 = history.document().clone();

    run(&mut history, &Edit::Insert('a', 1));
    let s1 = history.document().clone();
    run(&mut history, &Edit::Flip);
    let s2 = history.document().clone();

    assert_eq!(history.undo().unwrap(), "Flip");
    assert_eq!(history.document(), &s1);
    assert_eq!(history.undo().unwrap(), "Insert('a', 1)");
    assert_eq!(history.document(), &s0);
    assert!(matches!(history.undo(), Err(HistoryError::NothingToUndo)));

    assert_eq!(history.redo().unwrap(), "Insert('a', 1)");
    assert_eq!(history.document(), &s1);
    assert_eq!(history.redo().unwrap(), "Flip");
    assert_eq!(history.document(), &s2);
    assert!(matches!(history.redo(), Err(HistoryError::NothingToRedo)));
}

#[test]
fn test_noop_commands_do_not_add_undo_steps() {
    let mut history = History::<Board>::default();
    run(&mut history, &Edit::Insert('a', 1));
    run(&mut history, &Edit::Noop);
    run(&mut history, &Edit::Noop);
    run(&mut history, &Edit::Remove('z'));

    assert_eq!(history.undo_depth(), 1);
    assert_eq!(history.undo().unwrap(), "Insert('a', 1)");
    assert!(history.document().cards.is_empty());
    assert!(!history.can_undo());
}

#[test]
fn test_out_of_band_reset_is_skipped_by_undo() {
    let mut history = History::<Board>::default();
    run(&mut history, &Edit::Insert('a', 1));
    run(&mut history, &Edit::Insert('b', 2));

    // Bypass commit and put the board back where the last command started.
    history.document_mut().cards.pop();

    assert_eq!(history.undo().unwrap(), "Insert('a', 1)");
    assert!(history.document().cards.is_empty());
}

#[test]
fn test_new_command_after_undo_discards_future() {
    let mut history = History::<Board>::default();
    run(&mut history, &Edit::Insert('a', 1));
    run(&mut history, &Edit::Insert('b', 2));
    history.undo().unwrap();

    run(&mut history, &Edit::Insert('c', 3));
    assert!(matches!(history.redo(), Err(HistoryError::NothingToRedo)));
    assert_eq!(history.document().cards, vec![('a', 1), ('c', 3)]);
}

#[test]
fn test_depth_cap_limits_how_far_back_undo_goes() {
    let mut history = History::new(Board::default(), HistoryConfig::with_max_depth(2));
    for (i, key) in ['a', 'b', 'c', 'd'].into_iter().enumerate() {
        run(&mut history, &Edit::Insert(key, i as u8));
    }

    history.undo().unwrap();
    history.undo().unwrap();
    assert!(matches!(history.undo(), Err(HistoryError::NothingToUndo)));
    assert_eq!(history.document().cards, vec![('a', 0), ('b', 1)]);
}

// ── Properties ─────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn undo_everything_then_redo_everything(edits in prop::collection::vec(arb_edit(), 0..30)) {
        let mut history = History::<Board>::default();
        for edit in &edits {
            run(&mut history, edit);
        }
        let last = history.document().clone();

        while history.undo().is_ok() {}
        prop_assert_eq!(history.document(), &Board::default());

        while history.redo().is_ok() {}
        prop_assert_eq!(history.document(), &last);
    }

    #[test]
    fn undo_then_redo_is_identity(
        edits in prop::collection::vec(arb_edit(), 1..20),
        back in 1usize..10,
    ) {
        let mut history = History::<Board>::default();
        for edit in &edits {
            run(&mut history, edit);
        }
        let before = history.document().clone();

        let mut undone = Vec::new();
        for _ in 0..back {
            match history.undo() {
                Ok(label) => undone.push(label),
                Err(_) => break,
            }
        }
        let mut redone = Vec::new();
        for _ in 0..undone.len() {
            redone.push(history.redo().unwrap());
        }
        undone.reverse();

        prop_assert_eq!(history.document(), &before);
        prop_assert_eq!(redone, undone);
    }

    #[test]
    fn random_sessions_keep_cards_unique(steps in prop::collection::vec(arb_step(), 0..60)) {
        let mut history = History::<Board>::default();
        for step in &steps {
            match step {
                Step::Command(edit) => run(&mut history, edit),
                Step::Undo => {
                    let _ = history.undo();
                }
                Step::Redo => {
                    let _ = history.redo();
                }
            }
            let cards = &history.document().cards;
            for (i, a) in cards.iter().enumerate() {
                prop_assert!(cards[i + 1..].iter().all(|b| b.0 != a.0));
            }
        }
    }
}
